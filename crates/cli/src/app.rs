use crate::command;
use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
pub enum RunCmd {
    /// Insert the missing anchor tags and write the table of contents.
    #[clap(name = "generate")]
    Generate(command::generate::Generate),
    /// Print the table of contents of a notebook without touching it.
    #[clap(name = "preview")]
    Preview(command::preview::Preview),
}

/// nbtoc CLI arguments shared by all the subcommands.
#[derive(Parser, Debug)]
pub struct Args {
    /// Set the log level (DEBUG, INFO, WARNING, ERROR, CRITICAL).
    ///
    /// Overrides `max-level` of the config file.
    #[clap(short = 'l', long, global = true, value_parser = crate::logging::parse_level)]
    pub log_level: Option<tracing::Level>,

    /// Write the logs to this file instead of stderr.
    #[clap(long, global = true)]
    pub log: Option<PathBuf>,

    /// Specify the path of the config file.
    #[clap(long, global = true)]
    pub config_file: Option<PathBuf>,
}

impl RunCmd {
    pub fn run(self, args: Args) -> Result<()> {
        let nbtoc_config::LoadedConfig {
            config,
            file_path,
            maybe_error,
        } = nbtoc_config::load_config(args.config_file);

        let max_level = args.log_level.unwrap_or_else(|| {
            crate::logging::parse_level(&config.log.max_level).unwrap_or(tracing::Level::INFO)
        });
        let log_file = args
            .log
            .or_else(|| config.log.log_file.as_ref().map(PathBuf::from));

        // Flushes the file logs on drop.
        let _guard = crate::logging::init_logging(max_level, log_file.as_deref())?;

        if let Some(err) = maybe_error {
            tracing::warn!(?file_path, "Invalid config file, using the defaults: {err}");
        } else {
            tracing::debug!(?file_path, ?config, "Loaded config");
        }

        match self {
            Self::Generate(generate) => generate.run(&config),
            Self::Preview(preview) => preview.run(&config),
        }
    }
}
