use super::notebook_options;
use crate::clipboard::copy_to_clipboard;
use anyhow::{Context, Result};
use clap::Parser;
use nbtoc_config::Config;
use notebook::{load_notebook, save_notebook, Notebook};
use std::path::PathBuf;

/// Add the missing anchor tags and insert or update the table of contents.
#[derive(Parser, Debug, Clone)]
pub struct Generate {
    /// Jupyter Notebook file to process.
    #[clap(index = 1)]
    file: PathBuf,

    /// Don't add anchor tags to header cells if missing.
    #[clap(short = 'a', long)]
    skip_anchor_tags: bool,

    /// Don't update the TOC in the notebook or insert it if missing.
    #[clap(short = 'w', long)]
    skip_write_toc: bool,

    /// If inserting a missing TOC, don't skip the overall title cell but
    /// always insert into the first cell.
    #[clap(short, long)]
    force_toc_in_first_cell: bool,

    /// Copy the generated TOC to the clipboard.
    #[clap(short, long)]
    clipboard: bool,

    /// Report the changes without writing the notebook.
    #[clap(short = 'n', long)]
    dry_run: bool,
}

impl Generate {
    pub fn run(self, config: &Config) -> Result<()> {
        let document = load_notebook(&self.file)?;

        let mut notebook = Notebook::with_options(
            document,
            notebook_options(config, self.force_toc_in_first_cell),
        )
        .with_context(|| format!("failed to parse the headers of {}", self.file.display()))?;

        if !self.skip_anchor_tags {
            notebook.add_anchor_tags()?;
        }

        if !self.skip_write_toc {
            let toc_update = notebook.write_toc()?;
            tracing::debug!(?toc_update, "Processed TOC cell");
        }

        if !notebook.is_updated() {
            println!("No changes to be saved.");
        } else if self.dry_run {
            println!("Dry run, not saving updates to {}", self.file.display());
        } else {
            println!("Saving updates to {}", self.file.display());
            save_notebook(&self.file, notebook.document())?;
        }

        if self.clipboard {
            println!("Copying Table of Contents Markdown to clipboard.");
            copy_to_clipboard(notebook.render_toc_markdown())?;
        }

        Ok(())
    }
}
