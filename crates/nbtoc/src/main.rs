use clap::Parser;
use cli::command::generate::Generate;
use cli::{Args, RunCmd};
use std::ffi::OsString;

const BUILD_TIME: &str = include!(concat!(env!("OUT_DIR"), "/build_time.txt"));

mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

#[derive(Parser, Debug)]
pub enum Cmd {
    /// Display the current version.
    #[clap(name = "version")]
    Version,

    /// Run the nbtoc.
    #[clap(flatten)]
    Run(Box<RunCmd>),

    // `nbtoc <FILE> [OPTIONS]` as a shorthand of `nbtoc generate <FILE> [OPTIONS]`.
    #[clap(external_subcommand)]
    File(Vec<OsString>),
}

/// Parses the arguments following a bare notebook path as `generate` ones.
fn generate_shorthand(argv: Vec<OsString>) -> Result<RunCmd, clap::Error> {
    let generate = Generate::try_parse_from(std::iter::once(OsString::from("nbtoc")).chain(argv))?;
    Ok(RunCmd::Generate(generate))
}

fn run(run_cmd: RunCmd, args: Args) {
    if let Err(e) = run_cmd.run(args) {
        eprintln!("error: {e:?}");
        std::process::exit(1);
    }
}

#[derive(Parser, Debug)]
#[clap(
    name = "nbtoc",
    about = "Generate a table of contents with anchor links in Jupyter notebooks",
    disable_version_flag = true
)]
pub struct Nbtoc {
    #[clap(flatten)]
    pub args: Args,

    #[clap(subcommand)]
    pub cmd: Cmd,
}

fn main() {
    let nbtoc = Nbtoc::parse();

    match nbtoc.cmd {
        Cmd::Version => {
            println!(
                "version {}{}, compiled at: {}, built for {} by {}.",
                built_info::PKG_VERSION,
                built_info::GIT_VERSION.map_or_else(|| "".to_owned(), |v| format!(" (git {v})")),
                BUILD_TIME,
                built_info::TARGET,
                built_info::RUSTC_VERSION
            );
        }
        Cmd::Run(run_cmd) => run(*run_cmd, nbtoc.args),
        Cmd::File(argv) => {
            let run_cmd = generate_shorthand(argv).unwrap_or_else(|e| e.exit());
            run(run_cmd, nbtoc.args);
        }
    }
}
