use super::notebook_options;
use anyhow::Result;
use clap::Parser;
use nbtoc_config::Config;
use notebook::{load_notebook, Notebook};
use std::io::Write;
use std::path::PathBuf;

/// Print the table of contents of a notebook to stdout.
#[derive(Parser, Debug, Clone)]
pub struct Preview {
    /// Jupyter Notebook file to read.
    #[clap(index = 1)]
    file: PathBuf,

    /// Include the header cells lacking an anchor tag as if the tags were
    /// generated, the notebook itself is left untouched.
    #[clap(long)]
    with_anchors: bool,

    /// Tag the overall title cell like any other header cell.
    #[clap(short, long)]
    force_toc_in_first_cell: bool,
}

impl Preview {
    pub fn render(&self, config: &Config) -> Result<String> {
        let document = load_notebook(&self.file)?;
        let mut notebook = Notebook::with_options(
            document,
            notebook_options(config, self.force_toc_in_first_cell),
        )?;

        if self.with_anchors {
            notebook.add_anchor_tags()?;
        }

        Ok(notebook.render_toc_markdown())
    }

    pub fn run(self, config: &Config) -> Result<()> {
        let toc = self.render(config)?;
        let stdout = std::io::stdout();
        let mut lock = stdout.lock();
        writeln!(lock, "{toc}")?;
        Ok(())
    }
}
