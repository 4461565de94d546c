pub mod generate;
pub mod preview;

use nbtoc_config::Config;
use notebook::NotebookOptions;

fn notebook_options(config: &Config, force_toc_in_first_cell: bool) -> NotebookOptions {
    NotebookOptions {
        force_toc_in_first_cell,
        toc: config.toc.clone(),
        anchor: config.anchor.clone(),
    }
}
