use directories::ProjectDirs;
use std::path::PathBuf;
use std::sync::OnceLock;

pub struct Dirs;

impl Dirs {
    /// Project directory specifically for nbtoc.
    ///
    /// Returns `None` when no valid home directory can be retrieved from the
    /// operating system.
    pub fn project() -> Option<&'static ProjectDirs> {
        static CELL: OnceLock<Option<ProjectDirs>> = OnceLock::new();

        CELL.get_or_init(|| ProjectDirs::from("org", "nbtoc", "nbtoc"))
            .as_ref()
    }

    /// Default location of the config file.
    ///
    /// Linux: ~/.config/nbtoc/config.toml
    /// macOS: ~/Library/Application\ Support/org.nbtoc.nbtoc/config.toml
    /// Windows: ~\AppData\Roaming\nbtoc\nbtoc\config\config.toml
    pub fn config_file() -> Option<PathBuf> {
        Self::project().map(|dirs| dirs.config_dir().join("config.toml"))
    }
}
