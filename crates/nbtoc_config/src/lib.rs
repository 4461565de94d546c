use dirs::Dirs;
use serde::{Deserialize, Deserializer, Serialize};
use std::path::{Path, PathBuf};

/// Header phrases identifying an existing TOC cell, compared against the
/// trimmed and lowercased header text.
pub const DEFAULT_TOC_SYNONYMS: &[&str] = &[
    "toc",
    "table of contents",
    "table of content",
    "inhalt",
    "inhaltsverzeichnis",
];

pub struct LoadedConfig {
    pub config: Config,
    pub file_path: Option<PathBuf>,
    pub maybe_error: Option<toml::de::Error>,
}

fn read_config(config_file: &Path) -> (Config, Option<toml::de::Error>) {
    let contents = match std::fs::read_to_string(config_file) {
        Ok(contents) => contents,
        Err(err) => {
            tracing::debug!(?config_file, %err, "Config file unavailable, using defaults");
            return (Config::default(), None);
        }
    };

    match toml::from_str(&contents) {
        Ok(config) => (config, None),
        Err(err) => (Config::default(), Some(err)),
    }
}

/// Loads the config from `specified_config_file`, falling back to the
/// default location in the platform config directory.
///
/// A missing file is not an error. A malformed file yields the default
/// config along with the parse error so that the caller decides how loud
/// to be about it.
pub fn load_config(specified_config_file: Option<PathBuf>) -> LoadedConfig {
    let Some(config_file) = specified_config_file.or_else(Dirs::config_file) else {
        return LoadedConfig {
            config: Config::default(),
            file_path: None,
            maybe_error: None,
        };
    };

    let (config, maybe_error) = read_config(&config_file);

    LoadedConfig {
        config,
        file_path: Some(config_file),
        maybe_error,
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "kebab-case", default, deny_unknown_fields)]
pub struct LogConfig {
    /// Specify the log file path.
    ///
    /// Logs are written to stderr when unset.
    pub log_file: Option<String>,

    /// Specify the max log level.
    ///
    /// Overridden by the `--log-level` command line option.
    pub max_level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            log_file: None,
            max_level: "info".into(),
        }
    }
}

/// Rendering of the table of contents.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "kebab-case", default, deny_unknown_fields)]
pub struct TocConfig {
    /// Header line of a newly inserted TOC cell.
    ///
    /// Must be a markdown header like `## Contents`, otherwise the inserted
    /// cell would not be found again on the next run.
    #[serde(deserialize_with = "deserialize_toc_header")]
    pub header: String,

    /// Indent unit, repeated once per header level.
    pub indent: String,

    /// Bullet preceding each TOC link.
    pub bullet: String,

    /// Extra header phrases that mark a cell as the TOC cell, in addition
    /// to the builtin ones.
    ///
    /// # Example
    ///
    /// ```toml
    /// [toc]
    /// synonyms = ["sommaire", "indice"]
    /// ```
    pub synonyms: Vec<String>,
}

impl Default for TocConfig {
    fn default() -> Self {
        Self {
            header: String::from("## Table of Contents"),
            indent: String::from("\t"),
            bullet: String::from("*"),
            synonyms: Vec::new(),
        }
    }
}

/// Returns true if `line` is a single markdown header line, `#`s followed by a space.
pub fn is_header_line(line: &str) -> bool {
    let line = line.trim_end_matches(['\n', '\r']);
    let text = line.trim_start_matches('#');
    text.len() < line.len() && text.starts_with(' ') && !text.contains(['\n', '\r'])
}

fn deserialize_toc_header<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let header = String::deserialize(deserializer)?;
    if is_header_line(&header) {
        Ok(header)
    } else {
        Err(serde::de::Error::custom(format!(
            "TOC header must be a markdown header like `## Contents`, got {header:?}"
        )))
    }
}

impl TocConfig {
    /// Returns true if `header_text` names a table of contents.
    pub fn is_toc_header(&self, header_text: &str) -> bool {
        let normalized = header_text.trim().to_lowercase();
        DEFAULT_TOC_SYNONYMS.contains(&normalized.as_str())
            || self
                .synonyms
                .iter()
                .any(|s| s.trim().to_lowercase() == normalized)
    }
}

/// Generation of the anchor ids.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "kebab-case", default, deny_unknown_fields)]
pub struct AnchorConfig {
    /// Number of leading header words forming the anchor slug.
    pub slug_words: usize,

    /// Maximum number of `_<n>` suffixes tried when a slug is taken.
    pub max_retries: usize,
}

impl Default for AnchorConfig {
    fn default() -> Self {
        Self {
            slug_words: 3,
            max_retries: 50,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "kebab-case", default, deny_unknown_fields)]
pub struct Config {
    /// Log configuration.
    pub log: LogConfig,

    /// Table of contents configuration.
    pub toc: TocConfig,

    /// Anchor tag configuration.
    pub anchor: AnchorConfig,
}
