use crate::document::NotebookDocument;
use crate::error::{Error, Result};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::path::Path;

/// Reads and parses the notebook at `path`.
pub fn load_notebook(path: impl AsRef<Path>) -> Result<NotebookDocument> {
    let path = path.as_ref();

    let contents = std::fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&contents).map_err(|source| Error::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// Serializes the notebook the way Jupyter itself writes `.ipynb` files:
/// sorted keys, one space indentation and a trailing newline.
pub fn to_json_string(document: &NotebookDocument) -> serde_json::Result<String> {
    // Going through `Value` sorts the keys as `serde_json::Map` is a `BTreeMap`.
    let value = serde_json::to_value(document)?;

    let mut buf = Vec::with_capacity(4096);
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b" "));
    value.serialize(&mut serializer)?;
    buf.push(b'\n');

    // Serializer only ever emits valid UTF-8.
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Overwrites the notebook at `path`.
pub fn save_notebook(path: impl AsRef<Path>, document: &NotebookDocument) -> Result<()> {
    let path = path.as_ref();

    let json = to_json_string(document).map_err(|source| Error::Json {
        path: path.to_path_buf(),
        source,
    })?;

    std::fs::write(path, json).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })
}
