//! Table of contents generation for Jupyter notebooks.
//!
//! A header cell is a markdown cell whose first line looks like `## Setup`.
//! [`Notebook::add_anchor_tags`] appends an `<a class="anchor" id="..."></a>`
//! tag to every header cell lacking one, [`Notebook::write_toc`] then
//! inserts or refreshes a markdown cell linking to all the anchors.

mod anchor;
mod document;
mod error;
mod header;
mod io;
mod toc;
mod transform;

#[cfg(test)]
mod fixtures;

pub use self::anchor::{slugify, tag_line, AnchorIds};
pub use self::document::{Cell, CellType, NotebookDocument, Source};
pub use self::error::{Error, ParseError, Result};
pub use self::header::{anchor_tag, line_has_header, Header, HeaderCell};
pub use self::io::{load_notebook, save_notebook, to_json_string};
pub use self::toc::{toc_line, TocUpdate};
pub use self::transform::{classify, Classification, Notebook, NotebookOptions};
