use crate::document::Cell;
use crate::error::Result;
use crate::header::Header;
use crate::Notebook;
use nbtoc_config::TocConfig;

/// Formats a TOC entry like `\t* [Setup](#setup)`.
pub fn toc_line(header: &Header, anchor_id: &str, config: &TocConfig) -> String {
    format!(
        "{}{} [{}](#{anchor_id})",
        config.indent.repeat(header.level),
        config.bullet,
        header.text
    )
}

/// Outcome of [`Notebook::write_toc`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TocUpdate {
    /// No header carries an anchor, nothing to write.
    Skipped,
    /// The existing TOC is up to date.
    Unchanged,
    /// A new TOC cell has been inserted at `position`.
    Inserted { position: usize, lines: usize },
    /// The body of the existing TOC cell has been rewritten.
    Replaced { removed: usize, inserted: usize },
}

impl Notebook {
    /// Generates one TOC line per header cell carrying an anchor tag, in
    /// document order.
    ///
    /// Every line but the last ends with `\n`.
    pub fn generate_toc_lines(&self) -> Vec<String> {
        let untagged = self
            .header_cells()
            .iter()
            .filter(|c| !c.has_anchor_tag())
            .filter_map(|c| self.document.cells[c.index].first_line())
            .collect::<Vec<_>>();
        if !untagged.is_empty() {
            tracing::warn!(first_lines = ?untagged, "Skipping header cells without anchor tag");
        }

        let mut toc_lines = self
            .header_cells()
            .iter()
            .filter_map(|c| {
                c.anchor_id()
                    .map(|anchor_id| toc_line(&c.header, anchor_id, &self.options.toc))
            })
            .collect::<Vec<_>>();

        let count = toc_lines.len();
        for line in toc_lines.iter_mut().take(count.saturating_sub(1)) {
            line.push('\n');
        }

        tracing::info!("Parsed {count} header lines for Table of Contents.");

        toc_lines
    }

    /// Header line of a newly inserted TOC cell, always newline-terminated.
    pub fn toc_header_line(&self) -> String {
        let header = self.options.toc.header.trim_end_matches(['\n', '\r']);
        format!("{header}\n")
    }

    /// Renders the whole TOC, header line included, as a markdown snippet.
    pub fn render_toc_markdown(&self) -> String {
        let mut markdown = self.toc_header_line();
        markdown.extend(self.generate_toc_lines());
        markdown
    }

    /// Updates the existing TOC cell or inserts a new one.
    pub fn write_toc(&mut self) -> Result<TocUpdate> {
        let toc_lines = self.generate_toc_lines();
        if toc_lines.is_empty() {
            tracing::warn!("Skip writing TOC: No TOC Lines found/generated.");
            return Ok(TocUpdate::Skipped);
        }

        match self.classification.toc_cell {
            Some(index) => Ok(self.update_toc_cell(index, toc_lines)),
            None => self.insert_toc_cell(toc_lines),
        }
    }

    fn update_toc_cell(&mut self, index: usize, new_toc_lines: Vec<String>) -> TocUpdate {
        let source = &mut self.document.cells[index].source;

        // Jupyter joins the source lines as is, an unterminated header line
        // would swallow the first entry.
        let header_terminated = source.first_line().is_some_and(|l| l.ends_with('\n'));

        if header_terminated && source.lines().get(1..) == Some(new_toc_lines.as_slice()) {
            tracing::info!("Skipping update of TOC: No Changes");
            return TocUpdate::Unchanged;
        }

        let lines = source.lines_mut();
        let removed = lines.len().saturating_sub(1);
        tracing::info!("Removing {removed} old lines from TOC.");
        lines.truncate(1);

        if let Some(header_line) = lines.first_mut() {
            if !header_line.ends_with('\n') {
                header_line.push('\n');
            }
        }

        let inserted = new_toc_lines.len();
        lines.extend(new_toc_lines);
        tracing::info!("Inserted {inserted} new lines into TOC.");

        self.updated = true;

        TocUpdate::Replaced { removed, inserted }
    }

    fn insert_toc_cell(&mut self, new_toc_lines: Vec<String>) -> Result<TocUpdate> {
        let header_line = self.toc_header_line();
        tracing::debug!(?header_line, "Used default header for TOC");

        let lines = new_toc_lines.len();
        let mut source = Vec::with_capacity(lines + 1);
        source.push(header_line);
        source.extend(new_toc_lines);
        tracing::info!("Generated TOC cell with {lines} lines.");

        let position = if self.classification.title_cell.is_some()
            && !self.options.force_toc_in_first_cell
        {
            1
        } else {
            0
        };
        tracing::debug!("Inserting TOC cell at position {position}.");

        self.document.cells.insert(position, Cell::markdown(source));
        self.updated = true;
        self.refresh()?;

        Ok(TocUpdate::Inserted { position, lines })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{code, markdown, notebook, notebook_with};
    use crate::NotebookOptions;

    fn tagged(level: &str, text: &str, id: &str) -> String {
        format!("{level} {text} <a class=\"anchor\" id=\"{id}\"></a>\n")
    }

    #[test]
    fn test_toc_line() {
        let header = Header {
            level: 1,
            text: "Setup".into(),
            anchor_id: Some("setup".into()),
        };
        assert_eq!(
            toc_line(&header, "setup", &TocConfig::default()),
            "\t* [Setup](#setup)"
        );

        let config = TocConfig {
            indent: "  ".into(),
            bullet: "-".into(),
            ..Default::default()
        };
        let header = Header { level: 2, ..header };
        assert_eq!(toc_line(&header, "setup", &config), "    - [Setup](#setup)");
    }

    #[test]
    fn test_generate_toc_lines_skips_untagged_headers() {
        let nb = notebook(vec![
            markdown(&["# Title\n"]),
            markdown(&[tagged("##", "Setup", "setup").as_str()]),
            markdown(&["## Untagged"]),
            markdown(&[tagged("###", "Load Data", "load_data").as_str(), "more"]),
        ]);

        assert_eq!(
            nb.generate_toc_lines(),
            vec![
                "\t* [Setup](#setup)\n".to_string(),
                "\t\t* [Load Data](#load_data)".to_string(),
            ]
        );
    }

    #[test]
    fn test_generate_toc_lines_is_pure() {
        let nb = notebook(vec![markdown(&[tagged("#", "Only", "only").as_str()])]);
        let before = nb.document().clone();
        assert_eq!(nb.generate_toc_lines(), vec!["* [Only](#only)".to_string()]);
        assert_eq!(nb.generate_toc_lines(), vec!["* [Only](#only)".to_string()]);
        assert_eq!(nb.document(), &before);
        assert!(!nb.is_updated());
    }

    #[test]
    fn test_render_toc_markdown() {
        let nb = notebook(vec![
            markdown(&[tagged("##", "A", "a").as_str()]),
            markdown(&[tagged("##", "B", "b").as_str()]),
        ]);
        assert_eq!(
            nb.render_toc_markdown(),
            "## Table of Contents\n\t* [A](#a)\n\t* [B](#b)"
        );
    }

    #[test]
    fn test_insert_after_title() {
        let mut nb = notebook(vec![
            markdown(&["# Title\n", "intro"]),
            markdown(&[tagged("##", "Setup", "setup").as_str()]),
        ]);

        assert_eq!(
            nb.write_toc().unwrap(),
            TocUpdate::Inserted {
                position: 1,
                lines: 1
            }
        );
        assert!(nb.is_updated());

        let cells = &nb.document().cells;
        assert_eq!(cells.len(), 3);
        assert_eq!(
            cells[1].source.lines().to_vec(),
            vec![
                "## Table of Contents\n".to_string(),
                "\t* [Setup](#setup)".to_string()
            ]
        );
        assert_eq!(nb.classification().toc_cell, Some(1));
        assert_eq!(nb.classification().title_cell, Some(0));
    }

    #[test]
    fn test_insert_first_without_title() {
        let mut nb = notebook(vec![
            code(&["import os"]),
            markdown(&[tagged("##", "Setup", "setup").as_str()]),
        ]);
        assert_eq!(
            nb.write_toc().unwrap(),
            TocUpdate::Inserted {
                position: 0,
                lines: 1
            }
        );
        assert_eq!(nb.classification().toc_cell, Some(0));
    }

    #[test]
    fn test_forced_insert_into_first_cell() {
        let mut nb = notebook_with(
            vec![
                markdown(&["# Title"]),
                markdown(&[tagged("##", "Setup", "setup").as_str()]),
            ],
            NotebookOptions {
                force_toc_in_first_cell: true,
                ..Default::default()
            },
        );
        assert_eq!(
            nb.write_toc().unwrap(),
            TocUpdate::Inserted {
                position: 0,
                lines: 1
            }
        );
        assert_eq!(nb.classification().title_cell, None);
    }

    #[test]
    fn test_unchanged_toc_keeps_clean() {
        let mut nb = notebook(vec![
            markdown(&["## TOC\n", "\t* [A](#a)\n", "\t* [B](#b)"]),
            markdown(&[tagged("##", "A", "a").as_str()]),
            markdown(&[tagged("##", "B", "b").as_str()]),
        ]);
        assert_eq!(nb.write_toc().unwrap(), TocUpdate::Unchanged);
        assert!(!nb.is_updated());
    }

    #[test]
    fn test_replace_stale_toc() {
        let mut nb = notebook(vec![
            markdown(&["## Table of Contents\n", "* [Old](#old)\n", "* [Gone](#gone)"]),
            markdown(&[tagged("##", "New", "new").as_str()]),
        ]);
        assert_eq!(
            nb.write_toc().unwrap(),
            TocUpdate::Replaced {
                removed: 2,
                inserted: 1
            }
        );
        assert!(nb.is_updated());
        assert_eq!(
            nb.toc_cell().unwrap().source.lines().to_vec(),
            vec![
                "## Table of Contents\n".to_string(),
                "\t* [New](#new)".to_string()
            ]
        );
    }

    #[test]
    fn test_header_only_toc_cell_gets_terminated() {
        let mut nb = notebook(vec![
            markdown(&["## Table of Contents"]),
            markdown(&[tagged("##", "Setup", "setup").as_str()]),
        ]);
        assert_eq!(
            nb.write_toc().unwrap(),
            TocUpdate::Replaced {
                removed: 0,
                inserted: 1
            }
        );

        let rendered = nb.toc_cell().unwrap().source.lines().concat();
        assert_eq!(rendered, "## Table of Contents\n\t* [Setup](#setup)");

        let mut second = Notebook::new(nb.into_document(), false).unwrap();
        assert_eq!(second.classification().toc_cell, Some(0));
        assert_eq!(second.write_toc().unwrap(), TocUpdate::Unchanged);
    }

    #[test]
    fn test_empty_toc_is_skipped() {
        let mut nb = notebook(vec![
            markdown(&["## Table of Contents\n", "* [Old](#old)"]),
            markdown(&["## Untagged"]),
        ]);
        let before = nb.document().clone();
        assert_eq!(nb.write_toc().unwrap(), TocUpdate::Skipped);
        assert!(!nb.is_updated());
        assert_eq!(nb.document(), &before);
    }

    #[test]
    fn test_transform_is_idempotent() {
        let cells = vec![
            markdown(&["# My Notebook\n", "Some intro."]),
            markdown(&["## My Cool Intro\n"]),
            code(&["print(1)"]),
            markdown(&["### Details on things\n", "text"]),
            markdown(&["## My Cool Intro revisited"]),
        ];

        let mut nb = notebook(cells);
        assert_eq!(nb.add_anchor_tags().unwrap(), 3);
        assert!(matches!(
            nb.write_toc().unwrap(),
            TocUpdate::Inserted { position: 1, .. }
        ));
        assert!(nb.is_updated());
        assert_eq!(
            nb.toc_cell().unwrap().source.lines().to_vec(),
            vec![
                "## Table of Contents\n".to_string(),
                "\t* [My Cool Intro](#my_cool_intro)\n".to_string(),
                "\t\t* [Details on things](#details_on_things)\n".to_string(),
                "\t* [My Cool Intro revisited](#my_cool_intro_0)".to_string(),
            ]
        );

        let mut second = Notebook::new(nb.into_document(), false).unwrap();
        assert_eq!(second.add_anchor_tags().unwrap(), 0);
        assert_eq!(second.write_toc().unwrap(), TocUpdate::Unchanged);
        assert!(!second.is_updated());
    }
}
