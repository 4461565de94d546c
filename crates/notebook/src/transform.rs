use crate::document::{Cell, CellType, NotebookDocument};
use crate::error::Result;
use crate::header::{line_has_header, Header, HeaderCell};
use nbtoc_config::{AnchorConfig, TocConfig};

#[derive(Debug, Clone, Default)]
pub struct NotebookOptions {
    /// Insert a missing TOC into the very first cell and tag the title cell
    /// like any other header cell.
    pub force_toc_in_first_cell: bool,
    pub toc: TocConfig,
    pub anchor: AnchorConfig,
}

/// Header, TOC and title cells derived from the cell sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Classification {
    /// In document order.
    pub header_cells: Vec<HeaderCell>,
    /// Index of the cell holding the table of contents.
    pub toc_cell: Option<usize>,
    /// Index of the overall title, i.e. the first cell if it is a level-0 header.
    pub title_cell: Option<usize>,
}

/// Classifies the cells, failing on the first malformed header line.
pub fn classify(cells: &[Cell], toc_config: &TocConfig) -> Result<Classification> {
    let (mut markdown, mut code, mut other) = (0, 0, 0);
    for cell in cells {
        match cell.cell_type {
            CellType::Markdown => markdown += 1,
            CellType::Code => code += 1,
            CellType::Other(_) => other += 1,
        }
    }
    tracing::info!("Identified {markdown} markdown, {code} code and {other} other cells.");

    let header_cells = cells
        .iter()
        .enumerate()
        .filter(|(_, cell)| cell.is_markdown())
        .filter_map(|(index, cell)| {
            cell.first_line()
                .filter(|line| line_has_header(line))
                .map(|line| (index, line))
        })
        .map(|(index, line)| -> Result<HeaderCell> {
            Ok(HeaderCell {
                index,
                header: Header::parse(line)?,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    let tagged = header_cells.iter().filter(|c| c.has_anchor_tag()).count();
    tracing::info!(
        "Identified {tagged} header cells with and {} header cells without anchor tag.",
        header_cells.len() - tagged
    );

    let default_toc_header = toc_config.header.trim();
    let toc_cell = header_cells
        .iter()
        .find(|c| {
            toc_config.is_toc_header(&c.header.text)
                || cells[c.index]
                    .first_line()
                    .is_some_and(|line| line.trim() == default_toc_header)
        })
        .map(|c| c.index);

    let title_cell = header_cells
        .first()
        .filter(|c| c.index == 0 && c.header.level == 0)
        .map(|c| c.index);

    Ok(Classification {
        header_cells,
        toc_cell,
        title_cell,
    })
}

/// Notebook transformer owning the document being edited.
#[derive(Debug, Clone)]
pub struct Notebook {
    pub(crate) document: NotebookDocument,
    pub(crate) options: NotebookOptions,
    pub(crate) classification: Classification,
    pub(crate) updated: bool,
}

impl Notebook {
    pub fn new(document: NotebookDocument, force_toc_in_first_cell: bool) -> Result<Self> {
        Self::with_options(
            document,
            NotebookOptions {
                force_toc_in_first_cell,
                ..Default::default()
            },
        )
    }

    pub fn with_options(document: NotebookDocument, options: NotebookOptions) -> Result<Self> {
        let classification = classify(&document.cells, &options.toc)?;
        Ok(Self {
            document,
            options,
            classification,
            updated: false,
        })
    }

    /// Recomputes the classification after a structural change of the cells.
    pub fn refresh(&mut self) -> Result<()> {
        self.classification = classify(&self.document.cells, &self.options.toc)?;
        Ok(())
    }

    /// Whether the document has been mutated since it was loaded.
    pub fn is_updated(&self) -> bool {
        self.updated
    }

    pub fn document(&self) -> &NotebookDocument {
        &self.document
    }

    pub fn into_document(self) -> NotebookDocument {
        self.document
    }

    pub fn options(&self) -> &NotebookOptions {
        &self.options
    }

    pub fn classification(&self) -> &Classification {
        &self.classification
    }

    pub fn header_cells(&self) -> &[HeaderCell] {
        &self.classification.header_cells
    }

    pub fn toc_cell(&self) -> Option<&Cell> {
        self.classification.toc_cell.map(|i| &self.document.cells[i])
    }

    pub fn title_cell(&self) -> Option<&Cell> {
        self.classification.title_cell.map(|i| &self.document.cells[i])
    }
}
