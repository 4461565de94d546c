use crate::error::{ParseError, Result};
use crate::header::{anchor_tag, Header};
use crate::Notebook;
use std::collections::HashSet;

/// Builds an anchor slug from the first `words` words of the lowercased header text.
///
/// `"`, `<` and `>` are dropped as they would end the `id` attribute or the tag.
pub fn slugify(text: &str, words: usize) -> String {
    let text = text.to_lowercase().replace(['"', '<', '>'], "");
    text.split_whitespace()
        .take(words)
        .collect::<Vec<_>>()
        .join("_")
}

/// Appends the anchor tag to the trimmed header line.
pub fn tag_line(line: &str, anchor_id: &str) -> String {
    format!("{} {}", line.trim(), anchor_tag(anchor_id))
}

/// Anchor ids in use across the notebook.
#[derive(Debug, Clone)]
pub struct AnchorIds {
    taken: HashSet<String>,
    max_retries: usize,
}

impl AnchorIds {
    pub fn new(taken: impl IntoIterator<Item = String>, max_retries: usize) -> Self {
        Self {
            taken: taken.into_iter().collect(),
            max_retries,
        }
    }

    pub fn contains(&self, anchor_id: &str) -> bool {
        self.taken.contains(anchor_id)
    }

    /// Reserves an id derived from `slug`, trying `<slug>_0`, `<slug>_1`, ...
    /// when the slug is already taken.
    ///
    /// The number of attempts is bounded by `max_retries`, once exhausted the
    /// last candidate is returned even if it is a duplicate.
    pub fn claim(&mut self, slug: &str) -> String {
        let mut candidate = slug.to_string();
        let mut tries = 0;

        while self.taken.contains(&candidate) && tries < self.max_retries {
            candidate = format!("{slug}_{tries}");
            tries += 1;
        }

        if self.taken.contains(&candidate) {
            tracing::warn!(
                slug,
                %candidate,
                tries,
                "Anchor id is still taken after exhausting the retries, the id will be duplicated"
            );
        }

        self.taken.insert(candidate.clone());

        candidate
    }
}

impl Notebook {
    /// Inserts an anchor tag into every header cell lacking one, except the
    /// TOC cell and, unless `force_toc_in_first_cell` is set, the title cell.
    ///
    /// Returns the number of inserted tags.
    pub fn add_anchor_tags(&mut self) -> Result<usize> {
        let mut anchor_ids = AnchorIds::new(
            self.classification
                .header_cells
                .iter()
                .filter_map(|c| c.header.anchor_id.clone()),
            self.options.anchor.max_retries,
        );
        tracing::debug!(current_anchor_ids = ?anchor_ids.taken, "Collected anchor ids");

        let toc_cell = self.classification.toc_cell;
        let title_cell = self.classification.title_cell;
        let force_title = self.options.force_toc_in_first_cell;

        let pending = self
            .classification
            .header_cells
            .iter()
            .enumerate()
            .filter(|(_, c)| {
                !c.has_anchor_tag()
                    && Some(c.index) != toc_cell
                    && (Some(c.index) != title_cell || force_title)
            })
            .map(|(pos, _)| pos)
            .collect::<Vec<_>>();

        if pending.is_empty() {
            tracing::info!("No anchor tags missing.");
            return Ok(0);
        }

        for &pos in &pending {
            let index = self.classification.header_cells[pos].index;
            let header = &self.classification.header_cells[pos].header;
            debug_assert!(!header.has_anchor_tag());

            let slug = slugify(&header.text, self.options.anchor.slug_words);
            let anchor_id = anchor_ids.claim(&slug);

            let cell = &mut self.document.cells[index];
            let Some(first_line) = cell.first_line() else {
                continue;
            };
            let tagged_line = tag_line(first_line, &anchor_id);
            let header = Header::parse(&tagged_line)?;
            if header.anchor_id.as_deref() != Some(anchor_id.as_str()) {
                return Err(ParseError::AnchorIdMismatch {
                    anchor_id,
                    line: tagged_line,
                }
                .into());
            }
            cell.replace_first_line(tagged_line);

            tracing::info!(%anchor_id, text = %header.text, "Generated anchor id");

            self.classification.header_cells[pos].header = header;
        }

        self.updated = true;

        Ok(pending.len())
    }
}
