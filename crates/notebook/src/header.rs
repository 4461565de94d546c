use crate::error::ParseError;
use once_cell::sync::Lazy;
use regex::Regex;

static HEADER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^#+ (.*)$").unwrap());

static HEADER_TEXT_BEFORE_ANCHOR: Lazy<Regex> = Lazy::new(|| Regex::new(r"^#+ (.*?)<a").unwrap());

static ANCHOR_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r#"<a.*class="anchor".*</a>"#).unwrap());

static ANCHOR_ID: Lazy<Regex> = Lazy::new(|| Regex::new(r#"id="(.*?)""#).unwrap());

fn strip_line_ending(line: &str) -> &str {
    line.trim_end_matches(['\n', '\r'])
}

/// Returns true if `line` is a markdown header line like `## Setup`.
pub fn line_has_header(line: &str) -> bool {
    HEADER.is_match(strip_line_ending(line))
}

/// Returns the inline markup carrying `anchor_id`, including the line terminator.
pub fn anchor_tag(anchor_id: &str) -> String {
    format!("<a class=\"anchor\" id=\"{anchor_id}\"></a>\n")
}

/// Parsed first line of a header cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    /// Zero-based, `#` is level 0, `##` is level 1 and so on.
    pub level: usize,
    /// Header text without the leading `#`s and the anchor tag.
    pub text: String,
    pub anchor_id: Option<String>,
}

impl Header {
    pub fn parse(line: &str) -> Result<Self, ParseError> {
        let line = strip_line_ending(line);

        let level = match line.find(' ') {
            Some(space) if space > 0 => space - 1,
            _ => return Err(ParseError::Level(line.to_string())),
        };

        let anchor_id = parse_anchor_id(line)?;

        let text_regex = if anchor_id.is_some() {
            &HEADER_TEXT_BEFORE_ANCHOR
        } else {
            &HEADER
        };

        let text = text_regex
            .captures(line)
            .and_then(|cap| cap.get(1))
            .map(|m| m.as_str().trim().to_string())
            .ok_or_else(|| ParseError::Text(line.to_string()))?;

        Ok(Self {
            level,
            text,
            anchor_id,
        })
    }

    pub fn has_anchor_tag(&self) -> bool {
        self.anchor_id.is_some()
    }
}

fn parse_anchor_id(line: &str) -> Result<Option<String>, ParseError> {
    let Some(tag) = ANCHOR_TAG.find(line) else {
        return Ok(None);
    };

    ANCHOR_ID
        .captures(tag.as_str())
        .and_then(|cap| cap.get(1))
        .map(|m| Some(m.as_str().to_string()))
        .ok_or_else(|| ParseError::MissingAnchorId(tag.as_str().to_string()))
}

/// A markdown cell whose first line is a header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderCell {
    /// Position of the cell in the notebook.
    pub index: usize,
    pub header: Header,
}

impl HeaderCell {
    pub fn has_anchor_tag(&self) -> bool {
        self.header.has_anchor_tag()
    }

    pub fn anchor_id(&self) -> Option<&str> {
        self.header.anchor_id.as_deref()
    }
}
