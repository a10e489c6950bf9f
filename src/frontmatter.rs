//! Front matter extraction.
//!
//! A post may begin with a metadata block delimited by `---` lines, holding a
//! YAML mapping with the recognized keys `title`, `tag`, `ttr`, `slug` and
//! `summary`. Documents without the leading marker pass through untouched
//! with no metadata. A document *with* the marker must contain a valid
//! mapping: an empty or malformed block is an error, never silently treated
//! as "no metadata".

use serde::{Deserialize, Serialize};

use crate::error::Result;

const MARKER: &str = "---";

/// Fed to the YAML parser in place of an empty metadata block. It is a plain
/// scalar, not a mapping, so an empty block fails as *invalid* metadata
/// rather than succeeding as *absent* metadata.
const EMPTY_BLOCK_PLACEHOLDER: &str = "this is not good";

/// Metadata recognized at the head of a post. Unknown keys are ignored and
/// no individual field is required at parse time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrontMatter {
    pub title: Option<String>,
    pub tag: Option<String>,
    pub ttr: Option<String>,
    pub slug: Option<String>,
    pub summary: Option<String>,
}

/// Result of splitting a document: the typed metadata block, if any, plus
/// the remaining body text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parsed {
    pub front_matter: Option<FrontMatter>,
    pub body: String,
}

/// Splits `input` into front matter and body.
///
/// The block between the markers is parsed into a [`serde_yaml::Value`]
/// first and then coerced into [`FrontMatter`], so shape mismatches surface
/// as a parse error carrying the offending location.
pub fn parse(input: &str) -> Result<Parsed> {
    let trimmed = input.trim_start();
    let Some(after_marker) = trimmed.strip_prefix(MARKER) else {
        return Ok(Parsed {
            front_matter: None,
            body: input.to_string(),
        });
    };

    // Three parts: the (empty) prefix before the first marker is already
    // gone, the block runs to the next marker, everything after is body.
    // A missing closing marker means the whole remainder is the block.
    let (block, body) = match after_marker.find(MARKER) {
        Some(end) => (
            &after_marker[..end],
            after_marker[end + MARKER.len()..].trim_start(),
        ),
        None => (after_marker, ""),
    };

    let block = if block.trim().is_empty() {
        EMPTY_BLOCK_PLACEHOLDER
    } else {
        block
    };

    let value: serde_yaml::Value = serde_yaml::from_str(block)?;
    let front_matter: FrontMatter = serde_yaml::from_value(value)?;

    Ok(Parsed {
        front_matter: Some(front_matter),
        body: body.to_string(),
    })
}
