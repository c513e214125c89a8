//! Candidate structure encoding
//!
//! A conversion service may attach alternatives for one position of a
//! candidate by appending a group to the candidate string:
//!
//! ```text
//! 日本{2:ニッポン|にっぽん}
//! ^^^^ ^ ^^^^^^^^^^^^^^^^
//! text anchor alternatives
//! ```
//!
//! A string is structured iff it ends with `}`. The anchor cannot contain
//! `:` and alternatives cannot contain `{` or `|`.

use crate::error::StructureError;

const GROUP_OPEN: char = '{';
const GROUP_CLOSE: char = '}';
const ANCHOR_SEPARATOR: char = ':';
const ITEM_SEPARATOR: char = '|';

/// Alternatives attached to one position of a candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubCandidateGroup {
    /// Which line/position of the candidate the alternatives belong to
    pub anchor: String,
    /// Alternatives in service order
    pub items: Vec<String>,
}

/// A decoded candidate string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateEntry {
    pub text: String,
    pub sub_candidates: Option<SubCandidateGroup>,
}

impl CandidateEntry {
    /// A candidate without internal structure.
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            sub_candidates: None,
        }
    }

    pub fn with_sub_candidates(
        text: impl Into<String>,
        anchor: impl Into<String>,
        items: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            text: text.into(),
            sub_candidates: Some(SubCandidateGroup {
                anchor: anchor.into(),
                items: items.into_iter().map(Into::into).collect(),
            }),
        }
    }

    /// Decode a candidate string as returned by a conversion service.
    pub fn parse(raw: &str) -> Result<Self, StructureError> {
        let Some(body) = raw.strip_suffix(GROUP_CLOSE) else {
            return Ok(Self::plain(raw));
        };
        let Some(open) = body.rfind(GROUP_OPEN) else {
            return Err(StructureError::Unbalanced);
        };

        let text = &body[..open];
        let group = &body[open + GROUP_OPEN.len_utf8()..];
        if text.is_empty() {
            return Err(StructureError::EmptyText);
        }

        let Some((anchor, items)) = group.split_once(ANCHOR_SEPARATOR) else {
            return Err(StructureError::MissingAnchor);
        };
        let anchor = anchor.trim();
        if anchor.is_empty() {
            return Err(StructureError::MissingAnchor);
        }

        let items: Vec<String> = items
            .split(ITEM_SEPARATOR)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();
        if items.is_empty() {
            return Err(StructureError::NoAlternatives);
        }

        Ok(Self::with_sub_candidates(text, anchor, items))
    }

    /// Encode back into the service wire form.
    pub fn encode(&self) -> String {
        match &self.sub_candidates {
            None => self.text.clone(),
            Some(group) => format!(
                "{}{}{}{}{}{}",
                self.text,
                GROUP_OPEN,
                group.anchor,
                ANCHOR_SEPARATOR,
                group.items.join(&ITEM_SEPARATOR.to_string()),
                GROUP_CLOSE
            ),
        }
    }

    pub fn has_sub_candidates(&self) -> bool {
        self.sub_candidates.is_some()
    }
}
