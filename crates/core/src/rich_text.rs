//! Rich-text blocks as delivered by the CMS blocks editor.
//!
//! Blocks are passed through structurally; formatting is not interpreted.

use serde::Serialize;
use serde_json::Value;

use crate::schema::{Checker, Schema};

/// An inline run of literal text inside a block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InlineSpan {
    #[serde(rename = "type")]
    pub kind: String,
    pub text: String,
}

/// A paragraph, heading, quote, or other top-level block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContentBlock {
    #[serde(rename = "type")]
    pub kind: String,
    /// Heading level, only sent for `heading` blocks.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<u32>,
    pub children: Vec<InlineSpan>,
}

/// Ordered block sequence.
pub type RichText = Vec<ContentBlock>;

impl ContentBlock {
    /// Concatenated text of all spans.
    pub fn plain_text(&self) -> String {
        self.children.iter().map(|s| s.text.as_str()).collect()
    }
}

/// Flatten blocks into plain text, one block per line.
pub fn plain_text(blocks: &[ContentBlock]) -> String {
    blocks
        .iter()
        .map(ContentBlock::plain_text)
        .collect::<Vec<_>>()
        .join("\n")
}

/// First `max_chars` characters of `text`, with `...` appended when cut.
pub fn excerpt(text: &str, max_chars: usize) -> String {
    let mut chars = text.chars();
    let head: String = chars.by_ref().take(max_chars).collect();
    if chars.next().is_some() {
        format!("{head}...")
    } else {
        head
    }
}

impl Schema for InlineSpan {
    const EXPECTED: &'static str = "inline span";

    fn check(value: &Value, cx: &mut Checker) -> Option<Self> {
        let obj = cx.object(value)?;
        let kind = cx.required(obj, "type");
        let text = cx.required(obj, "text");
        Some(Self {
            kind: kind?,
            text: text?,
        })
    }
}

impl Schema for ContentBlock {
    const EXPECTED: &'static str = "content block";

    fn check(value: &Value, cx: &mut Checker) -> Option<Self> {
        let obj = cx.object(value)?;
        let kind = cx.required(obj, "type");
        let level = cx.optional(obj, "level");
        let children = cx.required(obj, "children");
        Some(Self {
            kind: kind?,
            level: level?,
            children: children?,
        })
    }
}

/// Author biography: the CMS field accepts either representation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Biography {
    PlainText(String),
    RichText(RichText),
}

impl Biography {
    pub fn plain_text(&self) -> String {
        match self {
            Biography::PlainText(s) => s.clone(),
            Biography::RichText(blocks) => plain_text(blocks),
        }
    }

    /// Short teaser for author cards.
    ///
    /// Rich-text biographies only contribute their first block.
    pub fn excerpt(&self, max_chars: usize) -> String {
        match self {
            Biography::PlainText(s) => excerpt(s, max_chars),
            Biography::RichText(blocks) => blocks
                .first()
                .map(|b| excerpt(&b.plain_text(), max_chars))
                .unwrap_or_default(),
        }
    }
}

impl Schema for Biography {
    const EXPECTED: &'static str = "string or array of content blocks";

    fn check(value: &Value, cx: &mut Checker) -> Option<Self> {
        match value {
            Value::String(s) => Some(Biography::PlainText(s.clone())),
            Value::Array(_) => Vec::<ContentBlock>::check(value, cx).map(Biography::RichText),
            other => {
                cx.mismatch(Self::EXPECTED, other);
                None
            }
        }
    }
}
