//! Dereference-path annotations.
//!
//! An externsync value other than `"true"` names the synchronized object by
//! walking from a parameter, e.g. `pCreateInfo->pQueueFamilyIndices[]` or
//! `pSubmits[].pWaitSemaphores[]`. The expression is split into word runs
//! (a field name plus whatever punctuation follows it) and rendered as
//! plain English from the innermost access outwards.

use crate::conventions::Conventions;
use crate::error::{Error, Result};
use crate::extract::upper_first;

/// One word run of a dereference expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub field: String,
    /// Run is followed by `->` or `.`
    pub is_member: bool,
    /// Run is followed by `[]`
    pub is_array: bool,
}

/// Parsed dereference expression, outermost access first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerefPath {
    pub segments: Vec<Segment>,
}

fn is_word(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Tokenize a dereference expression.
///
/// Punctuation before the first field is ignored. Fails only when the
/// expression contains no field name at all.
pub fn parse(expr: &str) -> Result<DerefPath> {
    let mut segments = Vec::new();
    let mut rest = expr.trim_start_matches(|c: char| !is_word(c));

    while !rest.is_empty() {
        let word_end = rest.find(|c: char| !is_word(c)).unwrap_or(rest.len());
        let (field, tail) = rest.split_at(word_end);
        let marker_end = tail.find(is_word).unwrap_or(tail.len());
        let (markers, next) = tail.split_at(marker_end);

        segments.push(Segment {
            field: field.to_string(),
            is_member: markers.contains("->") || markers.contains('.'),
            is_array: markers.contains("[]"),
        });
        rest = next;
    }

    if segments.is_empty() {
        return Err(Error::MalformedAnnotation {
            value: expr.to_string(),
        });
    }
    Ok(DerefPath { segments })
}

impl DerefPath {
    /// True if any access in the path iterates an array.
    pub fn has_array(&self) -> bool {
        self.segments.iter().any(|s| s.is_array)
    }

    /// Render as a sentence fragment ending in "parameter".
    ///
    /// Segments are visited in reverse, so `foo->bar[]` reads
    /// "Each element of the pname:bar member of the pname:foo parameter".
    pub fn render(&self, conventions: &dyn Conventions) -> String {
        let mut text = String::new();
        for seg in self.segments.iter().rev() {
            if seg.is_member {
                text.push_str("member of ");
            }
            if seg.is_array {
                text.push_str("each element of ");
            }
            text.push_str("the ");
            text.push_str(&conventions.param_name(&seg.field));
            text.push(' ');
        }
        text.push_str("parameter");
        upper_first(&text)
    }
}
