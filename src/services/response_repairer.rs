//! Recovers the JSON array payload from a free-form model reply.
//!
//! The scan runs in fixed stages over byte positions of the reply:
//! outer brackets, then a markdown fence (with brackets searched inside it),
//! then passthrough. Nothing is ever synthesized; every result is a slice of
//! the input.

const FENCE: &str = "```";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Repaired<'a> {
    /// Slice from the first `[` to the last `]` of the reply.
    Bracketed(&'a str),
    /// Content of a markdown fence, narrowed to its brackets when present.
    Fenced(&'a str),
    /// Nothing recognisable; the reply unchanged.
    Passthrough(&'a str),
}

impl<'a> Repaired<'a> {
    pub fn as_str(&self) -> &'a str {
        match *self {
            Repaired::Bracketed(s) | Repaired::Fenced(s) | Repaired::Passthrough(s) => s,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Repaired::Bracketed(_) => "bracketed",
            Repaired::Fenced(_) => "fenced",
            Repaired::Passthrough(_) => "passthrough",
        }
    }
}

enum Stage<'a> {
    OuterBrackets,
    Fence,
    FencedBrackets(&'a str),
    Passthrough,
}

pub fn repair_response(raw: &str) -> Repaired<'_> {
    let mut stage = Stage::OuterBrackets;
    loop {
        stage = match stage {
            Stage::OuterBrackets => match bracketed(raw) {
                Some(array) => return Repaired::Bracketed(array),
                None => Stage::Fence,
            },
            Stage::Fence => match fenced_block(raw) {
                Some(block) => Stage::FencedBrackets(block),
                None => Stage::Passthrough,
            },
            Stage::FencedBrackets(block) => {
                return Repaired::Fenced(bracketed(block).unwrap_or(block));
            }
            Stage::Passthrough => return Repaired::Passthrough(raw),
        };
    }
}

pub fn repair(raw: &str) -> &str {
    repair_response(raw).as_str()
}

/// First `[` through last `]`, if the last closes after the first opens.
fn bracketed(text: &str) -> Option<&str> {
    let start = text.find('[')?;
    let end = text.rfind(']')?;
    if end > start {
        Some(&text[start..=end])
    } else {
        None
    }
}

/// Trimmed content between the first fence and the last fence after it.
/// A language tag right after the opening fence (```json) is skipped along
/// with the rest of that line.
fn fenced_block(text: &str) -> Option<&str> {
    let open = text.find(FENCE)?;
    let after_fence = open + FENCE.len();

    let rest = &text[after_fence..];
    let tag_len = rest
        .find(|c: char| !(c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '+')))
        .unwrap_or(rest.len());
    let after_tag = after_fence + tag_len;

    let content_start = match text[after_tag..].find('\n') {
        Some(newline) => after_tag + newline + 1,
        None => after_tag,
    };

    let close = text.rfind(FENCE)?;
    if close <= open || close < content_start {
        return None;
    }

    Some(text[content_start..close].trim())
}
