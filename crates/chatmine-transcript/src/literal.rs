//! Discovery of JSON object literals embedded in free text.
//!
//! Every `{` is a potential start. From there a depth counter grows the
//! candidate until the matching `}` brings the depth back to zero, and the
//! candidate is handed to `serde_json`. A relevant object is consumed whole;
//! anything else (invalid JSON, or an object the filter rejects) is dropped
//! and the next `{` is tried, which may lie inside the dropped candidate.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Relevance term applied to parsed literals unless configured otherwise.
pub const DEFAULT_LITERAL_FILTER: &str = "scene";

/// How braces are counted while growing a candidate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BraceScan {
    /// Count every `{` and `}`, including those inside JSON strings.
    /// A string value holding a brace can end a candidate early.
    #[default]
    Naive,
    /// Ignore braces inside double-quoted strings, honouring `\` escapes.
    StringAware,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LiteralOptions {
    /// Case-insensitive substring the compact serialization must contain.
    /// Empty keeps every object.
    pub filter: String,
    pub scan: BraceScan,
}

impl Default for LiteralOptions {
    fn default() -> Self {
        Self {
            filter: DEFAULT_LITERAL_FILTER.to_string(),
            scan: BraceScan::default(),
        }
    }
}

/// Extract relevant JSON objects from `text` with the default options.
pub fn balanced_literals(text: &str) -> Vec<Value> {
    balanced_literals_with(text, &LiteralOptions::default())
}

/// Extract JSON objects from `text`, in document order.
pub fn balanced_literals_with(text: &str, options: &LiteralOptions) -> Vec<Value> {
    let bytes = text.as_bytes();
    let filter = options.filter.to_lowercase();
    let mut found = Vec::new();
    let mut pos = 0;

    while let Some(offset) = bytes[pos..].iter().position(|&b| b == b'{') {
        let start = pos + offset;
        let Some(end) = candidate_end(bytes, start, options.scan) else {
            pos = start + 1;
            continue;
        };

        // Braces are ASCII, so both ends sit on char boundaries.
        let candidate = &text[start..=end];
        match serde_json::from_str::<Value>(candidate) {
            Ok(value) => {
                if value.is_object() && is_relevant(&value, &filter) {
                    found.push(value);
                    pos = end + 1;
                } else {
                    pos = start + 1;
                }
            }
            Err(err) => {
                tracing::trace!(start, end, error = %err, "rejected literal candidate");
                pos = start + 1;
            }
        }
    }

    found
}

/// Index of the `}` that returns the depth to zero, if any.
fn candidate_end(bytes: &[u8], start: usize, scan: BraceScan) -> Option<usize> {
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (i, &b) in bytes.iter().enumerate().skip(start) {
        if scan == BraceScan::StringAware {
            if in_string {
                if escaped {
                    escaped = false;
                } else if b == b'\\' {
                    escaped = true;
                } else if b == b'"' {
                    in_string = false;
                }
                continue;
            }
            if b == b'"' {
                in_string = true;
                continue;
            }
        }

        match b {
            b'{' => depth += 1,
            b'}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(i);
                }
            }
            _ => {}
        }
    }
    None
}

fn is_relevant(value: &Value, filter: &str) -> bool {
    filter.is_empty() || value.to_string().to_lowercase().contains(filter)
}
