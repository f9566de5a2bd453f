use std::sync::LazyLock;

use regex::Regex;

use crate::classify::categories;
use crate::config::KeywordConfig;
use crate::literal::balanced_literals_with;
use crate::model::{ExtractionResult, Message};

/// Backtick and tilde fences as two arms of one pattern: the arm that opens
/// a block decides which fence closes it. Both fences must start a line; the
/// rest of the opening line is the info string (`c++`, `shell-session`, ...).
static FENCE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?ms)^```[^\n`]*\r?\n(.*?)^```|^~~~[^\n~]*\r?\n(.*?)^~~~").unwrap()
});

/// Extract fenced code block bodies from `text`, trimmed, in document order.
///
/// An opening fence without a matching close yields nothing, as does a block
/// with an empty body.
pub fn fenced_blocks(text: &str) -> Vec<String> {
    FENCE_PATTERN
        .captures_iter(text)
        .filter_map(|caps| {
            let body = caps.get(1).or_else(|| caps.get(2))?.as_str();
            if body.is_empty() {
                None
            } else {
                Some(body.trim().to_string())
            }
        })
        .collect()
}

/// Run both extractors and the classifier over one message.
pub fn extract_message(message: &Message, config: &KeywordConfig) -> ExtractionResult {
    ExtractionResult {
        categories: categories(message, config),
        code_blocks: fenced_blocks(&message.content),
        json_objects: balanced_literals_with(&message.content, &config.literal_options()),
    }
}
