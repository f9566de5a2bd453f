use crate::config::KeywordConfig;
use crate::model::{Category, History, Message, Role};

/// Messages of any role mentioning a scene term, in history order.
pub fn scene_related<'a>(
    history: &'a History,
    config: &KeywordConfig,
) -> Vec<(&'a str, &'a Message)> {
    history
        .iter()
        .filter(|(_, m)| is_scene_related(m, config))
        .collect()
}

/// Assistant messages mentioning a spec term, in history order.
pub fn assistant_specs<'a>(
    history: &'a History,
    config: &KeywordConfig,
) -> Vec<(&'a str, &'a Message)> {
    history
        .iter()
        .filter(|(_, m)| is_assistant_spec(m, config))
        .collect()
}

/// Every category `message` falls into.
pub fn categories(message: &Message, config: &KeywordConfig) -> Vec<Category> {
    let mut out = Vec::new();
    if is_scene_related(message, config) {
        out.push(Category::Scene);
    }
    if is_assistant_spec(message, config) {
        out.push(Category::Spec);
    }
    out
}

fn is_scene_related(message: &Message, config: &KeywordConfig) -> bool {
    contains_any(&message.content, &config.scene)
}

fn is_assistant_spec(message: &Message, config: &KeywordConfig) -> bool {
    message.role == Role::Assistant && contains_any(&message.content, &config.spec)
}

/// Case-insensitive substring test; no word boundaries.
fn contains_any(content: &str, terms: &[String]) -> bool {
    let lowered = content.to_lowercase();
    terms
        .iter()
        .filter(|t| !t.is_empty())
        .any(|t| lowered.contains(&t.to_lowercase()))
}
