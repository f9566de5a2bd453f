use chatmine_transcript::{
    assistant_specs, extract_message, scene_related, ExtractionResult, KeywordConfig, Message,
    Role, Transcript,
};
use serde::Serialize;

mod render;

pub use render::{render_json, render_text};

// ── Report model ──

/// Everything mined from one transcript, ready for rendering.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub chats: Vec<ChatReport>,
}

impl Report {
    pub fn message_count(&self) -> usize {
        self.chats.iter().map(|c| c.message_count).sum()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ChatReport {
    /// Zero-based position of the chat record in the export.
    pub index: usize,
    pub message_count: usize,
    pub scene_related: Vec<MessageEntry>,
    pub assistant_specs: Vec<MessageEntry>,
}

/// A matched message with its untruncated content and extraction output.
#[derive(Debug, Clone, Serialize)]
pub struct MessageEntry {
    pub id: String,
    pub role: Role,
    pub content: String,
    #[serde(flatten)]
    pub extraction: ExtractionResult,
}

// ── Building ──

/// Classify every chat of `transcript` and extract artifacts from each
/// matched message. Entry order follows history order.
pub fn build_report(transcript: &Transcript, config: &KeywordConfig) -> Report {
    let chats = transcript
        .chats
        .iter()
        .enumerate()
        .map(|(index, chat)| {
            let scene = scene_related(&chat.history, config);
            let specs = assistant_specs(&chat.history, config);
            tracing::debug!(
                chat = index,
                messages = chat.history.len(),
                scene = scene.len(),
                specs = specs.len(),
                "classified chat"
            );
            ChatReport {
                index,
                message_count: chat.history.len(),
                scene_related: entries(&scene, config),
                assistant_specs: entries(&specs, config),
            }
        })
        .collect();

    Report { chats }
}

fn entries(matched: &[(&str, &Message)], config: &KeywordConfig) -> Vec<MessageEntry> {
    matched
        .iter()
        .map(|(id, message)| MessageEntry {
            id: id.to_string(),
            role: message.role.clone(),
            content: message.content.clone(),
            extraction: extract_message(message, config),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chatmine_transcript::{parse_transcript, Category};
    use serde_json::json;

    const EXPORT: &str = r#"[{"chat":{"history":{"messages":{
        "u1":{"role":"user","content":"Write the opening scene"},
        "a1":{"role":"assistant","content":"Scene data: {\"scene\": \"intro\"}\n```gdscript\nfunc _ready(): pass\n```"},
        "u2":{"role":"user","content":"thanks"},
        "a2":{"role":"assistant","content":"Here is the json you asked for: {\"ok\": true}"}
    }}}}]"#;

    #[test]
    fn build_report_classifies_and_extracts() {
        let transcript = parse_transcript(EXPORT).unwrap();
        let report = build_report(&transcript, &KeywordConfig::default());

        assert_eq!(report.chats.len(), 1);
        assert_eq!(report.message_count(), 4);
        let chat = &report.chats[0];

        let scene_ids: Vec<&str> = chat.scene_related.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(scene_ids, vec!["u1", "a1"]);
        let spec_ids: Vec<&str> = chat.assistant_specs.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(spec_ids, vec!["a1", "a2"]);

        let a1 = &chat.assistant_specs[0];
        assert_eq!(a1.extraction.categories, vec![Category::Scene, Category::Spec]);
        assert_eq!(a1.extraction.code_blocks, vec!["func _ready(): pass"]);
        assert_eq!(a1.extraction.json_objects, vec![json!({"scene": "intro"})]);

        // {"ok": true} parses but never mentions a scene.
        assert!(chat.assistant_specs[1].extraction.json_objects.is_empty());
    }

    #[test]
    fn build_report_keeps_full_content() {
        let long = "scene ".repeat(100);
        let text = format!(
            r#"[{{"chat":{{"history":{{"messages":{{"m1":{{"role":"user","content":"{long}"}}}}}}}}}}]"#
        );
        let transcript = parse_transcript(&text).unwrap();
        let report = build_report(&transcript, &KeywordConfig::default());
        assert_eq!(report.chats[0].scene_related[0].content, long);
    }

    #[test]
    fn entry_serializes_flat() {
        let transcript = parse_transcript(EXPORT).unwrap();
        let report = build_report(&transcript, &KeywordConfig::default());
        let value = serde_json::to_value(&report.chats[0].assistant_specs[0]).unwrap();
        assert_eq!(value["id"], "a1");
        assert_eq!(value["role"], "assistant");
        assert_eq!(value["categories"], json!(["scene", "spec"]));
        assert_eq!(value["code_blocks"], json!(["func _ready(): pass"]));
    }
}
