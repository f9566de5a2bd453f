use crate::{ChatReport, MessageEntry, Report};

const SCENE_PREVIEW_CHARS: usize = 200;
const SPEC_PREVIEW_CHARS: usize = 300;
const CODE_PREVIEW_LINES: usize = 10;
const RULE_WIDTH: usize = 60;

// ── Text rendering ──

/// Render the human-readable report.
///
/// Output depends only on `report`, so the same transcript always renders
/// to the same bytes. Previews are cut here and nowhere else.
pub fn render_text(report: &Report) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "Loaded transcript with {} chat record(s) and {} message(s)\n",
        report.chats.len(),
        report.message_count()
    ));

    for chat in &report.chats {
        render_chat(&mut out, chat, report.chats.len());
    }

    out.push('\n');
    out.push_str(&banner("EXTRACTION COMPLETE"));
    out
}

fn render_chat(out: &mut String, chat: &ChatReport, total: usize) {
    out.push_str(&format!("\nChat {} of {}\n", chat.index + 1, total));
    out.push_str(&format!(
        "Found {} messages in chat history\n",
        chat.message_count
    ));
    out.push_str(&format!(
        "Found {} scene-related messages\n",
        chat.scene_related.len()
    ));
    out.push_str(&format!(
        "Found {} assistant responses with specifications\n",
        chat.assistant_specs.len()
    ));

    out.push('\n');
    out.push_str(&banner("SCENE-RELATED MESSAGES"));
    for entry in &chat.scene_related {
        render_entry(out, entry, SCENE_PREVIEW_CHARS);
    }

    out.push('\n');
    out.push_str(&banner("ASSISTANT RESPONSES WITH SPECIFICATIONS"));
    for entry in &chat.assistant_specs {
        render_entry(out, entry, SPEC_PREVIEW_CHARS);
        render_code_blocks(out, &entry.extraction.code_blocks);
    }
}

fn render_entry(out: &mut String, entry: &MessageEntry, preview_chars: usize) {
    out.push_str(&format!("\nMessage ID: {}\n", entry.id));
    out.push_str(&format!("Role: {}\n", entry.role.as_str()));
    out.push_str(&format!(
        "Content preview: {}\n",
        preview(&entry.content, preview_chars)
    ));
    out.push_str(&format!(
        "Found {} code blocks\n",
        entry.extraction.code_blocks.len()
    ));
    out.push_str(&format!(
        "Found {} JSON objects\n",
        entry.extraction.json_objects.len()
    ));
}

fn render_code_blocks(out: &mut String, blocks: &[String]) {
    if blocks.is_empty() {
        return;
    }
    out.push_str("\nCode blocks in this response:\n");
    for (i, block) in blocks.iter().enumerate() {
        out.push_str(&format!("  Code block {}:\n", i + 1));
        let lines: Vec<&str> = block.split('\n').collect();
        for line in lines.iter().take(CODE_PREVIEW_LINES) {
            out.push_str(&format!("    {line}\n"));
        }
        if lines.len() > CODE_PREVIEW_LINES {
            out.push_str(&format!(
                "    ... and {} more lines\n",
                lines.len() - CODE_PREVIEW_LINES
            ));
        }
    }
}

fn banner(title: &str) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    format!("{rule}\n{title}\n{rule}\n")
}

/// First `max` characters of `s`, with `...` appended when something was cut.
fn preview(s: &str, max: usize) -> String {
    match s.char_indices().nth(max) {
        Some((cut, _)) => format!("{}...", &s[..cut]),
        None => s.to_string(),
    }
}

// ── JSON rendering ──

/// Render the full, untruncated report as pretty JSON.
pub fn render_json(report: &Report) -> serde_json::Result<String> {
    serde_json::to_string_pretty(report)
}
