use crate::error::{LoadError, ParseError};
use crate::model::{Chat, History, Message, Role, Transcript};
use serde_json::Value;
use std::path::Path;

/// Load a chat export from disk.
///
/// The whole file is read and parsed before anything else runs. Expected
/// shape:
/// ```json
/// [{"chat":{"history":{"messages":{"<id>":{"role":"user","content":"..."}}}}}]
/// ```
/// Fields beyond `role` and `content` are ignored.
pub fn load_transcript(path: &Path) -> Result<Transcript, LoadError> {
    let content = std::fs::read_to_string(path).map_err(|source| {
        if source.kind() == std::io::ErrorKind::NotFound {
            LoadError::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            LoadError::Read {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    let transcript = parse_transcript(&content).map_err(|err| err.at(path))?;
    tracing::debug!(
        path = %path.display(),
        bytes = content.len(),
        chats = transcript.chats.len(),
        messages = transcript.message_count(),
        "transcript loaded"
    );
    Ok(transcript)
}

/// Parse an in-memory chat export. Same contract as [`load_transcript`].
pub fn parse_transcript(text: &str) -> Result<Transcript, ParseError> {
    let root: Value = serde_json::from_str(text)?;

    let records = root
        .as_array()
        .ok_or_else(|| shape("top level must be an array of chat records"))?;
    if records.is_empty() {
        return Err(shape("transcript contains no chat records"));
    }

    let chats = records
        .iter()
        .enumerate()
        .map(|(index, record)| parse_chat(index, record))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Transcript { chats })
}

fn parse_chat(index: usize, record: &Value) -> Result<Chat, ParseError> {
    let messages = record
        .get("chat")
        .and_then(|c| c.get("history"))
        .and_then(|h| h.get("messages"))
        .ok_or_else(|| shape(format!("record {index}: missing chat.history.messages")))?
        .as_object()
        .ok_or_else(|| {
            shape(format!(
                "record {index}: chat.history.messages must be an object"
            ))
        })?;

    // serde_json is built with `preserve_order`, so this walks the file's key order.
    let mut history = History::new();
    for (id, raw) in messages {
        if !raw.is_object() {
            return Err(shape(format!(
                "record {index}: message {id} must be an object"
            )));
        }
        let role = string_field(raw, "role")
            .ok_or_else(|| shape(format!("record {index}: message {id} has no string role")))?;
        let content = string_field(raw, "content").ok_or_else(|| {
            shape(format!(
                "record {index}: message {id} has no string content"
            ))
        })?;

        history.insert(Message {
            id: id.clone(),
            role: Role::parse(role),
            content: content.to_string(),
        })
        .map_err(|err| shape(format!("record {index}: {err}")))?;
    }

    Ok(Chat { history })
}

fn string_field<'a>(value: &'a Value, key: &str) -> Option<&'a str> {
    value.get(key).and_then(|v| v.as_str())
}

fn shape(detail: impl Into<String>) -> ParseError {
    ParseError::Shape(detail.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_export(dir: &Path, body: &str) -> std::path::PathBuf {
        let path = dir.join("chat-export.json");
        let mut f = std::fs::File::create(&path).unwrap();
        f.write_all(body.as_bytes()).unwrap();
        path
    }

    #[test]
    fn load_basic_export() {
        let tmp = tempfile::tempdir().unwrap();
        let path = write_export(
            tmp.path(),
            r#"[{"chat":{"title":"t","history":{"currentId":"b","messages":{
                "b":{"role":"user","content":"hello","timestamp":1},
                "a":{"role":"assistant","content":"hi there"}
            }}}}]"#,
        );

        let transcript = load_transcript(&path).unwrap();
        assert_eq!(transcript.chats.len(), 1);
        let history = &transcript.chats[0].history;
        let ids: Vec<&str> = history.iter().map(|(id, _)| id).collect();
        assert_eq!(ids, vec!["b", "a"]);
        assert_eq!(history.get("a").unwrap().role, Role::Assistant);
        assert_eq!(history.get("b").unwrap().content, "hello");
    }

    #[test]
    fn load_keeps_every_chat_record() {
        let text = r#"[
            {"chat":{"history":{"messages":{"m1":{"role":"user","content":"one"}}}}},
            {"chat":{"history":{"messages":{"m1":{"role":"user","content":"two"}}}}}
        ]"#;
        let transcript = parse_transcript(text).unwrap();
        assert_eq!(transcript.chats.len(), 2);
        assert_eq!(transcript.message_count(), 2);
    }

    #[test]
    fn load_empty_messages_is_valid() {
        let transcript =
            parse_transcript(r#"[{"chat":{"history":{"messages":{}}}}]"#).unwrap();
        assert!(transcript.chats[0].history.is_empty());
    }

    #[test]
    fn load_missing_file() {
        let err = load_transcript(Path::new("/nonexistent/chat-export.json")).unwrap_err();
        assert!(matches!(err, LoadError::NotFound { .. }));
        assert!(err.to_string().contains("chat-export.json"));
    }

    #[test]
    fn load_directory_is_read_error() {
        let tmp = tempfile::tempdir().unwrap();
        let err = load_transcript(tmp.path()).unwrap_err();
        assert!(matches!(err, LoadError::Read { .. }));
    }

    #[test]
    fn load_malformed_json() {
        let tmp = tempfile::tempdir().unwrap();
        let path = write_export(tmp.path(), r#"[{"chat": "#);
        let err = load_transcript(&path).unwrap_err();
        assert!(matches!(err, LoadError::Parse { .. }));
        assert!(err.to_string().contains("chat-export.json"));
    }

    #[test]
    fn load_bad_shape_names_the_file() {
        let tmp = tempfile::tempdir().unwrap();
        let path = write_export(tmp.path(), r#"[{"chat":{"history":{}}}]"#);
        let err = load_transcript(&path).unwrap_err();
        match &err {
            LoadError::Shape { path: at, detail } => {
                assert_eq!(at, &path);
                assert!(detail.contains("chat.history.messages"));
            }
            other => panic!("expected shape error, got {other:?}"),
        }
        assert!(err.to_string().contains("chat-export.json"));
    }

    #[test]
    fn reject_non_array_top_level() {
        let err = parse_transcript(r#"{"chat":{}}"#).unwrap_err();
        assert!(matches!(err, ParseError::Shape(_)));
    }

    #[test]
    fn reject_empty_record_list() {
        let err = parse_transcript("[]").unwrap_err();
        assert!(err.to_string().contains("no chat records"));
    }

    #[test]
    fn reject_missing_messages() {
        let err = parse_transcript(r#"[{"chat":{"history":{}}}]"#).unwrap_err();
        assert!(err.to_string().contains("chat.history.messages"));
    }

    #[test]
    fn reject_messages_array() {
        let err = parse_transcript(r#"[{"chat":{"history":{"messages":[]}}}]"#).unwrap_err();
        assert!(err.to_string().contains("must be an object"));
    }

    #[test]
    fn reject_non_string_content() {
        let err = parse_transcript(
            r#"[{"chat":{"history":{"messages":{"m1":{"role":"user","content":[1,2]}}}}}]"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("m1"));
        assert!(err.to_string().contains("content"));
    }

    #[test]
    fn reject_missing_role() {
        let err = parse_transcript(
            r#"[{"chat":{"history":{"messages":{"m1":{"content":"hi"}}}}}]"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("role"));
    }
}
