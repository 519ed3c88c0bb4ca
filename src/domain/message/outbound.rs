use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::message::chat_color::ChatColor;
use crate::media;
use crate::sanitizer;

/// The only shape the relay is allowed to broadcast. Produced exclusively by
/// [`validate_message`]; every field has already been through the sanitizer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OutboundMessage {
    pub name: String,
    pub message: String,
    pub color: String,
}

impl OutboundMessage {
    /// The fixed safe record substituted when input cannot be processed.
    pub fn fallback() -> Self {
        Self {
            name: "System".to_string(),
            message: "Invalid message".to_string(),
            color: "#FF0000".to_string(),
        }
    }
}

/// Transforms one untrusted JSON-encoded record into a broadcastable one.
///
/// Total: malformed JSON, wrong-typed fields and absent fields all end in a
/// well-formed record, never an error. Field lookups accept the legacy
/// Spanish names (`nombre`, `mensaje`) alongside the English ones.
pub fn validate_message(raw: &str) -> OutboundMessage {
    let Ok(record) = serde_json::from_str::<Value>(raw) else {
        return OutboundMessage::fallback();
    };

    let name = sanitizer::sanitize_name(string_field(&record, &["name", "nombre"]));

    let body = sanitizer::sanitize_body(string_field(&record, &["message", "body", "mensaje"]));
    let message = if media::is_media_url(&body) {
        media::synthesize_embed(&body)
    } else {
        body
    };

    let color = string_field(&record, &["color"]).to_string();
    let color = ChatColor::parse(color).unwrap_or_default().into_inner();

    OutboundMessage {
        name,
        message,
        color,
    }
}

// First present-and-string alias wins; anything else reads as empty.
fn string_field<'a>(record: &'a Value, aliases: &[&str]) -> &'a str {
    aliases
        .iter()
        .find_map(|key| record.get(key).and_then(Value::as_str))
        .unwrap_or("")
}
