use serde::Serialize;
use serde_json::Value;
use unicode_segmentation::UnicodeSegmentation;
use url::Url;

use crate::media;
use crate::utils;

const MAX_MIME_GRAPHEMES: usize = 100;
const MAX_FILENAME_GRAPHEMES: usize = 120;

#[derive(thiserror::Error)]
pub enum AttachmentError {
    #[error("attachment carries no usable media")]
    Unrecognized,

    #[error("data URL is not image/ or video/ typed")]
    UnsupportedType,

    #[error("data URL carries no base64 payload")]
    EmptyPayload,

    #[error("attachment of {size} bytes exceeds the {max} byte cap")]
    TooLarge { size: u64, max: u64 },

    #[error("media URL failed validation: {0}")]
    InvalidUrl(String),
}

impl std::fmt::Debug for AttachmentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        utils::error_chain_fmt(self, f)
    }
}

/// Binary media riding alongside a text message. The payload is opaque to the
/// sanitizer: it is size-checked and type-sniffed by its declared MIME
/// prefix, never text-scrubbed.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum MediaAttachment {
    Inline {
        #[serde(rename = "type")]
        kind: String,
        #[serde(rename = "dataUrl")]
        data_url: String,
        mime: String,
        name: String,
        size: u64,
    },
    Linked {
        #[serde(rename = "type")]
        kind: String,
        url: String,
    },
}

impl MediaAttachment {
    /// Validates an untrusted `media` object: either an inline data URL
    /// (prefix-sniffed, capped at `max_bytes` decoded) or an out-of-line URL
    /// that must parse as http(s) and classify as media.
    pub fn parse(value: &Value, max_bytes: u64) -> Result<Self, AttachmentError> {
        let kind = value
            .get("type")
            .and_then(Value::as_str)
            .unwrap_or_default();

        if let Some(data_url) = value.get("dataUrl").and_then(Value::as_str) {
            return Self::parse_inline(value, kind, data_url, max_bytes);
        }

        let link = value
            .get("url")
            .or_else(|| value.get("link"))
            .and_then(Value::as_str);
        if let Some(link) = link {
            return Self::parse_linked(kind, link);
        }

        Err(AttachmentError::Unrecognized)
    }

    fn parse_inline(
        value: &Value,
        kind: &str,
        data_url: &str,
        max_bytes: u64,
    ) -> Result<Self, AttachmentError> {
        if !matches!(kind, "image" | "video") {
            return Err(AttachmentError::UnsupportedType);
        }

        let lowered = data_url.to_lowercase();
        if !(lowered.starts_with("data:image/") || lowered.starts_with("data:video/")) {
            return Err(AttachmentError::UnsupportedType);
        }

        let bytes = approx_data_url_bytes(data_url);
        if bytes == 0 {
            return Err(AttachmentError::EmptyPayload);
        }
        if bytes > max_bytes {
            return Err(AttachmentError::TooLarge {
                size: bytes,
                max: max_bytes,
            });
        }

        let mime = bounded_field(value, "mime", MAX_MIME_GRAPHEMES);
        let name = bounded_field(value, "name", MAX_FILENAME_GRAPHEMES);
        let size = value
            .get("size")
            .and_then(Value::as_u64)
            .filter(|s| *s > 0)
            .unwrap_or(bytes);

        Ok(Self::Inline {
            kind: kind.to_string(),
            data_url: data_url.to_string(),
            mime,
            name,
            size,
        })
    }

    fn parse_linked(kind: &str, link: &str) -> Result<Self, AttachmentError> {
        let parsed = Url::parse(link)
            .map_err(|e| AttachmentError::InvalidUrl(format!("{link:?}: {e}")))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(AttachmentError::InvalidUrl(format!(
                "unsupported scheme {:?}",
                parsed.scheme()
            )));
        }

        let normalized = parsed.to_string();
        if !media::is_media_url(&normalized) {
            return Err(AttachmentError::InvalidUrl(format!(
                "{normalized:?} does not point at displayable media"
            )));
        }

        let kind = if kind.is_empty() { "url" } else { kind };
        Ok(Self::Linked {
            kind: kind.to_string(),
            url: normalized,
        })
    }
}

// data:[mime];base64,AAAA... -> decoded size, without decoding
fn approx_data_url_bytes(data_url: &str) -> u64 {
    match data_url.find("base64,") {
        Some(index) => {
            let payload = &data_url[index + "base64,".len()..];
            (payload.len() as u64) * 3 / 4
        }
        None => 0,
    }
}

fn bounded_field(value: &Value, key: &str, max_graphemes: usize) -> String {
    let raw = value.get(key).and_then(Value::as_str).unwrap_or_default();
    raw.graphemes(true).take(max_graphemes).collect()
}
