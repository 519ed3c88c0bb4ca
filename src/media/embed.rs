use regex::Regex;
use std::sync::LazyLock;
use unicode_segmentation::UnicodeSegmentation;

use crate::media::classify::{MediaClass, classify};

// Recognizes the common YouTube URL shapes: /watch?v=, /embed/, /v/, /e/,
// and shortened youtu.be/ links, capturing the 11-character video id.
static YOUTUBE_ID: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?:youtube\.com/(?:[^/]+/.+/|(?:v|e(?:mbed)?)/|.*[?&]v=)|youtu\.be/)([^"&?/\s]{11})"#)
        .expect("invalid youtube id pattern")
});

const MAX_LINK_TEXT_GRAPHEMES: usize = 50;

/// Produces embeddable markup for a URL that already passed classification.
///
/// Only four fixed tag shapes can come out of here, with the URL placed in
/// `src`/`href` attribute position. The URL is not re-sanitized at this
/// stage; it must already have passed the text sanitizer and the classifier.
pub fn synthesize_embed(url: &str) -> String {
    match classify(url) {
        MediaClass::Image => image_markup(url),
        MediaClass::Video => video_markup(url),
        MediaClass::YouTube => match youtube_video_id(url) {
            Some(id) => youtube_markup(id),
            // Unrecognized YouTube shape: degrade to a plain safe link
            None => link_markup(url),
        },
        MediaClass::Link | MediaClass::None => link_markup(url),
    }
}

/// Extracts the 11-character video id from a YouTube URL, if present.
pub fn youtube_video_id(url: &str) -> Option<&str> {
    YOUTUBE_ID
        .captures(url)
        .and_then(|caps| caps.get(1))
        .map(|id| id.as_str())
}

fn image_markup(url: &str) -> String {
    // Broken images hide themselves and reveal the placeholder span; the
    // click handler is restricted to opening the same URL in a new tab.
    format!(
        r#"<img src="{url}" alt="Shared image" style="max-width: 300px; max-height: 200px; border-radius: 5px; cursor: pointer;" onerror="this.style.display='none'; this.nextSibling.style.display='inline';" onclick="window.open('{url}', '_blank')" /><span style="display:none; color:#888;">[Image not available: {url}]</span>"#
    )
}

fn video_markup(url: &str) -> String {
    format!(
        r#"<video controls style="max-width: 300px; max-height: 200px;" onerror="this.style.display='none'; this.nextSibling.style.display='inline';"><source src="{url}" type="video/mp4">Your browser does not support video playback.</video><span style="display:none; color:#888;">[Video not available: {url}]</span>"#
    )
}

fn youtube_markup(video_id: &str) -> String {
    format!(
        r#"<iframe width="300" height="200" src="https://www.youtube.com/embed/{video_id}" frameborder="0" allowfullscreen></iframe>"#
    )
}

fn link_markup(url: &str) -> String {
    let display = if url.graphemes(true).count() > MAX_LINK_TEXT_GRAPHEMES {
        let head: String = url.graphemes(true).take(MAX_LINK_TEXT_GRAPHEMES).collect();
        format!("{head}...")
    } else {
        url.to_string()
    };
    format!(
        r#"<a href="{url}" target="_blank" rel="noopener noreferrer" style="color: #1976d2; text-decoration: none;">View content: {display}</a>"#
    )
}
