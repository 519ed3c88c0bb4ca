use crate::media::tables;

/// What a media-bearing URL should be rendered as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaClass {
    /// Not a media URL at all
    None,
    Image,
    Video,
    YouTube,
    /// Media-adjacent but ambiguous; rendered as a safe link
    Link,
}

impl MediaClass {
    pub fn is_media(self) -> bool {
        self != MediaClass::None
    }
}

/// Coarse gate: does this string name displayable media?
///
/// First matching rule wins: URL shape, then extension, then known host,
/// then media-suggesting path segment.
pub fn is_media_url(text: &str) -> bool {
    if !tables::URL_SHAPE.is_match(text) {
        return false;
    }

    if tables::IMAGE_EXTENSION.is_match(text) || tables::VIDEO_EXTENSION.is_match(text) {
        return true;
    }

    if tables::any_match(&tables::IMAGE_HOSTS, text) || tables::any_match(&tables::VIDEO_HOSTS, text)
    {
        return true;
    }

    tables::any_match(&tables::PATH_SEGMENTS, text)
}

/// Finer call used when synthesizing markup. Deliberately narrower than
/// `is_media_url` on the image side: only definite image hosts count, and
/// everything ambiguous degrades to `Link`.
pub fn classify(text: &str) -> MediaClass {
    if !is_media_url(text) {
        return MediaClass::None;
    }

    let definitely_image = tables::IMAGE_EXTENSION.is_match(text)
        || tables::any_match(&tables::DEFINITE_IMAGE_HOSTS, text)
        || tables::any_match(&tables::IMAGE_PATH_SEGMENTS, text);
    if definitely_image {
        return MediaClass::Image;
    }

    if tables::VIDEO_EXTENSION.is_match(text) {
        return MediaClass::Video;
    }

    if text.contains("youtube.com") || text.contains("youtu.be") {
        return MediaClass::YouTube;
    }

    MediaClass::Link
}
