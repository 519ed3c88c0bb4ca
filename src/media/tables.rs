//! Classification tables. These are configuration, not logic: adding a new
//! host or extension means adding a row here, never touching the classifier.

use regex::Regex;
use std::sync::LazyLock;

pub const IMAGE_EXTENSIONS: &[&str] = &[
    "jpg", "jpeg", "png", "gif", "bmp", "webp", "svg", "ico", "tiff", "tif",
];

pub const VIDEO_EXTENSIONS: &[&str] = &[
    "mp4", "webm", "ogg", "avi", "mov", "wmv", "flv", "mkv", "m4v",
];

const IMAGE_HOST_PATTERNS: &[&str] = &[
    r"imgur\.com",
    r"i\.imgur\.com",
    r"images\.",
    r"photos\.",
    r"cdn\.",
    r"static\.",
    r"wikia\.nocookie\.net",
    r"media\.tenor\.com",
    r"i\.redd\.it",
    r"preview\.redd\.it",
    r"github\.com.*\.(jpg|png|gif)",
    r"githubusercontent\.com",
    r"discordapp\.com",
    r"cdn\.discord",
    r"picsum\.photos",
    r"unsplash\.com",
    r"pexels\.com",
    r"pixabay\.com",
];

const VIDEO_HOST_PATTERNS: &[&str] = &[
    r"youtube\.com",
    r"youtu\.be",
    r"vimeo\.com",
    r"dailymotion\.com",
    r"twitch\.tv",
    r"streamable\.com",
];

// Hosts that are definitely image hosts. The embed synthesizer uses this
// narrower set; anything outside it falls through to a plain safe link.
const DEFINITE_IMAGE_HOST_PATTERNS: &[&str] = &[
    r"imgur\.com",
    r"wikia\.nocookie\.net",
    r"images\.",
    r"photos\.",
    r"cdn\.",
    r"static\.",
    r"media\.tenor\.com",
];

const MEDIA_PATH_SEGMENTS: &[&str] = &[
    r"/images?/",
    r"/photos?/",
    r"/media/",
    r"/gallery/",
    r"/uploads?/",
    r"/assets?/",
    r"/attachments?/",
];

fn compile_all(patterns: &[&str]) -> Vec<Regex> {
    patterns
        .iter()
        .map(|p| Regex::new(&format!("(?i){p}")).expect("invalid table pattern"))
        .collect()
}

fn extension_matcher(extensions: &[&str]) -> Regex {
    // Trailing path component, optional query string after the extension
    let alternates = extensions.join("|");
    Regex::new(&format!(r"(?i)\.({alternates})(\?.*)?$")).expect("invalid extension matcher")
}

pub(crate) static URL_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^https?://[^\s/$.?#].[^\s]*$").expect("invalid url shape pattern")
});

pub(crate) static IMAGE_EXTENSION: LazyLock<Regex> =
    LazyLock::new(|| extension_matcher(IMAGE_EXTENSIONS));

pub(crate) static VIDEO_EXTENSION: LazyLock<Regex> =
    LazyLock::new(|| extension_matcher(VIDEO_EXTENSIONS));

pub(crate) static IMAGE_HOSTS: LazyLock<Vec<Regex>> =
    LazyLock::new(|| compile_all(IMAGE_HOST_PATTERNS));

pub(crate) static VIDEO_HOSTS: LazyLock<Vec<Regex>> =
    LazyLock::new(|| compile_all(VIDEO_HOST_PATTERNS));

pub(crate) static DEFINITE_IMAGE_HOSTS: LazyLock<Vec<Regex>> =
    LazyLock::new(|| compile_all(DEFINITE_IMAGE_HOST_PATTERNS));

pub(crate) static PATH_SEGMENTS: LazyLock<Vec<Regex>> =
    LazyLock::new(|| compile_all(MEDIA_PATH_SEGMENTS));

// Image-suggesting path segments only; used for the finer image-vs-link call
pub(crate) static IMAGE_PATH_SEGMENTS: LazyLock<Vec<Regex>> =
    LazyLock::new(|| compile_all(&[r"/images?/", r"/photos?/"]));

pub(crate) fn any_match(patterns: &[Regex], url: &str) -> bool {
    patterns.iter().any(|pattern| pattern.is_match(url))
}
