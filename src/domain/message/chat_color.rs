use regex::Regex;
use std::sync::LazyLock;

// Leading '#', exactly six hex digits, nothing else
static HEX_COLOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#[0-9A-Fa-f]{6}$").expect("invalid hex color pattern"));

pub const DEFAULT_COLOR: &str = "#000000";

#[derive(Debug, Clone)]
pub struct ChatColor(String);

impl ChatColor {
    /// Returns an instance of `ChatColor` iff the input is a strict
    /// `#RRGGBB` hex token.
    pub fn parse(s: String) -> Result<Self, String> {
        if HEX_COLOR.is_match(&s) {
            Ok(Self(s))
        } else {
            Err(format!("Invalid chat color: {s:?} is not a #RRGGBB hex token."))
        }
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Default for ChatColor {
    fn default() -> Self {
        Self(DEFAULT_COLOR.to_string())
    }
}

impl AsRef<str> for ChatColor {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ChatColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}
