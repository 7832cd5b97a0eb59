//! Map-link validation
//!
//! A link cell renders as a hyperlink only when the trimmed text looks like
//! a URL: optional http(s) scheme, a domain name or dotted IPv4 host, then
//! optional port, path, query and fragment.

use std::sync::LazyLock;

use regex::Regex;

static URL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"(?i-u)^(https?://)?",
        r"((([a-z0-9]([a-z0-9-]*[a-z0-9])*)\.)+[a-z]{2,}|",
        r"(([0-9]{1,3}\.){3}[0-9]{1,3}))",
        r"(:[0-9]+)?(/[-a-z0-9%_.~+]*)*",
        r"(\?[;&a-z0-9%_.~+=-]*)?",
        r"(#[-a-z0-9_]*)?$",
    ))
    .expect("map link pattern")
});

/// Whether `candidate` (trimmed) is a well-formed URL. Absent input never is.
pub fn is_url(candidate: Option<&str>) -> bool {
    candidate.is_some_and(|s| URL_PATTERN.is_match(s.trim()))
}

/// How a map-link column is displayed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MapLinkCell {
    /// Hyperlink to the original (untrimmed) value
    Link(String),
    /// Shown verbatim
    Text(String),
    Empty,
}

impl MapLinkCell {
    pub fn classify(raw: Option<&str>) -> Self {
        match raw {
            None => Self::Empty,
            Some(link) if is_url(Some(link)) => Self::Link(link.to_string()),
            Some(text) => Self::Text(text.to_string()),
        }
    }

    pub fn is_link(&self) -> bool {
        matches!(self, Self::Link(_))
    }

    /// Text for the plain-text table
    pub fn label(&self) -> &str {
        match self {
            Self::Link(_) => "View on Map",
            Self::Text(text) => text,
            Self::Empty => "",
        }
    }
}
