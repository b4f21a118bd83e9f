//! Category partition of posts.

use std::fmt;
use std::str::FromStr;

/// A filter partition of posts, derived from the page's URL path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Category {
    /// No filtering.
    #[default]
    All,
    /// Cybersecurity posts.
    Cyber,
    /// Computer science posts.
    Info,
    /// English-language posts.
    Anglais,
}

/// Markers checked against the path, highest priority first.
const PATH_MARKERS: [(&str, Category); 3] = [
    ("cyber", Category::Cyber),
    ("info", Category::Info),
    ("anglais", Category::Anglais),
];

impl Category {
    /// Resolve the category of a page from its path.
    ///
    /// Markers are matched as substrings in priority order `cyber`, `info`,
    /// `anglais`; any other path resolves to [`Category::All`].
    #[must_use]
    pub fn resolve(path: &str) -> Self {
        PATH_MARKERS
            .iter()
            .find(|(marker, _)| path.contains(marker))
            .map_or(Self::All, |(_, category)| *category)
    }

    /// Lowercase name used in URLs.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Cyber => "cyber",
            Self::Info => "info",
            Self::Anglais => "anglais",
        }
    }

    /// Server path listing the posts of this category.
    #[must_use]
    pub fn posts_path(self) -> String {
        match self {
            Self::All => "/posts".to_owned(),
            other => format!("/posts/{}", other.as_str()),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown category name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown category '{0}' (expected all, cyber, info or anglais)")]
pub struct ParseCategoryError(String);

impl FromStr for Category {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(Self::All),
            "cyber" => Ok(Self::Cyber),
            "info" => Ok(Self::Info),
            "anglais" => Ok(Self::Anglais),
            other => Err(ParseCategoryError(other.to_owned())),
        }
    }
}
