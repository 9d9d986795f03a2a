//! Content-scan patterns (`content`, formerly `purge`).
use serde::{Deserialize, Serialize};

/// Glob patterns naming the files scanned for used utility classes.
///
/// Accepts either a plain list of globs or the long form
/// `{ enabled = bool, content = [...] }`. A disabled scan keeps its patterns
/// so that the settings can be rendered back unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "ContentRepr", into = "ContentRepr")]
pub struct Content {
    /// Ordered glob patterns.
    pub patterns: Vec<String>,
    /// Whether the external tool should restrict output to scanned classes.
    pub enabled: bool,
}

impl Default for Content {
    fn default() -> Self {
        Self {
            patterns: Vec::new(),
            enabled: true,
        }
    }
}

impl Content {
    /// Build an enabled scan from a list of glob patterns.
    pub fn new<I, S>(patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            patterns: patterns.into_iter().map(Into::into).collect(),
            enabled: true,
        }
    }

    /// Number of configured patterns.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.patterns.len()
    }

    /// Return `true` if no pattern is configured.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Iterate over the patterns in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.patterns.iter().map(String::as_str)
    }
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum ContentRepr {
    List(Vec<String>),
    Table(ContentTable),
}

/// Long form of the scan settings. Any key beyond these two is rejected so
/// that a misspelled `enabled` or an unsupported option cannot be dropped.
#[derive(Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct ContentTable {
    #[serde(default = "enabled_by_default")]
    enabled: bool,
    content: Vec<String>,
}

const fn enabled_by_default() -> bool {
    true
}

impl From<ContentRepr> for Content {
    fn from(repr: ContentRepr) -> Self {
        match repr {
            ContentRepr::List(patterns) => Self {
                patterns,
                enabled: true,
            },
            ContentRepr::Table(table) => Self {
                patterns: table.content,
                enabled: table.enabled,
            },
        }
    }
}

impl From<Content> for ContentRepr {
    fn from(content: Content) -> Self {
        if content.enabled {
            Self::List(content.patterns)
        } else {
            Self::Table(ContentTable {
                enabled: false,
                content: content.patterns,
            })
        }
    }
}
