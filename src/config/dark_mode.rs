//! Dark-mode activation strategy.
use std::fmt;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// How dark-mode variants are activated.
///
/// On the wire the disabled state is the boolean `false` while the two
/// active strategies are the strings `"media"` and `"class"`, so the type
/// carries hand-written serde impls instead of a derive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum DarkMode {
    /// No dark variants are generated.
    #[default]
    Disabled,
    /// Dark variants follow the `prefers-color-scheme` media query.
    Media,
    /// Dark variants apply under a `dark` class on an ancestor element.
    Class,
}

impl DarkMode {
    /// Return `true` unless dark variants are disabled.
    #[must_use]
    pub const fn is_enabled(self) -> bool {
        !matches!(self, Self::Disabled)
    }
}

impl fmt::Display for DarkMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Disabled => f.write_str("false"),
            Self::Media => f.write_str("media"),
            Self::Class => f.write_str("class"),
        }
    }
}

impl Serialize for DarkMode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Disabled => serializer.serialize_bool(false),
            Self::Media => serializer.serialize_str("media"),
            Self::Class => serializer.serialize_str("class"),
        }
    }
}

struct DarkModeVisitor;

impl Visitor<'_> for DarkModeVisitor {
    type Value = DarkMode;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(r#"false, "media", or "class""#)
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<Self::Value, E> {
        if v {
            Err(E::invalid_value(de::Unexpected::Bool(true), &self))
        } else {
            Ok(DarkMode::Disabled)
        }
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        match v {
            "media" => Ok(DarkMode::Media),
            "class" => Ok(DarkMode::Class),
            other => Err(E::invalid_value(de::Unexpected::Str(other), &self)),
        }
    }
}

impl<'de> Deserialize<'de> for DarkMode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(DarkModeVisitor)
    }
}
