//! Variant enablement per utility category.
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Variant lists keyed by utility category (e.g. `animation`).
pub type VariantMap = BTreeMap<String, Vec<String>>;

/// Which state variants the external tool generates for each category.
///
/// `extend` appends variants to a category's defaults; any other key
/// directly under `variants` replaces the category's list entirely.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Variants {
    /// Extra variants appended to the defaults of a category.
    #[serde(default)]
    pub extend: VariantMap,
    /// Categories whose variant list is replaced wholesale.
    #[serde(flatten)]
    pub overrides: VariantMap,
}

impl Variants {
    /// Build variants from `extend` entries only.
    pub fn extended<I, C, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (C, Vec<V>)>,
        C: Into<String>,
        V: Into<String>,
    {
        Self {
            extend: entries
                .into_iter()
                .map(|(category, variants)| {
                    (
                        category.into(),
                        variants.into_iter().map(Into::into).collect(),
                    )
                })
                .collect(),
            overrides: VariantMap::new(),
        }
    }

    /// Return the extra variants declared for `category`.
    #[must_use]
    pub fn extension(&self, category: &str) -> Option<&[String]> {
        self.extend.get(category).map(Vec::as_slice)
    }

    /// Iterate over every `(category, variant)` pair from both maps.
    pub fn all_entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.extend
            .iter()
            .chain(&self.overrides)
            .flat_map(|(category, variants)| {
                variants
                    .iter()
                    .map(move |variant| (category.as_str(), variant.as_str()))
            })
    }
}
