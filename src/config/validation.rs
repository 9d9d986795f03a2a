//! Advisory checks over loaded settings.
//!
//! Loading never rejects a value on these grounds; the external build tool
//! owns the final word. Validators only surface likely mistakes.
use std::collections::HashSet;
use std::fmt;

use super::Config;
use super::content::Content;
use super::plugins::Plugin;
use super::theme::Theme;
use super::variants::Variants;

/// Variant names understood by the external build tool.
pub const KNOWN_VARIANTS: &[&str] = &[
    "responsive",
    "dark",
    "motion-safe",
    "motion-reduce",
    "first",
    "last",
    "odd",
    "even",
    "visited",
    "checked",
    "group-hover",
    "group-focus",
    "focus-within",
    "hover",
    "focus",
    "focus-visible",
    "active",
    "disabled",
];

/// A validation warning detected in the settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationWarning {
    /// The settings section (e.g., "content", "variants").
    pub source: String,
    /// The specific item that triggered the warning.
    pub item: String,
    /// Human-readable warning message.
    pub message: String,
}

impl ValidationWarning {
    /// Build a warning for `item` in settings section `source`.
    #[must_use]
    pub fn new(
        source: impl Into<String>,
        item: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            source: source.into(),
            item: item.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}: {}", self.source, self.item, self.message)
    }
}

/// Trait for settings validators.
pub trait ConfigValidator {
    /// Validate the settings section and return any warnings found.
    fn validate(&self) -> Vec<ValidationWarning>;

    /// Return the settings section this validator covers.
    fn name(&self) -> &'static str;
}

/// Validator for content-scan patterns.
#[derive(Debug)]
pub struct ContentValidator<'a> {
    content: &'a Content,
}

impl<'a> ContentValidator<'a> {
    /// Validate `content`.
    #[must_use]
    pub const fn new(content: &'a Content) -> Self {
        Self { content }
    }
}

impl ConfigValidator for ContentValidator<'_> {
    fn validate(&self) -> Vec<ValidationWarning> {
        let mut warnings = Vec::new();

        if self.content.enabled && self.content.is_empty() {
            warnings.push(ValidationWarning::new(
                self.name(),
                "content",
                "no content patterns: every utility class would be scanned out",
            ));
        }

        for pattern in self.content.iter() {
            if pattern.trim().is_empty() {
                warnings.push(ValidationWarning::new(
                    self.name(),
                    pattern,
                    "pattern is empty",
                ));
                continue;
            }

            if let Err(e) = glob::Pattern::new(pattern) {
                warnings.push(ValidationWarning::new(
                    self.name(),
                    pattern,
                    format!("invalid glob: {}", e.msg),
                ));
            }
        }

        warnings
    }

    fn name(&self) -> &'static str {
        "content"
    }
}

/// Validator for variant enablement.
#[derive(Debug)]
pub struct VariantValidator<'a> {
    variants: &'a Variants,
}

impl<'a> VariantValidator<'a> {
    /// Validate `variants`.
    #[must_use]
    pub const fn new(variants: &'a Variants) -> Self {
        Self { variants }
    }
}

impl ConfigValidator for VariantValidator<'_> {
    fn validate(&self) -> Vec<ValidationWarning> {
        let mut warnings = Vec::new();

        for (category, names) in &self.variants.extend {
            if names.is_empty() {
                warnings.push(ValidationWarning::new(
                    self.name(),
                    category,
                    "extend lists no variants",
                ));
            }
        }

        for (category, names) in self.variants.extend.iter().chain(&self.variants.overrides) {
            let mut seen = HashSet::new();
            for name in names {
                if !seen.insert(name.as_str()) {
                    warnings.push(ValidationWarning::new(
                        self.name(),
                        format!("{category}.{name}"),
                        "variant listed more than once",
                    ));
                }
            }
        }

        for (category, name) in self.variants.all_entries() {
            if !KNOWN_VARIANTS.contains(&name) {
                warnings.push(ValidationWarning::new(
                    self.name(),
                    format!("{category}.{name}"),
                    format!("unknown variant '{name}'"),
                ));
            }
        }

        warnings
    }

    fn name(&self) -> &'static str {
        "variants"
    }
}

/// Validator for theme customisation.
#[derive(Debug)]
pub struct ThemeValidator<'a> {
    theme: &'a Theme,
}

impl<'a> ThemeValidator<'a> {
    /// Validate `theme`.
    #[must_use]
    pub const fn new(theme: &'a Theme) -> Self {
        Self { theme }
    }
}

impl ConfigValidator for ThemeValidator<'_> {
    fn validate(&self) -> Vec<ValidationWarning> {
        let mut warnings = Vec::new();

        for key in self.theme.extend.keys() {
            if key.trim().is_empty() {
                warnings.push(ValidationWarning::new(
                    self.name(),
                    key,
                    "extend key is empty",
                ));
            }
        }

        for group in self.theme.shadowed_groups() {
            warnings.push(ValidationWarning::new(
                self.name(),
                group,
                "token group is both overridden and extended; the override discards the defaults being extended",
            ));
        }

        warnings
    }

    fn name(&self) -> &'static str {
        "theme"
    }
}

/// Validator for plugin descriptors.
#[derive(Debug)]
pub struct PluginValidator<'a> {
    plugins: &'a [Plugin],
}

impl<'a> PluginValidator<'a> {
    /// Validate `plugins`.
    #[must_use]
    pub const fn new(plugins: &'a [Plugin]) -> Self {
        Self { plugins }
    }
}

impl ConfigValidator for PluginValidator<'_> {
    fn validate(&self) -> Vec<ValidationWarning> {
        self.plugins
            .iter()
            .enumerate()
            .filter(|(_, plugin)| plugin.name().is_none_or(|name| name.trim().is_empty()))
            .map(|(index, _)| {
                ValidationWarning::new(
                    self.name(),
                    format!("#{index}"),
                    "plugin has no module name",
                )
            })
            .collect()
    }

    fn name(&self) -> &'static str {
        "plugins"
    }
}

/// Validate all settings sections and return collected warnings.
#[must_use]
pub fn validate_all(config: &Config) -> Vec<ValidationWarning> {
    let validators: Vec<Box<dyn ConfigValidator + '_>> = vec![
        Box::new(ContentValidator::new(&config.content)),
        Box::new(ThemeValidator::new(&config.theme)),
        Box::new(VariantValidator::new(&config.variants)),
        Box::new(PluginValidator::new(&config.plugins)),
    ];

    let mut all_warnings = Vec::new();
    for validator in validators {
        let warnings = validator.validate();
        tracing::debug!(
            validator = validator.name(),
            count = warnings.len(),
            "validator finished"
        );
        all_warnings.extend(warnings);
    }

    all_warnings
}
