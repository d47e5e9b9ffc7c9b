//! Per-class style overrides appended to the document stylesheet.

use std::fmt::Write as _;

/// One `property: value` override for a CSS selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CssOption {
    /// Selector the rule applies to (`.chords`, `H1`, ...).
    pub css_class: String,
    /// CSS property name.
    pub property: String,
    /// CSS value.
    pub value: String,
    /// Where the override came from; overrides with a context are deduplicated.
    pub context: Option<String>,
}

/// Ordered set of style overrides.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CssOverrides {
    options: Vec<CssOption>,
}

impl CssOverrides {
    /// Empty set.
    pub const fn new() -> Self {
        Self { options: Vec::new() }
    }

    /// Add an override. An identical override with the same `context` is
    /// only kept once.
    pub fn add(&mut self, css_class: &str, property: &str, value: &str, context: Option<&str>) {
        let option = CssOption {
            css_class: css_class.to_string(),
            property: property.to_string(),
            value: value.to_string(),
            context: context.map(str::to_string),
        };
        if option.context.is_some() && self.options.contains(&option) {
            return;
        }
        self.options.push(option);
    }

    /// Builder form of [`Self::add`] without context.
    #[must_use]
    pub fn with(mut self, css_class: &str, property: &str, value: &str) -> Self {
        self.add(css_class, property, value, None);
        self
    }

    /// Whether no override was added.
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// Rule for one selector, every property marked `!important`.
    pub fn generate_class(&self, css_class: &str) -> Option<String> {
        let mut properties = String::new();
        for option in self.options.iter().filter(|o| o.css_class == css_class) {
            let _ = write!(properties, "{}: {} !important; ", option.property, option.value);
        }
        if properties.is_empty() {
            return None;
        }
        Some(format!("{css_class} {{ {properties}}}"))
    }

    /// Rules for every selector, in the order selectors were first used.
    pub fn generate(&self) -> Option<String> {
        let mut classes: Vec<&str> = Vec::new();
        for option in &self.options {
            if !classes.contains(&option.css_class.as_str()) {
                classes.push(&option.css_class);
            }
        }

        let rules: Vec<String> = classes.into_iter().filter_map(|c| self.generate_class(c)).collect();
        (!rules.is_empty()).then(|| rules.join("\n"))
    }
}
