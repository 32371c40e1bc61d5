//! Rule system for markdown to HTML conversion.

mod builtin;
mod rule;

pub use builtin::{builtin_rules, paragraph_rule};
pub use rule::{ReplacementFn, Rule};

use indexmap::IndexMap;

use crate::options::FormatOptions;

/// Ordered collection of rules for conversion
pub struct Rules {
    /// Built-in rules for the markdown subset (applied first)
    builtin_rules: Vec<(&'static str, Rule)>,
    /// Custom rules added by the user, in insertion order
    custom_rules: IndexMap<String, Rule>,
    /// Paragraph break rule (always applied last)
    paragraph_rule: Rule,
}

impl Rules {
    /// Create a new Rules instance with the built-in rules
    pub fn new(options: &FormatOptions) -> Self {
        Self {
            builtin_rules: builtin_rules(options.list_wrapping),
            custom_rules: IndexMap::new(),
            paragraph_rule: paragraph_rule(),
        }
    }

    /// Add a custom rule. Re-using a key replaces that rule in place.
    pub fn add(&mut self, key: &str, rule: Rule) {
        self.custom_rules.insert(key.to_string(), rule);
    }

    /// Iterate over all rules in application order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Rule)> {
        self.builtin_rules
            .iter()
            .map(|(name, rule)| (*name, rule))
            .chain(
                self.custom_rules
                    .iter()
                    .map(|(name, rule)| (name.as_str(), rule)),
            )
            .chain(std::iter::once(("paragraph", &self.paragraph_rule)))
    }

    /// Number of rules, built-in and custom
    pub fn len(&self) -> usize {
        self.builtin_rules.len() + self.custom_rules.len() + 1
    }

    /// Always false: the built-in rules cannot be removed
    pub fn is_empty(&self) -> bool {
        false
    }
}

impl Default for Rules {
    fn default() -> Self {
        Self::new(&FormatOptions::default())
    }
}
