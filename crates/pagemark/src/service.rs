//! ContentFormatter - the main entry point for markdown to HTML conversion.

use once_cell::sync::Lazy;
use tracing::{debug, trace};

use crate::options::FormatOptions;
use crate::rules::{Rule, Rules};
use crate::utilities::wrap;

static DEFAULT_FORMATTER: Lazy<ContentFormatter> = Lazy::new(ContentFormatter::new);

/// Format a document with the default options
pub fn format_content(content: &str) -> String {
    DEFAULT_FORMATTER.format(content)
}

/// The main service for converting markdown to HTML fragments
pub struct ContentFormatter {
    options: FormatOptions,
    rules: Rules,
}

impl ContentFormatter {
    /// Create a new ContentFormatter with default options
    pub fn new() -> Self {
        Self::with_options(FormatOptions::default())
    }

    /// Create a ContentFormatter with custom options
    pub fn with_options(options: FormatOptions) -> Self {
        let rules = Rules::new(&options);
        Self { options, rules }
    }

    /// Convert a document to an HTML fragment.
    ///
    /// Never fails: input outside the supported subset passes through the
    /// rules unchanged or half-converted.
    pub fn format(&self, content: &str) -> String {
        let mut output = content.to_string();

        for (name, rule) in self.rules.iter() {
            output = rule.apply(&output, &self.options);
            trace!(rule = name, len = output.len(), "applied rule");
        }

        let fragment = wrap("p", &output);
        debug!(
            input_len = content.len(),
            output_len = fragment.len(),
            "formatted content"
        );
        fragment
    }

    /// Add a custom rule, applied after the built-in rules and before
    /// paragraph wrapping
    pub fn add_rule(&mut self, key: &str, rule: Rule) -> &mut Self {
        self.rules.add(key, rule);
        self
    }

    /// Apply a plugin
    pub fn use_plugin<F>(&mut self, plugin: F) -> &mut Self
    where
        F: FnOnce(&mut Self),
    {
        plugin(self);
        self
    }

    /// Get the current options
    pub fn options(&self) -> &FormatOptions {
        &self.options
    }

    /// Get the rules in application order
    pub fn rules(&self) -> &Rules {
        &self.rules
    }
}

impl Default for ContentFormatter {
    fn default() -> Self {
        Self::new()
    }
}
