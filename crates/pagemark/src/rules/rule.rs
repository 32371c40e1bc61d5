//! Rule type for content formatting.

use regex::{Captures, Regex};

use crate::options::FormatOptions;
use crate::Result;

/// Type alias for replacement functions
pub type ReplacementFn = Box<dyn Fn(&Captures<'_>, &FormatOptions) -> String + Send + Sync>;

/// A rule rewrites every match of a pattern in the document
pub struct Rule {
    /// Pattern matched against the whole document
    pub pattern: Regex,
    /// Replacement function that generates HTML for a match
    pub replacement: ReplacementFn,
    /// Maximum number of matches to replace (0 replaces all of them)
    pub limit: usize,
}

impl Rule {
    /// Create a new rule, compiling the pattern
    pub fn new<F>(pattern: &str, replacement: F) -> Result<Self>
    where
        F: Fn(&Captures<'_>, &FormatOptions) -> String + Send + Sync + 'static,
    {
        Ok(Self::from_regex(&Regex::new(pattern)?, replacement))
    }

    /// Create a rule whose replacement is a `$1`-style template
    pub fn template(pattern: &str, template: &str) -> Result<Self> {
        let template = template.to_string();
        Self::new(pattern, move |caps, _| {
            let mut expanded = String::new();
            caps.expand(&template, &mut expanded);
            expanded
        })
    }

    /// Create a rule from an already compiled pattern
    pub(crate) fn from_regex<F>(pattern: &Regex, replacement: F) -> Self
    where
        F: Fn(&Captures<'_>, &FormatOptions) -> String + Send + Sync + 'static,
    {
        Self {
            pattern: pattern.clone(),
            replacement: Box::new(replacement),
            limit: 0,
        }
    }

    /// Only replace the first match
    pub fn first_only(mut self) -> Self {
        self.limit = 1;
        self
    }

    /// Apply this rule to a document
    pub fn apply(&self, input: &str, options: &FormatOptions) -> String {
        self.pattern
            .replacen(input, self.limit, |caps: &Captures<'_>| {
                (self.replacement)(caps, options)
            })
            .into_owned()
    }
}
