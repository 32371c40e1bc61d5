//! Configuration options for content formatting

/// How runs of list items are wrapped in `<ul>` containers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListWrapping {
    /// Wrap only the first maximal run of consecutive items.
    /// Later runs stay as bare `<li>` lines.
    #[default]
    FirstRun,
    /// Wrap every maximal run of consecutive items
    EveryRun,
    /// Wrap a single span from the first item to the last item in the
    /// document, including anything in between
    Span,
}

/// Options for content formatting
#[derive(Debug, Clone)]
pub struct FormatOptions {
    /// Language used for fenced blocks without a language tag
    pub default_language: String,

    /// Prefix of the class attribute on fenced code elements
    pub code_class_prefix: String,

    /// List wrapping strategy
    pub list_wrapping: ListWrapping,
}

impl FormatOptions {
    /// Class attribute value for a fenced block
    pub fn code_class(&self, language: Option<&str>) -> String {
        format!(
            "{}{}",
            self.code_class_prefix,
            language.unwrap_or(&self.default_language)
        )
    }
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            default_language: "text".to_string(),
            code_class_prefix: "language-".to_string(),
            list_wrapping: ListWrapping::FirstRun,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_class_defaults_to_text() {
        let options = FormatOptions::default();
        assert_eq!(options.code_class(None), "language-text");
        assert_eq!(options.code_class(Some("rust")), "language-rust");
    }

    #[test]
    fn test_code_class_custom_prefix() {
        let options = FormatOptions {
            code_class_prefix: "lang-".to_string(),
            default_language: "plain".to_string(),
            ..Default::default()
        };
        assert_eq!(options.code_class(None), "lang-plain");
    }
}
