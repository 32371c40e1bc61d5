//! Built-in rules for the markdown subset.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use super::Rule;
use crate::options::{FormatOptions, ListWrapping};
use crate::utilities::{escape_html, wrap};

static HEADING_1: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?mR)^# (.*)$").expect("heading pattern is valid"));
static HEADING_2: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?mR)^## (.*)$").expect("heading pattern is valid"));
static HEADING_3: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?mR)^### (.*)$").expect("heading pattern is valid"));

/// Opening fence, optional ASCII word language tag, newline, then the body up
/// to the nearest closing fence
static FENCED_CODE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)```([A-Za-z0-9_]+)?\r?\n(.*?)```").expect("fence pattern is valid")
});

static INLINE_CODE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"`([^`]+)`").expect("inline code pattern is valid"));

static STRONG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\*\*([^*]+)\*\*").expect("strong pattern is valid"));

static LIST_ITEM: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?mR)^- (.*)$").expect("list item pattern is valid"));

/// A maximal run of consecutive `<li>` lines
static LIST_RUN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?mR)^<li>.*</li>$(?:\r?\n<li>.*</li>$)*").expect("list run pattern is valid")
});

/// Everything from the first `<li>` to the last `</li>`
static LIST_SPAN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)<li>.*</li>").expect("list span pattern is valid"));

static PARAGRAPH_BREAK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\n\n").expect("paragraph pattern is valid"));

/// Create the built-in rules, in application order
pub fn builtin_rules(list_wrapping: ListWrapping) -> Vec<(&'static str, Rule)> {
    vec![
        ("heading1", heading_rule(&HEADING_1, 1)),
        ("heading2", heading_rule(&HEADING_2, 2)),
        ("heading3", heading_rule(&HEADING_3, 3)),
        ("fencedCodeBlock", fenced_code_block_rule()),
        ("code", code_rule()),
        ("strong", strong_rule()),
        ("listItem", list_item_rule()),
        ("list", list_rule(list_wrapping)),
    ]
}

fn heading_rule(pattern: &Regex, level: usize) -> Rule {
    let tag = format!("h{level}");
    Rule::from_regex(pattern, move |caps, _| wrap(&tag, &caps[1]))
}

fn fenced_code_block_rule() -> Rule {
    Rule::from_regex(&FENCED_CODE, |caps, options| {
        let class = options.code_class(caps.get(1).map(|m| m.as_str()));
        format!(
            "<pre><code class=\"{}\">{}</code></pre>",
            escape_html(&class),
            escape_html(&caps[2])
        )
    })
}

fn code_rule() -> Rule {
    Rule::from_regex(&INLINE_CODE, |caps, _| wrap("code", &caps[1]))
}

fn strong_rule() -> Rule {
    Rule::from_regex(&STRONG, |caps, _| wrap("strong", &caps[1]))
}

fn list_item_rule() -> Rule {
    Rule::from_regex(&LIST_ITEM, |caps, _| wrap("li", &caps[1]))
}

fn list_rule(list_wrapping: ListWrapping) -> Rule {
    fn wrap_list(caps: &Captures<'_>, _: &FormatOptions) -> String {
        wrap("ul", &caps[0])
    }

    match list_wrapping {
        ListWrapping::FirstRun => Rule::from_regex(&LIST_RUN, wrap_list).first_only(),
        ListWrapping::EveryRun => Rule::from_regex(&LIST_RUN, wrap_list),
        ListWrapping::Span => Rule::from_regex(&LIST_SPAN, wrap_list).first_only(),
    }
}

/// Paragraph breaks always run last, after any custom rules
pub fn paragraph_rule() -> Rule {
    Rule::from_regex(&PARAGRAPH_BREAK, |_, _| "</p><p>".to_string())
}
