//! HTML fragments for the article index and the article view.

use pagemark::{escape_html, ContentFormatter};
use tracing::debug;

use crate::article::Article;
use crate::catalog::{article, articles};
use crate::Result;

/// Render one index card
pub fn render_card(article: &Article) -> String {
    format!(
        concat!(
            "<div class=\"page-card\">\n",
            "<div class=\"page-icon\"><i class=\"fas {icon}\"></i></div>\n",
            "<div class=\"page-content\">\n",
            "<h3>{title}</h3>\n",
            "<p>{description}</p>\n",
            "<div class=\"page-meta\">",
            "<span class=\"page-category {category}\">{category}</span>",
            "<span class=\"page-id\">Page {id}/{total}</span>",
            "</div>\n",
            "</div>\n",
            "<button class=\"btn-view-page\" data-page-id=\"{id}\">",
            "<i class=\"fas fa-book-open\"></i> Read</button>\n",
            "</div>"
        ),
        icon = escape_html(article.icon),
        title = escape_html(article.title),
        description = escape_html(article.description),
        category = article.category,
        id = article.id,
        total = articles().len(),
    )
}

/// Render the card grid for a set of articles
pub fn render_index<'a>(articles: impl IntoIterator<Item = &'a Article>) -> String {
    let cards: Vec<String> = articles.into_iter().map(render_card).collect();
    debug!(cards = cards.len(), "rendered index");
    format!("<div class=\"pages-grid\">\n{}\n</div>", cards.join("\n"))
}

/// Render the view of a single article, with its formatted body and
/// previous/next navigation
pub fn render_article(formatter: &ContentFormatter, id: u32) -> Result<String> {
    let article = article(id)?;
    let total = articles().len() as u32;

    let mut navigation = String::new();
    if id > 1 {
        navigation.push_str(&format!(
            "<button class=\"btn-nav\" data-page-id=\"{}\">\
             <i class=\"fas fa-arrow-left\"></i> Previous</button>",
            id - 1
        ));
    }
    if id < total {
        navigation.push_str(&format!(
            "<button class=\"btn-nav\" data-page-id=\"{}\">\
             Next <i class=\"fas fa-arrow-right\"></i></button>",
            id + 1
        ));
    }

    let body = formatter.format(article.content);
    debug!(id, body_len = body.len(), "rendered article");

    Ok(format!(
        concat!(
            "<div class=\"page-view\">\n",
            "<div class=\"modal-header\"><h2><i class=\"fas {icon}\"></i> {title}</h2></div>\n",
            "<div class=\"modal-body\">\n",
            "<div class=\"page-meta\">",
            "<span class=\"page-category {category}\">{category_upper}</span>",
            "<span class=\"page-id\">Educational Content - Page {id}</span>",
            "</div>\n",
            "<div class=\"page-content-text\">\n{body}\n</div>\n",
            "</div>\n",
            "<div class=\"modal-footer\"><div class=\"page-navigation\">{navigation}</div></div>\n",
            "</div>"
        ),
        icon = escape_html(article.icon),
        title = escape_html(article.title),
        category = article.category,
        category_upper = article.category.as_str().to_uppercase(),
        id = id,
        body = body,
        navigation = navigation,
    ))
}

#[cfg(test)]
mod tests {
    use scraper::{Html, Selector};

    use super::*;
    use crate::article::Category;
    use crate::catalog::by_category;
    use crate::LibraryError;

    fn select_count(html: &str, selector: &str) -> usize {
        let fragment = Html::parse_fragment(html);
        let selector = Selector::parse(selector).unwrap();
        fragment.select(&selector).count()
    }

    #[test]
    fn test_card() {
        let card = render_card(article(5).unwrap());
        assert!(card.contains("<h3>SQL Injection Prevention</h3>"));
        assert!(card.contains("<span class=\"page-category security\">security</span>"));
        assert!(card.contains("Page 5/15"));
        assert!(card.contains("data-page-id=\"5\""));
    }

    #[test]
    fn test_card_escapes_metadata() {
        let card = render_card(article(4).unwrap());
        assert!(card.contains("Leverage TypeScript&#39;s type system"));
    }

    #[test]
    fn test_index_all() {
        let html = render_index(articles());
        assert_eq!(select_count(&html, "div.page-card"), 15);
    }

    #[test]
    fn test_index_by_category() {
        let html = render_index(by_category(Category::Performance));
        assert_eq!(select_count(&html, "div.page-card"), 5);
        assert!(html.contains("Page 2/15"));
    }

    #[test]
    fn test_index_empty() {
        assert_eq!(
            render_index(std::iter::empty()),
            "<div class=\"pages-grid\">\n\n</div>"
        );
    }

    #[test]
    fn test_article_view() {
        let html = render_article(&ContentFormatter::new(), 2).unwrap();
        assert!(html.contains("Python Performance Optimization</h2>"));
        assert!(html.contains(">PERFORMANCE</span>"));
        assert!(html.contains("Educational Content - Page 2"));
        assert!(html.contains("<h1>Python Performance Optimization</h1>"));
        assert!(html.contains("<code class=\"language-python\">"));
    }

    #[test]
    fn test_navigation_boundaries() {
        let formatter = ContentFormatter::new();

        let first = render_article(&formatter, 1).unwrap();
        assert!(!first.contains("Previous"));
        assert!(first.contains("data-page-id=\"2\""));

        let middle = render_article(&formatter, 8).unwrap();
        assert!(middle.contains("data-page-id=\"7\""));
        assert!(middle.contains("data-page-id=\"9\""));
        assert_eq!(select_count(&middle, "button.btn-nav"), 2);

        let last = render_article(&formatter, 15).unwrap();
        assert!(last.contains("Previous"));
        assert!(!last.contains("Next"));
    }

    #[test]
    fn test_article_not_found() {
        let result = render_article(&ContentFormatter::new(), 99);
        assert!(matches!(result, Err(LibraryError::NotFound(99))));
    }

    #[test]
    fn test_every_article_formats() {
        let formatter = ContentFormatter::new();
        for article in articles() {
            let body = formatter.format(article.content);
            assert!(body.starts_with("<p><h1>"), "article {}", article.id);
            assert!(body.ends_with("</p>"), "article {}", article.id);
            assert_eq!(body.matches("<ul>").count(), body.matches("</ul>").count());
            assert!(body.matches("<ul>").count() <= 1, "article {}", article.id);
            assert!(!body.contains("```"), "article {} has an unconverted fence", article.id);
        }
    }
}
