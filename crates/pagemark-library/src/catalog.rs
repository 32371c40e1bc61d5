//! The article table.

use crate::article::{Article, Category};
use crate::{LibraryError, Result};

static ARTICLES: [Article; 15] = [
    Article {
        id: 1,
        title: "JavaScript Security Best Practices",
        description: "Learn how to write secure JavaScript code and avoid common vulnerabilities",
        icon: "fa-shield-alt",
        category: Category::Security,
        content: include_str!("../articles/01.md"),
    },
    Article {
        id: 2,
        title: "Python Performance Optimization",
        description: "Techniques to make your Python code run faster and use less memory",
        icon: "fa-tachometer-alt",
        category: Category::Performance,
        content: include_str!("../articles/02.md"),
    },
    Article {
        id: 3,
        title: "Java Memory Management",
        description: "Understanding garbage collection and memory optimization in Java",
        icon: "fa-memory",
        category: Category::Performance,
        content: include_str!("../articles/03.md"),
    },
    Article {
        id: 4,
        title: "TypeScript Type Safety",
        description: "Leverage TypeScript's type system to catch errors at compile time",
        icon: "fa-tshirt",
        category: Category::Quality,
        content: include_str!("../articles/04.md"),
    },
    Article {
        id: 5,
        title: "SQL Injection Prevention",
        description: "Learn how to protect your database from SQL injection attacks",
        icon: "fa-database",
        category: Category::Security,
        content: include_str!("../articles/05.md"),
    },
    Article {
        id: 6,
        title: "React Performance Optimization",
        description: "Techniques to improve React application performance",
        icon: "fa-react",
        category: Category::Performance,
        content: include_str!("../articles/06.md"),
    },
    Article {
        id: 7,
        title: "Ruby Metaprogramming",
        description: "Understanding and using Ruby's powerful metaprogramming capabilities",
        icon: "fa-gem",
        category: Category::Advanced,
        content: include_str!("../articles/07.md"),
    },
    Article {
        id: 8,
        title: "Swift Memory Management",
        description: "Understanding ARC and memory management in Swift",
        icon: "fa-apple",
        category: Category::Performance,
        content: include_str!("../articles/08.md"),
    },
    Article {
        id: 9,
        title: "Go Concurrency Patterns",
        description: "Master Go's goroutines and channels for concurrent programming",
        icon: "fa-code-branch",
        category: Category::Advanced,
        content: include_str!("../articles/09.md"),
    },
    Article {
        id: 10,
        title: "Rust Ownership System",
        description: "Understanding Rust's unique ownership, borrowing, and lifetimes",
        icon: "fa-rust",
        category: Category::Advanced,
        content: include_str!("../articles/10.md"),
    },
    Article {
        id: 11,
        title: "Kotlin Coroutines",
        description: "Asynchronous programming with Kotlin coroutines",
        icon: "fa-android",
        category: Category::Performance,
        content: include_str!("../articles/11.md"),
    },
    Article {
        id: 12,
        title: "Scala Functional Programming",
        description: "Functional programming concepts and patterns in Scala",
        icon: "fa-scala",
        category: Category::Advanced,
        content: include_str!("../articles/12.md"),
    },
    Article {
        id: 13,
        title: "C++ Modern Features",
        description: "C++11/14/17/20 features and best practices",
        icon: "fa-cplusplus",
        category: Category::Advanced,
        content: include_str!("../articles/13.md"),
    },
    Article {
        id: 14,
        title: "PHP Security Best Practices",
        description: "Essential security practices for PHP applications",
        icon: "fa-php",
        category: Category::Security,
        content: include_str!("../articles/14.md"),
    },
    Article {
        id: 15,
        title: "HTML/CSS Security",
        description: "Security considerations for front-end development",
        icon: "fa-html5",
        category: Category::Security,
        content: include_str!("../articles/15.md"),
    },
];

/// All articles, ordered by id
pub fn articles() -> &'static [Article] {
    &ARTICLES
}

/// Look up an article by id
pub fn article(id: u32) -> Result<&'static Article> {
    ARTICLES
        .iter()
        .find(|article| article.id == id)
        .ok_or(LibraryError::NotFound(id))
}

/// Articles in a category, ordered by id
pub fn by_category(category: Category) -> impl Iterator<Item = &'static Article> {
    ARTICLES
        .iter()
        .filter(move |article| article.category == category)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_contiguous() {
        for (index, article) in articles().iter().enumerate() {
            assert_eq!(article.id as usize, index + 1);
        }
        assert_eq!(articles().len(), 15);
    }

    #[test]
    fn test_lookup() {
        assert_eq!(article(1).unwrap().title, "JavaScript Security Best Practices");
        assert_eq!(article(15).unwrap().title, "HTML/CSS Security");
    }

    #[test]
    fn test_lookup_unknown() {
        assert!(matches!(article(0), Err(LibraryError::NotFound(0))));
        assert!(matches!(article(16), Err(LibraryError::NotFound(16))));
    }

    #[test]
    fn test_by_category() {
        let ids: Vec<u32> = by_category(Category::Security).map(|a| a.id).collect();
        assert_eq!(ids, [1, 5, 14, 15]);

        let ids: Vec<u32> = by_category(Category::Quality).map(|a| a.id).collect();
        assert_eq!(ids, [4]);
    }

    #[test]
    fn test_code_samples_keep_backslash_escapes() {
        let go = article(9).unwrap().content;
        assert!(go.contains(r#"fmt.Printf("worker %d started job %d\n", id, j)"#));
        assert!(go.contains(r#"fmt.Printf("worker %d finished job %d\n", id, j)"#));

        let html = article(15).unwrap().content;
        assert!(html.contains(r#"pattern="(?=.*\d)(?=.*[a-z])(?=.*[A-Z]).{8,}""#));
        assert!(html.contains(r#"pattern="[a-z0-9._%+-]+@[a-z0-9.-]+\.[a-z]{2,}$""#));
    }

    #[test]
    fn test_content_starts_with_title() {
        for article in articles() {
            assert!(
                article.content.starts_with(&format!("# {}\n", article.title)),
                "article {} does not open with its title",
                article.id
            );
        }
    }
}
