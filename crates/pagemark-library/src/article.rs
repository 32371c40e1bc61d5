//! Article and category types.

use std::fmt;
use std::str::FromStr;

use crate::LibraryError;

/// Article category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Security,
    Performance,
    Quality,
    Advanced,
}

impl Category {
    /// All categories, in display order
    pub const ALL: [Category; 4] = [
        Category::Security,
        Category::Performance,
        Category::Quality,
        Category::Advanced,
    ];

    /// Lowercase name, also used as the CSS class of the category badge
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Security => "security",
            Category::Performance => "performance",
            Category::Quality => "quality",
            Category::Advanced => "advanced",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Category {
    type Err = LibraryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| LibraryError::UnknownCategory(s.to_string()))
    }
}

/// An educational article
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Article {
    /// 1-based position in the library
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    /// Icon class name
    pub icon: &'static str,
    pub category: Category,
    /// Body in the pagemark markdown subset
    pub content: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_round_trip_names() {
        for category in Category::ALL {
            assert_eq!(category.as_str().parse::<Category>().unwrap(), category);
        }
    }

    #[test]
    fn test_category_parse_is_case_sensitive() {
        assert!(matches!(
            "Security".parse::<Category>(),
            Err(LibraryError::UnknownCategory(name)) if name == "Security"
        ));
    }

    #[test]
    fn test_category_display() {
        assert_eq!(Category::Performance.to_string(), "performance");
        assert_eq!(format!("{:<10}|", Category::Quality), "quality   |");
    }
}
