//! Common types used throughout spacetraveling
//!
//! Shared enums and small utility traits used by more than one module.

use serde::{Deserialize, Serialize};

// ============================================================================
// Page
// ============================================================================

/// One batch of a paginated result set.
///
/// `next_page` is an opaque continuation cursor. `None` (or an empty string,
/// which some CMS responses use) means there are no further pages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page<T> {
    /// Items in the order the source returned them
    pub results: Vec<T>,
    /// Cursor for the following page
    #[serde(default)]
    pub next_page: Option<String>,
}

impl<T> Page<T> {
    /// Create a page
    pub fn new(results: Vec<T>, next_page: Option<String>) -> Self {
        Self { results, next_page }
    }

    /// Create a terminal page (no cursor)
    pub fn last(results: Vec<T>) -> Self {
        Self::new(results, None)
    }

    /// Cursor for the following page, if any
    pub fn cursor(&self) -> Option<&str> {
        self.next_page.as_deref().filter(|c| !c.is_empty())
    }

    /// Check if the page has no items
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Map every item, preserving order and cursor
    pub fn try_map<U, E>(self, f: impl FnMut(T) -> Result<U, E>) -> Result<Page<U>, E> {
        let results = self.results.into_iter().map(f).collect::<Result<Vec<_>, E>>()?;
        Ok(Page {
            results,
            next_page: self.next_page,
        })
    }
}

// ============================================================================
// Sort Order
// ============================================================================

/// Chronological direction of a CMS query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    /// Oldest first
    #[default]
    Ascending,
    /// Newest first
    Descending,
}

impl SortOrder {
    /// Check if this is a descending order
    pub fn is_descending(self) -> bool {
        matches!(self, Self::Descending)
    }
}

// ============================================================================
// Backoff Type
// ============================================================================

/// Type of backoff for retries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BackoffType {
    /// Constant delay between retries
    Constant,
    /// Linear increase in delay
    Linear,
    /// Exponential increase in delay
    #[default]
    Exponential,
}

// ============================================================================
// Utilities
// ============================================================================

/// Extension trait for Option<String> to handle empty strings
pub trait OptionStringExt {
    /// Returns None if the string is empty
    fn none_if_empty(self) -> Option<String>;
}

impl OptionStringExt for Option<String> {
    fn none_if_empty(self) -> Option<String> {
        self.filter(|s| !s.is_empty())
    }
}

impl OptionStringExt for String {
    fn none_if_empty(self) -> Option<String> {
        if self.is_empty() {
            None
        } else {
            Some(self)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_cursor() {
        let page = Page::new(vec![1, 2], Some("https://cms/page2".to_string()));
        assert_eq!(page.cursor(), Some("https://cms/page2"));

        let page = Page::new(vec![1], Some(String::new()));
        assert_eq!(page.cursor(), None);

        let page: Page<u8> = Page::last(vec![]);
        assert!(page.is_empty());
        assert_eq!(page.cursor(), None);
    }

    #[test]
    fn test_page_try_map_keeps_order_and_cursor() {
        let page = Page::new(vec![1, 2, 3], Some("c".to_string()));
        let mapped: Page<String> = page.try_map(|n| Ok::<_, ()>(n.to_string())).unwrap();
        assert_eq!(mapped.results, vec!["1", "2", "3"]);
        assert_eq!(mapped.cursor(), Some("c"));

        let page = Page::new(vec![1, 2, 3], None);
        let failed = page.try_map(|n| if n == 2 { Err("bad") } else { Ok(n) });
        assert_eq!(failed, Err("bad"));
    }

    #[test]
    fn test_sort_order_serde() {
        let order: SortOrder = serde_json::from_str("\"descending\"").unwrap();
        assert_eq!(order, SortOrder::Descending);
        assert!(order.is_descending());
        assert!(!SortOrder::default().is_descending());
    }

    #[test]
    fn test_backoff_type_serde() {
        let backoff: BackoffType = serde_yaml::from_str("linear").unwrap();
        assert_eq!(backoff, BackoffType::Linear);
        assert_eq!(BackoffType::default(), BackoffType::Exponential);
    }

    #[test]
    fn test_option_string_none_if_empty() {
        assert_eq!(
            Some("cursor".to_string()).none_if_empty(),
            Some("cursor".to_string())
        );
        assert_eq!(Some(String::new()).none_if_empty(), None);
        assert_eq!(None::<String>.none_if_empty(), None);
        assert_eq!(String::new().none_if_empty(), None);
    }
}
