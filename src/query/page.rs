//! # Page Descriptor
//!
//! One-based page number plus page size, with the derived zero-based
//! offset. Absent values take documented defaults; non-positive or
//! non-numeric values are rejected so a negative offset can never occur.

use crate::error::ApiError;

/// Default page when none supplied
pub const DEFAULT_PAGE: usize = 1;

/// Default page size when none supplied
pub const DEFAULT_LIMIT: usize = 10;

/// Maximum page size a caller may request
pub const MAX_LIMIT: usize = 1000;

/// A validated page descriptor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    /// One-based page number
    pub number: usize,

    /// Records per page
    pub size: usize,
}

impl Default for Page {
    fn default() -> Self {
        Self {
            number: DEFAULT_PAGE,
            size: DEFAULT_LIMIT,
        }
    }
}

impl Page {
    /// Parse `page` and `limit` values, applying defaults for absent
    /// fields and rejecting malformed or non-positive input.
    pub fn parse(page: Option<&str>, limit: Option<&str>) -> Result<Self, ApiError> {
        let number = match page {
            None => DEFAULT_PAGE,
            Some(raw) => parse_positive("page", raw)?,
        };
        let size = match limit {
            None => DEFAULT_LIMIT,
            Some(raw) => parse_positive("limit", raw)?,
        };

        if size > MAX_LIMIT {
            return Err(ApiError::Validation(format!(
                "limit {} exceeds maximum {}",
                size, MAX_LIMIT
            )));
        }

        Ok(Self { number, size })
    }

    /// Zero-based offset of the first record on this page
    pub fn offset(&self) -> usize {
        (self.number - 1) * self.size
    }

    /// Total page count for a given match count
    pub fn count_pages(&self, total: usize) -> usize {
        total.div_ceil(self.size)
    }
}

fn parse_positive(name: &str, raw: &str) -> Result<usize, ApiError> {
    let value: usize = raw
        .trim()
        .parse()
        .map_err(|_| ApiError::Validation(format!("{} must be a positive integer: {}", name, raw)))?;
    if value == 0 {
        return Err(ApiError::Validation(format!("{} must be at least 1", name)));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let page = Page::parse(None, None).unwrap();
        assert_eq!(page.number, 1);
        assert_eq!(page.size, 10);
        assert_eq!(page.offset(), 0);
    }

    #[test]
    fn test_offset_derivation() {
        let page = Page::parse(Some("3"), Some("25")).unwrap();
        assert_eq!(page.offset(), 50);
    }

    #[test]
    fn test_rejects_zero_and_negative() {
        assert!(Page::parse(Some("0"), None).is_err());
        assert!(Page::parse(None, Some("0")).is_err());
        assert!(Page::parse(Some("-1"), None).is_err());
    }

    #[test]
    fn test_rejects_non_numeric() {
        assert!(Page::parse(Some("abc"), None).is_err());
        assert!(Page::parse(None, Some("ten")).is_err());
    }

    #[test]
    fn test_rejects_limit_above_maximum() {
        assert!(Page::parse(None, Some("5000")).is_err());
    }

    #[test]
    fn test_page_count() {
        let page = Page { number: 1, size: 10 };
        assert_eq!(page.count_pages(0), 0);
        assert_eq!(page.count_pages(1), 1);
        assert_eq!(page.count_pages(10), 1);
        assert_eq!(page.count_pages(11), 2);
    }
}
