//! # Offset / Limit Parameters
//!
//! Offsets are 1-based: offset 1 starts at the first result. Limits are
//! bounded by the configured maximum page size.

use serde::{Deserialize, Serialize};

use super::errors::{PageError, PageResult};

/// Maximum number of records a page may hold unless configured otherwise
pub const MAX_PAGE_SIZE: usize = 100;

/// Limit used when the caller supplies none
pub const DEFAULT_PAGE_SIZE: usize = 100;

/// Page size bounds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageConfig {
    pub max_page_size: usize,
    pub default_page_size: usize,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            max_page_size: MAX_PAGE_SIZE,
            default_page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// A validated pagination window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    /// 1-based position of the first kept entry
    pub offset: usize,
    /// Maximum number of kept entries
    pub limit: usize,
}

impl PageWindow {
    /// Entries to pass over before the window starts
    pub fn skip(&self) -> usize {
        self.offset - 1
    }
}

impl PageConfig {
    /// Validates numeric offset and limit
    pub fn window(&self, offset: i64, limit: i64) -> PageResult<PageWindow> {
        if offset < 1 {
            return Err(PageError::InvalidArgument(format!(
                "offset must be at least 1, got {}",
                offset
            )));
        }
        if limit < 1 {
            return Err(PageError::InvalidArgument(format!(
                "limit must be at least 1, got {}",
                limit
            )));
        }
        if limit as u64 > self.max_page_size as u64 {
            return Err(PageError::InvalidArgument(format!(
                "limit {} exceeds maximum {}",
                limit, self.max_page_size
            )));
        }

        let offset = usize::try_from(offset).map_err(|_| {
            PageError::InvalidArgument(format!("offset {} is out of range", offset))
        })?;

        Ok(PageWindow {
            offset,
            limit: limit as usize,
        })
    }

    /// Parses optional decimal-string arguments into a window.
    ///
    /// Absent offset means 1, absent limit means the default page size.
    pub fn parse_window(&self, offset: Option<&str>, limit: Option<&str>) -> PageResult<PageWindow> {
        let offset = match offset {
            Some(raw) => parse_integer("offset", raw)?,
            None => 1,
        };
        let limit = match limit {
            Some(raw) => parse_integer("limit", raw)?,
            None => self.default_page_size as i64,
        };
        self.window(offset, limit)
    }
}

fn parse_integer(name: &str, raw: &str) -> PageResult<i64> {
    raw.parse().map_err(|_| {
        PageError::InvalidArgument(format!("{} must be an integer, got '{}'", name, raw))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn invalid(result: PageResult<PageWindow>) -> bool {
        matches!(result, Err(PageError::InvalidArgument(_)))
    }

    #[test]
    fn test_defaults() {
        let window = PageConfig::default().parse_window(None, None).unwrap();
        assert_eq!(window, PageWindow { offset: 1, limit: 100 });
        assert_eq!(window.skip(), 0);
    }

    #[test]
    fn test_parses_decimal_strings() {
        let window = PageConfig::default()
            .parse_window(Some("11"), Some("25"))
            .unwrap();
        assert_eq!(window, PageWindow { offset: 11, limit: 25 });
        assert_eq!(window.skip(), 10);
    }

    #[test]
    fn test_bounds() {
        let config = PageConfig::default();
        assert!(invalid(config.window(0, 10)));
        assert!(invalid(config.window(-3, 10)));
        assert!(invalid(config.window(1, 0)));
        assert!(invalid(config.window(1, 101)));
        assert!(config.window(1, 100).is_ok());
        assert!(config.window(1, 1).is_ok());
    }

    #[test]
    fn test_non_numeric_rejected() {
        let config = PageConfig::default();
        assert!(invalid(config.parse_window(Some("abc"), None)));
        assert!(invalid(config.parse_window(None, Some("10x"))));
        assert!(invalid(config.parse_window(Some(" 1"), None)));
        assert!(invalid(config.parse_window(Some(""), None)));
    }

    #[test]
    fn test_configured_maximum() {
        let config = PageConfig {
            max_page_size: 10,
            default_page_size: 5,
        };
        assert_eq!(config.parse_window(None, None).unwrap().limit, 5);
        assert!(invalid(config.parse_window(None, Some("11"))));
    }
}
