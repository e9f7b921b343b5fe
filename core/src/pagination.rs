// catalog/src/pagination.rs

//! Offset pagination arithmetic.
//!
//! Nothing here performs I/O or judges whether a page actually exists; that is
//! decided by the service once it knows how many rows the store returned.

use crate::error::PaginationError;

pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Validated `page`/`size` pair as supplied by a client.
///
/// `size` may come alone, `page` may not. Both are positive when present.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageRequest {
  page: Option<u32>,
  size: Option<u32>,
}

impl PageRequest {
  pub fn new(page: Option<u32>, size: Option<u32>) -> Result<Self, PaginationError> {
    if page == Some(0) {
      return Err(PaginationError::InvalidPage);
    }
    if size == Some(0) {
      return Err(PaginationError::InvalidSize);
    }
    if page.is_some() && size.is_none() {
      return Err(PaginationError::PageWithoutSize);
    }
    Ok(Self { page, size })
  }

  /// First page at the default size.
  pub fn first() -> Self {
    Self::default()
  }

  pub fn page(&self) -> Option<u32> {
    self.page
  }

  pub fn size(&self) -> Option<u32> {
    self.size
  }

  pub fn window(&self) -> PageWindow {
    compute_page_window(self.page, self.size)
  }
}

/// Concrete limit/offset for a range query, plus the page number it represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
  pub limit: u32,
  pub offset: u64,
  pub page: u32,
}

/// Applies the defaults (page 1, size 10) and derives the row offset.
///
/// The offset is widened to `u64` so `(page - 1) * limit` cannot overflow for
/// any pair of `u32` inputs. A zero page gets offset 0 but is echoed back as
/// page 0; `PageRequest::new` rejects it before it can reach a listing.
pub fn compute_page_window(page: Option<u32>, size: Option<u32>) -> PageWindow {
  let page = page.unwrap_or(DEFAULT_PAGE);
  let limit = size.unwrap_or(DEFAULT_PAGE_SIZE);
  let offset = u64::from(page.saturating_sub(1)) * u64::from(limit);

  PageWindow { limit, offset, page }
}

/// Ceiling of `total_count / limit`. Zero when either side is zero.
pub fn compute_total_pages(total_count: i64, limit: u32) -> i64 {
  if limit == 0 || total_count <= 0 {
    return 0;
  }
  let limit = i64::from(limit);
  (total_count + limit - 1) / limit
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn window_defaults_when_nothing_is_supplied() {
    let window = compute_page_window(None, None);
    assert_eq!(
      window,
      PageWindow {
        limit: 10,
        offset: 0,
        page: 1
      }
    );
  }

  #[test]
  fn window_cases() {
    let cases = [
      ("simple input values", Some(1), Some(10), 10, 0, 1),
      ("second page", Some(2), Some(10), 10, 10, 2),
      ("long second page", Some(2), Some(100), 100, 100, 2),
      ("size but no page", None, Some(100), 100, 0, 1),
    ];
    for (name, page, size, limit, offset, actual_page) in cases {
      let window = compute_page_window(page, size);
      assert_eq!(window.limit, limit, "limit incorrect for '{}'", name);
      assert_eq!(window.offset, offset, "offset incorrect for '{}'", name);
      assert_eq!(window.page, actual_page, "page incorrect for '{}'", name);
    }
  }

  #[test]
  fn window_does_not_overflow_on_huge_inputs() {
    let window = compute_page_window(Some(u32::MAX), Some(u32::MAX));
    assert_eq!(window.offset, u64::from(u32::MAX - 1) * u64::from(u32::MAX));
  }

  #[test]
  fn zero_page_keeps_offset_at_zero() {
    let window = compute_page_window(Some(0), Some(10));
    assert_eq!(window.offset, 0);
    assert_eq!(window.page, 0);
  }

  #[test]
  fn total_pages_cases() {
    let cases = [
      ("even values", 100, 10, 10),
      ("zero total", 0, 10, 0),
      ("zero limit", 100, 0, 0),
      ("odd limit", 100, 11, 10),
      ("odd total", 101, 10, 11),
      ("odd values", 101, 11, 10),
      ("single row", 1, 10, 1),
    ];
    for (name, total, limit, expected) in cases {
      assert_eq!(compute_total_pages(total, limit), expected, "pages incorrect for '{}'", name);
    }
  }

  #[test]
  fn page_request_rejects_page_without_size() {
    assert_eq!(PageRequest::new(Some(2), None), Err(PaginationError::PageWithoutSize));
  }

  #[test]
  fn page_request_rejects_zero_values() {
    assert_eq!(PageRequest::new(Some(0), Some(5)), Err(PaginationError::InvalidPage));
    assert_eq!(PageRequest::new(None, Some(0)), Err(PaginationError::InvalidSize));
  }

  #[test]
  fn page_request_accepts_size_alone() {
    let req = PageRequest::new(None, Some(25)).unwrap();
    assert_eq!(req.window(), compute_page_window(None, Some(25)));
    assert_eq!(PageRequest::first().window().limit, DEFAULT_PAGE_SIZE);
  }
}
