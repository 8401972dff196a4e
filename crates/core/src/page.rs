//! Page window math for offset-paginated list queries.

use crate::error::CoreError;

/// Default number of catalog items per page (one grid screen in the UI).
pub const DEFAULT_PAGE_SIZE: i64 = 42;

/// Maximum page size a caller may request.
pub const MAX_PAGE_SIZE: i64 = 100;

/// A validated offset/limit window over a list query.
///
/// `page` is one-based; the window covers the zero-based inclusive row range
/// `[(page-1)*size, page*size - 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub limit: i64,
    pub offset: i64,
}

impl PageWindow {
    /// Build a window from a one-based page number and a page size.
    ///
    /// Out-of-range values are rejected here, before any request is built,
    /// rather than left for the backend to reinterpret.
    pub fn new(page: i64, size: i64) -> Result<Self, CoreError> {
        if page < 1 {
            return Err(CoreError::Validation(format!(
                "page must be >= 1, got {page}"
            )));
        }
        if size < 1 || size > MAX_PAGE_SIZE {
            return Err(CoreError::Validation(format!(
                "size must be between 1 and {MAX_PAGE_SIZE}, got {size}"
            )));
        }
        // (page - 1) * size can exceed i64 for absurd page numbers; a wrapped
        // offset would silently serve an arbitrary page.
        let offset = page
            .checked_sub(1)
            .and_then(|p| p.checked_mul(size))
            .ok_or_else(|| {
                CoreError::Validation(format!("page {page} with size {size} is out of range"))
            })?;
        Ok(Self {
            limit: size,
            offset,
        })
    }

    /// Zero-based index of the first row in the window.
    pub fn first_row(&self) -> i64 {
        self.offset
    }

    /// Zero-based index of the last row in the window.
    pub fn last_row(&self) -> i64 {
        self.offset + self.limit - 1
    }
}
