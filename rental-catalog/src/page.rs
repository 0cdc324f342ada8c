pub const DEFAULT_PAGE: u64 = 1;
pub const DEFAULT_PER_PAGE: u64 = 10;
pub const MAX_PER_PAGE: u64 = 100;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PageError {
    #[error("page must be greater than or equal to 1, got {0}")]
    InvalidPage(i64),

    #[error("per_page must be between 1 and {max}, got {value}")]
    InvalidPerPage { value: i64, max: u64 },
}

/// A validated, 1-based page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: u64,
    per_page: u64,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            per_page: DEFAULT_PER_PAGE,
        }
    }
}

impl PageRequest {
    /// Validates raw parameters. `max_per_page` of `None` leaves the page
    /// size unbounded above.
    pub fn new(page: i64, per_page: i64, max_per_page: Option<u64>) -> Result<Self, PageError> {
        let page = u64::try_from(page)
            .ok()
            .filter(|p| *p >= 1)
            .ok_or(PageError::InvalidPage(page))?;

        let max = max_per_page.unwrap_or(u64::MAX);
        let per_page = u64::try_from(per_page)
            .ok()
            .filter(|n| (1..=max).contains(n))
            .ok_or(PageError::InvalidPerPage { value: per_page, max })?;

        Ok(Self { page, per_page })
    }

    pub fn page(&self) -> u64 {
        self.page
    }

    pub fn per_page(&self) -> u64 {
        self.per_page
    }

    /// Saturates instead of overflowing for very large pages.
    pub fn offset(&self) -> u64 {
        (self.page - 1).saturating_mul(self.per_page)
    }

    pub fn limit(&self) -> u64 {
        self.per_page
    }

    /// Half-open window `[offset, offset + limit)` clipped to the slice.
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let len = items.len() as u64;
        let start = self.offset().min(len) as usize;
        let end = self.offset().saturating_add(self.limit()).min(len) as usize;
        &items[start..end]
    }
}
