//! This modules defines the common functionality for paging data.

use serde::Serialize;

use crate::Error;

/// The config for pagination
#[derive(Debug, Clone)]
pub struct PaginationConfig {
    /// The page number to default to when not specified in a request.
    pub default_page: u64,
    /// The number of items per page when not specified in a request.
    pub default_page_size: u64,
    /// The largest page size a client may ask for.
    pub max_page_size: u64,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            default_page: 1,
            default_page_size: 20,
            max_page_size: 100,
        }
    }
}

impl PaginationConfig {
    /// Fill in the defaults for a client's page request and check it is in bounds.
    ///
    /// # Errors
    /// Returns [Error::InvalidPagination] if the page is zero (pages start at
    /// one), or the page size is zero or larger than `max_page_size`.
    pub fn page_request(
        &self,
        page: Option<u64>,
        page_size: Option<u64>,
    ) -> Result<PageRequest, Error> {
        let page = page.unwrap_or(self.default_page);
        let page_size = page_size.unwrap_or(self.default_page_size);

        if page == 0 {
            return Err(Error::InvalidPagination(
                "page numbers start at 1".to_owned(),
            ));
        }

        if page_size == 0 || page_size > self.max_page_size {
            return Err(Error::InvalidPagination(format!(
                "page size must be between 1 and {}, got {page_size}",
                self.max_page_size
            )));
        }

        Ok(PageRequest { page, page_size })
    }
}

/// A validated, 1-based page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    /// The page number, starting from 1.
    pub page: u64,
    /// The maximum number of items on the page.
    pub page_size: u64,
}

impl PageRequest {
    /// The number of items that come before this page.
    pub fn offset(&self) -> u64 {
        (self.page - 1).saturating_mul(self.page_size)
    }
}

/// One page of items and the size of the whole filtered set.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    /// The items on this page.
    pub content: Vec<T>,
    /// The page number, starting from 1.
    pub page: u64,
    /// The requested page size.
    pub page_size: u64,
    /// How many items match the filter across all pages.
    pub total_elements: u64,
    /// How many pages there are at this page size.
    pub total_pages: u64,
}

impl<T> Page<T> {
    /// Wrap `content` fetched for `request` out of `total_elements` matches.
    pub fn new(content: Vec<T>, request: PageRequest, total_elements: u64) -> Self {
        Self {
            content,
            page: request.page,
            page_size: request.page_size,
            total_elements,
            total_pages: total_elements.div_ceil(request.page_size),
        }
    }
}
