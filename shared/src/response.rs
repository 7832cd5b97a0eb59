//! Response types
//!
//! The moderation API returns bare JSON arrays; pagination happens on the
//! console side over the fetched list.

use serde::{Deserialize, Serialize};

/// One page of a list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaginatedResponse<T> {
    /// Items on this page
    pub data: Vec<T>,
    /// Total items across all pages
    pub total: u64,
    /// Current page (1-based)
    pub page: u32,
    /// Page size
    pub limit: u32,
    pub total_pages: u32,
}

impl<T> PaginatedResponse<T> {
    pub fn new(data: Vec<T>, total: u64, page: u32, limit: u32) -> Self {
        let total_pages = if limit > 0 {
            total.div_ceil(limit as u64).max(1) as u32
        } else {
            1
        };

        Self {
            data,
            total,
            page,
            limit,
            total_pages,
        }
    }

    /// Single page holding everything (no pagination)
    pub fn single_page(data: Vec<T>) -> Self {
        let total = data.len() as u64;
        Self {
            data,
            total,
            page: 1,
            limit: total as u32,
            total_pages: 1,
        }
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1
    }
}

impl<T: Clone> PaginatedResponse<T> {
    /// Cut page `page` (1-based, clamped to the valid range) out of `items`.
    ///
    /// A `limit` of zero disables pagination.
    pub fn paginate(items: &[T], page: u32, limit: u32) -> Self {
        if limit == 0 {
            return Self::single_page(items.to_vec());
        }
        let total = items.len() as u64;
        let last_page = total.div_ceil(limit as u64).max(1) as u32;
        let page = page.clamp(1, last_page);
        let start = ((page - 1) as usize).saturating_mul(limit as usize);
        let data = items
            .iter()
            .skip(start)
            .take(limit as usize)
            .cloned()
            .collect();
        Self::new(data, total, page, limit)
    }
}
