//! Pagination response models.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Paginated list response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PaginatedResponse<T: ToSchema> {
    /// Whether the request was successful
    pub success: bool,
    /// List of items
    pub data: Vec<T>,
    /// Total number of items
    pub total: u64,
    /// Current page number
    pub page: u64,
    /// Items per page
    pub per_page: u64,
    /// Total number of pages
    pub total_pages: u64,
}

impl<T: Serialize + ToSchema> PaginatedResponse<T> {
    pub fn new(data: Vec<T>, total: u64, page: u64, per_page: u64) -> Self {
        let total_pages = total.div_ceil(per_page.max(1));
        Self {
            success: true,
            data,
            total,
            page,
            per_page,
            total_pages,
        }
    }
}
