//! Product request models.

use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// Text fields of the multipart product creation form.
///
/// Assembled from the form fields by the upload handler, then validated
/// as a unit before the product is persisted.
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
pub struct CreateProductRequest {
    /// Product title
    #[validate(length(min = 1, message = "Title is required"))]
    #[schema(example = "Basmati Rice")]
    pub title: String,
    /// Product description
    #[validate(length(min = 1, message = "Description is required"))]
    #[schema(example = "Long-grain aromatic rice, 2024 harvest")]
    pub description: String,
    /// Unit price; must be positive
    #[validate(range(min = 0.01, message = "Price must be a positive number"))]
    #[schema(example = 4.5)]
    pub price: f64,
    /// Units in stock; must be positive
    #[validate(range(min = 1, message = "Stock must be a positive integer"))]
    #[schema(example = 120)]
    pub stock: i32,
    /// Sale unit (e.g. "kg", "pcs")
    #[validate(length(min = 1, message = "Unit is required"))]
    #[schema(example = "kg")]
    pub unit: String,
}

/// Pagination query for list endpoints.
#[derive(Debug, Deserialize, IntoParams)]
pub struct PageQuery {
    /// Page number (1-based)
    pub page: Option<u64>,
    /// Items per page
    pub per_page: Option<u64>,
}
