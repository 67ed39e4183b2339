//! Order request models.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Request payload for placing an order
#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct PlaceOrderRequest {
    /// Id of the product being ordered
    #[validate(length(min = 1, message = "Product id is required"))]
    #[schema(example = "665f1f77bcf86cd799439011")]
    pub product_id: String,
    /// Quantity to order; must be positive
    #[validate(range(min = 1, message = "Quantity must be a positive integer"))]
    #[schema(example = 3)]
    pub quantity: i32,
}

/// Request payload for updating an order's status (farmer only).
///
/// The status arrives as a string and is checked against the accepted
/// transitions (ACCEPTED or REJECTED) by the order service.
#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateOrderStatusRequest {
    /// Target status: "ACCEPTED" or "REJECTED"
    #[validate(length(min = 1, message = "Status is required"))]
    #[schema(example = "ACCEPTED")]
    pub status: String,
}
