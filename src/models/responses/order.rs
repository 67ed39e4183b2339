//! Order-related response models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::{Order, OrderStatus, ProductResponse, User};

/// Customer summary embedded in farmer order listings
#[derive(Debug, Serialize, Deserialize, Clone, ToSchema)]
pub struct CustomerSummary {
    /// Customer's display name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Customer's email address
    #[schema(example = "customer@example.com")]
    pub email: String,
}

impl From<&User> for CustomerSummary {
    fn from(user: &User) -> Self {
        Self {
            name: user.name.clone(),
            email: user.email.clone(),
        }
    }
}

/// Order data returned in API responses
#[derive(Debug, Serialize, Deserialize, Clone, ToSchema)]
pub struct OrderResponse {
    /// Order's unique identifier
    #[schema(example = "665f1f77bcf86cd799439013")]
    pub id: String,
    /// Ordered product id
    #[schema(example = "665f1f77bcf86cd799439012")]
    pub product_id: String,
    /// Ordered quantity
    #[schema(example = 3)]
    pub quantity: i32,
    /// Order status
    pub status: OrderStatus,
    /// Ordered product, when resolved
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product: Option<ProductResponse>,
    /// Ordering customer, when resolved (farmer listings only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer: Option<CustomerSummary>,
    /// When the order was placed
    pub created_at: DateTime<Utc>,
}

impl OrderResponse {
    /// Build a response from an order document and its resolved
    /// product/customer, either of which may be absent.
    pub fn new(order: Order, product: Option<ProductResponse>, customer: Option<&User>) -> Self {
        Self {
            id: order.id.map(|id| id.to_hex()).unwrap_or_default(),
            product_id: order.product_id.to_hex(),
            quantity: order.quantity,
            status: order.status,
            product,
            customer: customer.map(CustomerSummary::from),
            created_at: DateTime::from_timestamp_millis(order.created_at.timestamp_millis())
                .unwrap_or_default(),
        }
    }
}
