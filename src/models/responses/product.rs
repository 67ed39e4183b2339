//! Product-related response models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::{Product, User};

/// Owning farmer summary embedded in product responses
#[derive(Debug, Serialize, Deserialize, Clone, ToSchema)]
pub struct FarmerSummary {
    /// Farmer's unique identifier
    #[schema(example = "665f1f77bcf86cd799439011")]
    pub id: String,
    /// Farmer's display name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Farmer's email address
    #[schema(example = "farmer@example.com")]
    pub email: String,
}

impl From<&User> for FarmerSummary {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.map(|id| id.to_hex()).unwrap_or_default(),
            name: user.name.clone(),
            email: user.email.clone(),
        }
    }
}

/// Product data returned in API responses
#[derive(Debug, Serialize, Deserialize, Clone, ToSchema)]
pub struct ProductResponse {
    /// Product's unique identifier
    #[schema(example = "665f1f77bcf86cd799439012")]
    pub id: String,
    /// Product title
    #[schema(example = "Basmati Rice")]
    pub title: String,
    /// Product description
    pub description: String,
    /// Unit price
    #[schema(example = 4.5)]
    pub price: f64,
    /// Units in stock
    #[schema(example = 120)]
    pub stock: i32,
    /// Sale unit
    #[schema(example = "kg")]
    pub unit: String,
    /// URL path of the product image
    #[schema(example = "/uploads/image-1717680000000.jpg")]
    pub image: String,
    /// Owning farmer, when resolved
    #[serde(skip_serializing_if = "Option::is_none")]
    pub farmer: Option<FarmerSummary>,
    /// When the product was created
    pub created_at: DateTime<Utc>,
}

impl ProductResponse {
    /// Build a response from a product document and its resolved owner.
    pub fn new(product: Product, farmer: Option<&User>) -> Self {
        Self {
            id: product.id.map(|id| id.to_hex()).unwrap_or_default(),
            title: product.title,
            description: product.description,
            price: product.price,
            stock: product.stock,
            unit: product.unit,
            image: product.image,
            farmer: farmer.map(FarmerSummary::from),
            created_at: DateTime::from_timestamp_millis(product.created_at.timestamp_millis())
                .unwrap_or_default(),
        }
    }
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self::new(product, None)
    }
}
