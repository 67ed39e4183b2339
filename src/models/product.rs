use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// Product document stored in MongoDB.
///
/// `image` holds the URL path of the uploaded product image
/// (e.g. "/uploads/<filename>"), not the file contents.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Product {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub title: String,
    pub description: String,
    pub price: f64,
    pub stock: i32,
    pub unit: String,
    pub image: String,
    pub farmer_id: ObjectId,
    pub created_at: mongodb::bson::DateTime,
    pub updated_at: mongodb::bson::DateTime,
}
