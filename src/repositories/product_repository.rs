//! Product repository for all MongoDB operations related to products.

use futures::TryStreamExt;
use log::{debug, info};
use mongodb::bson::{doc, oid::ObjectId};
use mongodb::{Collection, Database, IndexModel};

use crate::constants::COLLECTION_PRODUCTS;
use crate::errors::ApiError;
use crate::models::Product;

/// Repository for product-related database operations.
pub struct ProductRepository {
    collection: Collection<Product>,
}

impl ProductRepository {
    /// Create a new ProductRepository instance.
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection(COLLECTION_PRODUCTS),
        }
    }

    /// Create database indexes for commonly queried fields.
    pub async fn create_indexes(&self) -> Result<(), ApiError> {
        info!("Creating database indexes for products collection...");

        let indexes = vec![IndexModel::builder()
            .keys(doc! { "farmer_id": 1 })
            .build()];

        self.collection.create_indexes(indexes).await?;
        Ok(())
    }

    /// Insert a new product into the database.
    pub async fn insert(&self, product: &Product) -> Result<ObjectId, ApiError> {
        let result = self.collection.insert_one(product).await?;
        result
            .inserted_id
            .as_object_id()
            .ok_or_else(|| ApiError::InternalServerError {
                code: crate::constants::CODE_INTERNAL_ERROR.to_string(),
                message: "Inserted product id was not an ObjectId".to_string(),
            })
    }

    /// Find a product by its ObjectId.
    pub async fn find_by_id(&self, id: ObjectId) -> Result<Option<Product>, ApiError> {
        debug!("Repository: Finding product by ID: {}", id);
        Ok(self.collection.find_one(doc! { "_id": id }).await?)
    }

    /// Find all products whose id is in `ids`.
    pub async fn find_by_ids(&self, ids: &[ObjectId]) -> Result<Vec<Product>, ApiError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let cursor = self
            .collection
            .find(doc! { "_id": { "$in": ids.to_vec() } })
            .await?;
        Ok(cursor.try_collect().await?)
    }

    /// Find all products owned by the given farmer.
    pub async fn find_by_farmer(&self, farmer_id: ObjectId) -> Result<Vec<Product>, ApiError> {
        let cursor = self
            .collection
            .find(doc! { "farmer_id": farmer_id })
            .await?;
        Ok(cursor.try_collect().await?)
    }

    /// Find products with pagination, newest first.
    pub async fn find_page(&self, skip: u64, limit: i64) -> Result<Vec<Product>, ApiError> {
        let cursor = self
            .collection
            .find(doc! {})
            .skip(skip)
            .limit(limit)
            .sort(doc! { "created_at": -1 })
            .await?;
        Ok(cursor.try_collect().await?)
    }

    /// Count all products.
    pub async fn count(&self) -> Result<u64, ApiError> {
        Ok(self.collection.count_documents(doc! {}).await?)
    }
}
