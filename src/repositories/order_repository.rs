//! Order repository for all MongoDB operations related to orders.

use futures::TryStreamExt;
use log::info;
use mongodb::bson::{doc, oid::ObjectId};
use mongodb::{Collection, Database, IndexModel};

use crate::constants::COLLECTION_ORDERS;
use crate::errors::ApiError;
use crate::models::{Order, OrderStatus};

/// Repository for order-related database operations.
pub struct OrderRepository {
    collection: Collection<Order>,
}

impl OrderRepository {
    /// Create a new OrderRepository instance.
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection(COLLECTION_ORDERS),
        }
    }

    /// Create database indexes for commonly queried fields.
    pub async fn create_indexes(&self) -> Result<(), ApiError> {
        info!("Creating database indexes for orders collection...");

        let indexes = vec![
            IndexModel::builder()
                .keys(doc! { "customer_id": 1 })
                .build(),
            IndexModel::builder()
                .keys(doc! { "product_id": 1 })
                .build(),
        ];

        self.collection.create_indexes(indexes).await?;
        Ok(())
    }

    /// Insert a new order into the database.
    pub async fn insert(&self, order: &Order) -> Result<ObjectId, ApiError> {
        let result = self.collection.insert_one(order).await?;
        result
            .inserted_id
            .as_object_id()
            .ok_or_else(|| ApiError::InternalServerError {
                code: crate::constants::CODE_INTERNAL_ERROR.to_string(),
                message: "Inserted order id was not an ObjectId".to_string(),
            })
    }

    /// Find an order by its ObjectId.
    pub async fn find_by_id(&self, id: ObjectId) -> Result<Option<Order>, ApiError> {
        Ok(self.collection.find_one(doc! { "_id": id }).await?)
    }

    /// Find all orders placed by the given customer, newest first.
    pub async fn find_by_customer(&self, customer_id: ObjectId) -> Result<Vec<Order>, ApiError> {
        let cursor = self
            .collection
            .find(doc! { "customer_id": customer_id })
            .sort(doc! { "created_at": -1 })
            .await?;
        Ok(cursor.try_collect().await?)
    }

    /// Find all orders for any of the given products, newest first.
    pub async fn find_by_products(&self, product_ids: &[ObjectId]) -> Result<Vec<Order>, ApiError> {
        if product_ids.is_empty() {
            return Ok(Vec::new());
        }
        let cursor = self
            .collection
            .find(doc! { "product_id": { "$in": product_ids.to_vec() } })
            .sort(doc! { "created_at": -1 })
            .await?;
        Ok(cursor.try_collect().await?)
    }

    /// Set an order's status and return the updated record.
    pub async fn update_status(
        &self,
        id: ObjectId,
        status: OrderStatus,
    ) -> Result<Option<Order>, ApiError> {
        self.collection
            .update_one(
                doc! { "_id": id },
                doc! { "$set": {
                    "status": status.to_string(),
                    "updated_at": mongodb::bson::DateTime::now(),
                } },
            )
            .await?;
        self.find_by_id(id).await
    }
}
