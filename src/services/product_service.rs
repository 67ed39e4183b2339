//! Product service for catalog creation and listing.

use log::info;
use mongodb::bson::oid::ObjectId;
use mongodb::Database;
use std::collections::HashMap;
use std::sync::Arc;

use crate::errors::ApiError;
use crate::models::{AuthenticatedUser, CreateProductRequest, Product, ProductResponse};
use crate::repositories::{ProductRepository, UserRepository};

pub struct ProductService {
    products: Arc<ProductRepository>,
    users: Arc<UserRepository>,
}

impl ProductService {
    pub fn new(db: &Database) -> Self {
        Self {
            products: Arc::new(ProductRepository::new(db)),
            users: Arc::new(UserRepository::new(db)),
        }
    }

    /// Create a product owned by the acting farmer. `image` is the URL
    /// path of the already-stored upload.
    pub async fn create(
        &self,
        farmer: &AuthenticatedUser,
        req: CreateProductRequest,
        image: String,
    ) -> Result<ProductResponse, ApiError> {
        let now = mongodb::bson::DateTime::now();
        let product = Product {
            id: None,
            title: req.title,
            description: req.description,
            price: req.price,
            stock: req.stock,
            unit: req.unit,
            image,
            farmer_id: farmer.id,
            created_at: now,
            updated_at: now,
        };

        let id = self.products.insert(&product).await?;
        info!("Farmer {} created product {}", farmer.id, id);

        let product = Product {
            id: Some(id),
            ..product
        };
        Ok(ProductResponse::from(product))
    }

    /// Paginated catalog listing with a farmer summary per product,
    /// newest first.
    pub async fn list(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<ProductResponse>, u64), ApiError> {
        let total = self.products.count().await?;
        let skip = (page - 1) * per_page;

        let products = self.products.find_page(skip, per_page as i64).await?;

        // Resolve all owners in one query rather than per product.
        let farmer_ids: Vec<ObjectId> = {
            let mut ids: Vec<ObjectId> = products.iter().map(|p| p.farmer_id).collect();
            ids.sort_unstable();
            ids.dedup();
            ids
        };
        let farmers = self.users.find_by_ids(&farmer_ids).await?;
        let farmers_by_id: HashMap<ObjectId, _> = farmers
            .iter()
            .filter_map(|u| u.id.map(|id| (id, u)))
            .collect();

        let responses = products
            .into_iter()
            .map(|p| {
                let farmer = farmers_by_id.get(&p.farmer_id).copied();
                ProductResponse::new(p, farmer)
            })
            .collect();

        Ok((responses, total))
    }
}
