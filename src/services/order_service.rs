//! Order service: placement, customer/farmer listings, status updates.

use log::info;
use mongodb::bson::oid::ObjectId;
use mongodb::Database;
use std::collections::HashMap;
use std::sync::Arc;

use crate::constants::{
    CODE_BAD_REQUEST, CODE_NOT_FOUND, ERR_INVALID_ORDER_ID, ERR_INVALID_ORDER_STATUS,
    ERR_INVALID_PRODUCT_ID, ERR_ORDER_NOT_FOUND, ERR_PRODUCT_NOT_FOUND,
};
use crate::errors::ApiError;
use crate::models::{
    AuthenticatedUser, Order, OrderResponse, OrderStatus, PlaceOrderRequest, ProductResponse,
    User,
};
use crate::repositories::{OrderRepository, ProductRepository, UserRepository};

pub struct OrderService {
    orders: Arc<OrderRepository>,
    products: Arc<ProductRepository>,
    users: Arc<UserRepository>,
}

impl OrderService {
    pub fn new(db: &Database) -> Self {
        Self {
            orders: Arc::new(OrderRepository::new(db)),
            products: Arc::new(ProductRepository::new(db)),
            users: Arc::new(UserRepository::new(db)),
        }
    }

    /// Place an order for an existing product on behalf of the customer.
    pub async fn place(
        &self,
        customer: &AuthenticatedUser,
        req: PlaceOrderRequest,
    ) -> Result<OrderResponse, ApiError> {
        let product_id =
            ObjectId::parse_str(&req.product_id).map_err(|_| ApiError::BadRequest {
                code: CODE_BAD_REQUEST.to_string(),
                message: ERR_INVALID_PRODUCT_ID.to_string(),
            })?;

        self.products
            .find_by_id(product_id)
            .await?
            .ok_or(ApiError::NotFound {
                code: CODE_NOT_FOUND.to_string(),
                message: ERR_PRODUCT_NOT_FOUND.to_string(),
            })?;

        let now = mongodb::bson::DateTime::now();
        let order = Order {
            id: None,
            product_id,
            customer_id: customer.id,
            quantity: req.quantity,
            status: OrderStatus::Pending,
            created_at: now,
            updated_at: now,
        };

        let id = self.orders.insert(&order).await?;
        info!("Customer {} placed order {}", customer.id, id);

        let order = Order {
            id: Some(id),
            ..order
        };
        Ok(OrderResponse::new(order, None, None))
    }

    /// The customer's own orders, each with its product and the product's
    /// farmer summary.
    pub async fn customer_orders(
        &self,
        customer_id: ObjectId,
    ) -> Result<Vec<OrderResponse>, ApiError> {
        let orders = self.orders.find_by_customer(customer_id).await?;

        let product_ids = dedup_ids(orders.iter().map(|o| o.product_id));
        let products = self.products.find_by_ids(&product_ids).await?;

        let farmer_ids = dedup_ids(products.iter().map(|p| p.farmer_id));
        let farmers = self.users.find_by_ids(&farmer_ids).await?;
        let farmers_by_id = by_id(&farmers);

        let products_by_id: HashMap<ObjectId, _> = products
            .iter()
            .filter_map(|p| p.id.map(|id| (id, p)))
            .collect();

        let responses = orders
            .into_iter()
            .map(|order| {
                let product = products_by_id.get(&order.product_id).map(|p| {
                    let farmer = farmers_by_id.get(&p.farmer_id).copied();
                    ProductResponse::new((*p).clone(), farmer)
                });
                OrderResponse::new(order, product, None)
            })
            .collect();

        Ok(responses)
    }

    /// Orders for any of the farmer's products, each with its product and
    /// ordering customer summary.
    pub async fn farmer_orders(
        &self,
        farmer_id: ObjectId,
    ) -> Result<Vec<OrderResponse>, ApiError> {
        let products = self.products.find_by_farmer(farmer_id).await?;
        let product_ids = dedup_ids(products.iter().filter_map(|p| p.id));

        let orders = self.orders.find_by_products(&product_ids).await?;

        let customer_ids = dedup_ids(orders.iter().map(|o| o.customer_id));
        let customers = self.users.find_by_ids(&customer_ids).await?;
        let customers_by_id = by_id(&customers);

        let products_by_id: HashMap<ObjectId, _> = products
            .iter()
            .filter_map(|p| p.id.map(|id| (id, p)))
            .collect();

        let responses = orders
            .into_iter()
            .map(|order| {
                let product = products_by_id
                    .get(&order.product_id)
                    .map(|p| ProductResponse::from((*p).clone()));
                let customer = customers_by_id.get(&order.customer_id).copied();
                OrderResponse::new(order, product, customer)
            })
            .collect();

        Ok(responses)
    }

    /// Move one of the farmer's orders to ACCEPTED or REJECTED.
    ///
    /// An order that does not exist, or that is not for one of the
    /// farmer's products, is reported as not found rather than forbidden
    /// so the endpoint does not reveal other farmers' order ids.
    pub async fn update_status(
        &self,
        farmer_id: ObjectId,
        order_id: &str,
        status: &str,
    ) -> Result<OrderResponse, ApiError> {
        let status = match status {
            "ACCEPTED" => OrderStatus::Accepted,
            "REJECTED" => OrderStatus::Rejected,
            _ => {
                return Err(ApiError::BadRequest {
                    code: CODE_BAD_REQUEST.to_string(),
                    message: ERR_INVALID_ORDER_STATUS.to_string(),
                })
            }
        };

        let order_id = ObjectId::parse_str(order_id).map_err(|_| ApiError::BadRequest {
            code: CODE_BAD_REQUEST.to_string(),
            message: ERR_INVALID_ORDER_ID.to_string(),
        })?;

        let not_found = || ApiError::NotFound {
            code: CODE_NOT_FOUND.to_string(),
            message: ERR_ORDER_NOT_FOUND.to_string(),
        };

        let order = self
            .orders
            .find_by_id(order_id)
            .await?
            .ok_or_else(not_found)?;

        let product = self
            .products
            .find_by_id(order.product_id)
            .await?
            .ok_or_else(not_found)?;

        if product.farmer_id != farmer_id {
            return Err(not_found());
        }

        let updated = self
            .orders
            .update_status(order_id, status)
            .await?
            .ok_or_else(not_found)?;

        info!("Farmer {} set order {} to {}", farmer_id, order_id, status);

        Ok(OrderResponse::new(updated, None, None))
    }
}

fn dedup_ids(ids: impl Iterator<Item = ObjectId>) -> Vec<ObjectId> {
    let mut ids: Vec<ObjectId> = ids.collect();
    ids.sort_unstable();
    ids.dedup();
    ids
}

fn by_id(users: &[User]) -> HashMap<ObjectId, &User> {
    users
        .iter()
        .filter_map(|u| u.id.map(|id| (id, u)))
        .collect()
}
