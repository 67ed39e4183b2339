//! Order handlers for customers and farmers.

use actix_web::{web, HttpRequest, HttpResponse};
use validator::Validate;

use crate::constants::{MSG_ORDERS_RETRIEVED, MSG_ORDER_PLACED, MSG_ORDER_STATUS_UPDATED};
use crate::errors::ApiError;
use crate::middleware::require_identity;
use crate::models::{ApiResponse, OrderResponse, PlaceOrderRequest, UpdateOrderStatusRequest};
use crate::services::OrderService;
use crate::validators::validation_errors_to_api_error;

/// Place a new order (customers only)
#[utoipa::path(
    post,
    path = "/api/orders",
    tag = "Order",
    request_body = PlaceOrderRequest,
    responses(
        (status = 201, description = "Order placed successfully", body = OrderResponse),
        (status = 400, description = "Validation error", body = crate::models::ErrorResponse),
        (status = 403, description = "Caller is not a customer", body = crate::models::ErrorResponse),
        (status = 404, description = "Product not found", body = crate::models::ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
pub async fn place_order(
    req: HttpRequest,
    order_service: web::Data<OrderService>,
    body: web::Json<PlaceOrderRequest>,
) -> Result<HttpResponse, ApiError> {
    body.validate().map_err(validation_errors_to_api_error)?;

    let identity = require_identity(&req)?;
    let order = order_service.place(&identity, body.into_inner()).await?;

    Ok(HttpResponse::Created().json(ApiResponse::success(MSG_ORDER_PLACED, order)))
}

/// List the caller's own orders (customers only)
#[utoipa::path(
    get,
    path = "/api/orders",
    tag = "Order",
    responses(
        (status = 200, description = "Orders retrieved"),
        (status = 401, description = "Missing or invalid token", body = crate::models::ErrorResponse),
        (status = 403, description = "Caller is not a customer", body = crate::models::ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
pub async fn get_customer_orders(
    req: HttpRequest,
    order_service: web::Data<OrderService>,
) -> Result<HttpResponse, ApiError> {
    let identity = require_identity(&req)?;
    let orders = order_service.customer_orders(identity.id).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(MSG_ORDERS_RETRIEVED, orders)))
}

/// List orders for the caller's products (farmers only)
#[utoipa::path(
    get,
    path = "/api/farmer/orders",
    tag = "Order",
    responses(
        (status = 200, description = "Orders retrieved"),
        (status = 401, description = "Missing or invalid token", body = crate::models::ErrorResponse),
        (status = 403, description = "Caller is not a farmer", body = crate::models::ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
pub async fn get_farmer_orders(
    req: HttpRequest,
    order_service: web::Data<OrderService>,
) -> Result<HttpResponse, ApiError> {
    let identity = require_identity(&req)?;
    let orders = order_service.farmer_orders(identity.id).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(MSG_ORDERS_RETRIEVED, orders)))
}

/// Accept or reject an order for one of the caller's products (farmers only)
#[utoipa::path(
    patch,
    path = "/api/farmer/orders/{id}/status",
    tag = "Order",
    params(("id" = String, Path, description = "Order id")),
    request_body = UpdateOrderStatusRequest,
    responses(
        (status = 200, description = "Order status updated", body = OrderResponse),
        (status = 400, description = "Invalid status", body = crate::models::ErrorResponse),
        (status = 404, description = "Order not found or unauthorized", body = crate::models::ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
pub async fn update_order_status(
    req: HttpRequest,
    order_service: web::Data<OrderService>,
    path: web::Path<String>,
    body: web::Json<UpdateOrderStatusRequest>,
) -> Result<HttpResponse, ApiError> {
    body.validate().map_err(validation_errors_to_api_error)?;

    let identity = require_identity(&req)?;
    let order = order_service
        .update_status(identity.id, &path.into_inner(), &body.status)
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(MSG_ORDER_STATUS_UPDATED, order)))
}
