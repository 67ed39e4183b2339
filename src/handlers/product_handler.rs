//! Product catalog handlers.

use actix_multipart::Multipart;
use actix_web::{web, HttpRequest, HttpResponse};
use validator::Validate;

use crate::constants::{
    DEFAULT_PAGE_NUMBER, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE, MSG_PRODUCT_CREATED,
};
use crate::errors::ApiError;
use crate::middleware::require_identity;
use crate::models::{ApiResponse, PageQuery, PaginatedResponse, ProductResponse};
use crate::services::{FileService, ProductService};
use crate::validators::validation_errors_to_api_error;

/// List products with pagination (public)
#[utoipa::path(
    get,
    path = "/api/products",
    tag = "Product",
    params(PageQuery),
    responses(
        (status = 200, description = "Products retrieved", body = PaginatedResponse<ProductResponse>)
    )
)]
pub async fn list_products(
    product_service: web::Data<ProductService>,
    query: web::Query<PageQuery>,
) -> Result<HttpResponse, ApiError> {
    let page = query.page.unwrap_or(DEFAULT_PAGE_NUMBER).max(1);
    let per_page = query
        .per_page
        .unwrap_or(DEFAULT_PAGE_SIZE)
        .clamp(1, MAX_PAGE_SIZE);

    let (products, total) = product_service.list(page, per_page).await?;

    Ok(HttpResponse::Ok().json(PaginatedResponse::new(products, total, page, per_page)))
}

/// Create a new product with an image upload (farmers only)
#[utoipa::path(
    post,
    path = "/api/products/add",
    tag = "Product",
    request_body(content = crate::models::CreateProductRequest, content_type = "multipart/form-data"),
    responses(
        (status = 201, description = "Product successfully created", body = ProductResponse),
        (status = 400, description = "Validation error", body = crate::models::ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = crate::models::ErrorResponse),
        (status = 403, description = "Caller is not a farmer", body = crate::models::ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
pub async fn create_product(
    req: HttpRequest,
    product_service: web::Data<ProductService>,
    file_service: web::Data<FileService>,
    mut payload: Multipart,
) -> Result<HttpResponse, ApiError> {
    let identity = require_identity(&req)?;

    let (form, image) = file_service.save_product_form(&mut payload).await?;

    // The image is already on disk; don't leave it orphaned when the rest
    // of the form is rejected.
    if let Err(e) = form.validate() {
        file_service.delete_file(&image);
        return Err(validation_errors_to_api_error(e));
    }

    match product_service.create(&identity, form, image.clone()).await {
        Ok(product) => {
            Ok(HttpResponse::Created().json(ApiResponse::success(MSG_PRODUCT_CREATED, product)))
        }
        Err(e) => {
            file_service.delete_file(&image);
            Err(e)
        }
    }
}
