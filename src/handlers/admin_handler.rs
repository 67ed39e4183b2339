//! Admin-only handlers.

use actix_web::{web, HttpResponse};

use crate::constants::{DEFAULT_PAGE_NUMBER, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};
use crate::errors::ApiError;
use crate::models::{PageQuery, PaginatedResponse, UserResponse};
use crate::services::UserService;

/// List all users with pagination (admins only)
#[utoipa::path(
    get,
    path = "/api/admin/users",
    tag = "Admin",
    params(PageQuery),
    responses(
        (status = 200, description = "Users retrieved", body = PaginatedResponse<UserResponse>),
        (status = 401, description = "Missing or invalid token", body = crate::models::ErrorResponse),
        (status = 403, description = "Caller is not an administrator", body = crate::models::ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
pub async fn get_users(
    user_service: web::Data<UserService>,
    query: web::Query<PageQuery>,
) -> Result<HttpResponse, ApiError> {
    let page = query.page.unwrap_or(DEFAULT_PAGE_NUMBER).max(1);
    let per_page = query
        .per_page
        .unwrap_or(DEFAULT_PAGE_SIZE)
        .clamp(1, MAX_PAGE_SIZE);

    let (users, total) = user_service.get_users(page, per_page).await?;

    Ok(HttpResponse::Ok().json(PaginatedResponse::new(users, total, page, per_page)))
}
