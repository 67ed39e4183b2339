use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::models::{
    AuthResponse, CreateProductRequest, CustomerSummary, ErrorResponse, FarmerSummary,
    HealthResponse, LoginRequest, OrderResponse, OrderStatus, PaginatedResponse,
    PlaceOrderRequest, ProductResponse, RegisterRequest, Role, UpdateOrderStatusRequest,
    UpdateProfileRequest, UserProfileResponse, UserResponse,
};

/// OpenAPI documentation for the marketplace API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "AgroMart API",
        version = "1.0.0",
        description = "REST API for a farm-to-market marketplace: authentication, product catalog, and order management.",
        contact(name = "API Support", email = "support@example.com")
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    ),
    tags(
        (name = "Health", description = "Health check endpoints"),
        (name = "Auth", description = "Authentication endpoints (register, login)"),
        (name = "Product", description = "Product catalog endpoints"),
        (name = "Order", description = "Order placement and management endpoints"),
        (name = "Profile", description = "User profile management"),
        (name = "Admin", description = "Admin-only endpoints")
    ),
    paths(
        crate::handlers::register,
        crate::handlers::login,
        crate::handlers::list_products,
        crate::handlers::create_product,
        crate::handlers::place_order,
        crate::handlers::get_customer_orders,
        crate::handlers::get_farmer_orders,
        crate::handlers::update_order_status,
        crate::handlers::get_profile,
        crate::handlers::update_profile,
        crate::handlers::get_users,
        crate::routes::health_check
    ),
    components(
        schemas(
            RegisterRequest,
            LoginRequest,
            CreateProductRequest,
            PlaceOrderRequest,
            UpdateOrderStatusRequest,
            UpdateProfileRequest,
            Role,
            OrderStatus,
            AuthResponse,
            UserResponse,
            UserProfileResponse,
            ProductResponse,
            FarmerSummary,
            OrderResponse,
            CustomerSummary,
            PaginatedResponse<ProductResponse>,
            PaginatedResponse<UserResponse>,
            ErrorResponse,
            HealthResponse
        )
    ),
    modifiers(&SecurityAddon)
)]
pub struct ApiDoc;

/// Security configuration for Bearer token authentication
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some(
                            "JWT token obtained from the /api/auth/login endpoint",
                        ))
                        .build(),
                ),
            );
        }
    }
}
