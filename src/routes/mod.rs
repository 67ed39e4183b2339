use actix_governor::Governor;
use actix_web::{web, HttpResponse};

use crate::handlers;
use crate::middleware::{auth_governor_config, AuthMiddleware, RequireRole};
use crate::models::{HealthResponse, Role};

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    let auth_rate_limiter = auth_governor_config();

    // Middleware registered with `.wrap` runs in reverse registration
    // order, so AuthMiddleware (added last) always precedes RequireRole.
    cfg.service(
        web::scope("/api")
            // Health check
            .route("/health", web::get().to(health_check))
            // Auth routes (public, rate limited)
            .service(
                web::scope("/auth")
                    .wrap(Governor::new(&auth_rate_limiter))
                    .route("/register", web::post().to(handlers::register))
                    .route("/login", web::post().to(handlers::login)),
            )
            // Product catalog: listing is public, creation is farmer-only
            .service(
                web::scope("/products")
                    .route("", web::get().to(handlers::list_products))
                    .service(
                        web::resource("/add")
                            .wrap(RequireRole::any(&[Role::Farmer]))
                            .wrap(AuthMiddleware)
                            .route(web::post().to(handlers::create_product)),
                    ),
            )
            // Customer orders
            .service(
                web::scope("/orders")
                    .wrap(RequireRole::any(&[Role::Customer]))
                    .wrap(AuthMiddleware)
                    .route("", web::post().to(handlers::place_order))
                    .route("", web::get().to(handlers::get_customer_orders)),
            )
            // Farmer order management
            .service(
                web::scope("/farmer/orders")
                    .wrap(RequireRole::any(&[Role::Farmer]))
                    .wrap(AuthMiddleware)
                    .route("", web::get().to(handlers::get_farmer_orders))
                    .route(
                        "/{id}/status",
                        web::patch().to(handlers::update_order_status),
                    ),
            )
            // Profile (any authenticated role)
            .service(
                web::scope("/profile")
                    .wrap(AuthMiddleware)
                    .route("", web::get().to(handlers::get_profile))
                    .route("", web::put().to(handlers::update_profile)),
            )
            // Admin routes
            .service(
                web::scope("/admin")
                    .wrap(RequireRole::any(&[Role::Admin]))
                    .wrap(AuthMiddleware)
                    .route("/users", web::get().to(handlers::get_users)),
            ),
    );
}

/// Liveness probe
#[utoipa::path(
    get,
    path = "/api/health",
    tag = "Health",
    responses((status = 200, description = "Server is running", body = HealthResponse))
)]
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse {
        status: "OK".to_string(),
        message: "Server is running".to_string(),
    })
}
