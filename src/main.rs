use actix_files::Files;
use actix_web::{middleware::Logger, web, App, HttpResponse, HttpServer};
use log::info;
use mongodb::bson::doc;
use mongodb::Client;
use utoipa::OpenApi;

use agromart::config::CONFIG;
use agromart::openapi::ApiDoc;
use agromart::repositories::{OrderRepository, ProductRepository, UserRepository};
use agromart::routes;
use agromart::services::{AuthService, FileService, OrderService, ProductService, UserService};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Initialize environment variables and logger
    dotenv::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    // Connect to MongoDB
    info!("Connecting to MongoDB...");
    let client = Client::with_uri_str(&CONFIG.mongodb_uri)
        .await
        .expect("Failed to connect to MongoDB");

    let db = client.database(&CONFIG.database_name);

    // Test MongoDB connection
    db.run_command(doc! { "ping": 1 })
        .await
        .expect("Failed to ping MongoDB");
    info!("Connected to MongoDB successfully!");

    // Create indexes once at startup
    let user_repository = UserRepository::new(&db);
    user_repository
        .create_indexes()
        .await
        .expect("Failed to create user indexes");
    ProductRepository::new(&db)
        .create_indexes()
        .await
        .expect("Failed to create product indexes");
    OrderRepository::new(&db)
        .create_indexes()
        .await
        .expect("Failed to create order indexes");

    // Ensure the uploads directory exists
    std::fs::create_dir_all(&CONFIG.upload_dir)?;

    // Initialize services; the auth middleware resolves token subjects
    // through its own handle on the user repository.
    let user_repository = web::Data::new(user_repository);
    let auth_service = web::Data::new(AuthService::new(&db));
    let user_service = web::Data::new(UserService::new(&db));
    let product_service = web::Data::new(ProductService::new(&db));
    let order_service = web::Data::new(OrderService::new(&db));
    let file_service = web::Data::new(FileService::new());

    // Start HTTP server
    let server_addr = format!("{}:{}", CONFIG.server_host, CONFIG.server_port);
    info!("Starting server at http://{}", server_addr);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(user_repository.clone())
            .app_data(auth_service.clone())
            .app_data(user_service.clone())
            .app_data(product_service.clone())
            .app_data(order_service.clone())
            .app_data(file_service.clone())
            .configure(routes::configure_routes)
            .route("/api-docs/openapi.json", web::get().to(openapi_json))
            .service(Files::new("/uploads", &CONFIG.upload_dir))
    })
    .bind(&server_addr)?
    .run()
    .await
}

async fn openapi_json() -> HttpResponse {
    HttpResponse::Ok().json(ApiDoc::openapi())
}
