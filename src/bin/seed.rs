//! Database seed tool.
//!
//! Creates one account per role plus a starter catalog owned by the
//! seeded farmer. Existing accounts are left untouched, so the tool is
//! safe to run repeatedly.

use log::info;
use mongodb::bson::oid::ObjectId;
use mongodb::Client;

use agromart::config::CONFIG;
use agromart::models::{Product, Role, User, UserProfile};
use agromart::repositories::{ProductRepository, UserRepository};
use agromart::services::auth_service::hash_password;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let client = Client::with_uri_str(&CONFIG.mongodb_uri).await?;
    let db = client.database(&CONFIG.database_name);

    let users = UserRepository::new(&db);
    let products = ProductRepository::new(&db);

    seed_user(&users, "admin@example.com", "admin", "admin123", Role::Admin).await?;
    seed_user(&users, "seller@example.com", "seller", "seller123", Role::Seller).await?;
    seed_user(&users, "buyer@example.com", "buyer", "buyer123", Role::Buyer).await?;
    seed_user(
        &users,
        "customer@example.com",
        "customer",
        "customer99",
        Role::Customer,
    )
    .await?;
    let farmer_id = seed_user(
        &users,
        "farmer@example.com",
        "farmer",
        "farmer123",
        Role::Farmer,
    )
    .await?;

    seed_products(&products, farmer_id).await?;

    info!("Seeding complete");
    Ok(())
}

async fn seed_user(
    users: &UserRepository,
    email: &str,
    username: &str,
    password: &str,
    role: Role,
) -> Result<ObjectId, Box<dyn std::error::Error>> {
    if let Some(existing) = users.find_by_email(email).await.map_err(|e| e.to_string())? {
        info!("User {} already present, skipping", email);
        return existing.id.ok_or_else(|| "seeded user has no id".into());
    }

    let now = mongodb::bson::DateTime::now();
    let user = User {
        id: None,
        email: email.to_string(),
        username: username.to_string(),
        password_hash: hash_password(password).map_err(|e| e.to_string())?,
        role,
        name: None,
        profile: UserProfile::default(),
        created_at: now,
        updated_at: now,
        last_login: None,
    };

    let id = users.insert(&user).await.map_err(|e| e.to_string())?;
    info!("Created {} user {}", role, email);
    Ok(id)
}

async fn seed_products(
    products: &ProductRepository,
    farmer_id: ObjectId,
) -> Result<(), Box<dyn std::error::Error>> {
    if products.count().await.map_err(|e| e.to_string())? > 0 {
        info!("Products already present, skipping catalog seed");
        return Ok(());
    }

    let catalog = [
        ("Basmati Rice", "Long-grain aromatic rice, current harvest", 4.5, 120, "kg"),
        ("Tomatoes", "Vine-ripened tomatoes picked this week", 2.2, 80, "kg"),
        ("Raw Honey", "Unfiltered wildflower honey", 9.0, 40, "jar"),
        ("Fresh Milk", "Pasteurized whole milk, bottled daily", 1.3, 60, "litre"),
    ];

    let now = mongodb::bson::DateTime::now();
    for (title, description, price, stock, unit) in catalog {
        let product = Product {
            id: None,
            title: title.to_string(),
            description: description.to_string(),
            price,
            stock,
            unit: unit.to_string(),
            image: String::new(),
            farmer_id,
            created_at: now,
            updated_at: now,
        };
        products.insert(&product).await.map_err(|e| e.to_string())?;
        info!("Created product {}", title);
    }

    Ok(())
}
