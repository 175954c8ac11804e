use std::env;

use actix_identity::IdentityMiddleware;
use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::cookie::Key;
use actix_web::{App, HttpServer, middleware, web};
use dotenvy::dotenv;

use storefront::config::ServerConfig;
use storefront::db::establish_connection_pool;
use storefront::repository::DieselRepository;
use storefront::routes::addresses::{
    create_address, delete_address, get_address, get_addresses, get_user_addresses, update_address,
};
use storefront::routes::auth::{login, logout};
use storefront::routes::carts::{add_product_to_cart, get_user_cart};
use storefront::routes::categories::{
    create_category, delete_category, get_categories, update_category,
};
use storefront::routes::products::{
    add_product, delete_product, get_products, get_products_by_category, search_products,
    update_product, update_product_image,
};
use storefront::services::files::FileStorage;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));
    dotenv().ok(); // Load .env file

    let database_url = env::var("DATABASE_URL").unwrap_or("app.db".to_string());
    let port = env::var("PORT").unwrap_or("8080".to_string());
    let port = port.parse::<u16>().unwrap_or(8080);
    let address = env::var("ADDRESS").unwrap_or("127.0.0.1".to_string());

    let secret = env::var("SECRET_KEY");
    let secret_key = match &secret {
        Ok(key) => Key::from(key.as_bytes()),
        Err(_) => Key::generate(),
    };

    let domain = env::var("DOMAIN").unwrap_or("localhost".to_string());

    let pool = match establish_connection_pool(&database_url) {
        Ok(pool) => pool,
        Err(e) => {
            log::error!("Failed to establish database connection: {e}");
            std::process::exit(1);
        }
    };
    let repo = DieselRepository::new(pool);

    let server_config = ServerConfig::from_env();
    let storage = FileStorage::new(server_config.media_root.clone());

    HttpServer::new(move || {
        App::new()
            .wrap(IdentityMiddleware::default())
            .wrap(
                SessionMiddleware::builder(CookieSessionStore::default(), secret_key.clone())
                    .cookie_secure(false) // set to true in prod
                    .cookie_domain(Some(format!(".{domain}")))
                    .build(),
            )
            .wrap(middleware::Compress::default())
            .wrap(middleware::Logger::default())
            .service(
                web::scope("/api")
                    .service(login)
                    .service(logout)
                    .service(get_categories)
                    .service(create_category)
                    .service(update_category)
                    .service(delete_category)
                    .service(get_products)
                    .service(get_products_by_category)
                    .service(search_products)
                    .service(add_product)
                    .service(update_product)
                    .service(delete_product)
                    .service(update_product_image)
                    .service(create_address)
                    .service(get_addresses)
                    .service(get_user_addresses)
                    .service(get_address)
                    .service(update_address)
                    .service(delete_address)
                    .service(get_user_cart)
                    .service(add_product_to_cart),
            )
            .app_data(web::Data::new(repo.clone()))
            .app_data(web::Data::new(server_config.clone()))
            .app_data(web::Data::new(storage.clone()))
    })
    .bind((address, port))?
    .run()
    .await
}
