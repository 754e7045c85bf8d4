use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use sqlx::PgPool;
use std::sync::Arc;

use tasknest::config::Config;
use tasknest::routes;
use tasknest::store::{MemoryStore, PgStore, SharedStore};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();
    env_logger::init();

    let config = Config::from_env();

    let store: SharedStore = match &config.database_url {
        Some(url) => {
            let pool = PgPool::connect(url)
                .await
                .expect("Failed to connect to database");
            Arc::new(PgStore::new(pool))
        }
        None => {
            log::warn!("DATABASE_URL not set; using the in-memory store, state is lost on restart");
            Arc::new(MemoryStore::new())
        }
    };

    let auth_settings = config.auth.clone();

    log::info!("Starting tasknest server at {}", config.server_url());
    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(store.clone()))
            .app_data(web::Data::new(auth_settings.clone()))
            .wrap(Cors::permissive())
            .wrap(Logger::default())
            .service(routes::health::health)
            .configure(routes::config)
    })
    .bind((config.server_host.as_str(), config.server_port))?
    .run()
    .await
}
