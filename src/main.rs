use std::io;
use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use dotenv::dotenv;

use exercise_tracker::config::{AppConfig, CorsOrigins, StoreBackend};
use exercise_tracker::services::{InMemoryUserStore, UserStore};
use exercise_tracker::{db, handlers};

fn build_cors(origins: &CorsOrigins) -> Cors {
    let cors = Cors::default()
        .allow_any_method()
        .allow_any_header()
        .max_age(3600);

    match origins {
        CorsOrigins::Any => cors.allow_any_origin(),
        CorsOrigins::List(list) => list
            .iter()
            .fold(cors, |cors, origin| cors.allowed_origin(origin)),
    }
}

async fn build_store(config: &AppConfig) -> io::Result<Arc<dyn UserStore>> {
    match config.backend {
        StoreBackend::Mongo => {
            let database = db::init_db(config).await.map_err(|e| {
                log::error!("Failed to initialize database: {}", e);
                io::Error::new(io::ErrorKind::Other, e)
            })?;
            Ok(Arc::new(db::MongoUserStore::new(&database)))
        }
        StoreBackend::Memory => {
            log::warn!("Using in-memory store; data is lost on restart");
            Ok(Arc::new(InMemoryUserStore::new()))
        }
    }
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenv().ok();
    env_logger::init();

    let config = AppConfig::from_env().map_err(|e| {
        log::error!("Invalid configuration: {}", e);
        io::Error::new(io::ErrorKind::InvalidInput, e)
    })?;

    let store = web::Data::from(build_store(&config).await?);

    log::info!("🚀 Starting server at {}:{}", config.host, config.port);
    log::info!("🗄️  Store backend: {}", config.backend);
    log::info!("🔒 CORS allowed origins: {:?}", config.cors_origins);

    let origins = config.cors_origins.clone();

    HttpServer::new(move || {
        App::new()
            .wrap(build_cors(&origins))
            .wrap(actix_web::middleware::Logger::default())
            .app_data(store.clone())
            .configure(handlers::configure)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
