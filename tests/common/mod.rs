// Common test utilities for server integration tests

use std::env;
use std::sync::Arc;

use actix_web::{web, App};
use exercise_tracker::handlers;
use exercise_tracker::services::{InMemoryUserStore, UserStore};

/// Get MongoDB URL from environment or use default
/// Uses MONGODB_URI from .env or constructs from MONGODB_PORT
#[allow(dead_code)]
pub fn get_mongodb_url() -> String {
    env::var("MONGODB_URI").unwrap_or_else(|_| {
        let port = env::var("MONGODB_PORT").unwrap_or_else(|_| "27017".to_string());
        format!("mongodb://localhost:{}", port)
    })
}

/// The full router over a fresh in-memory store
#[allow(dead_code)]
pub fn test_app() -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let store: Arc<dyn UserStore> = Arc::new(InMemoryUserStore::new());
    App::new()
        .app_data(web::Data::from(store))
        .configure(handlers::configure)
}
