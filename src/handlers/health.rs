use actix_web::{web, HttpResponse};
use serde_json::json;

use crate::services::UserStore;

/// Liveness probe, reporting which store backs the service
/// GET /health
pub async fn health(store: web::Data<dyn UserStore>) -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "exercise-tracker",
        "store": store.backend(),
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}
