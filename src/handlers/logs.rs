use actix_web::{web, HttpResponse};

use crate::error::TrackerError;
use crate::models::LogQuery;
use crate::services::{TrackerService, UserStore};

/// Read a user's exercise log
/// GET /api/users/{id}/logs?from=&to=&limit=
pub async fn get_logs(
    store: web::Data<dyn UserStore>,
    user_id: web::Path<String>,
    query: web::Query<LogQuery>,
) -> Result<HttpResponse, TrackerError> {
    let view = TrackerService::get_logs(store.get_ref(), user_id.as_str(), &query).await?;
    Ok(HttpResponse::Ok().json(view))
}
