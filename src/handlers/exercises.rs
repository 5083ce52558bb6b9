use actix_web::{web, Either, HttpResponse};
use chrono::Local;

use crate::error::TrackerError;
use crate::models::NewExercise;
use crate::services::{TrackerService, UserStore};

/// Append an exercise to a user's log
/// POST /api/users/{id}/exercises
pub async fn add_exercise(
    store: web::Data<dyn UserStore>,
    user_id: web::Path<String>,
    body: Either<web::Form<NewExercise>, web::Json<NewExercise>>,
) -> Result<HttpResponse, TrackerError> {
    let input = match body {
        Either::Left(form) => form.into_inner(),
        Either::Right(json) => json.into_inner(),
    };
    let today = Local::now().date_naive();

    let record =
        TrackerService::add_exercise(store.get_ref(), user_id.as_str(), &input, today).await?;

    Ok(HttpResponse::Ok().json(record))
}
