use actix_web::{web, Either, HttpResponse};
use serde::Serialize;

use crate::error::TrackerError;
use crate::models::{CreateUserForm, CreateUserRequest, Registration, User, UserSummary};
use crate::services::{TrackerService, UserStore};

/// Body of `POST /api/users`: the full document on creation, id and
/// username only when the user already existed
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum RegistrationResponse {
    Created(User),
    Existing(UserSummary),
}

impl From<Registration> for RegistrationResponse {
    fn from(registration: Registration) -> Self {
        match registration {
            Registration::Created(user) => RegistrationResponse::Created(user),
            Registration::Existing(summary) => RegistrationResponse::Existing(summary),
        }
    }
}

/// Register a username
/// POST /api/users
pub async fn create_user(
    store: web::Data<dyn UserStore>,
    body: Either<web::Form<CreateUserForm>, web::Json<CreateUserForm>>,
) -> Result<HttpResponse, TrackerError> {
    let form = match body {
        Either::Left(form) => form.into_inner(),
        Either::Right(json) => json.into_inner(),
    };
    let request = CreateUserRequest::from(form);

    let registration = TrackerService::create_or_get_user(store.get_ref(), &request).await?;

    Ok(HttpResponse::Ok().json(RegistrationResponse::from(registration)))
}

/// List every user with their logs
/// GET /api/users
pub async fn list_users(store: web::Data<dyn UserStore>) -> Result<HttpResponse, TrackerError> {
    let users = TrackerService::list_users(store.get_ref()).await?;
    Ok(HttpResponse::Ok().json(users))
}
