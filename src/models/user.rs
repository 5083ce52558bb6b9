use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::Exercise;

/// Stored shape of a user in the `users` collection
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct UserDocument {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub username: String,
    // Older documents were written without a log
    #[serde(default)]
    pub log: Vec<Exercise>,
}

impl UserDocument {
    pub fn new(username: &str) -> Self {
        Self {
            id: None,
            username: username.to_string(),
            log: Vec::new(),
        }
    }
}

/// A user as the service sees it, with the id rendered as hex
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct User {
    #[serde(rename = "_id")]
    pub id: String,
    pub username: String,
    pub log: Vec<Exercise>,
}

impl User {
    pub fn summary(&self) -> UserSummary {
        UserSummary {
            id: self.id.clone(),
            username: self.username.clone(),
        }
    }
}

impl From<UserDocument> for User {
    fn from(doc: UserDocument) -> Self {
        User {
            id: doc.id.map(|oid| oid.to_hex()).unwrap_or_default(),
            username: doc.username,
            log: doc.log,
        }
    }
}

/// Id and username only; returned when a registration hits an existing user
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct UserSummary {
    #[serde(rename = "_id")]
    pub id: String,
    pub username: String,
}

/// Outcome of `POST /api/users`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Registration {
    Created(User),
    Existing(UserSummary),
}

/// Form or JSON body of `POST /api/users`
#[derive(Debug, Deserialize)]
pub struct CreateUserForm {
    #[serde(default)]
    pub username: Option<String>,
}

/// Username after trimming, checked before it reaches the store
#[derive(Debug, Validate)]
pub struct CreateUserRequest {
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,
}

impl From<CreateUserForm> for CreateUserRequest {
    fn from(form: CreateUserForm) -> Self {
        CreateUserRequest {
            username: form.username.unwrap_or_default().trim().to_string(),
        }
    }
}
