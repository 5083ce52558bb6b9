use async_trait::async_trait;
use mongodb::bson::{doc, oid::ObjectId};
use mongodb::{Client, Collection, Database};

use crate::config::AppConfig;
use crate::error::StoreError;
use crate::models::{Exercise, User, UserDocument};
use crate::services::UserStore;

pub const USERS_COLLECTION: &str = "users";

pub async fn init_db(config: &AppConfig) -> Result<Database, mongodb::error::Error> {
    let client = Client::with_uri_str(&config.mongodb_uri).await?;

    // Ping the database to verify connection
    client
        .database("admin")
        .run_command(doc! {"ping": 1})
        .await?;

    log::info!("Successfully connected to MongoDB");

    Ok(client.database(&config.database_name))
}

/// `UserStore` backed by the `users` collection
#[derive(Clone)]
pub struct MongoUserStore {
    users: Collection<UserDocument>,
}

impl MongoUserStore {
    pub fn new(db: &Database) -> Self {
        Self {
            users: db.collection::<UserDocument>(USERS_COLLECTION),
        }
    }
}

#[async_trait]
impl UserStore for MongoUserStore {
    fn backend(&self) -> &'static str {
        "mongo"
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, StoreError> {
        let found = self.users.find_one(doc! { "username": username }).await?;
        Ok(found.map(User::from))
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<User>, StoreError> {
        let object_id = match ObjectId::parse_str(id) {
            Ok(oid) => oid,
            Err(_) => return Ok(None),
        };
        let found = self.users.find_one(doc! { "_id": object_id }).await?;
        Ok(found.map(User::from))
    }

    async fn insert_user(&self, username: &str) -> Result<String, StoreError> {
        let result = self.users.insert_one(UserDocument::new(username)).await?;
        let object_id = result
            .inserted_id
            .as_object_id()
            .ok_or(StoreError::MissingId)?;
        Ok(object_id.to_hex())
    }

    async fn list_users(&self) -> Result<Vec<User>, StoreError> {
        let mut cursor = self.users.find(doc! {}).await?;

        let mut users = Vec::new();
        while cursor.advance().await? {
            let user = cursor.deserialize_current()?;
            users.push(User::from(user));
        }

        Ok(users)
    }

    async fn append_exercise(&self, id: &str, exercise: &Exercise) -> Result<bool, StoreError> {
        let object_id = match ObjectId::parse_str(id) {
            Ok(oid) => oid,
            Err(_) => return Ok(false),
        };
        let entry = mongodb::bson::to_bson(exercise)?;

        let result = self
            .users
            .update_one(doc! { "_id": object_id }, doc! { "$push": { "log": entry } })
            .await?;

        Ok(result.matched_count > 0)
    }
}
