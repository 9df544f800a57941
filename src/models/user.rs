use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// User account document as stored in the `users` collection.
/// Field names match the MongoDB documents (camelCase for names).
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub email: String,
    pub password: String, // Plaintext sample credentials for dev/demo only
    pub role: UserRole,
    pub username: String,
    #[serde(rename = "firstName")]
    pub first_name: String,
    #[serde(rename = "lastName")]
    pub last_name: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    Client,
    Vendeur,
}
