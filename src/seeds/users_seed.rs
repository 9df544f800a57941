use crate::database::MongoDB;
use crate::models::{User, UserRole};
use anyhow::Result;

/// Seed the 3 sample users (admin, client, vendeur) into MongoDB.
/// No dedup check: running twice inserts the batch twice.
pub async fn seed_users(db: &MongoDB) -> Result<u64> {
    let collection = db.collection::<User>("users");

    let users = sample_users();
    log::info!("🌱 Seeding {} sample users into users collection...", users.len());

    let result = collection.insert_many(&users).await?;

    Ok(result.inserted_ids.len() as u64)
}

/// Builds the fixed list of sample accounts. MongoDB assigns `_id` on insert.
pub fn sample_users() -> Vec<User> {
    vec![
        User {
            id: None,
            email: "admin@admin.com".into(),
            password: "admin123".into(),
            role: UserRole::Admin,
            username: "admin".into(),
            first_name: "Admin".into(),
            last_name: "User".into(),
        },
        User {
            id: None,
            email: "client@client.com".into(),
            password: "client123".into(),
            role: UserRole::Client,
            username: "client".into(),
            first_name: "Client".into(),
            last_name: "User".into(),
        },
        User {
            id: None,
            email: "vendeur@vendeur.com".into(),
            password: "vendeur123".into(),
            role: UserRole::Vendeur,
            username: "vendeur".into(),
            first_name: "Vendeur".into(),
            last_name: "User".into(),
        },
    ]
}
