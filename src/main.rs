mod database;
mod models;
mod seeds;

use anyhow::Result;
use dotenv::dotenv;

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    log::info!("🌱 Starting user seeder...");

    // Initialize MongoDB connection
    let db = database::MongoDB::new().await?;

    let inserted = seeds::users_seed::seed_users(&db).await?;

    log::info!("✓ {} users created successfully!", inserted);

    Ok(())
}
