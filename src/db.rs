use std::str::FromStr;

use sqlx::migrate::Migrator;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use sqlx::SqlitePool;

use crate::models::user;

pub type DbPool = SqlitePool;

pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

pub async fn init_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .foreign_keys(true);
    SqlitePoolOptions::new()
        .max_connections(8)
        .connect_with(options)
        .await
}

pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    MIGRATOR.run(pool).await?;
    log::info!("Database migrations complete");
    Ok(())
}

/// Create the initial editor account if no users exist yet.
pub async fn seed_admin(pool: &DbPool, username: &str, password_hash: &str) -> Result<(), sqlx::Error> {
    let count = user::count(pool).await?;
    if count > 0 {
        log::info!("Database already has {count} user(s), skipping admin seed");
        return Ok(());
    }
    user::create(
        pool,
        &user::NewUser {
            username: username.to_string(),
            password: password_hash.to_string(),
            display_name: "Administrator".to_string(),
            role: user::ROLE_EDITOR.to_string(),
        },
    )
    .await?;
    log::info!("Seeded editor account '{username}'");
    Ok(())
}
