//! Shared test infrastructure for model and HTTP tests.
//!
//! - `setup_test_db()` - isolated in-memory database with migrations applied
//! - `insert_*` helpers - minimal rows for the slider domain

#![allow(dead_code)]

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;

use multi_slider::db::MIGRATOR;
use multi_slider::models::{media, slide, slider};

// ============================================================================
// TEST CONSTANTS
// ============================================================================

pub const ADMIN_USER: &str = "admin";
pub const ADMIN_PASS: &str = "admin123";

// ============================================================================
// DATABASE SETUP
// ============================================================================

/// Setup a fresh in-memory database with the full schema.
///
/// The pool holds a single connection that never expires, so every query in
/// a test sees the same in-memory database.
pub async fn setup_test_db() -> SqlitePool {
    let options = SqliteConnectOptions::new()
        .in_memory(true)
        .foreign_keys(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await
        .expect("Failed to open in-memory database");
    MIGRATOR.run(&pool).await.expect("Failed to run migrations");
    pool
}

// ============================================================================
// ROW HELPERS
// ============================================================================

pub async fn insert_slider(pool: &SqlitePool, title: &str, slug: &str) -> i64 {
    slider::create(
        pool,
        &slider::NewSlider {
            title: title.to_string(),
            slug: slug.to_string(),
            description: String::new(),
        },
    )
    .await
    .expect("Failed to insert slider")
}

pub async fn insert_asset(pool: &SqlitePool, title: &str, url: &str) -> i64 {
    media::create(
        pool,
        &media::NewAsset {
            title: title.to_string(),
            url: url.to_string(),
            thumbnail_url: String::new(),
        },
    )
    .await
    .expect("Failed to insert media asset")
}

pub async fn insert_slide(pool: &SqlitePool, slider_id: i64, title: &str, image_id: i64, sort_order: i64) -> i64 {
    slide::create(
        pool,
        &slide::NewSlide {
            slider_id,
            title: title.to_string(),
            image_id,
            link_url: String::new(),
            description: String::new(),
            alt_text: format!("{title} alt"),
            sort_order,
            slide_key: title.to_lowercase(),
        },
    )
    .await
    .expect("Failed to insert slide")
}
