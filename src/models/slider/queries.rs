use sqlx::SqlitePool;

use crate::errors::AppError;
use super::types::*;

const SELECT_SLIDER: &str = "SELECT id, title, slug, description, created_at FROM slider_groups";

/// Normalize free text into a slug: lowercase ASCII alphanumerics with runs of
/// anything else collapsed into single hyphens, trimmed at both ends.
pub fn slugify(input: &str) -> String {
    let mut slug = String::with_capacity(input.len());
    let mut pending_hyphen = false;
    for c in input.trim().chars() {
        if c.is_ascii_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(c.to_ascii_lowercase());
        } else {
            pending_hyphen = true;
        }
    }
    slug
}

/// All slider groups with their slide counts, newest first.
pub async fn find_all_with_counts(pool: &SqlitePool) -> Result<Vec<SliderListItem>, AppError> {
    let items = sqlx::query_as::<_, SliderListItem>(
        "SELECT s.id, s.title, s.slug, s.description, s.created_at, \
                COUNT(sl.id) AS slide_count \
         FROM slider_groups s \
         LEFT JOIN slides sl ON s.id = sl.slider_id \
         GROUP BY s.id \
         ORDER BY s.created_at DESC, s.id DESC",
    )
    .fetch_all(pool)
    .await?;
    Ok(items)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> Result<Option<SliderGroup>, AppError> {
    let sql = format!("{SELECT_SLIDER} WHERE id = ?1");
    let slider = sqlx::query_as::<_, SliderGroup>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(slider)
}

pub async fn find_by_slug(pool: &SqlitePool, slug: &str) -> Result<Option<SliderGroup>, AppError> {
    let sql = format!("{SELECT_SLIDER} WHERE slug = ?1");
    let slider = sqlx::query_as::<_, SliderGroup>(&sql)
        .bind(slug)
        .fetch_optional(pool)
        .await?;
    Ok(slider)
}

/// Insert a slider group. Fails with a UNIQUE violation on a duplicate slug.
pub async fn create(pool: &SqlitePool, new: &NewSlider) -> Result<i64, AppError> {
    let result = sqlx::query(
        "INSERT INTO slider_groups (title, slug, description) VALUES (?1, ?2, ?3)",
    )
    .bind(&new.title)
    .bind(&new.slug)
    .bind(&new.description)
    .execute(pool)
    .await?;
    Ok(result.last_insert_rowid())
}

/// Update a slider group. Returns `AppError::NotFound` if the id is unknown.
pub async fn update(pool: &SqlitePool, id: i64, new: &NewSlider) -> Result<(), AppError> {
    let result = sqlx::query(
        "UPDATE slider_groups SET title = ?1, slug = ?2, description = ?3 WHERE id = ?4",
    )
    .bind(&new.title)
    .bind(&new.slug)
    .bind(&new.description)
    .bind(id)
    .execute(pool)
    .await?;
    if result.rows_affected() == 0 {
        return Err(AppError::NotFound);
    }
    Ok(())
}

/// Delete a slider group; its slides go with it through the FK cascade.
pub async fn delete(pool: &SqlitePool, id: i64) -> Result<(), AppError> {
    sqlx::query("DELETE FROM slider_groups WHERE id = ?1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(())
}

pub async fn count(pool: &SqlitePool) -> Result<i64, AppError> {
    let row: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM slider_groups")
        .fetch_one(pool)
        .await?;
    Ok(row.0)
}
