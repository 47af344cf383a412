use sqlx::SqlitePool;

use crate::errors::AppError;
use super::types::*;

const SELECT_PAGE: &str = "SELECT id, title, slug, body, created_at, updated_at FROM pages";

pub async fn find_all(pool: &SqlitePool) -> Result<Vec<Page>, AppError> {
    let sql = format!("{SELECT_PAGE} ORDER BY title, id");
    let pages = sqlx::query_as::<_, Page>(&sql).fetch_all(pool).await?;
    Ok(pages)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> Result<Option<Page>, AppError> {
    let sql = format!("{SELECT_PAGE} WHERE id = ?1");
    let page = sqlx::query_as::<_, Page>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(page)
}

pub async fn find_by_slug(pool: &SqlitePool, slug: &str) -> Result<Option<Page>, AppError> {
    let sql = format!("{SELECT_PAGE} WHERE slug = ?1");
    let page = sqlx::query_as::<_, Page>(&sql)
        .bind(slug)
        .fetch_optional(pool)
        .await?;
    Ok(page)
}

pub async fn create(pool: &SqlitePool, new: &NewPage) -> Result<i64, AppError> {
    let result = sqlx::query("INSERT INTO pages (title, slug, body) VALUES (?1, ?2, ?3)")
        .bind(&new.title)
        .bind(&new.slug)
        .bind(&new.body)
        .execute(pool)
        .await?;
    Ok(result.last_insert_rowid())
}

pub async fn update(pool: &SqlitePool, id: i64, new: &NewPage) -> Result<(), AppError> {
    let now = chrono::Utc::now().format("%Y-%m-%dT%H:%M:%S").to_string();
    let result = sqlx::query(
        "UPDATE pages SET title = ?1, slug = ?2, body = ?3, updated_at = ?4 WHERE id = ?5",
    )
    .bind(&new.title)
    .bind(&new.slug)
    .bind(&new.body)
    .bind(&now)
    .bind(id)
    .execute(pool)
    .await?;
    if result.rows_affected() == 0 {
        return Err(AppError::NotFound);
    }
    Ok(())
}

pub async fn delete(pool: &SqlitePool, id: i64) -> Result<(), AppError> {
    sqlx::query("DELETE FROM pages WHERE id = ?1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(())
}
