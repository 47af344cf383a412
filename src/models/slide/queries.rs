use sqlx::SqlitePool;

use crate::errors::AppError;
use super::types::*;

const SELECT_SLIDE: &str = "SELECT id, slider_id, title, image_id, link_url, description, \
                                   alt_text, sort_order, slide_key \
                            FROM slides";

/// Slides of a slider in display order: by order field, ties by insertion.
pub async fn find_for_slider(pool: &SqlitePool, slider_id: i64) -> Result<Vec<Slide>, AppError> {
    let sql = format!("{SELECT_SLIDE} WHERE slider_id = ?1 ORDER BY sort_order, id");
    let slides = sqlx::query_as::<_, Slide>(&sql)
        .bind(slider_id)
        .fetch_all(pool)
        .await?;
    Ok(slides)
}

/// Admin listing of a slider's slides with asset previews.
pub async fn find_list_items(pool: &SqlitePool, slider_id: i64) -> Result<Vec<SlideListItem>, AppError> {
    let items = sqlx::query_as::<_, SlideListItem>(
        "SELECT s.id, s.title, s.image_id, s.sort_order, s.slide_key, \
                CASE WHEN m.id IS NULL THEN NULL \
                     WHEN m.thumbnail_url <> '' THEN m.thumbnail_url \
                     ELSE m.url END AS preview_url \
         FROM slides s \
         LEFT JOIN media_assets m ON m.id = s.image_id \
         WHERE s.slider_id = ?1 \
         ORDER BY s.sort_order, s.id",
    )
    .bind(slider_id)
    .fetch_all(pool)
    .await?;
    Ok(items)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> Result<Option<Slide>, AppError> {
    let sql = format!("{SELECT_SLIDE} WHERE id = ?1");
    let slide = sqlx::query_as::<_, Slide>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(slide)
}

/// Order value that places a new slide after every existing one.
pub async fn next_sort_order(pool: &SqlitePool, slider_id: i64) -> Result<i64, AppError> {
    let row: (i64,) = sqlx::query_as(
        "SELECT COALESCE(MAX(sort_order) + 1, 0) FROM slides WHERE slider_id = ?1",
    )
    .bind(slider_id)
    .fetch_one(pool)
    .await?;
    Ok(row.0)
}

pub async fn create(pool: &SqlitePool, new: &NewSlide) -> Result<i64, AppError> {
    let result = sqlx::query(
        "INSERT INTO slides (slider_id, title, image_id, link_url, description, alt_text, sort_order, slide_key) \
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
    )
    .bind(new.slider_id)
    .bind(&new.title)
    .bind(new.image_id)
    .bind(&new.link_url)
    .bind(&new.description)
    .bind(&new.alt_text)
    .bind(new.sort_order)
    .bind(&new.slide_key)
    .execute(pool)
    .await?;
    Ok(result.last_insert_rowid())
}

/// Update a slide's content. The owning slider never changes.
pub async fn update(pool: &SqlitePool, id: i64, new: &NewSlide) -> Result<(), AppError> {
    let result = sqlx::query(
        "UPDATE slides SET title = ?1, image_id = ?2, link_url = ?3, description = ?4, \
                alt_text = ?5, sort_order = ?6, slide_key = ?7 \
         WHERE id = ?8",
    )
    .bind(&new.title)
    .bind(new.image_id)
    .bind(&new.link_url)
    .bind(&new.description)
    .bind(&new.alt_text)
    .bind(new.sort_order)
    .bind(&new.slide_key)
    .bind(id)
    .execute(pool)
    .await?;
    if result.rows_affected() == 0 {
        return Err(AppError::NotFound);
    }
    Ok(())
}

pub async fn delete(pool: &SqlitePool, id: i64) -> Result<(), AppError> {
    sqlx::query("DELETE FROM slides WHERE id = ?1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(())
}

pub async fn count_for_slider(pool: &SqlitePool, slider_id: i64) -> Result<i64, AppError> {
    let row: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM slides WHERE slider_id = ?1")
        .bind(slider_id)
        .fetch_one(pool)
        .await?;
    Ok(row.0)
}
