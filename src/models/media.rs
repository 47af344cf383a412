//! Media library. Slides only hold an asset id; this module owns the rows.

use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::errors::AppError;

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct MediaAsset {
    pub id: i64,
    pub title: String,
    pub url: String,
    pub thumbnail_url: String,
    pub created_at: String,
}

impl MediaAsset {
    /// Small image for pickers and admin lists; the full image if no
    /// thumbnail was registered.
    pub fn preview_url(&self) -> &str {
        if self.thumbnail_url.is_empty() {
            &self.url
        } else {
            &self.thumbnail_url
        }
    }
}

/// One entry returned to the media picker.
#[derive(Debug, Clone, Serialize)]
pub struct PickerItem {
    pub id: i64,
    pub title: String,
    pub preview_url: String,
}

impl From<MediaAsset> for PickerItem {
    fn from(asset: MediaAsset) -> Self {
        PickerItem {
            id: asset.id,
            preview_url: asset.preview_url().to_string(),
            title: asset.title,
        }
    }
}

#[derive(Debug, Clone)]
pub struct NewAsset {
    pub title: String,
    pub url: String,
    pub thumbnail_url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AssetForm {
    #[serde(default)]
    pub title: String,
    pub url: String,
    #[serde(default)]
    pub thumbnail_url: String,
    pub csrf_token: String,
}

pub async fn find_all(pool: &SqlitePool) -> Result<Vec<MediaAsset>, AppError> {
    let assets = sqlx::query_as::<_, MediaAsset>(
        "SELECT id, title, url, thumbnail_url, created_at FROM media_assets ORDER BY id DESC",
    )
    .fetch_all(pool)
    .await?;
    Ok(assets)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> Result<Option<MediaAsset>, AppError> {
    let asset = sqlx::query_as::<_, MediaAsset>(
        "SELECT id, title, url, thumbnail_url, created_at FROM media_assets WHERE id = ?1",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(asset)
}

pub async fn create(pool: &SqlitePool, new: &NewAsset) -> Result<i64, AppError> {
    let result = sqlx::query(
        "INSERT INTO media_assets (title, url, thumbnail_url) VALUES (?1, ?2, ?3)",
    )
    .bind(&new.title)
    .bind(&new.url)
    .bind(&new.thumbnail_url)
    .execute(pool)
    .await?;
    Ok(result.last_insert_rowid())
}

/// Remove an asset. Slides pointing at it stay and are skipped when rendered.
pub async fn delete(pool: &SqlitePool, id: i64) -> Result<(), AppError> {
    sqlx::query("DELETE FROM media_assets WHERE id = ?1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(())
}
