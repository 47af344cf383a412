use serde::{Deserialize, Serialize};

/// A slide row.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Slide {
    pub id: i64,
    pub slider_id: i64,
    pub title: String,
    pub image_id: i64,
    pub link_url: String,
    pub description: String,
    pub alt_text: String,
    pub sort_order: i64,
    pub slide_key: String,
}

/// Slide as listed under its slider in the admin, with the asset preview if
/// the media reference still resolves.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct SlideListItem {
    pub id: i64,
    pub title: String,
    pub image_id: i64,
    pub sort_order: i64,
    pub slide_key: String,
    pub preview_url: Option<String>,
}

/// Validated input for create/update.
#[derive(Debug, Clone)]
pub struct NewSlide {
    pub slider_id: i64,
    pub title: String,
    pub image_id: i64,
    pub link_url: String,
    pub description: String,
    pub alt_text: String,
    pub sort_order: i64,
    pub slide_key: String,
}

/// Form input for creating/editing a slide. Numeric fields arrive as text so
/// that a blank or garbled value becomes a validation message, not a 400.
#[derive(Debug, Clone, Deserialize)]
pub struct SlideForm {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub image_id: String,
    #[serde(default)]
    pub link_url: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub alt_text: String,
    #[serde(default)]
    pub sort_order: String,
    #[serde(default)]
    pub slide_key: String,
    pub csrf_token: String,
}
