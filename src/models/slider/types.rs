use serde::{Deserialize, Serialize};

/// A slider group row.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct SliderGroup {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub description: String,
    pub created_at: String,
}

impl SliderGroup {
    /// The tag editors paste into page content.
    pub fn embed_tag(&self) -> String {
        format!("[multi_slider id=\"{}\"]", self.slug)
    }
}

/// Slider group as shown in the admin list.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct SliderListItem {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub description: String,
    pub created_at: String,
    pub slide_count: i64,
}

impl SliderListItem {
    pub fn embed_tag(&self) -> String {
        format!("[multi_slider id=\"{}\"]", self.slug)
    }
}

/// Validated input for create/update.
#[derive(Debug, Clone)]
pub struct NewSlider {
    pub title: String,
    pub slug: String,
    pub description: String,
}

/// Form input for creating/editing a slider group.
#[derive(Debug, Clone, Deserialize)]
pub struct SliderForm {
    pub title: String,
    pub slug: String,
    #[serde(default)]
    pub description: String,
    pub csrf_token: String,
}
