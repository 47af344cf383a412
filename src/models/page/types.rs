use serde::{Deserialize, Serialize};

/// A content page. The body is plain text that may contain
/// `[multi_slider id="..."]` tags.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Page {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub body: String,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone)]
pub struct NewPage {
    pub title: String,
    pub slug: String,
    pub body: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PageForm {
    pub title: String,
    pub slug: String,
    #[serde(default)]
    pub body: String,
    pub csrf_token: String,
}
