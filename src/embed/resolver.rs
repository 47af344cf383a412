use serde::Serialize;
use sqlx::SqlitePool;

use crate::errors::AppError;
use crate::models::slider;
use crate::navigation::fragment;

/// One displayable slide, positioned within the filtered sequence.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderSlide {
    /// 1-based position after slides with unresolvable media were dropped.
    pub position: usize,
    pub slide_key: String,
    pub title: String,
    pub image_url: String,
    pub link_url: String,
    pub description: String,
    pub alt_text: String,
}

/// Everything the page needs to draw a slider and drive its navigation.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderModel {
    pub slug: String,
    pub title: String,
    pub fragment_prefix: String,
    pub count: usize,
    pub slides: Vec<RenderSlide>,
}

#[derive(sqlx::FromRow)]
struct SlideRow {
    id: i64,
    title: String,
    link_url: String,
    description: String,
    alt_text: String,
    slide_key: String,
    image_url: Option<String>,
}

/// Load the render model for a slug.
///
/// Returns `Ok(None)` when the slug is unknown or none of its slides has a
/// displayable image.
pub async fn resolve(pool: &SqlitePool, slug: &str) -> Result<Option<RenderModel>, AppError> {
    let Some(group) = slider::find_by_slug(pool, slug).await? else {
        log::debug!("No slider with slug '{slug}'");
        return Ok(None);
    };

    let rows = sqlx::query_as::<_, SlideRow>(
        "SELECT s.id, s.title, s.link_url, s.description, s.alt_text, s.slide_key, \
                m.url AS image_url \
         FROM slides s \
         LEFT JOIN media_assets m ON m.id = s.image_id \
         WHERE s.slider_id = ?1 \
         ORDER BY s.sort_order, s.id",
    )
    .bind(group.id)
    .fetch_all(pool)
    .await?;

    let slides: Vec<RenderSlide> = rows
        .into_iter()
        .filter_map(|mut row| {
            let image_url = row.image_url.take().filter(|url| !url.trim().is_empty());
            if image_url.is_none() {
                log::debug!("Slider '{slug}': skipping slide {} with unresolved media", row.id);
            }
            Some((row, image_url?))
        })
        .enumerate()
        .map(|(i, (row, image_url))| RenderSlide {
            position: i + 1,
            slide_key: row.slide_key,
            title: row.title,
            image_url,
            link_url: row.link_url,
            description: row.description,
            alt_text: row.alt_text,
        })
        .collect();

    if slides.is_empty() {
        return Ok(None);
    }

    Ok(Some(RenderModel {
        fragment_prefix: fragment::prefix_for_slug(&group.slug),
        slug: group.slug,
        title: group.title,
        count: slides.len(),
        slides,
    }))
}
