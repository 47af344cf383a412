use actix_web::{web, HttpResponse};
use serde::Deserialize;

use crate::config::AppConfig;
use crate::db::DbPool;
use crate::embed::{self, RenderOptions};
use crate::errors::{AppError, render};
use crate::models::page;
use crate::templates_structs::{PublicPageTemplate, PublicSliderTemplate};

#[derive(Debug, Deserialize)]
pub struct SliderQuery {
    /// 1-based slide to show before any script runs.
    pub slide: Option<String>,
}

/// GET /sliders/{slug}
/// A single slider on its own page. Unknown slugs render an empty page, the
/// same as an embed tag pointing nowhere.
pub async fn slider(
    pool: web::Data<DbPool>,
    config: web::Data<AppConfig>,
    path: web::Path<String>,
    query: web::Query<SliderQuery>,
) -> Result<HttpResponse, AppError> {
    let slug = path.into_inner();
    let requested_position = query
        .slide
        .as_deref()
        .and_then(|s| s.trim().parse::<usize>().ok());

    let (title, slider_html) = match embed::resolve(&pool, &slug).await? {
        Some(model) => {
            let html = embed::render_slider(&model, RenderOptions { requested_position })?;
            (model.title, html)
        }
        None => {
            log::debug!("No displayable slider for slug '{slug}'");
            (String::new(), String::new())
        }
    };

    render(PublicSliderTemplate {
        app_name: config.app_name.clone(),
        title,
        slider_html,
    })
}

/// GET /pages/{slug}
pub async fn page(
    pool: web::Data<DbPool>,
    config: web::Data<AppConfig>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let found = page::find_by_slug(&pool, &path.into_inner())
        .await?
        .ok_or(AppError::NotFound)?;

    let blocks = embed::expand(&pool, &found.body).await;

    render(PublicPageTemplate {
        app_name: config.app_name.clone(),
        title: found.title,
        blocks,
    })
}
