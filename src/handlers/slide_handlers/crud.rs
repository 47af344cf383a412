use actix_session::Session;
use actix_web::{web, HttpResponse};

use crate::auth::{csrf, validate};
use crate::auth::session::{require_permission, require_user_id, set_flash};
use crate::config::AppConfig;
use crate::db::DbPool;
use crate::errors::{AppError, render};
use crate::handlers::auth_handlers::CsrfOnly;
use crate::models::{media, slide, slider, user::SLIDER_MANAGE};
use crate::models::slide::{NewSlide, Slide, SlideForm};
use crate::templates_structs::{MediaOption, PageContext, SliderDetailTemplate, SlideFormTemplate};

/// Media library entries for the image select box, newest first.
pub async fn media_options(pool: &DbPool, selected: Option<i64>) -> Result<Vec<MediaOption>, AppError> {
    let assets = media::find_all(pool).await?;
    Ok(assets
        .into_iter()
        .map(|a| MediaOption {
            id: a.id,
            selected: Some(a.id) == selected,
            title: a.title,
        })
        .collect())
}

/// Normalize and validate a submitted slide form. The image must exist in the
/// media library at save time; it may disappear later.
async fn validate_form(
    pool: &DbPool,
    slider_id: i64,
    form: &SlideForm,
    default_order: i64,
) -> Result<(NewSlide, Vec<String>), AppError> {
    let mut errors: Vec<String> = vec![];

    let image_id = match validate::parse_integer(&form.image_id, "Image", None) {
        Ok(id) => {
            if media::find_by_id(pool, id).await?.is_none() {
                errors.push("Selected image no longer exists".to_string());
            }
            id
        }
        Err(e) => {
            errors.push(e);
            0
        }
    };
    let sort_order = validate::parse_integer(&form.sort_order, "Order", Some(default_order))
        .unwrap_or_else(|e| {
            errors.push(e);
            default_order
        });

    let new = NewSlide {
        slider_id,
        title: form.title.trim().to_string(),
        image_id,
        link_url: form.link_url.trim().to_string(),
        description: form.description.trim().to_string(),
        alt_text: form.alt_text.trim().to_string(),
        sort_order,
        slide_key: form.slide_key.trim().to_string(),
    };

    errors.extend(validate::validate_required(&new.title, "Title", 255));
    errors.extend(validate::validate_url(&new.link_url, "Link", false));
    errors.extend(validate::validate_optional(&new.description, "Description", 2000));
    errors.extend(validate::validate_optional(&new.alt_text, "Alt text", 255));
    errors.extend(validate::validate_optional(&new.slide_key, "Slide key", 100));

    Ok((new, errors))
}

fn draft(id: i64, new: &NewSlide) -> Slide {
    Slide {
        id,
        slider_id: new.slider_id,
        title: new.title.clone(),
        image_id: new.image_id,
        link_url: new.link_url.clone(),
        description: new.description.clone(),
        alt_text: new.alt_text.clone(),
        sort_order: new.sort_order,
        slide_key: new.slide_key.clone(),
    }
}

/// POST /admin/sliders/{id}/slides
pub async fn create(
    pool: web::Data<DbPool>,
    config: web::Data<AppConfig>,
    session: Session,
    path: web::Path<i64>,
    form: web::Form<SlideForm>,
) -> Result<HttpResponse, AppError> {
    require_permission(&session, SLIDER_MANAGE)?;
    csrf::validate_csrf(&session, &form.csrf_token)?;
    let user_id = require_user_id(&session)?;

    let slider_id = path.into_inner();
    let group = slider::find_by_id(&pool, slider_id).await?.ok_or(AppError::NotFound)?;
    let next_sort_order = slide::next_sort_order(&pool, slider_id).await?;

    let (new, errors) = validate_form(&pool, slider_id, &form, next_sort_order).await?;

    if !errors.is_empty() {
        let slides = slide::find_list_items(&pool, slider_id).await?;
        let media = media_options(&pool, Some(new.image_id)).await?;
        let history = crate::audit::find_for_target(&pool, "slider", slider_id).await?;
        let ctx = PageContext::build(&session, &config.app_name, "/admin/sliders")?;
        return render(SliderDetailTemplate {
            ctx,
            slider: group,
            slides,
            media,
            next_sort_order,
            history,
            errors,
        });
    }

    let slide_id = slide::create(&pool, &new).await?;

    let details = serde_json::json!({
        "slider_id": slider_id,
        "image_id": new.image_id,
        "summary": format!("Added slide '{}' to '{}'", new.title, group.title)
    });
    let _ = crate::audit::log(&pool, user_id, "slide.created", "slide", slide_id, details).await;

    set_flash(&session, "Slide added successfully");
    Ok(HttpResponse::SeeOther()
        .insert_header(("Location", format!("/admin/sliders/{slider_id}")))
        .finish())
}

/// GET /admin/slides/{id}/edit
pub async fn edit_form(
    pool: web::Data<DbPool>,
    config: web::Data<AppConfig>,
    session: Session,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    require_permission(&session, SLIDER_MANAGE)?;

    let item = slide::find_by_id(&pool, path.into_inner()).await?.ok_or(AppError::NotFound)?;
    let group = slider::find_by_id(&pool, item.slider_id).await?.ok_or(AppError::NotFound)?;
    let media = media_options(&pool, Some(item.image_id)).await?;

    let ctx = PageContext::build(&session, &config.app_name, "/admin/sliders")?;
    render(SlideFormTemplate {
        ctx,
        slider: group,
        slide: item,
        media,
        errors: vec![],
    })
}

/// POST /admin/slides/{id}
pub async fn update(
    pool: web::Data<DbPool>,
    config: web::Data<AppConfig>,
    session: Session,
    path: web::Path<i64>,
    form: web::Form<SlideForm>,
) -> Result<HttpResponse, AppError> {
    require_permission(&session, SLIDER_MANAGE)?;
    csrf::validate_csrf(&session, &form.csrf_token)?;
    let user_id = require_user_id(&session)?;

    let slide_id = path.into_inner();
    let existing = slide::find_by_id(&pool, slide_id).await?.ok_or(AppError::NotFound)?;
    let group = slider::find_by_id(&pool, existing.slider_id).await?.ok_or(AppError::NotFound)?;

    let (new, errors) = validate_form(&pool, existing.slider_id, &form, existing.sort_order).await?;

    if !errors.is_empty() {
        let media = media_options(&pool, Some(new.image_id)).await?;
        let ctx = PageContext::build(&session, &config.app_name, "/admin/sliders")?;
        return render(SlideFormTemplate {
            ctx,
            slider: group,
            slide: draft(slide_id, &new),
            media,
            errors,
        });
    }

    slide::update(&pool, slide_id, &new).await?;

    let details = serde_json::json!({
        "slider_id": group.id,
        "old_sort_order": existing.sort_order,
        "sort_order": new.sort_order,
        "summary": format!("Updated slide '{}' in '{}'", new.title, group.title)
    });
    let _ = crate::audit::log(&pool, user_id, "slide.updated", "slide", slide_id, details).await;

    set_flash(&session, "Slide updated successfully");
    Ok(HttpResponse::SeeOther()
        .insert_header(("Location", format!("/admin/sliders/{}", group.id)))
        .finish())
}

/// POST /admin/slides/{id}/delete
pub async fn delete(
    pool: web::Data<DbPool>,
    session: Session,
    path: web::Path<i64>,
    form: web::Form<CsrfOnly>,
) -> Result<HttpResponse, AppError> {
    require_permission(&session, SLIDER_MANAGE)?;
    csrf::validate_csrf(&session, &form.csrf_token)?;
    let user_id = require_user_id(&session)?;

    let slide_id = path.into_inner();
    let existing = slide::find_by_id(&pool, slide_id).await?.ok_or(AppError::NotFound)?;

    slide::delete(&pool, slide_id).await?;

    let details = serde_json::json!({
        "slider_id": existing.slider_id,
        "summary": format!("Deleted slide '{}'", existing.title)
    });
    let _ = crate::audit::log(&pool, user_id, "slide.deleted", "slide", slide_id, details).await;

    set_flash(&session, "Slide deleted successfully");
    Ok(HttpResponse::SeeOther()
        .insert_header(("Location", format!("/admin/sliders/{}", existing.slider_id)))
        .finish())
}
