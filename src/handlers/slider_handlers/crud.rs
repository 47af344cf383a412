use actix_session::Session;
use actix_web::{web, HttpResponse};

use crate::auth::{csrf, validate};
use crate::auth::session::{require_permission, require_user_id, set_flash};
use crate::config::AppConfig;
use crate::db::DbPool;
use crate::errors::{AppError, is_unique_violation, render};
use crate::handlers::auth_handlers::CsrfOnly;
use crate::handlers::slide_handlers::media_options;
use crate::models::{slide, slider, user::SLIDER_MANAGE};
use crate::models::slider::{NewSlider, SliderForm, SliderGroup};
use crate::templates_structs::{PageContext, SliderDetailTemplate, SliderFormTemplate};

/// Normalize and validate a submitted slider form.
fn validate_form(form: &SliderForm) -> (NewSlider, Vec<String>) {
    let new = NewSlider {
        title: form.title.trim().to_string(),
        slug: slider::slugify(&form.slug),
        description: form.description.trim().to_string(),
    };
    let mut errors: Vec<String> = vec![];
    errors.extend(validate::validate_required(&new.title, "Title", 255));
    errors.extend(validate::validate_slug(&new.slug));
    errors.extend(validate::validate_optional(&new.description, "Description", 2000));
    (new, errors)
}

/// The form re-rendered with what the editor typed, so nothing is lost.
fn draft(id: i64, new: &NewSlider) -> SliderGroup {
    SliderGroup {
        id,
        title: new.title.clone(),
        slug: new.slug.clone(),
        description: new.description.clone(),
        created_at: String::new(),
    }
}

/// GET /admin/sliders/new
pub async fn new_form(
    config: web::Data<AppConfig>,
    session: Session,
) -> Result<HttpResponse, AppError> {
    require_permission(&session, SLIDER_MANAGE)?;

    let ctx = PageContext::build(&session, &config.app_name, "/admin/sliders")?;
    render(SliderFormTemplate {
        ctx,
        form_action: "/admin/sliders".to_string(),
        form_title: "New Slider".to_string(),
        slider: None,
        errors: vec![],
    })
}

/// POST /admin/sliders
pub async fn create(
    pool: web::Data<DbPool>,
    config: web::Data<AppConfig>,
    session: Session,
    form: web::Form<SliderForm>,
) -> Result<HttpResponse, AppError> {
    require_permission(&session, SLIDER_MANAGE)?;
    csrf::validate_csrf(&session, &form.csrf_token)?;
    let user_id = require_user_id(&session)?;

    let (new, mut errors) = validate_form(&form);

    if errors.is_empty() {
        match slider::create(&pool, &new).await {
            Ok(slider_id) => {
                let details = serde_json::json!({
                    "slug": &new.slug,
                    "summary": format!("Created slider '{}'", new.title)
                });
                let _ = crate::audit::log(&pool, user_id, "slider.created", "slider", slider_id, details).await;

                set_flash(&session, "Slider created successfully");
                return Ok(HttpResponse::SeeOther()
                    .insert_header(("Location", format!("/admin/sliders/{slider_id}")))
                    .finish());
            }
            Err(e) if is_unique_violation(&e) => {
                errors.push("A slider with this slug already exists".to_string());
            }
            Err(e) => return Err(e),
        }
    }

    let ctx = PageContext::build(&session, &config.app_name, "/admin/sliders")?;
    render(SliderFormTemplate {
        ctx,
        form_action: "/admin/sliders".to_string(),
        form_title: "New Slider".to_string(),
        slider: Some(draft(0, &new)),
        errors,
    })
}

/// GET /admin/sliders/{id}
/// Shows the slider's slides in display order and the add-slide form.
pub async fn detail(
    pool: web::Data<DbPool>,
    config: web::Data<AppConfig>,
    session: Session,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    require_permission(&session, SLIDER_MANAGE)?;

    let slider_id = path.into_inner();
    let group = slider::find_by_id(&pool, slider_id).await?.ok_or(AppError::NotFound)?;
    let slides = slide::find_list_items(&pool, slider_id).await?;
    let media = media_options(&pool, None).await?;
    let next_sort_order = slide::next_sort_order(&pool, slider_id).await?;
    let history = crate::audit::find_for_target(&pool, "slider", slider_id).await?;

    let ctx = PageContext::build(&session, &config.app_name, "/admin/sliders")?;
    render(SliderDetailTemplate {
        ctx,
        slider: group,
        slides,
        media,
        next_sort_order,
        history,
        errors: vec![],
    })
}

/// GET /admin/sliders/{id}/edit
pub async fn edit_form(
    pool: web::Data<DbPool>,
    config: web::Data<AppConfig>,
    session: Session,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    require_permission(&session, SLIDER_MANAGE)?;

    let slider_id = path.into_inner();
    let group = slider::find_by_id(&pool, slider_id).await?.ok_or(AppError::NotFound)?;

    let ctx = PageContext::build(&session, &config.app_name, "/admin/sliders")?;
    render(SliderFormTemplate {
        ctx,
        form_action: format!("/admin/sliders/{slider_id}"),
        form_title: "Edit Slider".to_string(),
        slider: Some(group),
        errors: vec![],
    })
}

/// POST /admin/sliders/{id}
pub async fn update(
    pool: web::Data<DbPool>,
    config: web::Data<AppConfig>,
    session: Session,
    path: web::Path<i64>,
    form: web::Form<SliderForm>,
) -> Result<HttpResponse, AppError> {
    require_permission(&session, SLIDER_MANAGE)?;
    csrf::validate_csrf(&session, &form.csrf_token)?;
    let user_id = require_user_id(&session)?;

    let slider_id = path.into_inner();
    let existing = slider::find_by_id(&pool, slider_id).await?.ok_or(AppError::NotFound)?;
    let (new, mut errors) = validate_form(&form);

    if errors.is_empty() {
        match slider::update(&pool, slider_id, &new).await {
            Ok(()) => {
                let details = serde_json::json!({
                    "old_slug": &existing.slug,
                    "slug": &new.slug,
                    "summary": format!("Updated slider '{}'", new.title)
                });
                let _ = crate::audit::log(&pool, user_id, "slider.updated", "slider", slider_id, details).await;

                set_flash(&session, "Slider updated successfully");
                return Ok(HttpResponse::SeeOther()
                    .insert_header(("Location", format!("/admin/sliders/{slider_id}")))
                    .finish());
            }
            Err(e) if is_unique_violation(&e) => {
                errors.push("A slider with this slug already exists".to_string());
            }
            Err(e) => return Err(e),
        }
    }

    let ctx = PageContext::build(&session, &config.app_name, "/admin/sliders")?;
    render(SliderFormTemplate {
        ctx,
        form_action: format!("/admin/sliders/{slider_id}"),
        form_title: "Edit Slider".to_string(),
        slider: Some(draft(slider_id, &new)),
        errors,
    })
}

/// POST /admin/sliders/{id}/delete
/// Deletes a slider together with all of its slides.
pub async fn delete(
    pool: web::Data<DbPool>,
    session: Session,
    path: web::Path<i64>,
    form: web::Form<CsrfOnly>,
) -> Result<HttpResponse, AppError> {
    require_permission(&session, SLIDER_MANAGE)?;
    csrf::validate_csrf(&session, &form.csrf_token)?;
    let user_id = require_user_id(&session)?;

    let slider_id = path.into_inner();
    let group = slider::find_by_id(&pool, slider_id).await?.ok_or(AppError::NotFound)?;
    let slide_count = slide::count_for_slider(&pool, slider_id).await?;

    slider::delete(&pool, slider_id).await?;

    let details = serde_json::json!({
        "slug": &group.slug,
        "slides_removed": slide_count,
        "summary": format!("Deleted slider '{}'", group.title)
    });
    let _ = crate::audit::log(&pool, user_id, "slider.deleted", "slider", slider_id, details).await;

    set_flash(&session, "Slider deleted successfully");
    Ok(HttpResponse::SeeOther()
        .insert_header(("Location", "/admin/sliders"))
        .finish())
}
