use actix_session::Session;
use actix_web::{web, HttpResponse};

use crate::auth::{csrf, validate};
use crate::auth::session::{require_permission, require_user_id, set_flash};
use crate::config::AppConfig;
use crate::db::DbPool;
use crate::errors::{AppError, is_unique_violation, render};
use crate::handlers::auth_handlers::CsrfOnly;
use crate::models::{page, slider, user::PAGE_MANAGE};
use crate::models::page::{NewPage, Page, PageForm};
use crate::templates_structs::{PageContext, PageFormTemplate, PageListTemplate};

fn validate_form(form: &PageForm) -> (NewPage, Vec<String>) {
    let new = NewPage {
        title: form.title.trim().to_string(),
        slug: slider::slugify(&form.slug),
        body: form.body.clone(),
    };
    let mut errors: Vec<String> = vec![];
    errors.extend(validate::validate_required(&new.title, "Title", 255));
    errors.extend(validate::validate_slug(&new.slug));
    errors.extend(validate::validate_optional(&new.body, "Body", 100_000));
    (new, errors)
}

fn draft(id: i64, new: &NewPage) -> Page {
    Page {
        id,
        title: new.title.clone(),
        slug: new.slug.clone(),
        body: new.body.clone(),
        created_at: String::new(),
        updated_at: String::new(),
    }
}

fn form_page(
    session: &Session,
    config: &AppConfig,
    form_action: String,
    form_title: &str,
    page: Option<Page>,
    errors: Vec<String>,
) -> Result<HttpResponse, AppError> {
    let ctx = PageContext::build(session, &config.app_name, "/admin/pages")?;
    render(PageFormTemplate {
        ctx,
        form_action,
        form_title: form_title.to_string(),
        page,
        errors,
    })
}

/// GET /admin/pages
pub async fn list(
    pool: web::Data<DbPool>,
    config: web::Data<AppConfig>,
    session: Session,
) -> Result<HttpResponse, AppError> {
    require_permission(&session, PAGE_MANAGE)?;

    let pages = page::find_all(&pool).await?;
    let ctx = PageContext::build(&session, &config.app_name, "/admin/pages")?;
    render(PageListTemplate { ctx, pages })
}

/// GET /admin/pages/new
pub async fn new_form(
    config: web::Data<AppConfig>,
    session: Session,
) -> Result<HttpResponse, AppError> {
    require_permission(&session, PAGE_MANAGE)?;
    form_page(&session, &config, "/admin/pages".to_string(), "New Page", None, vec![])
}

/// POST /admin/pages
pub async fn create(
    pool: web::Data<DbPool>,
    config: web::Data<AppConfig>,
    session: Session,
    form: web::Form<PageForm>,
) -> Result<HttpResponse, AppError> {
    require_permission(&session, PAGE_MANAGE)?;
    csrf::validate_csrf(&session, &form.csrf_token)?;
    let user_id = require_user_id(&session)?;

    let (new, mut errors) = validate_form(&form);

    if errors.is_empty() {
        match page::create(&pool, &new).await {
            Ok(page_id) => {
                let details = serde_json::json!({
                    "slug": &new.slug,
                    "summary": format!("Created page '{}'", new.title)
                });
                let _ = crate::audit::log(&pool, user_id, "page.created", "page", page_id, details).await;

                set_flash(&session, "Page created successfully");
                return Ok(HttpResponse::SeeOther()
                    .insert_header(("Location", "/admin/pages"))
                    .finish());
            }
            Err(e) if is_unique_violation(&e) => {
                errors.push("A page with this slug already exists".to_string());
            }
            Err(e) => return Err(e),
        }
    }

    form_page(&session, &config, "/admin/pages".to_string(), "New Page", Some(draft(0, &new)), errors)
}

/// GET /admin/pages/{id}/edit
pub async fn edit_form(
    pool: web::Data<DbPool>,
    config: web::Data<AppConfig>,
    session: Session,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    require_permission(&session, PAGE_MANAGE)?;

    let page_id = path.into_inner();
    let existing = page::find_by_id(&pool, page_id).await?.ok_or(AppError::NotFound)?;
    form_page(&session, &config, format!("/admin/pages/{page_id}"), "Edit Page", Some(existing), vec![])
}

/// POST /admin/pages/{id}
pub async fn update(
    pool: web::Data<DbPool>,
    config: web::Data<AppConfig>,
    session: Session,
    path: web::Path<i64>,
    form: web::Form<PageForm>,
) -> Result<HttpResponse, AppError> {
    require_permission(&session, PAGE_MANAGE)?;
    csrf::validate_csrf(&session, &form.csrf_token)?;
    let user_id = require_user_id(&session)?;

    let page_id = path.into_inner();
    page::find_by_id(&pool, page_id).await?.ok_or(AppError::NotFound)?;
    let (new, mut errors) = validate_form(&form);

    if errors.is_empty() {
        match page::update(&pool, page_id, &new).await {
            Ok(()) => {
                let details = serde_json::json!({
                    "slug": &new.slug,
                    "summary": format!("Updated page '{}'", new.title)
                });
                let _ = crate::audit::log(&pool, user_id, "page.updated", "page", page_id, details).await;

                set_flash(&session, "Page updated successfully");
                return Ok(HttpResponse::SeeOther()
                    .insert_header(("Location", "/admin/pages"))
                    .finish());
            }
            Err(e) if is_unique_violation(&e) => {
                errors.push("A page with this slug already exists".to_string());
            }
            Err(e) => return Err(e),
        }
    }

    form_page(&session, &config, format!("/admin/pages/{page_id}"), "Edit Page", Some(draft(page_id, &new)), errors)
}

/// POST /admin/pages/{id}/delete
pub async fn delete(
    pool: web::Data<DbPool>,
    session: Session,
    path: web::Path<i64>,
    form: web::Form<CsrfOnly>,
) -> Result<HttpResponse, AppError> {
    require_permission(&session, PAGE_MANAGE)?;
    csrf::validate_csrf(&session, &form.csrf_token)?;
    let user_id = require_user_id(&session)?;

    let page_id = path.into_inner();
    let existing = page::find_by_id(&pool, page_id).await?.ok_or(AppError::NotFound)?;

    page::delete(&pool, page_id).await?;

    let details = serde_json::json!({
        "slug": &existing.slug,
        "summary": format!("Deleted page '{}'", existing.title)
    });
    let _ = crate::audit::log(&pool, user_id, "page.deleted", "page", page_id, details).await;

    set_flash(&session, "Page deleted successfully");
    Ok(HttpResponse::SeeOther()
        .insert_header(("Location", "/admin/pages"))
        .finish())
}
