use actix_session::Session;
use actix_web::{web, HttpResponse};

use crate::auth::{csrf, validate};
use crate::auth::session::{require_permission, require_user_id, set_flash};
use crate::config::AppConfig;
use crate::db::DbPool;
use crate::errors::{AppError, render};
use crate::handlers::auth_handlers::CsrfOnly;
use crate::models::media::{self, AssetForm, NewAsset, PickerItem};
use crate::models::user::MEDIA_MANAGE;
use crate::templates_structs::{MediaListTemplate, PageContext};

/// GET /admin/media
pub async fn list(
    pool: web::Data<DbPool>,
    config: web::Data<AppConfig>,
    session: Session,
) -> Result<HttpResponse, AppError> {
    require_permission(&session, MEDIA_MANAGE)?;

    let assets = media::find_all(&pool).await?;
    let ctx = PageContext::build(&session, &config.app_name, "/admin/media")?;
    render(MediaListTemplate { ctx, assets, errors: vec![] })
}

/// POST /admin/media
/// Registers an existing image URL in the library.
pub async fn create(
    pool: web::Data<DbPool>,
    config: web::Data<AppConfig>,
    session: Session,
    form: web::Form<AssetForm>,
) -> Result<HttpResponse, AppError> {
    require_permission(&session, MEDIA_MANAGE)?;
    csrf::validate_csrf(&session, &form.csrf_token)?;
    let user_id = require_user_id(&session)?;

    let new = NewAsset {
        title: form.title.trim().to_string(),
        url: form.url.trim().to_string(),
        thumbnail_url: form.thumbnail_url.trim().to_string(),
    };

    let mut errors: Vec<String> = vec![];
    errors.extend(validate::validate_required(&new.title, "Title", 255));
    errors.extend(validate::validate_url(&new.url, "Image URL", true));
    errors.extend(validate::validate_url(&new.thumbnail_url, "Thumbnail URL", false));

    if !errors.is_empty() {
        let assets = media::find_all(&pool).await?;
        let ctx = PageContext::build(&session, &config.app_name, "/admin/media")?;
        return render(MediaListTemplate { ctx, assets, errors });
    }

    let asset_id = media::create(&pool, &new).await?;

    let details = serde_json::json!({
        "url": &new.url,
        "summary": format!("Registered image '{}'", new.title)
    });
    let _ = crate::audit::log(&pool, user_id, "media.created", "media", asset_id, details).await;

    set_flash(&session, "Image added to the library");
    Ok(HttpResponse::SeeOther()
        .insert_header(("Location", "/admin/media"))
        .finish())
}

/// POST /admin/media/{id}/delete
/// Slides that use the asset are kept; the embed skips them until they get a
/// new image.
pub async fn delete(
    pool: web::Data<DbPool>,
    session: Session,
    path: web::Path<i64>,
    form: web::Form<CsrfOnly>,
) -> Result<HttpResponse, AppError> {
    require_permission(&session, MEDIA_MANAGE)?;
    csrf::validate_csrf(&session, &form.csrf_token)?;
    let user_id = require_user_id(&session)?;

    let asset_id = path.into_inner();
    let asset = media::find_by_id(&pool, asset_id).await?.ok_or(AppError::NotFound)?;

    media::delete(&pool, asset_id).await?;

    let details = serde_json::json!({
        "url": &asset.url,
        "summary": format!("Removed image '{}'", asset.title)
    });
    let _ = crate::audit::log(&pool, user_id, "media.deleted", "media", asset_id, details).await;

    set_flash(&session, "Image removed from the library");
    Ok(HttpResponse::SeeOther()
        .insert_header(("Location", "/admin/media"))
        .finish())
}

/// GET /admin/media/picker
/// JSON list used by the slide form's image picker.
pub async fn picker(
    pool: web::Data<DbPool>,
    session: Session,
) -> Result<HttpResponse, AppError> {
    require_permission(&session, MEDIA_MANAGE)?;

    let items: Vec<PickerItem> = media::find_all(&pool)
        .await?
        .into_iter()
        .map(PickerItem::from)
        .collect();
    Ok(HttpResponse::Ok().json(items))
}
