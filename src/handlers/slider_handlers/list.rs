use actix_session::Session;
use actix_web::{web, HttpResponse};

use crate::auth::session::require_permission;
use crate::config::AppConfig;
use crate::db::DbPool;
use crate::errors::{AppError, render};
use crate::models::{slider, user::SLIDER_MANAGE};
use crate::templates_structs::{PageContext, SliderListTemplate};

/// GET /admin/sliders
/// Lists all sliders with their slide counts and embed tags.
pub async fn list(
    pool: web::Data<DbPool>,
    config: web::Data<AppConfig>,
    session: Session,
) -> Result<HttpResponse, AppError> {
    require_permission(&session, SLIDER_MANAGE)?;

    let sliders = slider::find_all_with_counts(&pool).await?;
    let ctx = PageContext::build(&session, &config.app_name, "/admin/sliders")?;
    render(SliderListTemplate { ctx, sliders })
}
