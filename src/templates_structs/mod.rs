// Template context structures for Askama templates, organized by domain.

use actix_session::Session;

use crate::errors::AppError;
use crate::auth::csrf;
use crate::auth::session::{Permissions, get_username, get_permissions, take_flash};

/// Common context shared by all admin pages.
/// Templates access these as `ctx.username`, `ctx.permissions`, etc.
pub struct PageContext {
    pub username: String,
    pub avatar_initial: String,
    pub permissions: Permissions,
    pub flash: Option<String>,
    pub app_name: String,
    pub csrf_token: String,
    pub current_path: String,
}

impl PageContext {
    pub fn build(session: &Session, app_name: &str, current_path: &str) -> Result<Self, AppError> {
        let username = get_username(session)
            .map_err(|e| AppError::Session(format!("Failed to get username: {}", e)))?;
        let permissions = get_permissions(session)
            .map_err(|e| AppError::Session(format!("Failed to get permissions: {}", e)))?;
        let flash = take_flash(session);
        let csrf_token = csrf::get_or_create_token(session);
        let avatar_initial = username.chars().next().unwrap_or('?').to_uppercase().to_string();
        Ok(Self {
            username,
            avatar_initial,
            permissions,
            flash,
            app_name: app_name.to_string(),
            csrf_token,
            current_path: current_path.to_string(),
        })
    }

    /// Whether the sidebar entry for `prefix` is the active one.
    pub fn is_active(&self, prefix: &str) -> bool {
        self.current_path.starts_with(prefix)
    }
}

mod common;
mod slider;
mod media;
mod page;
mod embed;

pub use self::common::LoginTemplate;
pub use self::slider::{SliderListTemplate, SliderFormTemplate, SliderDetailTemplate, SlideFormTemplate, MediaOption};
pub use self::media::MediaListTemplate;
pub use self::page::{PageListTemplate, PageFormTemplate};
pub use self::embed::{EmbedSliderTemplate, PublicSliderTemplate, PublicPageTemplate};
