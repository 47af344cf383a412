use actix_session::Session;

use crate::errors::AppError;

/// Wrapper around permission codes with a `has()` method for use in Askama templates.
#[derive(Debug, Clone, Default)]
pub struct Permissions(pub Vec<String>);

impl Permissions {
    pub fn has(&self, code: &str) -> bool {
        self.0.iter().any(|p| p == code)
    }

    pub fn from_csv(csv: &str) -> Self {
        let codes = csv
            .split(',')
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect();
        Permissions(codes)
    }

    pub fn to_csv(&self) -> String {
        self.0.join(",")
    }
}

/// Store the logged-in user in the session, replacing any previous login.
pub fn start(session: &Session, user_id: i64, username: &str, permissions: &Permissions) {
    session.renew();
    let _ = session.insert("user_id", user_id);
    let _ = session.insert("username", username);
    let _ = session.insert("permissions", permissions.to_csv());
}

pub fn get_user_id(session: &Session) -> Option<i64> {
    session.get::<i64>("user_id").unwrap_or(None)
}

/// User id of the session, or `AppError::Session` if nobody is logged in.
pub fn require_user_id(session: &Session) -> Result<i64, AppError> {
    get_user_id(session).ok_or_else(|| AppError::Session("User not logged in".to_string()))
}

pub fn get_username(session: &Session) -> Result<String, String> {
    match session.get::<String>("username") {
        Ok(Some(username)) => Ok(username),
        Ok(None) => Err("No username in session".to_string()),
        Err(e) => Err(format!("Session error: {}", e)),
    }
}

pub fn get_permissions(session: &Session) -> Result<Permissions, String> {
    match session.get::<String>("permissions") {
        Ok(Some(csv)) => Ok(Permissions::from_csv(&csv)),
        Ok(None) => Err("No permissions in session".to_string()),
        Err(e) => Err(format!("Session error: {}", e)),
    }
}

const RETURN_TO_KEY: &str = "return_to";
const DEFAULT_LANDING: &str = "/admin/sliders";

pub fn remember_return_to(session: &Session, path: &str) {
    let _ = session.insert(RETURN_TO_KEY, path);
}

/// Where to send a freshly logged-in user. Only admin paths are honored.
pub fn take_return_to(session: &Session) -> String {
    session
        .remove_as::<String>(RETURN_TO_KEY)
        .and_then(Result::ok)
        .filter(|path| path.starts_with("/admin/") && !path.contains("//"))
        .unwrap_or_else(|| DEFAULT_LANDING.to_string())
}

pub fn set_flash(session: &Session, message: &str) {
    let _ = session.insert("flash", message);
}

pub fn take_flash(session: &Session) -> Option<String> {
    let flash = session.get::<String>("flash").unwrap_or(None);
    if flash.is_some() {
        session.remove("flash");
    }
    flash
}

/// Check permission; returns Err(AppError) if denied.
pub fn require_permission(session: &Session, code: &str) -> Result<(), AppError> {
    let permissions = get_permissions(session)
        .map_err(|e| AppError::Session(format!("Failed to get permissions: {}", e)))?;

    if permissions.has(code) {
        Ok(())
    } else {
        Err(AppError::PermissionDenied(code.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn csv_round_trip_skips_blanks() {
        let perms = Permissions::from_csv("slider.manage, ,media.manage,");
        assert!(perms.has("slider.manage"));
        assert!(perms.has("media.manage"));
        assert!(!perms.has("page.manage"));
        assert_eq!(perms.to_csv(), "slider.manage,media.manage");
    }
}
