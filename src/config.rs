//! Runtime configuration, read from the environment (and `.env` via dotenvy).

use actix_web::cookie::Key;

pub const DEFAULT_DATABASE_URL: &str = "sqlite://data/multi_slider.db";
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";
pub const DEFAULT_APP_NAME: &str = "Multi Slider";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub bind_addr: String,
    pub app_name: String,
    pub admin_username: String,
    pub admin_password: String,
    pub cookie_secure: bool,
    session_key: Option<String>,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build a config from an arbitrary variable source. Missing or blank
    /// values fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());
        Self {
            database_url: get("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
            bind_addr: get("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string()),
            app_name: get("APP_NAME").unwrap_or_else(|| DEFAULT_APP_NAME.to_string()),
            admin_username: get("ADMIN_USERNAME").unwrap_or_else(|| "admin".to_string()),
            admin_password: get("ADMIN_PASSWORD").unwrap_or_else(|| "admin123".to_string()),
            cookie_secure: get("COOKIE_SECURE")
                .map(|v| matches!(v.trim(), "1" | "true" | "yes"))
                .unwrap_or(false),
            session_key: get("SESSION_KEY"),
        }
    }

    /// Session encryption key. A random key is generated when `SESSION_KEY`
    /// is unset or shorter than 64 bytes, which logs everyone out on restart.
    pub fn session_key(&self) -> Key {
        match &self.session_key {
            Some(val) if val.len() >= 64 => {
                log::info!("Using SESSION_KEY from environment");
                Key::from(val.as_bytes())
            }
            Some(val) => {
                log::warn!("SESSION_KEY too short ({} bytes, need 64+), generating random key", val.len());
                Key::generate()
            }
            None => {
                log::warn!("No SESSION_KEY set, generating random key (sessions lost on restart)");
                Key::generate()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> AppConfig {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|name| map.get(name).cloned())
    }

    #[test]
    fn defaults_apply_when_unset() {
        let c = config(&[]);
        assert_eq!(c.database_url, DEFAULT_DATABASE_URL);
        assert_eq!(c.bind_addr, DEFAULT_BIND_ADDR);
        assert_eq!(c.app_name, DEFAULT_APP_NAME);
        assert!(!c.cookie_secure);
    }

    #[test]
    fn blank_values_count_as_unset() {
        let c = config(&[("BIND_ADDR", "  "), ("APP_NAME", "Gallery")]);
        assert_eq!(c.bind_addr, DEFAULT_BIND_ADDR);
        assert_eq!(c.app_name, "Gallery");
    }

    #[test]
    fn cookie_secure_flag() {
        assert!(config(&[("COOKIE_SECURE", "true")]).cookie_secure);
        assert!(!config(&[("COOKIE_SECURE", "no")]).cookie_secure);
    }
}
