use actix_session::Session;
use actix_web::{web, HttpRequest, HttpResponse};
use serde::Deserialize;

use crate::auth::session::{self, Permissions};
use crate::auth::{csrf, password, rate_limit::RateLimiter};
use crate::config::AppConfig;
use crate::db::DbPool;
use crate::errors::{AppError, render};
use crate::models::user;
use crate::templates_structs::LoginTemplate;

#[derive(Deserialize)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
    pub csrf_token: String,
}

#[derive(Deserialize)]
pub struct CsrfOnly {
    pub csrf_token: String,
}

pub async fn login_page(
    config: web::Data<AppConfig>,
    session: Session,
) -> Result<HttpResponse, AppError> {
    // If already logged in, go straight to the admin
    if session::get_user_id(&session).is_some() {
        return Ok(HttpResponse::SeeOther()
            .insert_header(("Location", "/admin/sliders"))
            .finish());
    }

    let csrf_token = csrf::get_or_create_token(&session);
    let tmpl = LoginTemplate { error: None, app_name: config.app_name.clone(), csrf_token };
    render(tmpl)
}

pub async fn login_submit(
    req: HttpRequest,
    pool: web::Data<DbPool>,
    config: web::Data<AppConfig>,
    session: Session,
    form: web::Form<LoginForm>,
    limiter: web::Data<RateLimiter>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;

    let login_error = |message: &str| {
        let csrf_token = csrf::get_or_create_token(&session);
        render(LoginTemplate {
            error: Some(message.to_string()),
            app_name: config.app_name.clone(),
            csrf_token,
        })
    };

    // Rate-limit check BEFORE any database access
    let ip = req.peer_addr()
        .map(|addr| addr.ip())
        .unwrap_or_else(|| std::net::IpAddr::V4(std::net::Ipv4Addr::UNSPECIFIED));

    if limiter.is_blocked(ip) {
        log::warn!("Login blocked for {ip}: too many failed attempts");
        return login_error("Too many failed login attempts. Please try again later.");
    }

    let found = user::find_by_username(&pool, form.username.trim()).await?;

    match found {
        Some(u) if password::verify_password(&form.password, &u.password)? => {
            limiter.clear(ip);
            let codes = user::permissions_for_role(&u.role)
                .into_iter()
                .map(String::from)
                .collect();
            let return_to = session::take_return_to(&session);
            session::start(&session, u.id, &u.username, &Permissions(codes));
            log::info!("User '{}' logged in", u.username);
            Ok(HttpResponse::SeeOther()
                .insert_header(("Location", return_to))
                .finish())
        }
        _ => {
            limiter.record_failure(ip);
            login_error("Invalid username or password")
        }
    }
}

pub async fn logout(
    session: Session,
    form: web::Form<CsrfOnly>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;
    session.purge();
    Ok(HttpResponse::SeeOther()
        .insert_header(("Location", "/login"))
        .finish())
}
