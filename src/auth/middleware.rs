use actix_session::SessionExt;
use actix_web::{
    Error, HttpResponse,
    body::MessageBody,
    dev::{ServiceRequest, ServiceResponse},
    http::Method,
    middleware::Next,
};

use super::session;

/// Guard for the `/admin` scope. Anonymous requests go to the login page; a
/// GET remembers its path so the editor lands back on it after logging in.
pub async fn require_auth(
    req: ServiceRequest,
    next: Next<impl MessageBody + 'static>,
) -> Result<ServiceResponse<impl MessageBody>, Error> {
    let session = req.get_session();

    if session::get_user_id(&session).is_some() {
        return next.call(req).await.map(|res| res.map_into_left_body());
    }

    if req.method() == Method::GET {
        session::remember_return_to(&session, req.path());
    }
    log::debug!("Anonymous {} {} sent to login", req.method(), req.path());

    let response = HttpResponse::SeeOther()
        .insert_header(("Location", "/login"))
        .finish();
    Ok(req.into_response(response).map_into_right_body())
}
