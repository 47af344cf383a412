use actix_web::{HttpResponse, web};

use crate::auth;
use crate::handlers::{
    auth_handlers, media_handlers, page_handlers, public_handlers, slide_handlers, slider_handlers,
};

/// Register every route. Shared by `main` and the HTTP tests.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        // Static files
        .service(actix_files::Files::new("/static", "./static"))
        // Public routes
        .route("/login", web::get().to(auth_handlers::login_page))
        .route("/login", web::post().to(auth_handlers::login_submit))
        .route("/sliders/{slug}", web::get().to(public_handlers::slider))
        .route("/pages/{slug}", web::get().to(public_handlers::page))
        // Root redirect
        .route("/", web::get().to(|| async {
            HttpResponse::SeeOther()
                .insert_header(("Location", "/admin/sliders"))
                .finish()
        }))
        .route("/logout", web::post().to(auth_handlers::logout))
        // Protected routes
        .service(
            web::scope("/admin")
                .wrap(actix_web::middleware::from_fn(auth::middleware::require_auth))
                // Sliders: /sliders/new BEFORE /sliders/{id} to avoid routing conflict
                .route("/sliders", web::get().to(slider_handlers::list))
                .route("/sliders/new", web::get().to(slider_handlers::new_form))
                .route("/sliders", web::post().to(slider_handlers::create))
                .route("/sliders/{id}", web::get().to(slider_handlers::detail))
                .route("/sliders/{id}/edit", web::get().to(slider_handlers::edit_form))
                .route("/sliders/{id}", web::post().to(slider_handlers::update))
                .route("/sliders/{id}/delete", web::post().to(slider_handlers::delete))
                // Slides
                .route("/sliders/{id}/slides", web::post().to(slide_handlers::create))
                .route("/slides/{id}/edit", web::get().to(slide_handlers::edit_form))
                .route("/slides/{id}", web::post().to(slide_handlers::update))
                .route("/slides/{id}/delete", web::post().to(slide_handlers::delete))
                // Media library
                .route("/media", web::get().to(media_handlers::list))
                .route("/media/picker", web::get().to(media_handlers::picker))
                .route("/media", web::post().to(media_handlers::create))
                .route("/media/{id}/delete", web::post().to(media_handlers::delete))
                // Pages
                .route("/pages", web::get().to(page_handlers::list))
                .route("/pages/new", web::get().to(page_handlers::new_form))
                .route("/pages", web::post().to(page_handlers::create))
                .route("/pages/{id}/edit", web::get().to(page_handlers::edit_form))
                .route("/pages/{id}", web::post().to(page_handlers::update))
                .route("/pages/{id}/delete", web::post().to(page_handlers::delete)),
        )
        // Default 404 handler (must be registered last)
        .default_service(web::to(|| async {
            let html = include_str!("../templates/errors/404.html");
            HttpResponse::NotFound()
                .content_type("text/html; charset=utf-8")
                .body(html)
        }));
}
