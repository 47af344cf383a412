use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::{App, HttpServer, middleware, web};

use multi_slider::auth::{self, rate_limit::RateLimiter};
use multi_slider::config::AppConfig;
use multi_slider::db;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init();

    let config = AppConfig::from_env();

    // Ensure data directory exists
    std::fs::create_dir_all("data").expect("Failed to create data directory");

    // Initialize database
    let pool = db::init_pool(&config.database_url)
        .await
        .expect("Failed to open database");
    db::run_migrations(&pool).await.expect("Failed to run migrations");

    // Seed the first editor account if the users table is empty
    let admin_hash = auth::password::hash_password(&config.admin_password)
        .expect("Failed to hash default password");
    db::seed_admin(&pool, &config.admin_username, &admin_hash)
        .await
        .expect("Failed to seed admin account");

    let secret_key = config.session_key();
    let limiter = web::Data::new(RateLimiter::new());
    let bind_addr = config.bind_addr.clone();
    let cookie_secure = config.cookie_secure;
    let config = web::Data::new(config);

    log::info!("Starting server at http://{bind_addr}");

    HttpServer::new(move || {
        let session_mw = SessionMiddleware::builder(
            CookieSessionStore::default(),
            secret_key.clone(),
        )
        .cookie_secure(cookie_secure)
        .cookie_http_only(true)
        .build();

        App::new()
            .wrap(session_mw)
            .wrap(middleware::Logger::default())
            .app_data(web::Data::new(pool.clone()))
            .app_data(config.clone())
            .app_data(limiter.clone())
            .configure(multi_slider::configure)
    })
    .bind(bind_addr)?
    .run()
    .await
}
