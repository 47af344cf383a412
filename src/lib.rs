pub mod audit;
pub mod auth;
pub mod config;
pub mod db;
pub mod embed;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod navigation;
pub mod templates_structs;

pub use routes::configure;

mod routes;
