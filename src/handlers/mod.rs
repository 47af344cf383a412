pub mod auth_handlers;
pub mod slider_handlers;
pub mod slide_handlers;
pub mod media_handlers;
pub mod page_handlers;
pub mod public_handlers;
