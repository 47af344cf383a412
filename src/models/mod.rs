pub mod media;
pub mod page;
pub mod slide;
pub mod slider;
pub mod user;
