pub mod crud;

pub use crud::{create, edit_form, update, delete, media_options};
