//! Turning a slider slug into page markup.
//!
//! [`resolver`] builds the render model from the store, [`render`] turns it
//! into markup and [`shortcode`] finds `[multi_slider id="..."]` tags in page
//! content and replaces them.

pub mod render;
pub mod resolver;
pub mod shortcode;

pub use render::{render_slider, RenderOptions};
pub use resolver::{resolve, RenderModel, RenderSlide};
pub use shortcode::{expand, PageBlock, Segment};
