use askama::Template;

use crate::embed::{PageBlock, RenderModel};

/// Slider markup dropped into a page in place of an embed tag.
#[derive(Template)]
#[template(path = "embed/slider.html")]
pub struct EmbedSliderTemplate<'a> {
    pub model: &'a RenderModel,
    pub model_json: String,
    pub current_position: usize,
}

/// Stand-alone public page for one slider.
#[derive(Template)]
#[template(path = "public/slider.html")]
pub struct PublicSliderTemplate {
    pub app_name: String,
    pub title: String,
    pub slider_html: String,
}

/// Public content page with its embed tags expanded.
#[derive(Template)]
#[template(path = "public/page.html")]
pub struct PublicPageTemplate {
    pub app_name: String,
    pub title: String,
    pub blocks: Vec<PageBlock>,
}
