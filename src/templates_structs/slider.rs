use askama::Template;

use super::PageContext;
use crate::audit::AuditEntry;
use crate::models::slide::{Slide, SlideListItem};
use crate::models::slider::{SliderGroup, SliderListItem};

#[derive(Template)]
#[template(path = "sliders/list.html")]
pub struct SliderListTemplate {
    pub ctx: PageContext,
    pub sliders: Vec<SliderListItem>,
}

#[derive(Template)]
#[template(path = "sliders/form.html")]
pub struct SliderFormTemplate {
    pub ctx: PageContext,
    pub form_action: String,
    pub form_title: String,
    pub slider: Option<SliderGroup>,
    pub errors: Vec<String>,
}

/// Entry in the image select box of the slide form.
pub struct MediaOption {
    pub id: i64,
    pub title: String,
    pub selected: bool,
}

#[derive(Template)]
#[template(path = "sliders/detail.html")]
pub struct SliderDetailTemplate {
    pub ctx: PageContext,
    pub slider: SliderGroup,
    pub slides: Vec<SlideListItem>,
    pub media: Vec<MediaOption>,
    pub next_sort_order: i64,
    pub history: Vec<AuditEntry>,
    pub errors: Vec<String>,
}

#[derive(Template)]
#[template(path = "slides/form.html")]
pub struct SlideFormTemplate {
    pub ctx: PageContext,
    pub slider: SliderGroup,
    pub slide: Slide,
    pub media: Vec<MediaOption>,
    pub errors: Vec<String>,
}
