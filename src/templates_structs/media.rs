use askama::Template;

use super::PageContext;
use crate::models::media::MediaAsset;

#[derive(Template)]
#[template(path = "media/list.html")]
pub struct MediaListTemplate {
    pub ctx: PageContext,
    pub assets: Vec<MediaAsset>,
    pub errors: Vec<String>,
}
