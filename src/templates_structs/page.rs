use askama::Template;

use super::PageContext;
use crate::models::page::Page;

#[derive(Template)]
#[template(path = "pages/list.html")]
pub struct PageListTemplate {
    pub ctx: PageContext,
    pub pages: Vec<Page>,
}

#[derive(Template)]
#[template(path = "pages/form.html")]
pub struct PageFormTemplate {
    pub ctx: PageContext,
    pub form_action: String,
    pub form_title: String,
    pub page: Option<Page>,
    pub errors: Vec<String>,
}
