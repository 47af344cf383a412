use askama::Template;

use crate::navigation::{fragment, HeadlessSlider};
use crate::templates_structs::EmbedSliderTemplate;
use super::resolver::RenderModel;

#[derive(Debug, Clone, Copy, Default)]
pub struct RenderOptions {
    /// Slide the URL asks for (1-based), used to pick the slide that is
    /// current before any script runs.
    pub requested_position: Option<usize>,
}

/// Render a slider's markup, with its render model embedded as JSON for the
/// client-side navigation script.
pub fn render_slider(model: &RenderModel, options: RenderOptions) -> Result<String, askama::Error> {
    let requested = options
        .requested_position
        .map(|p| fragment::format(&model.fragment_prefix, p));
    let initial = HeadlessSlider::load(model.count, &model.fragment_prefix, requested.as_deref());

    let tmpl = EmbedSliderTemplate {
        model,
        model_json: model_json(model),
        current_position: initial.position(),
    };
    tmpl.render()
}

/// JSON for a `<script type="application/json">` element. `</` is escaped
/// so slide text cannot close the script element.
fn model_json(model: &RenderModel) -> String {
    match serde_json::to_string(model) {
        Ok(json) => json.replace("</", "<\\/"),
        Err(e) => {
            log::error!("Failed to serialize render model for '{}': {e}", model.slug);
            "null".to_string()
        }
    }
}
