//! `[multi_slider id="slug"]` tags inside page content.

use sqlx::SqlitePool;

use super::render::{render_slider, RenderOptions};
use super::resolver::resolve;

pub const TAG_NAME: &str = "multi_slider";

/// A piece of page content: literal text or an embed tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment<'a> {
    Text(&'a str),
    /// Slug from the tag's `id` attribute; empty if the attribute is missing.
    Embed(String),
}

/// Split content into text and embed tags. Anything that does not parse as a
/// complete tag stays text.
pub fn parse(content: &str) -> Vec<Segment<'_>> {
    let opener = format!("[{TAG_NAME}");
    let mut segments = Vec::new();
    let mut text_start = 0;
    let mut search_from = 0;

    while let Some(found) = content[search_from..].find(&opener) {
        let start = search_from + found;
        let after_name = start + opener.len();
        let boundary_ok = content[after_name..]
            .chars()
            .next()
            .is_some_and(|c| c == ']' || c.is_whitespace());
        let close = content[after_name..].find(']').map(|i| after_name + i);

        match close {
            Some(close) if boundary_ok => {
                if start > text_start {
                    segments.push(Segment::Text(&content[text_start..start]));
                }
                let attrs = &content[after_name..close];
                segments.push(Segment::Embed(id_attribute(attrs).unwrap_or_default()));
                text_start = close + 1;
                search_from = close + 1;
            }
            _ => search_from = after_name,
        }
    }
    if text_start < content.len() {
        segments.push(Segment::Text(&content[text_start..]));
    }
    segments
}

/// Expanded page content, in order. Text is escaped by the page template;
/// slider markup is inserted as rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageBlock {
    Text(String),
    Slider(String),
}

/// Replace every tag with its slider markup.
///
/// Unknown slugs, sliders without displayable slides, and store errors all
/// expand to nothing; an embed never takes the page down.
pub async fn expand(pool: &SqlitePool, content: &str) -> Vec<PageBlock> {
    let mut blocks = Vec::new();
    for segment in parse(content) {
        match segment {
            Segment::Text(text) => blocks.push(PageBlock::Text(text.to_string())),
            Segment::Embed(slug) => {
                let html = embed_markup(pool, &slug).await;
                if !html.is_empty() {
                    blocks.push(PageBlock::Slider(html));
                }
            }
        }
    }
    blocks
}

async fn embed_markup(pool: &SqlitePool, slug: &str) -> String {
    if slug.is_empty() {
        return String::new();
    }
    let model = match resolve(pool, slug).await {
        Ok(Some(model)) => model,
        Ok(None) => return String::new(),
        Err(e) => {
            log::error!("Failed to resolve slider '{slug}': {e}");
            return String::new();
        }
    };
    render_slider(&model, RenderOptions::default()).unwrap_or_else(|e| {
        log::error!("Failed to render slider '{slug}': {e}");
        String::new()
    })
}

/// Value of the `id` attribute: `id="x"`, `id='x'` or bare `id=x`.
fn id_attribute(attrs: &str) -> Option<String> {
    let mut rest = attrs.trim_start();
    while !rest.is_empty() {
        let eq = rest.find('=')?;
        let name = rest[..eq].trim();
        let after = rest[eq + 1..].trim_start();
        let (value, remaining) = match after.chars().next() {
            Some(q @ ('"' | '\'')) => {
                let body = &after[1..];
                let end = body.find(q)?;
                (&body[..end], &body[end + 1..])
            }
            _ => {
                let end = after.find(char::is_whitespace).unwrap_or(after.len());
                (&after[..end], &after[end..])
            }
        };
        if name == "id" {
            return Some(value.trim().to_string());
        }
        rest = remaining.trim_start();
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_is_one_segment() {
        assert_eq!(parse("hello world"), vec![Segment::Text("hello world")]);
        assert!(parse("").is_empty());
    }

    #[test]
    fn finds_tags_between_text() {
        let segments = parse("Intro [multi_slider id=\"hero\"] outro");
        assert_eq!(
            segments,
            vec![
                Segment::Text("Intro "),
                Segment::Embed("hero".to_string()),
                Segment::Text(" outro"),
            ]
        );
    }

    #[test]
    fn accepts_single_quotes_and_bare_values() {
        assert_eq!(parse("[multi_slider id='a']"), vec![Segment::Embed("a".to_string())]);
        assert_eq!(parse("[multi_slider id=b]"), vec![Segment::Embed("b".to_string())]);
        assert_eq!(
            parse("[multi_slider  class=\"x\" id = \"c\" ]"),
            vec![Segment::Embed("c".to_string())]
        );
    }

    #[test]
    fn tag_without_id_embeds_nothing() {
        assert_eq!(parse("[multi_slider]"), vec![Segment::Embed(String::new())]);
    }

    #[test]
    fn lookalikes_stay_text() {
        let text = "[multi_sliders id=\"x\"] and [multi_slider id=\"y\"";
        assert_eq!(parse(text), vec![Segment::Text(text)]);
    }

    #[test]
    fn adjacent_tags() {
        assert_eq!(
            parse("[multi_slider id=\"a\"][multi_slider id=\"b\"]"),
            vec![Segment::Embed("a".to_string()), Segment::Embed("b".to_string())]
        );
    }
}
