//! Embed resolver and tag expansion against a real database.

mod common;

use common::*;
use multi_slider::embed::{self, PageBlock, RenderOptions};
use multi_slider::models::media;

#[tokio::test]
async fn unknown_slug_resolves_to_nothing() {
    let pool = setup_test_db().await;
    assert!(embed::resolve(&pool, "nope").await.unwrap().is_none());
}

#[tokio::test]
async fn slider_without_slides_resolves_to_nothing() {
    let pool = setup_test_db().await;
    insert_slider(&pool, "Empty", "empty").await;
    assert!(embed::resolve(&pool, "empty").await.unwrap().is_none());
}

#[tokio::test]
async fn slides_with_missing_media_are_skipped_and_positions_renumbered() {
    let pool = setup_test_db().await;
    let id = insert_slider(&pool, "Hero", "hero").await;
    let a = insert_asset(&pool, "A", "/img/a.jpg").await;
    let gone = insert_asset(&pool, "Gone", "/img/gone.jpg").await;
    let c = insert_asset(&pool, "C", "/img/c.jpg").await;

    insert_slide(&pool, id, "First", a, 0).await;
    insert_slide(&pool, id, "Second", gone, 1).await;
    insert_slide(&pool, id, "Third", c, 2).await;
    media::delete(&pool, gone).await.unwrap();

    let model = embed::resolve(&pool, "hero").await.unwrap().unwrap();
    assert_eq!(model.count, 2);
    assert_eq!(model.fragment_prefix, "hero-");
    assert_eq!(model.slides.len(), 2);
    assert_eq!(model.slides[0].position, 1);
    assert_eq!(model.slides[0].title, "First");
    assert_eq!(model.slides[1].position, 2);
    assert_eq!(model.slides[1].title, "Third");
    assert_eq!(model.slides[1].image_url, "/img/c.jpg");
    assert_eq!(model.slides[1].alt_text, "Third alt");
    assert_eq!(model.slides[1].slide_key, "third");
}

#[tokio::test]
async fn rendered_markup_lists_every_position() {
    let pool = setup_test_db().await;
    let id = insert_slider(&pool, "Hero", "hero").await;
    let asset = insert_asset(&pool, "Pic", "/img/pic.jpg").await;
    for i in 0..3 {
        insert_slide(&pool, id, &format!("S{i}"), asset, i).await;
    }

    let model = embed::resolve(&pool, "hero").await.unwrap().unwrap();
    let html = embed::render_slider(&model, RenderOptions::default()).unwrap();

    assert!(html.contains("href=\"#hero-1\" name=\"1\" class=\"current\""));
    assert!(html.contains("href=\"#hero-2\" name=\"2\""));
    assert!(html.contains("href=\"#hero-3\" name=\"3\""));
    assert!(html.contains("type=\"application/json\""));
}

#[tokio::test]
async fn expand_replaces_tags_and_keeps_text() {
    let pool = setup_test_db().await;
    let id = insert_slider(&pool, "Hero", "hero").await;
    let asset = insert_asset(&pool, "Pic", "/img/pic.jpg").await;
    insert_slide(&pool, id, "Only", asset, 0).await;

    let blocks = embed::expand(&pool, "<p>Hi</p>\n[multi_slider id=\"hero\"]\n[multi_slider id=\"nope\"]end").await;

    assert_eq!(blocks.len(), 4);
    assert_eq!(blocks[0], PageBlock::Text("<p>Hi</p>\n".to_string()));
    match &blocks[1] {
        PageBlock::Slider(html) => {
            assert!(html.contains("id=\"multi-slider-hero\""));
            assert!(html.contains("/img/pic.jpg"));
        }
        other => panic!("expected slider markup, got {other:?}"),
    }
    assert_eq!(blocks[2], PageBlock::Text("\n".to_string()));
    assert_eq!(blocks[3], PageBlock::Text("end".to_string()));
}
