//! Slider group store: CRUD, slug uniqueness and cascade delete.

mod common;

use common::*;
use multi_slider::errors::is_unique_violation;
use multi_slider::models::{slide, slider};

#[tokio::test]
async fn create_and_find_by_slug() {
    let pool = setup_test_db().await;
    let id = insert_slider(&pool, "Homepage", "homepage").await;

    let found = slider::find_by_slug(&pool, "homepage").await.unwrap().unwrap();
    assert_eq!(found.id, id);
    assert_eq!(found.title, "Homepage");
    assert_eq!(found.embed_tag(), "[multi_slider id=\"homepage\"]");

    assert!(slider::find_by_slug(&pool, "missing").await.unwrap().is_none());
    assert_eq!(slider::count(&pool).await.unwrap(), 1);
}

#[tokio::test]
async fn duplicate_slug_is_a_unique_violation() {
    let pool = setup_test_db().await;
    insert_slider(&pool, "One", "hero").await;

    let err = slider::create(
        &pool,
        &slider::NewSlider {
            title: "Two".to_string(),
            slug: "hero".to_string(),
            description: String::new(),
        },
    )
    .await
    .unwrap_err();
    assert!(is_unique_violation(&err));
}

#[tokio::test]
async fn update_changes_fields_and_rejects_unknown_id() {
    let pool = setup_test_db().await;
    let id = insert_slider(&pool, "Old", "old").await;

    let new = slider::NewSlider {
        title: "New".to_string(),
        slug: "new".to_string(),
        description: "Front page".to_string(),
    };
    slider::update(&pool, id, &new).await.unwrap();

    let found = slider::find_by_id(&pool, id).await.unwrap().unwrap();
    assert_eq!(found.slug, "new");
    assert_eq!(found.description, "Front page");

    assert!(slider::update(&pool, id + 100, &new).await.is_err());
}

#[tokio::test]
async fn list_reports_slide_counts() {
    let pool = setup_test_db().await;
    let a = insert_slider(&pool, "A", "a").await;
    insert_slider(&pool, "B", "b").await;
    let asset = insert_asset(&pool, "Pic", "/img/pic.jpg").await;
    insert_slide(&pool, a, "One", asset, 0).await;
    insert_slide(&pool, a, "Two", asset, 1).await;

    let list = slider::find_all_with_counts(&pool).await.unwrap();
    let count_of = |slug: &str| list.iter().find(|s| s.slug == slug).map(|s| s.slide_count);
    assert_eq!(count_of("a"), Some(2));
    assert_eq!(count_of("b"), Some(0));
}

#[tokio::test]
async fn delete_cascades_to_slides() {
    let pool = setup_test_db().await;
    let id = insert_slider(&pool, "Hero", "hero").await;
    let asset = insert_asset(&pool, "Pic", "/img/pic.jpg").await;
    let slide_id = insert_slide(&pool, id, "One", asset, 0).await;

    slider::delete(&pool, id).await.unwrap();

    assert!(slider::find_by_id(&pool, id).await.unwrap().is_none());
    assert!(slide::find_by_id(&pool, slide_id).await.unwrap().is_none());
}

#[test]
fn slugify_normalizes_editor_input() {
    assert_eq!(slider::slugify("  Home Page!! "), "home-page");
    assert_eq!(slider::slugify("---"), "");
}

#[tokio::test]
async fn audit_entries_are_listed_newest_first() {
    let pool = setup_test_db().await;
    let id = insert_slider(&pool, "Hero", "hero").await;

    let created = serde_json::json!({"summary": "Created slider 'Hero'"});
    multi_slider::audit::log(&pool, 1, "slider.created", "slider", id, created).await.unwrap();
    multi_slider::audit::log(&pool, 1, "slider.updated", "slider", id, serde_json::json!({})).await.unwrap();
    multi_slider::audit::log(&pool, 1, "slider.created", "slider", id + 1, serde_json::json!({})).await.unwrap();

    let history = multi_slider::audit::find_for_target(&pool, "slider", id).await.unwrap();
    assert_eq!(history.len(), 2);
    assert_eq!(history[0].action, "slider.updated");
    assert_eq!(history[0].summary(), "slider.updated");
    assert_eq!(history[1].summary(), "Created slider 'Hero'");
}
