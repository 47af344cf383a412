//! Slide store: display order, insertion tie-breaks and defaults.

mod common;

use common::*;
use multi_slider::models::slide;

#[tokio::test]
async fn slides_are_ordered_by_order_field_then_insertion() {
    let pool = setup_test_db().await;
    let id = insert_slider(&pool, "Hero", "hero").await;
    let asset = insert_asset(&pool, "Pic", "/img/pic.jpg").await;

    insert_slide(&pool, id, "C", asset, 20).await;
    insert_slide(&pool, id, "A", asset, 5).await;
    insert_slide(&pool, id, "B1", asset, 10).await;
    insert_slide(&pool, id, "B2", asset, 10).await;

    let titles: Vec<String> = slide::find_for_slider(&pool, id)
        .await
        .unwrap()
        .into_iter()
        .map(|s| s.title)
        .collect();
    assert_eq!(titles, vec!["A", "B1", "B2", "C"]);
}

#[tokio::test]
async fn next_sort_order_follows_the_highest() {
    let pool = setup_test_db().await;
    let id = insert_slider(&pool, "Hero", "hero").await;
    let asset = insert_asset(&pool, "Pic", "/img/pic.jpg").await;

    assert_eq!(slide::next_sort_order(&pool, id).await.unwrap(), 0);
    insert_slide(&pool, id, "A", asset, 7).await;
    insert_slide(&pool, id, "B", asset, 3).await;
    assert_eq!(slide::next_sort_order(&pool, id).await.unwrap(), 8);
}

#[tokio::test]
async fn update_and_delete() {
    let pool = setup_test_db().await;
    let id = insert_slider(&pool, "Hero", "hero").await;
    let asset = insert_asset(&pool, "Pic", "/img/pic.jpg").await;
    let slide_id = insert_slide(&pool, id, "A", asset, 0).await;

    let mut edited = slide::NewSlide {
        slider_id: id,
        title: "A2".to_string(),
        image_id: asset,
        link_url: "/about".to_string(),
        description: "More".to_string(),
        alt_text: "Alt".to_string(),
        sort_order: 4,
        slide_key: "first".to_string(),
    };
    slide::update(&pool, slide_id, &edited).await.unwrap();
    let found = slide::find_by_id(&pool, slide_id).await.unwrap().unwrap();
    assert_eq!(found.title, "A2");
    assert_eq!(found.link_url, "/about");
    assert_eq!(found.sort_order, 4);
    assert_eq!(found.slide_key, "first");

    slide::delete(&pool, slide_id).await.unwrap();
    assert_eq!(slide::count_for_slider(&pool, id).await.unwrap(), 0);

    edited.title = "Gone".to_string();
    assert!(slide::update(&pool, slide_id, &edited).await.is_err());
}

#[tokio::test]
async fn list_items_flag_missing_media() {
    let pool = setup_test_db().await;
    let id = insert_slider(&pool, "Hero", "hero").await;
    let asset = insert_asset(&pool, "Pic", "/img/pic.jpg").await;
    insert_slide(&pool, id, "Kept", asset, 0).await;
    insert_slide(&pool, id, "Orphan", asset + 50, 1).await;

    let items = slide::find_list_items(&pool, id).await.unwrap();
    assert_eq!(items[0].preview_url.as_deref(), Some("/img/pic.jpg"));
    assert_eq!(items[1].preview_url, None);
}
