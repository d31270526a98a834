use super::*;

fn pair(original: &str, processed: Option<&str>) -> PairEntry {
    serde_json::from_value(serde_json::json!({
        "original_url": original,
        "processed_url": processed,
    }))
    .unwrap()
}

// =============================================================
// Completion
// =============================================================

#[test]
fn item_with_processed_side_is_complete() {
    let item = GalleryItem::from(pair("http://x/a.png", Some("http://x/a-out.png")));
    assert!(item.complete());
}

#[test]
fn item_without_processed_side_is_pending() {
    let item = GalleryItem::from(pair("http://x/a.png", None));
    assert!(!item.complete());
    assert_eq!(item.original_url, "http://x/a.png");
}

// =============================================================
// Key folding
// =============================================================

#[test]
fn enhance_entry_folds_enhanced_url() {
    let entry: EnhanceEntry = serde_json::from_value(serde_json::json!({
        "original_url": "http://x/a.png",
        "enhanced_url": "http://x/a-big.png",
    }))
    .unwrap();
    let item = GalleryItem::from(entry);
    assert_eq!(item.processed_url.as_deref(), Some("http://x/a-big.png"));
}

#[test]
fn restore_entry_folds_restored_url() {
    let entry: RestoreEntry = serde_json::from_value(serde_json::json!({
        "original_url": "http://x/a.png",
        "restored_url": null,
    }))
    .unwrap();
    let item = GalleryItem::from(entry);
    assert!(!item.complete());
}

#[test]
fn generated_entry_has_no_processed_side() {
    let entry: GeneratedEntry = serde_json::from_value(serde_json::json!({
        "original_url": "http://x/gen.png",
    }))
    .unwrap();
    let item = GalleryItem::from(entry);
    assert_eq!(item.original_url, "http://x/gen.png");
    assert!(item.processed_url.is_none());
}
