use super::*;
use serde_json::json;
use time::macros::time;

fn raw_store() -> Store {
    serde_json::from_value(json!({
        "id": 11,
        "name": "Gimbap Heaven",
        "openTime": "09:00",
        "closeTime": "22:00",
        "image": "https://final17-bucket.s3.ap-northeast-2.amazonaws.com/stores/11/front.jpg",
        "storeLikeCount": 42,
        "districtCategory": "GANGNAM",
        "userOneResponseDto": { "id": 5, "nickname": "owner5" },
        "cuisineCategory": "KOREAN"
    }))
    .unwrap()
}

// =============================================================
// is_store_open
// =============================================================

#[test]
fn open_at_noon_closed_late_evening() {
    assert!(is_store_open(Some("09:00"), Some("22:00"), time!(12:00)));
    assert!(!is_store_open(Some("09:00"), Some("22:00"), time!(23:00)));
}

#[test]
fn open_bounds_are_inclusive() {
    assert!(is_store_open(Some("09:00"), Some("22:00"), time!(9:00)));
    assert!(is_store_open(Some("09:00"), Some("22:00"), time!(22:00)));
    assert!(!is_store_open(Some("09:00"), Some("22:00"), time!(8:59)));
    assert!(!is_store_open(Some("09:00"), Some("22:00"), time!(22:01)));
}

#[test]
fn missing_or_garbled_times_are_closed() {
    assert!(!is_store_open(None, Some("22:00"), time!(12:00)));
    assert!(!is_store_open(Some("09:00"), None, time!(12:00)));
    assert!(!is_store_open(Some("nine"), Some("22:00"), time!(12:00)));
    assert!(!is_store_open(Some("9"), Some("22:00"), time!(12:00)));
}

#[test]
fn seconds_suffix_is_ignored() {
    assert!(is_store_open(Some("09:00:00"), Some("22:00:00"), time!(21:59:59)));
}

#[test]
fn overnight_hours_never_open() {
    assert!(!is_store_open(Some("22:00"), Some("02:00"), time!(23:30)));
    assert!(!is_store_open(Some("22:00"), Some("02:00"), time!(1:00)));
}

// =============================================================
// convert_image_url
// =============================================================

#[test]
fn bucket_url_is_rewritten_to_cdn_key() {
    let cfg = ImageConfig::default();
    let url = "https://final17-bucket.s3.ap-northeast-2.amazonaws.com/menus/3/kimbap.png";
    assert_eq!(
        convert_image_url(Some(url), &cfg),
        "https://d1bmwiwkiumqh6.cloudfront.net/menus/3/kimbap.png"
    );
}

#[test]
fn empty_image_becomes_placeholder() {
    let cfg = ImageConfig::default();
    assert_eq!(convert_image_url(None, &cfg), cfg.placeholder);
    assert_eq!(convert_image_url(Some(""), &cfg), cfg.placeholder);
}

#[test]
fn foreign_url_is_unchanged() {
    let cfg = ImageConfig::default();
    let url = "https://images.example.test/pho.jpg";
    assert_eq!(convert_image_url(Some(url), &cfg), url);
}

#[test]
fn bucket_url_without_com_segment_is_unchanged() {
    let cfg = ImageConfig::default();
    let url = "http://final17-bucket.s3.local/key.jpg";
    assert_eq!(convert_image_url(Some(url), &cfg), url);
}

// =============================================================
// normalized
// =============================================================

#[test]
fn normalization_fills_defaults_and_derivations() {
    let store = raw_store().normalized(time!(12:00), &ImageConfig::default());
    assert!(store.is_open);
    assert_eq!(store.like_count, 42);
    assert_eq!(store.rating(), 0.0);
    assert_eq!(store.review_count(), 0);
    assert_eq!(store.image.as_deref(), Some("https://d1bmwiwkiumqh6.cloudfront.net/stores/11/front.jpg"));
    assert_eq!(store.user, Some(json!({ "id": 5, "nickname": "owner5" })));
    assert_eq!(store.extra.get("cuisineCategory"), Some(&json!("KOREAN")));
}

#[test]
fn normalization_is_idempotent() {
    let cfg = ImageConfig::default();
    let once = raw_store().normalized(time!(12:00), &cfg);
    let twice = once.clone().normalized(time!(12:00), &cfg);
    assert_eq!(once, twice);

    let bare: Store = serde_json::from_value(json!({ "id": 1, "districtCategory": "" })).unwrap();
    let once = bare.normalized(time!(23:00), &cfg);
    assert_eq!(once.clone().normalized(time!(23:00), &cfg), once);
    assert_eq!(once.image.as_deref(), Some(cfg.placeholder.as_str()));
    assert!(once.district_category.is_none());
    assert_eq!(once.like_count, 0);
}

#[test]
fn existing_rating_is_kept() {
    let store: Store = serde_json::from_value(json!({ "id": 2, "rating": 4.5, "reviewCount": 12 })).unwrap();
    let store = store.normalized(time!(12:00), &ImageConfig::default());
    assert_eq!(store.rating(), 4.5);
    assert_eq!(store.review_count(), 12);
}

#[test]
fn store_input_omits_unset_fields() {
    let input = StoreInput { name: "Tteok Bar".to_owned(), open_time: Some("10:00".to_owned()), ..StoreInput::default() };
    assert_eq!(serde_json::to_value(&input).unwrap(), json!({ "name": "Tteok Bar", "openTime": "10:00" }));
}

#[test]
fn search_filters_serialize_camel_case() {
    let filters = SearchFilters { district_categories: vec!["MAPO".to_owned()], cuisine_categories: vec![] };
    assert_eq!(
        serde_json::to_value(&filters).unwrap(),
        json!({ "districtCategories": ["MAPO"], "cuisineCategories": [] })
    );
}
