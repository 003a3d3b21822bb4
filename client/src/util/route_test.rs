use super::*;

#[test]
fn parse_id_accepts_numeric_segments() {
    assert_eq!(parse_id(Some("42".to_owned())), Some(42));
    assert_eq!(parse_id(Some(" 7 ".to_owned())), Some(7));
}

#[test]
fn parse_id_rejects_missing_or_garbage() {
    assert_eq!(parse_id(None), None);
    assert_eq!(parse_id(Some("abc".to_owned())), None);
    assert_eq!(parse_id(Some(String::new())), None);
}

#[test]
fn owner_store_route_formats_path() {
    assert_eq!(owner_store_route(3), "/owner/stores/3");
}
