use super::*;

#[test]
fn failed_toggle_alerts_backend_message() {
    let err = ApiError::Status { status: 500, message: "like failed".to_owned() };
    assert_eq!(like_followup(Err(err), Some("jjigae".to_owned())), LikeFollowup::Alert("like failed".to_owned()));
}

#[test]
fn toggle_during_search_reruns_that_search() {
    let followup = like_followup(Ok(serde_json::json!({ "liked": true })), Some("jjigae".to_owned()));
    assert_eq!(followup, LikeFollowup::Research("jjigae".to_owned()));
}

#[test]
fn toggle_on_plain_list_needs_nothing_more() {
    assert_eq!(like_followup(Ok(Value::Null), None), LikeFollowup::Done);
}
