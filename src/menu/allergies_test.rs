use super::*;
use crate::net::Method;
use crate::test_support::{ScriptedTransport, server_error};
use serde_json::json;

fn allergy(id: i64, name: &str) -> Allergy {
    Allergy { id, name: name.to_owned() }
}

#[tokio::test]
async fn load_reads_bare_array() {
    let transport = ScriptedTransport::new().reply(
        Method::Get,
        "/api/allergies",
        json!([{ "id": 1, "name": "Peanut" }, { "id": 2, "name": "Shellfish" }]),
    );

    let state = load_allergies(&transport).await;

    assert_eq!(state, LoadState::Ready(vec![allergy(1, "Peanut"), allergy(2, "Shellfish")]));
    assert_eq!(state.allergies().len(), 2);
}

#[tokio::test]
async fn failed_load_yields_empty_choices() {
    let transport = ScriptedTransport::new().fail(Method::Get, "/api/allergies", server_error());

    let state = load_allergies(&transport).await;

    assert_eq!(state, LoadState::Failed("internal error".to_owned()));
    assert!(state.allergies().is_empty());
    assert!(!state.is_loading());
}

#[test]
fn idle_and_loading_have_no_choices() {
    assert!(LoadState::<Vec<Allergy>>::Idle.allergies().is_empty());
    assert!(LoadState::<Vec<Allergy>>::Loading.is_loading());
}

#[test]
fn filter_matches_substring_ignoring_case() {
    let all = vec![allergy(1, "Peanut"), allergy(2, "Shellfish"), allergy(3, "Tree nut")];

    let hits: Vec<i64> = filter_allergies(&all, "NUT").iter().map(|a| a.id).collect();
    assert_eq!(hits, vec![1, 3]);

    assert_eq!(filter_allergies(&all, "").len(), 3);
    assert!(filter_allergies(&all, "wheat").is_empty());
}
