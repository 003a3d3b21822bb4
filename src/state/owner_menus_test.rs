use super::*;
use crate::net::Body;
use crate::test_support::{ScriptedTransport, server_error};
use serde_json::json;

fn menu_rows() -> Value {
    json!({ "data": [
        { "id": 1, "name": "Kimchi Jjigae", "price": 9000, "allergies": ["Soy"], "allergyIds": [4] },
        { "id": 2, "name": "Japchae", "price": 11000.0 }
    ] })
}

#[tokio::test]
async fn fetch_owner_menus_loads_list() {
    let transport = Rc::new(ScriptedTransport::new().reply(Method::Get, "/api/owner/stores/3/menus", menu_rows()));
    let menus = OwnerMenus::new(Rc::clone(&transport));

    menus.fetch_owner_menus(3).await;

    let state = menus.snapshot();
    assert_eq!(state.menus.len(), 2);
    assert_eq!(state.menus[0].allergies, vec!["Soy".to_owned()]);
    assert!(state.menus[1].allergy_ids.is_empty());
    assert!(!state.loading());
}

#[tokio::test]
async fn fetch_owner_menus_accepts_bare_array() {
    let transport = Rc::new(ScriptedTransport::new().reply(
        Method::Get,
        "/api/owner/stores/3/menus",
        json!([{ "id": 5, "name": "Bindaetteok", "price": 7000 }]),
    ));
    let menus = OwnerMenus::new(Rc::clone(&transport));

    menus.fetch_owner_menus(3).await;

    assert_eq!(menus.snapshot().menus[0].name, "Bindaetteok");
}

#[tokio::test]
async fn failed_fetch_sets_error_and_success_clears_it() {
    let transport = Rc::new(
        ScriptedTransport::new()
            .fail(Method::Get, "/api/owner/stores/3/menus", server_error())
            .reply(Method::Get, "/api/owner/stores/3/menus", menu_rows()),
    );
    let menus = OwnerMenus::new(Rc::clone(&transport));

    menus.fetch_owner_menus(3).await;
    assert_eq!(menus.snapshot().error.as_deref(), Some("internal error"));

    menus.fetch_owner_menus(3).await;
    assert!(menus.snapshot().error.is_none());
    assert_eq!(menus.snapshot().menus.len(), 2);
}

#[tokio::test]
async fn update_menu_puts_multipart_form() {
    let transport = Rc::new(ScriptedTransport::new().reply(Method::Put, "/api/owner/stores/3/menus/1", Value::Null));
    let menus = OwnerMenus::new(Rc::clone(&transport));
    let mut form = MultipartForm::new();
    form.append_text("name", "Kimchi Jjigae");

    menus.update_menu(3, 1, form.clone()).await.unwrap();

    assert_eq!(transport.calls()[0].options.body, Body::Multipart(form));
}

#[tokio::test]
async fn mutations_leave_list_state_alone() {
    let transport = Rc::new(ScriptedTransport::new().fail(Method::Delete, "/api/owner/stores/3/menus/1", server_error()));
    let menus = OwnerMenus::new(Rc::clone(&transport));

    assert!(menus.delete_menu(3, 1).await.is_err());

    let state = menus.snapshot();
    assert!(state.error.is_none());
    assert_eq!(state.pending, 0);
}

#[tokio::test]
async fn create_menu_posts_and_returns_data() {
    let transport = Rc::new(ScriptedTransport::new().reply(
        Method::Post,
        "/api/owner/stores/3/menus",
        json!({ "data": { "id": 12 } }),
    ));
    let menus = OwnerMenus::new(Rc::clone(&transport));

    let created = menus.create_menu(3, MultipartForm::new()).await.unwrap();

    assert_eq!(created, json!({ "id": 12 }));
}
