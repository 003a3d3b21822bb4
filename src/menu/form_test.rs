use super::*;
use crate::model::ImageFile;
use crate::net::Part;
use crate::test_support::RecordingNotifier;
use std::cell::RefCell;

fn photo() -> ImageFile {
    ImageFile { name: "bibimbap.jpg".to_owned(), content_type: "image/jpeg".to_owned(), bytes: vec![1, 2, 3] }
}

fn draft(name: &str, price: &str) -> MenuDraft {
    MenuDraft { name: name.to_owned(), price: price.to_owned(), ..MenuDraft::default() }
}

fn menu() -> Menu {
    Menu {
        id: 7,
        name: "Bibimbap".to_owned(),
        price: 9500.0,
        description: None,
        image_url: Some("https://cdn.example/menus/7.jpg".to_owned()),
        allergy_ids: vec![2, 5],
        allergies: vec!["Egg".to_owned(), "Soy".to_owned()],
    }
}

// =============================================================
// draft editing
// =============================================================

#[test]
fn draft_for_existing_menu_copies_fields() {
    let d = MenuDraft::for_menu(Some(&menu()));
    assert_eq!(d.name, "Bibimbap");
    assert_eq!(d.price, "9500");
    assert_eq!(d.allergy_ids, vec![2, 5]);
    assert_eq!(d.images, vec![ImageUpload::existing("https://cdn.example/menus/7.jpg")]);
}

#[test]
fn draft_for_create_is_empty() {
    assert_eq!(MenuDraft::for_menu(None), MenuDraft::default());
}

#[test]
fn toggle_allergy_adds_then_removes_without_duplicates() {
    let mut d = MenuDraft::default();
    d.toggle_allergy(3);
    d.toggle_allergy(1);
    assert_eq!(d.allergy_ids, vec![3, 1]);
    assert!(d.has_allergy(1));

    d.toggle_allergy(3);
    assert_eq!(d.allergy_ids, vec![1]);
    assert!(!d.has_allergy(3));
}

#[test]
fn set_images_keeps_only_the_first() {
    let mut d = MenuDraft::default();
    d.set_images(vec![ImageUpload::existing("a"), ImageUpload::existing("b")]);
    assert_eq!(d.images.len(), MAX_IMAGES);
    assert_eq!(d.images[0].preview_url, "a");
}

// =============================================================
// validation
// =============================================================

#[test]
fn blank_name_is_rejected() {
    assert_eq!(draft("   ", "1000").to_form(None), Err(MenuFormError::EmptyName));
}

#[test]
fn price_must_be_a_positive_number() {
    for bad in ["", "   ", "0", "-500", "abc", "12abc", "NaN", "inf"] {
        assert_eq!(draft("Tteokbokki", bad).to_form(None), Err(MenuFormError::InvalidPrice), "input {bad:?}");
    }
}

#[test]
fn parse_price_accepts_decimal_forms() {
    assert_eq!(parse_price(" 4500 "), Ok(4500.0));
    assert_eq!(parse_price("12.5"), Ok(12.5));
    assert_eq!(parse_price("1e3"), Ok(1000.0));
}

// =============================================================
// payload
// =============================================================

#[test]
fn edit_payload_carries_id_trimmed_name_and_allergies() {
    let mut d = draft("  Bibimbap ", "9500");
    d.allergy_ids = vec![2, 5];
    d.set_images(vec![ImageUpload::picked(photo(), "blob:preview")]);

    let form = d.to_form(Some(7)).unwrap();

    let names: Vec<&str> = form.parts().iter().map(Part::name).collect();
    assert_eq!(names, vec!["id", "name", "price", "allergyIds", "allergyIds", "image"]);
    assert_eq!(form.text("id"), Some("7"));
    assert_eq!(form.text("name"), Some("Bibimbap"));
    assert_eq!(form.text("price"), Some("9500"));
    assert_eq!(form.text_values("allergyIds"), vec!["2", "5"]);
    assert_eq!(form.file("image"), Some(&photo()));
}

#[test]
fn create_payload_has_no_id_and_no_image_without_file() {
    let mut d = draft("Sikhye", "3000.50");
    d.set_images(vec![ImageUpload::existing("https://cdn.example/old.jpg")]);

    let form = d.to_form(None).unwrap();

    assert_eq!(form.text("id"), None);
    assert_eq!(form.text("price"), Some("3000.5"));
    assert!(form.file("image").is_none());
}

// =============================================================
// submit_menu
// =============================================================

#[tokio::test]
async fn invalid_draft_alerts_and_skips_callback() {
    let notifier = RecordingNotifier::answering(true);
    let called = RefCell::new(false);

    let outcome = submit_menu(&draft("Naengmyeon", "0"), None, &notifier, |_| {
        *called.borrow_mut() = true;
        async { Ok(()) }
    })
    .await;

    assert_eq!(outcome, SubmitOutcome::Invalid(MenuFormError::InvalidPrice));
    assert!(!outcome.closes_modal());
    assert!(!*called.borrow());
    assert_eq!(notifier.alerts(), vec!["Please enter a valid price.".to_owned()]);
}

#[tokio::test]
async fn successful_submit_closes_without_alert() {
    let notifier = RecordingNotifier::answering(true);
    let sent = RefCell::new(None);

    let outcome = submit_menu(&draft("Naengmyeon", "11000"), Some(4), &notifier, |form| {
        *sent.borrow_mut() = Some(form);
        async { Ok(()) }
    })
    .await;

    assert!(outcome.closes_modal());
    assert!(notifier.alerts().is_empty());
    assert_eq!(sent.borrow().as_ref().and_then(|f| f.text("id").map(str::to_owned)), Some("4".to_owned()));
}

#[tokio::test]
async fn failed_callback_alerts_and_keeps_modal_open() {
    let notifier = RecordingNotifier::answering(true);

    let outcome = submit_menu(&draft("Naengmyeon", "11000"), None, &notifier, |_| async {
        Err(ApiError::Request("offline".to_owned()))
    })
    .await;

    assert_eq!(outcome, SubmitOutcome::Failed);
    assert!(!outcome.closes_modal());
    assert_eq!(notifier.alerts(), vec![SUBMIT_FAILED.to_owned()]);
}
