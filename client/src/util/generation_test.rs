use super::*;

#[test]
fn latest_token_is_current() {
    let mut generations = Generations::default();
    let first = generations.advance();
    assert!(generations.is_current(first));
    let second = generations.advance();
    assert!(!generations.is_current(first));
    assert!(generations.is_current(second));
}

#[test]
fn returning_to_a_store_retires_its_old_controller() {
    // Store 7, then store 9, then store 7 again: one token per controller.
    let mut generations = Generations::default();
    let first_visit = generations.advance();
    let _other_store = generations.advance();
    let second_visit = generations.advance();
    assert!(!generations.is_current(first_visit));
    assert!(generations.is_current(second_visit));
}
