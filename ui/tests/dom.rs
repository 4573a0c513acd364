#![cfg(target_arch = "wasm32")]
//! Tests for `dom`.
use folio_ui::dom;
use wasm_bindgen_test::*;
wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn scroll_to_missing_anchor_should_be_noop() {
    assert!(!dom::scroll_to_anchor("folio-test-missing-anchor"));
}

#[wasm_bindgen_test]
fn scroll_to_existing_anchor_should_work() {
    let document = dom::document().expect("document should exist");
    let body = document.body().expect("document should have a body");
    let target = document.create_element("section").unwrap();
    target.set_id("folio-test-anchor");
    body.append_child(&target).unwrap();

    assert!(dom::scroll_to_anchor("folio-test-anchor"));
    body.remove_child(&target).unwrap();
}

#[wasm_bindgen_test]
fn current_year_should_be_plausible() {
    assert!(dom::current_year() >= 2024);
}
