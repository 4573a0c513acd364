#![cfg(target_arch = "wasm32")]
//! Tests for `components/form/text_field`.
use fake::faker::lorem::raw::Sentence;
use fake::locales::EN;
use fake::Fake;
use folio_ui::components::TextField;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use yew::platform::time::sleep;
use yew::prelude::*;
wasm_bindgen_test_configure!(run_in_browser);

#[derive(Properties, PartialEq)]
struct HostProps {
    disabled: bool,
    rows: Option<u32>,
    received: Rc<RefCell<Vec<String>>>,
}

#[function_component(Host)]
fn host(props: &HostProps) -> Html {
    let value = use_state(String::new);
    let oninput = {
        let value = value.clone();
        let received = props.received.clone();
        Callback::from(move |text: String| {
            received.borrow_mut().push(text.clone());
            value.set(text);
        })
    };

    html! {
        <TextField
            name="message"
            label="Message"
            value={(*value).clone()}
            rows={props.rows}
            disabled={props.disabled}
            {oninput} />
    }
}

async fn render(disabled: bool, rows: Option<u32>) -> (web_sys::Element, Rc<RefCell<Vec<String>>>) {
    let document = web_sys::window().unwrap().document().unwrap();
    let root = document.create_element("div").unwrap();
    document.body().unwrap().append_child(&root).unwrap();

    let received = Rc::new(RefCell::new(Vec::new()));
    yew::Renderer::<Host>::with_root_and_props(
        root.clone(),
        HostProps {
            disabled,
            rows,
            received: received.clone(),
        },
    )
    .render();

    sleep(Duration::ZERO).await;
    (root, received)
}

fn dispatch_input(control: &web_sys::Element) {
    let init = web_sys::InputEventInit::new();
    init.set_bubbles(true);
    let event = web_sys::InputEvent::new_with_event_init_dict("input", &init).unwrap();
    control.dispatch_event(&event).unwrap();
}

// *************
// *** Input ***
// *************

#[wasm_bindgen_test]
async fn text_field_disabled_should_reach_input() {
    let (root, _) = render(true, None).await;

    let input = root
        .query_selector("input#message")
        .unwrap()
        .expect("single line field should render an input");

    assert!(input.has_attribute("required"));
    assert!(input.has_attribute("disabled"));
    assert!(root.query_selector("textarea").unwrap().is_none());
}

#[wasm_bindgen_test]
async fn text_field_enabled_should_not_be_disabled() {
    let (root, _) = render(false, None).await;

    let input = root.query_selector("input#message").unwrap().unwrap();
    assert!(input.has_attribute("required"));
    assert!(!input.has_attribute("disabled"));
}

// ****************
// *** Textarea ***
// ****************

#[wasm_bindgen_test]
async fn text_field_rows_should_render_textarea() {
    let (root, received) = render(false, Some(5)).await;

    let area = root
        .query_selector("textarea#message")
        .unwrap()
        .expect("multiline field should render a textarea")
        .unchecked_into::<web_sys::HtmlTextAreaElement>();

    assert!(area.has_attribute("required"));
    assert!(!area.has_attribute("disabled"));
    assert_eq!(5, area.rows());

    let text: String = Sentence(EN, 3..6).fake();
    area.set_value(&text);
    dispatch_input(&area);
    sleep(Duration::ZERO).await;

    assert_eq!(vec![text.clone()], *received.borrow());
    assert_eq!(text, area.value(), "value should stay controlled");
}
