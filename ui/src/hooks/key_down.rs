//! Respond to a key press anywhere on the page.
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

/// Emits `onpress` whenever `key` is pressed while the component is mounted.
///
/// # Arguments
/// 1. `key`: Value of [`KeyboardEvent::key`](web_sys::KeyboardEvent::key), e.g. `"Escape"`.
/// 2. `onpress`: Callback to trigger.
#[hook]
pub fn use_key_down(key: &'static str, onpress: Callback<()>) {
    use_effect_with(onpress, move |onpress| {
        let document = web_sys::window()
            .and_then(|window| window.document())
            .expect("window should have a document");

        let listener: Closure<dyn Fn(web_sys::KeyboardEvent)> = {
            let onpress = onpress.clone();
            Closure::new(move |e: web_sys::KeyboardEvent| {
                if e.key() == key {
                    onpress.emit(());
                }
            })
        };

        document
            .add_event_listener_with_callback("keydown", listener.as_ref().unchecked_ref())
            .expect("could not add keydown listener");

        // clean up
        move || {
            document
                .remove_event_listener_with_callback("keydown", listener.as_ref().unchecked_ref())
                .expect("could not remove event listener");
        }
    });
}
