//! Follow the window's scroll offset.
use crate::dom;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

/// Emits the window's vertical scroll offset on mount and on every scroll.
#[hook]
pub fn use_window_scroll(onscroll: Callback<f64>) {
    use_effect_with(onscroll, move |onscroll| {
        let window = web_sys::window().expect("window not found");
        let emit = {
            let onscroll = onscroll.clone();
            move || match dom::scroll_offset() {
                Ok(offset) => onscroll.emit(offset),
                Err(err) => tracing::warn!(?err, "could not read scroll offset"),
            }
        };

        emit();
        let listener: Closure<dyn Fn()> = Closure::new(emit);
        window
            .add_event_listener_with_callback("scroll", listener.as_ref().unchecked_ref())
            .expect("could not add scroll listener");

        // clean up
        move || {
            window
                .remove_event_listener_with_callback("scroll", listener.as_ref().unchecked_ref())
                .expect("could not remove event listener");
        }
    });
}
