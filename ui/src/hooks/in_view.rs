//! Detect when an element first enters the viewport.
use js_sys::Array;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

/// Fraction of the element that must be visible.
const VISIBILITY_THRESHOLD: f64 = 0.15;

type ObserverCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

/// Whether the referenced element has been in view.
///
/// Latches to `true` the first time the element intersects the viewport
/// and stops observing afterwards.
/// If observing is not supported the element is reported as in view.
#[hook]
pub fn use_in_view(node: NodeRef) -> bool {
    let in_view = use_state_eq(|| false);

    {
        let in_view = in_view.setter();

        use_effect_with(node, move |node| {
            let observer = node
                .cast::<web_sys::Element>()
                .and_then(|element| match observe_once(&element, in_view.clone()) {
                    Ok(observer) => Some(observer),
                    Err(err) => {
                        tracing::warn!(?err, "could not observe element, showing it");
                        in_view.set(true);
                        None
                    }
                });

            // clean up
            move || {
                if let Some((observer, _callback)) = observer {
                    observer.disconnect();
                }
            }
        });
    }

    *in_view
}

fn observe_once(
    element: &web_sys::Element,
    in_view: UseStateSetter<bool>,
) -> Result<(IntersectionObserver, ObserverCallback), JsValue> {
    let callback: ObserverCallback =
        Closure::new(move |entries: Array, observer: IntersectionObserver| {
            let intersecting = entries.iter().any(|entry| {
                entry
                    .unchecked_into::<IntersectionObserverEntry>()
                    .is_intersecting()
            });

            if intersecting {
                in_view.set(true);
                observer.disconnect();
            }
        });

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(VISIBILITY_THRESHOLD));

    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    observer.observe(element);

    Ok((observer, callback))
}
