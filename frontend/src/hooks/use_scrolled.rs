use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::window;
use yew::prelude::*;

/// Scroll offset past which the navbar switches to its compact style.
const SCROLL_THRESHOLD_PX: f64 = 20.0;

/// Tracks whether the window has scrolled past the navbar threshold.
///
/// Registers a single window scroll listener on mount and removes it on
/// unmount. The returned flag only flips when the threshold is crossed,
/// so re-renders stay cheap during continuous scrolling.
#[hook]
pub fn use_scrolled() -> bool {
    let scrolled = use_state(|| false);

    {
        let scrolled = scrolled.clone();
        use_effect_with((), move |_| {
            let handle_scroll = {
                let scrolled = scrolled.clone();
                Closure::wrap(Box::new(move |_: web_sys::Event| {
                    let offset = window()
                        .and_then(|w| w.scroll_y().ok())
                        .unwrap_or_default();
                    let past = offset > SCROLL_THRESHOLD_PX;
                    if past != *scrolled {
                        scrolled.set(past);
                    }
                }) as Box<dyn FnMut(_)>)
            };

            if let Some(window) = window() {
                let _ = window.add_event_listener_with_callback(
                    "scroll",
                    handle_scroll.as_ref().unchecked_ref(),
                );
            }

            move || {
                if let Some(window) = window() {
                    let _ = window.remove_event_listener_with_callback(
                        "scroll",
                        handle_scroll.as_ref().unchecked_ref(),
                    );
                }
                drop(handle_scroll);
            }
        });
    }

    *scrolled
}
