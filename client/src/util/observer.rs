//! `IntersectionObserver` wrapper for one-shot visibility callbacks.
//!
//! Browser-only. The returned handle owns both the observer and the JS
//! closure; dropping it disconnects the observer and frees the closure.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::Closure;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

type ObserverCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

pub struct ObserverHandle {
    observer: IntersectionObserver,
    _callback: ObserverCallback,
}

impl Drop for ObserverHandle {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Call `on_visible` the first time `target` intersects the viewport shrunk
/// by `root_margin`, then stop observing.
///
/// Returns `None` if the browser refuses to construct the observer.
pub fn observe_once(
    target: &Element,
    root_margin: &str,
    on_visible: impl Fn() + 'static,
) -> Option<ObserverHandle> {
    let callback: ObserverCallback = Closure::new(move |entries: js_sys::Array, observer: IntersectionObserver| {
        let visible = entries
            .iter()
            .any(|entry| entry.unchecked_into::<IntersectionObserverEntry>().is_intersecting());
        if visible {
            observer.disconnect();
            on_visible();
        }
    });

    let options = IntersectionObserverInit::new();
    options.set_root_margin(root_margin);
    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options).ok()?;
    observer.observe(target);

    Some(ObserverHandle { observer, _callback: callback })
}
