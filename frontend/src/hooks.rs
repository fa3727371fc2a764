//! Browser glue shared by the sections: viewport observation, scroll
//! tracking and smooth in-page navigation.

use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{
    Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, ScrollBehavior, ScrollIntoViewOptions, ScrollToOptions,
};
use yew::prelude::*;

/// Root margin used by most reveal targets: trigger slightly before the
/// element is fully on screen.
pub const REVEAL_MARGIN: &str = "-50px";

/// Returns `true` once `node` has intersected the viewport. Flips at most
/// once; the observer is disconnected as soon as it fires.
#[hook]
pub fn use_reveal(node: NodeRef, root_margin: &'static str) -> bool {
    let revealed = use_state(|| false);

    {
        let revealed = revealed.clone();
        use_effect_with_deps(
            move |node| {
                let observer = node.cast::<Element>().and_then(|element| {
                    let revealed = revealed.clone();
                    observe_once(&element, root_margin, move || revealed.set(true))
                });
                // Without an observer the content must still show up.
                if observer.is_none() {
                    revealed.set(true);
                }
                move || {
                    if let Some((observer, _callback)) = observer {
                        observer.disconnect();
                    }
                }
            },
            node,
        );
    }

    *revealed
}

type EntriesCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

fn observe_once(
    element: &Element,
    root_margin: &str,
    on_visible: impl Fn() + 'static,
) -> Option<(IntersectionObserver, EntriesCallback)> {
    let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
        let visible = entries.iter().any(|entry| {
            entry
                .dyn_into::<IntersectionObserverEntry>()
                .map(|e| e.is_intersecting())
                .unwrap_or(false)
        });
        if visible {
            on_visible();
            observer.disconnect();
        }
    }) as Box<dyn FnMut(Array, IntersectionObserver)>);

    let init = IntersectionObserverInit::new();
    init.set_root_margin(root_margin);
    init.set_threshold(&JsValue::from_f64(0.1));

    match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
        Ok(observer) => {
            observer.observe(element);
            Some((observer, callback))
        }
        Err(e) => {
            warn!("IntersectionObserver unavailable: {:?}", e);
            None
        }
    }
}

/// Vertical scroll offset of the window, updated on every scroll event.
#[hook]
pub fn use_scroll_y() -> f64 {
    let scroll_y = use_state(|| 0.0_f64);

    {
        let scroll_y = scroll_y.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window();
                if let Some(y) = window.as_ref().and_then(|w| w.scroll_y().ok()) {
                    scroll_y.set(y);
                }
                let listener = window.as_ref().and_then(|window| {
                    let win = window.clone();
                    let callback = Closure::wrap(Box::new(move || {
                        if let Ok(y) = win.scroll_y() {
                            scroll_y.set(y);
                        }
                    }) as Box<dyn FnMut()>);

                    match window.add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref()) {
                        Ok(()) => Some(callback),
                        Err(e) => {
                            warn!("could not listen for scroll events: {:?}", e);
                            None
                        }
                    }
                });

                move || {
                    if let (Some(window), Some(callback)) = (window, listener) {
                        let _ = window.remove_event_listener_with_callback(
                            "scroll",
                            callback.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            (),
        );
    }

    *scroll_y
}

/// Smoothly scrolls the element with the given id into view.
pub fn scroll_to_section(id: &str) {
    let Some(element) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
    else {
        warn!("no section with id #{}", id);
        return;
    };
    debug!("scrolling to #{}", id);
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

pub fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

/// Turns on `scroll-behavior: smooth` for the document while mounted, so
/// plain `#fragment` links glide too.
#[hook]
pub fn use_smooth_scrolling() {
    use_effect_with_deps(
        |_| {
            let root = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|d| d.document_element())
                .and_then(|e| e.dyn_into::<HtmlElement>().ok());
            set_scroll_behavior(root.as_ref(), "smooth");
            move || set_scroll_behavior(root.as_ref(), "auto")
        },
        (),
    );
}

fn set_scroll_behavior(root: Option<&HtmlElement>, value: &str) {
    if let Some(root) = root {
        if let Err(e) = root.style().set_property("scroll-behavior", value) {
            warn!("could not set scroll-behavior: {:?}", e);
        }
    }
}
