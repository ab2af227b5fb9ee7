//! Leptos Page Scroll Utilities
//!
//! Scroll helpers for Leptos pages: a scoped body scroll lock, a window
//! scroll listener tied to the owning component, and smooth scrolling.

use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// Suppresses background page scrolling while alive.
///
/// Acquiring sets `overflow: hidden` on `<body>`; dropping restores whatever
/// inline value was there before. Nesting is not supported.
pub struct ScrollLock {
    body: Option<web_sys::HtmlElement>,
    previous: String,
}

impl ScrollLock {
    pub fn acquire() -> Self {
        let body = web_sys::window()
            .and_then(|win| win.document())
            .and_then(|doc| doc.body());

        let mut previous = String::new();
        if let Some(body) = &body {
            let style = body.style();
            previous = style.get_property_value("overflow").unwrap_or_default();
            if style.set_property("overflow", "hidden").is_err() {
                log::warn!("failed to lock body scroll");
            }
        }

        Self { body, previous }
    }
}

impl Drop for ScrollLock {
    fn drop(&mut self) {
        let Some(body) = &self.body else { return };
        let style = body.style();
        let restored = if self.previous.is_empty() {
            style.remove_property("overflow").map(|_| ())
        } else {
            style.set_property("overflow", &self.previous)
        };
        if restored.is_err() {
            log::warn!("failed to restore body scroll");
        }
    }
}

/// Current vertical scroll position of the window
pub fn window_scroll_y() -> f64 {
    web_sys::window()
        .and_then(|win| win.scroll_y().ok())
        .unwrap_or(0.0)
}

/// Call `on_scroll(scroll_y)` on every window scroll event.
///
/// The listener is removed when the calling component is cleaned up.
pub fn use_window_scroll<F>(on_scroll: F)
where
    F: Fn(f64) + 'static,
{
    let Some(win) = web_sys::window() else { return };

    let handler = Closure::<dyn FnMut(web_sys::Event)>::new(move |_ev: web_sys::Event| {
        on_scroll(window_scroll_y());
    });
    if win
        .add_event_listener_with_callback("scroll", handler.as_ref().unchecked_ref())
        .is_err()
    {
        log::warn!("failed to bind window scroll listener");
        return;
    }

    let stored = StoredValue::new_local(handler);
    on_cleanup(move || {
        if let Some(win) = web_sys::window() {
            stored.try_with_value(|handler| {
                let _ = win.remove_event_listener_with_callback("scroll", handler.as_ref().unchecked_ref());
            });
        }
        stored.dispose();
    });
}

/// Smooth scroll the window back to the top
pub fn scroll_to_top() {
    if let Some(win) = web_sys::window() {
        let opts = web_sys::ScrollToOptions::new();
        opts.set_top(0.0);
        opts.set_behavior(web_sys::ScrollBehavior::Smooth);
        win.scroll_to_with_scroll_to_options(&opts);
    }
}

/// Smooth scroll a horizontal strip so its left edge sits at `left` px
pub fn scroll_strip_to(strip: &web_sys::Element, left: f64) {
    let opts = web_sys::ScrollToOptions::new();
    opts.set_left(left);
    opts.set_behavior(web_sys::ScrollBehavior::Smooth);
    strip.scroll_to_with_scroll_to_options(&opts);
}

/// Visible width of a strip element in px
pub fn strip_width(strip: &web_sys::Element) -> f64 {
    strip.client_width() as f64
}
