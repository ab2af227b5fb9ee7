//! Scroll To Top Button
//!
//! Floating button shown once the page has scrolled past a threshold.

use leptos::prelude::*;
use leptos_page_scroll::{scroll_to_top, use_window_scroll};

/// Scroll distance (px) after which the button appears
const SHOW_AFTER_PX: f64 = 300.0;

#[component]
pub fn ScrollToTop() -> impl IntoView {
    let (visible, set_visible) = signal(false);

    use_window_scroll(move |scroll_y| {
        set_visible.set(scroll_y > SHOW_AFTER_PX);
    });

    let button_class = move || {
        let state = if visible.get() {
            "translate-y-0 opacity-100"
        } else {
            "translate-y-16 opacity-0 pointer-events-none"
        };
        format!(
            "fixed bottom-4 right-4 sm:bottom-8 sm:right-8 z-50 w-11 h-11 sm:w-12 sm:h-12 bg-black hover:bg-gray-800 \
             text-white rounded-full shadow-lg transition-all duration-300 flex items-center justify-center transform {}",
            state
        )
    };

    view! {
        <button class=button_class aria-label="Scroll to top" on:click=move |_| scroll_to_top()>
            "↑"
        </button>
    }
}
