//! Category Tabs Component
//!
//! Filter buttons for the project gallery.

use leptos::prelude::*;

use crate::gallery::CategoryFilter;

/// One button per category filter, highlighting the selected one
#[component]
pub fn CategoryTabs(
    #[prop(into)] selected: Signal<CategoryFilter>,
    on_change: impl Fn(CategoryFilter) + Copy + 'static,
) -> impl IntoView {
    view! {
        <div class="flex flex-wrap justify-center gap-3 mb-12">
            {CategoryFilter::TABS.iter().map(|tab| {
                let tab = *tab;
                let is_selected = move || selected.get() == tab;
                view! {
                    <button
                        class=move || if is_selected() {
                            "px-5 py-2 rounded-full text-sm font-semibold bg-black text-white shadow-lg"
                        } else {
                            "px-5 py-2 rounded-full text-sm font-semibold bg-white text-black border hover:bg-gray-100"
                        }
                        on:click=move |_| on_change(tab)
                    >
                        {tab.label()}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
