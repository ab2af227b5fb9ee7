//! Project Modal Component
//!
//! Full-screen carousel over one project's images, with a thumbnail strip
//! that keeps the current image centered.

use leptos::prelude::*;
use leptos_page_scroll::{scroll_strip_to, strip_width};

use crate::gallery::{THUMB_GAP, THUMB_WIDTH};
use super::projects::ProjectCarousel;

#[component]
pub fn ProjectModal(carousel: ProjectCarousel) -> impl IntoView {
    let strip_ref = NodeRef::<leptos::html::Div>::new();

    let is_open = move || carousel.with(|c| c.is_open());
    let image_count = move || carousel.with(|c| c.len());
    let close = move || carousel.update(|c| c.close());

    // Keep the active thumbnail centered
    Effect::new(move |_| {
        let Some(strip) = strip_ref.get() else { return };
        let offset = carousel.with(|c| c.is_open().then(|| c.thumbnail_offset(strip_width(&strip))));
        if let Some(offset) = offset {
            scroll_strip_to(&strip, offset);
        }
    });

    view! {
        <Show when=is_open>
            // Backdrop: clicking outside the panel closes
            <div
                class="fixed inset-0 bg-black/80 backdrop-blur-sm z-50 flex items-center justify-center p-4 animate-fadeIn"
                on:click=move |_| close()
            >
                <div
                    class="bg-white rounded-2xl w-full max-w-4xl overflow-hidden shadow-2xl animate-slideUp"
                    on:click=|ev| ev.stop_propagation()
                >
                    <div class="flex items-center justify-between p-6 border-b">
                        <div>
                            <h3 class="text-2xl font-bold text-black">
                                {move || carousel.with(|c| c.active().map(|p| p.title.clone()).unwrap_or_default())}
                            </h3>
                            <span class="text-sm text-gray-500">
                                {move || carousel.with(|c| c.active().map(|p| p.category.label()).unwrap_or_default())}
                            </span>
                        </div>
                        <button class="text-gray-500 hover:text-black text-2xl" aria-label="Close" on:click=move |_| close()>
                            "✕"
                        </button>
                    </div>

                    // Current image
                    <div class="relative bg-gray-100 h-[28rem] flex items-center justify-center overflow-hidden">
                        {move || {
                            let (image, direction) = carousel.with(|c| (c.current_image().map(str::to_string), c.direction()));
                            match image {
                                Some(src) => view! {
                                    <img src=src class=format!("max-h-full max-w-full object-contain {}", direction.animation_class()) />
                                }.into_any(),
                                None => view! { <p class="text-gray-400">"No images for this project"</p> }.into_any(),
                            }
                        }}

                        <Show when=move || { image_count() > 1 }>
                            <button
                                class="absolute left-4 top-1/2 -translate-y-1/2 bg-black/60 hover:bg-black text-white w-10 h-10 rounded-full"
                                aria-label="Previous image"
                                on:click=move |_| carousel.update(|c| c.prev())
                            >
                                "‹"
                            </button>
                            <button
                                class="absolute right-4 top-1/2 -translate-y-1/2 bg-black/60 hover:bg-black text-white w-10 h-10 rounded-full"
                                aria-label="Next image"
                                on:click=move |_| carousel.update(|c| c.next())
                            >
                                "›"
                            </button>
                            <span class="absolute bottom-4 right-4 bg-black/60 text-white text-xs px-3 py-1 rounded-full">
                                {move || carousel.with(|c| format!("{} / {}", c.current_index() + 1, c.len()))}
                            </span>
                        </Show>
                    </div>

                    // Thumbnail strip
                    <div
                        node_ref=strip_ref
                        class="flex overflow-x-auto p-4 border-t"
                        style=format!("gap: {}px", THUMB_GAP)
                    >
                        <For
                            each=move || carousel.with(|c| {
                                c.active()
                                    .map(|p| p.image_urls.iter().cloned().enumerate().collect::<Vec<_>>())
                                    .unwrap_or_default()
                            })
                            key=|(index, url)| (*index, url.clone())
                            children=move |(index, url)| {
                                let is_current = move || carousel.with(|c| c.current_index() == index);
                                view! {
                                    <button
                                        class=move || if is_current() {
                                            "flex-shrink-0 rounded-lg overflow-hidden ring-2 ring-black"
                                        } else {
                                            "flex-shrink-0 rounded-lg overflow-hidden opacity-60 hover:opacity-100"
                                        }
                                        style=format!("width: {}px; height: {}px", THUMB_WIDTH, THUMB_WIDTH * 0.75)
                                        on:click=move |_| carousel.update(|c| {
                                            c.go_to(index);
                                        })
                                    >
                                        <img src=url class="w-full h-full object-cover" />
                                    </button>
                                }
                            }
                        />
                    </div>

                    <p class="p-6 text-gray-600 leading-relaxed">
                        {move || carousel.with(|c| c.active().map(|p| p.description.clone()).unwrap_or_default())}
                    </p>
                </div>
            </div>
        </Show>
    }
}
