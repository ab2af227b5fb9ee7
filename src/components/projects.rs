//! Projects Section
//!
//! Gallery grid fed by the backend project list, with category tabs,
//! "Show More" and the image carousel modal.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_page_scroll::ScrollLock;

use crate::api::HttpProjectSource;
use crate::context::use_app_context;
use crate::gallery::{Carousel, DisplayProject, GalleryState, ProjectSource};
use super::category_tabs::CategoryTabs;
use super::project_modal::ProjectModal;

/// Carousel signal shared with the modal; holds the scroll lock while open
pub type ProjectCarousel = RwSignal<Carousel<ScrollLock>, LocalStorage>;

#[component]
pub fn Projects() -> impl IntoView {
    let config = use_app_context().config();
    let gallery = RwSignal::new(GalleryState::new(config.asset_origin.clone()));
    let carousel: ProjectCarousel = RwSignal::new_local(Carousel::new());
    let source = HttpProjectSource::new(config.projects_api);

    // Load projects on mount
    Effect::new(move |_| {
        let Some(ticket) = gallery.try_update(GalleryState::begin_load) else { return };
        let source = source.clone();
        spawn_local(async move {
            let result = source.fetch_projects().await;
            gallery.update(|g| {
                g.finish_load(ticket, result);
            });
        });
    });

    // Release the scroll lock if the section goes away with the modal open
    on_cleanup(move || {
        carousel.try_update(|c| c.close());
    });

    // Derived views
    let visible = Memo::new(move |_| gallery.with(|g| g.visible_projects()));
    let has_more = Memo::new(move |_| gallery.with(|g| g.has_more()));
    let selected = Signal::derive(move || gallery.with(|g| g.selected_category()));
    let loading = move || gallery.with(|g| g.loading());

    let open_project = move |project: DisplayProject| {
        log::debug!("[PROJECTS] Opening carousel for {}", project.id);
        carousel.update(|c| c.open_with(project, ScrollLock::acquire));
    };

    view! {
        <section class="py-20 px-4 sm:px-6 lg:px-8 relative overflow-hidden">
            <div class="max-w-7xl mx-auto relative z-10">
                <div class="text-center mb-12 animate-fadeIn">
                    <h2 class="text-4xl md:text-5xl font-bold text-black mb-8">"My Projects"</h2>
                    <p class="text-black/70 text-lg max-w-3xl mx-auto">
                        "A collection of projects I've built using modern technologies and industry best practices."
                    </p>
                </div>

                <CategoryTabs
                    selected=selected
                    on_change=move |tab| gallery.update(|g| g.set_category(tab))
                />

                <Show
                    when=move || !loading()
                    fallback=|| view! {
                        <div class="text-center py-12">
                            <div class="inline-block animate-spin rounded-full h-12 w-12 border-b-2 border-black mb-4"></div>
                            <p class="text-gray-500 text-lg">"Loading projects..."</p>
                        </div>
                    }
                >
                    <Show
                        when=move || !visible.get().is_empty()
                        fallback=move || match gallery.with(|g| g.failure().cloned()) {
                            Some(e) => view! {
                                <div class="text-center py-12">
                                    <p class="text-red-600 text-lg mb-2">"Projects could not be loaded."</p>
                                    <p class="text-gray-500 text-sm">{e.to_string()}</p>
                                </div>
                            }.into_any(),
                            None => view! {
                                <p class="text-center text-gray-500 py-12">"No projects to show yet."</p>
                            }.into_any(),
                        }
                    >
                        <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-8">
                            <For
                                each=move || visible.get()
                                key=|project| project.id.clone()
                                children=move |project| view! {
                                    <ProjectCard project=project on_open=open_project />
                                }
                            />
                        </div>
                    </Show>
                </Show>

                <Show when=move || has_more.get()>
                    <div class="mt-16 text-center animate-slideUp">
                        <h3 class="mb-4 text-gray-600 text-sm">
                            "Some projects may not be displayed due to confidentiality or ownership restrictions."
                        </h3>
                        <button
                            class="inline-flex items-center gap-2 px-6 py-3 bg-black text-white font-semibold rounded-full shadow-lg hover:shadow-xl transition-all duration-300 transform hover:scale-105"
                            on:click=move |_| gallery.update(|g| g.toggle_show_all())
                        >
                            {move || if gallery.with(|g| g.show_all()) { "Show Less ▲" } else { "Show More ▼" }}
                        </button>
                    </div>
                </Show>
            </div>

            <ProjectModal carousel=carousel />
        </section>
    }
}

/// Grid card: cover image on the category gradient
#[component]
fn ProjectCard(
    project: DisplayProject,
    on_open: impl Fn(DisplayProject) + Copy + 'static,
) -> impl IntoView {
    let image_count = project.image_urls.len();
    let has_cover = !project.cover_image_url.is_empty();
    let clicked = project.clone();

    view! {
        <div
            class="bg-white rounded-2xl overflow-hidden shadow-lg hover:shadow-2xl transition-all duration-500 group animate-slideUp p-3 border cursor-pointer"
            on:click=move |_| on_open(clicked.clone())
        >
            <div class="p-4">
                <h3 class="text-xl font-bold text-black mb-3">{project.title.clone()}</h3>
                <span class="px-3 py-1 bg-black text-white text-xs font-semibold rounded-full">
                    {project.category.label()}
                </span>
            </div>

            <div class=format!("relative p-2 bg-gradient-to-br rounded-xl {}", project.gradient)>
                <div class="bg-white rounded-2xl overflow-hidden shadow-xl">
                    {if has_cover {
                        view! {
                            <img
                                src=project.cover_image_url.clone()
                                alt=project.title.clone()
                                class="w-full h-52 object-cover transform group-hover:scale-105 transition-transform duration-500"
                            />
                        }.into_any()
                    } else {
                        view! { <div class="w-full h-52 flex items-center justify-center text-gray-400">"No image"</div> }.into_any()
                    }}
                </div>
                {(image_count > 1).then(|| view! {
                    <span class="absolute top-4 right-4 bg-black/70 text-white text-xs px-2 py-1 rounded-full">
                        {format!("{} images", image_count)}
                    </span>
                })}
            </div>

            <p class="p-4 text-gray-600 text-sm leading-relaxed">{project.description.clone()}</p>
        </div>
    }
}
