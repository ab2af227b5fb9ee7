//! Header Component
//!
//! Fixed top bar with anchor navigation and a collapsible mobile menu.

use leptos::prelude::*;

/// Section anchors in page order
pub const NAV_LINKS: &[(&str, &str)] = &[
    ("#home", "Home"),
    ("#about", "About"),
    ("#services", "Services"),
    ("#experience", "Experience"),
    ("#projects", "Projects"),
    ("#team", "Team"),
];

#[component]
pub fn Header() -> impl IntoView {
    let (menu_open, set_menu_open) = signal(false);
    let close_menu = move |_| set_menu_open.set(false);

    view! {
        <header class="fixed top-0 w-full z-50 glass-effect">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center py-4">
                    <span class="text-black font-bold text-xl">"Portofolio"</span>

                    // Desktop navigation
                    <nav class="hidden md:flex items-center space-x-8">
                        {NAV_LINKS.iter().map(|(href, label)| view! {
                            <a href=*href class="text-black hover:text-gray-600 transition-colors font-medium">{*label}</a>
                        }).collect_view()}
                    </nav>

                    <a href="#home" class="hidden md:flex items-center">
                        <img src="/Logo.png" alt="Logo" class="h-8 w-auto transition-transform duration-300 hover:scale-110" />
                    </a>

                    <button
                        class="md:hidden text-black text-2xl"
                        aria-label="Toggle menu"
                        on:click=move |_| set_menu_open.update(|open| *open = !*open)
                    >
                        {move || if menu_open.get() { "✕" } else { "☰" }}
                    </button>
                </div>

                // Mobile navigation
                <Show when=move || menu_open.get()>
                    <nav class="md:hidden pb-4 animate-slideUp">
                        <div class="flex flex-col space-y-4">
                            {NAV_LINKS.iter().map(|(href, label)| view! {
                                <a href=*href on:click=close_menu class="text-black hover:text-gray-600 transition-colors font-medium py-2">{*label}</a>
                            }).collect_view()}
                        </div>
                    </nav>
                </Show>
            </div>
        </header>
    }
}
