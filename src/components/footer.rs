//! Footer Component

use chrono::Datelike;
use leptos::prelude::*;

use super::header::NAV_LINKS;

const SOCIAL_LINKS: &[(&str, &str)] = &[
    ("https://github.com", "GitHub"),
    ("https://linkedin.com", "LinkedIn"),
    ("mailto:your.email@example.com", "Email"),
];

#[component]
pub fn Footer() -> impl IntoView {
    let year = chrono::Local::now().year();

    view! {
        <footer class="relative bg-gradient-to-br from-gray-50 to-gray-100 py-16 px-4 sm:px-6 lg:px-8 border-t border-gray-200">
            <div class="max-w-7xl mx-auto relative z-10">
                <div class="grid md:grid-cols-3 gap-12 mb-12">
                    <div>
                        <h3 class="text-2xl font-bold text-black mb-4">"Portofolio"</h3>
                        <p class="text-gray-600 leading-relaxed mb-6">
                            "Full Stack Developer with a passion for building innovative, user-friendly digital solutions."
                        </p>
                        <div class="flex gap-4">
                            {SOCIAL_LINKS.iter().map(|(href, label)| view! {
                                <a href=*href target="_blank" class="px-4 h-10 bg-black hover:bg-gray-800 text-white rounded-full flex items-center justify-center text-sm">
                                    {*label}
                                </a>
                            }).collect_view()}
                        </div>
                    </div>

                    <div>
                        <h3 class="text-xl font-bold text-black mb-4">"Quick Links"</h3>
                        <ul class="space-y-3">
                            {NAV_LINKS.iter().map(|(href, label)| view! {
                                <li><a href=*href class="text-gray-600 hover:text-black transition-colors duration-300">{*label}</a></li>
                            }).collect_view()}
                        </ul>
                    </div>

                    <div>
                        <h3 class="text-xl font-bold text-black mb-4">"Contact"</h3>
                        <p class="text-gray-600">"Purwokerto, Central Java, Indonesia"</p>
                        <p class="text-gray-600">"your.email@example.com"</p>
                    </div>
                </div>

                <div class="border-t border-gray-200 pt-8 text-center text-gray-600 text-sm">
                    {format!("© {} Muhammad Fauzil Adim. Made with ❤ and Rust.", year)}
                </div>
            </div>
        </footer>
    }
}
