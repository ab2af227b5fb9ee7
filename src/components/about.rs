//! About Section

use leptos::prelude::*;

const FOCUS_AREAS: &[&str] = &["Full Stack Developer", "Mobile Development", "System Architecture", "UI/UX Design"];

const SKILLS: &[(&str, &str)] = &[
    ("💡", "Problem Solving"),
    ("🏅", "Quality Focused"),
    ("🧠", "Fast Learner"),
    ("💻", "Clean Code"),
];

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section class="py-20 px-4 sm:px-6 lg:px-8 relative overflow-hidden">
            <div class="max-w-7xl mx-auto relative z-10 grid lg:grid-cols-2 gap-12 items-center">
                <div class="animate-slideUp">
                    <h2 class="text-4xl md:text-5xl font-bold text-black mb-8">"About Me"</h2>
                    <p class="text-black/70 text-lg leading-relaxed mb-6">
                        "With over 1 year of experience in web and mobile development (2024-2025), I specialize in creating \
                         innovative digital solutions that drive business growth and enhance user experiences."
                    </p>
                    <p class="text-black/70 text-lg leading-relaxed mb-6">
                        "My expertise spans modern frameworks such as SolidJS, React, Next.js and Angular, plus backend \
                         development with Rust, Scala, GoLang and Laravel on PostgreSQL, MongoDB and ClickHouse."
                    </p>
                    <div class="flex flex-wrap gap-3">
                        {FOCUS_AREAS.iter().map(|area| view! {
                            <div class="bg-black text-white px-4 py-2 rounded-full text-sm font-medium">{*area}</div>
                        }).collect_view()}
                    </div>
                </div>

                <div class="relative rounded-3xl overflow-hidden shadow-2xl">
                    <img src="/profile-photo.jpg" alt="Muhammad Fauzil Adim" class="w-full h-full object-cover" />
                </div>
            </div>

            <div class="max-w-7xl mx-auto grid grid-cols-2 md:grid-cols-4 gap-6 mt-16">
                {SKILLS.iter().map(|(icon, label)| view! {
                    <div class="bg-white rounded-2xl p-6 shadow-lg border text-center">
                        <div class="text-4xl mb-3">{*icon}</div>
                        <div class="font-semibold text-black">{*label}</div>
                    </div>
                }).collect_view()}
            </div>
        </section>
    }
}
