//! Experience Section
//!
//! Work history cards; clicking a card expands its responsibilities.

use std::collections::BTreeSet;

use leptos::prelude::*;

pub struct WorkExperience {
    pub id: &'static str,
    pub company: &'static str,
    pub position: &'static str,
    pub location: &'static str,
    pub period: &'static str,
    pub is_current: bool,
    pub summary: &'static str,
    pub responsibilities: &'static [&'static str],
    pub technologies: &'static [&'static str],
    pub logo: &'static str,
    pub website: &'static str,
}

pub const EXPERIENCES: &[WorkExperience] = &[
    WorkExperience {
        id: "smartelco",
        company: "PT. Smartelco Solusi Teknologi",
        position: "Junior Developer",
        location: "Sokaraja, Banyumas",
        period: "Dec 2024 - Nov 2025",
        is_current: true,
        summary: "Contract • 1 year",
        responsibilities: &[
            "Develop web applications using Rust, React.js, and Solid.js",
            "Implement RESTful APIs and integrate databases",
            "Collaborate with the team in developing new features",
            "Perform application testing and debugging",
            "Document code and technical specifications",
        ],
        technologies: &["Rust", "React.js", "Solid.js", "Express.js", "SurrealDB", "PostgreSQL"],
        logo: "🏢",
        website: "https://smartelco.co.id",
    },
    WorkExperience {
        id: "rumah-mesin",
        company: "CV. Rumah Mesin",
        position: "Search Engine Optimization Specialist",
        location: "Bantul, Daerah Istimewa Yogyakarta",
        period: "Apr 2022 - Sep 2022",
        is_current: false,
        summary: "Internship • 6 months",
        responsibilities: &[
            "Implement off-page and on-page SEO strategies",
            "Create articles optimized for SEO",
            "Identify websites suitable for article placement",
        ],
        technologies: &["SEO", "Copywriting", "Content Writing", "Google Analytics"],
        logo: "📝",
        website: "https://rumahmesin.com",
    },
];

/// Distinct technologies across all experiences
pub fn distinct_technologies(experiences: &[WorkExperience]) -> usize {
    experiences
        .iter()
        .flat_map(|exp| exp.technologies.iter())
        .collect::<BTreeSet<_>>()
        .len()
}

#[component]
pub fn Experience() -> impl IntoView {
    let (selected, set_selected) = signal::<Option<&'static str>>(None);

    let toggle = move |id: &'static str| {
        set_selected.update(|current| {
            *current = if *current == Some(id) { None } else { Some(id) };
        });
    };

    view! {
        <section class="py-20 px-4 sm:px-6 lg:px-8 relative overflow-hidden">
            <div class="max-w-5xl mx-auto relative z-10">
                <div class="text-center mb-16">
                    <h2 class="text-4xl md:text-5xl font-bold text-black mb-8">"Work Experience"</h2>
                </div>

                <div class="space-y-6">
                    {EXPERIENCES.iter().map(|exp| {
                        let id = exp.id;
                        let is_open = move || selected.get() == Some(id);
                        view! {
                            <div class="bg-white rounded-2xl shadow-lg border p-6">
                                <button class="w-full flex items-start gap-4 text-left" on:click=move |_| toggle(id)>
                                    <div class="text-4xl">{exp.logo}</div>
                                    <div class="flex-1">
                                        <h3 class="text-xl font-bold text-black">{exp.position}</h3>
                                        <a href=exp.website target="_blank" class="text-gray-700 font-medium hover:underline">{exp.company}</a>
                                        <div class="text-gray-500 text-sm">{exp.period} " · " {exp.summary}</div>
                                        <div class="text-gray-500 text-sm">{exp.location}</div>
                                        {exp.is_current.then(|| view! {
                                            <span class="inline-block mt-2 px-3 py-1 bg-green-100 text-green-700 text-xs font-semibold rounded-full">"Current"</span>
                                        })}
                                    </div>
                                    <span class="text-gray-500">{move || if is_open() { "▲" } else { "▼" }}</span>
                                </button>

                                <div class="mt-4 text-sm text-gray-600">{exp.technologies.join(" · ")}</div>

                                <Show when=is_open>
                                    <ul class="mt-4 space-y-2 animate-slideUp">
                                        {exp.responsibilities.iter().map(|item| view! {
                                            <li class="flex gap-2 text-gray-700"><span>"✓"</span>{*item}</li>
                                        }).collect_view()}
                                    </ul>
                                </Show>
                            </div>
                        }
                    }).collect_view()}
                </div>

                <div class="grid grid-cols-2 gap-6 mt-12 text-center">
                    <div>
                        <div class="text-3xl font-bold text-black">{EXPERIENCES.len()}</div>
                        <div class="text-gray-500 text-sm">"Companies"</div>
                    </div>
                    <div>
                        <div class="text-3xl font-bold text-black">{distinct_technologies(EXPERIENCES)}</div>
                        <div class="text-gray-500 text-sm">"Technologies"</div>
                    </div>
                </div>
            </div>
        </section>
    }
}
