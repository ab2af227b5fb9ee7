//! Services Section
//!
//! Skill cards, one per discipline.

use leptos::prelude::*;

struct Service {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
    tint: &'static str,
    tools: &'static [&'static str],
}

const SERVICES: &[Service] = &[
    Service {
        icon: "🔧",
        title: "Backend Development",
        description: "Backend and API development with a strong focus on performance, security, and scalable architecture.",
        tint: "from-blue-200 via-blue-100 to-cyan-100",
        tools: &["Rust", "Golang", "Java", "Node.js"],
    },
    Service {
        icon: "⚛️",
        title: "Frontend Development",
        description: "Responsive, accessible interfaces built with modern component frameworks.",
        tint: "from-purple-200 via-purple-100 to-pink-100",
        tools: &["React", "SolidJS", "Next.js", "Angular"],
    },
    Service {
        icon: "📱",
        title: "Mobile Development",
        description: "Cross-platform mobile apps sharing one codebase with the web.",
        tint: "from-emerald-200 via-green-100 to-teal-100",
        tools: &["React Native", "Capacitor"],
    },
    Service {
        icon: "🗄️",
        title: "Database Design",
        description: "Relational and document data modelling, query tuning and analytics stores.",
        tint: "from-yellow-200 via-amber-100 to-orange-100",
        tools: &["PostgreSQL", "MongoDB", "ClickHouse", "SurrealDB"],
    },
    Service {
        icon: "🎨",
        title: "UI/UX Design",
        description: "User-centered design from wireframes to polished, consistent design systems.",
        tint: "from-pink-200 via-rose-100 to-red-100",
        tools: &["Figma", "Tailwind"],
    },
];

#[component]
pub fn Services() -> impl IntoView {
    view! {
        <section class="py-20 px-4 sm:px-6 lg:px-8 relative overflow-hidden">
            <div class="max-w-7xl mx-auto relative z-10">
                <div class="text-center mb-16 animate-fadeIn">
                    <h2 class="text-4xl md:text-5xl font-bold text-black mb-8">"My Skills"</h2>
                    <p class="text-black/70 text-lg max-w-3xl mx-auto">
                        "A wide range of technology services to help your business stay ahead in the competitive digital landscape."
                    </p>
                </div>

                <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-8">
                    {SERVICES.iter().map(|service| view! {
                        <div class="bg-white rounded-2xl p-8 shadow-lg hover:shadow-2xl hover:scale-105 transition-all duration-500 border">
                            <div class=format!("mb-6 bg-gradient-to-br {} rounded-2xl p-6 flex justify-center items-center text-5xl", service.tint)>
                                {service.icon}
                            </div>
                            <h3 class="text-xl font-bold text-black mb-4 text-center">{service.title}</h3>
                            <p class="text-gray-600 mb-6 text-sm leading-relaxed text-center">{service.description}</p>
                            <div class="flex flex-wrap gap-2 justify-center">
                                {service.tools.iter().map(|tool| view! {
                                    <div class="bg-black hover:bg-gray-800 text-white px-4 py-2 rounded-full font-medium text-sm">{*tool}</div>
                                }).collect_view()}
                            </div>
                        </div>
                    }).collect_view()}
                </div>
            </div>
        </section>
    }
}
