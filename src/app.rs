//! Folio Frontend App
//!
//! Single page of stacked sections, linked by anchor navigation.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::api;
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::store::{store_set_employees, TeamState, TeamStateStoreFields};
use crate::components::{About, Experience, Footer, Header, Hero, Projects, ScrollToTop, Services, TeamSection};

#[component]
pub fn App() -> impl IntoView {
    let config = AppConfig::load();
    let employees_api = config.employees_api.clone();

    // State
    let (team_reload, set_team_reload) = signal(0u32);
    let store = Store::new(TeamState::new());

    // Provide context to all children
    provide_context(AppContext::new(config, (team_reload, set_team_reload)));
    provide_context(store);

    // Load employees on mount and whenever the roster changes
    Effect::new(move |_| {
        let trigger = team_reload.get();
        let api = employees_api.clone();
        log::debug!("[APP] Loading employees, trigger={}", trigger);
        store.loading().set(true);
        spawn_local(async move {
            let loaded = api::list_employees(&api).await;
            log::debug!("[APP] Loaded {} employees", loaded.len());
            store_set_employees(&store, loaded);
        });
    });

    view! {
        <div class="min-h-screen bg-white">
            <Header />
            <div id="home">
                <Hero />
            </div>
            <div id="about">
                <About />
            </div>
            <div id="services">
                <Services />
            </div>
            <div id="experience">
                <Experience />
            </div>
            <div id="projects">
                <Projects />
            </div>
            <div id="team">
                <TeamSection />
            </div>

            <Footer />
            <ScrollToTop />
        </div>
    }
}
