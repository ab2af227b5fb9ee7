//! Hero Component
//!
//! Landing headline with the typed/deleted role text.

use std::cell::Cell;
use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::typewriter::Typewriter;

/// Roles cycled by the typewriter
pub const ROLES: &[&str] = &["Fullstack Developer", "Junior Developer"];

#[component]
pub fn Hero() -> impl IntoView {
    let (display_text, set_display_text) = signal(String::new());

    // Typing loop; stops once the component is cleaned up
    let running = Rc::new(Cell::new(true));
    let running_loop = running.clone();
    spawn_local(async move {
        let mut typewriter = Typewriter::new(ROLES.iter().copied());
        while running_loop.get() {
            let frame = typewriter.tick();
            if set_display_text.try_set(frame.text).is_some() {
                break;
            }
            TimeoutFuture::new(frame.delay_ms).await;
        }
    });
    let stop = StoredValue::new_local(running);
    on_cleanup(move || {
        stop.try_with_value(|running| running.set(false));
    });

    view! {
        <section class="pt-32 pb-20 px-4 sm:px-6 lg:px-8 relative overflow-hidden">
            <div class="max-w-7xl mx-auto relative z-10">
                <div class="bg-gradient-to-br from-yellow-200 via-green-100 to-cyan-200 rounded-3xl p-2 lg:p-1 shadow-2xl w-full">
                    <div class="text-center">
                        <h1 class="text-5xl md:text-7xl lg:text-8xl font-medium mb-8 animate-fadeIn mt-16">
                            <span class="text-black">"Hello, I'm Muhammad Fauzil Adim"</span>
                        </h1>

                        <h2 class="text-2xl md:text-4xl font-semibold text-black mb-8 min-h-[3rem] flex items-center justify-center">
                            <span>{move || display_text.get()}</span>
                            <span class="inline-block w-1 h-8 md:h-12 bg-black ml-1 animate-pulse"></span>
                        </h2>

                        <p class="text-black text-lg md:text-xl max-w-4xl mx-auto mb-12 leading-relaxed">
                            "Passionate about creating innovative digital solutions with modern technologies. \
                             Specialized in building scalable web applications, mobile apps, and user-centered designs that make a real impact."
                        </p>

                        <div class="flex flex-col sm:flex-row gap-4 justify-center mb-16">
                            <a href="#services" class="bg-black hover:bg-gray-800 text-white px-8 py-4 rounded-full text-lg font-semibold transition-all duration-300 hover:scale-105 shadow-lg inline-block">
                                "View Portfolio"
                            </a>
                            <a href="/CV.pdf" download="Muhammad_Fauzil_Adim_CV.pdf" class="text-black px-8 py-4 text-lg font-semibold transition-all duration-300 hover:text-gray-600 inline-block">
                                "Download CV →"
                            </a>
                        </div>

                        <div class="mt-20 animate-bounce pb-10">
                            <p class="text-gray-600 text-sm mb-2">"Discover More"</p>
                            <div class="text-gray-600">"↓"</div>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
