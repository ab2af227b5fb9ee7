//! Delete Employee Modal
//!
//! Confirmation dialog; the user must type the confirmation word first.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::context::use_app_context;
use crate::models::Employee;
use crate::team::{self, DELETE_CONFIRMATION};

#[component]
pub fn DeleteEmployeeModal(
    target: ReadSignal<Option<Employee>>,
    set_target: WriteSignal<Option<Employee>>,
) -> impl IntoView {
    let ctx = use_app_context();
    let (confirm_text, set_confirm_text) = signal(String::new());
    let (deleting, set_deleting) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);

    // Fresh confirmation for every target
    Effect::new(move |_| {
        let _ = target.get();
        set_confirm_text.set(String::new());
        set_error.set(None);
    });

    let close = move || {
        if !deleting.get_untracked() {
            set_target.set(None);
        }
    };

    let confirm = move || {
        if deleting.get_untracked() {
            return;
        }
        let Some(employee) = target.get_untracked() else { return };
        if confirm_text.get_untracked() != DELETE_CONFIRMATION {
            set_error.set(Some(format!("Please type \"{}\" to confirm", DELETE_CONFIRMATION)));
            return;
        }

        set_deleting.set(true);
        let api_base = ctx.config().employees_api;
        spawn_local(async move {
            let result = api::delete_employee(&api_base, &employee.id).await;
            set_deleting.set(false);
            match result {
                Ok(()) => {
                    set_target.set(None);
                    ctx.reload_team();
                }
                Err(_) => set_error.set(Some("Error deleting employee. Please try again.".to_string())),
            }
        });
    };

    view! {
        <Show when=move || target.with(Option::is_some)>
            <div class="fixed inset-0 bg-black/70 backdrop-blur-sm z-50 flex items-center justify-center p-4 animate-fadeIn">
                <div class="bg-white rounded-2xl p-8 w-full max-w-lg animate-slideUp border-l-4 border-red-500">
                    <div class="flex items-center justify-between mb-8">
                        <h3 class="text-2xl font-bold text-black">"⚠️ Delete Employee"</h3>
                        <button class="text-gray-400 hover:text-black text-2xl" disabled=deleting on:click=move |_| close()>
                            "✕"
                        </button>
                    </div>

                    {move || target.get().map(|emp| view! {
                        <div class="rounded-xl p-6 mb-8 bg-red-50 border border-red-200">
                            <div class="flex items-center mb-4">
                                <div class="w-16 h-16 bg-red-500 rounded-full flex items-center justify-center text-white font-bold text-xl mr-4">
                                    {team::initial(&emp.name)}
                                </div>
                                <div>
                                    <h4 class="text-black font-semibold text-lg">{emp.name.clone()}</h4>
                                    <p class="text-gray-600 text-sm">{emp.position.clone()}</p>
                                    <p class="text-gray-500 text-sm">{emp.email.clone()}</p>
                                </div>
                            </div>
                            <div class="text-sm text-gray-600">
                                <strong>"Employee ID: "</strong>{emp.id.clone()}
                            </div>
                        </div>
                    })}

                    <p class="text-red-600 font-semibold text-lg mb-3">"🚨 This action cannot be undone!"</p>

                    <label class="block text-gray-700 text-sm font-semibold mb-8">
                        {format!("Type {} to confirm:", DELETE_CONFIRMATION)}
                        <input
                            type="text"
                            class="mt-3 w-full border border-red-300 rounded-lg px-4 py-3 focus:border-red-500 focus:outline-none"
                            placeholder="Type DELETE here..."
                            prop:value=confirm_text
                            on:input=move |ev| set_confirm_text.set(event_target_value(&ev))
                            disabled=deleting
                        />
                    </label>

                    <Show when=move || error.with(Option::is_some)>
                        <p class="mb-6 text-red-600 text-sm">{move || error.get().unwrap_or_default()}</p>
                    </Show>

                    <div class="flex space-x-4">
                        <button
                            type="button"
                            class="flex-1 bg-gray-100 hover:bg-gray-200 text-black px-6 py-3 rounded-lg font-medium disabled:opacity-50"
                            disabled=deleting
                            on:click=move |_| close()
                        >
                            "Cancel"
                        </button>
                        <button
                            class="flex-1 bg-red-600 hover:bg-red-700 text-white px-6 py-3 rounded-lg font-medium disabled:opacity-50 disabled:cursor-not-allowed"
                            disabled=deleting
                            on:click=move |_| confirm()
                        >
                            {move || if deleting.get() { "Deleting..." } else { "🗑️ Delete Employee" }}
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
