//! Employee Form Modal
//!
//! Add/edit form. Validates locally before calling the backend and
//! reloads the roster on success.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::context::use_app_context;
use crate::models::{Employee, EmployeeDraft};
use crate::team::{self, POSITIONS};

/// What the open form is doing
#[derive(Debug, Clone, PartialEq)]
pub enum FormMode {
    Create,
    Edit(Employee),
}

#[component]
pub fn EmployeeFormModal(
    mode: ReadSignal<Option<FormMode>>,
    set_mode: WriteSignal<Option<FormMode>>,
) -> impl IntoView {
    let ctx = use_app_context();

    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (position, set_position) = signal(String::new());
    let (submitting, set_submitting) = signal(false);
    let (form_error, set_form_error) = signal::<Option<String>>(None);

    // Reset fields whenever the form opens for a different target
    Effect::new(move |_| {
        let draft = match mode.get() {
            Some(FormMode::Edit(employee)) => EmployeeDraft::from_employee(&employee),
            _ => EmployeeDraft::default(),
        };
        set_name.set(draft.name);
        set_email.set(draft.email);
        set_position.set(draft.position);
        set_form_error.set(None);
    });

    let is_edit = move || matches!(mode.get(), Some(FormMode::Edit(_)));
    let close = move || {
        if !submitting.get_untracked() {
            set_mode.set(None);
        }
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        let Some(current) = mode.get_untracked() else { return };

        let draft = EmployeeDraft {
            name: name.get_untracked(),
            email: email.get_untracked(),
            position: position.get_untracked(),
        };
        if let Err(e) = team::validate(&draft) {
            set_form_error.set(Some(e.to_string()));
            return;
        }

        set_submitting.set(true);
        set_form_error.set(None);
        let api_base = ctx.config().employees_api;
        spawn_local(async move {
            let (result, verb) = match &current {
                FormMode::Edit(employee) => (api::update_employee(&api_base, &employee.id, &draft).await.map(|_| ()), "updating"),
                FormMode::Create => (api::create_employee(&api_base, &draft).await.map(|_| ()), "creating"),
            };
            set_submitting.set(false);
            match result {
                Ok(()) => {
                    set_mode.set(None);
                    ctx.reload_team();
                }
                Err(_) => set_form_error.set(Some(format!("Error {} employee. Please try again.", verb))),
            }
        });
    };

    view! {
        <Show when=move || mode.with(Option::is_some)>
            <div class="fixed inset-0 bg-black/70 backdrop-blur-sm z-50 flex items-center justify-center p-4 animate-fadeIn">
                <div class="bg-white rounded-2xl p-8 w-full max-w-lg animate-slideUp">
                    <div class="flex items-center justify-between mb-8">
                        <h3 class="text-2xl font-bold text-black">
                            {move || if is_edit() { "✏️ Edit Employee" } else { "➕ Add New Employee" }}
                        </h3>
                        <button class="text-gray-400 hover:text-black text-2xl" disabled=submitting on:click=move |_| close()>
                            "✕"
                        </button>
                    </div>

                    <form on:submit=on_submit>
                        <div class="space-y-6">
                            <label class="block text-gray-700 text-sm font-semibold">
                                "👤 Full Name *"
                                <input
                                    type="text"
                                    class="mt-3 w-full border border-gray-300 rounded-lg px-4 py-3 focus:border-black focus:outline-none"
                                    placeholder="Enter employee's full name"
                                    prop:value=name
                                    on:input=move |ev| set_name.set(event_target_value(&ev))
                                    disabled=submitting
                                />
                            </label>
                            <label class="block text-gray-700 text-sm font-semibold">
                                "📧 Email Address *"
                                <input
                                    type="email"
                                    class="mt-3 w-full border border-gray-300 rounded-lg px-4 py-3 focus:border-black focus:outline-none"
                                    placeholder="employee@example.com"
                                    prop:value=email
                                    on:input=move |ev| set_email.set(event_target_value(&ev))
                                    disabled=submitting
                                />
                            </label>
                            <label class="block text-gray-700 text-sm font-semibold">
                                "💼 Job Position *"
                                <select
                                    class="mt-3 w-full border border-gray-300 rounded-lg px-4 py-3 focus:border-black focus:outline-none"
                                    prop:value=position
                                    on:change=move |ev| set_position.set(event_target_value(&ev))
                                    disabled=submitting
                                >
                                    <option value="">"Select Position"</option>
                                    {POSITIONS.iter().map(|pos| view! {
                                        <option value=*pos>{*pos}</option>
                                    }).collect_view()}
                                </select>
                            </label>
                        </div>

                        <Show when=move || form_error.with(Option::is_some)>
                            <p class="mt-6 text-red-600 text-sm">{move || form_error.get().unwrap_or_default()}</p>
                        </Show>

                        <div class="flex space-x-4 mt-8">
                            <button
                                type="button"
                                class="flex-1 bg-gray-100 hover:bg-gray-200 text-black px-6 py-3 rounded-lg font-medium disabled:opacity-50"
                                disabled=submitting
                                on:click=move |_| close()
                            >
                                "Cancel"
                            </button>
                            <button
                                type="submit"
                                class="flex-1 bg-black hover:bg-gray-800 text-white px-6 py-3 rounded-lg font-medium disabled:opacity-50 disabled:cursor-not-allowed"
                                disabled=submitting
                            >
                                {move || {
                                    if submitting.get() {
                                        "⏳ Processing..."
                                    } else if is_edit() {
                                        "Update Employee"
                                    } else {
                                        "Add Employee"
                                    }
                                }}
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        </Show>
    }
}
