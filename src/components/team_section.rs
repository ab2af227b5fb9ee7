//! Team Section
//!
//! Employee table with search, stats and add/edit/delete modals.

use leptos::prelude::*;

use crate::models::Employee;
use crate::store::{use_team_store, TeamStateStoreFields};
use crate::team;
use super::delete_employee_modal::DeleteEmployeeModal;
use super::employee_form_modal::{EmployeeFormModal, FormMode};

#[component]
pub fn TeamSection() -> impl IntoView {
    let store = use_team_store();
    let (search_term, set_search_term) = signal(String::new());
    let (form_mode, set_form_mode) = signal::<Option<FormMode>>(None);
    let (deleting, set_deleting) = signal::<Option<Employee>>(None);

    let filtered = Memo::new(move |_| {
        let term = search_term.get();
        store.employees().with(|list| {
            team::search(list, &term).into_iter().cloned().collect::<Vec<_>>()
        })
    });
    let total = move || store.employees().with(|list| list.len());
    let roles = move || store.employees().with(|list| team::distinct_positions(list));

    view! {
        <section class="py-20 px-4 sm:px-6 lg:px-8">
            <div class="max-w-7xl mx-auto">
                <div class="bg-white rounded-2xl p-8 lg:p-12 shadow-2xl border animate-slideUp">
                    // Header
                    <div class="flex flex-col lg:flex-row justify-between items-start lg:items-center mb-8 gap-4">
                        <div>
                            <h2 class="text-3xl lg:text-4xl font-bold text-black mb-2">"🏢 Our Team Members"</h2>
                            <p class="text-gray-500">"Meet the talented professionals who drive our success"</p>
                        </div>
                        <div class="flex flex-col sm:flex-row gap-4 w-full lg:w-auto">
                            <input
                                type="text"
                                placeholder="Search employees..."
                                class="border border-gray-300 rounded-lg px-4 py-3 w-full sm:w-64 focus:border-black focus:outline-none"
                                prop:value=search_term
                                on:input=move |ev| set_search_term.set(event_target_value(&ev))
                            />
                            <button
                                class="bg-black hover:bg-gray-800 text-white px-6 py-3 rounded-lg font-medium whitespace-nowrap"
                                on:click=move |_| set_form_mode.set(Some(FormMode::Create))
                            >
                                "➕ Add Employee"
                            </button>
                        </div>
                    </div>

                    // Stats
                    <div class="grid grid-cols-1 sm:grid-cols-3 gap-4 mb-8">
                        <Stat value=Signal::derive(total) label="Total Employees" />
                        <Stat value=Signal::derive(roles) label="Different Roles" />
                        <Stat value=Signal::derive(move || filtered.with(|list| list.len())) label="Showing Results" />
                    </div>

                    <Show
                        when=move || !store.loading().get()
                        fallback=|| view! {
                            <div class="text-center py-12">
                                <div class="inline-block animate-spin rounded-full h-12 w-12 border-b-2 border-black mb-4"></div>
                                <p class="text-gray-500 text-lg">"Loading team members..."</p>
                            </div>
                        }
                    >
                        <div class="overflow-x-auto">
                            <table class="w-full">
                                <thead>
                                    <tr class="border-b border-gray-200 text-left text-gray-500 text-sm uppercase tracking-wider">
                                        <th class="py-6 px-6">"Employee"</th>
                                        <th class="py-6 px-6">"Position"</th>
                                        <th class="py-6 px-6">"Contact"</th>
                                        <th class="py-6 px-6 text-center">"Actions"</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    <Show when=move || filtered.with(|list| list.is_empty())>
                                        <tr>
                                            <td colspan="4" class="text-center py-12 text-gray-500 text-lg">
                                                {move || if search_term.with(|t| t.is_empty()) {
                                                    "No employees available"
                                                } else {
                                                    "No employees found matching your search"
                                                }}
                                            </td>
                                        </tr>
                                    </Show>
                                    <For
                                        each=move || filtered.get()
                                        key=|emp| emp.id.clone()
                                        children=move |emp| {
                                            let edit_target = emp.clone();
                                            let delete_target = emp.clone();
                                            view! {
                                                <tr class="border-b border-gray-100 group">
                                                    <td class="py-6 px-6">
                                                        <div class="flex items-center">
                                                            <div class="w-12 h-12 bg-black rounded-full flex items-center justify-center text-white font-bold text-lg mr-4">
                                                                {team::initial(&emp.name)}
                                                            </div>
                                                            <div>
                                                                <div class="text-black font-semibold text-lg">{emp.name.clone()}</div>
                                                                <div class="text-gray-400 text-sm">{format!("ID: {}...", team::short_id(&emp.id))}</div>
                                                            </div>
                                                        </div>
                                                    </td>
                                                    <td class="py-6 px-6">
                                                        <span class="px-3 py-1 rounded-full text-sm font-medium border">{format!("💼 {}", emp.position)}</span>
                                                    </td>
                                                    <td class="py-6 px-6 text-gray-600">{emp.email.clone()}</td>
                                                    <td class="py-6 px-6">
                                                        <div class="flex justify-center space-x-2">
                                                            <button
                                                                class="bg-yellow-500 hover:bg-yellow-600 text-white p-2 rounded-lg text-sm"
                                                                title="Edit Employee"
                                                                on:click=move |_| set_form_mode.set(Some(FormMode::Edit(edit_target.clone())))
                                                            >
                                                                "✏️"
                                                            </button>
                                                            <button
                                                                class="bg-red-600 hover:bg-red-700 text-white p-2 rounded-lg text-sm"
                                                                title="Delete Employee"
                                                                on:click=move |_| set_deleting.set(Some(delete_target.clone()))
                                                            >
                                                                "🗑️"
                                                            </button>
                                                        </div>
                                                    </td>
                                                </tr>
                                            }
                                        }
                                    />
                                </tbody>
                            </table>
                        </div>
                    </Show>
                </div>
            </div>

            <EmployeeFormModal mode=form_mode set_mode=set_form_mode />
            <DeleteEmployeeModal target=deleting set_target=set_deleting />
        </section>
    }
}

#[component]
fn Stat(value: Signal<usize>, label: &'static str) -> impl IntoView {
    view! {
        <div class="bg-gray-50 p-4 rounded-xl border">
            <div class="text-2xl font-bold text-black">{move || value.get()}</div>
            <div class="text-sm text-gray-500">{label}</div>
        </div>
    }
}
