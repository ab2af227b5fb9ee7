#![allow(warnings)]
//! Folio Frontend Entry Point

mod config;
mod models;
mod api;
mod gallery;
mod team;
mod typewriter;
mod context;
mod store;
mod components;
mod app;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    config::init_logging();
    mount_to_body(App);
}
