//! Shopy Mom Frontend Entry Point

mod api;
mod app;
mod clipboard;
mod components;
mod config;
mod context;
mod format;
mod models;
mod refs;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
