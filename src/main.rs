#![allow(warnings)]
//! CHUMS UI Frontend Entry Point

mod app;
mod components;
mod config;
mod context;
mod gateway;
mod markdown;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        web_sys::console::warn_1(&"[APP] logger already initialized".into());
    }
    mount_to_body(App);
}
