//! Tab Marks Frontend Entry Point

mod app;
mod commands;
mod components;
mod config;
mod context;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    rolling_logger::init_logger("tab-marks", rolling_logger::DEFAULT_CAPACITY);
    rolling_logger::info("Starting Tab Marks");
    mount_to_body(App);
}
