//! Kanban Board Frontend Entry Point

mod app;
mod components;
mod context;
mod storage;
mod store;

use app::App;
use kanban_core::KanbanConfig;
use leptos::prelude::*;
use rolling_logger::LoggerConfig;

fn main() {
    // Report the panic, then the log lines leading up to it
    std::panic::set_hook(Box::new(|info| {
        console_error_panic_hook::hook(info);
        let lines = rolling_logger::recent_lines();
        if !lines.is_empty() {
            let report = format!("last {} log line(s):\n{}", lines.len(), lines.join("\n"));
            web_sys::console::error_1(&report.into());
        }
    }));

    let config = KanbanConfig::default();
    let logger = LoggerConfig {
        capacity: config.log_capacity,
        level: config.level_filter(),
    };
    if let Err(e) = rolling_logger::init_logger(logger) {
        web_sys::console::warn_1(&format!("logger: {}", e).into());
    }

    mount_to_body(move || view! { <App config=config.clone() /> });
}
