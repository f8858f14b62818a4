use accessible_transit_website::{site_settings, App};
use leptos::prelude::*;
use transit_app::config::LogLevel;

fn log_level(level: LogLevel) -> log::Level {
    match level {
        LogLevel::Error => log::Level::Error,
        LogLevel::Warn => log::Level::Warn,
        LogLevel::Info => log::Level::Info,
        LogLevel::Debug => log::Level::Debug,
        LogLevel::Trace => log::Level::Trace,
    }
}

fn main() {
    console_error_panic_hook::set_once();
    let settings = site_settings();
    console_log::init_with_level(log_level(settings.logging.level))
        .expect("error initializing logger");
    mount_to_body(move || view! { <App settings=settings.clone() /> });
}
