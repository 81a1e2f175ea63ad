use leptos::spawn_local;

pub mod api;
pub mod components;
pub mod config;
pub mod pages;
pub mod router;
pub mod state;
#[cfg(test)]
mod test_support;
pub mod utils;

pub fn run() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        web_sys::console::warn_1(&"Logger already initialized".into());
    }
    log::info!("Starting Clinic Admin frontend");

    // Resolve the backend URL early; requests await the same cached value.
    spawn_local(async move {
        config::init().await;
    });

    router::mount_app();
}
