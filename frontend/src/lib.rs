mod api;
mod components;
pub mod config;
mod feedback;
mod pages;
pub mod router;
mod state;
#[cfg(test)]
mod test_support;
pub mod utils;

/// Browser entry point: installs logging and mounts the app.
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        web_sys::console::warn_1(&"Logger already initialized".into());
    }
    log::info!("Starting Street Food Hub frontend");

    // Kick off runtime config load (non-blocking); the first write awaits it anyway.
    leptos::spawn_local(async move {
        config::init().await;
        log::info!("Runtime config initialized");
    });

    router::mount_app();
}
