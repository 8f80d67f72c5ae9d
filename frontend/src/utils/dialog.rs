/// Blocking browser alert. Host builds only log the message.
#[cfg(target_arch = "wasm32")]
pub fn alert(message: &str) {
    match super::storage::window() {
        Ok(window) => {
            if window.alert_with_message(message).is_err() {
                log::warn!("alert could not be shown: {}", message);
            }
        }
        Err(err) => log::warn!("alert skipped ({}): {}", err, message),
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn alert(message: &str) {
    log::info!("alert: {}", message);
}
