use web_sys::{Storage, Window};

pub const CURRENT_USER_KEY: &str = "current_user";
pub const ID_TOKEN_KEY: &str = "id_token";

pub fn window() -> Result<Window, String> {
    web_sys::window().ok_or_else(|| "No window object".to_string())
}

pub fn local_storage() -> Result<Storage, String> {
    window()?
        .local_storage()
        .map_err(|_| "No localStorage".to_string())?
        .ok_or_else(|| "No localStorage".to_string())
}

/// Reads a key from local storage; host builds have no browser storage.
#[cfg(target_arch = "wasm32")]
pub fn read_item(key: &str) -> Option<String> {
    local_storage().ok()?.get_item(key).ok().flatten()
}

#[cfg(not(target_arch = "wasm32"))]
pub fn read_item(_key: &str) -> Option<String> {
    None
}
