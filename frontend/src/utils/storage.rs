use web_sys::{Storage, Window};

/// localStorage key holding the admin session token.
pub const TOKEN_KEY: &str = "aToken";

pub fn window() -> Result<Window, String> {
    web_sys::window().ok_or_else(|| "No window object".to_string())
}

pub fn local_storage() -> Result<Storage, String> {
    if cfg!(not(target_arch = "wasm32")) {
        return Err("No localStorage".to_string());
    }
    window()?
        .local_storage()
        .map_err(|_| "No localStorage".to_string())?
        .ok_or_else(|| "No localStorage".to_string())
}

pub fn load_token() -> Option<String> {
    local_storage()
        .ok()
        .and_then(|storage| storage.get_item(TOKEN_KEY).ok().flatten())
        .filter(|token| !token.is_empty())
}

pub fn save_token(token: &str) {
    if let Err(err) = local_storage().and_then(|storage| {
        storage
            .set_item(TOKEN_KEY, token)
            .map_err(|_| "Failed to persist token".to_string())
    }) {
        log::warn!("{}", err);
    }
}

pub fn clear_token() {
    if let Ok(storage) = local_storage() {
        let _ = storage.remove_item(TOKEN_KEY);
    }
}
