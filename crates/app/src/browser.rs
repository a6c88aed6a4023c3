//! Thin wrappers over the browser APIs the portal touches. Off the web
//! target they are no-ops so the UI can be rendered in tests.

use shared_types::Session;

#[cfg(target_arch = "wasm32")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

/// Read `userRole` / `token` from `localStorage`.
#[cfg(target_arch = "wasm32")]
pub fn load_session() -> Session {
    use shared_types::{ROLE_KEY, TOKEN_KEY};

    let Some(storage) = local_storage() else {
        tracing::warn!("localStorage unavailable; starting anonymous");
        return Session::default();
    };
    let role = storage.get_item(ROLE_KEY).ok().flatten();
    let token = storage.get_item(TOKEN_KEY).ok().flatten();
    Session::from_storage(role.as_deref(), token.as_deref())
}

#[cfg(not(target_arch = "wasm32"))]
pub fn load_session() -> Session {
    Session::default()
}

/// Persist a session. Absent values remove their key.
#[cfg(target_arch = "wasm32")]
pub fn store_session(session: &Session) {
    use shared_types::{ROLE_KEY, TOKEN_KEY};

    let Some(storage) = local_storage() else {
        return;
    };
    let result = match session.role.as_tag() {
        Some(tag) => storage.set_item(ROLE_KEY, tag),
        None => storage.remove_item(ROLE_KEY),
    }
    .and_then(|_| match session.token() {
        Some(token) => storage.set_item(TOKEN_KEY, token),
        None => storage.remove_item(TOKEN_KEY),
    });
    if result.is_err() {
        tracing::warn!("Failed to write session to localStorage");
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn store_session(_session: &Session) {}

/// Full page reload, used after adding a doctor.
#[cfg(target_arch = "wasm32")]
pub fn reload_page() {
    if let Some(window) = web_sys::window() {
        if window.location().reload().is_err() {
            tracing::warn!("Page reload failed");
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn reload_page() {}
