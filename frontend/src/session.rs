//! Admin session presence.
//!
//! The stored token is the only persisted client state the app reads.
//! It is resolved once at mount and injected through a
//! `ContextProvider`, so privileged screens consume a capability value
//! instead of reading ambient storage. Issuing and expiring the token
//! is the backend's business.

use web_sys::window;

const TOKEN_KEY: &str = "admin_token";

#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub admin: bool,
}

impl Session {
    pub fn load() -> Self {
        let token = window()
            .and_then(|w| w.local_storage().ok().flatten())
            .and_then(|storage| storage.get_item(TOKEN_KEY).ok().flatten());
        Session {
            admin: token.is_some_and(|t| !t.is_empty()),
        }
    }
}

/// Stores the token handed back by a successful login.
pub fn store_token(token: &str) {
    if let Some(storage) = window().and_then(|w| w.local_storage().ok().flatten()) {
        storage.set_item(TOKEN_KEY, token).ok();
    }
}

/// Full-page navigation; the route table resolves again on mount.
pub fn redirect_to(path: &str) {
    if let Some(window) = window() {
        window.location().set_href(path).ok();
    }
}
