use client::SessionStore;
use dioxus::prelude::*;
use shared_types::{Role, Session};

use crate::browser;

/// Session state shared across all routes, written through to
/// `localStorage` on every change.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BrowserSession {
    pub session: Signal<Session>,
}

impl BrowserSession {
    /// Hydrate from `localStorage`.
    pub fn hydrate() -> Self {
        Self {
            session: Signal::new(browser::load_session()),
        }
    }

    /// Reactive read; the calling component re-renders on change.
    pub fn current(&self) -> Session {
        self.session.read().clone()
    }
}

impl SessionStore for BrowserSession {
    /// Non-subscribing read, safe inside effects and event handlers.
    fn snapshot(&self) -> Session {
        self.session.peek().clone()
    }

    fn set_session(&self, role: Role, token: Option<String>) {
        let next = Session::new(role, token);
        browser::store_session(&next);
        let mut signal = self.session;
        signal.set(next);
    }

    fn clear_session(&self) {
        browser::store_session(&Session::default());
        let mut signal = self.session;
        signal.set(Session::default());
    }
}

/// Hook to access the session.
pub fn use_session() -> BrowserSession {
    use_context::<BrowserSession>()
}
