use std::cell::RefCell;
use std::rc::Rc;

use shared_types::{Role, Session};

/// Read/write access to the persisted session (role tag + auth token).
///
/// No validation happens here; the header composer decides whether a stored
/// session is still usable.
pub trait SessionStore {
    fn snapshot(&self) -> Session;

    fn set_session(&self, role: Role, token: Option<String>);

    fn clear_session(&self);

    fn role(&self) -> Role {
        self.snapshot().role
    }

    fn token(&self) -> Option<String> {
        self.snapshot().token
    }
}

/// In-memory store. Clones share the same session.
#[derive(Debug, Clone, Default)]
pub struct MemorySessionStore {
    inner: Rc<RefCell<Session>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_session(role: Role, token: Option<&str>) -> Self {
        let store = Self::new();
        store.set_session(role, token.map(str::to_string));
        store
    }
}

impl SessionStore for MemorySessionStore {
    fn snapshot(&self) -> Session {
        self.inner.borrow().clone()
    }

    fn set_session(&self, role: Role, token: Option<String>) {
        *self.inner.borrow_mut() = Session::new(role, token);
    }

    fn clear_session(&self) {
        *self.inner.borrow_mut() = Session::default();
    }
}
