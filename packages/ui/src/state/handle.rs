//! Access to the shared [`AppState`].

use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;

use super::AppState;

/// Read and update the state without holding a borrow across an await.
pub trait StateHandle {
    fn read_state<R>(&self, f: impl FnOnce(&AppState) -> R) -> R;
    fn update_state<R>(&self, f: impl FnOnce(&mut AppState) -> R) -> R;
}

impl StateHandle for Signal<AppState> {
    fn read_state<R>(&self, f: impl FnOnce(&AppState) -> R) -> R {
        let state = self.read();
        f(&state)
    }

    fn update_state<R>(&self, f: impl FnOnce(&mut AppState) -> R) -> R {
        let mut signal = *self;
        let mut state = signal.write();
        f(&mut state)
    }
}

impl StateHandle for Rc<RefCell<AppState>> {
    fn read_state<R>(&self, f: impl FnOnce(&AppState) -> R) -> R {
        f(&self.borrow())
    }

    fn update_state<R>(&self, f: impl FnOnce(&mut AppState) -> R) -> R {
        f(&mut self.borrow_mut())
    }
}
