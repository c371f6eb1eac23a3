//! Inline, auto-dismissing messages.
//!
//! Each [`MessageArea`] holds at most one [`Flash`]. Showing a new message
//! replaces the old one and gets a fresh id; a dismiss timer only removes
//! the message it was started for.

use std::collections::HashMap;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageArea {
    Auth,
    Main,
    Profile,
    Relationships,
    Events,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Success,
    Error,
}

impl MessageKind {
    pub fn class(self) -> &'static str {
        match self {
            MessageKind::Success => "message success",
            MessageKind::Error => "message error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flash {
    pub id: u64,
    pub kind: MessageKind,
    pub text: String,
    pub ttl: Duration,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Messages {
    slots: HashMap<MessageArea, Flash>,
    next_id: u64,
}

impl Messages {
    pub fn show(
        &mut self,
        area: MessageArea,
        kind: MessageKind,
        text: impl Into<String>,
        ttl: Duration,
    ) -> u64 {
        self.next_id += 1;
        let flash = Flash {
            id: self.next_id,
            kind,
            text: text.into(),
            ttl,
        };
        self.slots.insert(area, flash);
        self.next_id
    }

    pub fn get(&self, area: MessageArea) -> Option<&Flash> {
        self.slots.get(&area)
    }

    /// Remove the message `id` if it is still the one shown.
    pub fn dismiss(&mut self, area: MessageArea, id: u64) -> bool {
        if self.slots.get(&area).is_some_and(|f| f.id == id) {
            self.slots.remove(&area);
            true
        } else {
            false
        }
    }

    pub fn clear(&mut self, area: MessageArea) {
        self.slots.remove(&area);
    }
}
