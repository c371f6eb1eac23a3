//! Loaded collections and selector options.

use api::{Person, PersonId};

/// Progress of a list load.
#[derive(Debug, Clone, PartialEq)]
pub enum ListState<T> {
    Idle,
    Loading,
    Loaded(Vec<T>),
    /// Inline error rendered in place of the table.
    Failed(String),
}

impl<T> Default for ListState<T> {
    fn default() -> Self {
        ListState::Idle
    }
}

impl<T> ListState<T> {
    pub fn items(&self) -> &[T] {
        match self {
            ListState::Loaded(items) => items,
            _ => &[],
        }
    }
}

/// One entry of a person `<select>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonOption {
    pub id: PersonId,
    pub label: String,
}

impl PersonOption {
    pub fn from_people(people: &[Person]) -> Vec<PersonOption> {
        people
            .iter()
            .map(|p| PersonOption {
                id: p.id,
                label: p.full_name(),
            })
            .collect()
    }
}
