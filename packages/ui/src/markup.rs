//! # Markup helpers
//!
//! Table cells are built here as pre-escaped HTML fragments and inserted
//! with `dangerous_inner_html`, so every server-supplied string passes
//! through [`escape_html`] first. Strings spliced into generated JavaScript
//! (the delete confirmation) go through [`escape_js`] instead.

use api::{Event, EventId, Person, PersonId, Relationship, RelationshipId};
use chrono::NaiveDate;

/// Escape `& < > " '` for insertion into HTML text or attributes.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

/// Escape a string for a single-quoted JavaScript literal.
pub fn escape_js(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '<' => out.push_str("\\x3C"),
            c => out.push(c),
        }
    }
    out
}

/// Script that asks the user to confirm and returns the answer.
pub fn confirm_script(message: &str) -> String {
    format!("return window.confirm('{}');", escape_js(message))
}

/// "2 May 1901" for ISO dates, the raw value for anything else, "N/A" when absent.
pub fn format_date(value: Option<&str>) -> String {
    let Some(raw) = value.map(str::trim).filter(|v| !v.is_empty()) else {
        return "N/A".to_string();
    };
    let day = raw.split('T').next().unwrap_or(raw);
    match NaiveDate::parse_from_str(day, "%Y-%m-%d") {
        Ok(date) => date.format("%-d %b %Y").to_string(),
        Err(_) => raw.to_string(),
    }
}

fn text_or_na(value: &str) -> String {
    if value.trim().is_empty() {
        "N/A".to_string()
    } else {
        escape_html(value)
    }
}

/// A row-level command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowAction {
    ViewPerson(PersonId),
    EditPerson(PersonId),
    DeletePerson { id: PersonId, name: String },
    EditRelationship(RelationshipId),
    DeleteRelationship(RelationshipId),
    EditEvent(EventId),
    DeleteEvent { id: EventId, title: String },
}

impl RowAction {
    pub fn label(&self) -> &'static str {
        match self {
            RowAction::ViewPerson(_) => "View",
            RowAction::EditPerson(_) | RowAction::EditRelationship(_) | RowAction::EditEvent(_) => {
                "Edit"
            }
            RowAction::DeletePerson { .. }
            | RowAction::DeleteRelationship(_)
            | RowAction::DeleteEvent { .. } => "Delete",
        }
    }

    pub fn class(&self) -> &'static str {
        match self {
            RowAction::ViewPerson(_) => "btn btn-small",
            RowAction::DeletePerson { .. }
            | RowAction::DeleteRelationship(_)
            | RowAction::DeleteEvent { .. } => "btn btn-small btn-danger",
            _ => "btn btn-small btn-secondary",
        }
    }

    /// Confirmation prompt for destructive actions.
    pub fn confirmation(&self) -> Option<String> {
        match self {
            RowAction::DeletePerson { name, .. } => Some(format!(
                "Are you sure you want to delete {name}? This will also delete their relationships and events."
            )),
            RowAction::DeleteRelationship(_) => {
                Some("Are you sure you want to delete this relationship?".to_string())
            }
            RowAction::DeleteEvent { title, .. } => {
                Some(format!("Are you sure you want to delete the event \"{title}\"?"))
            }
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub key: i64,
    /// Escaped HTML, one entry per header.
    pub cells: Vec<String>,
    pub actions: Vec<RowAction>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    pub headers: Vec<&'static str>,
    pub rows: Vec<Row>,
    /// Shown instead of the table when there are no rows.
    pub empty_hint: &'static str,
}

pub fn people_table(people: &[Person]) -> Table {
    let rows = people
        .iter()
        .map(|p| Row {
            key: p.id,
            cells: vec![
                escape_html(&p.full_name()),
                text_or_na(&p.relation),
                format_date(p.birth_date.as_deref()),
                text_or_na(&p.birth_place),
                text_or_na(&p.gender),
                escape_html(p.status().label()),
            ],
            actions: vec![
                RowAction::ViewPerson(p.id),
                RowAction::EditPerson(p.id),
                RowAction::DeletePerson {
                    id: p.id,
                    name: p.full_name(),
                },
            ],
        })
        .collect();
    Table {
        headers: vec![
            "Name",
            "Relation",
            "Birth Date",
            "Birth Place",
            "Gender",
            "Status",
        ],
        rows,
        empty_hint: "No people found. Click \"Add Person\" to create one.",
    }
}

pub fn relationships_table(relationships: &[Relationship]) -> Table {
    let rows = relationships
        .iter()
        .map(|r| Row {
            key: r.id,
            cells: vec![
                escape_html(&r.person1_name),
                r.kind
                    .map(|k| escape_html(k.label()))
                    .unwrap_or_else(|| "N/A".to_string()),
                escape_html(&r.person2_name),
                text_or_na(&r.details),
            ],
            actions: vec![
                RowAction::EditRelationship(r.id),
                RowAction::DeleteRelationship(r.id),
            ],
        })
        .collect();
    Table {
        headers: vec!["Person", "Relation", "Of", "Details"],
        rows,
        empty_hint: "No relationships found. Click \"Add Relationship\" to create one.",
    }
}

pub fn events_table(events: &[Event]) -> Table {
    let rows = events
        .iter()
        .map(|e| Row {
            key: e.id,
            cells: vec![
                escape_html(&e.title),
                text_or_na(&e.person_name),
                format_date(e.event_date.as_deref()),
                text_or_na(&e.place),
                text_or_na(&e.description),
            ],
            actions: vec![
                RowAction::EditEvent(e.id),
                RowAction::DeleteEvent {
                    id: e.id,
                    title: e.title.clone(),
                },
            ],
        })
        .collect();
    Table {
        headers: vec!["Title", "Person", "Date", "Place", "Description"],
        rows,
        empty_hint: "No events found. Click \"Add Event\" to create one.",
    }
}
