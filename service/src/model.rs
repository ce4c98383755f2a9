//! Record types held by the registry.
//!
//! Records are plain data. Identity is by value: an event is identified by
//! its name, date and location; an attendee by their email address.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// An event attendees can RSVP to.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Event {
    pub name: String,
    /// Calendar date, rendered as `YYYY-MM-DD`.
    pub date: NaiveDate,
    pub location: String,
}

impl Event {
    pub fn new(name: impl Into<String>, date: NaiveDate, location: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            date,
            location: location.into(),
        }
    }
}

/// A person who RSVPs to events.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Attendee {
    pub name: String,
    pub email: String,
    /// ZIP code used as the address for representative lookups.
    #[serde(default)]
    pub zip_code: Option<String>,
}

impl Attendee {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        zip_code: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            zip_code: Some(zip_code.into()),
        }
    }

    /// An attendee with no ZIP code on file.
    pub fn without_zip(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            zip_code: None,
        }
    }

    /// The ZIP code as given, or `None` when missing or empty.
    #[must_use]
    pub fn zip(&self) -> Option<&str> {
        self.zip_code.as_deref().filter(|zip| !zip.is_empty())
    }

    /// Whether `other` is the same person, compared by email ignoring
    /// surrounding whitespace and ASCII case.
    #[must_use]
    pub fn is_same_person(&self, other: &Self) -> bool {
        self.email.trim().eq_ignore_ascii_case(other.email.trim())
    }
}

/// Handle to an event stored in an [`EventManager`](crate::registry::EventManager).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EventId(pub(crate) usize);

impl EventId {
    /// Position of the event in insertion order.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// Handle to an attendee stored in an [`EventManager`](crate::registry::EventManager).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AttendeeId(pub(crate) usize);

impl AttendeeId {
    /// Position of the attendee in insertion order.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// Links one attendee to one event.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Rsvp {
    pub event: EventId,
    pub attendee: AttendeeId,
    /// Free-form status, e.g. "confirmed".
    pub status: String,
}
