//! In-memory registry of events, attendees and RSVPs.
//!
//! The registry owns three append-only collections in insertion order.
//! Events and attendees enter only as a side effect of recording an RSVP,
//! and at most one RSVP exists per (event, attendee) pair.

use std::fmt;
use std::io::{self, Write};

use crate::model::{Attendee, AttendeeId, Event, EventId, Rsvp};

/// Result of [`EventManager::add_attendee`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RsvpOutcome {
    /// A new RSVP was appended.
    Recorded { event: EventId, attendee: AttendeeId },
    /// An RSVP already existed for the pair; nothing changed.
    Duplicate(DuplicateRsvp),
}

impl RsvpOutcome {
    #[must_use]
    pub const fn is_duplicate(&self) -> bool {
        matches!(self, Self::Duplicate(_))
    }

    /// Write the duplicate notice, if any, as one line.
    ///
    /// # Errors
    /// Returns an error if writing to `out` fails.
    pub fn write_notice(&self, out: &mut impl Write) -> io::Result<()> {
        match self {
            Self::Recorded { .. } => Ok(()),
            Self::Duplicate(duplicate) => writeln!(out, "{duplicate}"),
        }
    }
}

/// Notice for an RSVP that was already on file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateRsvp {
    pub attendee_name: String,
    pub event_name: String,
}

impl fmt::Display for DuplicateRsvp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "RSVP already exists for {} and {}.",
            self.attendee_name, self.event_name
        )
    }
}

/// Owns the event, attendee and RSVP collections.
#[derive(Debug, Default)]
pub struct EventManager {
    events: Vec<Event>,
    attendees: Vec<Attendee>,
    rsvps: Vec<Rsvp>,
}

impl EventManager {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an RSVP for `attendee` to `event`.
    ///
    /// If the pair already has an RSVP this is a reported no-op and the
    /// existing status is kept. Otherwise the event and attendee are added
    /// when not yet known and a new RSVP is appended.
    pub fn add_attendee(
        &mut self,
        event: Event,
        attendee: Attendee,
        status: impl Into<String>,
    ) -> RsvpOutcome {
        let event_id = self.find_event(&event);
        let attendee_id = self.find_attendee(&attendee);

        if let (Some(event_id), Some(attendee_id)) = (event_id, attendee_id) {
            if self.rsvp_for(event_id, attendee_id).is_some() {
                tracing::info!(
                    attendee = %attendee.name,
                    event = %event.name,
                    "RSVP already exists, skipping"
                );
                return RsvpOutcome::Duplicate(DuplicateRsvp {
                    attendee_name: attendee.name,
                    event_name: event.name,
                });
            }
        }

        let event_id = event_id.unwrap_or_else(|| {
            self.events.push(event);
            EventId(self.events.len() - 1)
        });
        let attendee_id = attendee_id.unwrap_or_else(|| {
            self.attendees.push(attendee);
            AttendeeId(self.attendees.len() - 1)
        });

        let status = status.into();
        tracing::debug!(
            event = event_id.index(),
            attendee = attendee_id.index(),
            %status,
            "RSVP recorded"
        );
        self.rsvps.push(Rsvp {
            event: event_id,
            attendee: attendee_id,
            status,
        });

        RsvpOutcome::Recorded {
            event: event_id,
            attendee: attendee_id,
        }
    }

    /// Write every event, one per line, in insertion order.
    ///
    /// # Errors
    /// Returns an error if writing to `out` fails.
    pub fn list_events(&self, out: &mut impl Write) -> io::Result<()> {
        writeln!(out, "Events:")?;
        if self.events.is_empty() {
            return writeln!(out, "No events available.");
        }
        for event in &self.events {
            writeln!(out, "{} - {} at {}", event.name, event.date, event.location)?;
        }
        Ok(())
    }

    /// Write every attendee, one per line, in insertion order.
    ///
    /// # Errors
    /// Returns an error if writing to `out` fails.
    pub fn list_attendees(&self, out: &mut impl Write) -> io::Result<()> {
        writeln!(out, "Attendees:")?;
        if self.attendees.is_empty() {
            return writeln!(out, "No attendees available.");
        }
        for attendee in &self.attendees {
            writeln!(
                out,
                "{} ({}), ZIP: {}",
                attendee.name,
                attendee.email,
                attendee.zip_code.as_deref().unwrap_or_default()
            )?;
        }
        Ok(())
    }

    #[must_use]
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    #[must_use]
    pub fn attendees(&self) -> &[Attendee] {
        &self.attendees
    }

    #[must_use]
    pub fn rsvps(&self) -> &[Rsvp] {
        &self.rsvps
    }

    #[must_use]
    pub fn event(&self, id: EventId) -> Option<&Event> {
        self.events.get(id.0)
    }

    #[must_use]
    pub fn attendee(&self, id: AttendeeId) -> Option<&Attendee> {
        self.attendees.get(id.0)
    }

    /// The RSVP on file for the pair, if any.
    #[must_use]
    pub fn rsvp_for(&self, event: EventId, attendee: AttendeeId) -> Option<&Rsvp> {
        self.rsvps
            .iter()
            .find(|rsvp| rsvp.event == event && rsvp.attendee == attendee)
    }

    fn find_event(&self, event: &Event) -> Option<EventId> {
        self.events.iter().position(|e| e == event).map(EventId)
    }

    fn find_attendee(&self, attendee: &Attendee) -> Option<AttendeeId> {
        self.attendees
            .iter()
            .position(|a| a.is_same_person(attendee))
            .map(AttendeeId)
    }
}
