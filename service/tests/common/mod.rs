//! Common test utilities for integration tests.
//!
//! - [`http_mock::MockHttpServer`] - Stub the civic-info endpoint
//! - [`fixtures`] - Sample events and attendees

#![allow(dead_code)]

pub mod http_mock;

pub mod fixtures {
    use chrono::NaiveDate;
    use civic_rsvp::{Attendee, Event};

    pub fn workshop() -> Event {
        Event::new(
            "Political Engagement Workshop",
            NaiveDate::from_ymd_opt(2024, 12, 20).unwrap_or_default(),
            "City Hall",
        )
    }

    pub fn efe() -> Attendee {
        Attendee::new("Efe", "efe@example.com", "90210")
    }

    pub fn ada() -> Attendee {
        Attendee::new("Ada", "ada@example.com", "10001")
    }
}
