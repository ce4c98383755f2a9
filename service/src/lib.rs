#![deny(
    clippy::expect_used,
    clippy::panic,
    clippy::print_stdout,
    clippy::todo,
    clippy::unimplemented,
    clippy::unwrap_used
)]

pub mod civic;
pub mod config;
pub mod lookup;
pub mod model;
pub mod registry;

pub use lookup::{LookupOutcome, RepresentativeService};
pub use model::{Attendee, AttendeeId, Event, EventId, Rsvp};
pub use registry::{DuplicateRsvp, EventManager, RsvpOutcome};
