//! Representative lookup for registered attendees.
//!
//! Every failure degrades to a single reported line. The only error a
//! caller sees is a failure to write to the output sink.

use std::io::{self, Write};
use std::sync::Arc;

use crate::civic::{CivicApiError, CivicInfoClient, Official};
use crate::model::Attendee;
use crate::registry::EventManager;

/// What happened when looking up one attendee's representatives.
#[derive(Debug)]
pub enum LookupOutcome {
    /// No ZIP code on file; no request was made.
    MissingZip,
    /// The endpoint answered with these officials.
    Found(Vec<Official>),
    /// The request failed or the response could not be used.
    Failed(CivicApiError),
}

impl LookupOutcome {
    #[must_use]
    pub const fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }
}

/// Looks up and reports civic representatives through a [`CivicInfoClient`].
pub struct RepresentativeService {
    client: Arc<dyn CivicInfoClient>,
}

impl RepresentativeService {
    pub fn new(client: Arc<dyn CivicInfoClient>) -> Self {
        Self { client }
    }

    /// Look up the officials for `attendee` and write a report to `out`.
    ///
    /// # Errors
    /// Returns an error only if writing to `out` fails.
    pub async fn find_representatives(
        &self,
        attendee: &Attendee,
        out: &mut impl Write,
    ) -> io::Result<LookupOutcome> {
        let Some(zip) = attendee.zip() else {
            tracing::info!(attendee = %attendee.name, "no ZIP code, skipping lookup");
            writeln!(out, "No ZIP code provided for {}.", attendee.name)?;
            return Ok(LookupOutcome::MissingZip);
        };

        match self.client.representatives(zip).await {
            Ok(officials) => {
                writeln!(
                    out,
                    "Government Representatives for {} (ZIP: {zip}):",
                    attendee.name
                )?;
                for official in &officials {
                    write_official(out, official)?;
                }
                Ok(LookupOutcome::Found(officials))
            }
            Err(e) => {
                tracing::warn!(attendee = %attendee.name, zip, error = %e, "representative lookup failed");
                writeln!(
                    out,
                    "Failed to retrieve representatives for {}.",
                    attendee.name
                )?;
                Ok(LookupOutcome::Failed(e))
            }
        }
    }

    /// Run [`Self::find_representatives`] for every attendee, one at a time,
    /// in insertion order.
    ///
    /// # Errors
    /// Returns an error only if writing to `out` fails.
    pub async fn list_representatives_for_all(
        &self,
        manager: &EventManager,
        out: &mut impl Write,
    ) -> io::Result<Vec<LookupOutcome>> {
        let mut outcomes = Vec::with_capacity(manager.attendees().len());
        for attendee in manager.attendees() {
            outcomes.push(self.find_representatives(attendee, out).await?);
        }
        Ok(outcomes)
    }
}

fn write_official(out: &mut impl Write, official: &Official) -> io::Result<()> {
    match &official.office {
        Some(office) => writeln!(
            out,
            "- {}, {} ({office})",
            official.name,
            official.party_label()
        ),
        None => writeln!(out, "- {}, {}", official.name, official.party_label()),
    }
}
