//! Tracker service sitting between the web handlers and the shared ticket logic.
//!
//! The ticket logic itself is pure and never logs, so this is where failures get recorded against
//! the request they belong to.

use crate::request_id::RequestId;
use flight_tracker_shared::tickets::{self, Itinerary, Ticket, TrackError};
use tracing::{debug, error};

#[derive(Debug, Default, Clone)]
pub struct FlightTracker;

impl FlightTracker {
    pub fn new() -> FlightTracker {
        FlightTracker
    }

    #[tracing::instrument(
        name = "validate_tickets",
        skip_all,
        fields(request_id = %request_id, interface = "FlightTracker", method = "ValidateTickets", tickets = raw.len())
    )]
    pub fn validate_tickets<T>(
        &self,
        request_id: &RequestId,
        raw: &[T],
    ) -> Result<Vec<Ticket>, TrackError>
    where
        T: AsRef<[String]>,
    {
        tickets::validate(raw).map_err(|e| {
            error!("ValidateTickets - {}", e);
            e
        })
    }

    #[tracing::instrument(
        name = "find_source_and_destination",
        skip_all,
        fields(
            request_id = %request_id,
            interface = "FlightTracker",
            method = "FindSourceAndDestination",
            tickets = legs.len()
        )
    )]
    pub fn find_source_and_destination(
        &self,
        request_id: &RequestId,
        legs: &[Ticket],
    ) -> Result<Itinerary, TrackError> {
        let itinerary = tickets::resolve(legs).map_err(|e| {
            error!("FindSourceAndDestination - {}", e);
            e
        })?;

        debug!(src = %itinerary.src, dest = %itinerary.dest, "resolved itinerary");
        Ok(itinerary)
    }
}

#[cfg(test)]
mod tracker_tests {
    use super::*;
    use flight_tracker_shared::tickets::TicketFault;

    fn raw(tickets: &[&[&str]]) -> Vec<Vec<String>> {
        tickets
            .iter()
            .map(|t| t.iter().map(|code| code.to_string()).collect())
            .collect()
    }

    #[test]
    fn test_track_trip() {
        let tracker = FlightTracker::new();
        let id = RequestId::from("test-trip");

        let legs = tracker
            .validate_tickets(
                &id,
                &raw(&[&["IND", "EWR"], &["SFO", "ATL"], &["GSO", "IND"], &["ATL", "GSO"]]),
            )
            .unwrap();

        assert_eq!(
            tracker.find_source_and_destination(&id, &legs),
            Ok(Itinerary::new("SFO", "EWR"))
        );
    }

    #[test]
    fn test_errors_pass_through_unchanged() {
        let tracker = FlightTracker::new();
        let id = RequestId::from("test-errors");

        assert_eq!(
            tracker.validate_tickets(&id, &raw(&[&["IND", "EWR", "ATL"]])),
            Err(TrackError::InvalidTicket(TicketFault::Arity(3)))
        );

        let legs = tracker
            .validate_tickets(&id, &raw(&[&["IND", "EWR"], &["IND", "EWR"]]))
            .unwrap();
        assert_eq!(
            tracker.find_source_and_destination(&id, &legs),
            Err(TrackError::UnableToTrack)
        );
    }
}
