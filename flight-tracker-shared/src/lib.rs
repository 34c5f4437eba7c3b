//! Shared flight tracking types.
//!
//! Holds the ticket model along with the two calls the backend makes per request: `validate` to
//! check ticket shape and `resolve` to find where the combined trip starts and ends.

pub mod tickets {
    use serde::{ser::SerializeTuple, Serialize};
    use std::collections::HashMap;
    use thiserror::Error;

    /// Length of an IATA airport code.
    pub const CODE_LEN: usize = 3;

    /// Ticket exactly as it arrives over the wire, any number of codes.
    pub type RawTicket = Vec<String>;

    /// A single one-way leg between two airports
    #[derive(Debug, Eq, PartialEq, Hash, Clone)]
    pub struct Ticket {
        pub src: String,
        pub dest: String,
    }

    /// Overall source and destination of a set of tickets. Serializes as `[src, dest]`.
    #[derive(Debug, Eq, PartialEq, Clone)]
    pub struct Itinerary {
        pub src: String,
        pub dest: String,
    }

    /// What exactly was wrong with a rejected ticket
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum TicketFault {
        /// Ticket didn't hold exactly a source and a destination.
        Arity(usize),
        /// Code isn't three uppercase characters.
        Code(String),
    }

    #[derive(Debug, Error, Clone, PartialEq, Eq)]
    pub enum TrackError {
        #[error("Invalid ticket: {0}")]
        InvalidTicket(TicketFault),
        #[error("Unable to track source and destination for the given tickets")]
        UnableToTrack,
    }

    impl std::fmt::Display for TicketFault {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            match self {
                TicketFault::Arity(n) => write!(f, "expected 2 airport codes, got {}", n),
                TicketFault::Code(code) => write!(f, "bad airport code {:?}", code),
            }
        }
    }

    impl Ticket {
        pub fn new<S>(src: S, dest: S) -> Ticket
        where
            S: Into<String>,
        {
            Ticket {
                src: src.into(),
                dest: dest.into(),
            }
        }
    }

    impl Itinerary {
        pub fn new<S>(src: S, dest: S) -> Itinerary
        where
            S: Into<String>,
        {
            Itinerary {
                src: src.into(),
                dest: dest.into(),
            }
        }
    }

    impl Serialize for Itinerary {
        // Clients expect a bare two element array, index 0 is always the source
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: serde::Serializer,
        {
            let mut state = serializer.serialize_tuple(2)?;
            state.serialize_element(&self.src)?;
            state.serialize_element(&self.dest)?;
            state.end()
        }
    }

    /// A code is valid when it is three bytes long and already ASCII uppercase.
    pub fn is_valid_code(code: &str) -> bool {
        code.len() == CODE_LEN && code.is_ascii() && code.to_ascii_uppercase() == code
    }

    fn check_code(code: &str) -> Result<(), TrackError> {
        if is_valid_code(code) {
            Ok(())
        } else {
            Err(TrackError::InvalidTicket(TicketFault::Code(code.to_string())))
        }
    }

    /// Checks every raw ticket's shape and converts them into typed tickets.
    ///
    /// Stops at the first bad ticket, nothing is returned for the rest of the collection. An empty
    /// collection is fine here, it gets rejected later by [`resolve`].
    pub fn validate<T>(tickets: &[T]) -> Result<Vec<Ticket>, TrackError>
    where
        T: AsRef<[String]>,
    {
        tickets
            .iter()
            .map(|ticket| -> Result<Ticket, TrackError> {
                match ticket.as_ref() {
                    [src, dest] => {
                        check_code(src)?;
                        check_code(dest)?;
                        Ok(Ticket::new(src.as_str(), dest.as_str()))
                    }
                    other => Err(TrackError::InvalidTicket(TicketFault::Arity(other.len()))),
                }
            })
            .collect()
    }

    /// Net degree of every airport: +1 each time it is a destination, -1 each time it is a source.
    fn degrees(tickets: &[Ticket]) -> HashMap<&str, i32> {
        let mut degrees = HashMap::new();
        for ticket in tickets {
            *degrees.entry(ticket.src.as_str()).or_insert(0) -= 1;
            *degrees.entry(ticket.dest.as_str()).or_insert(0) += 1;
        }
        degrees
    }

    /// Finds the overall source and destination of a set of validated tickets.
    ///
    /// Airports passed through have a net degree of zero and drop out. What remains has to be
    /// exactly one airport at -1 (the source) and one at +1 (the destination), anything else means
    /// the tickets don't chain into a single path.
    pub fn resolve(tickets: &[Ticket]) -> Result<Itinerary, TrackError> {
        let degrees = degrees(tickets);

        if degrees.values().any(|degree| degree.abs() > 1) {
            return Err(TrackError::UnableToTrack);
        }

        let endpoints: Vec<(&str, i32)> = degrees
            .into_iter()
            .filter(|(_, degree)| *degree != 0)
            .collect();

        match endpoints.as_slice() {
            [(src, -1), (dest, 1)] | [(dest, 1), (src, -1)] => Ok(Itinerary::new(*src, *dest)),
            _ => Err(TrackError::UnableToTrack),
        }
    }
}
