use std::fmt::Display;

use crate::timetable::{Connection, Timestamp};

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum JourneyError {
    /// The destination is unreachable from the origin at or after the
    /// requested departure time. This is the clean no-solution outcome.
    #[error("No journey found.")]
    NoJourneyFound,
    /// The predecessor chain did not lead back to the origin within
    /// `timetable.len()` steps. Only possible if the scan's preconditions
    /// were violated.
    #[error("Infinite loop in journey reconstruction.")]
    InfiniteLoop,
}

pub type JourneyResult = Result<Journey, JourneyError>;

/// A journey from origin to destination: consecutive connections with
/// matching stops and non-decreasing times.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Journey {
    pub connections: Vec<Connection>,
}

impl Journey {
    pub fn empty() -> Self {
        Journey { connections: Vec::new() }
    }

    pub fn new(connections: Vec<Connection>) -> Self {
        Journey { connections }
    }

    pub fn len(&self) -> usize {
        self.connections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.connections.is_empty()
    }

    pub fn departure_time(&self) -> Option<Timestamp> {
        self.connections.first().map(|connection| connection.dep_time)
    }

    pub fn arrival_time(&self) -> Option<Timestamp> {
        self.connections.last().map(|connection| connection.arr_time)
    }
}

// One connection per line in the driver's wire format.
impl Display for Journey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for connection in &self.connections {
            writeln!(f, "{connection}")?;
        }
        Ok(())
    }
}
