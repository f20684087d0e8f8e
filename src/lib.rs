pub mod timetable;

pub use timetable::{Connection, Query, Timetable, TimetableBuilder};

pub mod journey;

pub use journey::{Journey, JourneyError};

pub mod csa;

pub use csa::{csa_query, ScanState};
