use std::fmt::Display;
use std::str::FromStr;

pub type Timestamp = u32;
pub type StopId = u32;
pub type ConnectionIndex = u32;

/// Exclusive upper bound on station ids. Scan state is sized for this bound,
/// so station ids above it are rejected at the parse boundary.
pub const MAX_STATION: usize = 100_000;

/// Sentinel marking "no arrival known" and "no predecessor connection".
/// Chosen outside the legal domain: timestamps and timetable lengths must
/// stay strictly below `u32::MAX` for the scan comparisons to behave.
pub const INF: u32 = u32::MAX;

/// One vehicle hop from a departure station to an arrival station.
// Exactly 16 packed bytes, so the timetable is a contiguous run of u32 words
// and the scan is a plain index walk over it.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Connection {
    pub dep_stop: StopId,
    pub arr_stop: StopId,
    pub dep_time: Timestamp,
    pub arr_time: Timestamp,
}

impl Display for Connection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {} {}", self.dep_stop, self.arr_stop, self.dep_time, self.arr_time)
    }
}

/// An earliest-arrival request: leave `origin` no earlier than
/// `departure_time`, reach `destination` as early as possible.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Query {
    pub origin: StopId,
    pub destination: StopId,
    pub departure_time: Timestamp,
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum ParseError {
    #[error("expected {expected} fields, found {found}")]
    FieldCount { expected: usize, found: usize },
    #[error("invalid integer: {0}")]
    InvalidInteger(#[from] std::num::ParseIntError),
    #[error("station id {0} is out of range (must be below {MAX_STATION})")]
    StationOutOfRange(u32),
    #[error("connection arrives at {arr_time} before it departs at {dep_time}")]
    ArrivalBeforeDeparture { dep_time: Timestamp, arr_time: Timestamp },
}

fn parse_fields<const N: usize>(line: &str) -> Result<[u32; N], ParseError> {
    let mut fields = [0u32; N];
    let mut split = line.split_whitespace();
    for (found, slot) in fields.iter_mut().enumerate() {
        let field = split.next().ok_or(ParseError::FieldCount { expected: N, found })?;
        *slot = field.parse()?;
    }
    let extra = split.count();
    if extra > 0 {
        return Err(ParseError::FieldCount { expected: N, found: N + extra });
    }
    Ok(fields)
}

fn check_station(id: u32) -> Result<StopId, ParseError> {
    if (id as usize) < MAX_STATION {
        Ok(id)
    } else {
        Err(ParseError::StationOutOfRange(id))
    }
}

impl FromStr for Connection {
    type Err = ParseError;

    /// Parses a "dep_stop arr_stop dep_time arr_time" line.
    fn from_str(line: &str) -> Result<Self, ParseError> {
        let [dep_stop, arr_stop, dep_time, arr_time] = parse_fields(line)?;
        if arr_time < dep_time {
            return Err(ParseError::ArrivalBeforeDeparture { dep_time, arr_time });
        }
        Ok(Connection {
            dep_stop: check_station(dep_stop)?,
            arr_stop: check_station(arr_stop)?,
            dep_time,
            arr_time,
        })
    }
}

impl FromStr for Query {
    type Err = ParseError;

    /// Parses an "origin destination departure_time" line.
    fn from_str(line: &str) -> Result<Self, ParseError> {
        let [origin, destination, departure_time] = parse_fields(line)?;
        Ok(Query {
            origin: check_station(origin)?,
            destination: check_station(destination)?,
            departure_time,
        })
    }
}

/// Accumulates connections during the initialization phase.
///
/// Connections must be pushed in non-decreasing `dep_time` order; the scan's
/// early-termination rule relies on it. The builder does not sort (sorting
/// would change which of two equal-arrival journeys gets reconstructed) and
/// only checks the contract in debug builds.
#[derive(Default)]
pub struct TimetableBuilder {
    connections: Vec<Connection>,
}

impl TimetableBuilder {
    pub fn new() -> Self {
        TimetableBuilder { connections: Vec::new() }
    }

    /// Appends one connection. Amortized O(1); the backing buffer doubles on
    /// overflow.
    pub fn push(&mut self, connection: Connection) {
        debug_assert!(
            connection.dep_time <= connection.arr_time,
            "connection arrives before it departs: {connection}",
        );
        debug_assert!(
            self.connections.last().map_or(true, |last| last.dep_time <= connection.dep_time),
            "connections must be pushed in non-decreasing departure-time order",
        );
        self.connections.push(connection);
    }

    pub fn len(&self) -> usize {
        self.connections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.connections.is_empty()
    }

    /// Freezes the timetable. Queries only ever see the immutable result.
    pub fn build(self) -> Timetable {
        log::debug!("timetable frozen with {} connections", self.connections.len());
        Timetable { connections: self.connections }
    }
}

/// The immutable, departure-time-sorted connection array the scan runs over.
pub struct Timetable {
    connections: Vec<Connection>,
}

impl Timetable {
    pub fn builder() -> TimetableBuilder {
        TimetableBuilder::new()
    }

    pub fn len(&self) -> usize {
        self.connections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.connections.is_empty()
    }

    pub fn get(&self, index: usize) -> Connection {
        self.connections[index]
    }

    pub fn connections(&self) -> &[Connection] {
        &self.connections
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn connection_is_tightly_packed() {
        assert_eq!(std::mem::size_of::<Connection>(), 16);
    }

    #[test]
    fn parses_connection_line() {
        let connection: Connection = "0 1 100 200".parse().unwrap();
        assert_eq!(
            connection,
            Connection { dep_stop: 0, arr_stop: 1, dep_time: 100, arr_time: 200 }
        );
    }

    #[test]
    fn parses_query_line() {
        let query: Query = "3 7 540".parse().unwrap();
        assert_eq!(query, Query { origin: 3, destination: 7, departure_time: 540 });
    }

    #[test]
    fn rejects_wrong_field_count() {
        assert_eq!(
            "0 1 100".parse::<Connection>(),
            Err(ParseError::FieldCount { expected: 4, found: 3 })
        );
        assert_eq!(
            "0 1 100 200 300".parse::<Connection>(),
            Err(ParseError::FieldCount { expected: 4, found: 5 })
        );
        assert_eq!(
            "0 1".parse::<Query>(),
            Err(ParseError::FieldCount { expected: 3, found: 2 })
        );
    }

    #[test]
    fn rejects_non_integer_field() {
        assert!(matches!(
            "0 one 100 200".parse::<Connection>(),
            Err(ParseError::InvalidInteger(_))
        ));
    }

    #[test]
    fn rejects_out_of_range_station() {
        let line = format!("0 {} 100 200", MAX_STATION);
        assert_eq!(
            line.parse::<Connection>(),
            Err(ParseError::StationOutOfRange(MAX_STATION as u32))
        );
        assert_eq!("100000 1 0".parse::<Query>(), Err(ParseError::StationOutOfRange(100_000)));
    }

    #[test]
    fn rejects_arrival_before_departure() {
        assert_eq!(
            "0 1 200 100".parse::<Connection>(),
            Err(ParseError::ArrivalBeforeDeparture { dep_time: 200, arr_time: 100 })
        );
    }

    #[test]
    fn connection_displays_in_wire_format() {
        let connection = Connection { dep_stop: 5, arr_stop: 6, dep_time: 10_000, arr_time: 10_001 };
        assert_eq!(connection.to_string(), "5 6 10000 10001");
    }

    #[test]
    fn builder_freezes_in_input_order() {
        let mut builder = Timetable::builder();
        builder.push(Connection { dep_stop: 0, arr_stop: 1, dep_time: 100, arr_time: 200 });
        builder.push(Connection { dep_stop: 1, arr_stop: 2, dep_time: 200, arr_time: 300 });
        assert_eq!(builder.len(), 2);

        let timetable = builder.build();
        assert_eq!(timetable.len(), 2);
        assert_eq!(timetable.get(1).dep_stop, 1);
        assert_eq!(timetable.connections()[0].arr_time, 200);
    }
}
