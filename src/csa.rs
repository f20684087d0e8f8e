use crate::journey::{Journey, JourneyError, JourneyResult};
use crate::timetable::{ConnectionIndex, Query, Timetable, Timestamp, INF, MAX_STATION};

/// Per-station scan state, allocated once and reused across queries.
///
/// Both arrays are indexed by station id and refilled with [`INF`] at the
/// start of every query, so a query never observes its predecessors and no
/// per-query allocation happens.
pub struct ScanState {
    /// Earliest known arrival time at each station for the current query.
    earliest_arrival: Box<[Timestamp]>,
    /// Index of the connection that achieved `earliest_arrival`, or `INF`.
    in_connection: Box<[ConnectionIndex]>,
    /// Connections examined by the most recent query. Surfaced in the trace
    /// log; far below `timetable.len()` when early termination kicks in.
    pub scanned: usize,
}

impl ScanState {
    /// State sized for the full station-id domain (`MAX_STATION`).
    pub fn new() -> Self {
        Self::with_stations(MAX_STATION)
    }

    /// State for station ids below `num_stations`. Queries and timetables
    /// must stay within that bound.
    pub fn with_stations(num_stations: usize) -> Self {
        ScanState {
            earliest_arrival: vec![INF; num_stations].into_boxed_slice(),
            in_connection: vec![INF; num_stations].into_boxed_slice(),
            scanned: 0,
        }
    }

    pub fn num_stations(&self) -> usize {
        self.earliest_arrival.len()
    }

    // One linear fill per array, no allocation.
    fn reset(&mut self) {
        self.earliest_arrival.fill(INF);
        self.in_connection.fill(INF);
        self.scanned = 0;
    }
}

impl Default for ScanState {
    fn default() -> Self {
        Self::new()
    }
}

/// Runs an earliest-arrival connection scan (CSA) query over the timetable.
///
/// A single pass over the departure-time-sorted connections: a connection is
/// boardable when its departure is no earlier than the earliest arrival at
/// its departure stop, and recorded when it strictly improves the arrival at
/// its arrival stop. Strict improvement makes the first optimal connection
/// win, which keeps reconstruction deterministic. The scan stops as soon as
/// a connection departs later than the best known destination arrival.
pub fn csa_query(timetable: &Timetable, state: &mut ScanState, query: &Query) -> JourneyResult {
    if query.origin == query.destination {
        return Ok(Journey::empty());
    }

    debug_assert!((query.origin as usize) < state.num_stations());
    debug_assert!((query.destination as usize) < state.num_stations());

    state.reset();
    state.earliest_arrival[query.origin as usize] = query.departure_time;

    let destination = query.destination as usize;

    for (index, connection) in timetable.connections().iter().enumerate() {
        state.scanned += 1;

        if connection.dep_time >= state.earliest_arrival[connection.dep_stop as usize]
            && connection.arr_time < state.earliest_arrival[connection.arr_stop as usize]
        {
            state.in_connection[connection.arr_stop as usize] = index as ConnectionIndex;
            state.earliest_arrival[connection.arr_stop as usize] = connection.arr_time;
        } else if connection.dep_time > state.earliest_arrival[destination] {
            // Departures are sorted, so no later connection can still improve
            // the destination.
            break;
        }
    }

    log::trace!(
        "scanned {}/{} connections for query {} -> {} at {}",
        state.scanned,
        timetable.len(),
        query.origin,
        query.destination,
        query.departure_time,
    );

    reconstruct(timetable, state, query)
}

// Walk predecessor links from the destination back to the origin and flip
// the sequence into travel order.
fn reconstruct(timetable: &Timetable, state: &ScanState, query: &Query) -> JourneyResult {
    if state.in_connection[query.destination as usize] == INF {
        return Err(JourneyError::NoJourneyFound);
    }

    let mut connections = Vec::new();
    let mut stop = query.destination;
    while stop != query.origin {
        // Every step moves to a strictly earlier-scanned connection, so a
        // chain longer than the timetable means corrupted predecessor links.
        if connections.len() >= timetable.len() {
            return Err(JourneyError::InfiniteLoop);
        }
        let index = state.in_connection[stop as usize] as usize;
        match timetable.connections().get(index) {
            Some(&connection) => {
                connections.push(connection);
                stop = connection.dep_stop;
            }
            None => return Err(JourneyError::InfiniteLoop),
        }
    }
    connections.reverse();

    Ok(Journey::new(connections))
}
