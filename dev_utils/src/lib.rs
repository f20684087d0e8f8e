use csa::timetable::{Connection, StopId, Timestamp};
use csa::{Query, Timetable};

// Common example data for the benchmarks.

pub fn get_example_timetable() -> Timetable {
    // Two lines crossing at stop 2, plus a slow direct service 0 -> 4.
    let mut builder = Timetable::builder();
    for (dep_stop, arr_stop, dep_time, arr_time) in [
        (0, 1, 28_800, 29_100),
        (3, 2, 28_860, 29_400),
        (1, 2, 29_160, 29_520),
        (0, 4, 29_200, 33_000),
        (2, 4, 29_580, 30_300),
        (2, 5, 29_640, 30_000),
        (4, 5, 30_360, 30_720),
    ] {
        builder.push(Connection { dep_stop, arr_stop, dep_time, arr_time });
    }
    builder.build()
}

pub fn get_example_query() -> Query {
    Query { origin: 0, destination: 5, departure_time: 28_800 }
}

pub fn get_example_scenario() -> (Timetable, Query) {
    (get_example_timetable(), get_example_query())
}

/// Seeded random timetable with sorted departures, as the store requires.
pub fn build_random_timetable(num_stations: StopId, num_connections: usize, seed: u64) -> Timetable {
    let mut rng = fastrand::Rng::with_seed(seed);
    let mut builder = Timetable::builder();
    let mut dep_time: Timestamp = 0;
    for _ in 0..num_connections {
        dep_time += rng.u32(0..30);
        let dep_stop = rng.u32(0..num_stations);
        let mut arr_stop = rng.u32(0..num_stations);
        if arr_stop == dep_stop {
            arr_stop = (arr_stop + 1) % num_stations;
        }
        builder.push(Connection {
            dep_stop,
            arr_stop,
            dep_time,
            arr_time: dep_time + rng.u32(60..3600),
        });
    }
    builder.build()
}
