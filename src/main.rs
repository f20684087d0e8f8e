use std::io::{self, BufRead, BufWriter, Write};

use csa::{csa_query, Connection, JourneyError, Query, ScanState, Timetable};

// Line protocol: every line is whitespace-separated unsigned integers.
// Connections (four fields) until the first blank line, queries (three
// fields) until a second blank line or end of input. Each query is answered
// with the journey's connections, one per line, followed by a blank
// separator line, or with the literal NO_SOLUTION.
fn run(input: impl BufRead, mut output: impl Write) -> Result<(), Box<dyn std::error::Error>> {
    let mut lines = input.lines();

    // Initialization phase.
    let mut builder = Timetable::builder();
    for line in lines.by_ref() {
        let line = line?;
        if line.is_empty() {
            break;
        }
        builder.push(line.parse::<Connection>()?);
    }
    let timetable = builder.build();

    // Query phase.
    let mut state = ScanState::new();
    for line in lines {
        let line = line?;
        if line.is_empty() {
            break;
        }
        let query: Query = line.parse()?;
        match csa_query(&timetable, &mut state, &query) {
            Ok(journey) => {
                write!(output, "{journey}")?;
                writeln!(output)?;
            }
            Err(JourneyError::NoJourneyFound) => writeln!(output, "NO_SOLUTION")?,
            Err(fault) => return Err(fault.into()),
        }
    }

    output.flush()?;
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let stdin = io::stdin();
    let stdout = io::stdout();
    run(stdin.lock(), BufWriter::new(stdout.lock()))
}
