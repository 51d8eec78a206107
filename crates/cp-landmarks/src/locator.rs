//! Interactive landmark session.
//!
//! # State machine
//!
//! ```text
//!            any other name
//!           ┌──────────────┐
//!           ▼              │
//!   AwaitingInput ─────────┘
//!           │
//!           │ "done" (any case)
//!           ▼
//!      Terminated
//! ```
//!
//! Each name in `AwaitingInput` is geocoded:
//! - no match → notice on the console, no row, stay in `AwaitingInput`;
//! - match → snap to the nearest node, report, append one row;
//! - geocoder error → returned to the caller, session over.  Rows written in
//!   earlier iterations are already flushed.

use std::io::{BufRead, Write};

use log::{debug, info};

use cp_nodes::{NodeTable, NodesError};

use crate::{Geocoder, LandmarkError, LandmarkRecord, LandmarkResult, LandmarkWriter};

/// Input that ends the session, compared case-insensitively.
pub const DONE_SENTINEL: &str = "done";

pub const PROMPT: &str = "Enter landmark name (or \"done\" to finish): ";

/// `true` if `input` ends the session.
///
/// Only the whole input counts: `"DONE"` terminates, `"done!"` and
/// `" done"` do not.
pub fn is_done_sentinel(input: &str) -> bool {
    input.to_lowercase() == DONE_SENTINEL
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocatorState {
    AwaitingInput,
    Terminated,
}

/// A located landmark: the row written plus the snapping distance.
#[derive(Debug, Clone, PartialEq)]
pub struct Landmark {
    pub record:     LandmarkRecord,
    /// Geodesic distance in metres from the geocoded point to the chosen node.
    pub distance_m: f64,
}

/// Outcome of one [`LandmarkLocator::step`].
#[derive(Debug, Clone, PartialEq)]
pub enum Step {
    Terminated,
    NotFound,
    Located(Landmark),
}

/// Counters for a finished session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub located:   u64,
    pub not_found: u64,
}

/// Drives one landmark session over a loaded node table.
pub struct LandmarkLocator<'n, G, W: Write> {
    nodes:    &'n NodeTable,
    geocoder: G,
    writer:   LandmarkWriter<W>,
    state:    LocatorState,
    summary:  RunSummary,
}

impl<'n, G: Geocoder, W: Write> LandmarkLocator<'n, G, W> {
    pub fn new(nodes: &'n NodeTable, geocoder: G, writer: LandmarkWriter<W>) -> Self {
        Self {
            nodes,
            geocoder,
            writer,
            state:   LocatorState::AwaitingInput,
            summary: RunSummary::default(),
        }
    }

    pub fn state(&self) -> LocatorState {
        self.state
    }

    pub fn summary(&self) -> RunSummary {
        self.summary
    }

    /// Process one operator input.
    ///
    /// Once terminated, further calls return [`Step::Terminated`] without
    /// geocoding or writing anything.
    pub fn step(&mut self, input: &str) -> LandmarkResult<Step> {
        if self.state == LocatorState::Terminated {
            return Ok(Step::Terminated);
        }
        if is_done_sentinel(input) {
            self.state = LocatorState::Terminated;
            self.writer.finish()?;
            return Ok(Step::Terminated);
        }

        let Some(place) = self.geocoder.geocode(input)? else {
            debug!("no geocoding match for {input:?}");
            self.summary.not_found += 1;
            return Ok(Step::NotFound);
        };

        let (node, _) = self
            .nodes
            .nearest(place)
            .ok_or(LandmarkError::Nodes(NodesError::EmptyTable))?;
        // Reported distance is measured from the chosen node, independently
        // of the value the selection compared.
        let distance_m = node.pos.distance_m(place);

        let record = LandmarkRecord {
            name:    input.to_owned(),
            node_id: node.id.to_string(),
            lat:     node.pos.lat,
            lon:     node.pos.lon,
        };
        self.writer.write_landmark(&record)?;
        self.summary.located += 1;
        debug!("{input:?} at {place} -> node {} ({distance_m:.1} m)", node.id);

        Ok(Step::Located(Landmark { record, distance_m }))
    }

    /// Prompt on `console`, read names line by line from `input`, and step
    /// until the operator enters the sentinel.
    ///
    /// End of input before the sentinel is [`LandmarkError::InputClosed`].
    pub fn run<R: BufRead, C: Write>(&mut self, mut input: R, mut console: C) -> LandmarkResult<RunSummary> {
        let mut line = String::new();

        while self.state == LocatorState::AwaitingInput {
            write!(console, "{PROMPT}")?;
            console.flush()?;

            line.clear();
            if input.read_line(&mut line)? == 0 {
                return Err(LandmarkError::InputClosed);
            }
            let name = strip_line_ending(&line);

            match self.step(name)? {
                Step::Terminated => {}
                Step::NotFound => writeln!(console, "can't find location: {name}")?,
                Step::Located(landmark) => writeln!(
                    console,
                    "the closest node to {} is {} ({:.1} meters away)",
                    landmark.record.name, landmark.record.node_id, landmark.distance_m
                )?,
            }
        }

        info!(
            "landmark session finished: {} located, {} not found",
            self.summary.located, self.summary.not_found
        );
        Ok(self.summary)
    }

    /// Consume the locator and return its writer.
    pub fn into_writer(self) -> LandmarkWriter<W> {
        self.writer
    }
}

/// Strip one trailing `\n` or `\r\n`; all other whitespace is kept.
fn strip_line_ending(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}
