use crate::error::{PayStationError, Result};
use crate::event::Event;
use std::io::Read;

/// Reads station events from a CSV source.
///
/// Wraps `csv::Reader` and provides an iterator over `Result<Event>`, with
/// whitespace trimming and flexible record lengths so rows without a coin
/// column parse cleanly.
pub struct EventReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> EventReader<R> {
    /// Creates a new `EventReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Returns an iterator that lazily reads and deserializes events.
    pub fn events(self) -> impl Iterator<Item = Result<Event>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(PayStationError::from))
    }
}
