use crate::error::{PayStationError, Result};
use crate::event::{Event, EventKind, Outcome};
use crate::station::PayStation;

/// Drives one pay station over a stream of events.
///
/// `StationEngine` owns the station and collects an [`Outcome`] for every
/// observable result: display reads, receipts, refunds, and collections.
/// Inserting a coin produces no outcome on success; an illegal coin surfaces
/// as an error and the event stream can continue from the next row.
pub struct StationEngine {
    station: PayStation,
    outcomes: Vec<Outcome>,
}

impl Default for StationEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl StationEngine {
    pub fn new() -> Self {
        Self {
            station: PayStation::new(),
            outcomes: Vec::new(),
        }
    }

    /// Applies a single event to the station.
    pub fn process_event(&mut self, event: Event) -> Result<()> {
        match event.r#type {
            EventKind::Insert => {
                let coin = event.coin.ok_or_else(|| {
                    PayStationError::EventError("insert row missing coin value".to_string())
                })?;
                self.station.add_payment(coin)?;
            }
            EventKind::Display => {
                self.outcomes.push(Outcome::Display {
                    minutes: self.station.read_display(),
                });
            }
            EventKind::Buy => {
                let receipt = self.station.buy();
                self.outcomes.push(receipt.into());
            }
            EventKind::Cancel => {
                let refund = self.station.cancel();
                self.outcomes.push(refund.into());
            }
            EventKind::Empty => {
                self.outcomes.push(Outcome::Collected {
                    cents: self.station.empty(),
                });
            }
        }
        Ok(())
    }

    /// Consumes the engine and returns the collected outcomes in order.
    pub fn into_results(self) -> Vec<Outcome> {
        self.outcomes
    }
}
