use serde::{Deserialize, Serialize};

/// A record of purchased parking time, issued by a completed buy.
///
/// Receipts are immutable once issued; the buyer owns them and the station
/// keeps no reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Receipt {
    minutes: u32,
}

impl Receipt {
    pub(crate) fn new(minutes: u32) -> Self {
        Self { minutes }
    }

    /// The number of parking minutes this receipt is good for.
    pub fn value(&self) -> u32 {
        self.minutes
    }
}
