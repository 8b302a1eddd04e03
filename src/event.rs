use crate::receipt::Receipt;
use crate::station::CoinCounts;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    Insert,
    Display,
    Buy,
    Cancel,
    Empty,
}

/// One row of the event CSV driving a station.
///
/// `coin` is only meaningful for `insert` rows; the other kinds leave the
/// column empty.
#[derive(Debug, Deserialize, PartialEq, Eq, Clone, Copy)]
pub struct Event {
    pub r#type: EventKind,
    pub coin: Option<u32>,
}

/// An observable result produced while processing events.
#[derive(Debug, Serialize, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "lowercase", tag = "event")]
pub enum Outcome {
    Display { minutes: u32 },
    Receipt { minutes: u32 },
    Refund { nickels: u32, dimes: u32, quarters: u32 },
    Collected { cents: u32 },
}

impl From<Receipt> for Outcome {
    fn from(receipt: Receipt) -> Self {
        Outcome::Receipt {
            minutes: receipt.value(),
        }
    }
}

impl From<CoinCounts> for Outcome {
    fn from(coins: CoinCounts) -> Self {
        Outcome::Refund {
            nickels: coins.nickels,
            dimes: coins.dimes,
            quarters: coins.quarters,
        }
    }
}
