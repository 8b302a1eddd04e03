use crate::error::PayStationError;
use serde::{Deserialize, Serialize};

/// An accepted coin denomination.
///
/// The station takes exactly three denominations: nickels, dimes, and
/// quarters. Every other integer value is rejected at the boundary, so the
/// rest of the crate never sees an invalid coin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Coin {
    Nickel,
    Dime,
    Quarter,
}

impl Coin {
    /// All denominations in ascending value order.
    pub const ALL: [Coin; 3] = [Coin::Nickel, Coin::Dime, Coin::Quarter];

    pub fn cents(&self) -> u32 {
        match self {
            Coin::Nickel => 5,
            Coin::Dime => 10,
            Coin::Quarter => 25,
        }
    }
}

impl TryFrom<u32> for Coin {
    type Error = PayStationError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            5 => Ok(Coin::Nickel),
            10 => Ok(Coin::Dime),
            25 => Ok(Coin::Quarter),
            other => Err(PayStationError::IllegalCoin(other)),
        }
    }
}

impl From<Coin> for u32 {
    fn from(coin: Coin) -> Self {
        coin.cents()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_denominations() {
        assert_eq!(Coin::try_from(5).unwrap(), Coin::Nickel);
        assert_eq!(Coin::try_from(10).unwrap(), Coin::Dime);
        assert_eq!(Coin::try_from(25).unwrap(), Coin::Quarter);
    }

    #[test]
    fn test_invalid_denominations_rejected() {
        for value in [0, 1, 17, 50, 100] {
            assert!(matches!(
                Coin::try_from(value),
                Err(PayStationError::IllegalCoin(v)) if v == value
            ));
        }
    }

    #[test]
    fn test_cents_round_trip() {
        for coin in Coin::ALL {
            assert_eq!(Coin::try_from(coin.cents()).unwrap(), coin);
        }
    }
}
