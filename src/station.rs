use crate::coin::Coin;
use crate::error::Result;
use crate::receipt::Receipt;
use serde::{Deserialize, Serialize};

/// Per-denomination coin counts for one session.
///
/// Fixed record over the three known denominations rather than a general map,
/// so lookups are total and iteration order is stable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CoinCounts {
    pub nickels: u32,
    pub dimes: u32,
    pub quarters: u32,
}

impl CoinCounts {
    pub fn count(&self, coin: Coin) -> u32 {
        match coin {
            Coin::Nickel => self.nickels,
            Coin::Dime => self.dimes,
            Coin::Quarter => self.quarters,
        }
    }

    fn add(&mut self, coin: Coin) {
        match coin {
            Coin::Nickel => self.nickels += 1,
            Coin::Dime => self.dimes += 1,
            Coin::Quarter => self.quarters += 1,
        }
    }

    /// Total value of the counted coins, in cents.
    pub fn cents(&self) -> u32 {
        Coin::ALL
            .iter()
            .map(|coin| coin.cents() * self.count(*coin))
            .sum()
    }

    /// (denomination, count) pairs in ascending denomination order, all three
    /// denominations present even when zero.
    pub fn iter(&self) -> impl Iterator<Item = (Coin, u32)> + '_ {
        Coin::ALL.into_iter().map(|coin| (coin, self.count(coin)))
    }
}

/// A parking pay station.
///
/// Accepts coins, computes purchasable parking time, issues receipts on buy,
/// refunds coin counts on cancel, and tracks earnings across sessions until
/// collected with [`empty`](PayStation::empty).
///
/// The station is a two-state machine: idle (nothing inserted) and
/// accumulating. `add_payment` enters or stays in accumulating; `buy` and
/// `cancel` return to idle. Accumulated earnings survive session resets.
#[derive(Debug, Default)]
pub struct PayStation {
    inserted_so_far: u32,
    time_bought: u32,
    inserted_coins: CoinCounts,
    total_since_last_check: u32,
}

impl PayStation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accepts a coin. Rejects any value outside {5, 10, 25} cents with
    /// [`PayStationError::IllegalCoin`](crate::error::PayStationError),
    /// leaving all state unchanged.
    pub fn add_payment(&mut self, coin_value: u32) -> Result<()> {
        let coin = Coin::try_from(coin_value)?;
        self.inserted_so_far += coin.cents();
        // Rate: 2 minutes per 5 cents, integer division.
        self.time_bought = self.inserted_so_far / 5 * 2;
        self.inserted_coins.add(coin);
        Ok(())
    }

    /// Parking minutes purchasable with the coins inserted so far.
    pub fn read_display(&self) -> u32 {
        self.time_bought
    }

    /// Completes the purchase: banks the inserted money, issues a receipt for
    /// the bought time, and resets the session.
    pub fn buy(&mut self) -> Receipt {
        self.total_since_last_check += self.inserted_so_far;
        let receipt = Receipt::new(self.time_bought);
        self.reset();
        receipt
    }

    /// Aborts the session, returning the counts of coins inserted since the
    /// last reset. Does not touch accumulated earnings.
    pub fn cancel(&mut self) -> CoinCounts {
        let refund = self.inserted_coins;
        self.reset();
        refund
    }

    /// Collects accumulated earnings: returns the total money from completed
    /// buys since the previous call and resets that total to zero.
    pub fn empty(&mut self) -> u32 {
        std::mem::take(&mut self.total_since_last_check)
    }

    fn reset(&mut self) {
        self.inserted_so_far = 0;
        self.time_bought = 0;
        self.inserted_coins = CoinCounts::default();
    }
}
