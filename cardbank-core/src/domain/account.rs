//! Account domain model

use rand::{CryptoRng, Rng};

/// Every card number starts with this issuer prefix
pub const CARD_PREFIX: &str = "40";

/// Card suffixes are drawn from `0..CARD_DRAW_RANGE` and padded to 5 digits
pub const CARD_DRAW_RANGE: u32 = 1_000;

/// PINs are drawn from `0..PIN_DRAW_RANGE` and padded to 4 digits
pub const PIN_DRAW_RANGE: u32 = 10_000;

/// A card account held by the banking system
///
/// The PIN is kept in plain text for the lifetime of the process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    pub card: String,
    pub pin: String,
}

impl Account {
    /// Generate an account with a random card number and PIN
    ///
    /// The card suffix only needs to be fast, so any generator will do. The
    /// PIN is a secret and must come from a cryptographically secure one.
    pub fn generate<C, P>(card_rng: &mut C, pin_rng: &mut P) -> Self
    where
        C: Rng,
        P: Rng + CryptoRng,
    {
        let card_draw = card_rng.gen_range(0..CARD_DRAW_RANGE);
        let pin_draw = pin_rng.gen_range(0..PIN_DRAW_RANGE);
        Self::from_draws(card_draw, pin_draw)
    }

    /// Build an account from already drawn numbers
    pub fn from_draws(card_draw: u32, pin_draw: u32) -> Self {
        Self {
            card: format!("{}{:05}", CARD_PREFIX, card_draw),
            pin: format!("{:04}", pin_draw),
        }
    }

    /// Compare a candidate PIN with the stored one
    pub fn matches_pin(&self, pin: &str) -> bool {
        self.pin == pin
    }

    /// The two credential lines shown to the user after creation
    pub fn dump_lines(&self) -> [String; 2] {
        [
            format!("Your card number: {}", self.card),
            format!("Your PIN: {}", self.pin),
        ]
    }
}
