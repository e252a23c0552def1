//! Core domain entities
//!
//! Pure data structures with no I/O. The menu types reference the console
//! port only in the signature of their actions.

mod account;
pub mod menu;
pub mod result;

pub use account::{Account, CARD_DRAW_RANGE, CARD_PREFIX, PIN_DRAW_RANGE};
pub use menu::{Action, Command, Menu, MenuOutcome};
