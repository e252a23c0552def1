//! Menu domain model - commands and their outcomes

use crate::domain::result::Result;
use crate::ports::Console;

/// What a menu action asks of the loop that dispatched it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOutcome {
    /// Show the menu again
    Continue,
    /// Leave the current menu loop only
    ExitMenu,
    /// Leave every menu loop; the session is over
    ExitProcess,
}

impl MenuOutcome {
    /// True when the dispatching loop has to stop
    pub fn terminates(self) -> bool {
        !matches!(self, MenuOutcome::Continue)
    }
}

/// Signature shared by every menu action
pub type Action<M> = fn(&mut M, &mut dyn Console) -> Result<MenuOutcome>;

/// A numbered menu entry: a label and the action bound to it
pub struct Command<M> {
    pub label: &'static str,
    pub action: Action<M>,
}

impl<M> Command<M> {
    pub fn new(label: &'static str, action: Action<M>) -> Self {
        Self { label, action }
    }
}

impl<M> Clone for Command<M> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<M> Copy for Command<M> {}

/// Anything that presents a list of numbered commands
pub trait Menu: Sized {
    /// Commands in display order; the index is the selection number
    fn commands(&self) -> Vec<Command<Self>>;
}
