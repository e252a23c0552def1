//! Adapter implementations
//!
//! Adapters implement the port traits with concrete technologies. The
//! terminal console lives in the CLI crate; the scripted console here backs
//! tests and embedding.

pub mod scripted;

pub use scripted::{ScriptedConsole, Transcript};
