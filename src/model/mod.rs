//! Domain types for the pad instrument.
//!
//! This module provides:
//! - [`PadId`] / [`Pad`]: one playable voice and its handle
//! - [`Letter`]: the 26-symbol bindable key alphabet
//! - [`TriggerSource`]: which physical input produced a trigger

mod letter;
mod pad;

pub use letter::Letter;
pub use pad::{Pad, PadId};

/// Which physical input produced a trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TriggerSource {
    Mouse,
    Key,
}
