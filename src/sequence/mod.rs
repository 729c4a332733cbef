//! Sequence validation and the timed auto-player.
//!
//! This module provides:
//! - [`prepare`]: turns the raw typed string into a playable step list
//! - [`SequencePlayer`]: the step-indexed run that owns the instrument
//!   while it plays

mod player;

pub use player::{SequencePlayer, StepTransition};

use crate::input::KeyBindings;
use crate::model::{Letter, PadId};

/// Turn raw typed input into a playable step list: uppercase-normalize,
/// drop characters that are not letters bound to some pad, truncate to
/// `max_len`. Dropping is silent; an unplayable string simply comes back
/// empty.
pub fn prepare(raw: &str, bindings: &KeyBindings, max_len: usize) -> Vec<PadId> {
    raw.chars()
        .filter_map(Letter::from_char)
        .filter_map(|letter| bindings.resolve(letter))
        .take(max_len)
        .collect()
}
