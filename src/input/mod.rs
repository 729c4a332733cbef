//! Input arbitration and key binding.
//!
//! This module provides:
//! - [`KeyBindings`]: bijective letter-to-pad registry with conflict-checked rebinding
//! - [`TriggerArbiter`]: the single active-trigger slot and run suspension
//! - [`RebindSession`]: interactive key capture for one pad

mod arbiter;
mod bindings;
mod rebind;

pub use arbiter::{ActiveTrigger, TriggerArbiter};
pub use bindings::{BindError, KeyBindings};
pub use rebind::{RebindOutcome, RebindSession};
