//! Event dispatch wiring the core state machines to the host backends.

mod controller;

pub use controller::{InstrumentController, NOTICE_DURATION};
