//! Interfaces to the host environment.
//!
//! The core never draws, plays audio, or reads devices directly; it goes
//! through these traits so hosts and tests can supply their own backends.

mod audio;
mod input;
mod renderer;
mod time;

pub use audio::AudioDevice;
pub use input::InputEvent;
pub use renderer::Renderer;
pub use time::{Clock, MockClock, SystemClock};
