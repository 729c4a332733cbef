use std::time::Duration;

use crate::model::{Letter, PadId};

/// Abstraction over the visual surface.
/// Implementations: host UI (production), RecordingRenderer (testing).
///
/// The renderer only reflects state; it never mutates bindings or triggers.
pub trait Renderer {
    /// Mark a pad as visually engaged.
    fn show_pad_active(&mut self, pad: PadId);

    /// Clear a pad's engaged mark.
    fn show_pad_inactive(&mut self, pad: PadId);

    /// Repaint the key label on a pad after a successful rebind.
    fn set_key_label(&mut self, pad: PadId, letter: Letter);

    /// Show a transient notice that `letter` is already taken.
    fn show_conflict_notice(&mut self, letter: Letter, duration: Duration);

    /// Enable or disable the sequence input and play controls.
    fn set_controls_enabled(&mut self, enabled: bool);
}
