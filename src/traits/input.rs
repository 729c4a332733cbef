use crate::model::PadId;

/// Raw events delivered by the host input layer.
///
/// Key events carry the host key code (e.g. `"KeyA"`, `"Escape"`); the core
/// decides what, if anything, a code means. Mouse events are already
/// resolved to the pad under the cursor by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    KeyDown(String),
    KeyUp(String),
    MouseDown(PadId),
    MouseUp(PadId),
    /// The cursor left a pad while the button was held; treated as a
    /// release of that pad.
    MouseLeave(PadId),
    /// The user asked to rebind a pad's key.
    EditRequested(PadId),
    /// The sequence text field was submitted.
    SequenceSubmitted(String),
}
