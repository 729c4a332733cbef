use anyhow::Result;

use crate::model::PadId;

/// Abstraction over sample playback backends.
/// Implementations: host audio stack (production), RecordingAudio (testing).
pub trait AudioDevice {
    /// Hard-restart the pad's sample: stop if playing, seek to the start,
    /// play. A trigger never overlaps a previous playback of the same
    /// sample.
    ///
    /// Implementations must tolerate being called on an already-stopped or
    /// not-yet-loaded sample. Errors are reported to the caller, which
    /// swallows them so the instrument stays responsive without sound.
    fn restart(&mut self, pad: PadId) -> Result<()>;
}
