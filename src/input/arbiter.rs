use tracing::debug;

use crate::model::{Letter, PadId, TriggerSource};

/// The single in-flight press for the whole instrument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActiveTrigger {
    pub source: TriggerSource,
    pub pad: PadId,
    /// The letter the press arrived on; `None` for mouse presses.
    pub letter: Option<Letter>,
}

/// Arbitration for manual triggers.
///
/// The instrument is monophonic with respect to triggering: one process-wide
/// slot holds the active press, and new presses are ignored while it is
/// occupied. While the sequence player holds the suspension, every manual
/// transition is ignored outright.
#[derive(Debug, Default)]
pub struct TriggerArbiter {
    active: Option<ActiveTrigger>,
    suspended: bool,
}

impl TriggerArbiter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attempt a press. Returns true when the trigger was accepted and the
    /// caller should engage the pad (visual mark + audio restart).
    pub fn press(&mut self, source: TriggerSource, pad: PadId, letter: Option<Letter>) -> bool {
        if self.suspended {
            debug!(?source, %pad, "press ignored: sequence run owns the instrument");
            return false;
        }
        if let Some(active) = self.active {
            debug!(?source, %pad, held = %active.pad, "press ignored: trigger already active");
            return false;
        }
        self.active = Some(ActiveTrigger {
            source,
            pad,
            letter,
        });
        true
    }

    /// Release a key press. Clears the slot and returns the pad to
    /// disengage only when the active trigger is a key press made on this
    /// very letter; anything else leaves the slot unchanged.
    pub fn release_key(&mut self, letter: Letter) -> Option<PadId> {
        if self.suspended {
            return None;
        }
        match self.active {
            Some(t) if t.source == TriggerSource::Key && t.letter == Some(letter) => {
                self.active = None;
                Some(t.pad)
            }
            _ => None,
        }
    }

    /// Release a mouse press on `pad`. Clears the slot and returns the pad
    /// to disengage only when the active trigger is a mouse press on that
    /// same pad. Mouse-leave uses this too, which makes leaving a pad that
    /// is not the active source a no-op.
    pub fn release_mouse(&mut self, pad: PadId) -> Option<PadId> {
        if self.suspended {
            return None;
        }
        match self.active {
            Some(t) if t.source == TriggerSource::Mouse && t.pad == pad => {
                self.active = None;
                Some(t.pad)
            }
            _ => None,
        }
    }

    /// Clear and return the active trigger, if any.
    pub fn take_active(&mut self) -> Option<ActiveTrigger> {
        self.active.take()
    }

    pub fn active(&self) -> Option<ActiveTrigger> {
        self.active
    }

    pub fn is_suspended(&self) -> bool {
        self.suspended
    }

    /// Block all manual transitions. Held by the sequence player for the
    /// duration of a run.
    pub fn suspend(&mut self) {
        self.suspended = true;
    }

    pub fn resume(&mut self) {
        self.suspended = false;
    }
}
