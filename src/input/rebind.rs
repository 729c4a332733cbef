use tracing::debug;

use crate::input::{BindError, KeyBindings};
use crate::model::{Letter, PadId};

/// Result of confirming a rebind session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RebindOutcome {
    /// The candidate was committed; repaint the pad's key label and close.
    Committed(Letter),
    /// The candidate belongs to another pad; notify and keep the session
    /// open so the user can pick a different key.
    Conflict { letter: Letter, existing: PadId },
    /// Nothing was captured; close without touching the registry.
    Abandoned,
}

/// One interactive key-capture flow for a single pad.
///
/// While a session is open, the controller routes every letter press here
/// instead of to the trigger path, so capturing a key never plays it.
#[derive(Debug)]
pub struct RebindSession {
    pad: PadId,
    candidate: Option<Letter>,
}

impl RebindSession {
    /// Open a session for `pad`; the candidate starts as the pad's current
    /// letter, so confirming immediately is a harmless no-op commit.
    pub fn open(pad: PadId, bindings: &KeyBindings) -> Self {
        debug!(%pad, "rebind session opened");
        Self {
            pad,
            candidate: bindings.letter_of(pad),
        }
    }

    pub fn pad(&self) -> PadId {
        self.pad
    }

    pub fn candidate(&self) -> Option<Letter> {
        self.candidate
    }

    /// Replace the candidate with a newly captured letter.
    pub fn capture(&mut self, letter: Letter) {
        self.candidate = Some(letter);
    }

    /// Try to commit the candidate through the registry. The caller closes
    /// the session on [`RebindOutcome::Committed`] and
    /// [`RebindOutcome::Abandoned`] and keeps it open on
    /// [`RebindOutcome::Conflict`].
    pub fn confirm(&self, bindings: &mut KeyBindings) -> RebindOutcome {
        let Some(letter) = self.candidate else {
            return RebindOutcome::Abandoned;
        };
        match bindings.bind(self.pad, letter) {
            Ok(()) => RebindOutcome::Committed(letter),
            Err(BindError::Conflict { letter, existing }) => {
                RebindOutcome::Conflict { letter, existing }
            }
        }
    }
}
