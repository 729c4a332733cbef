use std::collections::HashMap;

use thiserror::Error;

use crate::model::{Letter, PadId};

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum BindError {
    /// The requested letter already belongs to a different pad.
    #[error("key {letter} is already bound to {existing}")]
    Conflict { letter: Letter, existing: PadId },
}

/// Bijective registry between letters and pads.
///
/// Both directions live behind this one API so every mutation updates the
/// two maps together: among currently bound letters, every pad has exactly
/// one letter and every letter maps back to exactly one pad. Non-letter
/// keys can never appear here because only [`Letter`] values exist.
#[derive(Debug, Clone, Default)]
pub struct KeyBindings {
    letter_to_pad: HashMap<Letter, PadId>,
    pad_to_letter: HashMap<PadId, Letter>,
}

impl KeyBindings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `pad` to `letter`, releasing the pad's previous letter.
    ///
    /// Fails with [`BindError::Conflict`] when the letter belongs to a
    /// different pad, leaving both pads' bindings untouched. Rebinding a
    /// pad to the letter it already holds is a no-op success.
    pub fn bind(&mut self, pad: PadId, letter: Letter) -> Result<(), BindError> {
        match self.letter_to_pad.get(&letter) {
            Some(&existing) if existing == pad => return Ok(()),
            Some(&existing) => return Err(BindError::Conflict { letter, existing }),
            None => {}
        }
        if let Some(old) = self.pad_to_letter.insert(pad, letter) {
            self.letter_to_pad.remove(&old);
        }
        self.letter_to_pad.insert(letter, pad);
        Ok(())
    }

    /// The pad currently bound to `letter`, if any.
    pub fn resolve(&self, letter: Letter) -> Option<PadId> {
        self.letter_to_pad.get(&letter).copied()
    }

    /// The letter currently bound to `pad`. Always present once the
    /// instrument has been initialized from configuration.
    pub fn letter_of(&self, pad: PadId) -> Option<Letter> {
        self.pad_to_letter.get(&pad).copied()
    }

    /// Number of bound pads.
    pub fn len(&self) -> usize {
        self.pad_to_letter.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pad_to_letter.is_empty()
    }
}
