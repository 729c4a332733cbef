use std::fmt;
use std::path::PathBuf;

/// Handle for referencing configured pads.
///
/// Indexes into the pad list built from configuration at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PadId(pub usize);

impl PadId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for PadId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "pad#{}", self.0)
    }
}

/// One playable voice: identity and sample reference are immutable once
/// built from configuration. The bound key is not stored here; it lives in
/// the key binding registry and is the only thing about a pad that changes.
#[derive(Debug, Clone)]
pub struct Pad {
    pub id: PadId,
    pub display_name: String,
    pub sample_ref: PathBuf,
}

impl Pad {
    pub fn new(id: PadId, display_name: impl Into<String>, sample_ref: impl Into<PathBuf>) -> Self {
        Self {
            id,
            display_name: display_name.into(),
            sample_ref: sample_ref.into(),
        }
    }
}
