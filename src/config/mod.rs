//! Static startup configuration.
//!
//! The instrument is configured once at startup: an ordered pad list with
//! default key assignments, the sample directory, and the sequence player
//! constants. JSON on disk; a missing file yields the built-in drum kit.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::model::Letter;

const CONFIG_FILE: &str = "padkit.json";

/// One pad entry: identity, display name, sample file, default key.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PadAssignment {
    pub id: String,
    pub name: String,
    pub file: String,
    /// Default bound letter (case-insensitive in the file).
    pub key: char,
}

impl PadAssignment {
    fn new(id: &str, name: &str, file: &str, key: char) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            file: file.to_string(),
            key,
        }
    }
}

/// Complete instrument configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InstrumentConfig {
    /// Ordered pad list; order defines pad ids.
    pub pads: Vec<PadAssignment>,
    /// Directory the sample files live in.
    pub sound_path: String,
    /// Gap between sequence steps in milliseconds.
    pub sequence_delay_ms: u64,
    /// Maximum sequence length as a multiple of the pad count.
    pub max_sequence_multiplier: usize,
}

impl Default for InstrumentConfig {
    fn default() -> Self {
        Self {
            pads: vec![
                PadAssignment::new("kick", "Kick", "kick.mp3", 'A'),
                PadAssignment::new("snare", "Snare", "snare.mp3", 'S'),
                PadAssignment::new("hihat_closed", "Hi-Hat (closed)", "hi-hat-reverse.mp3", 'D'),
                PadAssignment::new("hihat_open", "Hi-Hat (open)", "hi-hat.mp3", 'F'),
                PadAssignment::new("tom1", "Tom 1", "tom1.mp3", 'G'),
                PadAssignment::new("tom2", "Tom 2", "tom2.mp3", 'H'),
                PadAssignment::new("clap", "Clap", "clap.mp3", 'J'),
            ],
            sound_path: "./sounds/".to_string(),
            sequence_delay_ms: 400,
            max_sequence_multiplier: 2,
        }
    }
}

impl InstrumentConfig {
    /// Load configuration from the default location.
    pub fn load() -> Result<Self> {
        Self::load_from(default_path())
    }

    /// Load configuration from a specific path.
    ///
    /// A missing file yields the defaults; malformed entries are dropped
    /// during normalization rather than failing the load.
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        let mut config: Self = serde_json::from_str(&content)?;
        config.normalize();
        Ok(config)
    }

    /// Save configuration to a specific path.
    pub fn save_to<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// The gap between sequence steps.
    pub fn sequence_delay(&self) -> Duration {
        Duration::from_millis(self.sequence_delay_ms)
    }

    /// Maximum playable sequence length.
    pub fn max_sequence_len(&self) -> usize {
        self.pads.len() * self.max_sequence_multiplier
    }

    /// Drop pad entries with non-letter keys or with an id or key already
    /// used by an earlier entry, and restore out-of-range constants.
    fn normalize(&mut self) {
        let mut seen_ids: Vec<String> = Vec::new();
        let mut seen_keys: Vec<Letter> = Vec::new();
        self.pads.retain(|pad| {
            let Some(letter) = Letter::from_char(pad.key) else {
                warn!(id = %pad.id, key = %pad.key, "dropping pad with unbindable key");
                return false;
            };
            if seen_ids.contains(&pad.id) {
                warn!(id = %pad.id, "dropping pad with duplicate id");
                return false;
            }
            if seen_keys.contains(&letter) {
                warn!(id = %pad.id, key = %letter, "dropping pad with duplicate key");
                return false;
            }
            seen_ids.push(pad.id.clone());
            seen_keys.push(letter);
            true
        });

        if self.max_sequence_multiplier == 0 {
            warn!("max_sequence_multiplier of 0 replaced with default");
            self.max_sequence_multiplier = Self::default().max_sequence_multiplier;
        }
    }
}

/// Path of the per-user configuration file.
pub fn default_path() -> PathBuf {
    if let Some(proj_dirs) = ProjectDirs::from("com", "padkit", "padkit") {
        proj_dirs.config_dir().join(CONFIG_FILE)
    } else {
        PathBuf::from(CONFIG_FILE)
    }
}
