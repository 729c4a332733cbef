//! Shared fakes for unit tests: recording backends and a small fixed
//! configuration.

use std::time::Duration;

use anyhow::{Result, anyhow};

use crate::config::{InstrumentConfig, PadAssignment};
use crate::model::{Letter, PadId};
use crate::traits::{AudioDevice, Renderer};

/// Everything the core asked the renderer to do, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderOp {
    Active(PadId),
    Inactive(PadId),
    KeyLabel(PadId, Letter),
    Notice(Letter, Duration),
    ControlsEnabled(bool),
}

#[derive(Debug, Default)]
pub struct RecordingRenderer {
    pub ops: Vec<RenderOp>,
}

impl Renderer for RecordingRenderer {
    fn show_pad_active(&mut self, pad: PadId) {
        self.ops.push(RenderOp::Active(pad));
    }

    fn show_pad_inactive(&mut self, pad: PadId) {
        self.ops.push(RenderOp::Inactive(pad));
    }

    fn set_key_label(&mut self, pad: PadId, letter: Letter) {
        self.ops.push(RenderOp::KeyLabel(pad, letter));
    }

    fn show_conflict_notice(&mut self, letter: Letter, duration: Duration) {
        self.ops.push(RenderOp::Notice(letter, duration));
    }

    fn set_controls_enabled(&mut self, enabled: bool) {
        self.ops.push(RenderOp::ControlsEnabled(enabled));
    }
}

#[derive(Debug, Default)]
pub struct RecordingAudio {
    pub restarts: Vec<PadId>,
    fail: bool,
}

impl RecordingAudio {
    /// An audio device whose every restart fails, for exercising the
    /// swallow-and-log policy.
    pub fn failing() -> Self {
        Self {
            restarts: Vec::new(),
            fail: true,
        }
    }
}

impl AudioDevice for RecordingAudio {
    fn restart(&mut self, pad: PadId) -> Result<()> {
        if self.fail {
            return Err(anyhow!("sample for {pad} not loaded"));
        }
        self.restarts.push(pad);
        Ok(())
    }
}

/// Two pads, kick on A and snare on S, with the stock delay constants.
pub fn test_config() -> InstrumentConfig {
    InstrumentConfig {
        pads: vec![
            PadAssignment {
                id: "kick".into(),
                name: "Kick".into(),
                file: "kick.mp3".into(),
                key: 'A',
            },
            PadAssignment {
                id: "snare".into(),
                name: "Snare".into(),
                file: "snare.mp3".into(),
                key: 'S',
            },
        ],
        sound_path: "./sounds/".into(),
        sequence_delay_ms: 400,
        max_sequence_multiplier: 2,
    }
}
