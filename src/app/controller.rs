use std::time::Duration;

use anyhow::{Context, Result, bail};
use tracing::{debug, warn};

use crate::config::InstrumentConfig;
use crate::input::{KeyBindings, RebindOutcome, RebindSession, TriggerArbiter};
use crate::model::{Letter, Pad, PadId, TriggerSource};
use crate::sequence::{self, SequencePlayer, StepTransition};
use crate::traits::{AudioDevice, InputEvent, Renderer};

/// How long a rebind conflict notice stays on screen.
pub const NOTICE_DURATION: Duration = Duration::from_millis(1300);

/// Ties the pads, key bindings, trigger arbiter, rebind session and
/// sequence player together, and performs every renderer/audio side effect
/// the state machines call for.
///
/// All mutation flows through [`handle_event`](Self::handle_event) and
/// [`tick`](Self::tick), which the host drives from its single event loop;
/// there is no other writer of pad activation state.
pub struct InstrumentController<R, A> {
    pads: Vec<Pad>,
    bindings: KeyBindings,
    arbiter: TriggerArbiter,
    run: Option<SequencePlayer>,
    rebind: Option<RebindSession>,
    sequence_delay: Duration,
    max_sequence_len: usize,
    renderer: R,
    audio: A,
}

impl<R: Renderer, A: AudioDevice> InstrumentController<R, A> {
    /// Build the instrument from configuration: create the pads, install
    /// the default key for each one, and paint the initial key labels.
    pub fn new(config: &InstrumentConfig, renderer: R, audio: A) -> Result<Self> {
        let mut pads = Vec::with_capacity(config.pads.len());
        let mut bindings = KeyBindings::new();

        for (index, assignment) in config.pads.iter().enumerate() {
            let id = PadId(index);
            let letter = Letter::from_char(assignment.key).with_context(|| {
                format!("pad {:?} has unbindable default key {:?}", assignment.id, assignment.key)
            })?;
            if bindings.bind(id, letter).is_err() {
                bail!("pad {:?} reuses default key {letter}", assignment.id);
            }
            pads.push(Pad::new(
                id,
                assignment.name.clone(),
                format!("{}{}", config.sound_path, assignment.file),
            ));
        }

        let mut controller = Self {
            pads,
            bindings,
            arbiter: TriggerArbiter::new(),
            run: None,
            rebind: None,
            sequence_delay: config.sequence_delay(),
            max_sequence_len: config.max_sequence_len(),
            renderer,
            audio,
        };
        for pad in &controller.pads {
            let letter = controller.bindings.letter_of(pad.id).expect("bound above");
            controller.renderer.set_key_label(pad.id, letter);
        }
        Ok(controller)
    }

    /// Dispatch one raw input event.
    pub fn handle_event(&mut self, event: InputEvent, now: Duration) {
        match event {
            InputEvent::KeyDown(code) => self.on_key_down(&code),
            InputEvent::KeyUp(code) => self.on_key_up(&code),
            InputEvent::MouseDown(pad) => self.on_mouse_down(pad),
            InputEvent::MouseUp(pad) | InputEvent::MouseLeave(pad) => self.on_mouse_release(pad),
            InputEvent::EditRequested(pad) => self.open_rebind(pad),
            InputEvent::SequenceSubmitted(text) => self.play_sequence(&text, now),
        }
    }

    /// Advance the sequence run, if one is in progress. The host calls
    /// this on every loop iteration; between calls nothing else mutates
    /// pad activation state.
    pub fn tick(&mut self, now: Duration) {
        let transition = match self.run.as_mut() {
            Some(run) => run.update(now),
            None => return,
        };
        match transition {
            None => {}
            Some(StepTransition::Next { deactivate, activate }) => {
                self.disengage(deactivate);
                self.engage(activate);
            }
            Some(StepTransition::Finished { deactivate }) => {
                self.run = None;
                self.disengage(deactivate);
                self.finish_run();
            }
        }
    }

    /// Abort a running sequence: the current step is deactivated and the
    /// suspension released immediately.
    pub fn cancel_sequence(&mut self) {
        if let Some(run) = self.run.take() {
            debug!(remaining = run.remaining(), "sequence run cancelled");
            if let Some(pad) = run.current() {
                self.disengage(pad);
            }
            self.finish_run();
        }
    }

    /// The live input-boundary filter for the sequence text field:
    /// uppercase, keep only currently bound letters, clamp to the maximum
    /// playable length.
    pub fn sanitize_sequence_input(&self, text: &str) -> String {
        text.chars()
            .filter_map(Letter::from_char)
            .filter(|letter| self.bindings.resolve(*letter).is_some())
            .take(self.max_sequence_len)
            .map(Letter::as_char)
            .collect()
    }

    pub fn pads(&self) -> &[Pad] {
        &self.pads
    }

    pub fn bindings(&self) -> &KeyBindings {
        &self.bindings
    }

    pub fn is_sequence_running(&self) -> bool {
        self.run.is_some()
    }

    pub fn is_rebinding(&self) -> bool {
        self.rebind.is_some()
    }

    /// The renderer backend, e.g. for hosts that draw more than the core
    /// asks for.
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// The audio backend.
    pub fn audio(&self) -> &A {
        &self.audio
    }

    fn on_key_down(&mut self, code: &str) {
        // An open rebind session captures letter presses exclusively;
        // non-letter keys only act as session controls.
        if self.rebind.is_some() {
            if let Some(letter) = Letter::from_key_code(code) {
                if let Some(session) = self.rebind.as_mut() {
                    session.capture(letter);
                }
            } else if code == "Enter" {
                self.confirm_rebind();
            } else if code == "Escape" {
                self.cancel_rebind();
            }
            return;
        }

        let Some(letter) = Letter::from_key_code(code) else {
            return;
        };
        let Some(pad) = self.bindings.resolve(letter) else {
            return;
        };
        if self.arbiter.press(TriggerSource::Key, pad, Some(letter)) {
            self.engage(pad);
        }
    }

    fn on_key_up(&mut self, code: &str) {
        let Some(letter) = Letter::from_key_code(code) else {
            return;
        };
        if let Some(pad) = self.arbiter.release_key(letter) {
            self.disengage(pad);
        }
    }

    fn on_mouse_down(&mut self, pad: PadId) {
        if pad.index() >= self.pads.len() {
            warn!(%pad, "mouse press on unknown pad");
            return;
        }
        if self.arbiter.press(TriggerSource::Mouse, pad, None) {
            self.engage(pad);
        }
    }

    fn on_mouse_release(&mut self, pad: PadId) {
        if let Some(pad) = self.arbiter.release_mouse(pad) {
            self.disengage(pad);
        }
    }

    fn open_rebind(&mut self, pad: PadId) {
        if self.run.is_some() {
            debug!(%pad, "rebind request ignored during sequence run");
            return;
        }
        if pad.index() >= self.pads.len() || self.rebind.is_some() {
            return;
        }
        self.rebind = Some(RebindSession::open(pad, &self.bindings));
    }

    fn confirm_rebind(&mut self) {
        let Some(session) = self.rebind.take() else {
            return;
        };
        match session.confirm(&mut self.bindings) {
            RebindOutcome::Committed(letter) => {
                debug!(pad = %session.pad(), %letter, "key rebound");
                self.renderer.set_key_label(session.pad(), letter);
            }
            RebindOutcome::Conflict { letter, existing } => {
                debug!(pad = %session.pad(), %letter, %existing, "rebind conflict");
                self.renderer.show_conflict_notice(letter, NOTICE_DURATION);
                self.rebind = Some(session);
            }
            RebindOutcome::Abandoned => {}
        }
    }

    fn cancel_rebind(&mut self) {
        self.rebind = None;
    }

    fn play_sequence(&mut self, text: &str, now: Duration) {
        if self.run.is_some() {
            debug!("sequence submit ignored: run already in progress");
            return;
        }
        if self.rebind.is_some() {
            debug!("sequence submit ignored: rebind session open");
            return;
        }
        let steps = sequence::prepare(text, &self.bindings, self.max_sequence_len);
        let Some((player, first)) = SequencePlayer::start(steps, self.sequence_delay, now) else {
            debug!("sequence submit was unplayable, nothing to do");
            return;
        };

        // The run is the sole owner of pad activation: drop any held
        // manual trigger before taking the suspension.
        if let Some(held) = self.arbiter.take_active() {
            self.disengage(held.pad);
        }
        self.arbiter.suspend();
        self.renderer.set_controls_enabled(false);
        self.engage(first);
        self.run = Some(player);
    }

    fn finish_run(&mut self) {
        self.arbiter.resume();
        self.renderer.set_controls_enabled(true);
    }

    /// Activate a pad: visual mark, then a hard audio restart. Playback
    /// failures are logged and swallowed so the instrument stays
    /// responsive even without sound.
    fn engage(&mut self, pad: PadId) {
        self.renderer.show_pad_active(pad);
        if let Err(e) = self.audio.restart(pad) {
            warn!(%pad, error = %e, "sample restart failed");
        }
    }

    fn disengage(&mut self, pad: PadId) {
        self.renderer.show_pad_inactive(pad);
    }
}
