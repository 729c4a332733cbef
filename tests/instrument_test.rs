//! End-to-end tests driving the instrument controller through its public
//! API with recording backends and a mock clock.

use std::time::Duration;

use anyhow::Result;

use padkit::app::{InstrumentController, NOTICE_DURATION};
use padkit::config::InstrumentConfig;
use padkit::model::{Letter, PadId};
use padkit::traits::{AudioDevice, Clock, InputEvent, MockClock, Renderer};

#[derive(Debug, Clone, PartialEq, Eq)]
enum Op {
    Active(PadId),
    Inactive(PadId),
    KeyLabel(PadId, Letter),
    Notice(Letter),
    Controls(bool),
}

#[derive(Default)]
struct ScriptRenderer {
    ops: Vec<Op>,
}

impl Renderer for ScriptRenderer {
    fn show_pad_active(&mut self, pad: PadId) {
        self.ops.push(Op::Active(pad));
    }

    fn show_pad_inactive(&mut self, pad: PadId) {
        self.ops.push(Op::Inactive(pad));
    }

    fn set_key_label(&mut self, pad: PadId, letter: Letter) {
        self.ops.push(Op::KeyLabel(pad, letter));
    }

    fn show_conflict_notice(&mut self, letter: Letter, duration: Duration) {
        assert_eq!(duration, NOTICE_DURATION);
        self.ops.push(Op::Notice(letter));
    }

    fn set_controls_enabled(&mut self, enabled: bool) {
        self.ops.push(Op::Controls(enabled));
    }
}

#[derive(Default)]
struct ScriptAudio {
    restarts: Vec<PadId>,
}

impl AudioDevice for ScriptAudio {
    fn restart(&mut self, pad: PadId) -> Result<()> {
        self.restarts.push(pad);
        Ok(())
    }
}

type TestController = InstrumentController<ScriptRenderer, ScriptAudio>;

/// The stock seven-pad drum kit: kick on A, snare on S, max length 14.
fn instrument() -> TestController {
    InstrumentController::new(
        &InstrumentConfig::default(),
        ScriptRenderer::default(),
        ScriptAudio::default(),
    )
    .unwrap()
}

fn key_down(c: &mut TestController, clock: &MockClock, code: &str) {
    c.handle_event(InputEvent::KeyDown(code.into()), clock.now());
}

const KICK: PadId = PadId(0);
const SNARE: PadId = PadId(1);
const DELAY: Duration = Duration::from_millis(400);

fn letter(ch: char) -> Letter {
    Letter::from_char(ch).unwrap()
}

/// Every pad gets its default key label painted at startup.
#[test]
fn test_startup_paints_all_key_labels() {
    let c = instrument();
    let labels: Vec<_> = c
        .renderer()
        .ops
        .iter()
        .filter_map(|op| match op {
            Op::KeyLabel(pad, l) => Some((*pad, *l)),
            _ => None,
        })
        .collect();
    assert_eq!(labels.len(), 7);
    assert_eq!(labels[0], (KICK, letter('A')));
    assert_eq!(labels[1], (SNARE, letter('S')));
}

/// "ASZQA" with A→kick and S→snare plays kick, snare, kick with one step
/// active at a time, and releases the suspension afterwards.
#[test]
fn test_sequence_run_plays_filtered_steps_in_order() {
    let mut c = instrument();
    let clock = MockClock::new();
    let before = c.renderer().ops.len();

    c.handle_event(InputEvent::SequenceSubmitted("ASZQA".into()), clock.now());
    assert!(c.is_sequence_running());

    for _ in 0..3 {
        clock.advance(DELAY);
        c.tick(clock.now());
    }

    assert!(!c.is_sequence_running());
    assert_eq!(c.audio().restarts, vec![KICK, SNARE, KICK]);
    assert_eq!(
        &c.renderer().ops[before..],
        &[
            Op::Controls(false),
            Op::Active(KICK),
            Op::Inactive(KICK),
            Op::Active(SNARE),
            Op::Inactive(SNARE),
            Op::Active(KICK),
            Op::Inactive(KICK),
            Op::Controls(true),
        ]
    );
}

/// A bound keydown during a run produces no activation and no restart.
#[test]
fn test_manual_input_rejected_during_run() {
    let mut c = instrument();
    let clock = MockClock::new();

    c.handle_event(InputEvent::SequenceSubmitted("AS".into()), clock.now());
    let restarts_during_submit = c.audio().restarts.len();

    key_down(&mut c, &clock, "KeyS");
    c.handle_event(InputEvent::MouseDown(SNARE), clock.now());
    c.handle_event(InputEvent::EditRequested(KICK), clock.now());
    assert!(!c.is_rebinding());
    assert_eq!(c.audio().restarts.len(), restarts_during_submit);

    // The run itself is unaffected and finishes normally.
    clock.advance(DELAY);
    c.tick(clock.now());
    clock.advance(DELAY);
    c.tick(clock.now());
    assert!(!c.is_sequence_running());
    assert_eq!(c.audio().restarts, vec![KICK, SNARE]);
}

/// Submitting an empty or fully-unbound string never suspends the
/// instrument or touches the controls.
#[test]
fn test_unplayable_sequence_is_a_noop() {
    let mut c = instrument();
    let clock = MockClock::new();
    let before = c.renderer().ops.len();

    c.handle_event(InputEvent::SequenceSubmitted(String::new()), clock.now());
    c.handle_event(InputEvent::SequenceSubmitted("zqzq!! 123".into()), clock.now());

    assert!(!c.is_sequence_running());
    assert_eq!(c.renderer().ops.len(), before);
    assert!(c.audio().restarts.is_empty());

    // Manual input still works immediately afterwards.
    key_down(&mut c, &clock, "KeyA");
    assert_eq!(c.audio().restarts, vec![KICK]);
}

/// The sequence is truncated to pad_count * multiplier steps (14 for the
/// stock kit).
#[test]
fn test_sequence_truncated_to_max_length() {
    let mut c = instrument();
    let clock = MockClock::new();

    c.handle_event(InputEvent::SequenceSubmitted("A".repeat(30)), clock.now());
    for _ in 0..30 {
        clock.advance(DELAY);
        c.tick(clock.now());
    }

    assert_eq!(c.audio().restarts.len(), 14);
    assert!(!c.is_sequence_running());
}

/// A manual trigger held when a run starts is released; it cannot leak a
/// stuck pad into or past the run.
#[test]
fn test_run_start_releases_held_trigger() {
    let mut c = instrument();
    let clock = MockClock::new();

    c.handle_event(InputEvent::MouseDown(SNARE), clock.now());
    c.handle_event(InputEvent::SequenceSubmitted("A".into()), clock.now());
    assert!(c.renderer().ops.contains(&Op::Inactive(SNARE)));

    clock.advance(DELAY);
    c.tick(clock.now());
    assert!(!c.is_sequence_running());

    // The stale mouse-up after the run matches nothing.
    let before = c.renderer().ops.len();
    c.handle_event(InputEvent::MouseUp(SNARE), clock.now());
    assert_eq!(c.renderer().ops.len(), before);
}

/// Mouse-leave releases the pad the mouse press engaged, but leaving any
/// other pad changes nothing.
#[test]
fn test_mouse_leave_release_semantics() {
    let mut c = instrument();
    let clock = MockClock::new();

    c.handle_event(InputEvent::MouseDown(KICK), clock.now());
    c.handle_event(InputEvent::MouseLeave(SNARE), clock.now());
    assert!(!c.renderer().ops.contains(&Op::Inactive(KICK)));

    c.handle_event(InputEvent::MouseLeave(KICK), clock.now());
    assert!(c.renderer().ops.contains(&Op::Inactive(KICK)));

    // Released; a new press is accepted again.
    c.handle_event(InputEvent::MouseDown(SNARE), clock.now());
    assert_eq!(c.audio().restarts, vec![KICK, SNARE]);
}

/// Full rebind flow: conflict notice on a taken key, then a successful
/// commit, after which the new key triggers the pad.
#[test]
fn test_rebind_flow_end_to_end() {
    let mut c = instrument();
    let clock = MockClock::new();

    c.handle_event(InputEvent::EditRequested(KICK), clock.now());
    key_down(&mut c, &clock, "KeyS");
    key_down(&mut c, &clock, "Enter");

    assert!(c.is_rebinding());
    assert!(c.renderer().ops.contains(&Op::Notice(letter('S'))));
    // Capturing and confirming never played anything.
    assert!(c.audio().restarts.is_empty());

    key_down(&mut c, &clock, "KeyQ");
    key_down(&mut c, &clock, "Enter");
    assert!(!c.is_rebinding());
    assert!(c.renderer().ops.contains(&Op::KeyLabel(KICK, letter('Q'))));

    // The old key is free, the new one triggers the kick.
    key_down(&mut c, &clock, "KeyA");
    assert!(c.audio().restarts.is_empty());
    key_down(&mut c, &clock, "KeyQ");
    assert_eq!(c.audio().restarts, vec![KICK]);
}

/// Cancelling a run mid-flight deactivates the current step and returns
/// the instrument to manual control.
#[test]
fn test_cancel_sequence_restores_manual_control() {
    let mut c = instrument();
    let clock = MockClock::new();

    c.handle_event(InputEvent::SequenceSubmitted("ASA".into()), clock.now());
    clock.advance(DELAY);
    c.tick(clock.now());
    assert!(c.is_sequence_running());

    c.cancel_sequence();
    assert!(!c.is_sequence_running());
    assert!(c.renderer().ops.contains(&Op::Inactive(SNARE)));
    assert_eq!(c.renderer().ops.last(), Some(&Op::Controls(true)));

    key_down(&mut c, &clock, "KeyA");
    assert_eq!(c.audio().restarts, vec![KICK, SNARE, KICK]);
}
