use std::time::Duration;

use tracing::debug;

use crate::model::PadId;

/// Transition produced by advancing a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepTransition {
    /// The step's delay elapsed; deactivate it and activate the next one.
    Next { deactivate: PadId, activate: PadId },
    /// The last step's delay elapsed; deactivate it, the run is over.
    Finished { deactivate: PadId },
}

/// A step-indexed auto-play run.
///
/// Exists only while a sequence is playing; the controller holds the
/// arbiter's suspension for exactly as long as this value lives. One step
/// is in flight at a time: an activation strictly precedes its delay, which
/// strictly precedes the deactivation, which precedes the next activation.
#[derive(Debug)]
pub struct SequencePlayer {
    steps: Vec<PadId>,
    cursor: usize,
    step_started: Duration,
    delay: Duration,
}

impl SequencePlayer {
    /// Begin a run. Returns the player and the first pad to activate, or
    /// `None` for an empty step list (an unplayable sequence never enters
    /// the running state).
    pub fn start(steps: Vec<PadId>, delay: Duration, now: Duration) -> Option<(Self, PadId)> {
        let first = *steps.first()?;
        debug!(steps = steps.len(), ?delay, "sequence run started");
        Some((
            Self {
                steps,
                cursor: 0,
                step_started: now,
                delay,
            },
            first,
        ))
    }

    /// Advance the run. Yields a transition once the current step's delay
    /// has elapsed, at most one per call; the caller applies the pad
    /// deactivation/activation side effects in the order given. After the
    /// last step has finished the run stays idle: further polls yield
    /// `None`.
    pub fn update(&mut self, now: Duration) -> Option<StepTransition> {
        let finished = *self.steps.get(self.cursor)?;
        if now.saturating_sub(self.step_started) < self.delay {
            return None;
        }
        self.cursor += 1;
        if self.cursor < self.steps.len() {
            self.step_started = now;
            Some(StepTransition::Next {
                deactivate: finished,
                activate: self.steps[self.cursor],
            })
        } else {
            debug!("sequence run finished");
            Some(StepTransition::Finished {
                deactivate: finished,
            })
        }
    }

    /// The pad currently activated by the run, or `None` once every step
    /// has finished.
    pub fn current(&self) -> Option<PadId> {
        self.steps.get(self.cursor).copied()
    }

    /// Steps not yet finished, including the current one.
    pub fn remaining(&self) -> usize {
        self.steps.len().saturating_sub(self.cursor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DELAY: Duration = Duration::from_millis(400);

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    #[test]
    fn test_empty_steps_do_not_start() {
        assert!(SequencePlayer::start(Vec::new(), DELAY, Duration::ZERO).is_none());
    }

    #[test]
    fn test_no_transition_before_delay() {
        let (mut player, first) =
            SequencePlayer::start(vec![PadId(0), PadId(1)], DELAY, Duration::ZERO).unwrap();
        assert_eq!(first, PadId(0));
        assert_eq!(player.update(ms(399)), None);
        assert_eq!(player.current(), Some(PadId(0)));
    }

    /// Steps are strictly sequential: deactivate, then activate the next,
    /// with exactly one pad in flight at a time.
    #[test]
    fn test_full_run_ordering() {
        let steps = vec![PadId(0), PadId(1), PadId(0)];
        let (mut player, first) = SequencePlayer::start(steps, DELAY, Duration::ZERO).unwrap();
        assert_eq!(first, PadId(0));
        assert_eq!(player.remaining(), 3);

        assert_eq!(
            player.update(ms(400)),
            Some(StepTransition::Next {
                deactivate: PadId(0),
                activate: PadId(1)
            })
        );
        // The delay restarts from the transition; an immediate poll is idle.
        assert_eq!(player.update(ms(400)), None);

        assert_eq!(
            player.update(ms(800)),
            Some(StepTransition::Next {
                deactivate: PadId(1),
                activate: PadId(0)
            })
        );
        assert_eq!(
            player.update(ms(1200)),
            Some(StepTransition::Finished {
                deactivate: PadId(0)
            })
        );
    }

    /// Polling past the end of a run must stay inert rather than panic:
    /// the host keeps ticking until it observes the finish.
    #[test]
    fn test_update_after_finish_is_idle() {
        let (mut player, _) =
            SequencePlayer::start(vec![PadId(0)], DELAY, Duration::ZERO).unwrap();
        assert_eq!(
            player.update(ms(400)),
            Some(StepTransition::Finished {
                deactivate: PadId(0)
            })
        );
        assert_eq!(player.update(ms(800)), None);
        assert_eq!(player.update(ms(5000)), None);
        assert_eq!(player.current(), None);
        assert_eq!(player.remaining(), 0);
    }

    #[test]
    fn test_single_step_run() {
        let (mut player, first) =
            SequencePlayer::start(vec![PadId(2)], DELAY, ms(100)).unwrap();
        assert_eq!(first, PadId(2));
        assert_eq!(player.update(ms(499)), None);
        assert_eq!(
            player.update(ms(500)),
            Some(StepTransition::Finished {
                deactivate: PadId(2)
            })
        );
    }
}
