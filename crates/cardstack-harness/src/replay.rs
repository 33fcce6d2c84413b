//! Deterministic replay of a gesture script.
//!
//! The replay owns a simulated clock anchored at a single real `Instant`.
//! Between gestures, and after the last one, the engine is stepped at a
//! fixed frame interval for as long as it reports motion, exactly as a
//! display-synchronized driver would. Every listener callback is stamped
//! with the simulated time at which it fired.

use std::time::Duration;

use cardstack_core::{
    Direction, Offset, Phase, Size, StackConfig, StackEngine, StackEvent, StackListener,
    VecStack,
};
use serde::Serialize;
use web_time::Instant;

use crate::error::{HarnessError, Result};
use crate::script::GestureScript;

/// Longest accepted simulated frame interval.
pub const MAX_FRAME: Duration = Duration::from_secs(1);

/// Container and clock settings for a replay.
#[derive(Debug, Clone, PartialEq)]
pub struct ReplayOptions {
    pub size: Size,
    pub items: u32,
    pub frame: Duration,
    /// Upper bound on frames stepped after the last gesture.
    pub max_settle_frames: u64,
}

impl Default for ReplayOptions {
    fn default() -> Self {
        Self {
            size: Size::new(1080.0, 1920.0),
            items: 5,
            frame: Duration::from_millis(16),
            max_settle_frames: 10_000,
        }
    }
}

impl ReplayOptions {
    pub fn validate(&self) -> Result<()> {
        if !(self.size.width.is_finite() && self.size.width > 0.0) {
            return Err(HarnessError::invalid(format!(
                "width must be positive (got {})",
                self.size.width
            )));
        }
        if !(self.size.height.is_finite() && self.size.height > 0.0) {
            return Err(HarnessError::invalid(format!(
                "height must be positive (got {})",
                self.size.height
            )));
        }
        if self.frame.is_zero() {
            return Err(HarnessError::invalid("frame interval must be at least 1ms"));
        }
        if self.frame > MAX_FRAME {
            return Err(HarnessError::invalid(format!(
                "frame interval must be at most {}ms (got {}ms)",
                MAX_FRAME.as_millis(),
                self.frame.as_millis()
            )));
        }
        Ok(())
    }
}

/// A listener callback stamped with simulated time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TimedEvent {
    pub at_ms: u64,
    pub event: StackEvent,
}

/// Outcome of a replay.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReplayReport {
    pub script: Option<String>,
    pub events: Vec<TimedEvent>,
    /// Item labels, back to front.
    pub final_order: Vec<u32>,
    pub final_offset: Offset,
    pub final_phase: Phase,
    pub frames: u64,
    pub elapsed_ms: u64,
}

impl ReplayReport {
    /// Directions of every sweep, in order.
    #[must_use]
    pub fn sweeps(&self) -> Vec<Direction> {
        self.events
            .iter()
            .filter_map(|timed| match timed.event {
                StackEvent::Sweep(direction) => Some(direction),
                _ => None,
            })
            .collect()
    }
}

/// Listener that records events against the replay clock.
#[derive(Debug, Default)]
struct Recorder {
    now_ms: u64,
    events: Vec<TimedEvent>,
}

impl Recorder {
    fn record(&mut self, event: StackEvent) {
        self.events.push(TimedEvent {
            at_ms: self.now_ms,
            event,
        });
    }
}

impl StackListener for Recorder {
    fn on_hover(&mut self, direction: Direction) {
        self.record(StackEvent::Hover(direction));
    }

    fn on_sweep(&mut self, direction: Direction) {
        self.record(StackEvent::Sweep(direction));
    }

    fn on_cancel(&mut self) {
        self.record(StackEvent::Cancel);
    }
}

struct Clock {
    origin: Instant,
    now_ms: u64,
    frame_ms: u64,
    frames: u64,
}

impl Clock {
    fn instant(&self) -> Instant {
        self.origin + Duration::from_millis(self.now_ms)
    }
}

type Engine = StackEngine<VecStack<u32>, Recorder>;

fn tick(engine: &mut Engine, clock: &mut Clock) {
    clock.now_ms = clock.now_ms.saturating_add(clock.frame_ms);
    clock.frames += 1;
    engine.listener_mut().now_ms = clock.now_ms;
    engine.step(clock.instant());
}

/// Replay `script` against a fresh stack of `options.items` items labelled
/// `0..items` (item `items - 1` starts at the front).
pub fn replay(
    script: &GestureScript,
    config: StackConfig,
    options: &ReplayOptions,
) -> Result<ReplayReport> {
    options.validate()?;
    script.validate()?;

    let host = VecStack::new(options.size, (0..options.items).collect());
    let mut engine = StackEngine::with_listener(host, config, Recorder::default());
    let mut clock = Clock {
        origin: Instant::now(),
        now_ms: 0,
        frame_ms: u64::try_from(options.frame.as_millis()).unwrap_or(u64::MAX).max(1),
        frames: 0,
    };

    tracing::info!(
        script = script.name.as_deref().unwrap_or("<unnamed>"),
        steps = script.steps.len(),
        items = options.items,
        "replay started"
    );

    for step in &script.steps {
        while engine.is_animating()
            && clock.now_ms.saturating_add(clock.frame_ms) <= step.at_ms
        {
            tick(&mut engine, &mut clock);
        }
        clock.now_ms = step.at_ms;
        engine.listener_mut().now_ms = clock.now_ms;
        tracing::debug!(at_ms = step.at_ms, gesture = step.gesture.name(), "gesture");
        engine.handle(step.gesture, clock.instant());
    }

    let mut settle_frames = 0u64;
    while engine.is_animating() {
        if settle_frames >= options.max_settle_frames {
            tracing::warn!(frames = settle_frames, "replay did not settle");
            return Err(HarnessError::Unsettled {
                frames: settle_frames,
            });
        }
        tick(&mut engine, &mut clock);
        settle_frames += 1;
    }

    let final_offset = engine.offset();
    let final_phase = engine.phase();
    let (host, recorder) = engine.into_parts();
    let report = ReplayReport {
        script: script.name.clone(),
        events: recorder.events,
        final_order: host.into_items(),
        final_offset,
        final_phase,
        frames: clock.frames,
        elapsed_ms: clock.now_ms,
    };

    tracing::info!(
        events = report.events.len(),
        frames = report.frames,
        elapsed_ms = report.elapsed_ms,
        "replay finished"
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use cardstack_core::GestureEvent;

    use super::*;
    use crate::script::ScriptStep;

    fn step(at_ms: u64, gesture: GestureEvent) -> ScriptStep {
        ScriptStep { at_ms, gesture }
    }

    fn options() -> ReplayOptions {
        ReplayOptions {
            size: Size::new(1000.0, 1000.0),
            items: 3,
            ..ReplayOptions::default()
        }
    }

    #[test]
    fn sweep_is_timestamped_and_removes_front() {
        let script = GestureScript {
            name: Some("swipe".into()),
            steps: vec![
                step(0, GestureEvent::Down),
                step(16, GestureEvent::Scroll { dx: 500.0, dy: 0.0 }),
                step(32, GestureEvent::Up),
            ],
        };
        let report = replay(&script, StackConfig::default(), &options()).expect("replay");

        assert_eq!(report.events[0], TimedEvent {
            at_ms: 16,
            event: StackEvent::Hover(Direction::Left),
        });
        assert_eq!(report.sweeps(), vec![Direction::Left]);
        assert!(report.events[1].at_ms > 32);
        assert!(report.events[1].at_ms <= 32 + 200 + 16);
        assert_eq!(report.final_order, vec![0, 1]);
        assert_eq!(report.final_offset, Offset::ZERO);
        assert_eq!(report.final_phase, Phase::Idle);
    }

    #[test]
    fn frames_run_between_gestures_only_while_animating() {
        let script = GestureScript {
            name: None,
            steps: vec![
                step(0, GestureEvent::Down),
                step(10, GestureEvent::Scroll { dx: 80.0, dy: 0.0 }),
                step(1000, GestureEvent::Up),
            ],
        };
        let report = replay(&script, StackConfig::default(), &options()).expect("replay");
        // Only the 200ms spring-back after release needs frames.
        assert!(report.frames <= 14, "frames = {}", report.frames);
        assert!(report.events.is_empty());
        assert_eq!(report.final_order, vec![0, 1, 2]);
    }

    #[test]
    fn zero_frame_interval_is_rejected() {
        let opts = ReplayOptions {
            frame: Duration::ZERO,
            ..options()
        };
        let err = replay(&GestureScript::default(), StackConfig::default(), &opts)
            .expect_err("zero frame");
        assert_eq!(err.exit_code(), 64);
    }

    #[test]
    fn oversized_frame_interval_is_rejected() {
        let script = GestureScript {
            name: None,
            steps: vec![
                step(5, GestureEvent::Down),
                step(5, GestureEvent::Scroll { dx: 100.0, dy: 0.0 }),
                step(5, GestureEvent::Up),
            ],
        };
        let opts = ReplayOptions {
            frame: Duration::from_millis(u64::MAX),
            ..options()
        };
        match replay(&script, StackConfig::default(), &opts) {
            Err(HarnessError::InvalidArgument { message }) => {
                assert!(message.contains("at most 1000ms"), "{message}");
            }
            other => panic!("expected InvalidArgument, got {other:?}"),
        }

        let longest = ReplayOptions {
            frame: MAX_FRAME,
            ..options()
        };
        let report = replay(&script, StackConfig::default(), &longest).expect("replay");
        assert_eq!(report.final_phase, Phase::Idle);
        assert_eq!(report.elapsed_ms, 1005);
    }

    #[test]
    fn unsettled_replay_reports_frame_budget() {
        let script = GestureScript {
            name: None,
            steps: vec![
                step(0, GestureEvent::Down),
                step(0, GestureEvent::Scroll { dx: 100.0, dy: 0.0 }),
                step(0, GestureEvent::Up),
            ],
        };
        let opts = ReplayOptions {
            max_settle_frames: 2,
            ..options()
        };
        match replay(&script, StackConfig::default(), &opts) {
            Err(HarnessError::Unsettled { frames }) => assert_eq!(frames, 2),
            other => panic!("expected Unsettled, got {other:?}"),
        }
    }
}
