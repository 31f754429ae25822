//! Frame clock for progress indicators.
//!
//! ## Usage
//!
//! Call [`AnimationDriver::tick`] once per rendered frame with the elapsed
//! frame time. While indeterminate the driver loops over a fixed period and
//! reports a phase in `0.0..1.0`; while determinate it can ease the displayed
//! value toward a new target.

use std::{fmt, time::Duration};

use tracing::debug;

use crate::{config::sanitize_progress, curves::CubicBezier};

/// Length of one indeterminate loop.
pub const LINEAR_INDETERMINATE_PERIOD: Duration = Duration::from_millis(1800);

/// Duration of an animated change between two determinate values.
pub const VALUE_TRANSITION_DURATION: Duration = Duration::from_millis(500);

/// Largest `f32` below 1.0.
const MAX_PHASE: f32 = 1.0 - f32::EPSILON / 2.0;

/// Snapshot handed to the render callback after every tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameTick {
    /// Loop phase in `0.0..1.0`.
    pub phase: f32,
    /// Displayed determinate value, `None` while indeterminate.
    pub value: Option<f32>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct ValueTransition {
    from: f32,
    to: f32,
    elapsed: Duration,
}

impl ValueTransition {
    fn advance(&mut self, dt: Duration) -> (f32, bool) {
        self.elapsed = self.elapsed.saturating_add(dt);
        let fraction =
            (self.elapsed.as_secs_f32() / VALUE_TRANSITION_DURATION.as_secs_f32()).min(1.0);
        if fraction >= 1.0 {
            return (self.to, true);
        }
        let eased = CubicBezier::STANDARD.transform(fraction);
        (self.from + (self.to - self.from) * eased, false)
    }
}

type TickCallback = Box<dyn FnMut(FrameTick)>;

/// Owns the indicator's animation phase and displayed value.
pub struct AnimationDriver {
    period: Duration,
    elapsed: Duration,
    running: bool,
    value: Option<f32>,
    transition: Option<ValueTransition>,
    on_tick: Option<TickCallback>,
}

impl AnimationDriver {
    /// Creates a stopped driver with the reference 1800 ms period.
    pub fn new() -> Self {
        Self::with_period(LINEAR_INDETERMINATE_PERIOD)
    }

    /// Creates a stopped driver looping over `period` (at least 1 ms).
    pub fn with_period(period: Duration) -> Self {
        Self {
            period: period.max(Duration::from_millis(1)),
            elapsed: Duration::ZERO,
            running: false,
            value: None,
            transition: None,
            on_tick: None,
        }
    }

    /// Current loop phase in `0.0..1.0`.
    pub fn current_phase(&self) -> f32 {
        // A ratio just below one still rounds to 1.0 in f32.
        let phase = self.elapsed.as_secs_f64() / self.period.as_secs_f64();
        (phase as f32).min(MAX_PHASE)
    }

    /// Displayed determinate value, `None` while indeterminate.
    pub fn current_value(&self) -> Option<f32> {
        self.value
    }

    /// Whether the indeterminate loop is running.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Whether the next frame will differ from this one.
    pub fn is_animating(&self) -> bool {
        self.running || self.transition.is_some()
    }

    /// Starts the indeterminate loop from phase 0. No-op when running.
    pub fn start(&mut self) {
        if !self.running {
            self.running = true;
            self.elapsed = Duration::ZERO;
            debug!("indeterminate loop started");
        }
    }

    /// Stops the indeterminate loop, freezing the phase.
    pub fn stop(&mut self) {
        if self.running {
            self.running = false;
            debug!(phase = self.current_phase(), "indeterminate loop stopped");
        }
    }

    /// Follows a configuration change: the loop runs exactly while `value`
    /// is absent. A present value is displayed immediately unless a
    /// transition toward it is already under way.
    pub fn sync_with_value(&mut self, value: Option<f32>) {
        match value {
            None => {
                self.value = None;
                self.transition = None;
                self.start();
            }
            Some(value) => {
                self.stop();
                let value = sanitize_progress(value);
                let heading_there = self
                    .transition
                    .is_some_and(|transition| transition.to == value);
                if !heading_there {
                    self.transition = None;
                    self.value = Some(value);
                }
            }
        }
    }

    /// Eases the displayed value from where it is now toward `target`.
    pub fn set_target_value(&mut self, target: f32) {
        self.stop();
        let target = sanitize_progress(target);
        let from = self.value.unwrap_or(0.0);
        if from == target {
            self.transition = None;
            self.value = Some(target);
            return;
        }
        debug!(from, to = target, "value transition started");
        self.value = Some(from);
        self.transition = Some(ValueTransition {
            from,
            to: target,
            elapsed: Duration::ZERO,
        });
    }

    /// Registers the callback notified after every [`tick`](Self::tick),
    /// replacing any previous one.
    pub fn set_on_tick(&mut self, callback: impl FnMut(FrameTick) + 'static) {
        self.on_tick = Some(Box::new(callback));
    }

    /// Removes the tick callback.
    pub fn clear_on_tick(&mut self) {
        self.on_tick = None;
    }

    /// Advances the clock by `dt` and returns the new phase.
    pub fn tick(&mut self, dt: Duration) -> f32 {
        if self.running {
            let period = self.period.as_nanos();
            let elapsed = (self.elapsed.as_nanos() + dt.as_nanos()) % period;
            self.elapsed = Duration::from_nanos(elapsed as u64);
        }

        if let Some(transition) = self.transition.as_mut() {
            let (value, finished) = transition.advance(dt);
            self.value = Some(value);
            if finished {
                self.transition = None;
            }
        }

        let frame = FrameTick {
            phase: self.current_phase(),
            value: self.value,
        };
        if let Some(callback) = self.on_tick.as_mut() {
            callback(frame);
        }
        frame.phase
    }
}

impl Default for AnimationDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for AnimationDriver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnimationDriver")
            .field("period", &self.period)
            .field("elapsed", &self.elapsed)
            .field("running", &self.running)
            .field("value", &self.value)
            .field("transition", &self.transition)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use super::*;

    const FRAME: Duration = Duration::from_millis(16);

    #[test]
    fn stopped_driver_does_not_advance() {
        let mut driver = AnimationDriver::new();
        assert_eq!(driver.tick(Duration::from_millis(500)), 0.0);
        assert!(!driver.is_animating());
    }

    #[test]
    fn phase_advances_and_wraps() {
        let mut driver = AnimationDriver::new();
        driver.start();
        let phase = driver.tick(Duration::from_millis(450));
        assert!((phase - 0.25).abs() < 1e-6);
        let phase = driver.tick(Duration::from_millis(450));
        assert!((phase - 0.5).abs() < 1e-6);
        assert_eq!(driver.tick(Duration::from_millis(900)), 0.0);
        let phase = driver.tick(Duration::from_millis(2700));
        assert!((phase - 0.5).abs() < 1e-6);
    }

    #[test]
    fn phase_stays_below_one() {
        let mut driver = AnimationDriver::new();
        driver.start();
        for _ in 0..1000 {
            let phase = driver.tick(FRAME);
            assert!((0.0..1.0).contains(&phase));
        }
    }

    #[test]
    fn phase_just_before_wrap_is_below_one() {
        let mut driver = AnimationDriver::new();
        driver.start();
        let phase = driver.tick(Duration::from_nanos(1_799_999_999));
        assert!(phase < 1.0);
        assert!(phase > 0.999);
        assert_eq!(driver.tick(Duration::from_nanos(1)), 0.0);
    }

    #[test]
    fn sync_starts_and_stops_loop() {
        let mut driver = AnimationDriver::new();
        driver.sync_with_value(None);
        assert!(driver.is_running());
        driver.tick(Duration::from_millis(300));

        driver.sync_with_value(Some(0.4));
        assert!(!driver.is_running());
        assert_eq!(driver.current_value(), Some(0.4));

        driver.sync_with_value(None);
        assert!(driver.is_running());
        assert_eq!(driver.current_phase(), 0.0);
        assert_eq!(driver.current_value(), None);
    }

    #[test]
    fn sync_clamps_value() {
        let mut driver = AnimationDriver::new();
        driver.sync_with_value(Some(3.0));
        assert_eq!(driver.current_value(), Some(1.0));
    }

    #[test]
    fn transition_eases_to_target() {
        let mut driver = AnimationDriver::new();
        driver.sync_with_value(Some(0.2));
        driver.set_target_value(0.8);
        assert!(driver.is_animating());
        assert_eq!(driver.current_value(), Some(0.2));

        let mut previous = 0.2;
        while driver.is_animating() {
            driver.tick(FRAME);
            let value = driver.current_value().unwrap();
            assert!(value >= previous);
            previous = value;
        }
        assert_eq!(driver.current_value(), Some(0.8));
    }

    #[test]
    fn sync_keeps_transition_toward_same_value() {
        let mut driver = AnimationDriver::new();
        driver.sync_with_value(Some(0.0));
        driver.set_target_value(1.0);
        driver.tick(FRAME);
        driver.sync_with_value(Some(1.0));
        assert!(driver.is_animating());
        assert!(driver.current_value().unwrap() < 1.0);
    }

    #[test]
    fn callback_sees_every_tick() {
        let frames = Rc::new(RefCell::new(Vec::new()));
        let mut driver = AnimationDriver::new();
        let sink = frames.clone();
        driver.set_on_tick(move |frame| sink.borrow_mut().push(frame));
        driver.start();
        driver.tick(Duration::from_millis(900));
        driver.tick(Duration::from_millis(450));

        let frames = frames.borrow();
        assert_eq!(frames.len(), 2);
        assert!((frames[0].phase - 0.5).abs() < 1e-6);
        assert!((frames[1].phase - 0.75).abs() < 1e-6);
        assert_eq!(frames[1].value, None);
    }

    #[test]
    fn zero_period_is_clamped() {
        let mut driver = AnimationDriver::with_period(Duration::ZERO);
        driver.start();
        let phase = driver.tick(Duration::from_micros(500));
        assert!((phase - 0.5).abs() < 1e-6);
    }
}
