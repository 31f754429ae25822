//! Easing curves for the indeterminate two-line sweep.
//!
//! Each of the two traveling lines has a head and a tail curve. Both are
//! windows of the 1800 ms loop with their own cubic-bezier easing; outside
//! its window a curve sits at 0 (before) or 1 (after).

/// Length of one indeterminate loop in milliseconds.
pub const LINEAR_INDETERMINATE_DURATION_MS: u32 = 1800;

const LINE1_HEAD_DELAY_MS: u32 = 0;
const LINE1_TAIL_DELAY_MS: u32 = 333;
const LINE2_HEAD_DELAY_MS: u32 = 1000;
const LINE2_TAIL_DELAY_MS: u32 = 1267;

const LINE1_HEAD_DURATION_MS: u32 = 750;
const LINE1_TAIL_DURATION_MS: u32 = 750;
const LINE2_HEAD_DURATION_MS: u32 = 567;
const LINE2_TAIL_DURATION_MS: u32 = 533;

fn cubic_bezier(t: f32, a: f32, b: f32, c: f32, d: f32) -> f32 {
    let u = 1.0 - t;
    (u * u * u * a) + (3.0 * u * u * t * b) + (3.0 * u * t * t * c) + (t * t * t * d)
}

/// A cubic-bezier easing curve anchored at (0, 0) and (1, 1).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CubicBezier {
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
}

impl CubicBezier {
    pub const fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Material standard easing.
    pub const STANDARD: CubicBezier = CubicBezier::new(0.2, 0.0, 0.0, 1.0);

    /// Eases `progress` (clamped to 0..=1).
    ///
    /// The curve parameter is found by bisection on x, which keeps the
    /// result monotonic in `progress`.
    pub fn transform(&self, progress: f32) -> f32 {
        let x = progress.clamp(0.0, 1.0);
        if x == 0.0 || x == 1.0 {
            return x;
        }

        let mut lo = 0.0;
        let mut hi = 1.0;
        let mut t = x;
        for _ in 0..20 {
            let mid = (lo + hi) * 0.5;
            let mid_x = cubic_bezier(mid, 0.0, self.x1, self.x2, 1.0);
            if mid_x < x {
                lo = mid;
            } else {
                hi = mid;
            }
            t = mid;
        }

        cubic_bezier(t, 0.0, self.y1, self.y2, 1.0).clamp(0.0, 1.0)
    }
}

/// A curve active only inside `[begin, end]` of the loop.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Interval {
    pub begin: f32,
    pub end: f32,
    pub curve: CubicBezier,
}

impl Interval {
    /// Builds an interval from a delay and duration on the indeterminate
    /// timeline.
    const fn from_timeline(delay_ms: u32, duration_ms: u32, curve: CubicBezier) -> Self {
        let total = LINEAR_INDETERMINATE_DURATION_MS as f32;
        Self {
            begin: delay_ms as f32 / total,
            end: (delay_ms + duration_ms) as f32 / total,
            curve,
        }
    }

    pub fn transform(&self, phase: f32) -> f32 {
        if phase <= self.begin {
            return 0.0;
        }
        if phase >= self.end {
            return 1.0;
        }
        self.curve.transform((phase - self.begin) / (self.end - self.begin))
    }
}

/// Fractional span of the track covered by one active line.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SegmentSpan {
    /// Offset from the leading edge, as a fraction of the track width.
    pub start: f32,
    /// Width as a fraction of the track width. Non-positive means nothing
    /// is drawn.
    pub width: f32,
}

impl SegmentSpan {
    pub fn is_visible(&self) -> bool {
        self.width > 0.0
    }
}

pub const LINE1_HEAD: Interval = Interval::from_timeline(
    LINE1_HEAD_DELAY_MS,
    LINE1_HEAD_DURATION_MS,
    CubicBezier::new(0.2, 0.0, 0.8, 1.0),
);
pub const LINE1_TAIL: Interval = Interval::from_timeline(
    LINE1_TAIL_DELAY_MS,
    LINE1_TAIL_DURATION_MS,
    CubicBezier::new(0.4, 0.0, 1.0, 1.0),
);
pub const LINE2_HEAD: Interval = Interval::from_timeline(
    LINE2_HEAD_DELAY_MS,
    LINE2_HEAD_DURATION_MS,
    CubicBezier::new(0.0, 0.0, 0.65, 1.0),
);
pub const LINE2_TAIL: Interval = Interval::from_timeline(
    LINE2_TAIL_DELAY_MS,
    LINE2_TAIL_DURATION_MS,
    CubicBezier::new(0.10, 0.0, 0.45, 1.0),
);

/// Evaluates both indeterminate lines at `phase` (0..=1 of the loop).
pub fn evaluate(phase: f32) -> (SegmentSpan, SegmentSpan) {
    let phase = if phase.is_nan() {
        0.0
    } else {
        phase.clamp(0.0, 1.0)
    };
    (
        line_span(LINE1_HEAD, LINE1_TAIL, phase),
        line_span(LINE2_HEAD, LINE2_TAIL, phase),
    )
}

fn line_span(head: Interval, tail: Interval, phase: f32) -> SegmentSpan {
    let start = tail.transform(phase);
    SegmentSpan {
        start,
        width: head.transform(phase) - start,
    }
}
