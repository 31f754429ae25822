//! Geometry for the linear progress indicator.
//!
//! [`build_plan`] is a pure function of its inputs: the same configuration,
//! theme, progress, canvas and direction always produce the same
//! [`DrawPlan`].

use glam::Vec2;
use smallvec::SmallVec;

use crate::{
    color::Color,
    config::{IndicatorConfig, IndicatorMode, sanitize_progress},
    curves::{self, SegmentSpan},
    geometry::{PxRect, PxSize, TextDirection},
    plan::{ActiveShape, BarShape, CircleShape, DrawPlan, StrokeCap, StrokeJoin, StrokedPath},
    theme::ResolvedTheme,
    wave::{WaveParams, build_wave},
};

/// What the active indicator shows this frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PaintInput {
    /// Known completion fraction; clamped to 0..=1.
    Determinate(f32),
    /// Loop position of the indeterminate animation, 0..=1.
    Indeterminate(f32),
}

impl PaintInput {
    /// Picks the input for a config value and the driver's current phase.
    pub fn from_value(value: Option<f32>, phase: f32) -> Self {
        match value {
            Some(value) => PaintInput::Determinate(value),
            None => PaintInput::Indeterminate(phase),
        }
    }
}

/// Builds the shapes for one frame.
#[tracing::instrument(level = "trace", skip(config, theme))]
pub fn build_plan(
    config: &IndicatorConfig,
    theme: &ResolvedTheme,
    input: PaintInput,
    canvas: PxSize,
    direction: TextDirection,
) -> DrawPlan {
    if !canvas.has_area() {
        return DrawPlan::empty();
    }

    let value = match input {
        PaintInput::Determinate(value) => Some(sanitize_progress(value)),
        PaintInput::Indeterminate(_) => None,
    };

    let mut plan = DrawPlan {
        track: track_shape(theme, value, canvas, direction),
        stop_indicator: None,
        active: SmallVec::new(),
    };

    match input {
        PaintInput::Determinate(value) => {
            let value = sanitize_progress(value);
            plan.stop_indicator = stop_indicator_shape(theme, canvas, direction);
            if let Some(rect) = active_rect(0.0, value * canvas.width, canvas, direction) {
                plan.active.push(determinate_shape(config, theme, rect, canvas, value));
            }
        }
        PaintInput::Indeterminate(phase) => {
            let (line1, line2) = curves::evaluate(phase);
            for span in [line1, line2] {
                if let Some(rect) = span_rect(span, canvas, direction) {
                    plan.active.push(ActiveShape::Bar(bar(theme, rect, theme.color)));
                }
            }
        }
    }

    plan
}

fn track_shape(
    theme: &ResolvedTheme,
    value: Option<f32>,
    canvas: PxSize,
    direction: TextDirection,
) -> Option<BarShape> {
    if !theme.track_color.is_visible() {
        return None;
    }

    // No gap while indeterminate or at either end of the range.
    let gap = match value {
        Some(value) if value > 0.0 && value < 1.0 => theme.track_gap,
        _ => 0.0,
    };

    let rect = match value {
        Some(value) if gap > 0.0 => {
            let active_width = value * canvas.width;
            match direction {
                TextDirection::Ltr => {
                    PxRect::from_ltrb(active_width + gap, 0.0, canvas.width, canvas.height)
                }
                TextDirection::Rtl => {
                    PxRect::from_ltrb(0.0, 0.0, canvas.width - active_width - gap, canvas.height)
                }
            }
        }
        _ => PxRect::from_size(canvas),
    };

    if rect.is_empty() {
        None
    } else {
        Some(bar(theme, rect, theme.track_color))
    }
}

fn stop_indicator_shape(
    theme: &ResolvedTheme,
    canvas: PxSize,
    direction: TextDirection,
) -> Option<CircleShape> {
    let radius = theme.stop_indicator_radius?;
    if radius <= 0.0 {
        return None;
    }

    let half_height = canvas.height / 2.0;
    let center = match direction {
        TextDirection::Ltr => Vec2::new(canvas.width - half_height, half_height),
        TextDirection::Rtl => Vec2::new(half_height, half_height),
    };
    Some(CircleShape {
        center,
        radius: radius.min(half_height),
        color: theme.stop_indicator_color,
    })
}

/// Positions a segment `x` pixels from the leading edge.
fn active_rect(x: f32, width: f32, canvas: PxSize, direction: TextDirection) -> Option<PxRect> {
    if width <= 0.0 {
        return None;
    }
    let left = match direction {
        TextDirection::Ltr => x,
        TextDirection::Rtl => canvas.width - width - x,
    };
    Some(PxRect::new(left, 0.0, width, canvas.height))
}

fn span_rect(span: SegmentSpan, canvas: PxSize, direction: TextDirection) -> Option<PxRect> {
    active_rect(
        canvas.width * span.start,
        canvas.width * span.width,
        canvas,
        direction,
    )
}

fn determinate_shape(
    config: &IndicatorConfig,
    theme: &ResolvedTheme,
    rect: PxRect,
    canvas: PxSize,
    value: f32,
) -> ActiveShape {
    if config.mode == IndicatorMode::Expressive {
        let params = WaveParams {
            amplitude: config.amplitude.to_pixels_f32(),
            cycles: config.frequency,
            track_width: canvas.width,
            progress: value,
        };
        if let Some(path) = build_wave(rect, params) {
            return ActiveShape::Wave {
                bounds: rect,
                stroke: StrokedPath {
                    path,
                    cap: StrokeCap::Round,
                    join: StrokeJoin::Round,
                    color: theme.color,
                },
            };
        }
    }
    ActiveShape::Bar(bar(theme, rect, theme.color))
}

fn bar(theme: &ResolvedTheme, rect: PxRect, color: Color) -> BarShape {
    BarShape {
        rect,
        corner_radius: theme.border_radius,
        color,
    }
}
