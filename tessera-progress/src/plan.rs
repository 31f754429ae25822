//! Output of one paint pass.

use glam::Vec2;
use smallvec::SmallVec;

use crate::{color::Color, geometry::PxRect, wave::WavePath};

/// Stroke cap used for path ends.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StrokeCap {
    /// Rounded stroke ends.
    #[default]
    Round,
    /// Flat stroke ends.
    Butt,
}

/// Join used between path segments.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StrokeJoin {
    #[default]
    Round,
    Miter,
}

/// A filled bar, square or rounded.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BarShape {
    pub rect: PxRect,
    /// Corner radius in physical pixels; `None` for square corners.
    pub corner_radius: Option<f32>,
    pub color: Color,
}

/// A filled circle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CircleShape {
    pub center: Vec2,
    pub radius: f32,
    pub color: Color,
}

/// A stroked polyline.
#[derive(Clone, Debug, PartialEq)]
pub struct StrokedPath {
    pub path: WavePath,
    pub cap: StrokeCap,
    pub join: StrokeJoin,
    pub color: Color,
}

/// How one active indicator segment is drawn.
#[derive(Clone, Debug, PartialEq)]
pub enum ActiveShape {
    /// Filled bar.
    Bar(BarShape),
    /// Expressive wave stroke. `bounds` is the active rectangle the wave was
    /// synthesized for.
    Wave { bounds: PxRect, stroke: StrokedPath },
}

impl ActiveShape {
    /// The rectangle covered by this segment.
    pub fn bounds(&self) -> PxRect {
        match self {
            ActiveShape::Bar(bar) => bar.rect,
            ActiveShape::Wave { bounds, .. } => *bounds,
        }
    }
}

/// A single drawing operation, in paint order.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DrawCommand<'a> {
    FillRect { rect: PxRect, color: Color },
    FillRoundedRect { rect: PxRect, radius: f32, color: Color },
    FillCircle { center: Vec2, radius: f32, color: Color },
    StrokePath { stroke: &'a StrokedPath },
}

impl<'a> From<&'a BarShape> for DrawCommand<'a> {
    fn from(bar: &'a BarShape) -> Self {
        match bar.corner_radius {
            Some(radius) => DrawCommand::FillRoundedRect {
                rect: bar.rect,
                radius,
                color: bar.color,
            },
            None => DrawCommand::FillRect {
                rect: bar.rect,
                color: bar.color,
            },
        }
    }
}

/// Every shape needed to draw one frame of the indicator, in absolute pixel
/// coordinates.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DrawPlan {
    /// Inactive track.
    pub track: Option<BarShape>,
    /// Dot at the trailing end of a determinate track.
    pub stop_indicator: Option<CircleShape>,
    /// One segment when determinate, up to two when indeterminate.
    pub active: SmallVec<[ActiveShape; 2]>,
}

impl DrawPlan {
    /// A plan that draws nothing.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.track.is_none() && self.stop_indicator.is_none() && self.active.is_empty()
    }

    /// Drawing operations in paint order: track, stop indicator, active
    /// segments.
    pub fn commands(&self) -> impl Iterator<Item = DrawCommand<'_>> {
        let track = self.track.as_ref().map(DrawCommand::from);
        let stop = self.stop_indicator.map(|circle| DrawCommand::FillCircle {
            center: circle.center,
            radius: circle.radius,
            color: circle.color,
        });
        let active = self.active.iter().map(|shape| match shape {
            ActiveShape::Bar(bar) => DrawCommand::from(bar),
            ActiveShape::Wave { stroke, .. } => DrawCommand::StrokePath { stroke },
        });
        track.into_iter().chain(stop).chain(active)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commands_follow_paint_order() {
        let mut plan = DrawPlan::empty();
        assert!(plan.is_empty());
        plan.track = Some(BarShape {
            rect: PxRect::new(0.0, 0.0, 100.0, 4.0),
            corner_radius: Some(2.0),
            color: Color::WHITE,
        });
        plan.stop_indicator = Some(CircleShape {
            center: Vec2::new(98.0, 2.0),
            radius: 2.0,
            color: Color::BLACK,
        });
        plan.active.push(ActiveShape::Bar(BarShape {
            rect: PxRect::new(0.0, 0.0, 40.0, 4.0),
            corner_radius: None,
            color: Color::BLACK,
        }));

        let commands: Vec<_> = plan.commands().collect();
        assert_eq!(commands.len(), 3);
        assert!(matches!(commands[0], DrawCommand::FillRoundedRect { radius, .. } if radius == 2.0));
        assert!(matches!(commands[1], DrawCommand::FillCircle { .. }));
        assert!(matches!(commands[2], DrawCommand::FillRect { .. }));
    }
}
