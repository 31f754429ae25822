//! Triangle meshes for a [`DrawPlan`].
//!
//! Hosts that render through a GPU pipeline can upload the
//! [`ProgressMesh`] directly: vertices are `Pod` and carry their own color,
//! indices form a triangle list.

use bytemuck::{Pod, Zeroable};
use lyon_path::{
    Path as LyonPath, Winding,
    builder::BorderRadii,
    math::{Box2D, point},
    traits::PathBuilder,
};
use lyon_tessellation::{
    BuffersBuilder, FillOptions, FillTessellator, FillVertex, LineCap, LineJoin, StrokeOptions,
    StrokeTessellator, StrokeVertex, VertexBuffers,
};
use thiserror::Error;

use crate::{
    color::Color,
    geometry::PxRect,
    plan::{DrawCommand, DrawPlan, StrokeCap, StrokeJoin, StrokedPath},
};

/// Errors that can occur while tessellating a plan.
#[derive(Debug, Error)]
pub enum TessellateError {
    /// Tessellation of the path geometry failed.
    #[error("tessellation error: {0}")]
    Tessellation(#[from] lyon_tessellation::TessellationError),
}

/// A colored vertex in canvas pixel coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
#[repr(C)]
pub struct ProgressVertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl ProgressVertex {
    fn new(position: [f32; 2], color: Color) -> Self {
        Self {
            position,
            color: color.to_array(),
        }
    }
}

/// Triangle list for one frame of the indicator.
#[derive(Clone, Debug, Default)]
pub struct ProgressMesh {
    pub vertices: Vec<ProgressVertex>,
    pub indices: Vec<u32>,
}

impl ProgressMesh {
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

/// Tessellates every command of `plan`, in paint order.
#[tracing::instrument(level = "trace", skip(plan))]
pub fn tessellate_plan(plan: &DrawPlan) -> Result<ProgressMesh, TessellateError> {
    let mut buffers: VertexBuffers<ProgressVertex, u32> = VertexBuffers::new();
    let mut fill = FillTessellator::new();
    let mut stroke = StrokeTessellator::new();

    for command in plan.commands() {
        match command {
            DrawCommand::FillRect { rect, color } => {
                let mut builder = LyonPath::builder();
                builder.add_rectangle(&to_box(rect), Winding::Positive);
                fill_path(&mut fill, &builder.build(), color, &mut buffers)?;
            }
            DrawCommand::FillRoundedRect {
                rect,
                radius,
                color,
            } => {
                // Radii larger than half the short side would self-intersect.
                let radius = radius.min(rect.width / 2.0).min(rect.height / 2.0);
                let mut builder = LyonPath::builder();
                builder.add_rounded_rectangle(
                    &to_box(rect),
                    &BorderRadii::new(radius),
                    Winding::Positive,
                );
                fill_path(&mut fill, &builder.build(), color, &mut buffers)?;
            }
            DrawCommand::FillCircle {
                center,
                radius,
                color,
            } => {
                let mut builder = LyonPath::builder();
                builder.add_circle(point(center.x, center.y), radius, Winding::Positive);
                fill_path(&mut fill, &builder.build(), color, &mut buffers)?;
            }
            DrawCommand::StrokePath { stroke: path } => {
                stroke_path(&mut stroke, path, &mut buffers)?;
            }
        }
    }

    Ok(ProgressMesh {
        vertices: buffers.vertices,
        indices: buffers.indices,
    })
}

fn to_box(rect: PxRect) -> Box2D {
    Box2D::new(
        point(rect.left(), rect.top()),
        point(rect.right(), rect.bottom()),
    )
}

fn fill_path(
    tessellator: &mut FillTessellator,
    path: &LyonPath,
    color: Color,
    buffers: &mut VertexBuffers<ProgressVertex, u32>,
) -> Result<(), TessellateError> {
    tessellator.tessellate_path(
        path,
        &FillOptions::default(),
        &mut BuffersBuilder::new(buffers, |vertex: FillVertex| {
            ProgressVertex::new(vertex.position().to_array(), color)
        }),
    )?;
    Ok(())
}

fn stroke_path(
    tessellator: &mut StrokeTessellator,
    stroke: &StrokedPath,
    buffers: &mut VertexBuffers<ProgressVertex, u32>,
) -> Result<(), TessellateError> {
    if stroke.path.is_empty() {
        return Ok(());
    }
    let color = stroke.color;
    let options = StrokeOptions::default()
        .with_line_width(stroke.path.stroke_width)
        .with_line_cap(map_line_cap(stroke.cap))
        .with_line_join(map_line_join(stroke.join));

    tessellator.tessellate_path(
        &stroke.path.to_lyon_path(),
        &options,
        &mut BuffersBuilder::new(buffers, |vertex: StrokeVertex| {
            ProgressVertex::new(vertex.position().to_array(), color)
        }),
    )?;
    Ok(())
}

fn map_line_cap(cap: StrokeCap) -> LineCap {
    match cap {
        StrokeCap::Round => LineCap::Round,
        StrokeCap::Butt => LineCap::Butt,
    }
}

fn map_line_join(join: StrokeJoin) -> LineJoin {
    match join {
        StrokeJoin::Round => LineJoin::Round,
        StrokeJoin::Miter => LineJoin::Miter,
    }
}
