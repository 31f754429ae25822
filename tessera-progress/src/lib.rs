//! Linear progress indicator render core for the Tessera UI framework.
//!
//! The crate turns an indicator configuration, a theme, the current progress
//! (or animation phase) and a canvas size into a [`DrawPlan`]: a short list
//! of rectangles, a stop-indicator circle and, in expressive mode, a stroked
//! sine wave. Plans can be drawn by any 2D backend, or tessellated into a
//! triangle mesh with [`tessellate::tessellate_plan`].
//!
//! # Usage
//!
//! ```
//! use std::time::Duration;
//!
//! use tessera_progress::{
//!     IndicatorConfig, IndicatorMode, LinearProgressIndicator, MaterialColorScheme, TextDirection,
//!     ThemeVariant, resolve_theme,
//! };
//!
//! let config = IndicatorConfig::default()
//!     .value(0.5)
//!     .mode(IndicatorMode::Expressive);
//! let mut indicator = LinearProgressIndicator::new(config).unwrap();
//!
//! let scheme = MaterialColorScheme::default();
//! let theme = resolve_theme(indicator.config(), None, ThemeVariant::Material, &scheme);
//! let size = indicator.measure(Some(300.0), &theme);
//!
//! indicator.tick(Duration::from_millis(16));
//! let plan = indicator.paint(&theme, size, TextDirection::Ltr);
//! assert_eq!(plan.active.len(), 1);
//! ```
//!
//! # Units
//!
//! Configuration lengths are [`Dp`]; everything in a [`DrawPlan`] is in
//! physical pixels relative to the canvas origin. Set the display density
//! with [`dp::set_scale_factor`].

pub mod animation;
pub mod color;
pub mod config;
pub mod curves;
pub mod dp;
pub mod geometry;
pub mod indicator;
pub mod painter;
pub mod plan;
pub mod semantics;
pub mod tessellate;
pub mod theme;
pub mod wave;

pub use animation::{AnimationDriver, FrameTick};
pub use color::Color;
pub use config::{ConfigError, IndicatorConfig, IndicatorMode, ProgressIndicatorDefaults};
pub use dp::Dp;
pub use geometry::{PxRect, PxSize, TextDirection};
pub use indicator::LinearProgressIndicator;
pub use painter::{PaintInput, build_plan};
pub use plan::{ActiveShape, BarShape, CircleShape, DrawCommand, DrawPlan, StrokedPath};
pub use semantics::ProgressSemantics;
pub use tessellate::{ProgressMesh, ProgressVertex, TessellateError, tessellate_plan};
pub use theme::{
    MaterialColorScheme, ProgressIndicatorTheme, ResolvedTheme, ThemeVariant, resolve_theme,
};
