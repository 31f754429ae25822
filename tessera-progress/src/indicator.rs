//! Stateful linear progress indicator.
//!
//! ## Usage
//!
//! Create one [`LinearProgressIndicator`] per on-screen bar, forward frame
//! times to [`LinearProgressIndicator::tick`], and draw whatever
//! [`LinearProgressIndicator::paint`] returns.

use std::time::Duration;

use tracing::debug;

use crate::{
    animation::AnimationDriver,
    config::{ConfigError, IndicatorConfig, ProgressIndicatorDefaults},
    geometry::{PxSize, TextDirection},
    painter::{PaintInput, build_plan},
    plan::DrawPlan,
    semantics::ProgressSemantics,
    theme::ResolvedTheme,
};

#[derive(Clone, Debug, PartialEq)]
struct PaintKey {
    config: IndicatorConfig,
    theme: ResolvedTheme,
    input: PaintInput,
    canvas: PxSize,
    direction: TextDirection,
}

/// A linear progress indicator: validated configuration, animation state
/// and the most recently painted plan.
#[derive(Debug)]
pub struct LinearProgressIndicator {
    config: IndicatorConfig,
    driver: AnimationDriver,
    painted: Option<PaintKey>,
    plan: DrawPlan,
}

impl LinearProgressIndicator {
    /// Validates `config` and starts the indeterminate loop if it has no
    /// value.
    pub fn new(config: IndicatorConfig) -> Result<Self, ConfigError> {
        Self::with_driver(config, AnimationDriver::new())
    }

    /// Like [`new`](Self::new) with a caller-provided driver, e.g. one with
    /// a custom period or tick callback.
    pub fn with_driver(
        config: IndicatorConfig,
        mut driver: AnimationDriver,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        driver.sync_with_value(config.value);
        Ok(Self {
            config,
            driver,
            painted: None,
            plan: DrawPlan::empty(),
        })
    }

    pub fn config(&self) -> &IndicatorConfig {
        &self.config
    }

    pub fn driver(&self) -> &AnimationDriver {
        &self.driver
    }

    pub fn driver_mut(&mut self) -> &mut AnimationDriver {
        &mut self.driver
    }

    /// Replaces the whole configuration. The old one is kept on error.
    pub fn set_config(&mut self, config: IndicatorConfig) -> Result<(), ConfigError> {
        config.validate()?;
        if config.value != self.config.value {
            self.driver.sync_with_value(config.value);
        }
        self.config = config;
        Ok(())
    }

    /// Jumps to `value`, or switches to indeterminate mode on `None`.
    pub fn set_value(&mut self, value: Option<f32>) {
        self.config.value = value;
        self.driver.sync_with_value(value);
    }

    /// Eases the displayed value toward `value`.
    pub fn animate_to(&mut self, value: f32) {
        self.config.value = Some(value);
        self.driver.set_target_value(value);
    }

    /// Advances animations by `dt`. Returns whether another frame is needed.
    pub fn tick(&mut self, dt: Duration) -> bool {
        self.driver.tick(dt);
        self.driver.is_animating()
    }

    /// Size of the bar given the width offered by the parent, in physical
    /// pixels. An unbounded width falls back to the default indicator width.
    pub fn measure(&self, available_width: Option<f32>, theme: &ResolvedTheme) -> PxSize {
        let width = available_width
            .filter(|width| width.is_finite() && *width >= 0.0)
            .unwrap_or_else(|| ProgressIndicatorDefaults::LINEAR_INDICATOR_WIDTH.to_pixels_f32());
        let height = self
            .config
            .min_thickness
            .map(|thickness| thickness.to_pixels_f32())
            .map_or(theme.min_height, |thickness| thickness.max(theme.min_height));
        PxSize::new(width, height)
    }

    /// What the painter should draw for the current animation state.
    pub fn paint_input(&self) -> PaintInput {
        match self.config.value {
            Some(value) => PaintInput::Determinate(self.driver.current_value().unwrap_or(value)),
            None => PaintInput::Indeterminate(self.driver.current_phase()),
        }
    }

    /// Builds this frame's plan, reusing the previous one when nothing that
    /// affects the geometry has changed.
    pub fn paint(
        &mut self,
        theme: &ResolvedTheme,
        canvas: PxSize,
        direction: TextDirection,
    ) -> &DrawPlan {
        let key = PaintKey {
            config: self.config.clone(),
            theme: *theme,
            input: self.paint_input(),
            canvas,
            direction,
        };

        if self.painted.as_ref() != Some(&key) {
            debug!(input = ?key.input, ?canvas, "building progress plan");
            self.plan = build_plan(&key.config, &key.theme, key.input, canvas, direction);
            self.painted = Some(key);
        }
        &self.plan
    }

    /// Accessibility description for the configured value.
    pub fn semantics(&self) -> ProgressSemantics {
        ProgressSemantics::from_config(&self.config, self.config.value)
    }
}
