//! Per-indicator configuration.
//!
//! ## Usage
//!
//! Build an [`IndicatorConfig`] with its setters and hand it to
//! [`crate::LinearProgressIndicator::new`], which validates it once. Values
//! left as `None` fall through to the ambient theme and then to the built-in
//! defaults during [`crate::theme::resolve_theme`].

use derive_setters::Setters;
use thiserror::Error;

use crate::{color::Color, dp::Dp};

/// Material Design 3 defaults for linear progress indicators.
pub struct ProgressIndicatorDefaults;

impl ProgressIndicatorDefaults {
    /// Default width when the host leaves the width unconstrained.
    pub const LINEAR_INDICATOR_WIDTH: Dp = Dp(240.0);
    /// Default minimum height (thickness) of the bar.
    pub const LINEAR_MIN_HEIGHT: Dp = Dp(4.0);
    /// Default gap between the active indicator and the track.
    pub const LINEAR_INDICATOR_TRACK_GAP_SIZE: Dp = Dp(4.0);
    /// Default corner radius for the track and the active indicator.
    pub const LINEAR_BORDER_RADIUS: Dp = Dp(2.0);
    /// Default radius of the stop indicator dot.
    pub const LINEAR_STOP_INDICATOR_RADIUS: Dp = Dp(2.0);
    /// Default peak amplitude of the expressive wave.
    pub const WAVE_AMPLITUDE: Dp = Dp(3.0);
    /// Default number of wave cycles across the track.
    pub const WAVE_FREQUENCY: f32 = 5.0;
}

/// How the determinate active indicator is drawn.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum IndicatorMode {
    /// Filled (optionally rounded) bar.
    #[default]
    Plain,
    /// Sinusoidal stroke whose amplitude breathes with progress.
    Expressive,
}

/// Errors raised when an [`IndicatorConfig`] violates its invariants.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    /// Expressive mode needs a non-zero, finite wave frequency.
    #[error("expressive mode requires a non-zero finite frequency, got {0}")]
    InvalidFrequency(f32),
    /// The minimum thickness must be positive.
    #[error("min_thickness must be positive and finite, got {0}")]
    NonPositiveThickness(f64),
    /// A length was negative or not finite.
    #[error("{field} must be a finite, non-negative length, got {value}")]
    InvalidLength {
        /// Name of the offending field.
        field: &'static str,
        /// Offending value in dp.
        value: f64,
    },
}

/// Immutable configuration for one linear progress indicator.
#[derive(Clone, Debug, PartialEq, Setters)]
pub struct IndicatorConfig {
    /// Current progress in the range 0.0..=1.0.
    ///
    /// When `None`, the indicator renders in indeterminate mode. Values
    /// outside the range are clamped when painting.
    #[setters(strip_option)]
    pub value: Option<f32>,

    /// Minimum thickness of the bar.
    #[setters(strip_option)]
    pub min_thickness: Option<Dp>,

    /// Gap between the active indicator and the track.
    #[setters(strip_option)]
    pub track_gap: Option<Dp>,

    /// Corner radius applied to the track and the active indicator.
    #[setters(strip_option)]
    pub border_radius: Option<Dp>,

    /// Radius of the stop indicator drawn at the trailing end.
    #[setters(strip_option)]
    pub stop_indicator_radius: Option<Dp>,

    /// Plain or expressive (wavy) rendering.
    pub mode: IndicatorMode,

    /// Peak amplitude of the expressive wave.
    pub amplitude: Dp,

    /// Number of wave cycles across the track.
    pub frequency: f32,

    /// Color of the active indicator.
    #[setters(strip_option)]
    pub color: Option<Color>,

    /// Color of the inactive track.
    #[setters(strip_option)]
    pub track_color: Option<Color>,

    /// Color of the stop indicator.
    #[setters(strip_option)]
    pub stop_indicator_color: Option<Color>,

    /// Label announced by assistive technologies.
    #[setters(strip_option, into)]
    pub semantics_label: Option<String>,

    /// Value string announced instead of the computed percentage.
    #[setters(strip_option, into)]
    pub semantics_value: Option<String>,
}

impl Default for IndicatorConfig {
    fn default() -> Self {
        Self {
            value: None,
            min_thickness: None,
            track_gap: None,
            border_radius: None,
            stop_indicator_radius: None,
            mode: IndicatorMode::Plain,
            amplitude: ProgressIndicatorDefaults::WAVE_AMPLITUDE,
            frequency: ProgressIndicatorDefaults::WAVE_FREQUENCY,
            color: None,
            track_color: None,
            stop_indicator_color: None,
            semantics_label: None,
            semantics_value: None,
        }
    }
}

impl IndicatorConfig {
    /// Clears the value, switching to indeterminate mode.
    pub fn indeterminate(mut self) -> Self {
        self.value = None;
        self
    }

    /// Whether the indicator loops without a known completion fraction.
    pub fn is_indeterminate(&self) -> bool {
        self.value.is_none()
    }

    /// Checks the configuration invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.mode == IndicatorMode::Expressive
            && (self.frequency == 0.0 || !self.frequency.is_finite())
        {
            return Err(ConfigError::InvalidFrequency(self.frequency));
        }
        if let Some(thickness) = self.min_thickness
            && !(thickness.0.is_finite() && thickness.0 > 0.0)
        {
            return Err(ConfigError::NonPositiveThickness(thickness.0));
        }

        let lengths = [
            ("track_gap", self.track_gap),
            ("border_radius", self.border_radius),
            ("stop_indicator_radius", self.stop_indicator_radius),
            ("amplitude", Some(self.amplitude)),
        ];
        for (field, length) in lengths {
            if let Some(length) = length
                && !length.is_valid_length()
            {
                return Err(ConfigError::InvalidLength {
                    field,
                    value: length.0,
                });
            }
        }
        Ok(())
    }
}

/// Clamps a progress value into `0.0..=1.0`, mapping NaN to zero.
pub(crate) fn sanitize_progress(value: f32) -> f32 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid_and_indeterminate() {
        let config = IndicatorConfig::default();
        assert!(config.is_indeterminate());
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn setters_strip_options() {
        let config = IndicatorConfig::default()
            .value(0.3)
            .track_gap(Dp(6.0))
            .semantics_label("Downloading");
        assert_eq!(config.value, Some(0.3));
        assert_eq!(config.track_gap, Some(Dp(6.0)));
        assert_eq!(config.semantics_label.as_deref(), Some("Downloading"));
        assert!(config.indeterminate().is_indeterminate());
    }

    #[test]
    fn expressive_rejects_zero_frequency() {
        let config = IndicatorConfig::default()
            .mode(IndicatorMode::Expressive)
            .frequency(0.0);
        assert_eq!(config.validate(), Err(ConfigError::InvalidFrequency(0.0)));
    }

    #[test]
    fn plain_mode_ignores_frequency() {
        let config = IndicatorConfig::default().frequency(0.0);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn rejects_non_positive_thickness() {
        let config = IndicatorConfig::default().min_thickness(Dp(0.0));
        assert_eq!(
            config.validate(),
            Err(ConfigError::NonPositiveThickness(0.0))
        );
    }

    #[test]
    fn rejects_negative_lengths() {
        let config = IndicatorConfig::default().border_radius(Dp(-2.0));
        assert_eq!(
            config.validate(),
            Err(ConfigError::InvalidLength {
                field: "border_radius",
                value: -2.0
            })
        );
    }

    #[test]
    fn sanitize_clamps_and_handles_nan() {
        assert_eq!(sanitize_progress(-0.5), 0.0);
        assert_eq!(sanitize_progress(1.5), 1.0);
        assert_eq!(sanitize_progress(0.25), 0.25);
        assert_eq!(sanitize_progress(f32::NAN), 0.0);
    }
}
