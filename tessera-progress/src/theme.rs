//! Theme resolution for progress indicators.
//!
//! ## Usage
//!
//! Pick a [`ThemeVariant`], optionally provide an ambient
//! [`ProgressIndicatorTheme`], and call [`resolve_theme`] whenever the
//! configuration or theme changes. Each field takes the first value present
//! in: the widget's [`IndicatorConfig`], the ambient theme, the variant's
//! defaults.

use derive_setters::Setters;
use material_color_utilities::{
    dynamiccolor::{DynamicSchemeBuilder, MaterialDynamicColors, SpecVersion, Variant},
    hct::Hct,
};

use crate::{
    color::Color,
    config::{IndicatorConfig, ProgressIndicatorDefaults},
    dp::Dp,
};

const DEFAULT_COLOR: Color = Color::from_rgb(0.4039, 0.3137, 0.6431); // #6750A4

/// Alpha applied to the primary color for the legacy track.
const LEGACY_TRACK_ALPHA: f32 = 0.24;

/// The subset of a Material color scheme used by progress indicators,
/// produced from a seed color.
#[derive(Clone, Debug, PartialEq)]
pub struct MaterialColorScheme {
    /// Indicates if the scheme is dark mode (`true`) or light mode (`false`).
    pub is_dark: bool,
    /// The primary color of the scheme.
    pub primary: Color,
    /// A container color for `secondary`.
    pub secondary_container: Color,
    /// Highest-emphasis surface container.
    pub surface_container_highest: Color,
}

impl MaterialColorScheme {
    /// Generates a light color scheme derived from the provided seed color.
    pub fn light_from_seed(seed: Color) -> Self {
        scheme_from_seed(seed, false)
    }

    /// Generates a dark color scheme derived from the provided seed color.
    pub fn dark_from_seed(seed: Color) -> Self {
        scheme_from_seed(seed, true)
    }
}

impl Default for MaterialColorScheme {
    fn default() -> Self {
        MaterialColorScheme::light_from_seed(DEFAULT_COLOR)
    }
}

/// Selects which set of built-in defaults fills the gaps left by the widget
/// and the ambient theme.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ThemeVariant {
    /// Pre-Material 3 look: translucent primary track, square ends.
    Legacy,
    /// Material 3 as specified in 2023: no gap and no stop indicator.
    Material2023,
    /// Current Material 3: rounded bars, track gap and stop indicator.
    #[default]
    Material,
}

impl ThemeVariant {
    /// Returns the fully populated default record for this variant.
    pub fn defaults(self, scheme: &MaterialColorScheme) -> ProgressIndicatorTheme {
        match self {
            ThemeVariant::Legacy => ProgressIndicatorTheme {
                color: Some(scheme.primary),
                track_color: Some(scheme.primary.with_alpha(LEGACY_TRACK_ALPHA)),
                stop_indicator_color: None,
                min_height: Some(ProgressIndicatorDefaults::LINEAR_MIN_HEIGHT),
                border_radius: None,
                stop_indicator_radius: None,
                track_gap: None,
            },
            ThemeVariant::Material2023 => ProgressIndicatorTheme {
                color: Some(scheme.primary),
                track_color: Some(scheme.surface_container_highest),
                stop_indicator_color: None,
                min_height: Some(ProgressIndicatorDefaults::LINEAR_MIN_HEIGHT),
                border_radius: None,
                stop_indicator_radius: None,
                track_gap: None,
            },
            ThemeVariant::Material => ProgressIndicatorTheme {
                color: Some(scheme.primary),
                track_color: Some(scheme.secondary_container),
                stop_indicator_color: Some(scheme.primary),
                min_height: Some(ProgressIndicatorDefaults::LINEAR_MIN_HEIGHT),
                border_radius: Some(ProgressIndicatorDefaults::LINEAR_BORDER_RADIUS),
                stop_indicator_radius: Some(
                    ProgressIndicatorDefaults::LINEAR_STOP_INDICATOR_RADIUS,
                ),
                track_gap: Some(ProgressIndicatorDefaults::LINEAR_INDICATOR_TRACK_GAP_SIZE),
            },
        }
    }
}

/// Ambient, app-wide overrides for progress indicators. Every field is
/// optional.
#[derive(Clone, Debug, Default, PartialEq, Setters)]
#[setters(strip_option)]
pub struct ProgressIndicatorTheme {
    /// Color of the active indicator.
    pub color: Option<Color>,
    /// Color of the inactive track.
    pub track_color: Option<Color>,
    /// Color of the stop indicator.
    pub stop_indicator_color: Option<Color>,
    /// Minimum thickness of the bar.
    pub min_height: Option<Dp>,
    /// Corner radius of the track and active indicator.
    pub border_radius: Option<Dp>,
    /// Radius of the stop indicator.
    pub stop_indicator_radius: Option<Dp>,
    /// Gap between the active indicator and the track.
    pub track_gap: Option<Dp>,
}

/// Flattened colors and pixel geometry consumed by the painter.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResolvedTheme {
    /// Color of the active indicator.
    pub color: Color,
    /// Color of the inactive track.
    pub track_color: Color,
    /// Color of the stop indicator.
    pub stop_indicator_color: Color,
    /// Minimum thickness in physical pixels.
    pub min_height: f32,
    /// Corner radius in physical pixels, `None` for square corners.
    pub border_radius: Option<f32>,
    /// Stop indicator radius in physical pixels, `None` to omit it.
    pub stop_indicator_radius: Option<f32>,
    /// Track gap in physical pixels.
    pub track_gap: f32,
}

/// Merges the widget configuration, the ambient theme and the variant's
/// defaults into a [`ResolvedTheme`].
pub fn resolve_theme(
    config: &IndicatorConfig,
    ambient: Option<&ProgressIndicatorTheme>,
    variant: ThemeVariant,
    scheme: &MaterialColorScheme,
) -> ResolvedTheme {
    let defaults = variant.defaults(scheme);
    let ambient = ambient.cloned().unwrap_or_default();

    let color = config
        .color
        .or(ambient.color)
        .or(defaults.color)
        .unwrap_or(scheme.primary);
    let track_color = config
        .track_color
        .or(ambient.track_color)
        .or(defaults.track_color)
        .unwrap_or(Color::TRANSPARENT);
    // The stop indicator follows the active color unless told otherwise.
    let stop_indicator_color = config
        .stop_indicator_color
        .or(ambient.stop_indicator_color)
        .or(defaults.stop_indicator_color)
        .unwrap_or(color);
    let min_height = config
        .min_thickness
        .or(ambient.min_height)
        .or(defaults.min_height)
        .unwrap_or(ProgressIndicatorDefaults::LINEAR_MIN_HEIGHT);
    let border_radius = config
        .border_radius
        .or(ambient.border_radius)
        .or(defaults.border_radius);
    let stop_indicator_radius = config
        .stop_indicator_radius
        .or(ambient.stop_indicator_radius)
        .or(defaults.stop_indicator_radius);
    let track_gap = config
        .track_gap
        .or(ambient.track_gap)
        .or(defaults.track_gap)
        .unwrap_or(Dp::ZERO);

    ResolvedTheme {
        color,
        track_color,
        stop_indicator_color,
        min_height: min_height.to_pixels_f32(),
        border_radius: border_radius
            .map(|radius| radius.to_pixels_f32())
            .filter(|radius| *radius > 0.0),
        stop_indicator_radius: stop_indicator_radius
            .map(|radius| radius.to_pixels_f32())
            .filter(|radius| *radius > 0.0),
        track_gap: track_gap.to_pixels_f32().max(0.0),
    }
}

fn scheme_from_seed(seed: Color, is_dark: bool) -> MaterialColorScheme {
    let scheme = DynamicSchemeBuilder::default()
        .source_color_hct(Hct::from_int(color_to_argb(seed)))
        .variant(Variant::TonalSpot)
        .spec_version(SpecVersion::Spec2025)
        .is_dark(is_dark)
        .build();
    let dynamic_colors = MaterialDynamicColors::new();

    MaterialColorScheme {
        is_dark,
        primary: argb_to_color(dynamic_colors.primary().get_argb(&scheme)),
        secondary_container: argb_to_color(dynamic_colors.secondary_container().get_argb(&scheme)),
        surface_container_highest: argb_to_color(
            dynamic_colors.surface_container_highest().get_argb(&scheme),
        ),
    }
}

fn linear_to_srgb_channel(v: f32) -> f32 {
    let v = v.clamp(0.0, 1.0);
    if v <= 0.003_130_8 {
        v * 12.92
    } else {
        1.055 * v.powf(1.0 / 2.4) - 0.055
    }
}

fn srgb_to_linear_channel(v: f32) -> f32 {
    let v = v.clamp(0.0, 1.0);
    if v <= 0.04045 {
        v / 12.92
    } else {
        ((v + 0.055) / 1.055).powf(2.4)
    }
}

fn color_to_argb(color: Color) -> u32 {
    let r = (linear_to_srgb_channel(color.r) * 255.0 + 0.5) as u32;
    let g = (linear_to_srgb_channel(color.g) * 255.0 + 0.5) as u32;
    let b = (linear_to_srgb_channel(color.b) * 255.0 + 0.5) as u32;
    let a = (color.a.clamp(0.0, 1.0) * 255.0 + 0.5) as u32;
    (a << 24) | (r << 16) | (g << 8) | b
}

fn argb_to_color(argb: u32) -> Color {
    let a = ((argb >> 24) & 0xFF) as f32 / 255.0;
    let r_srgb = ((argb >> 16) & 0xFF) as f32 / 255.0;
    let g_srgb = ((argb >> 8) & 0xFF) as f32 / 255.0;
    let b_srgb = (argb & 0xFF) as f32 / 255.0;
    Color::new(
        srgb_to_linear_channel(r_srgb),
        srgb_to_linear_channel(g_srgb),
        srgb_to_linear_channel(b_srgb),
        a,
    )
}
