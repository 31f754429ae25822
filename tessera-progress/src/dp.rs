//! # Density-Independent Pixels (Dp)
//!
//! Indicator dimensions (thickness, gap, radii, wave amplitude) are
//! configured in [`Dp`] and converted to physical pixels right before
//! geometry is computed.
//!
//! ## Scale Factor
//!
//! The conversion is controlled by the global [`SCALE_FACTOR`]. When it has
//! not been initialized, 1 dp equals 1 physical pixel.
//!
//! ```
//! use tessera_progress::Dp;
//!
//! let gap = Dp(4.0);
//! let pixels = gap.to_pixels_f32();
//! assert!(pixels > 0.0);
//! ```

use std::sync::OnceLock;

use parking_lot::RwLock;

/// Global scale factor for converting between density-independent pixels and
/// physical pixels.
///
/// Typically set once at startup from the host window's DPI, and updated
/// when the window moves to a display with a different density.
pub static SCALE_FACTOR: OnceLock<RwLock<f64>> = OnceLock::new();

/// Sets the global scale factor, initializing it on first use.
pub fn set_scale_factor(scale_factor: f64) {
    let lock = SCALE_FACTOR.get_or_init(|| RwLock::new(1.0));
    *lock.write() = scale_factor;
}

fn scale_factor() -> f64 {
    SCALE_FACTOR.get().map(|lock| *lock.read()).unwrap_or(1.0)
}

/// Density-independent pixels (dp) for UI scaling.
#[derive(Debug, Default, Clone, Copy, PartialEq, PartialOrd)]
pub struct Dp(pub f64);

impl Dp {
    /// Zero dp.
    pub const ZERO: Dp = Dp(0.0);

    /// Creates a new `Dp` instance with the specified value.
    pub const fn new(value: f64) -> Self {
        Dp(value)
    }

    /// Converts this dp value to physical pixels as an `f64`.
    pub fn to_pixels_f64(&self) -> f64 {
        self.0 * scale_factor()
    }

    /// Converts this dp value to physical pixels as an `f32`.
    pub fn to_pixels_f32(&self) -> f32 {
        (self.0 * scale_factor()) as f32
    }

    /// Creates a `Dp` value from physical pixels specified as an `f32`.
    pub fn from_pixels_f32(value: f32) -> Self {
        Dp((value as f64) / scale_factor())
    }

    /// Whether the value is finite and not negative.
    pub(crate) fn is_valid_length(&self) -> bool {
        self.0.is_finite() && self.0 >= 0.0
    }
}

impl From<f64> for Dp {
    fn from(value: f64) -> Self {
        Dp::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_length() {
        assert!(Dp(4.0).is_valid_length());
        assert!(Dp::ZERO.is_valid_length());
        assert!(!Dp(-1.0).is_valid_length());
        assert!(!Dp(f64::NAN).is_valid_length());
        assert!(!Dp(f64::INFINITY).is_valid_length());
    }

    #[test]
    fn from_f64() {
        let dp: Dp = 2.5.into();
        assert_eq!(dp, Dp(2.5));
    }
}
