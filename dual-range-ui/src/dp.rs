//! # Density-Independent Pixels (Dp)
//!
//! [`Dp`] is the unit component themes are written in. It is converted to
//! physical pixels ([`Px`]) through the global [`SCALE_FACTOR`], which the host
//! sets once it knows the display density.
//!
//! ## Usage
//!
//! ```
//! use dual_range_ui::Dp;
//!
//! let thumb = Dp(24.0);
//! let pixels = thumb.to_pixels_f32();
//! assert!(pixels > 0.0);
//! ```

use std::sync::OnceLock;

use parking_lot::RwLock;

use crate::Px;

/// Global scale factor for converting between density-independent pixels and
/// physical pixels.
///
/// - Scale factor of 1.0: 1 dp = 1 pixel (standard density)
/// - Scale factor of 2.0: 1 dp = 2 pixels (high density)
///
/// When never initialised, conversions use 1.0.
pub static SCALE_FACTOR: OnceLock<RwLock<f64>> = OnceLock::new();

/// Installs or replaces the global scale factor.
pub fn set_scale_factor(scale_factor: f64) {
    let lock = SCALE_FACTOR.get_or_init(|| RwLock::new(1.0));
    *lock.write() = scale_factor;
}

/// Density-independent pixels (dp) for UI scaling.
#[derive(Debug, Default, Clone, Copy, PartialEq, PartialOrd)]
pub struct Dp(pub f64);

impl Dp {
    /// Converts this dp value to physical pixels as an `f64`.
    pub fn to_pixels_f64(&self) -> f64 {
        let scale_factor = SCALE_FACTOR.get().map(|lock| *lock.read()).unwrap_or(1.0);
        self.0 * scale_factor
    }

    /// Converts this dp value to physical pixels as an `f32`.
    pub fn to_pixels_f32(&self) -> f32 {
        self.to_pixels_f64() as f32
    }

    /// Converts this dp value to physical pixels ([`Px`]).
    pub fn to_px(&self) -> Px {
        Px::saturating_from_f32(self.to_pixels_f32())
    }
}
