//! Physical pixel coordinates.
//!
//! Pointer input arrives from the host in physical pixels relative to the
//! component's top-left corner, and component layouts are resolved into the
//! same space.
//!
//! # Key Types
//!
//! - [`Px`] - a single physical pixel coordinate, negative values allowed
//! - [`PxPosition`] - a 2D position (x, y)
//! - [`PxSize`] - a 2D size (width, height)
//! - [`PxRect`] - an axis-aligned rectangle
//!
//! # Coordinate System
//!
//! - Origin (0, 0) at the top-left corner
//! - X-axis increases to the right
//! - Y-axis increases downward
//!
//! # Example
//!
//! ```
//! use dual_range_ui::px::{Px, PxPosition, PxRect};
//!
//! let rect = PxRect::new(Px(10), Px(0), Px(100), Px(24));
//! assert!(rect.contains(PxPosition::new(Px(60), Px(12))));
//! assert_eq!(rect.fraction_x(Px(60)), 0.5);
//! ```

/// A physical pixel coordinate value.
///
/// Unlike density-independent pixels ([`Dp`](crate::Dp)), physical pixels are not scaled
/// based on screen density.
#[derive(Debug, Default, Clone, Copy, PartialEq, PartialOrd, Eq, Ord, Hash)]
pub struct Px(pub i32);

impl Px {
    /// A constant representing zero pixels.
    pub const ZERO: Self = Self(0);

    /// A constant representing the maximum possible pixel value.
    pub const MAX: Self = Self(i32::MAX);

    /// Returns the raw i32 value.
    pub fn raw(self) -> i32 {
        self.0
    }

    /// Converts the pixel value to f64.
    pub fn to_f64(self) -> f64 {
        self.0 as f64
    }

    /// Creates a `Px` from an f32 value, saturating at the numeric bounds
    /// instead of overflowing.
    ///
    /// ```
    /// use dual_range_ui::px::Px;
    ///
    /// assert_eq!(Px::saturating_from_f32(42.7).raw(), 42);
    /// assert_eq!(Px::saturating_from_f32(f32::MAX).raw(), i32::MAX);
    /// ```
    pub fn saturating_from_f32(value: f32) -> Self {
        let clamped_value = value.clamp(i32::MIN as f32, i32::MAX as f32);
        Px(clamped_value as i32)
    }

    /// Creates a `Px` from an f64 value, rounding to the nearest pixel and
    /// saturating at the numeric bounds. NaN maps to zero.
    pub fn round_from_f64(value: f64) -> Self {
        if value.is_nan() {
            return Px::ZERO;
        }
        Px(value.round().clamp(i32::MIN as f64, i32::MAX as f64) as i32)
    }

    /// Saturating integer subtraction.
    pub fn saturating_sub(self, rhs: Self) -> Self {
        Px(self.0.saturating_sub(rhs.0))
    }
}

/// A 2D position in physical pixel space.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PxPosition {
    /// The x-coordinate in physical pixels.
    pub x: Px,
    /// The y-coordinate in physical pixels.
    pub y: Px,
}

impl PxPosition {
    /// A constant representing the origin.
    pub const ZERO: Self = Self { x: Px(0), y: Px(0) };

    /// Creates a new position from x and y coordinates.
    pub const fn new(x: Px, y: Px) -> Self {
        Self { x, y }
    }
}

/// A 2D size in physical pixel space.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PxSize {
    /// The width in physical pixels.
    pub width: Px,
    /// The height in physical pixels.
    pub height: Px,
}

impl PxSize {
    /// A constant representing zero size.
    pub const ZERO: Self = Self {
        width: Px(0),
        height: Px(0),
    };

    /// Creates a new size from width and height.
    pub const fn new(width: Px, height: Px) -> Self {
        Self { width, height }
    }
}

/// A 2D rectangle in physical pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PxRect {
    /// The x-coordinate of the top-left corner
    pub x: Px,
    /// The y-coordinate of the top-left corner
    pub y: Px,
    /// The width of the rectangle
    pub width: Px,
    /// The height of the rectangle
    pub height: Px,
}

impl PxRect {
    /// A constant representing a zero rectangle (0×0 at position (0, 0)).
    pub const ZERO: Self = Self {
        x: Px::ZERO,
        y: Px::ZERO,
        width: Px::ZERO,
        height: Px::ZERO,
    };

    /// Creates a new rectangle from position and size.
    pub const fn new(x: Px, y: Px, width: Px, height: Px) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// The x-coordinate of the right edge (exclusive).
    pub fn right(&self) -> Px {
        self.x + self.width
    }

    /// Whether the point lies inside the rectangle.
    pub fn contains(&self, point: PxPosition) -> bool {
        point.x.0 >= self.x.0
            && point.x.0 < self.x.0 + self.width.0
            && point.y.0 >= self.y.0
            && point.y.0 < self.y.0 + self.height.0
    }

    /// Fractional horizontal offset of `x` along the rectangle.
    ///
    /// The result is not clamped: points left of the rectangle yield negative
    /// values, points right of it values above one. A zero-width rectangle
    /// yields zero.
    pub fn fraction_x(&self, x: Px) -> f64 {
        if self.width.0 == 0 {
            return 0.0;
        }
        (x.0 - self.x.0) as f64 / self.width.0 as f64
    }
}

impl std::ops::Add for Px {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Px(self.0 + rhs.0)
    }
}

impl std::ops::Sub for Px {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Px(self.0 - rhs.0)
    }
}

impl std::ops::Mul<i32> for Px {
    type Output = Self;

    fn mul(self, rhs: i32) -> Self::Output {
        Px(self.0 * rhs)
    }
}

impl std::ops::Div<i32> for Px {
    type Output = Self;

    fn div(self, rhs: i32) -> Self::Output {
        Px(self.0 / rhs)
    }
}
