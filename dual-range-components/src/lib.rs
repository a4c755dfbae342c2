//! Components built on `dual-range-ui`.
//!
//! # Components
//!
//! - [`range_slider`] - a dual-thumb range slider selecting `(lower, upper)`
//!   over a bounded interval, with optional value tooltips
//!
//! # Theming
//!
//! [`theme::RangeSliderTheme`] carries the colors and metrics the render
//! scene is built from. Every field has a `derive_setters` setter:
//!
//! ```
//! use dual_range_components::{
//!     range_slider::{RangeSlider, RangeSliderArgs},
//!     theme::RangeSliderTheme,
//! };
//! use dual_range_ui::{Dp, Px};
//!
//! let slider = RangeSlider::new(
//!     RangeSliderArgs::default().theme(RangeSliderTheme::default().thumb_width(Dp(20.0))),
//! )?;
//! let scene = slider.scene(Px(240));
//! assert_eq!(scene.layout.content_width, Px(200));
//! # Ok::<(), dual_range_components::range_slider::RangeSliderError>(())
//! ```
#![deny(missing_docs, clippy::unwrap_used)]

pub mod range_slider;
pub mod theme;
