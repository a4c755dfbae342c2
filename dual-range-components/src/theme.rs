//! Visual defaults for the range slider.

use derive_setters::Setters;
use dual_range_ui::{Color, Dp};

/// Colors and metrics of a range slider.
///
/// ```
/// use dual_range_components::theme::RangeSliderTheme;
/// use dual_range_ui::{Color, Dp};
///
/// let theme = RangeSliderTheme::default()
///     .thumb_width(Dp(16.0))
///     .track_filled_color(Color::from_rgb_u8(0x20, 0x80, 0xff));
/// assert_eq!(theme.thumb_height, Dp(24.0));
/// ```
#[derive(Debug, Clone, PartialEq, Setters)]
pub struct RangeSliderTheme {
    /// Height of the track band.
    pub track_height: Dp,
    /// Unselected track color.
    pub track_color: Color,
    /// Selected track color.
    pub track_filled_color: Color,
    /// Selected track color while disabled.
    pub track_filled_color_disabled: Color,
    /// Thumb width.
    pub thumb_width: Dp,
    /// Thumb height.
    pub thumb_height: Dp,
    /// Thumb corner radius.
    pub thumb_radius: Dp,
    /// Idle thumb color.
    pub thumb_color: Color,
    /// Thumb color while hovered.
    pub thumb_hover_color: Color,
    /// Thumb color while pressed or keyboard focused.
    pub thumb_active_color: Color,
    /// Thumb color while disabled.
    pub thumb_disabled_color: Color,
    /// Stacking order of tooltips above the control.
    pub tooltip_z_index: i32,
}

impl Default for RangeSliderTheme {
    fn default() -> Self {
        Self {
            track_height: Dp(4.0),
            track_color: Color::from_rgb_u8(0xcc, 0xcc, 0xcc),
            track_filled_color: Color::from_rgb_u8(0xf7, 0x2d, 0x9c),
            track_filled_color_disabled: Color::from_rgb_u8(0x77, 0x77, 0x77),
            thumb_width: Dp(24.0),
            thumb_height: Dp(24.0),
            thumb_radius: Dp(24.0),
            thumb_color: Color::from_rgb_u8(0xdd, 0xdd, 0xdd),
            thumb_hover_color: Color::from_rgb_u8(0xfb, 0x8c, 0xc9),
            thumb_active_color: Color::from_rgb_u8(0xfb, 0x8c, 0xc9),
            thumb_disabled_color: Color::from_rgb_u8(0x77, 0x77, 0x77),
            tooltip_z_index: 1,
        }
    }
}
