//! Declarative render scene handed to the host.

use dual_range_ui::{Color, Dp, Px, PxPosition, PxRect, PxSize};
use smallvec::SmallVec;

use super::{
    RangeSliderController, RangeSliderLayout, SplitFractions, Thumb, TooltipFormatter,
    TooltipLabel, TooltipPhase, interaction::layout_for,
};
use crate::theme::RangeSliderTheme;

/// Height of one `em` of tooltip text.
const TOOLTIP_EM: Dp = Dp(16.0);
/// Gap between a hover tooltip and the top of its sub-control.
const HOVER_TOOLTIP_OFFSET: Dp = Dp(20.0);

/// Custom properties the host scopes to the sliding container.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StyleProperties {
    /// Fill start of the lower track, in `[0, 1]`.
    pub position_0: f64,
    /// Fill end of the upper track, in `[0, 1]`.
    pub position_1: f64,
}

impl StyleProperties {
    /// Property name of [`StyleProperties::position_0`].
    pub const POSITION_0: &'static str = "--dri-position-0";
    /// Property name of [`StyleProperties::position_1`].
    pub const POSITION_1: &'static str = "--dri-position-1";

    /// Property names with percentage values.
    ///
    /// ```
    /// use dual_range_components::range_slider::StyleProperties;
    ///
    /// let style = StyleProperties { position_0: 0.5, position_1: 1.0 };
    /// assert_eq!(
    ///     style.to_css(),
    ///     [
    ///         ("--dri-position-0", "50%".to_string()),
    ///         ("--dri-position-1", "100%".to_string()),
    ///     ]
    /// );
    /// ```
    pub fn to_css(&self) -> [(&'static str, String); 2] {
        [
            (Self::POSITION_0, format!("{}%", self.position_0 * 100.0)),
            (Self::POSITION_1, format!("{}%", self.position_1 * 100.0)),
        ]
    }
}

impl From<&SplitFractions> for StyleProperties {
    fn from(split: &SplitFractions) -> Self {
        Self {
            position_0: split.position_0,
            position_1: split.position_1,
        }
    }
}

/// The track band of one sub-control.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackSegment {
    /// Sub-control the band belongs to.
    pub thumb: Thumb,
    /// Band bounds relative to the component.
    pub rect: PxRect,
    /// Unselected color.
    pub color: Color,
    /// Selected color.
    pub fill_color: Color,
    /// Selected span along the band, as `(start, end)` fractions.
    pub fill: (f64, f64),
}

/// Interaction state a thumb is painted in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThumbState {
    /// No interaction.
    Idle,
    /// The pointer rests over the thumb's sub-control.
    Hovered,
    /// The thumb is dragged or has keyboard focus.
    Active,
    /// The slider is disabled.
    Disabled,
}

/// A thumb to draw.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThumbVisual {
    /// Which thumb.
    pub thumb: Thumb,
    /// Centre relative to the component.
    pub center: PxPosition,
    /// Thumb size.
    pub size: PxSize,
    /// Corner radius.
    pub corner_radius: Px,
    /// Fill color for `state`.
    pub color: Color,
    /// Interaction state.
    pub state: ThumbState,
}

/// An anchor a host with anchor positioning attaches a tooltip to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThumbAnchor {
    /// Thumb carrying the anchor.
    pub thumb: Thumb,
}

impl ThumbAnchor {
    /// Anchor name, `--thumb1` or `--thumb2`.
    pub fn name(&self) -> &'static str {
        self.thumb.anchor_name()
    }
}

/// Where a tooltip goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TooltipPlacement {
    /// Centred above the anchor; the host resolves the position.
    Anchored(ThumbAnchor),
    /// Explicit position of the tooltip's bottom centre, relative to the
    /// component.
    Absolute {
        /// Horizontal centre.
        left: Px,
        /// Bottom edge.
        top: Px,
    },
}

/// Why a tooltip is visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TooltipKind {
    /// A thumb is dragged.
    Drag,
    /// The pointer rests over a sub-control.
    Hover,
}

/// A visible tooltip.
#[derive(Debug, Clone, PartialEq)]
pub struct TooltipVisual {
    /// Why it is visible.
    pub kind: TooltipKind,
    /// Sub-control it describes.
    pub thumb: Thumb,
    /// The formatted value.
    pub value: f64,
    /// Formatter output.
    pub label: TooltipLabel,
    /// Position.
    pub placement: TooltipPlacement,
    /// Stacking order.
    pub z_index: i32,
}

/// Everything a host needs to draw a range slider.
#[derive(Debug, Clone, PartialEq)]
pub struct RangeSliderScene {
    /// Resolved geometry.
    pub layout: RangeSliderLayout,
    /// Lower band first.
    pub tracks: [TrackSegment; 2],
    /// Lower thumb first.
    pub thumbs: [ThumbVisual; 2],
    /// Visible tooltips, lower first while dragging.
    pub tooltips: SmallVec<[TooltipVisual; 2]>,
    /// Container custom properties.
    pub style: StyleProperties,
}

impl RangeSliderScene {
    /// The track band of `thumb`.
    pub fn track(&self, thumb: Thumb) -> &TrackSegment {
        &self.tracks[thumb_index(thumb)]
    }

    /// The visual of `thumb`.
    pub fn thumb(&self, thumb: Thumb) -> &ThumbVisual {
        &self.thumbs[thumb_index(thumb)]
    }
}

fn thumb_index(thumb: Thumb) -> usize {
    match thumb {
        Thumb::Lower => 0,
        Thumb::Upper => 1,
    }
}

fn thumb_state(controller: &RangeSliderController, thumb: Thumb) -> ThumbState {
    if controller.is_disabled() {
        ThumbState::Disabled
    } else if controller.dragging() == Some(thumb)
        || (controller.focus_visible() && controller.focused() == Some(thumb))
    {
        ThumbState::Active
    } else if controller.hovered() == Some(thumb) {
        ThumbState::Hovered
    } else {
        ThumbState::Idle
    }
}

fn thumb_color(theme: &RangeSliderTheme, state: ThumbState) -> Color {
    match state {
        ThumbState::Idle => theme.thumb_color,
        ThumbState::Hovered => theme.thumb_hover_color,
        ThumbState::Active => theme.thumb_active_color,
        ThumbState::Disabled => theme.thumb_disabled_color,
    }
}

fn track_segment(
    controller: &RangeSliderController,
    layout: &RangeSliderLayout,
    split: &SplitFractions,
    thumb: Thumb,
) -> TrackSegment {
    let theme = controller.theme();
    let fill_color = if controller.is_disabled() {
        theme.track_filled_color_disabled
    } else {
        theme.track_filled_color
    };
    let fill = match thumb {
        Thumb::Lower => (split.position_0.clamp(0.0, 1.0), 1.0),
        Thumb::Upper => (0.0, split.position_1.clamp(0.0, 1.0)),
    };
    TrackSegment {
        thumb,
        rect: layout.track_rect(thumb),
        color: theme.track_color,
        fill_color,
        fill,
    }
}

fn thumb_visual(
    controller: &RangeSliderController,
    layout: &RangeSliderLayout,
    thumb: Thumb,
) -> ThumbVisual {
    let theme = controller.theme();
    let state = thumb_state(controller, thumb);
    ThumbVisual {
        thumb,
        center: layout.thumb_center(thumb, controller.sub_control(thumb)),
        size: layout.thumb_size,
        corner_radius: theme.thumb_radius.to_px(),
        color: thumb_color(theme, state),
        state,
    }
}

/// A visible tooltip whose label is not formatted yet.
#[derive(Debug, Clone, Copy)]
struct PendingTooltip {
    kind: TooltipKind,
    thumb: Thumb,
    value: f64,
    placement: TooltipPlacement,
    z_index: i32,
}

/// A scene captured under the controller lock, before tooltip labels are
/// formatted.
pub(super) struct SceneDraft {
    scene: RangeSliderScene,
    formatter: Option<TooltipFormatter>,
    tooltips: SmallVec<[PendingTooltip; 2]>,
}

impl SceneDraft {
    /// Formats the tooltip labels. Must run without the controller lock
    /// held, formatters may call back into the slider.
    pub(super) fn finish(self) -> RangeSliderScene {
        let Self {
            mut scene,
            formatter,
            tooltips,
        } = self;
        if let Some(formatter) = formatter {
            scene.tooltips = tooltips
                .into_iter()
                .map(|pending| TooltipVisual {
                    kind: pending.kind,
                    thumb: pending.thumb,
                    value: pending.value,
                    label: formatter.format(pending.value),
                    placement: pending.placement,
                    z_index: pending.z_index,
                })
                .collect();
        }
        scene
    }
}

fn tooltips(
    controller: &RangeSliderController,
    layout: &RangeSliderLayout,
) -> SmallVec<[PendingTooltip; 2]> {
    let mut pending = SmallVec::new();
    if controller.tooltip_formatter().is_none() {
        return pending;
    }
    let z_index = controller.theme().tooltip_z_index;

    match controller.tooltip_phase() {
        TooltipPhase::Idle => {}
        TooltipPhase::Hover { thumb, pointer } => {
            let rect = layout.rect(thumb);
            let value = controller
                .sub_control(thumb)
                .value_at(rect.fraction_x(pointer.x));
            pending.push(PendingTooltip {
                kind: TooltipKind::Hover,
                thumb,
                value,
                placement: TooltipPlacement::Absolute {
                    left: pointer.x,
                    top: rect.y - HOVER_TOOLTIP_OFFSET.to_px(),
                },
                z_index,
            });
        }
        TooltipPhase::Drag { .. } => {
            for thumb in Thumb::BOTH {
                let value = controller.sub_control(thumb).value();
                let placement = if controller.host.anchor_positioning {
                    TooltipPlacement::Anchored(ThumbAnchor { thumb })
                } else {
                    let rect = layout.rect(thumb);
                    let center = layout.thumb_center(thumb, controller.sub_control(thumb));
                    TooltipPlacement::Absolute {
                        left: center.x,
                        top: rect.y - layout.thumb_size.height / 2 - TOOLTIP_EM.to_px(),
                    }
                };
                pending.push(PendingTooltip {
                    kind: TooltipKind::Drag,
                    thumb,
                    value,
                    placement,
                    z_index,
                });
            }
        }
    }
    pending
}

pub(super) fn build_scene(controller: &RangeSliderController, width: Px) -> SceneDraft {
    let split = controller.split();
    let layout = layout_for(controller, width);
    SceneDraft {
        tooltips: tooltips(controller, &layout),
        formatter: controller.tooltip_formatter().cloned(),
        scene: RangeSliderScene {
            tracks: Thumb::BOTH.map(|thumb| track_segment(controller, &layout, &split, thumb)),
            thumbs: Thumb::BOTH.map(|thumb| thumb_visual(controller, &layout, thumb)),
            tooltips: SmallVec::new(),
            style: StyleProperties::from(&split),
            layout,
        },
    }
}

#[cfg(test)]
mod tests {
    use dual_range_ui::HostCapabilities;

    use super::*;
    use crate::range_slider::{
        RangeEventKind, ThumbAction, TooltipFormatter, TooltipOptions, interaction::handle_action,
    };

    fn formatted() -> RangeSliderController {
        let mut controller = RangeSliderController::new();
        controller.host = HostCapabilities::default();
        controller.set_tooltip_formatter(
            Some(TooltipFormatter::new(|v: f64| format!("{v:.0}"))),
            TooltipOptions::default(),
        );
        controller
    }

    #[test]
    fn test_idle_scene() {
        let controller = RangeSliderController::new();
        let scene = build_scene(&controller, Px(248)).finish();
        assert!(scene.tooltips.is_empty());
        assert_eq!(scene.track(Thumb::Lower).fill, (0.0, 1.0));
        assert_eq!(scene.track(Thumb::Upper).fill, (0.0, 1.0));
        assert_eq!(scene.thumb(Thumb::Lower).center, PxPosition::new(Px(12), Px(12)));
        assert_eq!(scene.thumb(Thumb::Upper).center, PxPosition::new(Px(236), Px(12)));
        assert_eq!(scene.thumb(Thumb::Upper).state, ThumbState::Idle);
    }

    #[test]
    fn test_style_properties_follow_values() {
        let mut controller = RangeSliderController::new();
        controller.set_values(25.0, 75.0).expect("valid values");
        let scene = build_scene(&controller, Px(248)).finish();
        assert_eq!(scene.style.position_0, 0.5);
        assert_eq!(scene.style.position_1, 0.5);
        assert_eq!(scene.track(Thumb::Lower).fill, (0.5, 1.0));
        assert_eq!(scene.track(Thumb::Upper).fill, (0.0, 0.5));
    }

    #[test]
    fn test_drag_shows_both_tooltips() {
        let mut controller = formatted();
        controller.dragging = Some(Thumb::Lower);
        controller.tooltip.press(Thumb::Lower);
        controller.update_thumb(Thumb::Lower, 30.0, RangeEventKind::Input);

        let scene = build_scene(&controller, Px(248)).finish();
        let labels: Vec<_> = scene
            .tooltips
            .iter()
            .map(|t| t.label.as_text().map(str::to_string))
            .collect();
        assert_eq!(labels, vec![Some("30".to_string()), Some("100".to_string())]);
        assert!(scene.tooltips.iter().all(|t| t.kind == TooltipKind::Drag));
        assert_eq!(scene.thumb(Thumb::Lower).state, ThumbState::Active);

        let lower = &scene.tooltips[0];
        let center = scene.thumb(Thumb::Lower).center;
        assert_eq!(
            lower.placement,
            TooltipPlacement::Absolute {
                left: center.x,
                top: Px(-28)
            }
        );
    }

    #[test]
    fn test_anchor_positioning_host() {
        let mut controller = formatted();
        controller.host = HostCapabilities::default().with_anchor_positioning(true);
        controller.tooltip.press(Thumb::Upper);
        let scene = build_scene(&controller, Px(248)).finish();
        match scene.tooltips[1].placement {
            TooltipPlacement::Anchored(anchor) => assert_eq!(anchor.name(), "--thumb2"),
            other => panic!("expected anchored placement, got {other:?}"),
        }
    }

    #[test]
    fn test_hover_tooltip_value_at_pointer() {
        let mut controller = formatted();
        controller.hovered = Some(Thumb::Upper);
        // Upper sub-control spans [124, 248) over [50, 100].
        controller
            .tooltip
            .pointer_enter(Thumb::Upper, PxPosition::new(Px(186), Px(3)));
        let scene = build_scene(&controller, Px(248)).finish();
        assert_eq!(scene.tooltips.len(), 1);
        let tooltip = &scene.tooltips[0];
        assert_eq!(tooltip.kind, TooltipKind::Hover);
        assert_eq!(tooltip.value, 75.0);
        assert_eq!(
            tooltip.placement,
            TooltipPlacement::Absolute {
                left: Px(186),
                top: Px(-20)
            }
        );
        assert_eq!(scene.thumb(Thumb::Upper).state, ThumbState::Hovered);
    }

    #[test]
    fn test_disabled_colors() {
        let mut controller = formatted();
        controller.set_disabled(true);
        let scene = build_scene(&controller, Px(248)).finish();
        let theme = RangeSliderTheme::default();
        assert_eq!(scene.thumb(Thumb::Lower).state, ThumbState::Disabled);
        assert_eq!(scene.thumb(Thumb::Lower).color, theme.thumb_disabled_color);
        assert_eq!(
            scene.track(Thumb::Upper).fill_color,
            theme.track_filled_color_disabled
        );
    }

    #[test]
    fn test_keyboard_focus_is_active() {
        let mut controller = RangeSliderController::new();
        handle_action(&mut controller, Thumb::Upper, ThumbAction::Decrement);
        let scene = build_scene(&controller, Px(248)).finish();
        assert_eq!(scene.thumb(Thumb::Upper).state, ThumbState::Active);
        assert_eq!(scene.thumb(Thumb::Lower).state, ThumbState::Idle);
    }
}
