use dual_range_ui::{
    CursorEventContent, CursorIcon, PointerInput, PressKeyEventType, Px, PxPosition,
};
use smallvec::SmallVec;
use tracing::debug;

use super::{RangeEvent, RangeEventKind, RangeSliderController, RangeSliderLayout, Thumb};

/// Notifications synthesized while the controller lock is held.
pub(crate) type PendingEvents = SmallVec<[RangeEvent; 2]>;

/// Keyboard and accessibility actions on a thumb.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThumbAction {
    /// Move up by one step.
    Increment,
    /// Move down by one step.
    Decrement,
    /// Move up by ten steps.
    PageIncrement,
    /// Move down by ten steps.
    PageDecrement,
    /// Jump to the sub-control's lower bound.
    ToMin,
    /// Jump to the sub-control's upper bound.
    ToMax,
}

/// Number of steps a page action moves.
const PAGE_STEPS: f64 = 10.0;

pub(super) fn layout_for(controller: &RangeSliderController, width: Px) -> RangeSliderLayout {
    RangeSliderLayout::new(width, &controller.theme, &controller.split())
}

pub(super) fn handle_pointer(
    controller: &mut RangeSliderController,
    input: &mut PointerInput,
) -> PendingEvents {
    let mut events = PendingEvents::new();
    let width = input.size.width;
    let cursor = input.cursor_position_rel;
    let hit = cursor.and_then(|pos| layout_for(controller, width).hit_test(pos));

    if controller.is_disabled() {
        if hit.is_some() {
            input.requests.cursor_icon = CursorIcon::NotAllowed;
        }
        return events;
    }

    update_hover(controller, hit, cursor);

    if hit.is_some() || controller.dragging.is_some() {
        input.requests.cursor_icon = CursorIcon::Pointer;
    }

    for event in &input.cursor_events {
        match event.content {
            CursorEventContent::Pressed(PressKeyEventType::Left) => {
                if let (Some(thumb), Some(pos)) = (hit, cursor) {
                    start_drag(controller, thumb);
                    events.extend(drag_to(controller, thumb, pos, width));
                }
            }
            CursorEventContent::Released(PressKeyEventType::Left) => {
                events.extend(end_drag(controller));
            }
            _ => {}
        }
    }

    // The dragged thumb keeps following the pointer outside the component.
    if let (Some(thumb), Some(pos)) = (controller.dragging, cursor) {
        events.extend(drag_to(controller, thumb, pos, width));
    }

    events
}

fn update_hover(
    controller: &mut RangeSliderController,
    hit: Option<Thumb>,
    cursor: Option<PxPosition>,
) {
    if controller.hovered == hit {
        if let Some(pos) = cursor {
            controller.tooltip.pointer_move(pos);
        }
        return;
    }
    if let Some(previous) = controller.hovered {
        controller.tooltip.pointer_leave(previous);
    }
    controller.hovered = hit;
    if let (Some(thumb), Some(pos)) = (hit, cursor) {
        controller.tooltip.pointer_enter(thumb, pos);
    }
}

fn start_drag(controller: &mut RangeSliderController, thumb: Thumb) {
    debug!(?thumb, "range slider drag started");
    controller.dragging = Some(thumb);
    controller.focused = Some(thumb);
    controller.focus_visible = false;
    controller.tooltip.press(thumb);
}

fn drag_to(
    controller: &mut RangeSliderController,
    thumb: Thumb,
    pos: PxPosition,
    width: Px,
) -> Option<RangeEvent> {
    let fraction = layout_for(controller, width).fraction_at(thumb, pos.x);
    let value = controller.sub_control(thumb).value_at(fraction);
    controller.update_thumb(thumb, value, RangeEventKind::Input)
}

fn end_drag(controller: &mut RangeSliderController) -> Option<RangeEvent> {
    let thumb = controller.dragging.take()?;
    debug!(?thumb, "range slider drag ended");
    controller.tooltip.release();
    controller.sync_from_sub_controls(RangeEventKind::Change)
}

pub(super) fn handle_action(
    controller: &mut RangeSliderController,
    thumb: Thumb,
    action: ThumbAction,
) -> PendingEvents {
    let mut events = PendingEvents::new();
    if controller.is_disabled() {
        return events;
    }
    controller.focused = Some(thumb);
    controller.focus_visible = true;

    let (min, max) = controller.range();
    let increment = controller.step().increment(min, max);
    let control = controller.sub_control(thumb);
    let target = match action {
        ThumbAction::Increment => control.value() + increment,
        ThumbAction::Decrement => control.value() - increment,
        ThumbAction::PageIncrement => control.value() + increment * PAGE_STEPS,
        ThumbAction::PageDecrement => control.value() - increment * PAGE_STEPS,
        ThumbAction::ToMin => control.min(),
        ThumbAction::ToMax => control.max(),
    };

    events.extend(controller.update_thumb(thumb, target, RangeEventKind::Input));
    events.extend(controller.sync_from_sub_controls(RangeEventKind::Change));
    events
}
