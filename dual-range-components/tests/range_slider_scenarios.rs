use std::sync::Arc;

use dual_range_components::range_slider::{
    DEFAULT_TAG, RangeEvent, RangeEventKind, RangeOptions, RangeSlider, RangeSliderArgs,
    RangeSliderError, Step, Thumb, ThumbAction, TooltipFormatter, TooltipKind, TooltipOptions,
};
use dual_range_ui::{
    CursorIcon, CursorState, HostCapabilities, PressKeyEventType, Px, PxPosition, PxSize,
    RegistrationOutcome, RegistryError,
};
use parking_lot::Mutex;

const WIDTH: Px = Px(248);
const ORIGIN: PxPosition = PxPosition::new(Px(100), Px(50));

/// Drives a slider the way a host does: raw cursor activity in host
/// coordinates, one component frame at a time.
struct Harness {
    slider: RangeSlider,
    cursor: CursorState,
    events: Arc<Mutex<Vec<RangeEvent>>>,
}

impl Harness {
    fn new(slider: RangeSlider) -> Self {
        let events = Arc::new(Mutex::new(Vec::new()));
        let sink = events.clone();
        slider.subscribe(move |event| sink.lock().push(event));
        Self {
            slider,
            cursor: CursorState::default(),
            events,
        }
    }

    /// Moves the cursor to `x` pixels from the component's left edge.
    fn move_to(&mut self, x: i32) -> CursorIcon {
        self.cursor
            .update_position(PxPosition::new(ORIGIN.x + Px(x), ORIGIN.y + Px(12)));
        self.frame()
    }

    fn press(&mut self) {
        self.cursor.press(PressKeyEventType::Left);
        self.frame();
    }

    fn release(&mut self) {
        self.cursor.release(PressKeyEventType::Left);
        self.frame();
    }

    fn frame(&mut self) -> CursorIcon {
        let mut input = self.cursor.frame(ORIGIN, PxSize::new(WIDTH, Px(24)));
        self.slider.handle_input(&mut input);
        input.requests.cursor_icon
    }

    fn kinds(&self) -> Vec<RangeEventKind> {
        self.events.lock().iter().map(|e| e.kind).collect()
    }
}

fn slider(args: RangeSliderArgs) -> RangeSlider {
    RangeSlider::new(args.host(HostCapabilities::default())).expect("valid args")
}

#[test]
fn full_range_splits_in_the_middle() {
    let slider = slider(RangeSliderArgs::default());
    assert_eq!(slider.values(), (0.0, 100.0));
    assert_eq!(slider.midpoint(), 50.0);
}

#[test]
fn dragging_lower_thumb_moves_midpoint() {
    let mut harness = Harness::new(slider(RangeSliderArgs::default()));

    assert_eq!(harness.move_to(12), CursorIcon::Pointer);
    harness.press();
    // 24px thumbs leave 200px of travel for 100 units: 2px per unit.
    harness.move_to(52);
    harness.move_to(72);
    harness.release();

    assert_eq!(harness.slider.values(), (30.0, 100.0));
    assert_eq!(harness.slider.midpoint(), 65.0);
    assert_eq!(
        harness.kinds(),
        vec![
            RangeEventKind::Input,
            RangeEventKind::Input,
            RangeEventKind::Change
        ]
    );
    assert_eq!(
        harness.events.lock().last().map(|e| e.values),
        Some((30.0, 100.0))
    );
}

#[test]
fn pointer_jitter_within_a_step_emits_nothing() {
    let mut harness = Harness::new(slider(RangeSliderArgs::default().step(Step::Fixed(10.0))));
    harness.move_to(12);
    harness.press();
    harness.move_to(14);
    harness.move_to(16);
    harness.release();
    assert!(harness.kinds().is_empty());
    assert_eq!(harness.slider.values(), (0.0, 100.0));
}

#[test]
fn continuous_step_uses_the_mean() {
    let slider = slider(
        RangeSliderArgs::default()
            .step(Step::Any)
            .values((20.0, 80.0)),
    );
    assert_eq!(slider.midpoint(), 50.0);
}

#[test]
fn set_values_is_idempotent() {
    let slider = slider(RangeSliderArgs::default().step(Step::Fixed(5.0)));
    slider.set_values(12.0, 63.0).expect("valid values");
    let first = (slider.values(), slider.midpoint(), slider.style_properties());
    slider.set_values(12.0, 63.0).expect("valid values");
    let second = (slider.values(), slider.midpoint(), slider.style_properties());
    assert_eq!(first, second);
    assert_eq!(first.0, (10.0, 65.0));
}

#[test]
fn set_values_rejects_inverted_pair_without_mutation() {
    let slider = slider(RangeSliderArgs::default());
    slider.set_values(10.0, 40.0).expect("valid values");
    let err = slider.set_values(5.0, 2.0).expect_err("inverted pair");
    assert_eq!(err, RangeSliderError::Inverted { lower: 5.0, upper: 2.0 });
    assert_eq!(slider.values(), (10.0, 40.0));

    let err = slider
        .set_values(f64::NAN, 2.0)
        .expect_err("non-finite pair");
    assert!(matches!(err, RangeSliderError::NonFinite { .. }));
}

#[test]
fn set_values_clamps_into_interval() {
    let slider = slider(RangeSliderArgs::default());
    slider.set_values(-40.0, 400.0).expect("valid values");
    assert_eq!(slider.values(), (0.0, 100.0));
}

#[test]
fn narrowing_the_range_clamps_the_selection() {
    let slider = slider(RangeSliderArgs::default());
    slider.set_values(10.0, 90.0).expect("valid values");
    slider
        .set_range(20.0, 50.0, RangeOptions::default())
        .expect("valid range");
    assert_eq!(slider.values(), (20.0, 50.0));
    assert!(slider.midpoint() >= 20.0 && slider.midpoint() <= 50.0);

    slider
        .set_range(
            0.0,
            1000.0,
            RangeOptions::default()
                .selected_values((100.0, 700.0))
                .step(Step::Fixed(50.0)),
        )
        .expect("valid range");
    assert_eq!(slider.values(), (100.0, 700.0));
    assert_eq!(slider.step(), Step::Fixed(50.0));
    assert_eq!(slider.attribute("step").as_deref(), Some("50"));
}

#[test]
fn range_too_fine_to_split_is_rejected_whole() {
    let slider = slider(RangeSliderArgs::default().max(1e10));
    slider.set_values(0.0, 1e9).expect("valid values");

    let err = slider
        .set_range(1.0, 1e10, RangeOptions::default().step(Step::Fixed(1e-300)))
        .expect_err("midpoint overflows");
    assert!(matches!(err, RangeSliderError::NoMidpoint { .. }));
    assert_eq!((slider.min(), slider.max()), (0.0, 1e10));
    assert_eq!(slider.step(), Step::DEFAULT);
    assert_eq!(slider.values(), (0.0, 1e9));
    assert_eq!(slider.midpoint(), 5e8);
}

#[test]
fn programmatic_updates_do_not_notify() {
    let harness = Harness::new(slider(RangeSliderArgs::default()));
    harness.slider.set_values(10.0, 20.0).expect("valid values");
    harness
        .slider
        .set_range(0.0, 50.0, RangeOptions::default())
        .expect("valid range");
    harness.slider.set_attribute("step", "5");
    assert!(harness.kinds().is_empty());
}

#[test]
fn attributes_reconfigure_the_slider() {
    let slider = slider(RangeSliderArgs::default());
    slider.set_attribute("min", "10");
    slider.set_attribute("max", "60");
    assert_eq!((slider.min(), slider.max()), (10.0, 60.0));
    assert_eq!(slider.values(), (10.0, 60.0));

    slider.set_attribute("max", "oops");
    assert_eq!(slider.max(), 60.0);

    slider.set_attribute("step", "any");
    assert_eq!(slider.step(), Step::Any);
    slider.set_attribute("step", "0");
    assert_eq!(slider.step(), Step::Any);

    slider.set_attribute("disabled", "");
    assert!(slider.disabled());
    slider.remove_attribute("disabled");
    assert!(!slider.disabled());
}

#[test]
fn drag_tooltips_show_both_values_then_hide() {
    let mut harness = Harness::new(slider(RangeSliderArgs::default()));
    harness.slider.set_tooltip_formatter(
        Some(TooltipFormatter::new(|v: f64| format!("${v:.0}"))),
        TooltipOptions::default(),
    );
    let formatter = harness.slider.tooltip_formatter().expect("formatter set");
    assert_eq!(formatter.format(3.0).as_text(), Some("$3"));

    harness.move_to(12);
    let hover = harness.slider.scene(WIDTH).tooltips;
    assert_eq!(hover.len(), 1);
    assert_eq!(hover[0].kind, TooltipKind::Hover);

    harness.press();
    harness.move_to(72);
    let drag = harness.slider.scene(WIDTH).tooltips;
    let labels: Vec<_> = drag.iter().filter_map(|t| t.label.as_text()).collect();
    assert_eq!(labels, vec!["$30", "$100"]);

    harness.release();
    assert!(harness.slider.scene(WIDTH).tooltips.is_empty());
}

#[test]
fn hover_only_tooltips_never_show_while_dragging() {
    let mut harness = Harness::new(slider(RangeSliderArgs::default()));
    harness.slider.set_tooltip_formatter(
        Some(TooltipFormatter::new(|v: f64| v.to_string())),
        TooltipOptions::default().click_active(false),
    );
    harness.move_to(200);
    assert_eq!(harness.slider.scene(WIDTH).tooltips.len(), 1);
    harness.press();
    assert!(harness.slider.scene(WIDTH).tooltips.is_empty());
    harness.move_to(20);
    assert!(harness.slider.scene(WIDTH).tooltips.is_empty());
}

#[test]
fn formatter_may_call_back_into_the_slider() {
    let mut harness = Harness::new(slider(RangeSliderArgs::default()));
    let handle = harness.slider.clone();
    harness.slider.set_tooltip_formatter(
        Some(TooltipFormatter::new(move |v: f64| {
            let text = format!("{v:.0}");
            handle.set_attribute("aria-valuetext", &text);
            text
        })),
        TooltipOptions::default(),
    );
    harness.move_to(200);
    let tooltips = harness.slider.scene(WIDTH).tooltips;
    assert_eq!(tooltips.len(), 1);
    assert_eq!(
        harness.slider.attribute("aria-valuetext").as_deref(),
        tooltips[0].label.as_text()
    );
}

#[test]
fn removing_the_formatter_hides_tooltips() {
    let mut harness = Harness::new(slider(RangeSliderArgs::default()));
    harness.slider.set_tooltip_formatter(
        Some(TooltipFormatter::new(|v: f64| v.to_string())),
        TooltipOptions::default(),
    );
    harness.move_to(200);
    harness.slider.set_tooltip_formatter(None, TooltipOptions::default());
    assert!(harness.slider.scene(WIDTH).tooltips.is_empty());
    assert!(harness.slider.tooltip_formatter().is_none());
}

#[test]
fn disabled_slider_ignores_pointer_and_hides_tooltips() {
    let mut harness = Harness::new(slider(RangeSliderArgs::default()));
    harness.slider.set_tooltip_formatter(
        Some(TooltipFormatter::new(|v: f64| v.to_string())),
        TooltipOptions::default(),
    );
    harness.move_to(12);
    harness.press();
    harness.slider.set_disabled(true);
    assert!(harness.slider.scene(WIDTH).tooltips.is_empty());

    assert_eq!(harness.move_to(72), CursorIcon::NotAllowed);
    harness.release();
    assert_eq!(harness.slider.values(), (0.0, 100.0));
    assert!(harness.kinds().is_empty());
}

#[test]
fn keyboard_actions_notify_once_per_action() {
    let harness = Harness::new(slider(RangeSliderArgs::default()));
    harness.slider.handle_action(Thumb::Upper, ThumbAction::Decrement);
    assert_eq!(
        harness.kinds(),
        vec![RangeEventKind::Input, RangeEventKind::Change]
    );
    assert_eq!(harness.slider.values(), (0.0, 99.0));
}

#[test]
fn registration_rules() {
    assert_eq!(
        RangeSlider::register(None),
        Ok(RegistrationOutcome::Registered)
    );
    assert_eq!(
        RangeSlider::register(Some(DEFAULT_TAG)),
        Ok(RegistrationOutcome::Unchanged)
    );
    assert!(matches!(
        RangeSlider::register(Some("other-slider")),
        Err(RegistryError::TypeAlreadyRegistered { .. })
    ));
    assert_eq!(RangeSlider::tag().as_deref(), Some(DEFAULT_TAG));
}
