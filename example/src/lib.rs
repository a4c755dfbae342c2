//! Scripted walkthrough of the range slider.
//!
//! Registers the component, drives a pointer session through a
//! [`CursorState`] the way a host event loop would, and logs every
//! notification and the resulting render scenes. Run with
//! `RUST_LOG=debug` to also see the component's internal tracing.

use std::sync::Arc;

use anyhow::Context;
use dual_range_components::range_slider::{
    RangeEventKind, RangeOptions, RangeSlider, RangeSliderArgs, RangeSliderScene, Step, Thumb,
    ThumbAction, TooltipFormatter, TooltipOptions, TooltipPlacement,
};
use dual_range_ui::{
    CursorState, HostCapabilities, PressKeyEventType, Px, PxPosition, PxSize,
    dp::set_scale_factor,
};
use parking_lot::Mutex;
use tracing::info;

const WIDTH: Px = Px(448);
const HEIGHT: Px = Px(24);
const ORIGIN: PxPosition = PxPosition::new(Px(40), Px(120));
const SCALE_FACTOR: f64 = 1.0;

/// A minimal host: owns the cursor and forwards one frame per pointer
/// activity.
struct Host {
    slider: RangeSlider,
    cursor: CursorState,
}

impl Host {
    fn pointer_at(&mut self, x: i32) {
        self.cursor
            .update_position(PxPosition::new(ORIGIN.x + Px(x), ORIGIN.y + HEIGHT / 2));
        self.frame();
    }

    fn button(&mut self, pressed: bool) {
        if pressed {
            self.cursor.press(PressKeyEventType::Left);
        } else {
            self.cursor.release(PressKeyEventType::Left);
        }
        self.frame();
    }

    fn frame(&mut self) {
        let mut input = self.cursor.frame(ORIGIN, PxSize::new(WIDTH, HEIGHT));
        self.slider.handle_input(&mut input);
        tracing::trace!(cursor = ?input.requests.cursor_icon, "frame handled");
    }
}

fn log_scene(label: &str, scene: &RangeSliderScene) {
    let [lower, upper] = &scene.thumbs;
    info!(
        label,
        lower_width = scene.layout.lower.width.raw(),
        upper_width = scene.layout.upper.width.raw(),
        lower_thumb = lower.center.x.raw(),
        upper_thumb = upper.center.x.raw(),
        lower_color = %lower.color.to_hex(),
        upper_color = %upper.color.to_hex(),
        style = ?scene.style.to_css(),
        "scene"
    );
    for tooltip in &scene.tooltips {
        let text = tooltip.label.as_text().unwrap_or("<custom>");
        match tooltip.placement {
            TooltipPlacement::Anchored(anchor) => {
                info!(label, text, anchor = anchor.name(), "tooltip")
            }
            TooltipPlacement::Absolute { left, top } => {
                info!(label, text, left = left.raw(), top = top.raw(), "tooltip")
            }
        }
    }
}

/// Runs the walkthrough.
pub fn run() -> anyhow::Result<()> {
    set_scale_factor(SCALE_FACTOR);
    HostCapabilities::default()
        .with_anchor_positioning(false)
        .install();
    let outcome = RangeSlider::register(None).context("registering the range slider")?;
    info!(?outcome, tag = ?RangeSlider::tag(), "component registered");

    let committed = Arc::new(Mutex::new(Vec::new()));
    let sink = committed.clone();
    let slider = RangeSlider::new(
        RangeSliderArgs::default()
            .min(0.0)
            .max(1000.0)
            .step(Step::Fixed(10.0))
            .values((200.0, 800.0))
            .tooltip_formatter(TooltipFormatter::new(|v: f64| format!("${v:.0}")))
            .on_change(move |values| sink.lock().push(values)),
    )?;
    let subscription = slider.subscribe(|event| match event.kind {
        RangeEventKind::Input => info!(values = ?event.values, "input"),
        RangeEventKind::Change => info!(values = ?event.values, "change"),
    });
    info!(values = ?slider.values(), midpoint = slider.midpoint(), "slider created");
    log_scene("initial", &slider.scene(WIDTH));

    let mut host = Host {
        slider: slider.clone(),
        cursor: CursorState::default(),
    };

    // Hover over the upper half, then drag the lower thumb to the right.
    host.pointer_at(330);
    log_scene("hover", &slider.scene(WIDTH));
    let lower_x = slider.scene(WIDTH).thumb(Thumb::Lower).center.x.raw();
    host.pointer_at(lower_x);
    host.button(true);
    for x in (lower_x..lower_x + 120).step_by(30) {
        host.pointer_at(x);
    }
    log_scene("dragging", &slider.scene(WIDTH));
    host.button(false);
    log_scene("released", &slider.scene(WIDTH));

    // Keyboard nudges on the upper thumb.
    slider.handle_action(Thumb::Upper, ThumbAction::PageDecrement);
    slider.handle_action(Thumb::Upper, ThumbAction::Increment);

    // Programmatic reconfiguration is silent.
    slider.set_range(100.0, 600.0, RangeOptions::default().step(Step::Fixed(25.0)))?;
    slider.set_attribute("list", "price-ticks");
    slider.set_tooltip_formatter(None, TooltipOptions::default());
    info!(
        values = ?slider.values(),
        midpoint = slider.midpoint(),
        list = ?slider.list(),
        "reconfigured"
    );
    log_scene("reconfigured", &slider.scene(WIDTH));

    slider.unsubscribe(subscription);
    info!(committed = ?committed.lock(), "committed selections");
    Ok(())
}
