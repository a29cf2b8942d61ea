//! The filmstrip knob control.
//!
//! [`FilmstripKnob`] renders a parameter value as one frame of a vertical
//! image strip and edits it through pointer drags. It composes the three
//! capability traits ([`Draggable`], [`ScaleAware`], [`NotificationSource`])
//! and holds a non-owning reference to the [`AutomatableParam`] it edits.
//!
//! # Drag pipeline
//!
//! Every drag event runs the same value pipeline, in order:
//!
//! 1. base mapping — pointer delta to value delta via [`DragMap`]
//! 2. shift remap, if installed and shift is held
//! 3. alt remap, if installed and alt is held (fed the shift result)
//! 4. global remap, if installed, unconditionally
//!
//! Each stage replaces the value through the deferred setter, so listeners
//! see one coalesced display notification per UI pump regardless of how many
//! stages fired.
//!
//! # Deferred vs. silent
//!
//! [`set_value`](FilmstripKnob::set_value) takes a [`ValueNotify`] mode.
//! `Deferred` queues a display event and forwards the value to the bound
//! parameter — the path user edits take. `Silent` updates display state only
//! and is what parameter-to-control synchronization uses; it can never echo
//! back out, which is what makes the sync loop feedback-free.

use std::sync::{Arc, Weak};

use tracing::{debug, warn};

use perilla_params::AutomatableParam;

use crate::drag::DragMap;
use crate::event::KnobEvent;
use crate::input::PointerEvent;
use crate::strip::{FrameStrip, Region, StripImage, StripProvider, frame_for_value};
use crate::style::KnobStyle;
use crate::surface::RenderSurface;
use crate::traits::{Draggable, NotificationSource, ScaleAware};

/// How a value change is announced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueNotify {
    /// Queue a coalesced display notification and forward the value to the
    /// bound parameter. Listeners observe the change on the next UI pump,
    /// never synchronously inside the input handler.
    Deferred,
    /// Update display state only. No event is queued and the bound parameter
    /// is not written.
    Silent,
}

/// Remaps a just-set value to a replacement value.
///
/// Remaps are expected to stay within the control's range; outputs are
/// clamped regardless.
pub type ValueRemap = Box<dyn Fn(f32) -> f32>;

/// Rotary control rendering a value as one frame of a filmstrip image.
pub struct FilmstripKnob {
    image_id: String,
    strip: FrameStrip,
    scale_factor: f32,
    high_res: bool,

    value: f32,
    min: f32,
    max: f32,

    drag: DragMap,
    style: KnobStyle,

    shift_drag_remap: Option<ValueRemap>,
    alt_drag_remap: Option<ValueRemap>,
    global_remap: Option<ValueRemap>,

    reset_enabled: bool,
    reset_message: String,

    param: Weak<AutomatableParam>,

    value_text: String,
    events: Vec<KnobEvent>,
    dragging: bool,
    needs_repaint: bool,
}

impl FilmstripKnob {
    /// Create a knob over the given strip image.
    ///
    /// `frame_width`/`frame_height` are the control's logical frame size; the
    /// frame count is derived from the strip dimensions. The range defaults
    /// to `[0, 1]` with the value at 0. `min < max` is expected; a degenerate
    /// `min == max` range is tolerated and pins rendering to frame 0.
    pub fn new(
        image_id: impl Into<String>,
        image: StripImage,
        frame_width: u32,
        frame_height: u32,
    ) -> Self {
        let style = KnobStyle::default();
        let value_text = style.format_value(0.0);
        Self {
            image_id: image_id.into(),
            strip: FrameStrip::new(image, frame_width, frame_height),
            scale_factor: 1.0,
            high_res: false,
            value: 0.0,
            min: 0.0,
            max: 1.0,
            drag: DragMap::default(),
            style,
            shift_drag_remap: None,
            alt_drag_remap: None,
            global_remap: None,
            reset_enabled: false,
            reset_message: String::new(),
            param: Weak::new(),
            value_text,
            events: Vec::new(),
            dragging: false,
            needs_repaint: true,
        }
    }

    // ── Builders ────────────────────────────────────────────────────────────

    /// Set the value range. The current value is re-clamped into it.
    pub fn with_range(mut self, min: f32, max: f32) -> Self {
        self.min = min;
        self.max = max;
        self.value = self.clamp(self.value);
        self.value_text = self.style.format_value(self.value);
        self
    }

    /// Set the initial value (clamped, no notification).
    pub fn with_value(mut self, value: f32) -> Self {
        self.value = self.clamp(value);
        self.value_text = self.style.format_value(self.value);
        self
    }

    /// Replace the drag mapping.
    pub fn with_drag_map(mut self, drag: DragMap) -> Self {
        self.drag = drag;
        self
    }

    /// Replace the presentation style.
    pub fn with_style(mut self, style: KnobStyle) -> Self {
        self.style = style;
        self.value_text = self.style.format_value(self.value);
        self
    }

    /// Install the remap applied after the base drag while shift is held.
    pub fn with_shift_drag_remap(mut self, remap: impl Fn(f32) -> f32 + 'static) -> Self {
        self.shift_drag_remap = Some(Box::new(remap));
        self
    }

    /// Install the remap applied after the shift stage while alt is held.
    pub fn with_alt_drag_remap(mut self, remap: impl Fn(f32) -> f32 + 'static) -> Self {
        self.alt_drag_remap = Some(Box::new(remap));
        self
    }

    /// Install the remap applied unconditionally as the last drag stage.
    pub fn with_global_remap(mut self, remap: impl Fn(f32) -> f32 + 'static) -> Self {
        self.global_remap = Some(Box::new(remap));
        self
    }

    /// Enable the shift-click reset gesture with the given broadcast message.
    pub fn with_reset_message(mut self, message: impl Into<String>) -> Self {
        self.reset_enabled = true;
        self.reset_message = message.into();
        self
    }

    // ── Value ───────────────────────────────────────────────────────────────

    /// Current value.
    pub fn value(&self) -> f32 {
        self.value
    }

    /// Lower bound of the range.
    pub fn min(&self) -> f32 {
        self.min
    }

    /// Upper bound of the range.
    pub fn max(&self) -> f32 {
        self.max
    }

    /// Cached display text for the current value.
    pub fn value_text(&self) -> &str {
        &self.value_text
    }

    /// Set the value, clamped to the range.
    ///
    /// Setting the current value again is a no-op: no event, no parameter
    /// write, no repaint. Otherwise the display text is refreshed and, in
    /// [`ValueNotify::Deferred`] mode, a coalesced [`KnobEvent::ValueChanged`]
    /// is queued and the value is forwarded to the bound parameter.
    pub fn set_value(&mut self, value: f32, notify: ValueNotify) {
        let clamped = self.clamp(value);
        if clamped == self.value {
            return;
        }
        self.value = clamped;
        self.value_text = self.style.format_value(clamped);
        self.needs_repaint = true;

        if notify == ValueNotify::Deferred {
            self.queue_value_changed(clamped);
            if let Some(param) = self.param.upgrade() {
                param.set_value(clamped);
            }
        }
    }

    fn clamp(&self, value: f32) -> f32 {
        if value < self.min {
            self.min
        } else if value > self.max {
            self.max
        } else {
            value
        }
    }

    fn queue_value_changed(&mut self, value: f32) {
        for event in &mut self.events {
            if let KnobEvent::ValueChanged { value: pending } = event {
                *pending = value;
                return;
            }
        }
        self.events.push(KnobEvent::ValueChanged { value });
    }

    // ── Parameter reference ─────────────────────────────────────────────────

    /// Bind the control to a parameter (non-owning).
    ///
    /// Idempotent: re-binding the parameter already referenced is a no-op.
    /// Otherwise the display text is refreshed and a repaint is requested.
    pub fn set_param_ref(&mut self, param: &Arc<AutomatableParam>) {
        if let Some(current) = self.param.upgrade()
            && Arc::ptr_eq(&current, param)
        {
            return;
        }
        self.param = Arc::downgrade(param);
        self.value_text = self.style.format_value(self.value);
        self.needs_repaint = true;
        debug!(id = param.id(), "control bound to parameter");
    }

    /// The bound parameter, if still alive.
    pub fn bound_param(&self) -> Option<Arc<AutomatableParam>> {
        self.param.upgrade()
    }

    // ── Rendering ───────────────────────────────────────────────────────────

    /// Frame index for the current value.
    ///
    /// Always within `[0, frame_count - 1]`; a degenerate range selects
    /// frame 0.
    pub fn frame_index(&self) -> usize {
        frame_for_value(self.value, self.min, self.max, self.strip.frame_count())
    }

    /// Paint the current frame into `bounds` — exactly one image blit.
    pub fn render(&self, surface: &mut dyn RenderSurface, bounds: Region) {
        let src = self.strip.source_region(self.frame_index());
        surface.draw_image(src, bounds);
    }

    /// Strip geometry currently in use.
    pub fn strip(&self) -> &FrameStrip {
        &self.strip
    }

    /// Identifier the strip was resolved under.
    pub fn image_id(&self) -> &str {
        &self.image_id
    }

    /// Display scale factor the strip was last resolved for.
    pub fn scale_factor(&self) -> f32 {
        self.scale_factor
    }

    /// Presentation style.
    pub fn style(&self) -> &KnobStyle {
        &self.style
    }

    /// Whether a drag gesture is in progress.
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Take the repaint request, clearing it.
    pub fn take_repaint(&mut self) -> bool {
        std::mem::take(&mut self.needs_repaint)
    }
}

impl Draggable for FilmstripKnob {
    /// Press: broadcast the reset request when shift is held and reset is
    /// enabled (the click itself never moves the value), then arm the drag
    /// so the gesture can continue as a normal edit.
    fn pointer_down(&mut self, event: &PointerEvent) {
        if event.modifiers.shift && self.reset_enabled {
            debug!(message = %self.reset_message, "reset requested");
            self.events.push(KnobEvent::ResetRequested {
                message: self.reset_message.clone(),
            });
        }
        self.dragging = true;
        if let Some(param) = self.param.upgrade() {
            param.gesture_begin();
        }
    }

    fn pointer_drag(&mut self, event: &PointerEvent) {
        if !self.dragging {
            return;
        }

        let delta = self.drag.value_delta(event, self.max - self.min);
        self.set_value(self.value + delta, ValueNotify::Deferred);

        if event.modifiers.shift {
            let mapped = self.shift_drag_remap.as_ref().map(|f| f(self.value));
            if let Some(value) = mapped {
                self.set_value(value, ValueNotify::Deferred);
            }
        }

        if event.modifiers.alt {
            let mapped = self.alt_drag_remap.as_ref().map(|f| f(self.value));
            if let Some(value) = mapped {
                self.set_value(value, ValueNotify::Deferred);
            }
        }

        let mapped = self.global_remap.as_ref().map(|f| f(self.value));
        if let Some(value) = mapped {
            self.set_value(value, ValueNotify::Deferred);
        }
    }

    fn pointer_up(&mut self, _event: &PointerEvent) {
        if !self.dragging {
            return;
        }
        self.dragging = false;
        if let Some(param) = self.param.upgrade() {
            param.gesture_end();
        }
    }
}

impl ScaleAware for FilmstripKnob {
    /// Re-resolve the strip for a new display scale and re-derive the frame
    /// count. If the provider has nothing for the new configuration the
    /// previous strip stays in place.
    fn scale_factor_changed(
        &mut self,
        provider: &dyn StripProvider,
        scale_factor: f32,
        high_res: bool,
    ) {
        self.scale_factor = scale_factor;
        self.high_res = high_res;
        match provider.strip(&self.image_id, scale_factor, high_res) {
            Some(image) => {
                self.strip =
                    FrameStrip::new(image, self.strip.frame_width(), self.strip.frame_height());
                self.needs_repaint = true;
                debug!(
                    id = %self.image_id,
                    scale_factor,
                    frames = self.strip.frame_count(),
                    "strip rescaled"
                );
            }
            None => {
                warn!(
                    id = %self.image_id,
                    scale_factor,
                    "no strip for new scale factor, keeping previous"
                );
            }
        }
    }
}

impl NotificationSource for FilmstripKnob {
    fn take_events(&mut self) -> Vec<KnobEvent> {
        std::mem::take(&mut self.events)
    }

    fn has_pending_events(&self) -> bool {
        !self.events.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::Modifiers;
    use perilla_params::ParamInfo;

    fn test_knob() -> FilmstripKnob {
        FilmstripKnob::new("knob", StripImage::new(48, 48 * 128, 1), 48, 48)
    }

    fn drag(dx: f32, dy: f32, modifiers: Modifiers) -> PointerEvent {
        PointerEvent::drag(dx, dy, modifiers)
    }

    // --- construction ---

    #[test]
    fn new_knob_defaults() {
        let knob = test_knob();
        assert_eq!(knob.value(), 0.0);
        assert_eq!(knob.min(), 0.0);
        assert_eq!(knob.max(), 1.0);
        assert_eq!(knob.strip().frame_count(), 128);
        assert_eq!(knob.value_text(), "0.00");
        assert!(!knob.has_pending_events());
    }

    #[test]
    fn with_range_reclamps_value() {
        let knob = test_knob().with_value(0.8).with_range(0.0, 0.5);
        assert_eq!(knob.value(), 0.5);
    }

    // --- set_value ---

    #[test]
    fn deferred_set_queues_one_event() {
        let mut knob = test_knob();
        knob.set_value(0.3, ValueNotify::Deferred);
        knob.set_value(0.6, ValueNotify::Deferred);
        knob.set_value(0.9, ValueNotify::Deferred);

        let events = knob.take_events();
        assert_eq!(events, vec![KnobEvent::ValueChanged { value: 0.9 }]);
        assert!(knob.take_events().is_empty());
    }

    #[test]
    fn silent_set_queues_nothing() {
        let mut knob = test_knob();
        knob.set_value(0.4, ValueNotify::Silent);
        assert_eq!(knob.value(), 0.4);
        assert_eq!(knob.value_text(), "0.40");
        assert!(!knob.has_pending_events());
    }

    #[test]
    fn set_value_clamps() {
        let mut knob = test_knob();
        knob.set_value(7.0, ValueNotify::Silent);
        assert_eq!(knob.value(), 1.0);
        knob.set_value(-7.0, ValueNotify::Silent);
        assert_eq!(knob.value(), 0.0);
    }

    #[test]
    fn setting_same_value_is_a_noop() {
        let mut knob = test_knob().with_value(0.5);
        let _ = knob.take_repaint();
        knob.set_value(0.5, ValueNotify::Deferred);
        assert!(!knob.has_pending_events());
        assert!(!knob.take_repaint());
    }

    #[test]
    fn deferred_set_forwards_to_param() {
        let param = Arc::new(AutomatableParam::new(ParamInfo::normalized(
            "cutoff", "Cutoff", 0.5,
        )));
        let mut knob = test_knob();
        knob.set_param_ref(&param);

        knob.set_value(0.8, ValueNotify::Deferred);
        assert_eq!(param.value(), 0.8);

        knob.set_value(0.2, ValueNotify::Silent);
        assert_eq!(param.value(), 0.8, "silent set must not write the parameter");
    }

    #[test]
    fn dead_param_does_not_break_sets() {
        let mut knob = test_knob();
        {
            let param = Arc::new(AutomatableParam::new(ParamInfo::normalized(
                "gone", "Gone", 0.0,
            )));
            knob.set_param_ref(&param);
        }
        knob.set_value(0.5, ValueNotify::Deferred);
        assert_eq!(knob.value(), 0.5);
        assert!(knob.bound_param().is_none());
    }

    // --- parameter reference ---

    #[test]
    fn set_param_ref_is_idempotent() {
        let param = Arc::new(AutomatableParam::new(ParamInfo::normalized(
            "mix", "Mix", 0.5,
        )));
        let mut knob = test_knob();

        knob.set_param_ref(&param);
        let _ = knob.take_repaint();

        knob.set_param_ref(&param);
        assert!(!knob.take_repaint(), "re-binding the same parameter must be a no-op");

        let other = Arc::new(AutomatableParam::new(ParamInfo::normalized(
            "res", "Res", 0.1,
        )));
        knob.set_param_ref(&other);
        assert!(knob.take_repaint());
        assert!(Arc::ptr_eq(&knob.bound_param().unwrap(), &other));
    }

    // --- reset gesture ---

    #[test]
    fn shift_click_queues_exactly_one_reset() {
        let mut knob = test_knob().with_value(0.7).with_reset_message("osc1.reset");
        knob.pointer_down(&PointerEvent::press(10.0, 10.0, Modifiers::SHIFT));

        let events = knob.take_events();
        assert_eq!(
            events,
            vec![KnobEvent::ResetRequested {
                message: "osc1.reset".to_string()
            }]
        );
        assert_eq!(knob.value(), 0.7, "the click itself must not move the value");
    }

    #[test]
    fn shift_click_without_reset_enabled_is_silent() {
        let mut knob = test_knob().with_value(0.7);
        knob.pointer_down(&PointerEvent::press(10.0, 10.0, Modifiers::SHIFT));
        assert!(knob.take_events().is_empty());
        assert!(knob.is_dragging(), "drag must still arm");
    }

    #[test]
    fn plain_click_does_not_reset() {
        let mut knob = test_knob().with_reset_message("m");
        knob.pointer_down(&PointerEvent::press(0.0, 0.0, Modifiers::NONE));
        assert!(knob.take_events().is_empty());
    }

    // --- drag pipeline ---

    #[test]
    fn drag_without_pointer_down_is_ignored() {
        let mut knob = test_knob();
        knob.pointer_drag(&drag(10.0, 0.0, Modifiers::NONE));
        assert_eq!(knob.value(), 0.0);
    }

    #[test]
    fn custom_drag_map_changes_feel() {
        let mut knob = test_knob().with_drag_map(DragMap::new().with_sensitivity(0.01));
        knob.pointer_down(&PointerEvent::press(0.0, 0.0, Modifiers::NONE));
        knob.pointer_drag(&drag(0.0, -10.0, Modifiers::NONE));
        assert!((knob.value() - 0.1).abs() < 1e-6);
    }

    #[test]
    fn base_drag_moves_value() {
        let mut knob = test_knob();
        knob.pointer_down(&PointerEvent::press(0.0, 0.0, Modifiers::NONE));
        knob.pointer_drag(&drag(0.0, -100.0, Modifiers::NONE));
        assert!((knob.value() - 0.5).abs() < 1e-6);
    }

    #[test]
    fn shift_remap_applies_after_base() {
        let mut knob = test_knob()
            .with_value(0.0)
            .with_shift_drag_remap(|v| 1.0 - v);
        knob.pointer_down(&PointerEvent::press(0.0, 0.0, Modifiers::SHIFT));
        // base: 0.0 + 0.4 = 0.4, shift: 1 - 0.4 = 0.6
        knob.pointer_drag(&drag(0.0, -80.0, Modifiers::SHIFT));
        assert!((knob.value() - 0.6).abs() < 1e-6);
    }

    #[test]
    fn shift_remap_needs_shift_held() {
        let mut knob = test_knob().with_shift_drag_remap(|v| 1.0 - v);
        knob.pointer_down(&PointerEvent::press(0.0, 0.0, Modifiers::NONE));
        knob.pointer_drag(&drag(0.0, -80.0, Modifiers::NONE));
        assert!((knob.value() - 0.4).abs() < 1e-6);
    }

    #[test]
    fn shift_and_alt_stack_in_order() {
        let both = Modifiers {
            shift: true,
            alt: true,
            ctrl: false,
        };
        let mut knob = test_knob()
            .with_shift_drag_remap(|v| 1.0 - v)
            .with_alt_drag_remap(|v| v / 2.0);
        knob.pointer_down(&PointerEvent::press(0.0, 0.0, both));
        // base: 0.5, shift: 1 - 0.5 = 0.5, alt: 0.5 / 2 = 0.25
        knob.pointer_drag(&drag(0.0, -100.0, both));
        assert!((knob.value() - 0.25).abs() < 1e-6);
    }

    #[test]
    fn global_remap_applies_without_modifiers() {
        let mut knob = test_knob().with_global_remap(|v| (v * 10.0).round() / 10.0);
        knob.pointer_down(&PointerEvent::press(0.0, 0.0, Modifiers::NONE));
        knob.pointer_drag(&drag(0.0, -47.0, Modifiers::NONE));
        // base 0.235 snapped to 0.2 by the global stage
        assert!((knob.value() - 0.2).abs() < 1e-6);
    }

    #[test]
    fn remap_output_is_clamped() {
        let mut knob = test_knob().with_global_remap(|v| v + 10.0);
        knob.pointer_down(&PointerEvent::press(0.0, 0.0, Modifiers::NONE));
        knob.pointer_drag(&drag(1.0, 0.0, Modifiers::NONE));
        assert_eq!(knob.value(), 1.0);
    }

    #[test]
    fn drag_coalesces_display_events() {
        let mut knob = test_knob().with_shift_drag_remap(|v| 1.0 - v);
        knob.pointer_down(&PointerEvent::press(0.0, 0.0, Modifiers::SHIFT));
        knob.pointer_drag(&drag(0.0, -80.0, Modifiers::SHIFT));

        let value_events: Vec<_> = knob
            .take_events()
            .into_iter()
            .filter(|e| matches!(e, KnobEvent::ValueChanged { .. }))
            .collect();
        assert_eq!(value_events, vec![KnobEvent::ValueChanged { value: 0.6 }]);
    }

    // --- gestures to the parameter ---

    #[test]
    fn drag_brackets_param_gesture() {
        let param = Arc::new(AutomatableParam::new(ParamInfo::normalized(
            "cutoff", "Cutoff", 0.5,
        )));
        let mut knob = test_knob();
        knob.set_param_ref(&param);

        knob.pointer_down(&PointerEvent::press(0.0, 0.0, Modifiers::NONE));
        let flags = param.take_gesture_flags();
        assert_ne!(flags & perilla_params::GESTURE_BEGIN, 0);
        assert_eq!(flags & perilla_params::GESTURE_END, 0);

        knob.pointer_up(&PointerEvent::press(0.0, 0.0, Modifiers::NONE));
        let flags = param.take_gesture_flags();
        assert_ne!(flags & perilla_params::GESTURE_END, 0);
        assert!(!knob.is_dragging());
    }

    #[test]
    fn pointer_up_without_down_is_ignored() {
        let param = Arc::new(AutomatableParam::new(ParamInfo::normalized(
            "cutoff", "Cutoff", 0.5,
        )));
        let mut knob = test_knob();
        knob.set_param_ref(&param);

        knob.pointer_up(&PointerEvent::press(0.0, 0.0, Modifiers::NONE));
        assert_eq!(param.take_gesture_flags(), 0);
    }

    // --- rendering ---

    struct RecordingSurface {
        calls: Vec<(Region, Region)>,
    }

    impl RenderSurface for RecordingSurface {
        fn draw_image(&mut self, src: Region, dst: Region) {
            self.calls.push((src, dst));
        }
    }

    #[test]
    fn render_issues_one_blit_of_current_frame() {
        let knob = test_knob().with_value(1.0);
        let mut surface = RecordingSurface { calls: Vec::new() };
        let bounds = Region::new(10.0, 20.0, 48.0, 48.0);

        knob.render(&mut surface, bounds);

        assert_eq!(surface.calls.len(), 1);
        let (src, dst) = surface.calls[0];
        assert_eq!(src.y, 127.0 * 48.0, "value = max selects the last frame");
        assert_eq!(dst, bounds);
    }

    #[test]
    fn render_does_not_mutate_value() {
        let knob = test_knob().with_value(0.33);
        let mut surface = RecordingSurface { calls: Vec::new() };
        knob.render(&mut surface, Region::new(0.0, 0.0, 48.0, 48.0));
        assert_eq!(knob.value(), 0.33);
    }

    #[test]
    fn degenerate_range_renders_frame_zero() {
        let knob = test_knob().with_range(0.5, 0.5);
        assert_eq!(knob.frame_index(), 0);
    }

    // --- scale awareness ---

    struct FixedProvider {
        image: Option<StripImage>,
    }

    impl StripProvider for FixedProvider {
        fn strip(&self, _id: &str, _scale: f32, _high_res: bool) -> Option<StripImage> {
            self.image
        }
    }

    #[test]
    fn scale_change_rederives_frame_count() {
        let mut knob = test_knob();
        assert_eq!(knob.strip().frame_count(), 128);

        let provider = FixedProvider {
            image: Some(StripImage::new(96, 96 * 128, 2)),
        };
        knob.scale_factor_changed(&provider, 2.0, true);
        assert_eq!(knob.strip().frame_count(), 128);
        assert_eq!(knob.strip().image().pixel_scale, 2);
    }

    #[test]
    fn missing_strip_keeps_previous() {
        let mut knob = test_knob();
        let before = *knob.strip();

        let provider = FixedProvider { image: None };
        knob.scale_factor_changed(&provider, 2.0, true);
        assert_eq!(*knob.strip(), before);
    }
}
