//! Immediate-mode wrapper for [`FilmstripKnob`].
//!
//! [`filmstrip_knob`] is the one call an eframe app makes per knob per frame.
//! It translates the egui response into the core's pointer events, keeps the
//! knob's strip in step with the display scale, paints the current frame, and
//! hands the knob's drained event queue back to the caller — resets and value
//! changes are the owner's business, not the widget's.

use egui::{Align2, CornerRadius, FontId, Response, Sense, Ui, vec2};
use tracing::warn;

use perilla_core::{
    Draggable, FilmstripKnob, KnobEvent, Modifiers, NotificationSource, PointerEvent,
    PopupPlacement, Region, ScaleAware,
};

use crate::surface::EguiSurface;
use crate::texture::StripTextureCache;

/// The widget's per-frame outcome: the egui response plus the knob's drained
/// event queue (one UI pump's worth of deferred notifications).
pub struct KnobResponse {
    /// Interaction response for the knob's rect.
    pub response: Response,
    /// Events queued since the previous frame, in order.
    pub events: Vec<KnobEvent>,
}

impl KnobResponse {
    /// Reset messages among this frame's events.
    pub fn reset_requests(&self) -> impl Iterator<Item = &str> {
        self.events.iter().filter_map(|e| match e {
            KnobEvent::ResetRequested { message } => Some(message.as_str()),
            KnobEvent::ValueChanged { .. } => None,
        })
    }
}

/// Modifier state at the time of the current frame's input.
fn current_modifiers(ui: &Ui) -> Modifiers {
    ui.input(|i| Modifiers {
        shift: i.modifiers.shift,
        alt: i.modifiers.alt,
        ctrl: i.modifiers.ctrl || i.modifiers.command,
    })
}

/// Show a filmstrip knob and run one frame of its interaction.
///
/// Drag up or right to increase, down or left to decrease; ctrl-drag for
/// fine control; shift-click requests a reset if the knob has one configured.
/// The returned [`KnobResponse`] carries the drained event queue — the caller
/// reacts to [`KnobEvent::ResetRequested`] (typically by restoring the
/// parameter default and re-synchronizing).
pub fn filmstrip_knob(
    ui: &mut Ui,
    knob: &mut FilmstripKnob,
    cache: &mut StripTextureCache,
) -> KnobResponse {
    // Follow the display scale before anything else this frame
    let ppp = ui.ctx().pixels_per_point();
    if (ppp - knob.scale_factor()).abs() > f32::EPSILON {
        knob.scale_factor_changed(cache, ppp, ppp > 1.0);
    }

    let strip = knob.strip();
    let size = vec2(strip.frame_width() as f32, strip.frame_height() as f32);
    let (rect, response) = ui.allocate_exact_size(size, Sense::drag());

    // egui response → core pointer events
    let modifiers = current_modifiers(ui);
    if response.drag_started() {
        let pos = response
            .interact_pointer_pos()
            .map_or((0.0, 0.0), |p| (p.x - rect.min.x, p.y - rect.min.y));
        knob.pointer_down(&PointerEvent::press(pos.0, pos.1, modifiers));
    }
    if response.dragged() {
        let delta = response.drag_delta();
        if delta != egui::Vec2::ZERO {
            knob.pointer_drag(&PointerEvent::drag(delta.x, delta.y, modifiers));
        }
    }
    if response.drag_stopped() {
        knob.pointer_up(&PointerEvent::press(0.0, 0.0, modifiers));
    }

    // Paint the current frame
    if ui.is_rect_visible(rect) {
        match cache.texture(ui.ctx(), knob.image_id(), knob.scale_factor(), ppp > 1.0) {
            Some((handle, texture_size)) => {
                let painter = ui.painter();
                let mut surface = EguiSurface::new(painter, handle.id(), texture_size, rect.min);
                knob.render(&mut surface, Region::new(0.0, 0.0, size.x, size.y));
            }
            None => {
                warn!(id = knob.image_id(), "no texture for knob strip");
            }
        }

        // Value popup while the knob is engaged
        if knob.is_dragging() || response.hovered() {
            draw_value_popup(ui, knob, rect);
        }
    }

    let mut response = response;
    let events = knob.take_events();
    if events
        .iter()
        .any(|e| matches!(e, KnobEvent::ValueChanged { .. }))
    {
        response.mark_changed();
    }
    if knob.take_repaint() {
        ui.ctx().request_repaint();
    }

    KnobResponse { response, events }
}

fn draw_value_popup(ui: &Ui, knob: &FilmstripKnob, rect: egui::Rect) {
    let (anchor, align) = match knob.style().popup_placement {
        PopupPlacement::Above => (rect.center_top() - vec2(0.0, 4.0), Align2::CENTER_BOTTOM),
        PopupPlacement::Below => (rect.center_bottom() + vec2(0.0, 4.0), Align2::CENTER_TOP),
        PopupPlacement::Hidden => return,
    };

    let painter = ui.painter();
    let galley = painter.layout_no_wrap(
        knob.value_text().to_string(),
        FontId::proportional(11.0),
        ui.visuals().strong_text_color(),
    );
    let text_rect = align.anchor_size(anchor, galley.size());
    painter.rect_filled(
        text_rect.expand(3.0),
        CornerRadius::same(3),
        ui.visuals().extreme_bg_color,
    );
    painter.galley(text_rect.min, galley, ui.visuals().strong_text_color());
}
