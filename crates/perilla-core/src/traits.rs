//! Capability traits composed by interactive controls.
//!
//! Rather than one deep widget hierarchy, a control is a concrete type that
//! implements whichever of these capabilities it actually has: pointer
//! interaction ([`Draggable`]), display-scale reaction ([`ScaleAware`]), and
//! deferred notification delivery ([`NotificationSource`]). Adapters and
//! views program against the traits, so future controls (sliders, buttons)
//! slot into the same plumbing.

use crate::event::KnobEvent;
use crate::input::PointerEvent;
use crate::strip::StripProvider;

/// Pointer interaction: press, drag, release.
pub trait Draggable {
    /// Pointer button pressed on the control.
    fn pointer_down(&mut self, event: &PointerEvent);

    /// Pointer moved while the button is held.
    fn pointer_drag(&mut self, event: &PointerEvent);

    /// Pointer button released.
    fn pointer_up(&mut self, event: &PointerEvent);
}

/// Reaction to display scale-factor changes (window moved between monitors,
/// OS zoom changed).
pub trait ScaleAware {
    /// Re-resolve scale-dependent assets for the new configuration.
    fn scale_factor_changed(
        &mut self,
        provider: &dyn StripProvider,
        scale_factor: f32,
        high_res: bool,
    );
}

/// Source of deferred notifications, drained once per UI pump.
pub trait NotificationSource {
    /// Take all pending events, leaving the queue empty.
    fn take_events(&mut self) -> Vec<KnobEvent>;

    /// Whether any event is waiting.
    fn has_pending_events(&self) -> bool;
}
