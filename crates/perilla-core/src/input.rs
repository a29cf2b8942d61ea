//! Framework-neutral pointer input model.
//!
//! GUI adapters translate their toolkit's events into [`PointerEvent`]s so the
//! widget core never links against a windowing stack. Presses carry a
//! position, drags carry per-frame deltas; both carry the modifier state at
//! the time of the event.

/// Keyboard modifier state accompanying a pointer event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    /// Shift key held.
    pub shift: bool,
    /// Alt/Option key held.
    pub alt: bool,
    /// Ctrl key held (Cmd on macOS adapters that fold the two together).
    pub ctrl: bool,
}

impl Modifiers {
    /// No modifiers held.
    pub const NONE: Self = Self {
        shift: false,
        alt: false,
        ctrl: false,
    };

    /// Shift only.
    pub const SHIFT: Self = Self {
        shift: true,
        alt: false,
        ctrl: false,
    };

    /// Alt only.
    pub const ALT: Self = Self {
        shift: false,
        alt: true,
        ctrl: false,
    };
}

/// One pointer event in widget-local coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    /// Position relative to the widget origin (press events).
    pub x: f32,
    /// Position relative to the widget origin (press events).
    pub y: f32,
    /// Horizontal movement since the previous event (drag events).
    pub delta_x: f32,
    /// Vertical movement since the previous event, positive = downward.
    pub delta_y: f32,
    /// Modifier keys held when the event fired.
    pub modifiers: Modifiers,
}

impl PointerEvent {
    /// A press (or release) at the given widget-local position.
    pub fn press(x: f32, y: f32, modifiers: Modifiers) -> Self {
        Self {
            x,
            y,
            delta_x: 0.0,
            delta_y: 0.0,
            modifiers,
        }
    }

    /// A drag movement by the given deltas.
    pub fn drag(delta_x: f32, delta_y: f32, modifiers: Modifiers) -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            delta_x,
            delta_y,
            modifiers,
        }
    }
}
