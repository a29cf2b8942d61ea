//! Pixel-to-value drag mapping.
//!
//! [`DragMap`] converts pointer deltas into value deltas using the DAW knob
//! convention: dragging right or up increases the value, left or down
//! decreases it. Sensitivity is expressed as the fraction of the full value
//! range covered per pixel, so a knob with any range feels the same under the
//! cursor. Holding ctrl switches to a fine multiplier for precise edits.

use crate::input::PointerEvent;

/// Fraction of the full range covered per pixel of drag.
const DEFAULT_SENSITIVITY: f32 = 0.005;

/// Sensitivity multiplier while ctrl is held.
const DEFAULT_FINE_MULTIPLIER: f32 = 0.1;

/// Converts pointer drag deltas into value deltas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragMap {
    sensitivity: f32,
    fine_multiplier: f32,
}

impl Default for DragMap {
    fn default() -> Self {
        Self {
            sensitivity: DEFAULT_SENSITIVITY,
            fine_multiplier: DEFAULT_FINE_MULTIPLIER,
        }
    }
}

impl DragMap {
    /// Mapping with the default feel (200 px for the full range, 10x finer
    /// under ctrl).
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the base sensitivity (range fraction per pixel).
    pub const fn with_sensitivity(mut self, sensitivity: f32) -> Self {
        self.sensitivity = sensitivity;
        self
    }

    /// Replace the ctrl fine-mode multiplier.
    pub const fn with_fine_multiplier(mut self, fine_multiplier: f32) -> Self {
        self.fine_multiplier = fine_multiplier;
        self
    }

    /// Value delta for one drag event over the given value range.
    ///
    /// Right and up are positive; vertical deltas arrive screen-down positive
    /// and are flipped here.
    pub fn value_delta(&self, event: &PointerEvent, range: f32) -> f32 {
        let pixels = event.delta_x - event.delta_y;
        let speed = if event.modifiers.ctrl {
            self.sensitivity * self.fine_multiplier
        } else {
            self.sensitivity
        };
        pixels * speed * range
    }
}
