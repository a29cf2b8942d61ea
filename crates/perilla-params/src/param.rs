//! Lock-free automatable parameter storage.
//!
//! [`AutomatableParam`] is the one object in this workspace shared across
//! threads: the UI writes it from gesture handlers while the audio thread
//! reads (and, under host automation, writes) the same value. The value is an
//! `f32` bit-cast to `u32` for atomic access; gesture begin/end markers are
//! flag bits raised by the UI and drained by whoever talks to the host.

use core::sync::atomic::{AtomicU8, AtomicU32, Ordering};

use crate::ParamInfo;

/// Flag indicating a gesture-begin is pending (UI → host).
pub const GESTURE_BEGIN: u8 = 1;
/// Flag indicating a gesture-end is pending (UI → host).
pub const GESTURE_END: u8 = 2;

/// A single automatable parameter with a lock-free value.
///
/// Typically owned by a [`ParamTree`](crate::ParamTree) behind `Arc`, with
/// controls holding `Weak` references — the tree decides parameter lifetime,
/// never the widgets.
///
/// # Thread Safety
///
/// - **Value**: `AtomicU32` holding f32 bits — lock-free load/store, safe to
///   touch from the audio thread.
/// - **Gesture flags**: `AtomicU8` — UI raises via `fetch_or`, host glue
///   drains via `swap(0)`.
#[derive(Debug)]
pub struct AutomatableParam {
    info: ParamInfo,

    /// Current value as f32 bit-cast to u32 for atomic access.
    value: AtomicU32,

    /// Gesture flags: bit 0 = begin pending, bit 1 = end pending.
    gesture_flags: AtomicU8,
}

impl AutomatableParam {
    /// Create a parameter initialized to its descriptor default.
    pub fn new(info: ParamInfo) -> Self {
        Self {
            info,
            value: AtomicU32::new(info.default.to_bits()),
            gesture_flags: AtomicU8::new(0),
        }
    }

    /// Static metadata for this parameter.
    pub fn info(&self) -> &ParamInfo {
        &self.info
    }

    /// Stable string identifier (shorthand for `info().id`).
    pub fn id(&self) -> &'static str {
        self.info.id
    }

    // ── Value access (lock-free) ────────────────────────────────────────────

    /// Read the current value.
    pub fn value(&self) -> f32 {
        f32::from_bits(self.value.load(Ordering::Acquire))
    }

    /// Write a new value, clamped to the descriptor range.
    pub fn set_value(&self, value: f32) {
        let clamped = self.info.clamp(value);
        self.value.store(clamped.to_bits(), Ordering::Release);
    }

    /// Restore the descriptor default.
    pub fn reset_to_default(&self) {
        self.value
            .store(self.info.default.to_bits(), Ordering::Release);
    }

    // ── Gesture flags ───────────────────────────────────────────────────────

    /// Signal the start of an edit gesture (drag start).
    pub fn gesture_begin(&self) {
        self.gesture_flags.fetch_or(GESTURE_BEGIN, Ordering::Release);
    }

    /// Signal the end of an edit gesture (drag stop).
    pub fn gesture_end(&self) {
        self.gesture_flags.fetch_or(GESTURE_END, Ordering::Release);
    }

    /// Atomically read and clear the pending gesture flags.
    ///
    /// Both flags can be set at once when a click begins and ends between
    /// two drains; hosts treat that as a complete begin/end pair.
    pub fn take_gesture_flags(&self) -> u8 {
        self.gesture_flags.swap(0, Ordering::AcqRel)
    }
}
