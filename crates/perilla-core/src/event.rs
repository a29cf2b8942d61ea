//! Deferred notifications emitted by controls.
//!
//! Controls never call back into their owner from inside an input handler.
//! Instead they queue [`KnobEvent`]s, and the owning view drains the queue on
//! the next UI pump via
//! [`NotificationSource::take_events`](crate::NotificationSource::take_events).
//! Display updates are coalesced: however many value changes a drag produces
//! between two pumps, at most one `ValueChanged` is pending.

/// A queued notification from a control.
#[derive(Debug, Clone, PartialEq)]
pub enum KnobEvent {
    /// The displayed value changed; carries the final value.
    ///
    /// Coalesced — the queue never holds more than one of these.
    ValueChanged {
        /// Value after the change.
        value: f32,
    },

    /// The user performed the reset gesture (shift-click) on a control with
    /// reset enabled. Carries the control's configured reset message; the
    /// owner decides what resetting actually means.
    ResetRequested {
        /// Message configured on the control.
        message: String,
    },
}
