//! Per-control presentation style.
//!
//! Each control owns its [`KnobStyle`] outright — no shared look-and-feel
//! registry to keep alive, no teardown order to get wrong. The style decides
//! where the value popup goes and how the value is rendered as text.

/// Where the value popup appears relative to the control.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PopupPlacement {
    /// Centered above the control (the classic synth-knob bubble).
    #[default]
    Above,
    /// Centered below the control.
    Below,
    /// No popup.
    Hidden,
}

/// Formats a plain value for display.
pub type ValueFormatter = Box<dyn Fn(f32) -> String>;

/// Presentation settings owned by one control.
pub struct KnobStyle {
    /// Popup position while the control is being edited.
    pub popup_placement: PopupPlacement,
    formatter: Option<ValueFormatter>,
}

impl Default for KnobStyle {
    fn default() -> Self {
        Self {
            popup_placement: PopupPlacement::Above,
            formatter: None,
        }
    }
}

impl KnobStyle {
    /// Default style: popup above, two-decimal value text.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the popup placement.
    pub fn with_placement(mut self, placement: PopupPlacement) -> Self {
        self.popup_placement = placement;
        self
    }

    /// Install a custom value formatter.
    pub fn with_formatter(mut self, formatter: impl Fn(f32) -> String + 'static) -> Self {
        self.formatter = Some(Box::new(formatter));
        self
    }

    /// Render a value as display text.
    pub fn format_value(&self, value: f32) -> String {
        match &self.formatter {
            Some(f) => f(value),
            None => format!("{value:.2}"),
        }
    }
}
