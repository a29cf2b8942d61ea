//! Static parameter metadata.
//!
//! A [`ParamInfo`] describes one automatable parameter: its stable string
//! identifier, display name, value range, and default. The identifier is the
//! persistence key — once shipped it must never change, because presets and
//! host automation lanes refer to it.
//!
//! # Example
//!
//! ```rust
//! use perilla_params::ParamInfo;
//!
//! let cutoff = ParamInfo::new("flt_cutoff", "Cutoff", 0.0, 1.0, 0.65);
//! assert_eq!(cutoff.clamp(1.7), 1.0);
//! assert_eq!(cutoff.default, 0.65);
//! ```

/// Describes a single parameter's identity, range, and default.
///
/// Values are plain `f32` in `[min, max]`. Synth-style plugins conventionally
/// keep every parameter normalized to `[0, 1]` and interpret the value in the
/// audio code; [`ParamInfo::normalized`] builds that common shape.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParamInfo {
    /// Stable string identifier for lookup and persistence (e.g. `"flt_cutoff"`).
    pub id: &'static str,

    /// Full name for display (e.g. `"Cutoff"`, `"Osc 2 Detune"`).
    pub name: &'static str,

    /// Minimum allowed value.
    pub min: f32,

    /// Maximum allowed value.
    pub max: f32,

    /// Value the parameter takes on creation and on reset.
    pub default: f32,
}

impl ParamInfo {
    /// Create a descriptor with an explicit range.
    pub const fn new(id: &'static str, name: &'static str, min: f32, max: f32, default: f32) -> Self {
        Self {
            id,
            name,
            min,
            max,
            default,
        }
    }

    /// Create a normalized `[0, 1]` descriptor with the given default.
    ///
    /// This is the usual shape for host-facing synth parameters.
    pub const fn normalized(id: &'static str, name: &'static str, default: f32) -> Self {
        Self {
            id,
            name,
            min: 0.0,
            max: 1.0,
            default,
        }
    }

    /// Replace the default value.
    ///
    /// Builder pattern — call after a factory method or struct literal.
    pub const fn with_default(mut self, default: f32) -> Self {
        self.default = default;
        self
    }

    /// Clamps a value to this parameter's valid range.
    #[inline]
    pub fn clamp(&self, value: f32) -> f32 {
        if value < self.min {
            self.min
        } else if value > self.max {
            self.max
        } else {
            value
        }
    }

    /// Converts a plain value to normalized `[0, 1]` range.
    ///
    /// A degenerate range (`max == min`) maps everything to `0.0`.
    #[inline]
    pub fn normalize(&self, value: f32) -> f32 {
        let range = self.max - self.min;
        if range == 0.0 {
            return 0.0;
        }
        (value - self.min) / range
    }

    /// Converts a normalized `[0, 1]` value back to the parameter range.
    #[inline]
    pub fn denormalize(&self, normalized: f32) -> f32 {
        self.min + normalized * (self.max - self.min)
    }
}
