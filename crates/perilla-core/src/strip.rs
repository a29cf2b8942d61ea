//! Filmstrip geometry: frame counting and per-frame source regions.
//!
//! A filmstrip is one tall image holding every rotation frame of a knob,
//! stacked vertically. Frame zero (value = minimum) sits at the top. The
//! asset may be pre-rendered at an integer pixel scale (a `@2x` strip carries
//! `pixel_scale = 2`); all regions returned here are in the strip's physical
//! pixels, ready for a one-call blit.

/// Axis-aligned rectangle in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Region {
    /// Left edge.
    pub x: f32,
    /// Top edge.
    pub y: f32,
    /// Width.
    pub width: f32,
    /// Height.
    pub height: f32,
}

impl Region {
    /// Create a region from position and size.
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// A strip bitmap's physical dimensions and asset scale.
///
/// Returned by a [`StripProvider`]; the pixels themselves stay with the GUI
/// adapter (texture handles, image caches), the core only needs geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StripImage {
    /// Strip width in physical pixels.
    pub width: u32,
    /// Strip height in physical pixels (all frames stacked).
    pub height: u32,
    /// Integer scale the asset was rendered at (1 = base, 2 = `@2x`, ...).
    pub pixel_scale: u32,
}

impl StripImage {
    /// Describe a strip bitmap.
    pub const fn new(width: u32, height: u32, pixel_scale: u32) -> Self {
        Self {
            width,
            height,
            pixel_scale,
        }
    }
}

/// Resolves strip bitmaps by id for the current display configuration.
///
/// Called at control construction and again whenever the display scale
/// factor changes, so a provider can swap in a sharper asset. Returns `None`
/// when the id is unknown; controls keep their previous strip in that case.
pub trait StripProvider {
    /// Strip metadata for `image_id` at the given display scale.
    fn strip(&self, image_id: &str, scale_factor: f32, high_res: bool) -> Option<StripImage>;
}

/// A strip image divided into equally sized frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameStrip {
    image: StripImage,
    frame_width: u32,
    frame_height: u32,
}

impl FrameStrip {
    /// Divide a strip into frames of the given logical size.
    ///
    /// Frame dimensions are in logical pixels (the control's on-screen size);
    /// the asset's `pixel_scale` is applied internally. A strip shorter than
    /// one frame still counts as a single frame.
    pub fn new(image: StripImage, frame_width: u32, frame_height: u32) -> Self {
        Self {
            image,
            frame_width,
            frame_height,
        }
    }

    /// The underlying strip bitmap description.
    pub fn image(&self) -> StripImage {
        self.image
    }

    /// Logical frame width.
    pub fn frame_width(&self) -> u32 {
        self.frame_width
    }

    /// Logical frame height.
    pub fn frame_height(&self) -> u32 {
        self.frame_height
    }

    /// Number of frames in the strip, always at least 1.
    pub fn frame_count(&self) -> usize {
        let physical_frame = self
            .frame_height
            .saturating_mul(self.image.pixel_scale)
            .max(1);
        ((self.image.height / physical_frame) as usize).max(1)
    }

    /// Source region of one frame, in physical strip pixels.
    ///
    /// `frame` is clamped to the last frame.
    pub fn source_region(&self, frame: usize) -> Region {
        let frame = frame.min(self.frame_count() - 1);
        let scale = self.image.pixel_scale.max(1) as f32;
        let w = self.frame_width as f32 * scale;
        let h = self.frame_height as f32 * scale;
        Region::new(0.0, frame as f32 * h, w, h)
    }
}

/// Frame index for a value within `[min, max]`.
///
/// The index grows proportionally with the normalized value:
/// `floor(norm * (frame_count - 1))`, clamped to the strip. The maximum value
/// lands exactly on the last frame; a degenerate range selects frame 0.
pub fn frame_for_value(value: f32, min: f32, max: f32, frame_count: usize) -> usize {
    if frame_count <= 1 || (max - min).abs() < f32::EPSILON {
        return 0;
    }
    let norm = ((value - min) / (max - min)).clamp(0.0, 1.0);
    let index = (norm * (frame_count - 1) as f32).floor() as usize;
    index.min(frame_count - 1)
}
