//! Strip synthesis and the scale-keyed texture cache.
//!
//! Plugin builds normally ship pre-rendered filmstrip assets; this demo-grade
//! provider synthesizes them instead, drawing each rotation frame
//! procedurally into one tall [`egui::ColorImage`]. Strips are registered by
//! id with a logical frame size and frame count; textures are created lazily
//! and cached per `(id, pixel_scale)`, so a window dragged between a 1x and a
//! 2x monitor re-renders each strip at most once per scale.

use std::collections::HashMap;

use egui::{Color32, ColorImage, Context, TextureHandle, TextureOptions};
use tracing::debug;

use perilla_core::{StripImage, StripProvider};

/// Sweep of the knob indicator, matching the usual synth-knob arc.
const ARC_START_DEG: f32 = -135.0;
const ARC_END_DEG: f32 = 135.0;

const BODY_COLOR: Color32 = Color32::from_rgb(38, 38, 44);
const RING_COLOR: Color32 = Color32::from_rgb(90, 90, 104);
const INDICATOR_COLOR: Color32 = Color32::from_rgb(255, 166, 77);

/// Registered strip configuration: logical frame size and frame count.
#[derive(Debug, Clone, Copy)]
struct StripConfig {
    frame_size: u32,
    frames: u32,
}

/// Synthesizes and caches filmstrip textures, keyed by id and pixel scale.
#[derive(Default)]
pub struct StripTextureCache {
    configs: HashMap<String, StripConfig>,
    textures: HashMap<(String, u32), TextureHandle>,
}

impl StripTextureCache {
    /// Empty cache with no registered strips.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a strip id with its logical frame size and frame count.
    pub fn register(&mut self, id: impl Into<String>, frame_size: u32, frames: u32) {
        self.configs.insert(
            id.into(),
            StripConfig {
                frame_size,
                frames: frames.max(1),
            },
        );
    }

    /// Integer asset scale used for a display configuration.
    ///
    /// High-resolution displays above 1x get `@2x` strips; everything else
    /// uses the base rendering.
    fn pixel_scale(scale_factor: f32, high_res: bool) -> u32 {
        if high_res && scale_factor > 1.0 { 2 } else { 1 }
    }

    /// Texture for a registered strip at the given display configuration,
    /// synthesizing and uploading it on first use.
    ///
    /// Returns the handle plus the strip's pixel dimensions, or `None` for an
    /// unregistered id.
    pub fn texture(
        &mut self,
        ctx: &Context,
        id: &str,
        scale_factor: f32,
        high_res: bool,
    ) -> Option<(TextureHandle, [usize; 2])> {
        let config = *self.configs.get(id)?;
        let pixel_scale = Self::pixel_scale(scale_factor, high_res);
        let key = (id.to_string(), pixel_scale);

        if !self.textures.contains_key(&key) {
            let frame_px = config.frame_size * pixel_scale;
            let image = synthesize_strip(config.frames as usize, frame_px as usize);
            debug!(id, pixel_scale, frames = config.frames, "synthesized strip texture");
            let handle = ctx.load_texture(
                format!("{id}@{pixel_scale}x"),
                image,
                TextureOptions::NEAREST,
            );
            self.textures.insert(key.clone(), handle);
        }

        let handle = self.textures.get(&key)?.clone();
        let size = handle.size();
        Some((handle, size))
    }
}

impl StripProvider for StripTextureCache {
    /// Strip geometry for a registered id; texture upload happens separately
    /// in [`StripTextureCache::texture`] because providers are queried from
    /// contexts that have no egui handle (knob construction, rescale).
    fn strip(&self, image_id: &str, scale_factor: f32, high_res: bool) -> Option<StripImage> {
        let config = self.configs.get(image_id)?;
        let pixel_scale = Self::pixel_scale(scale_factor, high_res);
        let frame_px = config.frame_size * pixel_scale;
        Some(StripImage::new(
            frame_px,
            frame_px * config.frames,
            pixel_scale,
        ))
    }
}

/// Render a filmstrip of `frames` square knob frames, `frame_px` pixels each.
///
/// Frame 0 (value = minimum) points the indicator to the lower left; the last
/// frame points to the lower right, sweeping -135° to 135° like a hardware
/// synth knob. Plain per-pixel rasterization — this runs once per strip per
/// scale, never per UI frame.
pub fn synthesize_strip(frames: usize, frame_px: usize) -> ColorImage {
    let frames = frames.max(1);
    let frame_px = frame_px.max(1);
    let mut image = ColorImage::new([frame_px, frame_px * frames], Color32::TRANSPARENT);

    let center = frame_px as f32 / 2.0;
    let radius = center - 2.0;
    let ring_width = (frame_px as f32 / 24.0).max(1.0);
    let indicator_width = (frame_px as f32 / 24.0).max(1.0);

    for frame in 0..frames {
        let normalized = if frames > 1 {
            frame as f32 / (frames - 1) as f32
        } else {
            0.0
        };
        let angle =
            (ARC_START_DEG + normalized * (ARC_END_DEG - ARC_START_DEG)).to_radians();
        // Indicator from just outside the center hub to just inside the ring
        let (sin, cos) = angle.sin_cos();
        let tip = (center + sin * radius * 0.8, center - cos * radius * 0.8);
        let tail = (center + sin * radius * 0.25, center - cos * radius * 0.25);

        let y_off = frame * frame_px;
        for y in 0..frame_px {
            for x in 0..frame_px {
                let px = x as f32 + 0.5;
                let py = y as f32 + 0.5;
                let dist = ((px - center).powi(2) + (py - center).powi(2)).sqrt();

                let color = if dist_to_segment(px, py, tail, tip) <= indicator_width {
                    Some(INDICATOR_COLOR)
                } else if (dist - radius).abs() <= ring_width {
                    Some(RING_COLOR)
                } else if dist < radius {
                    Some(BODY_COLOR)
                } else {
                    None
                };

                if let Some(color) = color {
                    image.pixels[(y_off + y) * frame_px + x] = color;
                }
            }
        }
    }

    image
}

/// Distance from a point to a line segment.
fn dist_to_segment(px: f32, py: f32, a: (f32, f32), b: (f32, f32)) -> f32 {
    let (ax, ay) = a;
    let (bx, by) = b;
    let (abx, aby) = (bx - ax, by - ay);
    let len_sq = abx * abx + aby * aby;
    let t = if len_sq <= f32::EPSILON {
        0.0
    } else {
        (((px - ax) * abx + (py - ay) * aby) / len_sq).clamp(0.0, 1.0)
    };
    let (cx, cy) = (ax + t * abx, ay + t * aby);
    ((px - cx).powi(2) + (py - cy).powi(2)).sqrt()
}
