//! [`RenderSurface`] implementation painting through an egui painter.

use egui::{Color32, Painter, Pos2, Rect, TextureId, pos2, vec2};

use perilla_core::{Region, RenderSurface};

/// Paints strip regions as one textured rect per blit.
///
/// The widget core speaks in strip pixels (source) and widget-local logical
/// pixels (destination); this surface converts the source region into UV
/// coordinates on the bound texture and offsets the destination by the
/// widget's screen origin.
pub struct EguiSurface<'a> {
    painter: &'a Painter,
    texture: TextureId,
    texture_size: [usize; 2],
    origin: Pos2,
}

impl<'a> EguiSurface<'a> {
    /// Surface over a painter, a strip texture, and the widget origin.
    pub fn new(
        painter: &'a Painter,
        texture: TextureId,
        texture_size: [usize; 2],
        origin: Pos2,
    ) -> Self {
        Self {
            painter,
            texture,
            texture_size,
            origin,
        }
    }

    /// Source pixel region → texture UV rect.
    fn uv(&self, src: Region) -> Rect {
        let w = (self.texture_size[0] as f32).max(1.0);
        let h = (self.texture_size[1] as f32).max(1.0);
        Rect::from_min_max(
            pos2(src.x / w, src.y / h),
            pos2((src.x + src.width) / w, (src.y + src.height) / h),
        )
    }
}

impl RenderSurface for EguiSurface<'_> {
    fn draw_image(&mut self, src: Region, dst: Region) {
        let rect = Rect::from_min_size(
            self.origin + vec2(dst.x, dst.y),
            vec2(dst.width, dst.height),
        );
        self.painter
            .image(self.texture, rect, self.uv(src), Color32::WHITE);
    }
}
