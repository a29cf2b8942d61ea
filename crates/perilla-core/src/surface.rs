//! Rendering seam between the widget core and a GUI framework.

use crate::strip::Region;

/// Destination a control paints into.
///
/// One knob paint is exactly one `draw_image` call: the current frame's band
/// of the strip (source, physical pixels) mapped onto the control's bounds
/// (destination, logical pixels). Adapters own the actual bitmap or texture
/// and do the blit.
pub trait RenderSurface {
    /// Copy `src` from the bound strip image into `dst`.
    fn draw_image(&mut self, src: Region, dst: Region);
}

#[cfg(test)]
mod tests {
    use super::*;

    struct CountingSurface {
        calls: usize,
    }

    impl RenderSurface for CountingSurface {
        fn draw_image(&mut self, _src: Region, _dst: Region) {
            self.calls += 1;
        }
    }

    #[test]
    fn trait_is_object_safe() {
        let mut surface = CountingSurface { calls: 0 };
        let dyn_surface: &mut dyn RenderSurface = &mut surface;
        dyn_surface.draw_image(
            Region::new(0.0, 0.0, 48.0, 48.0),
            Region::new(10.0, 10.0, 48.0, 48.0),
        );
        assert_eq!(surface.calls, 1);
    }
}
