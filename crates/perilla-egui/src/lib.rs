//! egui adapter for the perilla filmstrip knob.
//!
//! This crate does the toolkit-specific work the widget core deliberately
//! avoids: it owns strip bitmaps as egui textures, translates egui pointer
//! interaction into the core's [`PointerEvent`](perilla_core::PointerEvent)
//! model, and paints the current frame through the core's
//! [`RenderSurface`](perilla_core::RenderSurface) seam.
//!
//! # Modules
//!
//! - [`texture`] — strip synthesis and the scale-keyed texture cache (the
//!   [`StripProvider`](perilla_core::StripProvider) implementation)
//! - [`surface`] — [`EguiSurface`], one textured-rect blit per paint
//! - [`widget`] — [`filmstrip_knob`], the immediate-mode wrapper

pub mod surface;
pub mod texture;
pub mod widget;

pub use surface::EguiSurface;
pub use texture::{StripTextureCache, synthesize_strip};
pub use widget::{KnobResponse, filmstrip_knob};
