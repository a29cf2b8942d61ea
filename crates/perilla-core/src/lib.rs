//! Perilla Core - filmstrip knob widget logic, GUI-framework-free
//!
//! This crate is the heart of the perilla widget kit: everything a rotary
//! filmstrip control does — gesture-to-value mapping, frame selection,
//! deferred notifications, parameter binding — without linking against any
//! windowing or rendering stack. GUI adapters (see `perilla-egui`) translate
//! toolkit events into this crate's input model and paint through its
//! rendering seam.
//!
//! # Core Abstractions
//!
//! ## The control
//!
//! - [`FilmstripKnob`] - the rotary control: value, range, remap stack,
//!   reset gesture, frame rendering
//! - [`KnobStyle`] - per-control presentation (popup placement, value text)
//! - [`DragMap`] - pointer delta → value delta mapping with ctrl fine mode
//!
//! ## Capability traits
//!
//! One concrete control composes three narrow capabilities instead of
//! inheriting from a widget hierarchy:
//!
//! - [`Draggable`] - pointer press / drag / release
//! - [`ScaleAware`] - re-resolve assets on display-scale changes
//! - [`NotificationSource`] - deferred [`KnobEvent`] queue, drained per UI pump
//!
//! ## Collaborator seams
//!
//! - [`StripProvider`] - resolves strip bitmaps by id and display scale
//! - [`RenderSurface`] - one `draw_image` blit per paint
//!
//! ## Parameter synchronization
//!
//! - [`ParamBinding`] - one-to-one link from an automatable parameter to a
//!   control; silent inward pushes, so external changes never echo back out
//!
//! # Example
//!
//! ```rust
//! use perilla_core::{Draggable, FilmstripKnob, Modifiers, ParamBinding, PointerEvent, StripImage};
//! use perilla_params::{ParamInfo, ParamTree};
//!
//! let mut tree = ParamTree::new();
//! tree.register(ParamInfo::normalized("cutoff", "Cutoff", 0.65))?;
//!
//! // 128 frames of 48x48, value starts at the parameter's current value
//! let mut knob = FilmstripKnob::new("knob_large", StripImage::new(48, 48 * 128, 1), 48, 48);
//! let binding = ParamBinding::bind(&tree, "cutoff", &mut knob)?;
//! assert_eq!(knob.value(), 0.65);
//!
//! // User drags; the edit lands on the parameter
//! knob.pointer_down(&PointerEvent::press(24.0, 24.0, Modifiers::NONE));
//! knob.pointer_drag(&PointerEvent::drag(0.0, -40.0, Modifiers::NONE));
//! assert_eq!(tree.lookup("cutoff")?.value(), knob.value());
//!
//! // Host automation moved the parameter; pull it back in silently
//! tree.lookup("cutoff")?.set_value(0.2);
//! binding.synchronize_from_parameter(&mut knob);
//! assert_eq!(knob.value(), 0.2);
//! # Ok::<(), perilla_params::ParamError>(())
//! ```

pub mod binding;
pub mod drag;
pub mod event;
pub mod input;
pub mod knob;
pub mod strip;
pub mod style;
pub mod surface;
pub mod traits;

pub use binding::ParamBinding;
pub use drag::DragMap;
pub use event::KnobEvent;
pub use input::{Modifiers, PointerEvent};
pub use knob::{FilmstripKnob, ValueNotify, ValueRemap};
pub use strip::{FrameStrip, Region, StripImage, StripProvider, frame_for_value};
pub use style::{KnobStyle, PopupPlacement, ValueFormatter};
pub use surface::RenderSurface;
pub use traits::{Draggable, NotificationSource, ScaleAware};
