//! Perilla Params - automatable parameter model for plugin editors
//!
//! This crate is the host-facing half of the perilla widget kit: the
//! parameter objects that controls bind to, independent of any GUI framework.
//!
//! # Core Abstractions
//!
//! - [`ParamInfo`] - static metadata (stable id, name, range, default)
//! - [`AutomatableParam`] - lock-free value storage shared with the audio
//!   thread, plus gesture begin/end flags for host automation recording
//! - [`ParamTree`] - ordered registry with string-id lookup, the object a
//!   plugin editor resolves control bindings against
//! - [`TreeSnapshot`] - serde state capture for host recall and presets
//!
//! # Threading
//!
//! Everything except [`AutomatableParam`] is single-threaded by convention
//! (built and queried on the main/UI thread). Parameter values are atomic
//! f32 bits so the audio thread can read and write them without locks.
//!
//! # Example
//!
//! ```rust
//! use perilla_params::{ParamInfo, ParamTree};
//!
//! let mut tree = ParamTree::new();
//! let cutoff = tree.register(ParamInfo::normalized("cutoff", "Cutoff", 0.65))?;
//!
//! cutoff.set_value(0.8);
//! assert_eq!(tree.lookup("cutoff")?.value(), 0.8);
//! assert!(tree.lookup("bogus").is_err());
//! # Ok::<(), perilla_params::ParamError>(())
//! ```

pub mod error;
pub mod info;
pub mod param;
pub mod snapshot;
pub mod tree;

pub use error::ParamError;
pub use info::ParamInfo;
pub use param::{AutomatableParam, GESTURE_BEGIN, GESTURE_END};
pub use snapshot::{ParamValue, TreeSnapshot};
pub use tree::ParamTree;
