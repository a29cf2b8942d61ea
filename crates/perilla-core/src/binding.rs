//! One-to-one binding from an automatable parameter to a control.
//!
//! A [`ParamBinding`] covers the inward direction of the sync loop: it
//! resolves a parameter id against the tree, pushes the parameter's value
//! into the control, and keeps doing so on demand — always through the
//! control's silent setter, so nothing it does can echo back toward the
//! parameter. The outward direction (user edits landing on the parameter)
//! is the control's own job via its weak parameter reference.
//!
//! Bindings are created after both endpoints exist and hold only a non-owning
//! handle; a parameter dropped out from under a live binding turns
//! synchronization into a logged no-op. One binding per control — enforced by
//! construction discipline in the owning view, not checked here.

use std::sync::{Arc, Weak};

use tracing::{debug, trace, warn};

use perilla_params::{AutomatableParam, ParamError, ParamTree};

use crate::knob::{FilmstripKnob, ValueNotify};

/// Links one [`FilmstripKnob`] to one [`AutomatableParam`].
#[derive(Debug)]
pub struct ParamBinding {
    param: Weak<AutomatableParam>,
}

impl ParamBinding {
    /// Resolve `id` in the tree and bind the parameter to the control.
    ///
    /// On success the control holds the parameter reference and displays the
    /// parameter's current value (pushed silently — binding never generates
    /// an outward notification). An unknown id fails with
    /// [`ParamError::UnknownId`] and leaves the control untouched.
    pub fn bind(
        tree: &ParamTree,
        id: &str,
        control: &mut FilmstripKnob,
    ) -> Result<Self, ParamError> {
        let param = tree.lookup(id)?;
        control.set_param_ref(&param);
        control.set_value(param.value(), ValueNotify::Silent);
        debug!(id = param.id(), value = param.value(), "binding created");
        Ok(Self {
            param: Arc::downgrade(&param),
        })
    }

    /// Push the parameter's current value into the control, silently.
    ///
    /// Call this when the parameter may have changed behind the UI's back
    /// (automation, undo, host recall). The control's display updates; no
    /// outward event fires, so the value cannot loop back to the parameter.
    /// Idempotent — repeated calls with no intervening change leave the
    /// control byte-identical.
    pub fn synchronize_from_parameter(&self, control: &mut FilmstripKnob) {
        match self.param.upgrade() {
            Some(param) => {
                trace!(id = param.id(), value = param.value(), "sync from parameter");
                control.set_value(param.value(), ValueNotify::Silent);
            }
            None => {
                warn!("bound parameter no longer exists, skipping sync");
            }
        }
    }

    /// The bound parameter, if still alive.
    pub fn param(&self) -> Option<Arc<AutomatableParam>> {
        self.param.upgrade()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{Modifiers, PointerEvent};
    use crate::strip::StripImage;
    use crate::traits::{Draggable, NotificationSource};
    use perilla_params::ParamInfo;

    fn test_tree() -> ParamTree {
        ParamTree::from_infos(&[
            ParamInfo::normalized("cutoff", "Cutoff", 0.65),
            ParamInfo::normalized("mix", "Mix", 0.5),
        ])
        .unwrap()
    }

    fn test_knob() -> FilmstripKnob {
        FilmstripKnob::new("knob", StripImage::new(48, 48 * 128, 1), 48, 48)
    }

    #[test]
    fn bind_pushes_initial_value_silently() {
        let tree = test_tree();
        let mut knob = test_knob();

        let binding = ParamBinding::bind(&tree, "cutoff", &mut knob).unwrap();

        assert_eq!(knob.value(), 0.65);
        assert!(!knob.has_pending_events(), "initial push must be silent");
        assert!(binding.param().is_some());
        assert!(Arc::ptr_eq(
            &knob.bound_param().unwrap(),
            &binding.param().unwrap()
        ));
    }

    #[test]
    fn bind_unknown_id_fails_and_leaves_control_unbound() {
        let tree = test_tree();
        let mut knob = test_knob().with_value(0.3);

        let err = ParamBinding::bind(&tree, "bogus", &mut knob).unwrap_err();

        assert_eq!(err, ParamError::UnknownId("bogus".to_string()));
        assert!(knob.bound_param().is_none());
        assert_eq!(knob.value(), 0.3, "failed bind must not touch the value");
        assert!(!knob.has_pending_events());
    }

    #[test]
    fn synchronize_pulls_external_change() {
        let tree = test_tree();
        let mut knob = test_knob();
        let binding = ParamBinding::bind(&tree, "mix", &mut knob).unwrap();

        tree.lookup("mix").unwrap().set_value(0.9);
        binding.synchronize_from_parameter(&mut knob);

        assert_eq!(knob.value(), 0.9);
        assert!(!knob.has_pending_events(), "sync must not emit events");
    }

    #[test]
    fn synchronize_twice_is_idempotent() {
        let tree = test_tree();
        let mut knob = test_knob();
        let binding = ParamBinding::bind(&tree, "cutoff", &mut knob).unwrap();

        tree.lookup("cutoff").unwrap().set_value(0.4);
        binding.synchronize_from_parameter(&mut knob);
        let _ = knob.take_repaint();
        let value_after_first = knob.value();
        let text_after_first = knob.value_text().to_string();
        let frame_after_first = knob.frame_index();

        binding.synchronize_from_parameter(&mut knob);

        assert_eq!(knob.value(), value_after_first);
        assert_eq!(knob.value_text(), text_after_first);
        assert_eq!(knob.frame_index(), frame_after_first);
        assert!(!knob.take_repaint(), "second sync must not even repaint");
        assert!(!knob.has_pending_events());
    }

    #[test]
    fn synchronize_does_not_echo_to_parameter() {
        let tree = test_tree();
        let mut knob = test_knob();
        let binding = ParamBinding::bind(&tree, "cutoff", &mut knob).unwrap();

        let param = tree.lookup("cutoff").unwrap();
        param.set_value(0.1);
        binding.synchronize_from_parameter(&mut knob);

        // No gesture flags, no value rewrite beyond what the host set.
        assert_eq!(param.take_gesture_flags(), 0);
        assert_eq!(param.value(), 0.1);
    }

    #[test]
    fn dead_parameter_makes_sync_a_noop() {
        let mut knob = test_knob();
        let binding = {
            let mut tree = ParamTree::new();
            tree.register(ParamInfo::normalized("gone", "Gone", 0.7))
                .unwrap();
            ParamBinding::bind(&tree, "gone", &mut knob).unwrap()
        };

        assert!(binding.param().is_none());
        binding.synchronize_from_parameter(&mut knob);
        assert_eq!(knob.value(), 0.7, "value from before the drop survives");
    }

    #[test]
    fn user_edit_still_reaches_parameter_after_bind() {
        let tree = test_tree();
        let mut knob = test_knob();
        let _binding = ParamBinding::bind(&tree, "mix", &mut knob).unwrap();

        knob.pointer_down(&PointerEvent::press(0.0, 0.0, Modifiers::NONE));
        knob.pointer_drag(&PointerEvent::drag(0.0, -40.0, Modifiers::NONE));
        knob.pointer_up(&PointerEvent::press(0.0, 0.0, Modifiers::NONE));

        assert_eq!(tree.lookup("mix").unwrap().value(), knob.value());
        assert_ne!(knob.value(), 0.5);
    }
}
