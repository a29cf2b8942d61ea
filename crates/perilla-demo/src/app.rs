//! Demo application state and UI layout.

use std::path::PathBuf;
use std::sync::Arc;

use eframe::egui::{CentralPanel, Context, TopBottomPanel};
use tracing::{info, trace, warn};

use perilla_core::{FilmstripKnob, KnobStyle, ParamBinding, StripProvider};
use perilla_egui::{StripTextureCache, filmstrip_knob};
use perilla_params::{ParamInfo, ParamTree, TreeSnapshot};

const STRIP_ID: &str = "knob_large";
const FRAME_SIZE: u32 = 48;
const FRAME_COUNT: u32 = 128;

/// The demo's parameter set — a toy synth filter section.
const PARAMS: &[ParamInfo] = &[
    ParamInfo::normalized("flt_cutoff", "Cutoff", 0.65),
    ParamInfo::normalized("flt_res", "Resonance", 0.1),
    ParamInfo::normalized("osc_mix", "Osc Mix", 0.5),
    ParamInfo::normalized("drive", "Drive", 0.25),
];

/// One knob with its label and parameter binding.
struct KnobSlot {
    label: &'static str,
    knob: FilmstripKnob,
    binding: ParamBinding,
}

/// Main demo application state.
pub struct PerillaApp {
    tree: Arc<ParamTree>,
    slots: Vec<KnobSlot>,
    cache: StripTextureCache,
    preset_path: PathBuf,
    status: String,
}

impl PerillaApp {
    /// Build the parameter tree, the strip cache, and one bound knob per
    /// parameter.
    pub fn new(_cc: &eframe::CreationContext<'_>, preset_path: PathBuf) -> Self {
        let tree = Arc::new(ParamTree::from_infos(PARAMS).expect("demo parameter ids are unique"));

        let mut cache = StripTextureCache::new();
        cache.register(STRIP_ID, FRAME_SIZE, FRAME_COUNT);
        let image = cache
            .strip(STRIP_ID, 1.0, false)
            .expect("strip registered above");

        let mut slots = Vec::new();
        for info in PARAMS {
            let mut knob = FilmstripKnob::new(STRIP_ID, image, FRAME_SIZE, FRAME_SIZE)
                .with_reset_message(info.id)
                .with_style(
                    KnobStyle::new().with_formatter(|v| format!("{:.0}%", v * 100.0)),
                );
            // The drive knob doubles as the remap showcase: shift-drag snaps
            // to quarter steps
            if info.id == "drive" {
                knob = knob.with_shift_drag_remap(|v| (v * 4.0).round() / 4.0);
            }
            let binding = ParamBinding::bind(&tree, info.id, &mut knob)
                .expect("knob ids come from the same table as the tree");
            slots.push(KnobSlot {
                label: info.name,
                knob,
                binding,
            });
        }

        Self {
            tree,
            slots,
            cache,
            preset_path,
            status: String::new(),
        }
    }

    /// Push every parameter's current value back into its knob.
    ///
    /// Called after anything that changes parameters behind the knobs' backs:
    /// preset load, reset-all, a reset request.
    fn synchronize_all(&mut self) {
        for slot in &mut self.slots {
            slot.binding.synchronize_from_parameter(&mut slot.knob);
        }
    }

    fn save_preset(&mut self) {
        match save_preset(&self.tree, &self.preset_path) {
            Ok(()) => {
                info!(path = %self.preset_path.display(), "preset saved");
                self.status = format!("Saved {}", self.preset_path.display());
            }
            Err(err) => {
                warn!(%err, "preset save failed");
                self.status = format!("Save failed: {err}");
            }
        }
    }

    fn load_preset(&mut self) {
        match load_preset(&self.tree, &self.preset_path) {
            Ok(applied) => {
                info!(path = %self.preset_path.display(), applied, "preset loaded");
                self.status = format!("Loaded {} values", applied);
                self.synchronize_all();
            }
            Err(err) => {
                warn!(%err, "preset load failed");
                self.status = format!("Load failed: {err}");
            }
        }
    }

    /// Stand-in for the host glue: drain gesture flags so automation
    /// recording would see begin/end pairs.
    fn drain_gestures(&self) {
        for param in self.tree.iter() {
            let flags = param.take_gesture_flags();
            if flags != 0 {
                trace!(id = param.id(), flags, "gesture flags drained");
            }
        }
    }
}

impl eframe::App for PerillaApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        TopBottomPanel::top("toolbar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui.button("Save preset").clicked() {
                    self.save_preset();
                }
                if ui.button("Load preset").clicked() {
                    self.load_preset();
                }
                if ui.button("Reset all").clicked() {
                    self.tree.reset_all();
                    self.synchronize_all();
                    self.status = "All parameters reset".to_string();
                }
                ui.label(&self.status);
            });
        });

        CentralPanel::default().show(ctx, |ui| {
            let mut resets: Vec<String> = Vec::new();

            ui.horizontal(|ui| {
                for slot in &mut self.slots {
                    ui.vertical(|ui| {
                        let out = filmstrip_knob(ui, &mut slot.knob, &mut self.cache);
                        ui.label(slot.label);
                        resets.extend(out.reset_requests().map(str::to_owned));
                    });
                }
            });

            // Reset requests close the loop through the parameter: restore
            // the default, then pull it back into the knob silently
            for id in resets {
                match self.tree.lookup(&id) {
                    Ok(param) => {
                        info!(id = param.id(), "reset to default");
                        param.reset_to_default();
                        self.synchronize_all();
                    }
                    Err(err) => warn!(%err, "reset request for unknown parameter"),
                }
            }
        });

        self.drain_gestures();
    }
}

/// Write the tree's current values to `path` as a JSON snapshot.
fn save_preset(tree: &ParamTree, path: &std::path::Path) -> Result<(), std::io::Error> {
    let snapshot = TreeSnapshot::capture(tree);
    let json = serde_json::to_string_pretty(&snapshot)?;
    std::fs::write(path, json)
}

/// Load a JSON snapshot from `path` and apply it to the tree.
///
/// Returns the number of values applied (unknown ids in the file are
/// skipped, so presets from other versions still load).
fn load_preset(tree: &ParamTree, path: &std::path::Path) -> Result<usize, std::io::Error> {
    let json = std::fs::read_to_string(path)?;
    let snapshot: TreeSnapshot = serde_json::from_str(&json)?;
    Ok(snapshot.apply(tree))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_params_build_a_valid_tree() {
        let tree = ParamTree::from_infos(PARAMS).unwrap();
        assert_eq!(tree.len(), 4);
        assert_eq!(tree.lookup("flt_cutoff").unwrap().value(), 0.65);
    }

    #[test]
    fn preset_round_trip() {
        let tree = ParamTree::from_infos(PARAMS).unwrap();
        tree.lookup("drive").unwrap().set_value(0.75);
        tree.lookup("osc_mix").unwrap().set_value(0.33);

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preset.json");
        save_preset(&tree, &path).unwrap();

        // Wreck the live values, then recall
        tree.reset_all();
        assert_eq!(tree.lookup("drive").unwrap().value(), 0.25);

        let applied = load_preset(&tree, &path).unwrap();
        assert_eq!(applied, 4);
        assert_eq!(tree.lookup("drive").unwrap().value(), 0.75);
        assert_eq!(tree.lookup("osc_mix").unwrap().value(), 0.33);
    }

    #[test]
    fn load_from_missing_file_fails_cleanly() {
        let tree = ParamTree::from_infos(PARAMS).unwrap();
        let dir = tempfile::tempdir().unwrap();
        let err = load_preset(&tree, &dir.path().join("nope.json")).unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::NotFound);
    }
}
