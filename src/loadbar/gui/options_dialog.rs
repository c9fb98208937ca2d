use crate::loadbar::options::Options;
use egui::{Context, DragValue, Response, Ui};
use log::warn;
use std::path::PathBuf;

const MAX_DELAY_MS: u64 = 10_000;

/// Edits the options, applied live and written to disk once an edit is done.
#[derive(Debug)]
pub(crate) struct OptionsDialog {
    path: PathBuf,
    dirty: bool,
}

impl OptionsDialog {
    pub(crate) fn new() -> Self {
        Self::with_path(Options::config_path())
    }

    pub(crate) fn with_path(path: PathBuf) -> Self {
        Self { path, dirty: false }
    }

    /// Returns true when an option changed.
    pub(crate) fn ui(&mut self, ctx: &Context, options: &mut Options, open: &mut bool) -> bool {
        let was_open = *open;
        let mut changed = false;
        egui::Window::new("Options")
            .open(open)
            .resizable(true)
            .show(ctx, |ui| {
                changed = self.content_ui(ui, options);
            });
        if was_open && !*open {
            self.flush(options);
        }
        changed
    }

    fn content_ui(&mut self, ui: &mut Ui, options: &mut Options) -> bool {
        let mut changed = false;
        let mut finished = false;
        ui.vertical(|ui| {
            ui.heading("Loader");
            ui.horizontal(|ui| {
                ui.label("Hide delay");
                let response = ui.add(
                    DragValue::new(&mut options.hide_delay_ms)
                        .range(0..=MAX_DELAY_MS)
                        .suffix(" ms"),
                );
                changed |= response.changed();
                finished |= edit_finished(&response);
            });
            ui.horizontal(|ui| {
                ui.label("Linger delay");
                let response = ui.add(
                    DragValue::new(&mut options.linger_delay_ms)
                        .range(0..=MAX_DELAY_MS)
                        .suffix(" ms"),
                );
                changed |= response.changed();
                finished |= edit_finished(&response);
            });
            let toggled = ui
                .checkbox(&mut options.demo_on_startup, "Start demo on startup")
                .changed()
                | ui.checkbox(&mut options.dark_mode, "Dark mode").changed();
            changed |= toggled;
            finished |= toggled;
        });
        self.dirty |= changed;
        if finished {
            self.flush(options);
        }
        changed
    }

    /// Writes the options if they changed since the last write.
    pub(crate) fn flush(&mut self, options: &Options) {
        if !self.dirty {
            return;
        }
        match options.save_to(&self.path) {
            Ok(()) => self.dirty = false,
            Err(e) => warn!("Unable to save {:?}: {e}", self.path),
        }
    }
}

// a drag value reports a change on every frame of a drag
fn edit_finished(response: &Response) -> bool {
    response.drag_stopped() || response.lost_focus()
}
