use std::thread;
use std::time::{Duration, Instant};

use eframe::Frame;
use egui::{Context, Visuals};
use log::info;

use crate::event::Event::OpenFile;
use crate::loadbar::Loadbar;
use crate::loadbar::demo;
use crate::loadbar::gui::resource_panel::ResourcePanel;
use crate::loadbar::gui::theme::Theme;
use crate::loadbar::gui::widget::loader_overlay::LoaderOverlay;
use crate::loadbar::options::Options;
use crate::loadbar::progress::aggregator::LoaderState;

pub(crate) mod options_dialog;
pub(crate) mod resource_panel;
pub(crate) mod theme;
pub(crate) mod widget;

const FRAME_DELAY: Duration = Duration::from_millis(1000 / 60);

fn state_label(state: LoaderState, hide_pending: bool) -> &'static str {
    match state {
        LoaderState::Idle => "Idle",
        LoaderState::Loading => "Loading",
        LoaderState::Complete if hide_pending => "Complete, hiding loader",
        LoaderState::Complete => "Complete",
    }
}

pub(crate) fn apply_theme(ctx: &Context, options: &Options) {
    let theme = Theme::from_dark_mode(options.dark_mode);
    ctx.set_visuals(Visuals::from(&theme));
}

impl eframe::App for Loadbar {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        while let Ok(event) = self.receiver.try_recv() {
            self.process_event(event)
        }
        if let Some(loader) = self.loader.get() {
            loader.tick(Instant::now());
        }

        self.build_menu_panel(ctx);
        let theme = Theme::from_dark_mode(self.options.dark_mode);
        LoaderOverlay::new(&self.page, &theme).show(ctx);
        egui::CentralPanel::default().show(ctx, |ui| {
            if let Some(loader) = self.loader.get() {
                if loader.is_empty() {
                    ui.label("No resource loaded yet, use File > Open... or File > Restart demo");
                } else {
                    ui.heading(loader.aggregate().status_text());
                    ui.label(state_label(loader.state(), loader.is_hide_pending()));
                    ui.separator();
                    ResourcePanel.ui(ui, loader.resources());
                }
            }
        });

        let mut options_open = self.options_open;
        if self
            .options_dialog
            .ui(ctx, &mut self.options, &mut options_open)
        {
            apply_theme(ctx, &self.options);
            self.apply_options();
        }
        self.options_open = options_open;

        // producers run on other threads, the channel and the hide timer are
        // polled on every frame
        ctx.request_repaint_after(FRAME_DELAY);
    }
}

impl Loadbar {
    fn build_menu_panel(&mut self, ctx: &Context) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("Open...").clicked() {
                        self.open_file();
                        ui.close_menu();
                    }
                    if ui.button("Restart demo").clicked() {
                        demo::start(&self.sender);
                        ui.close_menu();
                    }
                    if ui.button("Options").clicked() {
                        self.options_open = true;
                        ui.close_menu();
                    }
                    if ui.button("Quit").clicked() {
                        info!("Quit");
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });
            });
        });
    }

    fn open_file(&self) {
        info!("Open file");
        let sender = self.sender.clone();
        thread::spawn(move || {
            if let Some(path) = rfd::FileDialog::new().set_directory("./").pick_file() {
                let _ = sender.send(OpenFile(path));
            }
        });
    }
}
