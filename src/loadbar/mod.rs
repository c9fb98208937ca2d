use crate::event::Event;
use crate::event::Event::{LoadProgress, OpenFile};
use crate::loadbar::gui::options_dialog::OptionsDialog;
use crate::loadbar::options::Options;
use crate::loadbar::progress::LoaderSlot;
use crate::loadbar::view::Page;
use log::warn;
use std::sync::mpsc::{Receiver, Sender, channel};

pub(crate) mod demo;
pub(crate) mod file_loader;
pub(crate) mod gui;
pub(crate) mod options;
pub(crate) mod progress;
pub(crate) mod resource;
pub(crate) mod view;

pub(crate) struct Loadbar {
    sender: Sender<Event>,
    receiver: Receiver<Event>,
    page: Page,
    loader: LoaderSlot,
    options: Options,
    options_dialog: OptionsDialog,
    options_open: bool,
}

impl Loadbar {
    pub(crate) fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let options = Options::load();
        gui::apply_theme(&cc.egui_ctx, &options);
        let loadbar = Self::with_page(options, Page::loader_page());
        if loadbar.options.demo_on_startup {
            demo::start(&loadbar.sender);
        }
        loadbar
    }

    /// The loader is created as soon as the page has its elements.
    fn with_page(options: Options, page: Page) -> Self {
        let (sender, receiver) = channel::<Event>();
        let mut loader = LoaderSlot::default();
        loader.get_or_init_from_page(&page, options.hide_timer());
        Self {
            sender,
            receiver,
            page,
            loader,
            options,
            options_dialog: OptionsDialog::new(),
            options_open: false,
        }
    }

    pub(crate) fn process_event(&mut self, event: Event) {
        match event {
            LoadProgress(event) => {
                match self
                    .loader
                    .get_or_init_from_page(&self.page, self.options.hide_timer())
                {
                    Some(loader) => loader.report_progress(event),
                    None => warn!("No loader, progress of {} dropped", event.resource_name),
                }
            }
            OpenFile(path) => file_loader::spawn(path, self.sender.clone()),
        }
    }

    fn apply_options(&mut self) {
        if let Some(loader) = self.loader.get() {
            loader.set_delays(self.options.hide_delay(), self.options.linger_delay());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loadbar::progress::LoadEvent;
    use crate::loadbar::resource::SCENE;
    use crate::loadbar::view::{LOADER_ID, LOADER_PROGRESS_ID, LOADER_STATUS_ID};

    #[test]
    fn test_progress_reaches_page() {
        let mut loadbar = Loadbar::with_page(Options::default(), Page::loader_page());
        loadbar.process_event(LoadProgress(LoadEvent::progress(SCENE, 30, 120)));
        assert!(loadbar.page.snapshot(LOADER_ID).unwrap().visible);
        assert_eq!(
            25,
            loadbar.page.snapshot(LOADER_PROGRESS_ID).unwrap().width_percent
        );
        assert_eq!(
            "Loading... 0 / 1 -  25 %",
            loadbar.page.snapshot(LOADER_STATUS_ID).unwrap().text
        );
    }

    #[test]
    fn test_progress_dropped_until_page_is_ready() {
        let mut loadbar = Loadbar::with_page(Options::default(), Page::default());
        loadbar.process_event(LoadProgress(LoadEvent::progress(SCENE, 1, 2)));
        assert!(!loadbar.loader.is_initialized());

        loadbar.page = Page::loader_page();
        loadbar.process_event(LoadProgress(LoadEvent::progress(SCENE, 1, 2)));
        let loader = loadbar.loader.get().unwrap();
        assert_eq!(1, loader.aggregate().expected_count);
    }

    #[test]
    fn test_apply_options() {
        let mut loadbar = Loadbar::with_page(Options::default(), Page::loader_page());
        loadbar.options.hide_delay_ms = 0;
        loadbar.options.linger_delay_ms = 0;
        loadbar.apply_options();
        let now = std::time::Instant::now();
        let loader = loadbar.loader.get().unwrap();
        loader.report_progress_at(LoadEvent::progress(SCENE, 1, 2), now);
        loader.report_progress_at(LoadEvent::complete(SCENE), now);
        assert!(loadbar.page.snapshot(LOADER_ID).unwrap().visible);
        let loader = loadbar.loader.get().unwrap();
        loader.tick(now);
        assert!(!loadbar.page.snapshot(LOADER_ID).unwrap().visible);
    }
}
