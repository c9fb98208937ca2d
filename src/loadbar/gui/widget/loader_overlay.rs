use crate::loadbar::gui::theme::Theme;
use crate::loadbar::gui::widget::loader_bar::LoaderBar;
use crate::loadbar::view::{LOADER_ID, LOADER_PROGRESS_ID, LOADER_STATUS_ID, Page};
use egui::{Context, RichText};

/// Paints the loader elements of the page at the bottom of the window.
pub(crate) struct LoaderOverlay<'a> {
    page: &'a Page,
    theme: &'a Theme,
}

impl<'a> LoaderOverlay<'a> {
    pub(crate) fn new(page: &'a Page, theme: &'a Theme) -> Self {
        Self { page, theme }
    }

    pub(crate) fn show(&self, ctx: &Context) {
        let Some(container) = self.page.snapshot(LOADER_ID) else {
            return;
        };
        if !container.visible {
            return;
        }
        let width_percent = self
            .page
            .snapshot(LOADER_PROGRESS_ID)
            .map(|bar| bar.width_percent)
            .unwrap_or_default();
        let status = self
            .page
            .snapshot(LOADER_STATUS_ID)
            .map(|status| status.text)
            .unwrap_or_default();
        let fill = if width_percent >= 100 {
            self.theme.complete
        } else {
            self.theme.progress
        };

        egui::TopBottomPanel::bottom(LOADER_ID).show(ctx, |ui| {
            ui.vertical(|ui| {
                ui.label(RichText::new(status).monospace());
                ui.add(LoaderBar::new(width_percent).fill(fill));
            });
        });
    }
}
