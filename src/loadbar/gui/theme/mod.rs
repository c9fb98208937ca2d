use eframe::epaint::Color32;
use egui::Visuals;

pub(crate) mod solarized;

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Theme {
    pub(crate) dark: bool,
    pub(crate) background: Color32,
    pub(crate) background_faint: Color32,
    pub(crate) text: Color32,
    pub(crate) progress: Color32,
    pub(crate) complete: Color32,
}

impl Default for Theme {
    fn default() -> Self {
        Self::solarized_dark()
    }
}

impl Theme {
    pub(crate) fn from_dark_mode(dark: bool) -> Self {
        if dark {
            Self::solarized_dark()
        } else {
            Self::solarized_light()
        }
    }
}

impl From<&Theme> for Visuals {
    fn from(theme: &Theme) -> Visuals {
        let mut visuals = if theme.dark {
            Visuals::dark()
        } else {
            Visuals::light()
        };
        visuals.panel_fill = theme.background;
        visuals.extreme_bg_color = theme.background_faint;
        visuals.faint_bg_color = theme.background_faint;
        visuals.override_text_color = Some(theme.text);
        visuals.selection.bg_fill = theme.progress;
        visuals
    }
}
