use crate::loadbar::gui::theme::Theme;

impl Theme {
    pub(crate) const fn solarized_dark() -> Theme {
        Theme {
            dark: true,
            background: egui_solarized::BASE03,
            background_faint: egui_solarized::BASE02,
            text: egui_solarized::BASE0,
            progress: egui_solarized::BLUE,
            complete: egui_solarized::GREEN,
        }
    }

    pub(crate) const fn solarized_light() -> Theme {
        Theme {
            dark: false,
            background: egui_solarized::BASE3,
            background_faint: egui_solarized::BASE2,
            ..Self::solarized_dark()
        }
    }
}
