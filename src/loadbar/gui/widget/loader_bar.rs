use egui::{Color32, CornerRadius, Response, Sense, Ui, Widget, vec2};

const BAR_HEIGHT: f32 = 8.0;

/// Horizontal bar filled up to `width_percent` of the available width.
pub(crate) struct LoaderBar {
    width_percent: u64,
    fill: Option<Color32>,
}

impl LoaderBar {
    pub(crate) fn new(width_percent: u64) -> Self {
        Self {
            width_percent,
            fill: None,
        }
    }

    pub(crate) fn fill(self, fill: Color32) -> Self {
        Self {
            fill: Some(fill),
            ..self
        }
    }
}

/// Fraction of the bar to paint, a bar never overflows its rectangle.
pub(crate) fn fill_fraction(width_percent: u64) -> f32 {
    width_percent.min(100) as f32 / 100.0
}

impl Widget for LoaderBar {
    fn ui(self, ui: &mut Ui) -> Response {
        let desired_size = vec2(ui.available_width(), BAR_HEIGHT);
        let (rect, response) = ui.allocate_exact_size(desired_size, Sense::hover());

        if ui.is_rect_visible(rect) {
            let corner_radius = CornerRadius::same((BAR_HEIGHT / 2.0) as u8);
            let painter = ui.painter();
            painter.rect_filled(rect, corner_radius, ui.visuals().extreme_bg_color);

            let mut progress_rect = rect;
            progress_rect.max.x = rect.min.x + rect.width() * fill_fraction(self.width_percent);
            let fill = self.fill.unwrap_or(ui.visuals().selection.bg_fill);
            painter.rect_filled(progress_rect, corner_radius, fill);
        }

        response
    }
}
