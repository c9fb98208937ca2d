use crate::loadbar::progress::progress_manager::ResourceProgress;
use egui::{Label, ProgressBar, ScrollArea, TextWrapMode, Ui, WidgetText};
use egui_extras::{Column, TableBuilder, TableRow};
use humansize::{BINARY, format_size};

const ROW_HEIGHT: f32 = 20.0;

/// Table of every tracked resource.
pub(crate) struct ResourcePanel;

impl ResourcePanel {
    pub(crate) fn ui<'a>(&self, ui: &mut Ui, resources: impl Iterator<Item = &'a ResourceProgress>) {
        ScrollArea::both().show(ui, |ui| {
            TableBuilder::new(ui)
                .striped(true)
                .column(Column::auto().resizable(true))
                .column(Column::auto())
                .column(Column::auto())
                .column(Column::remainder())
                .header(ROW_HEIGHT, |mut header| {
                    for title in ["Resource", "Loaded", "Expected", "Progress"] {
                        header.col(|ui| {
                            ui.strong(title);
                        });
                    }
                })
                .body(|mut body| {
                    for resource in resources {
                        body.row(ROW_HEIGHT, |mut row| {
                            Self::add_column(&mut row, resource.resource_name.as_str());
                            Self::add_column(&mut row, format_size(resource.loaded_size, BINARY));
                            Self::add_column(&mut row, format_size(resource.target_size, BINARY));
                            row.col(|ui| {
                                ui.add(
                                    ProgressBar::new(resource.percent())
                                        .text(progress_text(resource)),
                                );
                            });
                        });
                    }
                });
        });
    }

    fn add_column(row: &mut TableRow, text: impl Into<WidgetText>) {
        let label = Label::new(text)
            .wrap_mode(TextWrapMode::Extend)
            .selectable(false);
        row.col(|ui| {
            ui.add(label);
        });
    }
}

fn progress_text(resource: &ResourceProgress) -> String {
    if resource.is_complete {
        "done".to_owned()
    } else {
        format!("{:.0} %", resource.percent() * 100.0)
    }
}
