// src/gui/components/data_table.rs
//
// Draws the filtered table. Purely a view over `app.visible`; a row click
// opens the detail window.

use eframe::egui::{self, RichText, Sense};
use egui_extras::{Column, TableBuilder};

use crate::gui::app::App;
use crate::record::{Record, split_list};

const ROW_H: f32 = 22.0;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    if app.visible.is_empty() {
        ui.add_space(16.0);
        if app.total() == 0 {
            ui.label("The data file has no records.");
        } else {
            ui.label("No benchmarks match the current search and filters.");
        }
        return;
    }

    // Ensure scroll bars allocate space (not floating over content)
    {
        let s = &mut ui.style_mut().spacing.scroll;
        s.floating = false;
        s.bar_width = 10.0;
        s.handle_min_length = 48.0;
    }

    let records = app.records();
    let visible = &app.visible;
    let selected = app.state.gui.detail_row;
    let mut clicked: Option<usize> = None;

    TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .sense(Sense::click())
        .column(Column::initial(240.0).at_least(80.0).clip(true)) // Name
        .column(Column::initial(200.0).at_least(60.0).clip(true)) // Task
        .column(Column::initial(220.0).at_least(60.0).clip(true)) // Modalities
        .column(Column::initial(160.0).at_least(60.0).clip(true)) // Area
        .column(Column::remainder().at_least(50.0))               // Year
        .header(24.0, |mut header| {
            for title in ["Name", "Task", "Modalities", "Area", "Year"] {
                header.col(|ui| {
                    ui.strong(title);
                });
            }
        })
        .body(|body| {
            body.rows(ROW_H, visible.len(), |mut row| {
                let ix = visible[row.index()];
                let rec = &records[ix];
                row.set_selected(selected == Some(ix));

                row.col(|ui| {
                    ui.label(RichText::new(&rec.dataset_id).strong());
                });
                row.col(|ui| {
                    ui.label(&rec.task);
                });
                row.col(|ui| {
                    tags(ui, rec);
                });
                row.col(|ui| {
                    ui.label(&rec.area);
                });
                row.col(|ui| {
                    ui.label(&rec.year_published);
                });

                if row.response().clicked() {
                    clicked = Some(ix);
                }
            });
        });

    if clicked.is_some() {
        app.state.gui.detail_row = clicked;
    }
}

/// Modalities as small framed chips.
fn tags(ui: &mut egui::Ui, rec: &Record) {
    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = 4.0;
        let fill = ui.visuals().faint_bg_color;
        let stroke = ui.visuals().widgets.noninteractive.bg_stroke;
        for m in split_list(&rec.modalities) {
            egui::Frame::new()
                .fill(fill)
                .stroke(stroke)
                .corner_radius(6.0)
                .inner_margin(egui::Margin::symmetric(5, 0))
                .show(ui, |ui| {
                    ui.label(RichText::new(m).small());
                });
        }
    });
}
