// src/gui/components/detail.rs
//
// Detail window for `state.gui.detail_row`. Every field is listed; link
// fields appear only when they have a value.

use eframe::egui::{self, RichText};

use crate::gui::app::App;
use crate::record::{COLUMNS, Field, Record, split_list};

pub fn draw(ctx: &egui::Context, app: &mut App) {
    let Some(ix) = app.state.gui.detail_row else { return };
    if ix >= app.total() {
        app.state.gui.detail_row = None;
        return;
    }
    let rec = &app.records()[ix];

    let mut open = true;
    egui::Window::new(RichText::new(&rec.dataset_id).strong())
        .id(egui::Id::new("detail_window"))
        .open(&mut open)
        .default_width(560.0)
        .resizable(true)
        .collapsible(false)
        .show(ctx, |ui| {
            egui::ScrollArea::vertical().max_height(520.0).show(ui, |ui| {
                fields(ui, rec);
                links(ui, rec);
            });
        });

    if !open {
        app.state.gui.detail_row = None;
    }
}

fn fields(ui: &mut egui::Ui, rec: &Record) {
    egui::Grid::new("detail_fields")
        .num_columns(2)
        .striped(true)
        .spacing([12.0, 6.0])
        .show(ui, |ui| {
            for f in COLUMNS.iter().copied().filter(|f| !f.is_link()) {
                let value = match f {
                    Field::Sno => rec.sno.to_string(),
                    _ => s!(rec.get(f)),
                };
                ui.label(RichText::new(f.label()).strong());
                if value.is_empty() {
                    ui.weak("–");
                } else {
                    ui.add(egui::Label::new(value).wrap());
                }
                ui.end_row();
            }
        });
}

fn links(ui: &mut egui::Ui, rec: &Record) {
    let present: Vec<Field> = COLUMNS
        .iter()
        .copied()
        .filter(|f| f.is_link() && !rec.get(*f).trim().is_empty())
        .collect();
    if present.is_empty() {
        return;
    }

    ui.separator();
    ui.strong("Links");
    for f in present {
        let value = rec.get(f);
        match f {
            // One row per benchmark URL
            Field::BenchmarkUrls => {
                for url in split_list(value) {
                    ui.hyperlink_to(format!("{}: {}", f.label(), short(url)), url);
                }
            }
            _ => {
                ui.hyperlink_to(f.label(), value.trim());
            }
        }
    }
}

/// Last path segment for link labels.
fn short(url: &str) -> &str {
    crate::core::html::last_segment(url)
}
