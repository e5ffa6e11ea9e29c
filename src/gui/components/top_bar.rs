// src/gui/components/top_bar.rs
//
// Title, data source, row counts, Reload.

use eframe::egui;
use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal(|ui| {
        ui.heading("AI Benchmarks");
        ui.separator();

        if ui.button("⟳ Reload").on_hover_text("Reload the CSV and clear filters").clicked() {
            app.reload();
        }

        match &app.data {
            Some(ds) => {
                ui.label(format!("Showing {} of {}", app.visible.len(), ds.row_count()));
                ui.separator();
                ui.weak(ds.path.display().to_string());
            }
            None => {
                let tried: Vec<String> = app.candidates.iter().map(|p| p.display().to_string()).collect();
                ui.weak(format!("Looked in: {}", tried.join(", ")));
            }
        }
    });
}
