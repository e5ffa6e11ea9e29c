// src/gui/components/filter_panel.rs
//
// Left panel: search box, one multi-select list per category, Clear.
// Every change goes through `app.refilter()`.

use eframe::egui;
use crate::filter::Category;
use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.heading("Filters");
    ui.add_space(4.0);

    let mut changed = false;

    let search = egui::TextEdit::singleline(&mut app.state.filters.query)
        .hint_text("Search name, task, area, description…")
        .desired_width(f32::INFINITY);
    changed |= ui.add(search).changed();

    ui.horizontal(|ui| {
        let enabled = !app.state.filters.is_empty();
        if ui.add_enabled(enabled, egui::Button::new("Clear filters")).clicked() {
            app.state.filters.clear();
            changed = true;
        }
    });

    ui.separator();

    // Match the scroll bar aesthetics used in the main table
    {
        let s = &mut ui.style_mut().spacing.scroll;
        s.floating = false;
        s.bar_width = 10.0;
        s.handle_min_length = 48.0;
    }

    egui::ScrollArea::vertical()
        .id_salt("filters_scroll")
        .show(ui, |ui| {
            let w = ui.available_width();
            ui.set_min_width(w);

            for ci in 0..app.categories.len() {
                changed |= category_list(ui, app, ci);
            }
        });

    if changed {
        app.refilter();
    }
}

/// One collapsible checkbox list. Returns whether a selection flipped.
fn category_list(ui: &mut egui::Ui, app: &mut App, ci: usize) -> bool {
    let (category, values) = &app.categories[ci];
    let category: Category = *category;
    let n_selected = app.state.filters.selected(category).len();

    let title = if n_selected > 0 {
        format!("{} ({} selected)", category.title(), n_selected)
    } else {
        format!("{} ({})", category.title(), values.len())
    };

    let preview = app.state.gui.category_preview;
    let expanded = app.state.gui.expanded.contains(&category);
    let shown = if expanded { values.len() } else { values.len().min(preview) };

    let mut toggled: Option<String> = None;
    let mut flip_expand = false;

    egui::CollapsingHeader::new(title)
        .id_salt(category.title())
        .default_open(matches!(category, Category::Modality | Category::Area))
        .show(ui, |ui| {
            if values.is_empty() {
                ui.weak("(none)");
            }
            for v in &values[..shown] {
                let mut on = app.state.filters.selected(category).contains(v);
                if ui.checkbox(&mut on, v.as_str()).changed() {
                    toggled = Some(v.clone());
                }
            }
            if values.len() > preview {
                let label = if expanded {
                    s!("Show fewer")
                } else {
                    format!("Show all ({} more)", values.len() - shown)
                };
                if ui.small_button(label).clicked() {
                    flip_expand = true;
                }
            }
        });

    if flip_expand && !app.state.gui.expanded.remove(&category) {
        app.state.gui.expanded.insert(category);
    }

    match toggled {
        Some(v) => {
            app.state.filters.toggle(category, &v);
            true
        }
        None => false,
    }
}
