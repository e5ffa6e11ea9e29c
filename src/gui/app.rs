// src/gui/app.rs
use std::{error::Error, path::PathBuf};

use eframe::egui;

use crate::{
    config::{consts::VIEWER_CANDIDATES, state::AppState},
    filter::{self, CATEGORIES, Category},
    record::Record,
    store::{self, DataSet},
};

use super::components::{data_table, detail, filter_panel, top_bar};

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    let candidates = VIEWER_CANDIDATES.iter().map(PathBuf::from).collect();
    eframe::run_native(
        "AI Benchmark Explorer",
        options,
        Box::new(|_cc| Ok(Box::new(App::new(AppState::default(), candidates)))),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    /// Tried in order on every (re)load
    pub candidates: Vec<PathBuf>,

    pub data: Option<DataSet>,
    pub load_error: Option<String>,

    /// Distinct values per category, rebuilt on load
    pub categories: Vec<(Category, Vec<String>)>,

    /// Indices into `data.records` passing the current filters
    pub visible: Vec<usize>,
}

impl App {
    pub fn new(state: AppState, candidates: Vec<PathBuf>) -> Self {
        let mut app = Self {
            state,
            candidates,
            data: None,
            load_error: None,
            categories: Vec::new(),
            visible: Vec::new(),
        };
        app.reload();
        app
    }

    /// Re-run the load path and reset filters.
    pub fn reload(&mut self) {
        self.state.reset_for_reload();

        match store::load_first(self.candidates.as_slice()) {
            Ok(ds) => {
                logf!("Viewer: {} record(s) from {}", ds.row_count(), ds.path.display());
                self.categories = CATEGORIES
                    .iter()
                    .map(|&c| (c, filter::unique_values(&ds.records, c)))
                    .collect();
                self.data = Some(ds);
                self.load_error = None;
            }
            Err(e) => {
                loge!("Viewer: {}", e);
                self.data = None;
                self.categories.clear();
                self.load_error = Some(e.to_string());
            }
        }
        self.refilter();
    }

    /// Recompute `visible` after any filter change.
    pub fn refilter(&mut self) {
        self.visible = match &self.data {
            Some(ds) => filter::matching_indices(&ds.records, &self.state.filters.query, &self.state.filters),
            None => Vec::new(),
        };
        if let Some(ix) = self.state.gui.detail_row {
            if !self.visible.contains(&ix) {
                self.state.gui.detail_row = None;
            }
        }
    }

    pub fn records(&self) -> &[Record] {
        self.data.as_ref().map(|d| d.records.as_slice()).unwrap_or(&[])
    }

    pub fn total(&self) -> usize {
        self.records().len()
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            top_bar::draw(ui, self);
        });

        if self.data.is_some() {
            egui::SidePanel::left("filters")
                .resizable(true)
                .default_width(260.0)
                .show(ctx, |ui| {
                    filter_panel::draw(ui, self);
                });
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            if let Some(err) = &self.load_error {
                ui.add_space(24.0);
                ui.heading("No benchmark data loaded");
                ui.add_space(8.0);
                ui.label(egui::RichText::new(err).color(ui.visuals().error_fg_color));
                ui.add_space(8.0);
                ui.label("Run the scraper (cli) first, or place a benchmarks.csv in one of the paths above, then Reload.");
                return;
            }
            data_table::draw(ui, self);
        });

        detail::draw(ctx, self);
    }
}
