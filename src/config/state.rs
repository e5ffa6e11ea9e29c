// src/config/state.rs
use std::collections::HashSet;

use crate::filter::{Category, FilterState};

#[derive(Clone, Debug)]
pub struct GuiState {
    pub window_w: u32,
    pub window_h: u32,

    /// Record index (into the loaded list) shown in the detail window
    pub detail_row: Option<usize>,

    /// Filter panel: show at most this many values per category before "more"
    pub category_preview: usize,

    /// Categories showing every value
    pub expanded: HashSet<Category>,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            window_w: 1200,
            window_h: 760,
            detail_row: None,
            category_preview: 40,
            expanded: HashSet::new(),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub filters: FilterState,
    pub gui: GuiState,
}

impl AppState {
    /// Reload resets everything except window geometry.
    pub fn reset_for_reload(&mut self) {
        self.filters = FilterState::default();
        self.gui.detail_row = None;
    }
}
