// src/gui/components/mod.rs
pub mod data_table;
pub mod detail;
pub mod filter_panel;
pub mod top_bar;
