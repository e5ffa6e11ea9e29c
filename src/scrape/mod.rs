// src/scrape/mod.rs
mod collect;
mod hf;
mod pwc;

pub use collect::{CollectSummary, collect};
