// src/filter.rs
//! Filter engine for the viewer.
//!
//! Pure functions over `&[Record]`: no caching, no interior state, safe to
//! call on every keystroke. Note the case asymmetry:
//! - distinct values are case-sensitive (`"Text"` and `"text"` are both listed),
//! - the free-text query matches case-insensitively.

use std::collections::{BTreeSet, HashSet};

use crate::record::{Field, Record, split_list};

/// The four multi-select filter categories.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    Task,
    Modality,
    Area,
    Year,
}

pub const CATEGORIES: [Category; 4] = [Category::Task, Category::Modality, Category::Area, Category::Year];

impl Category {
    pub fn field(self) -> Field {
        match self {
            Category::Task => Field::Task,
            Category::Modality => Field::Modalities,
            Category::Area => Field::Area,
            Category::Year => Field::YearPublished,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Category::Task => "Task",
            Category::Modality => "Modality",
            Category::Area => "Area",
            Category::Year => "Year",
        }
    }
}

/// Fields the free-text query looks at.
const QUERY_FIELDS: [Field; 5] = [
    Field::DatasetId,
    Field::Task,
    Field::Subtask,
    Field::Description,
    Field::Area,
];

/// Active query + selections. Empty set = no constraint for that category.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterState {
    pub query: String,
    pub tasks: BTreeSet<String>,
    pub modalities: BTreeSet<String>,
    pub areas: BTreeSet<String>,
    pub years: BTreeSet<String>,
}

impl FilterState {
    pub fn selected(&self, c: Category) -> &BTreeSet<String> {
        match c {
            Category::Task => &self.tasks,
            Category::Modality => &self.modalities,
            Category::Area => &self.areas,
            Category::Year => &self.years,
        }
    }

    pub fn selected_mut(&mut self, c: Category) -> &mut BTreeSet<String> {
        match c {
            Category::Task => &mut self.tasks,
            Category::Modality => &mut self.modalities,
            Category::Area => &mut self.areas,
            Category::Year => &mut self.years,
        }
    }

    /// Flip one value in a category. Returns the new membership.
    pub fn toggle(&mut self, c: Category, value: &str) -> bool {
        let set = self.selected_mut(c);
        if set.remove(value) {
            false
        } else {
            set.insert(s!(value));
            true
        }
    }

    pub fn is_empty(&self) -> bool {
        self.query.trim().is_empty() && CATEGORIES.iter().all(|&c| self.selected(c).is_empty())
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Distinct comma-split values of a category's field, trimmed, sorted.
pub fn unique_values(records: &[Record], category: Category) -> Vec<String> {
    unique_values_of(records, category.field())
}

/// Same as `unique_values` for any field.
pub fn unique_values_of(records: &[Record], field: Field) -> Vec<String> {
    let mut set: BTreeSet<&str> = BTreeSet::new();
    for r in records {
        set.extend(split_list(r.get(field)));
    }
    set.into_iter().map(String::from).collect()
}

/// Records passing query + filters, input order preserved.
pub fn apply(records: &[Record], query: &str, filters: &FilterState) -> Vec<Record> {
    matching_indices(records, query, filters)
        .into_iter()
        .map(|i| records[i].clone())
        .collect()
}

/// Positions of passing records (ascending). Zero-copy path for the table.
pub fn matching_indices(records: &[Record], query: &str, filters: &FilterState) -> Vec<usize> {
    let needle = query.trim().to_lowercase();

    // Only categories with at least one selection constrain anything.
    let active: Vec<(Field, HashSet<&str>)> = CATEGORIES
        .iter()
        .filter_map(|&c| {
            let sel = filters.selected(c);
            (!sel.is_empty()).then(|| (c.field(), sel.iter().map(String::as_str).collect()))
        })
        .collect();

    records
        .iter()
        .enumerate()
        .filter(|(_, r)| matches_query(r, &needle))
        .filter(|(_, r)| {
            active
                .iter()
                .all(|(field, sel)| split_list(r.get(*field)).any(|v| sel.contains(v)))
        })
        .map(|(i, _)| i)
        .collect()
}

/// `needle` must already be lowercased and trimmed: surrounding whitespace
/// in the search box is ignored, so a blank query matches everything.
fn matches_query(r: &Record, needle: &str) -> bool {
    needle.is_empty()
        || QUERY_FIELDS
            .iter()
            .any(|&f| r.get(f).to_lowercase().contains(needle))
}
