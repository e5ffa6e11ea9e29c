// src/record.rs
//
// The one row shape shared by every source, the exporter, the loader and the
// viewer. Closed and uniform: every field is a plain String, "" when absent.
// List-valued fields are stored comma-joined; `split_list` is the only place
// that turns them back into parts.

/// One normalized benchmark / dataset entry.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Record {
    pub dataset_id: String,
    pub task: String,
    pub subtask: String,
    pub associated_tasks: String,
    pub modalities: String,
    pub languages: String,
    pub area: String,
    pub benchmark_urls: String,
    pub homepage_url: String,
    pub pwc_url: String,
    pub paper_url: String,
    pub license: String,
    pub description: String,
    pub year_published: String,
    pub paper_title: String,
    pub dataset_size: String,
    pub dataset_splits: String,
    pub num_classes: String,
    /// Assigned by the exporter; 0 until then.
    pub sno: usize,
}

/// Column identity. Declaration order is the file's column order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    DatasetId,
    Task,
    Subtask,
    AssociatedTasks,
    Modalities,
    Languages,
    Area,
    BenchmarkUrls,
    HomepageUrl,
    PwcUrl,
    PaperUrl,
    License,
    Description,
    YearPublished,
    PaperTitle,
    DatasetSize,
    DatasetSplits,
    NumClasses,
    Sno,
}

pub const COLUMNS: [Field; 19] = [
    Field::DatasetId,
    Field::Task,
    Field::Subtask,
    Field::AssociatedTasks,
    Field::Modalities,
    Field::Languages,
    Field::Area,
    Field::BenchmarkUrls,
    Field::HomepageUrl,
    Field::PwcUrl,
    Field::PaperUrl,
    Field::License,
    Field::Description,
    Field::YearPublished,
    Field::PaperTitle,
    Field::DatasetSize,
    Field::DatasetSplits,
    Field::NumClasses,
    Field::Sno,
];

impl Field {
    pub fn name(self) -> &'static str {
        match self {
            Field::DatasetId => "dataset_id",
            Field::Task => "task",
            Field::Subtask => "subtask",
            Field::AssociatedTasks => "associated_tasks",
            Field::Modalities => "modalities",
            Field::Languages => "languages",
            Field::Area => "area",
            Field::BenchmarkUrls => "benchmark_urls",
            Field::HomepageUrl => "homepage_url",
            Field::PwcUrl => "pwc_url",
            Field::PaperUrl => "paper_url",
            Field::License => "license",
            Field::Description => "description",
            Field::YearPublished => "year_published",
            Field::PaperTitle => "paper_title",
            Field::DatasetSize => "dataset_size",
            Field::DatasetSplits => "dataset_splits",
            Field::NumClasses => "num_classes",
            Field::Sno => "sno",
        }
    }

    pub fn from_name(name: &str) -> Option<Field> {
        let name = name.trim();
        COLUMNS.iter().copied().find(|f| f.name() == name)
    }

    /// Human label for the detail view.
    pub fn label(self) -> &'static str {
        match self {
            Field::DatasetId => "Name",
            Field::Task => "Task",
            Field::Subtask => "Subtask",
            Field::AssociatedTasks => "Associated tasks",
            Field::Modalities => "Modalities",
            Field::Languages => "Languages",
            Field::Area => "Area",
            Field::BenchmarkUrls => "Benchmarks",
            Field::HomepageUrl => "Homepage",
            Field::PwcUrl => "Papers with Code",
            Field::PaperUrl => "Paper",
            Field::License => "License",
            Field::Description => "Description",
            Field::YearPublished => "Year",
            Field::PaperTitle => "Paper title",
            Field::DatasetSize => "Size",
            Field::DatasetSplits => "Splits",
            Field::NumClasses => "Classes",
            Field::Sno => "#",
        }
    }

    pub fn is_link(self) -> bool {
        matches!(
            self,
            Field::BenchmarkUrls | Field::HomepageUrl | Field::PwcUrl | Field::PaperUrl
        )
    }
}

pub fn header_row() -> Vec<String> {
    COLUMNS.iter().map(|f| s!(f.name())).collect()
}

impl Record {
    pub fn new(dataset_id: impl Into<String>) -> Self {
        Self { dataset_id: dataset_id.into(), ..Self::default() }
    }

    /// Borrow a text field. `Sno` has no text form here; use `to_row`.
    pub fn get(&self, f: Field) -> &str {
        match f {
            Field::DatasetId => &self.dataset_id,
            Field::Task => &self.task,
            Field::Subtask => &self.subtask,
            Field::AssociatedTasks => &self.associated_tasks,
            Field::Modalities => &self.modalities,
            Field::Languages => &self.languages,
            Field::Area => &self.area,
            Field::BenchmarkUrls => &self.benchmark_urls,
            Field::HomepageUrl => &self.homepage_url,
            Field::PwcUrl => &self.pwc_url,
            Field::PaperUrl => &self.paper_url,
            Field::License => &self.license,
            Field::Description => &self.description,
            Field::YearPublished => &self.year_published,
            Field::PaperTitle => &self.paper_title,
            Field::DatasetSize => &self.dataset_size,
            Field::DatasetSplits => &self.dataset_splits,
            Field::NumClasses => &self.num_classes,
            Field::Sno => "",
        }
    }

    pub fn set(&mut self, f: Field, value: String) {
        match f {
            Field::DatasetId => self.dataset_id = value,
            Field::Task => self.task = value,
            Field::Subtask => self.subtask = value,
            Field::AssociatedTasks => self.associated_tasks = value,
            Field::Modalities => self.modalities = value,
            Field::Languages => self.languages = value,
            Field::Area => self.area = value,
            Field::BenchmarkUrls => self.benchmark_urls = value,
            Field::HomepageUrl => self.homepage_url = value,
            Field::PwcUrl => self.pwc_url = value,
            Field::PaperUrl => self.paper_url = value,
            Field::License => self.license = value,
            Field::Description => self.description = value,
            Field::YearPublished => self.year_published = value,
            Field::PaperTitle => self.paper_title = value,
            Field::DatasetSize => self.dataset_size = value,
            Field::DatasetSplits => self.dataset_splits = value,
            Field::NumClasses => self.num_classes = value,
            Field::Sno => self.sno = value.trim().parse().unwrap_or(0),
        }
    }

    /// One output row in `COLUMNS` order.
    pub fn to_row(&self) -> Vec<String> {
        COLUMNS
            .iter()
            .map(|&f| match f {
                Field::Sno => self.sno.to_string(),
                _ => s!(self.get(f)),
            })
            .collect()
    }
}

/// Split a stored list field: on ',', trimmed, empties dropped.
pub fn split_list(value: &str) -> impl Iterator<Item = &str> {
    value.split(',').map(str::trim).filter(|s| !s.is_empty())
}
