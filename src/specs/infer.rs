// src/specs/infer.rs
//
// Keyword heuristics for fields the pages rarely state outright:
// modalities from task names, and a coarse modality/domain/task-type
// classification from free-text summaries.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;

/// Modality → word-boundary keyword patterns. A task can hit several rows.
const MODALITY_KEYWORDS: &[(&str, &[&str])] = &[
    ("Image", &[
        "image", "visual", "object detection", "segmentation", "recognition",
        "classification", "detection", "localization", "tracking", "face",
        "person", "human", "pose estimation", "keypoint", "instance segmentation",
        "semantic segmentation", "panoptic",
    ]),
    ("Text", &[
        "text", "nlp", "language", "translation", "sentiment", "question answering",
        "summarization", "generation", "document", "named entity", "parsing",
        "speech recognition", "caption",
    ]),
    ("Audio", &["audio", "speech", "voice", "sound", "acoustic", "music", "speaker", "noise"]),
    ("Video", &["video", "action", "activity", "temporal", "motion", "tracking", "optical flow"]),
    ("3D", &[
        "3d", "point cloud", "mesh", "depth", "pose", "lidar", "stereo",
        "reconstruction", "human pose",
    ]),
    ("Time Series", &["time series", "temporal", "sequence", "forecasting", "prediction", "trajectory"]),
    ("Graph", &["graph", "network", "relation", "knowledge graph", "scene graph"]),
    ("Tabular", &["tabular", "table", "spreadsheet", "structured data"]),
];

/// One compiled alternation per modality.
static MODALITY_RES: LazyLock<Vec<(&'static str, Regex)>> = LazyLock::new(|| {
    MODALITY_KEYWORDS
        .iter()
        .filter_map(|(name, words)| {
            let alts: Vec<String> = words.iter().map(|w| regex::escape(w)).collect();
            Regex::new(&format!(r"(?i)\b(?:{})\b", alts.join("|")))
                .ok()
                .map(|re| (*name, re))
        })
        .collect()
});

static YEAR_RE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"\b(19\d{2}|20\d{2})\b").ok());

/// Infer modalities from task names. Sorted, joined ", "; "" if nothing hits.
pub fn modalities_from_tasks<S: AsRef<str>>(tasks: &[S]) -> String {
    let mut found: BTreeSet<&'static str> = BTreeSet::new();

    for task in tasks {
        let task = task.as_ref().trim();
        if task.is_empty() {
            continue;
        }
        for (name, re) in MODALITY_RES.iter() {
            if re.is_match(task) {
                found.insert(*name);
            }
        }

        let lower = task.to_lowercase();
        if lower.contains("pose estimation") {
            found.extend(["3D", "Image"]);
        }
        if lower.contains("detection") || lower.contains("segmentation") {
            found.insert("Image");
        }
        if lower.contains("caption") || lower.contains("visual question") {
            found.extend(["Image", "Text"]);
        }
    }

    found.into_iter().collect::<Vec<_>>().join(", ")
}

/// First 19xx / 20xx year in `text`.
pub fn first_year(text: &str) -> Option<String> {
    let re: &Option<Regex> = &YEAR_RE;
    re.as_ref()?.find(text).map(|m| s!(m.as_str()))
}

/// Coarse labels read off a summary paragraph.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SummaryClass {
    pub modality: &'static str,
    pub domain: &'static str,
    pub task_type: &'static str,
}

/// Classify a summary. First matching rule wins in each column;
/// modality defaults to Text, the others to General.
pub fn classify_summary(summary: &str) -> SummaryClass {
    let t = summary.to_lowercase();
    let any = |words: &[&str]| words.iter().any(|w| t.contains(w));

    let modality = if any(&["image", "visual", "picture"]) {
        if any(&["text", "language"]) { "Image-Text" } else { "Image" }
    } else if any(&["video", "motion"]) {
        "Video"
    } else if any(&["audio", "sound", "speech"]) {
        "Audio"
    } else {
        "Text"
    };

    let domain = if any(&["scientific", "science", "research"]) {
        "Scientific"
    } else if any(&[" ui ", "interface", "gui"]) {
        "UI"
    } else if any(&["document", "pdf", "ocr"]) {
        "Document"
    } else {
        "General"
    };

    const TASK_TYPES: &[(&str, &str)] = &[
        ("question answering", "Question Answering"),
        ("classification", "Classification"),
        ("detection", "Detection"),
        ("segmentation", "Segmentation"),
        ("captioning", "Captioning"),
        ("translation", "Translation"),
        ("summarization", "Summarization"),
        ("reasoning", "Reasoning"),
        ("sentiment", "Sentiment Analysis"),
    ];
    let task_type = TASK_TYPES
        .iter()
        .find(|(kw, _)| t.contains(kw))
        .map(|(_, label)| *label)
        .unwrap_or("General");

    SummaryClass { modality, domain, task_type }
}
