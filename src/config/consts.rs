// src/config/consts.rs

// Sources
pub const PWC_BASE: &str = "https://paperswithcode.com";
pub const PWC_SOTA: &str = "https://paperswithcode.com/sota";
pub const HF_BASE: &str = "https://huggingface.co";
pub const HF_DATASETS: &str = "https://huggingface.co/datasets";

// Net config
pub const USER_AGENTS: &[&str] = &[
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.4 Safari/605.1.15",
    "Mozilla/5.0 (X11; Linux x86_64; rv:125.0) Gecko/20100101 Firefox/125.0",
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:125.0) Gecko/20100101 Firefox/125.0",
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36",
];
pub const ACCEPT: &str = "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,*/*;q=0.8";
pub const ACCEPT_LANGUAGE: &str = "en-US,en;q=0.5";
pub const TIMEOUT_SECS: u64 = 30;
pub const MAX_RETRIES: u32 = 3;
pub const RETRY_DELAY_MS: u64 = 1_000; // multiplied by attempt number

// Scrape
pub const REQUEST_PAUSE_MS: u64 = 1_000; // be polite
pub const JITTER_MS: u64 = 500; // extra 0..500 ms
pub const HF_LISTING_PAGES: u32 = 20;

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
pub const DEFAULT_FILE: &str = "benchmarks.csv";

// Viewer: first candidate that loads wins
pub const VIEWER_CANDIDATES: &[&str] = &[
    "out/benchmarks.csv",
    "benchmarks.csv",
    "data/benchmarks.csv",
];

// Logging
pub const LOG_DIR: &str = ".store";
pub const LOG_FILE: &str = "debug.log";

// Used when the SOTA index cannot be read.
pub const PWC_FALLBACK_AREAS: &[(&str, &str)] = &[
    ("Computer Vision", "computer-vision"),
    ("Natural Language Processing", "natural-language-processing"),
    ("Medical", "medical"),
    ("Methodology", "methodology"),
    ("Graphs", "graphs"),
    ("Audio", "audio"),
    ("Reinforcement Learning", "reinforcement-learning"),
    ("Time Series", "time-series"),
    ("Robotics", "robotics"),
    ("Playing Games", "playing-games"),
    ("Reasoning", "reasoning"),
    ("Adversarial", "adversarial"),
    ("Speech", "speech"),
    ("Generative Models", "generative-models"),
    ("Multimodal", "multimodal"),
    ("Recommender Systems", "recommender-systems"),
];

// Used when the dataset hub listing yields nothing.
pub const HF_FALLBACK_DATASETS: &[&str] = &[
    "squad", "glue", "super_glue", "imdb", "wmt16", "cnn_dailymail", "common_voice",
    "xnli", "multi_nli", "sst2", "boolq", "race", "drop", "natural_questions",
    "trivia_qa", "hotpot_qa", "squad_v2", "xquad", "mlqa", "tydiqa", "piqa",
    "winogrande", "hellaswag", "commonsense_qa", "openbookqa", "sciq", "ai2_arc",
    "adversarial_qa", "quoref", "quail", "quartz", "cosmos_qa", "dream",
];
