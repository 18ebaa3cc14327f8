//! Command-line argument surface for `qtag`.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum StopwordArg {
    Internal,
    Leeds,
}

impl From<StopwordArg> for tagger_core::StopwordPolicy {
    fn from(arg: StopwordArg) -> Self {
        match arg {
            StopwordArg::Internal => tagger_core::StopwordPolicy::Internal,
            StopwordArg::Leeds => tagger_core::StopwordPolicy::Leeds,
        }
    }
}

/// Locate Qur'anic quotations inside a tokenized input document.
#[derive(Debug, Parser)]
#[command(name = "qtag", version, about)]
pub struct Args {
    /// Tokens JSON file (a JSON array of strings). Reads stdin if omitted.
    pub file: Option<PathBuf>,

    /// Minimum matched block length to report.
    #[arg(long, default_value_t = 2)]
    pub min: usize,

    /// Suppress overlap warnings on stderr (still present in the JSON output).
    #[arg(long, default_value_t = false)]
    pub quiet: bool,

    /// Allow bridging a single bounded gap of non-matching words.
    #[arg(long, default_value_t = false)]
    pub ellipsis: bool,

    /// Maximum width of the bridged gap, in words.
    #[arg(long = "ellipsis-window", default_value_t = 2)]
    pub ellipsis_window: usize,

    /// Which stopword list anchors a seed rejection.
    #[arg(long, value_enum, default_value = "leeds")]
    pub stopwords: StopwordArg,

    /// Tanzīl-format Qur'an corpus file. Defaults to the bundled sample corpus.
    #[arg(long)]
    pub corpus: Option<PathBuf>,

    /// Gold annotation file to score the tagged output against.
    #[arg(long)]
    pub gold: Option<PathBuf>,

    /// Load a previously saved index snapshot instead of rebuilding from the corpus.
    #[arg(long = "load-index")]
    pub load_index: Option<PathBuf>,

    /// Save the built index snapshot to this path for faster subsequent startups.
    #[arg(long = "save-index")]
    pub save_index: Option<PathBuf>,
}
