//! `qtag-eval`: compares a resolved-match JSON file against a hand-annotated
//! gold file and prints a precision/recall/F1 report.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

/// Score a tagger's resolved output against a gold annotation file.
#[derive(Debug, Parser)]
#[command(name = "qtag-eval")]
struct Args {
    /// Gold annotation file: a JSON array of `{input_start, input_end, surah, verse}`.
    #[arg(long)]
    gold: PathBuf,

    /// Resolved predicted matches, same shape as the gold file.
    #[arg(long)]
    predicted: PathBuf,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let gold = tagger_eval::load_gold(&args.gold)
        .with_context(|| format!("loading gold annotations from {}", args.gold.display()))?;
    let predicted = tagger_eval::load_gold(&args.predicted)
        .with_context(|| format!("loading predicted matches from {}", args.predicted.display()))?;

    let report = tagger_eval::evaluate(&gold, &predicted);
    println!("{}", serde_json::to_string_pretty(&report)?);
    log::info!(
        "precision={:.4} recall={:.4} f1={:.4}",
        report.precision,
        report.recall,
        report.f1
    );

    Ok(())
}
