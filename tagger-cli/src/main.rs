//! `qtag`: command-line front end for the Qur'anic quotation tagger.
//!
//! Reads a tokens JSON array from a file or stdin, tags it against a
//! Qur'an corpus, and writes the resulting matches as JSON to stdout.

mod cli;

use std::io::Read;

use anyhow::Context;
use clap::Parser;
use once_cell::sync::OnceCell;
use tagger_core::{Engine, Index, QMeta, StopwordSet, TagOptions, Token};
use tagger_eval::GoldSpan;

static ENGINE: OnceCell<Engine> = OnceCell::new();

fn build_engine(args: &cli::Args) -> anyhow::Result<&'static Engine> {
    ENGINE.get_or_try_init(|| -> anyhow::Result<Engine> {
        if let Some(path) = &args.load_index {
            let bytes = std::fs::read(path)
                .with_context(|| format!("reading saved index from {}", path.display()))?;
            let index: Index = bincode::deserialize(&bytes)
                .with_context(|| format!("decoding saved index from {}", path.display()))?;
            let stopwords = StopwordSet::build(args.stopwords.into());
            return Ok(Engine::with_stopwords(index, stopwords));
        }

        let words: Vec<(Token, QMeta)> = match &args.corpus {
            Some(path) => tagger_corpus::load_from_path(path)
                .with_context(|| format!("loading corpus from {}", path.display()))?,
            None => tagger_corpus::load_default(),
        };

        let engine = Engine::build(&words, args.stopwords.into())
            .context("failed to build the Qur'an index")?;

        if let Some(path) = &args.save_index {
            let bytes = bincode::serialize(engine.index()).context("encoding index snapshot")?;
            std::fs::write(path, bytes)
                .with_context(|| format!("writing index snapshot to {}", path.display()))?;
        }

        Ok(engine)
    })
}

fn read_tokens(args: &cli::Args) -> anyhow::Result<Vec<Token>> {
    let raw = match &args.file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("reading tokens from {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("reading tokens from stdin")?;
            buf
        }
    };
    serde_json::from_str(&raw).context("tokens input must be a JSON array of strings")
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = cli::Args::parse();

    let tokens = read_tokens(&args)?;
    let engine = build_engine(&args)?;

    let opts = TagOptions {
        min_blocks: args.min,
        with_ellipsis: args.ellipsis,
        ellipsis_window: args.ellipsis_window,
    };

    let outcome = engine.tag(&tokens, &opts).context("tagging failed")?;

    if !args.quiet {
        for warning in &outcome.warnings {
            eprintln!(
                "warning: equal-length overlapping matches dropped (qpos {} and qpos {})",
                warning.a, warning.b
            );
        }
    }

    println!("{}", serde_json::to_string_pretty(&outcome.matches)?);

    if let Some(gold_path) = &args.gold {
        let gold = tagger_eval::load_gold(gold_path)
            .with_context(|| format!("loading gold annotations from {}", gold_path.display()))?;
        let predicted: Vec<GoldSpan> = outcome
            .matches
            .iter()
            .filter_map(|m| {
                let meta = engine.index().meta(m.qpos_start)?;
                Some(GoldSpan {
                    input_start: m.input_start,
                    input_end: m.input_end,
                    surah: meta.surah,
                    verse: meta.verse,
                })
            })
            .collect();
        let report = tagger_eval::evaluate(&gold, &predicted);
        eprintln!("{}", serde_json::to_string_pretty(&report)?);
    }

    Ok(())
}
