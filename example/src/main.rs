use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use const_format::formatcp;
use tracing_subscriber::EnvFilter;
use trie_spell::{default_dictionary_path, LoadOptions, SpellCorrector, ALPHABET};

const AFTER_HELP: &str = formatcp!(
    "Dictionary words and queries may only use the letters {}.\n\
     Uppercase input is lowercased first. Set RUST_LOG for finer log control.",
    ALPHABET
);

/// Suggest the most likely dictionary word for a misspelled input.
#[derive(Parser)]
#[command(name = "trie-spell", version, about, after_help = AFTER_HELP)]
struct Cli {
    /// Word to check.
    word: String,

    /// Whitespace separated word list; repeated words raise their frequency.
    /// Defaults to the bundled list.
    #[arg(short, long, value_name = "FILE")]
    dictionary: Option<PathBuf>,

    /// Skip dictionary tokens with characters outside a-z instead of failing.
    #[arg(long)]
    skip_invalid: bool,

    /// Search candidates on all cores.
    #[arg(long)]
    parallel: bool,

    /// Print dictionary word and node counts before the result.
    #[arg(long)]
    stats: bool,

    /// Log each search stage.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let path = cli
        .dictionary
        .unwrap_or_else(|| PathBuf::from(default_dictionary_path()));
    let options = LoadOptions::default().skip_invalid(cli.skip_invalid);
    let corrector = SpellCorrector::from_file(&path, &options)
        .with_context(|| format!("failed to build dictionary from {}", path.display()))?
        .parallel(cli.parallel);

    if cli.stats {
        let index = corrector.index();
        println!(
            "Dictionary: {} words, {} nodes",
            index.word_count(),
            index.node_count()
        );
    }

    let suggestion = corrector
        .suggest(&cli.word)
        .with_context(|| format!("cannot check {:?}", cli.word))?;

    match suggestion {
        Some(word) => println!("Suggestion is: {word}"),
        None => println!("No similar word found"),
    }
    Ok(())
}
