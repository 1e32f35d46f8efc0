//! The `quizbank sample` command.

use anyhow::Result;

use quizbank_core::QueryService;

use super::{print_entries, CatalogArgs, OutputFormat};

pub fn execute(
    args: CatalogArgs,
    count: Option<usize>,
    seed: Option<u64>,
    format: String,
) -> Result<()> {
    let format: OutputFormat = format.parse().map_err(|e: String| anyhow::anyhow!(e))?;
    let (store, config) = args.open()?;

    let count = count.unwrap_or(config.sample_size);
    // Always sample with an explicit seed so the draw can be replayed.
    let seed = seed.or(config.seed).unwrap_or_else(rand::random);
    tracing::info!(count, seed, "sampling questions");

    let picked = QueryService::new(&store).random_sample(count, Some(seed))?;

    if format == OutputFormat::Table {
        println!("Sample of {count} (seed {seed})");
    }
    print_entries(&picked, format)
}
