//! The `quizbank export` command.

use std::path::PathBuf;

use anyhow::Result;

use quizbank_core::snapshot::CatalogSnapshot;

use super::CatalogArgs;

pub fn execute(args: CatalogArgs, output: PathBuf) -> Result<()> {
    let (store, _) = args.open()?;
    CatalogSnapshot::from_store(&store).save_json(&output)?;
    println!("Exported {} questions to {}", store.len(), output.display());
    Ok(())
}
