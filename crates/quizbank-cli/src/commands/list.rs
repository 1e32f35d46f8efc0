//! The `quizbank list` command.

use anyhow::Result;

use quizbank_core::Section;

use super::{print_entries, CatalogArgs, OutputFormat};

pub fn execute(args: CatalogArgs, section: Option<String>, format: String) -> Result<()> {
    let format: OutputFormat = format.parse().map_err(|e: String| anyhow::anyhow!(e))?;
    let section = section.map(|s| s.parse::<Section>()).transpose()?;

    let (store, _) = args.open()?;
    print_entries(&store.list(section), format)
}
