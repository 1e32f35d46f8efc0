//! The `quizbank search` and `quizbank tagged` commands.

use anyhow::Result;

use quizbank_core::QueryService;

use super::{print_entries, CatalogArgs, OutputFormat};

pub fn search(args: CatalogArgs, text: String, format: String) -> Result<()> {
    let format: OutputFormat = format.parse().map_err(|e: String| anyhow::anyhow!(e))?;
    let (store, _) = args.open()?;
    let matches = QueryService::new(&store).filter_by_keyword(&text);
    tracing::info!("{} question(s) match {:?}", matches.len(), text);
    print_entries(&matches, format)
}

pub fn tagged(args: CatalogArgs, tag: String, format: String) -> Result<()> {
    let format: OutputFormat = format.parse().map_err(|e: String| anyhow::anyhow!(e))?;
    let (store, _) = args.open()?;
    let matches = QueryService::new(&store).filter_by_tag(&tag);
    print_entries(&matches, format)
}
