//! The `quizbank sections` command.

use anyhow::Result;
use comfy_table::Table;

use super::CatalogArgs;

pub fn execute(args: CatalogArgs) -> Result<()> {
    let (store, _) = args.open()?;

    let mut table = Table::new();
    table.set_header(vec!["Section", "Questions"]);
    for (section, count) in store.sections() {
        table.add_row(vec![section.to_string(), count.to_string()]);
    }
    println!("{table}");
    println!("{} question(s) total", store.len());
    Ok(())
}
