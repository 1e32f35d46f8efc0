//! The `quizbank show` command.

use anyhow::Result;

use quizbank_core::QuestionEntry;

use super::{CatalogArgs, OutputFormat};

pub fn execute(args: CatalogArgs, id: String, format: String) -> Result<()> {
    let format: OutputFormat = format.parse().map_err(|e: String| anyhow::anyhow!(e))?;
    let (store, _) = args.open()?;
    let entry = store.get(&id)?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(entry)?),
        OutputFormat::Table => print!("{}", render(entry)),
    }
    Ok(())
}

fn render(entry: &QuestionEntry) -> String {
    let mut out = format!("[{}] ({})\n{}\n", entry.id, entry.section, entry.prompt);

    if let Some(code) = &entry.code_sample {
        out.push_str(&format!("\n```js\n{code}\n```\n"));
    }
    if let Some(answer) = &entry.expected_answer {
        out.push_str(&format!("\nAnswer:\n{answer}\n"));
    }
    if !entry.tags.is_empty() {
        out.push_str(&format!("\nTags: {}\n", entry.tags.join(", ")));
    }
    out
}
