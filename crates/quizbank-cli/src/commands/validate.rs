//! The `quizbank validate` command.

use anyhow::Result;

use super::CatalogArgs;

pub fn execute(args: CatalogArgs) -> Result<()> {
    let config = args.load_config()?;
    let path = args.resolve_path(&config);
    let report = quizbank_core::parser::load_banks_report(&path)?;

    for bank in &report.banks {
        println!("Question bank: {} ({} questions)", bank.name, bank.entries.len());
    }

    for failure in &report.failures {
        println!("  [{}] ERROR: {}", failure.path.display(), failure.message);
    }

    let warnings = quizbank_core::parser::validate_banks(&report.banks);
    for w in &warnings {
        let prefix = w
            .question_id
            .as_ref()
            .map(|id| format!("  [{}/{id}]", w.bank_id))
            .unwrap_or_else(|| format!("  [{}]", w.bank_id));
        println!("{prefix} WARNING: {}", w.message);
    }

    if !report.failures.is_empty() {
        anyhow::bail!(
            "{} question bank file(s) failed to parse",
            report.failures.len()
        );
    }

    if warnings.is_empty() {
        println!("All question banks valid.");
    } else {
        println!("\n{} warning(s) found.", warnings.len());
    }

    Ok(())
}
