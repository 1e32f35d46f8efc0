pub mod export;
pub mod init;
pub mod list;
pub mod query;
pub mod sample;
pub mod sections;
pub mod show;
pub mod validate;

use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::Result;
use comfy_table::Table;

use quizbank_core::{CatalogStore, QuestionEntry};

use crate::config::QuizbankConfig;

/// Options every catalog-reading command shares.
pub struct CatalogArgs {
    pub catalog: Option<PathBuf>,
    pub config: Option<PathBuf>,
}

impl CatalogArgs {
    pub fn load_config(&self) -> Result<QuizbankConfig> {
        crate::config::load_config_from(self.config.as_deref())
    }

    /// The catalog path: `--catalog` if given, else the configured one.
    pub fn resolve_path(&self, config: &QuizbankConfig) -> PathBuf {
        self.catalog
            .clone()
            .unwrap_or_else(|| config.catalog_path())
    }

    pub fn open(&self) -> Result<(CatalogStore, QuizbankConfig)> {
        let config = self.load_config()?;
        let path = self.resolve_path(&config);
        let store = open_catalog(&path)?;
        Ok((store, config))
    }
}

pub fn open_catalog(path: &Path) -> Result<CatalogStore> {
    let store = quizbank_core::parser::load_catalog(path)?;
    tracing::info!("loaded {} questions from {}", store.len(), path.display());
    Ok(store)
}

/// How entry lists are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" | "text" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("unknown output format: {other}")),
        }
    }
}

const PROMPT_WIDTH: usize = 60;

fn truncate(text: &str, width: usize) -> String {
    let first_line = text.lines().next().unwrap_or_default();
    if first_line.chars().count() <= width && !text.contains('\n') {
        first_line.to_string()
    } else {
        let cut: String = first_line.chars().take(width.saturating_sub(1)).collect();
        format!("{cut}…")
    }
}

/// Print entries as a table or a JSON array.
pub fn print_entries(entries: &[&QuestionEntry], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(entries)?);
        }
        OutputFormat::Table => {
            if entries.is_empty() {
                println!("No questions found.");
                return Ok(());
            }

            let mut table = Table::new();
            table.set_header(vec!["ID", "Section", "Prompt", "Tags"]);
            for entry in entries {
                table.add_row(vec![
                    entry.id.clone(),
                    entry.section.to_string(),
                    truncate(&entry.prompt, PROMPT_WIDTH),
                    entry.tags.join(", "),
                ]);
            }
            println!("{table}");
            println!("{} question(s)", entries.len());
        }
    }
    Ok(())
}
