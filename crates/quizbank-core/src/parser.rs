//! Question-bank loaders.
//!
//! Loads question banks from TOML and markdown files and directories,
//! validates them, and builds a [`CatalogStore`] from the result.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::model::{QuestionBank, QuestionEntry, Section};
use crate::snapshot::CatalogSnapshot;
use crate::store::CatalogStore;

/// Intermediate TOML structure for parsing bank files.
#[derive(Debug, Deserialize)]
struct TomlBankFile {
    bank: TomlBankHeader,
    #[serde(default)]
    questions: Vec<TomlQuestion>,
}

#[derive(Debug, Deserialize)]
struct TomlBankHeader {
    id: String,
    name: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    default_section: Option<String>,
}

#[derive(Debug, Deserialize)]
struct TomlQuestion {
    id: String,
    #[serde(default)]
    section: Option<String>,
    prompt: String,
    #[serde(default)]
    code_sample: Option<String>,
    #[serde(default)]
    expected_answer: Option<String>,
    #[serde(default)]
    tags: Vec<String>,
}

/// Parse a single bank file, dispatching on its extension.
pub fn parse_bank(path: &Path) -> Result<QuestionBank> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read question bank: {}", path.display()))?;

    parse_bank_str(&content, path)
}

/// Parse bank content; `source_path` decides the format and names errors.
pub fn parse_bank_str(content: &str, source_path: &Path) -> Result<QuestionBank> {
    match source_path.extension().and_then(|e| e.to_str()) {
        Some("toml") => parse_toml_bank(content, source_path),
        Some("md") | Some("markdown") => parse_markdown_bank(content, source_path),
        _ => anyhow::bail!(
            "unsupported question bank format: {}",
            source_path.display()
        ),
    }
}

/// Parse a TOML bank (`[bank]` header plus `[[questions]]` tables).
pub fn parse_toml_bank(content: &str, source_path: &Path) -> Result<QuestionBank> {
    let parsed: TomlBankFile = toml::from_str(content)
        .with_context(|| format!("failed to parse TOML: {}", source_path.display()))?;

    let default_section = parsed
        .bank
        .default_section
        .as_deref()
        .map(str::parse::<Section>)
        .transpose()
        .with_context(|| format!("bad default_section in {}", source_path.display()))?;

    let entries = parsed
        .questions
        .into_iter()
        .map(|q| {
            let section = match q.section {
                Some(name) => name
                    .parse::<Section>()
                    .with_context(|| format!("question {}", q.id))?,
                None => default_section.ok_or_else(|| {
                    anyhow::anyhow!(
                        "question {} has no section and the bank sets no default_section",
                        q.id
                    )
                })?,
            };

            Ok(QuestionEntry {
                id: q.id,
                section,
                prompt: q.prompt.trim().to_string(),
                code_sample: q.code_sample.map(|c| c.trim_end().to_string()),
                expected_answer: q.expected_answer.map(|a| a.trim().to_string()),
                tags: q.tags,
            })
        })
        .collect::<Result<Vec<_>>>()
        .with_context(|| format!("invalid question in {}", source_path.display()))?;

    Ok(QuestionBank {
        id: parsed.bank.id,
        name: parsed.bank.name,
        description: parsed.bank.description,
        entries,
    })
}

/// A question being accumulated while scanning markdown.
struct PendingQuestion {
    id: String,
    section: Section,
    prompt: String,
    code_sample: Option<String>,
    answer: Vec<String>,
    tags: Vec<String>,
}

impl PendingQuestion {
    fn finish(self) -> QuestionEntry {
        let answer = self.answer.join("\n").trim().to_string();
        QuestionEntry {
            id: self.id,
            section: self.section,
            prompt: self.prompt,
            code_sample: self.code_sample,
            expected_answer: (!answer.is_empty()).then_some(answer),
            tags: self.tags,
        }
    }
}

/// Parse a markdown bank.
///
/// `# Title` names the bank, `## Section: <name>` switches section, and each
/// `### <prompt> {#id}` heading opens a question. The first fenced block under
/// a question is its code sample, a `Tags:` line sets its tags, and the rest
/// of the body is the expected answer.
pub fn parse_markdown_bank(content: &str, source_path: &Path) -> Result<QuestionBank> {
    let stem = source_path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("bank")
        .to_string();

    let mut name: Option<String> = None;
    let mut description = Vec::new();
    let mut section: Option<Section> = None;
    let mut current: Option<PendingQuestion> = None;
    let mut entries = Vec::new();

    let mut in_block = false;
    let mut block_is_sample = false;
    let mut block = String::new();

    for (lineno, line) in content.lines().enumerate() {
        let trimmed = line.trim();

        if trimmed.starts_with("```") {
            if !in_block {
                in_block = true;
                block.clear();
                block_is_sample = current.as_ref().is_some_and(|q| q.code_sample.is_none());
                if !block_is_sample {
                    if let Some(q) = current.as_mut() {
                        q.answer.push(line.to_string());
                    }
                }
            } else {
                in_block = false;
                match current.as_mut() {
                    Some(q) if block_is_sample => q.code_sample = Some(block.clone()),
                    Some(q) => q.answer.push(line.to_string()),
                    None => {}
                }
            }
            continue;
        }

        if in_block {
            if block_is_sample {
                if !block.is_empty() {
                    block.push('\n');
                }
                block.push_str(line);
            } else if let Some(q) = current.as_mut() {
                q.answer.push(line.to_string());
            }
            continue;
        }

        if let Some(heading) = trimmed.strip_prefix("### ") {
            let section = section.ok_or_else(|| {
                anyhow::anyhow!(
                    "{}:{}: question before any `## Section:` heading",
                    source_path.display(),
                    lineno + 1
                )
            })?;
            if let Some(done) = current.take() {
                entries.push(done.finish());
            }
            let (prompt, explicit_id) = split_heading_id(heading);
            let id = explicit_id.unwrap_or_else(|| format!("{stem}-{}", entries.len() + 1));
            current = Some(PendingQuestion {
                id,
                section,
                prompt,
                code_sample: None,
                answer: Vec::new(),
                tags: Vec::new(),
            });
        } else if let Some(heading) = trimmed.strip_prefix("## ") {
            // Only `## Section:` switches section; other level-two headings
            // just close the open question.
            if let Some(done) = current.take() {
                entries.push(done.finish());
            }
            if let Some(label) = heading.trim().strip_prefix("Section:") {
                section = Some(label.trim().parse::<Section>().with_context(|| {
                    format!("{}:{}", source_path.display(), lineno + 1)
                })?);
            }
        } else if let Some(title) = trimmed
            .strip_prefix("# ")
            .filter(|_| section.is_none() && current.is_none())
        {
            if name.is_none() {
                name = Some(title.trim().to_string());
            }
        } else if let Some(q) = current.as_mut() {
            match trimmed.strip_prefix("Tags:") {
                Some(tags) => {
                    q.tags = tags
                        .split(',')
                        .map(str::trim)
                        .filter(|t| !t.is_empty())
                        .map(String::from)
                        .collect();
                }
                None => q.answer.push(line.to_string()),
            }
        } else if section.is_none() && !trimmed.is_empty() {
            description.push(trimmed.to_string());
        }
    }

    // Unclosed fence: keep what was accumulated.
    if in_block && block_is_sample && !block.is_empty() {
        if let Some(q) = current.as_mut() {
            q.code_sample = Some(block);
        }
    }
    if let Some(done) = current.take() {
        entries.push(done.finish());
    }

    Ok(QuestionBank {
        name: name.unwrap_or_else(|| stem.clone()),
        id: stem,
        description: description.join(" "),
        entries,
    })
}

/// Split a trailing `{#id}` off a heading.
fn split_heading_id(heading: &str) -> (String, Option<String>) {
    let heading = heading.trim();
    if let Some(open) = heading.rfind("{#") {
        if heading.ends_with('}') {
            let id = heading[open + 2..heading.len() - 1].trim();
            if !id.is_empty() {
                return (heading[..open].trim().to_string(), Some(id.to_string()));
            }
        }
    }
    (heading.to_string(), None)
}

fn is_bank_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| matches!(ext, "toml" | "md" | "markdown"))
}

/// A bank file that could not be parsed.
#[derive(Debug, Clone)]
pub struct LoadFailure {
    pub path: PathBuf,
    /// The full error chain.
    pub message: String,
}

/// Banks found by a directory walk, plus the files that failed to parse.
#[derive(Debug, Clone, Default)]
pub struct LoadReport {
    pub banks: Vec<QuestionBank>,
    pub failures: Vec<LoadFailure>,
}

/// Recursively walk a directory, in sorted path order, collecting every bank
/// and every parse failure.
pub fn load_directory_report(dir: &Path) -> Result<LoadReport> {
    if !dir.is_dir() {
        anyhow::bail!("not a directory: {}", dir.display());
    }

    let mut paths: Vec<PathBuf> = std::fs::read_dir(dir)
        .with_context(|| format!("failed to read directory: {}", dir.display()))?
        .map(|entry| entry.map(|e| e.path()))
        .collect::<std::io::Result<_>>()?;
    paths.sort();

    let mut report = LoadReport::default();
    for path in paths {
        if path.is_dir() {
            let nested = load_directory_report(&path)?;
            report.banks.extend(nested.banks);
            report.failures.extend(nested.failures);
        } else if is_bank_file(&path) {
            match parse_bank(&path) {
                Ok(bank) => report.banks.push(bank),
                Err(e) => report.failures.push(LoadFailure {
                    message: format!("{e:#}"),
                    path,
                }),
            }
        }
    }

    Ok(report)
}

/// Recursively load all bank files from a directory, in sorted path order.
///
/// Files that fail to parse are skipped with a warning.
pub fn load_directory(dir: &Path) -> Result<Vec<QuestionBank>> {
    let report = load_directory_report(dir)?;
    for failure in &report.failures {
        tracing::warn!("skipping {}: {}", failure.path.display(), failure.message);
    }
    Ok(report.banks)
}

/// Load the banks at `path`, which may be a single file or a directory.
pub fn load_banks(path: &Path) -> Result<Vec<QuestionBank>> {
    if path.is_dir() {
        load_directory(path)
    } else {
        Ok(vec![parse_bank(path)?])
    }
}

/// Like [`load_banks`], but reports directory parse failures instead of
/// skipping them. A single file that fails to parse is still an error.
pub fn load_banks_report(path: &Path) -> Result<LoadReport> {
    if path.is_dir() {
        load_directory_report(path)
    } else {
        Ok(LoadReport {
            banks: vec![parse_bank(path)?],
            failures: Vec::new(),
        })
    }
}

/// Build a catalog from a bank file, a bank directory, or a JSON snapshot.
pub fn load_catalog(path: &Path) -> Result<CatalogStore> {
    if path.extension().is_some_and(|ext| ext == "json") {
        return CatalogSnapshot::load_json(path)?.into_store();
    }

    let banks = load_banks(path)?;
    tracing::debug!(banks = banks.len(), "question banks loaded from {}", path.display());

    let store = CatalogStore::load(banks.into_iter().flat_map(|b| b.entries))
        .with_context(|| format!("failed to build catalog from {}", path.display()))?;
    Ok(store)
}

/// A warning from bank validation.
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    /// The bank the warning concerns.
    pub bank_id: String,
    /// The question id (if applicable).
    pub question_id: Option<String>,
    /// Warning message.
    pub message: String,
}

/// Validate one bank for common authoring issues.
pub fn validate_bank(bank: &QuestionBank) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();
    let warn = |id: &str, message: String| ValidationWarning {
        bank_id: bank.id.clone(),
        question_id: Some(id.to_string()),
        message,
    };

    let mut seen_ids = std::collections::HashSet::new();
    for entry in &bank.entries {
        if !seen_ids.insert(&entry.id) {
            warnings.push(warn(&entry.id, format!("duplicate question ID: {}", entry.id)));
        }
    }

    for entry in &bank.entries {
        if entry.prompt.trim().is_empty() {
            warnings.push(warn(&entry.id, "prompt is empty".into()));
        }
        if entry
            .code_sample
            .as_deref()
            .is_some_and(|c| c.trim().is_empty())
        {
            warnings.push(warn(&entry.id, "code_sample is present but empty".into()));
        }
        if entry.expected_answer.is_none() {
            warnings.push(warn(&entry.id, "no expected_answer provided".into()));
        }
    }

    warnings
}

/// Validate a set of banks, including ids that collide across banks.
pub fn validate_banks(banks: &[QuestionBank]) -> Vec<ValidationWarning> {
    let mut warnings: Vec<_> = banks.iter().flat_map(validate_bank).collect();

    // Keyed by position: two files may share a bank id.
    let mut owner: HashMap<&str, usize> = HashMap::new();
    for (index, bank) in banks.iter().enumerate() {
        for entry in &bank.entries {
            match owner.get(entry.id.as_str()) {
                Some(&first) if first != index => warnings.push(ValidationWarning {
                    bank_id: bank.id.clone(),
                    question_id: Some(entry.id.clone()),
                    message: format!(
                        "question ID {} is also defined in bank {}",
                        entry.id, banks[first].id
                    ),
                }),
                Some(_) => {}
                None => {
                    owner.insert(&entry.id, index);
                }
            }
        }
    }

    warnings
}
