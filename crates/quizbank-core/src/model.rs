//! Core data model types for quizbank.
//!
//! These are the types the whole system uses to represent questions,
//! the sections that group them, and the banks they are loaded from.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CatalogError;

/// A single question-and-answer record in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionEntry {
    /// Unique identifier, assigned at ingestion.
    pub id: String,
    /// Topical grouping.
    pub section: Section,
    /// The question text.
    pub prompt: String,
    /// Illustrative snippet shown with the question.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code_sample: Option<String>,
    /// Expected output or explanation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected_answer: Option<String>,
    /// Free-form tags for filtering.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

impl QuestionEntry {
    /// Create an entry with only the required fields set.
    pub fn new(id: impl Into<String>, section: Section, prompt: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            section,
            prompt: prompt.into(),
            code_sample: None,
            expected_answer: None,
            tags: Vec::new(),
        }
    }

    pub fn with_code_sample(mut self, code: impl Into<String>) -> Self {
        self.code_sample = Some(code.into());
        self
    }

    pub fn with_expected_answer(mut self, answer: impl Into<String>) -> Self {
        self.expected_answer = Some(answer.into());
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }
}

/// The closed set of topical sections a question can belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Section {
    Arrays,
    Strings,
    Objects,
    Functions,
    Closures,
    Hoisting,
    Promises,
    EventLoop,
    Hooks,
    Redux,
    React,
    Styling,
}

impl Section {
    /// Every section, in display order.
    pub const ALL: [Section; 12] = [
        Section::Arrays,
        Section::Strings,
        Section::Objects,
        Section::Functions,
        Section::Closures,
        Section::Hoisting,
        Section::Promises,
        Section::EventLoop,
        Section::Hooks,
        Section::Redux,
        Section::React,
        Section::Styling,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Section::Arrays => "arrays",
            Section::Strings => "strings",
            Section::Objects => "objects",
            Section::Functions => "functions",
            Section::Closures => "closures",
            Section::Hoisting => "hoisting",
            Section::Promises => "promises",
            Section::EventLoop => "event-loop",
            Section::Hooks => "hooks",
            Section::Redux => "redux",
            Section::React => "react",
            Section::Styling => "styling",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Section {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "arrays" | "array" => Ok(Section::Arrays),
            "strings" | "string" => Ok(Section::Strings),
            "objects" | "object" => Ok(Section::Objects),
            "functions" | "function" => Ok(Section::Functions),
            "closures" | "closure" => Ok(Section::Closures),
            "hoisting" => Ok(Section::Hoisting),
            "promises" | "promise" | "async" => Ok(Section::Promises),
            "event-loop" | "event_loop" | "eventloop" | "event loop" => Ok(Section::EventLoop),
            "hooks" | "hook" => Ok(Section::Hooks),
            "redux" => Ok(Section::Redux),
            "react" => Ok(Section::React),
            "styling" | "css" | "scss" => Ok(Section::Styling),
            other => Err(CatalogError::UnknownSection(other.to_string())),
        }
    }
}

/// The entries loaded from one question-bank file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionBank {
    /// Identifier of the bank (TOML header id or markdown file stem).
    pub id: String,
    /// Human-readable name.
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Entries in file order.
    #[serde(default)]
    pub entries: Vec<QuestionEntry>,
}
