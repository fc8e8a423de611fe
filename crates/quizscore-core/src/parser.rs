//! TOML answer-set parser.
//!
//! Loads answer sets from TOML files and directories, and validates them.
//! Entries are replayed through an [`AnswerStore`] as submit events, then
//! toggled, so weights and checked flags always come from the engine.

use std::collections::{HashMap, HashSet};
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::model::{Answer, AnswerDraft};
use crate::scoring::find_conflicts;
use crate::store::AnswerStore;

/// Intermediate TOML structure for parsing answer-set files.
#[derive(Debug, Deserialize)]
struct TomlAnswerFile {
    quiz: TomlQuizHeader,
    #[serde(default)]
    answers: Vec<TomlAnswer>,
}

#[derive(Debug, Deserialize)]
struct TomlQuizHeader {
    name: String,
    #[serde(default)]
    description: String,
}

#[derive(Debug, Deserialize)]
struct TomlAnswer {
    text: String,
    grade: String,
    #[serde(default)]
    group: Option<String>,
    #[serde(default)]
    checked: bool,
}

/// A named, scored answer sequence loaded from a file.
#[derive(Debug, Clone)]
pub struct AnswerSet {
    pub name: String,
    pub description: String,
    pub answers: Vec<Answer>,
}

/// Parse a single TOML file into an `AnswerSet`.
pub fn parse_answer_set(path: &Path) -> Result<AnswerSet> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read answer set file: {}", path.display()))?;

    parse_answer_set_str(&content, path)
}

/// Parse a TOML string into an `AnswerSet` (useful for testing).
pub fn parse_answer_set_str(content: &str, source_path: &Path) -> Result<AnswerSet> {
    let parsed: TomlAnswerFile = toml::from_str(content)
        .with_context(|| format!("failed to parse TOML: {}", source_path.display()))?;

    let mut store = AnswerStore::new();
    let mut to_check = Vec::new();

    for (i, entry) in parsed.answers.into_iter().enumerate() {
        let draft = AnswerDraft::parse(entry.text, &entry.grade, entry.group)
            .with_context(|| format!("answer #{} in {}", i + 1, source_path.display()))?;
        store
            .submit(draft)
            .with_context(|| format!("answer #{} in {}", i + 1, source_path.display()))?;
        if entry.checked {
            to_check.push(i);
        }
    }

    for index in to_check {
        store.toggle(index)?;
    }

    Ok(AnswerSet {
        name: parsed.quiz.name,
        description: parsed.quiz.description,
        answers: store.answers().to_vec(),
    })
}

/// Recursively load all `.toml` answer-set files from a directory.
pub fn load_answer_directory(dir: &Path) -> Result<Vec<AnswerSet>> {
    let mut sets = Vec::new();

    if !dir.is_dir() {
        anyhow::bail!("not a directory: {}", dir.display());
    }

    for entry in std::fs::read_dir(dir)
        .with_context(|| format!("failed to read directory: {}", dir.display()))?
    {
        let entry = entry?;
        let path = entry.path();

        if path.is_dir() {
            sets.extend(load_answer_directory(&path)?);
        } else if path.extension().is_some_and(|ext| ext == "toml") {
            match parse_answer_set(&path) {
                Ok(set) => sets.push(set),
                Err(e) => {
                    tracing::warn!("skipping {}: {:#}", path.display(), e);
                }
            }
        }
    }

    Ok(sets)
}

/// A warning from answer-set validation.
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    /// Index of the offending answer (if applicable).
    pub answer: Option<usize>,
    /// Warning message.
    pub message: String,
}

/// Validate an answer set for common issues.
pub fn validate_answer_set(set: &AnswerSet) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    let mut seen_text = HashSet::new();
    for (i, answer) in set.answers.iter().enumerate() {
        if !seen_text.insert(answer.text.as_str()) {
            warnings.push(ValidationWarning {
                answer: Some(i),
                message: format!("duplicate answer text: {}", answer.text),
            });
        }
    }

    // A group needs at least two members for exclusivity to mean anything.
    let mut group_sizes: HashMap<&str, (usize, usize)> = HashMap::new();
    for (i, answer) in set.answers.iter().enumerate() {
        if let Some(group) = answer.group() {
            group_sizes.entry(group).or_insert((i, 0)).1 += 1;
        }
    }
    let mut singletons: Vec<_> = group_sizes
        .into_iter()
        .filter(|(_, (_, size))| *size == 1)
        .collect();
    singletons.sort_by_key(|(_, (first, _))| *first);
    for (group, (first, _)) in singletons {
        warnings.push(ValidationWarning {
            answer: Some(first),
            message: format!("group '{group}' has a single answer"),
        });
    }

    if !set.answers.is_empty() && !set.answers.iter().any(|a| a.grade.is_positive()) {
        warnings.push(ValidationWarning {
            answer: None,
            message: "no TRUE or PARTIALLY_TRUE answer; the best score is 0".into(),
        });
    }

    for conflict in find_conflicts(&set.answers) {
        warnings.push(ValidationWarning {
            answer: conflict.indices.first().copied(),
            message: format!(
                "checked answers conflict in group '{}'; the score is invalidated",
                conflict.group_id
            ),
        });
    }

    warnings
}
