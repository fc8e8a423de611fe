//! Answer dumps and score reports with JSON persistence.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::model::Answer;
use crate::scoring::{compute_score, find_conflicts, GroupConflict, ScoreSummary};
use crate::weights::recompute_weights;

/// Lossless JSON rendering of an answer sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerDump {
    pub answers: Vec<Answer>,
}

impl AnswerDump {
    pub fn new(answers: &[Answer]) -> Self {
        Self {
            answers: answers.to_vec(),
        }
    }

    /// Pretty JSON with four-space indentation.
    pub fn to_json(&self) -> Result<String> {
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.serialize(&mut ser)
            .context("failed to serialize answers")?;
        String::from_utf8(buf).context("answer dump is not valid UTF-8")
    }

    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("failed to parse answer dump JSON")
    }

    /// Save the dump as JSON to a file.
    pub fn save_json(&self, path: &Path) -> Result<()> {
        let json = self.to_json()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, json)
            .with_context(|| format!("failed to write answers to {}", path.display()))?;
        Ok(())
    }

    /// Load a dump from a JSON file.
    pub fn load_json(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read answers from {}", path.display()))?;
        Self::from_json(&content)
    }

    /// Replace stored weights with ones derived from the grades.
    ///
    /// A dump keeps whatever weights it was written with; hand-edited or
    /// truncated dumps need this before they are scored.
    pub fn rederive_weights(mut self) -> Self {
        recompute_weights(&mut self.answers);
        self
    }
}

/// Score of one answer set, ready for display or JSON output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreReport {
    pub name: String,
    pub answer_count: usize,
    pub checked_count: usize,
    pub score: ScoreSummary,
    /// Groups that invalidated the score, if any.
    #[serde(default)]
    pub conflicts: Vec<GroupConflict>,
}

impl ScoreReport {
    pub fn build(name: impl Into<String>, answers: &[Answer]) -> Self {
        Self {
            name: name.into(),
            answer_count: answers.len(),
            checked_count: answers.iter().filter(|a| a.checked).count(),
            score: compute_score(answers),
            conflicts: find_conflicts(answers),
        }
    }

    /// Render the three display values, one per line.
    pub fn to_text(&self, precision: usize) -> String {
        let mut out = format!(
            "Correct sum: {:.p$}\nIncorrect sum: {:.p$}\nTotal: {:.p$}",
            self.score.positive_normalized,
            self.score.negative,
            self.score.total,
            p = precision
        );
        for c in &self.conflicts {
            let members: Vec<String> = c.indices.iter().map(|i| i.to_string()).collect();
            out.push_str(&format!(
                "\nConflict in group '{}' (answers {})",
                c.group_id,
                members.join(", ")
            ));
        }
        out
    }
}
