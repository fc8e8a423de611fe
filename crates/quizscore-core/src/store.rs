//! Answer store: the state container a host drives with events.
//!
//! The store holds an immutable snapshot of the answer sequence and swaps in
//! a fresh one for every accepted event. A rejected event leaves the current
//! snapshot in place, and readers holding an older snapshot keep a consistent
//! view.

use std::sync::Arc;

use crate::error::StoreError;
use crate::model::{Answer, AnswerDraft};
use crate::scoring::{compute_score, ScoreSummary};
use crate::weights::assign_weights;

/// An inbound event from the host.
#[derive(Debug, Clone, PartialEq)]
pub enum StoreEvent {
    /// A new answer was submitted.
    Submit(AnswerDraft),
    /// The answer at `index` was clicked.
    Toggle { index: usize },
}

/// Apply one event to a sequence, producing the next sequence.
pub fn reduce(answers: &[Answer], event: StoreEvent) -> Result<Vec<Answer>, StoreError> {
    match event {
        StoreEvent::Submit(draft) => Ok(assign_weights(answers, draft)?),
        StoreEvent::Toggle { index } => toggle_checked(answers, index),
    }
}

/// Copy of `answers` with the `checked` flag at `index` flipped.
///
/// Weights and every other field are left exactly as they were.
pub fn toggle_checked(answers: &[Answer], index: usize) -> Result<Vec<Answer>, StoreError> {
    if index >= answers.len() {
        return Err(StoreError::AnswerNotFound {
            index,
            len: answers.len(),
        });
    }
    let mut next = answers.to_vec();
    next[index].checked = !next[index].checked;
    Ok(next)
}

/// Holds the current answer snapshot.
#[derive(Debug, Clone)]
pub struct AnswerStore {
    answers: Arc<[Answer]>,
}

impl Default for AnswerStore {
    fn default() -> Self {
        Self::new()
    }
}

impl AnswerStore {
    pub fn new() -> Self {
        Self {
            answers: Arc::from(Vec::new()),
        }
    }

    /// Apply an event, replacing the snapshot only if it succeeds.
    pub fn apply(&mut self, event: StoreEvent) -> Result<(), StoreError> {
        let label = match &event {
            StoreEvent::Submit(_) => "submit",
            StoreEvent::Toggle { .. } => "toggle",
        };
        match reduce(&self.answers, event) {
            Ok(next) => {
                tracing::debug!(event = label, answers = next.len(), "answer store updated");
                self.answers = Arc::from(next);
                Ok(())
            }
            Err(e) => {
                tracing::warn!(event = label, "rejected: {e}");
                Err(e)
            }
        }
    }

    /// Submit a new answer.
    pub fn submit(&mut self, draft: AnswerDraft) -> Result<(), StoreError> {
        self.apply(StoreEvent::Submit(draft))
    }

    /// Flip the checked flag of the answer at `index`.
    pub fn toggle(&mut self, index: usize) -> Result<(), StoreError> {
        self.apply(StoreEvent::Toggle { index })
    }

    /// A shared handle to the current snapshot.
    pub fn snapshot(&self) -> Arc<[Answer]> {
        Arc::clone(&self.answers)
    }

    pub fn answers(&self) -> &[Answer] {
        &self.answers
    }

    /// Score of the current snapshot.
    pub fn score(&self) -> ScoreSummary {
        compute_score(&self.answers)
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }
}
