//! Weight assignment.
//!
//! Each grade's coefficient is split evenly across every answer that holds
//! that grade, so appending one answer re-weights all of its same-grade
//! siblings.

use std::collections::HashMap;

use crate::error::ValidationError;
use crate::model::{normalize_group, Answer, AnswerDraft, Grade};

/// Append `draft` to a copy of `existing` and recompute every weight.
///
/// Returns the new sequence with the new answer last. `existing` is never
/// modified, so a rejected draft leaves the caller's sequence as it was.
pub fn assign_weights(
    existing: &[Answer],
    draft: AnswerDraft,
) -> Result<Vec<Answer>, ValidationError> {
    if draft.text.is_empty() {
        return Err(ValidationError::EmptyText);
    }

    let mut answers = Vec::with_capacity(existing.len() + 1);
    answers.extend_from_slice(existing);
    answers.push(Answer {
        text: draft.text,
        grade: draft.grade,
        weight: 0.0,
        checked: false,
        group_id: normalize_group(draft.group_id),
    });

    recompute_weights(&mut answers);
    Ok(answers)
}

/// Set `weight = coefficient / same-grade count` on every answer.
pub fn recompute_weights(answers: &mut [Answer]) {
    let counts = grade_counts(answers);
    for answer in answers.iter_mut() {
        // Every answer counts itself, so the divisor is at least 1.
        let count = counts.get(&answer.grade).copied().unwrap_or(1);
        answer.weight = answer.grade.coefficient() / count as f64;
    }
}

/// Number of answers holding each grade. Grades with no answers are absent.
pub fn grade_counts(answers: &[Answer]) -> HashMap<Grade, usize> {
    let mut counts = HashMap::new();
    for answer in answers {
        *counts.entry(answer.grade).or_insert(0) += 1;
    }
    counts
}
