//! Aggregate scoring over the checked answers.
//!
//! The score is all-or-nothing with respect to groups: if any group has more
//! than one checked member, both the positive and negative sums drop to zero.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::model::Answer;

/// Derived score values for display.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreSummary {
    /// Sum of weights of checked TRUE / PARTIALLY_TRUE answers.
    pub positive: f64,
    /// `positive` after diminishing-returns normalization.
    pub positive_normalized: f64,
    /// Sum of weights of checked FALSE / PARTIALLY_FALSE answers (never positive).
    pub negative: f64,
    /// `positive_normalized + negative`.
    pub total: f64,
    /// Whether some group has more than one checked answer.
    pub conflict: bool,
}

/// A group with more than one checked member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupConflict {
    pub group_id: String,
    /// Indices of the checked members, in sequence order.
    pub indices: Vec<usize>,
}

/// Compute the aggregate score of the currently checked answers.
///
/// Total over any input: an empty sequence or an empty selection scores zero.
pub fn compute_score(answers: &[Answer]) -> ScoreSummary {
    let conflicts = find_conflicts(answers);
    for c in &conflicts {
        tracing::debug!(
            group = %c.group_id,
            members = c.indices.len(),
            "conflicting selection in group"
        );
    }
    let conflict = !conflicts.is_empty();

    let (positive, negative) = if conflict {
        (0.0, 0.0)
    } else {
        answers
            .iter()
            .filter(|a| a.checked)
            .fold((0.0, 0.0), |(pos, neg), a| {
                if a.grade.is_positive() {
                    (pos + a.weight, neg)
                } else {
                    (pos, neg + a.weight)
                }
            })
    };

    let positive_normalized = normalize_positive(positive);

    ScoreSummary {
        positive,
        positive_normalized,
        negative,
        total: positive_normalized + negative,
        conflict,
    }
}

/// Compress positive sums above 1: `1 - (positive - 1) / 2`.
///
/// Note the curve keeps falling past 1, reaching 0 at `positive = 3` and going
/// negative beyond it. This matches the scores hosts already display, so it
/// is kept as is even though the intent was likely only to dampen values
/// slightly above 1.
pub fn normalize_positive(positive: f64) -> f64 {
    if positive > 1.0 {
        1.0 - (positive - 1.0) / 2.0
    } else {
        positive
    }
}

/// Find every group with more than one checked answer.
///
/// Unchecked answers and answers without a (non-empty) group never take part.
/// Groups are reported in the order they first appear.
pub fn find_conflicts(answers: &[Answer]) -> Vec<GroupConflict> {
    let mut groups: Vec<GroupConflict> = Vec::new();
    let mut slots: HashMap<&str, usize> = HashMap::new();

    for (index, answer) in answers.iter().enumerate() {
        if !answer.checked {
            continue;
        }
        let Some(group) = answer.group() else {
            continue;
        };
        let slot = *slots.entry(group).or_insert_with(|| {
            groups.push(GroupConflict {
                group_id: group.to_string(),
                indices: Vec::new(),
            });
            groups.len() - 1
        });
        groups[slot].indices.push(index);
    }

    groups.retain(|g| g.indices.len() > 1);
    groups
}

/// Shorthand for `!find_conflicts(answers).is_empty()`.
pub fn has_conflict(answers: &[Answer]) -> bool {
    !find_conflicts(answers).is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Grade;

    const EPS: f64 = 1e-9;

    fn answer(grade: Grade, weight: f64, checked: bool, group: Option<&str>) -> Answer {
        Answer {
            text: format!("{grade}"),
            grade,
            weight,
            checked,
            group_id: group.map(str::to_string),
        }
    }

    #[test]
    fn empty_sequence_scores_zero() {
        assert_eq!(compute_score(&[]), ScoreSummary::default());
    }

    #[test]
    fn unchecked_answers_do_not_count() {
        let answers = vec![
            answer(Grade::True, 1.0, false, None),
            answer(Grade::False, -1.0, false, None),
        ];
        assert_eq!(compute_score(&answers), ScoreSummary::default());
    }

    #[test]
    fn positive_and_negative_sums() {
        let answers = vec![
            answer(Grade::True, 1.0, true, None),
            answer(Grade::PartiallyFalse, -0.25, true, None),
            answer(Grade::PartiallyFalse, -0.25, false, None),
        ];
        let score = compute_score(&answers);
        assert!((score.positive - 1.0).abs() < EPS);
        assert!((score.negative + 0.25).abs() < EPS);
        assert!((score.total - 0.75).abs() < EPS);
        assert!(!score.conflict);
    }

    #[test]
    fn conflict_zeroes_everything() {
        let answers = vec![
            answer(Grade::True, 0.5, true, Some("g1")),
            answer(Grade::True, 0.5, true, Some("g1")),
            answer(Grade::False, -1.0, true, None),
        ];
        let score = compute_score(&answers);
        assert!(score.conflict);
        assert_eq!(score.positive, 0.0);
        assert_eq!(score.negative, 0.0);
        assert_eq!(score.total, 0.0);
    }

    #[test]
    fn ungrouped_or_empty_group_never_conflicts() {
        let answers = vec![
            answer(Grade::True, 0.5, true, None),
            answer(Grade::True, 0.5, true, None),
            answer(Grade::PartiallyTrue, 0.25, true, Some("")),
            answer(Grade::PartiallyTrue, 0.25, true, Some("")),
        ];
        let score = compute_score(&answers);
        assert!(!score.conflict);
        assert!((score.positive - 1.5).abs() < EPS);
    }

    #[test]
    fn one_checked_member_per_group_is_fine() {
        let answers = vec![
            answer(Grade::True, 1.0, true, Some("g1")),
            answer(Grade::False, -1.0, false, Some("g1")),
            answer(Grade::PartiallyTrue, 0.5, true, Some("g2")),
        ];
        assert!(!has_conflict(&answers));
        assert!(find_conflicts(&answers).is_empty());
    }

    #[test]
    fn conflicts_report_groups_in_first_seen_order() {
        let answers = vec![
            answer(Grade::True, 0.5, true, Some("b")),
            answer(Grade::True, 0.5, true, Some("a")),
            answer(Grade::False, -0.5, true, Some("a")),
            answer(Grade::False, -0.5, true, Some("b")),
            answer(Grade::PartiallyTrue, 0.5, true, Some("c")),
        ];
        let conflicts = find_conflicts(&answers);
        assert_eq!(
            conflicts,
            vec![
                GroupConflict {
                    group_id: "b".into(),
                    indices: vec![0, 3],
                },
                GroupConflict {
                    group_id: "a".into(),
                    indices: vec![1, 2],
                },
            ]
        );
    }

    #[test]
    fn normalization_boundaries() {
        assert_eq!(normalize_positive(0.0), 0.0);
        assert_eq!(normalize_positive(0.5), 0.5);
        assert_eq!(normalize_positive(1.0), 1.0);
        assert!((normalize_positive(1.5) - 0.75).abs() < EPS);
        assert_eq!(normalize_positive(3.0), 0.0);
        assert!(normalize_positive(5.0) < 0.0);
    }

    #[test]
    fn score_is_idempotent() {
        let answers = vec![
            answer(Grade::True, 1.0, true, None),
            answer(Grade::PartiallyFalse, -0.5, true, Some("g")),
        ];
        assert_eq!(compute_score(&answers), compute_score(&answers));
    }
}
