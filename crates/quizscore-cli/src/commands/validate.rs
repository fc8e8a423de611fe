//! The `quizscore validate` command.

use std::collections::HashSet;
use std::path::PathBuf;

use anyhow::Result;

use quizscore_core::parser::{
    load_answer_directory, parse_answer_set, validate_answer_set, AnswerSet, ValidationWarning,
};

pub fn execute(answers_path: PathBuf, strict: bool) -> Result<()> {
    let sets = if answers_path.is_dir() {
        load_answer_directory(&answers_path)?
    } else {
        vec![parse_answer_set(&answers_path)?]
    };

    let mut flagged = 0usize;
    let mut total_warnings = 0usize;

    for set in &sets {
        let warnings = validate_answer_set(set);
        println!("{}", describe(set));
        for w in &warnings {
            println!("  {}", render_warning(set, w));
        }
        if !warnings.is_empty() {
            flagged += 1;
            total_warnings += warnings.len();
        }
    }

    if total_warnings == 0 {
        println!("All answer sets valid.");
        return Ok(());
    }

    println!("\n{total_warnings} warning(s) in {flagged} of {} answer set(s).", sets.len());
    if strict {
        anyhow::bail!("validation failed with {total_warnings} warning(s)");
    }
    Ok(())
}

/// One-line header: name, answer count, checked count, group count.
fn describe(set: &AnswerSet) -> String {
    let checked = set.answers.iter().filter(|a| a.checked).count();
    let groups: HashSet<&str> = set.answers.iter().filter_map(|a| a.group()).collect();
    format!(
        "Answer set: {} ({} answers, {} checked, {} groups)",
        set.name,
        set.answers.len(),
        checked,
        groups.len()
    )
}

/// Prefix a warning with the index and text of the answer it points at.
fn render_warning(set: &AnswerSet, warning: &ValidationWarning) -> String {
    match warning.answer.and_then(|i| set.answers.get(i).map(|a| (i, a))) {
        Some((i, answer)) => format!("[#{i} \"{}\"] WARNING: {}", answer.text, warning.message),
        None => format!("WARNING: {}", warning.message),
    }
}
