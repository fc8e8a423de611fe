//! The `quizscore score` command.

use std::path::PathBuf;

use anyhow::{Context, Result};

use quizscore_core::model::Answer;
use quizscore_core::report::ScoreReport;
use quizscore_core::scoring::has_conflict;
use quizscore_core::store::toggle_checked;

use super::load_answers;
use crate::config::{load_config_from, OutputFormat};

pub fn execute(
    answers_path: PathBuf,
    toggle: Option<String>,
    format: Option<String>,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    let format = match format {
        Some(f) => f.parse::<OutputFormat>().map_err(|e: String| anyhow::anyhow!("{}", e))?,
        None => config.format,
    };

    let (name, mut answers) = load_answers(&answers_path)?;
    tracing::info!("scoring '{}' ({} answers)", name, answers.len());

    for index in parse_toggles(toggle.as_deref())? {
        answers = toggle_checked(&answers, index)?;
    }
    if has_conflict(&answers) {
        tracing::warn!("'{name}' has conflicting checked answers; the score is void");
    }

    let report = ScoreReport::build(name, &answers);

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Table => {
            println!("{}", answer_table(&answers, config.precision));
            println!("{}", report.to_text(config.precision));
        }
        OutputFormat::Text => {
            println!(
                "{}: {} of {} answers checked",
                report.name, report.checked_count, report.answer_count
            );
            println!("{}", report.to_text(config.precision));
        }
    }

    Ok(())
}

/// Parse a comma-separated list of 0-based answer indices.
fn parse_toggles(list: Option<&str>) -> Result<Vec<usize>> {
    let Some(list) = list else {
        return Ok(Vec::new());
    };
    list.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<usize>()
                .with_context(|| format!("invalid answer index: {s}"))
        })
        .collect()
}

fn answer_table(answers: &[Answer], precision: usize) -> comfy_table::Table {
    use comfy_table::{Cell, Table};

    let mut table = Table::new();
    table.set_header(vec!["#", "Answer", "Grade", "Group", "Weight", "Checked"]);

    for (i, answer) in answers.iter().enumerate() {
        table.add_row(vec![
            Cell::new(i),
            Cell::new(&answer.text),
            Cell::new(answer.grade),
            Cell::new(answer.group().unwrap_or("-")),
            Cell::new(format!("{:.p$}", answer.weight, p = precision)),
            Cell::new(if answer.checked { "x" } else { "" }),
        ]);
    }

    table
}
