pub mod dump;
pub mod init;
pub mod score;
pub mod validate;

use std::path::Path;

use anyhow::Result;

use quizscore_core::model::Answer;
use quizscore_core::parser::parse_answer_set;
use quizscore_core::report::AnswerDump;

/// Load answers from a TOML answer set or a JSON dump.
///
/// Dumps are named after their file stem and get their weights re-derived,
/// since the file may have been edited by hand.
pub fn load_answers(path: &Path) -> Result<(String, Vec<Answer>)> {
    if path.extension().is_some_and(|ext| ext == "json") {
        let dump = AnswerDump::load_json(path)?.rederive_weights();
        let name = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        Ok((name, dump.answers))
    } else {
        let set = parse_answer_set(path)?;
        Ok((set.name, set.answers))
    }
}
