//! The `quizscore dump` command.

use std::path::PathBuf;

use anyhow::Result;

use quizscore_core::report::AnswerDump;

use super::load_answers;

pub fn execute(answers_path: PathBuf, output: Option<PathBuf>) -> Result<()> {
    let (_, answers) = load_answers(&answers_path)?;
    let dump = AnswerDump::new(&answers);

    match output {
        Some(path) => {
            dump.save_json(&path)?;
            eprintln!("Answers saved to: {}", path.display());
        }
        None => println!("{}", dump.to_json()?),
    }
    Ok(())
}
