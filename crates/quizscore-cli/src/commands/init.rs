//! The `quizscore init` command.

use anyhow::Result;

pub fn execute() -> Result<()> {
    if std::path::Path::new("quizscore.toml").exists() {
        println!("quizscore.toml already exists, skipping.");
    } else {
        std::fs::write("quizscore.toml", SAMPLE_CONFIG)?;
        println!("Created quizscore.toml");
    }

    std::fs::create_dir_all("answer-sets")?;
    let example_path = std::path::Path::new("answer-sets/example.toml");
    if example_path.exists() {
        println!("answer-sets/example.toml already exists, skipping.");
    } else {
        std::fs::write(example_path, EXAMPLE_ANSWER_SET)?;
        println!("Created answer-sets/example.toml");
    }

    println!("\nNext steps:");
    println!("  1. Edit answer-sets/example.toml");
    println!("  2. Run: quizscore validate --answers answer-sets/example.toml");
    println!("  3. Run: quizscore score --answers answer-sets/example.toml --toggle 0,2");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# quizscore configuration

# Decimal places shown for scores and weights
precision = 4

# Default output format: text, json, table
format = "text"
"#;

const EXAMPLE_ANSWER_SET: &str = r#"[quiz]
name = "Example"
description = "Which of these statements about Rust are true?"

[[answers]]
text = "Rust has no garbage collector"
grade = "TRUE"

[[answers]]
text = "Every value has exactly one owner"
grade = "TRUE"

[[answers]]
text = "unsafe disables the borrow checker"
grade = "PARTIALLY_FALSE"

[[answers]]
text = "Integer overflow is undefined behavior"
grade = "FALSE"

# Answers sharing a group are mutually exclusive:
# checking both invalidates the whole score.
[[answers]]
text = "Release builds wrap on overflow"
grade = "PARTIALLY_TRUE"
group = "overflow"

[[answers]]
text = "Release builds always panic on overflow"
grade = "FALSE"
group = "overflow"
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    use quizscore_core::parser::{parse_answer_set_str, validate_answer_set};

    #[test]
    fn example_answer_set_is_valid() {
        let set = parse_answer_set_str(EXAMPLE_ANSWER_SET, &PathBuf::from("example.toml")).unwrap();
        assert_eq!(set.answers.len(), 6);
        assert!(validate_answer_set(&set).is_empty());
    }

    #[test]
    fn sample_config_parses() {
        let config: crate::config::QuizscoreConfig = toml::from_str(SAMPLE_CONFIG).unwrap();
        assert_eq!(config.precision, 4);
    }
}
