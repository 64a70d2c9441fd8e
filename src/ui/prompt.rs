//! Yes/no prompts
//!
//! Every interactive decision goes through [`Prompter`] so flows can be
//! driven from tests or from `--yes` / `--non-interactive`.

use colored::Colorize;
use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

pub trait Prompter {
    /// Ask a yes/no question. Blocks until an answer is available.
    fn confirm(&mut self, question: &str) -> bool;
}

/// Interprets a typed answer. Anything but `y`/`yes` is a no.
pub fn is_affirmative(input: &str) -> bool {
    let input = input.trim().to_lowercase();
    input == "y" || input == "yes"
}

/// Reads answers from stdin. Default answer is no.
#[derive(Debug, Default)]
pub struct TerminalPrompter;

impl Prompter for TerminalPrompter {
    fn confirm(&mut self, question: &str) -> bool {
        print!("{} {} [y/N] ", "?".yellow().bold(), question);

        if let Err(e) = io::stdout().flush() {
            eprintln!("\nWarning: Failed to flush terminal: {}", e);
            return false;
        }

        let mut input = String::new();
        match io::stdin().lock().read_line(&mut input) {
            // EOF: nobody is there to answer
            Ok(0) => {
                println!();
                false
            }
            Ok(_) => is_affirmative(&input),
            Err(e) => {
                eprintln!("\nWarning: Failed to read input: {}", e);
                false
            }
        }
    }
}

/// Answers every question the same way (`--yes`, `--non-interactive`).
#[derive(Debug, Clone, Copy)]
pub struct FixedPrompter {
    answer: bool,
}

impl FixedPrompter {
    pub fn new(answer: bool) -> Self {
        Self { answer }
    }
}

impl Prompter for FixedPrompter {
    fn confirm(&mut self, question: &str) -> bool {
        let shown = if self.answer { "yes" } else { "no" };
        crate::ui::info(&format!("{} [{}]", question, shown));
        self.answer
    }
}

/// Replays a fixed list of answers and records the questions asked.
/// Runs out to "no".
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    answers: VecDeque<bool>,
    asked: Vec<String>,
}

impl ScriptedPrompter {
    pub fn new(answers: &[bool]) -> Self {
        Self {
            answers: answers.iter().copied().collect(),
            asked: Vec::new(),
        }
    }

    pub fn asked(&self) -> &[String] {
        &self.asked
    }
}

impl Prompter for ScriptedPrompter {
    fn confirm(&mut self, question: &str) -> bool {
        self.asked.push(question.to_string());
        self.answers.pop_front().unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn affirmative_answers_are_case_insensitive() {
        assert!(is_affirmative("y"));
        assert!(is_affirmative("YES\n"));
        assert!(is_affirmative("  Yes "));
    }

    #[test]
    fn everything_else_is_no() {
        assert!(!is_affirmative(""));
        assert!(!is_affirmative("n"));
        assert!(!is_affirmative("yep"));
    }

    #[test]
    fn scripted_prompter_replays_then_defaults_to_no() {
        let mut prompter = ScriptedPrompter::new(&[true]);
        assert!(prompter.confirm("first?"));
        assert!(!prompter.confirm("second?"));
        assert_eq!(prompter.asked(), ["first?", "second?"]);
    }
}
