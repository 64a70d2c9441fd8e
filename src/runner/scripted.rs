use super::{CommandOutcome, CommandRunner, CommandSpec, OutputMode};
use crate::error::{InstallerError, Result};
use std::cell::RefCell;

enum Response {
    Outcome(CommandOutcome),
    NotFound,
}

/// Canned responses keyed by argv prefix, with a log of every call.
///
/// Rules are matched in insertion order; the first rule whose words are a
/// prefix of `program args...` wins. Unmatched commands succeed with empty
/// output.
#[derive(Default)]
pub struct ScriptedRunner {
    rules: Vec<(Vec<String>, Response)>,
    calls: RefCell<Vec<(CommandSpec, OutputMode)>>,
}

impl ScriptedRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer commands starting with `prefix` (space separated words).
    pub fn on(mut self, prefix: &str, outcome: CommandOutcome) -> Self {
        self.rules.push((split_words(prefix), Response::Outcome(outcome)));
        self
    }

    /// Pretend the program behind `prefix` is not installed.
    pub fn missing(mut self, prefix: &str) -> Self {
        self.rules.push((split_words(prefix), Response::NotFound));
        self
    }

    pub fn calls(&self) -> Vec<(CommandSpec, OutputMode)> {
        self.calls.borrow().clone()
    }

    /// Rendered command lines, in call order
    pub fn command_lines(&self) -> Vec<String> {
        self.calls
            .borrow()
            .iter()
            .map(|(spec, _)| {
                std::iter::once(spec.program.as_str())
                    .chain(spec.args.iter().map(String::as_str))
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect()
    }

    pub fn was_called(&self, prefix: &str) -> bool {
        let words = split_words(prefix);
        self.calls
            .borrow()
            .iter()
            .any(|(spec, _)| matches_prefix(spec, &words))
    }
}

impl CommandRunner for ScriptedRunner {
    fn run(&self, spec: &CommandSpec, mode: OutputMode) -> Result<CommandOutcome> {
        self.calls.borrow_mut().push((spec.clone(), mode));

        let rule = self
            .rules
            .iter()
            .find(|(words, _)| matches_prefix(spec, words));

        match rule {
            Some((_, Response::Outcome(outcome))) => Ok(outcome.clone()),
            Some((_, Response::NotFound)) => Err(InstallerError::DependencyMissing(format!(
                "'{}' not found on PATH",
                spec.program
            ))),
            None => Ok(CommandOutcome::ok("")),
        }
    }
}

fn split_words(prefix: &str) -> Vec<String> {
    prefix.split_whitespace().map(str::to_string).collect()
}

fn matches_prefix(spec: &CommandSpec, words: &[String]) -> bool {
    let argv = std::iter::once(&spec.program).chain(spec.args.iter());
    words.len() <= spec.args.len() + 1 && argv.zip(words).all(|(a, w)| a == w)
}
