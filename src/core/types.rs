use crate::ui;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticLevel {
    Success,
    Info,
    Warning,
    Error,
}

impl fmt::Display for DiagnosticLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success => write!(f, "success"),
            Self::Info => write!(f, "info"),
            Self::Warning => write!(f, "warning"),
            Self::Error => write!(f, "error"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub level: DiagnosticLevel,
    pub message: String,
}

impl Diagnostic {
    fn render(&self) {
        match self.level {
            DiagnosticLevel::Success => ui::success(&self.message),
            DiagnosticLevel::Info => ui::info(&self.message),
            DiagnosticLevel::Warning => ui::warning(&self.message),
            DiagnosticLevel::Error => ui::error(&self.message),
        }
    }
}

/// Result of one stage. Messages reach the terminal as they are recorded,
/// so they interleave correctly with streamed subprocess output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallOutcome {
    pub stage: &'static str,
    pub succeeded: bool,
    pub diagnostics: Vec<Diagnostic>,
}

impl InstallOutcome {
    /// Starts out successful; call [`InstallOutcome::fail`] to flip it.
    pub fn new(stage: &'static str) -> Self {
        Self {
            stage,
            succeeded: true,
            diagnostics: Vec::new(),
        }
    }

    pub fn push(&mut self, level: DiagnosticLevel, message: impl Into<String>) {
        let diagnostic = Diagnostic {
            level,
            message: message.into(),
        };
        diagnostic.render();
        self.diagnostics.push(diagnostic);
    }

    pub fn success(&mut self, message: impl Into<String>) {
        self.push(DiagnosticLevel::Success, message);
    }

    pub fn info(&mut self, message: impl Into<String>) {
        self.push(DiagnosticLevel::Info, message);
    }

    pub fn warning(&mut self, message: impl Into<String>) {
        self.push(DiagnosticLevel::Warning, message);
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.push(DiagnosticLevel::Error, message);
    }

    /// Record an error and mark the stage failed
    pub fn fail(&mut self, message: impl Into<String>) {
        self.error(message);
        self.succeeded = false;
    }

    /// Raw block (JSON, command output) printed verbatim and kept as info
    pub fn block(&mut self, block: impl Into<String>) {
        let block = block.into();
        ui::raw(&block);
        self.diagnostics.push(Diagnostic {
            level: DiagnosticLevel::Info,
            message: block,
        });
    }

    pub fn messages(&self) -> impl Iterator<Item = &str> {
        self.diagnostics.iter().map(|d| d.message.as_str())
    }

    pub fn has_message(&self, needle: &str) -> bool {
        self.messages().any(|m| m.contains(needle))
    }
}

/// Aggregate verdict of a pipeline run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineResult {
    pub outcomes: Vec<InstallOutcome>,
    /// Stage that halted the run, if any
    pub halted_at: Option<&'static str>,
}

impl PipelineResult {
    pub fn succeeded(&self) -> bool {
        self.halted_at.is_none()
    }

    /// 0 when every gating stage passed, 1 otherwise
    pub fn exit_code(&self) -> i32 {
        if self.succeeded() { 0 } else { 1 }
    }

    pub fn outcome(&self, stage: &str) -> Option<&InstallOutcome> {
        self.outcomes.iter().find(|o| o.stage == stage)
    }
}
