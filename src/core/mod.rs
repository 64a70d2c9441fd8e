pub mod platform;
pub mod types;

pub use platform::{OsKind, PlatformProfile};
pub use types::{Diagnostic, DiagnosticLevel, InstallOutcome, PipelineResult};
