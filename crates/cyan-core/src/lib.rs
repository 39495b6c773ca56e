//! Cyan Core - Template metadata prompts for CyanPrint
//!
//! This library asks a template author for their template's metadata,
//! validates every answer, and assembles the descriptor a CyanPrint render
//! host consumes (which files to template-expand, which to copy, and the
//! variables to substitute).
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! - **Layer 1: Validation** - Pure field checks (`validate`)
//! - **Layer 2: Orchestration** - The `Prompter` seam, the fixed question flow and
//!   descriptor assembly driven by a `TemplateProfile`
//! - **Layer 3: CLI/TUI Interface** - Optional cliclack-based prompter (feature-gated)
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based TUI prompts module
//!
//! # Example Usage (without TUI)
//!
//! ```
//! use cyan_core::{orchestrator, CyanProfile, ScriptedPrompter};
//!
//! let mut prompter = ScriptedPrompter::new([
//!     "alice", "my-template", "desc", "a@b.com", "no", "https://p.com", "https://s.com",
//! ]);
//! let descriptor = orchestrator::run(&CyanProfile, &mut prompter).unwrap();
//! assert_eq!(descriptor.processors[0].config.vars["tags"], "[]");
//! ```

pub mod descriptor;
pub mod orchestrator;
pub mod profile;
pub mod prompt;
pub mod validate;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use descriptor::{Descriptor, FileRule, GlobType, Plugin, Processor, ProcessorConfig};
pub use orchestrator::{collect_answers, Answers};
pub use profile::{CyanProfile, TemplateProfile};
pub use prompt::{
    Field, PresetAnswers, PresetPrompter, Prompter, Question, QuestionKind, ScriptedPrompter,
};
pub use validate::{check_email, check_identifier, check_reference, check_url, FieldError, Rule};

#[cfg(feature = "tui")]
pub use tui::run;
