//! Template profile trait
//!
//! This trait defines the fixed strings the descriptor is assembled from, so
//! a binary can point the processor at a different root or config file
//! without touching the prompt flow.

/// Configuration trait for the emitted descriptor
///
/// Each profile defines:
/// - Identity shown in the interactive banner
/// - The processor name handed to the render host
/// - Where template files live and which one is template-expanded
pub trait TemplateProfile {
    /// Human-readable display name
    fn display_name(&self) -> &'static str;

    /// Name of the single processor in the descriptor
    fn processor_name(&self) -> &'static str;

    /// Directory, relative to the template, holding the files to emit
    fn template_root(&self) -> &'static str;

    /// The one file that is template-expanded; everything else is copied
    fn config_file(&self) -> &'static str;

    /// Glob matching every file to copy verbatim
    fn copy_glob(&self) -> &'static str {
        "**/*"
    }
}

/// The CyanPrint template-creation profile
#[derive(Debug, Clone, Copy, Default)]
pub struct CyanProfile;

impl TemplateProfile for CyanProfile {
    fn display_name(&self) -> &'static str {
        "CyanPrint template"
    }

    fn processor_name(&self) -> &'static str {
        "cyan/default"
    }

    fn template_root(&self) -> &'static str {
        "template"
    }

    fn config_file(&self) -> &'static str {
        "cyan.yaml"
    }
}
