//! Status and interpretation classification rule tables.

use crate::diagnostics::{DiagnosticEvent, DiagnosticSink};

/// Derive the CNV status code from the type tag and the equivocal flag.
///
/// "partial amplification" maps to "gain" whether equivocal or not. An
/// unrecognized or absent type yields an empty status and a diagnostic;
/// extraction continues.
pub fn copy_number_status(
    copy_type: Option<&str>,
    equivocal: bool,
    sink: &mut dyn DiagnosticSink,
) -> String {
    match (copy_type, equivocal) {
        (Some("amplification"), true) => "gain".to_string(),
        (Some("amplification"), false) => "amplification".to_string(),
        (Some("loss"), true) => "partial_loss".to_string(),
        (Some("loss"), false) => "loss".to_string(),
        (Some("partial amplification"), _) => "gain".to_string(),
        (other, equivocal) => {
            sink.record(DiagnosticEvent::UnrecognizedCopyType {
                copy_type: other.map(str::to_string),
                equivocal,
            });
            String::new()
        }
    }
}

/// Map the interpretation-status tag to its clinical label.
///
/// The tag is optional, so an absent one is silently an empty label;
/// only a present-but-unrecognized tag produces a diagnostic.
pub fn interpretation_label(status: Option<&str>, sink: &mut dyn DiagnosticSink) -> String {
    match status {
        Some("known") => "Pathogenic".to_string(),
        Some("likely") => "Likely pathogenic".to_string(),
        Some("unknown") => "Uncertain significance".to_string(),
        Some("ambiguous") => "other".to_string(),
        Some(tag) => {
            sink.record(DiagnosticEvent::UnrecognizedInterpretation {
                status: tag.to_string(),
            });
            String::new()
        }
        None => String::new(),
    }
}
