//! discern-export
//!
//! Report generation: an evaluation result is rendered to Markdown through
//! a Tera template, and the Markdown is laid out as a DOCX document.

pub mod docx;
pub mod error;
pub mod render;
pub mod styles;

use discern_core::models::evaluation::EvaluationResult;
use discern_core::models::session::SessionRecord;

use crate::error::ExportError;
use crate::styles::DocumentStyles;

/// Render the built-in report for a session and pack it as DOCX bytes.
pub fn report_docx(
    session: &SessionRecord,
    result: &EvaluationResult,
    generated_at: jiff::Timestamp,
    styles: &DocumentStyles,
) -> Result<Vec<u8>, ExportError> {
    let markdown = render::render_report(session, result, generated_at)?;
    let bytes = docx::generate_docx(&markdown, styles)?;
    tracing::info!(session_id = %session.id, bytes = bytes.len(), "report exported");
    Ok(bytes)
}
