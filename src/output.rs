//! Rendering parsed pipelines for the inspector binary.

use crate::pipeline::Pipeline;
use thiserror::Error;

/// Errors that can occur when rendering a pipeline.
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("failed to serialize pipeline: {0}")]
    Json(#[from] serde_json::Error),
}

/// Format a pipeline as human-readable text, one line per stage.
///
/// Arguments are debug-quoted so empty arguments and embedded whitespace
/// stay visible.
pub fn format_plain(pipeline: &Pipeline) -> String {
    let mut out = String::new();
    for (i, stage) in pipeline.stages().iter().enumerate() {
        out.push_str(&format!("stage {}:", i + 1));
        for arg in stage.args() {
            out.push_str(&format!(" {arg:?}"));
        }
        out.push('\n');
    }
    out
}

/// Format a pipeline as a JSON array of arrays of strings.
pub fn format_json(pipeline: &Pipeline) -> Result<String, OutputError> {
    Ok(serde_json::to_string(pipeline)?)
}
