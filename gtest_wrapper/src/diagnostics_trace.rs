use std::path::{Path, PathBuf};
use std::time::Instant;

use serde::Serialize;

use crate::args::ParseResult;

pub const DIAGNOSTICS_DIR_ENV: &str = "GTEST_WRAPPER_DIAGNOSTICS_DIR";

#[derive(Debug, Clone, Serialize)]
pub struct TranslateTrace<'a> {
    pub schema_version: u32,
    pub argv: &'a [String],
    pub config_path: Option<String>,
    pub written_at_unix_ms: Option<u128>,
    pub elapsed_ms: Option<u128>,
    pub result: Option<&'a ParseResult>,
    pub error: Option<String>,
}

fn diagnostics_dir() -> Option<PathBuf> {
    std::env::var(DIAGNOSTICS_DIR_ENV)
        .ok()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .map(PathBuf::from)
}

/// Best effort: a trace that cannot be written is dropped silently.
pub fn maybe_write_translate_trace(
    argv: &[String],
    config_path: Option<&Path>,
    outcome: Result<&ParseResult, String>,
    started_at: Option<Instant>,
) {
    let Some(dir) = diagnostics_dir() else {
        return;
    };
    let _ = write_translate_trace(&dir, argv, config_path, outcome, started_at);
}

pub fn write_translate_trace(
    dir: &Path,
    argv: &[String],
    config_path: Option<&Path>,
    outcome: Result<&ParseResult, String>,
    started_at: Option<Instant>,
) -> std::io::Result<PathBuf> {
    std::fs::create_dir_all(dir)?;
    let trace_path = dir.join("translate_trace.json");

    let written_at_unix_ms = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .ok()
        .map(|d| d.as_millis());
    let (result, error) = match outcome {
        Ok(result) => (Some(result), None),
        Err(message) => (None, Some(message)),
    };

    let trace = TranslateTrace {
        schema_version: 1,
        argv,
        config_path: config_path.map(|p| p.to_string_lossy().to_string()),
        written_at_unix_ms,
        elapsed_ms: started_at.map(|t| t.elapsed().as_millis()),
        result,
        error,
    };
    let json = serde_json::to_string_pretty(&trace).map_err(std::io::Error::other)?;
    std::fs::write(&trace_path, json)?;
    Ok(trace_path)
}
