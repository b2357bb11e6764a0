use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::args::check_config_tokens;
use crate::error::WrapperError;

pub const CONFIG_PATH_ENV: &str = "GTEST_WRAPPER_CONFIG";

const CONFIG_FILE_NAMES: [&str; 6] = [
    "gtest-wrapper.json",
    "gtest-wrapper.json5",
    "gtest-wrapper.yaml",
    "gtest-wrapper.yml",
    ".gtest-wrapperrc.json",
    ".gtest-wrapperrc.yaml",
];

/// Defaults applied ahead of the command line. Every field maps onto a
/// recognized wrapper option, so the command line can override any of them.
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WrapperConfig {
    pub timeout: Option<f64>,
    pub output_dir: Option<String>,
    pub store_test_artifacts: Option<bool>,
    pub repeat: Option<u32>,
    pub workers: Option<u32>,
    pub retry_failed: Option<u32>,
    pub gtest_filter: Option<String>,
    pub also_run_disabled_tests: Option<bool>,
    pub extra_args: Option<Vec<String>>,
    pub verbose: Option<bool>,
}

pub fn config_tokens(cfg: &WrapperConfig) -> Vec<String> {
    let mut tokens: Vec<String> = vec![];
    cfg.timeout
        .into_iter()
        .for_each(|v| tokens.push(format!("--timeout={v}")));
    trimmed(cfg.output_dir.as_deref())
        .into_iter()
        .for_each(|dir| tokens.push(format!("--output_dir={dir}")));
    push_bool_flag(
        &mut tokens,
        cfg.store_test_artifacts == Some(true),
        "--store-test-artifacts",
    );
    cfg.repeat
        .into_iter()
        .for_each(|v| tokens.push(format!("--repeat={v}")));
    cfg.workers
        .into_iter()
        .for_each(|v| tokens.push(format!("--workers={v}")));
    cfg.retry_failed
        .into_iter()
        .for_each(|v| tokens.push(format!("--retry_failed={v}")));
    trimmed(cfg.gtest_filter.as_deref())
        .into_iter()
        .for_each(|filter| tokens.push(format!("--gtest_filter={filter}")));
    push_bool_flag(
        &mut tokens,
        cfg.also_run_disabled_tests == Some(true),
        "--gtest_also_run_disabled_tests",
    );
    cfg.extra_args
        .iter()
        .flatten()
        .cloned()
        .for_each(|arg| tokens.push(arg));
    tokens
}

fn push_bool_flag(tokens: &mut Vec<String>, should_push: bool, flag: &'static str) {
    if should_push {
        tokens.push(flag.to_string());
    }
}

fn trimmed(value: Option<&str>) -> Option<&str> {
    value.map(|s| s.trim()).filter(|s| !s.is_empty())
}

/// Explicit `GTEST_WRAPPER_CONFIG` path first, then the nearest config file
/// found walking up from `start`.
pub fn discover_config_path(start: &Path) -> Option<PathBuf> {
    if let Some(explicit) = std::env::var_os(CONFIG_PATH_ENV).filter(|v| !v.is_empty()) {
        return Some(PathBuf::from(explicit));
    }
    start.ancestors().find_map(config_path_in)
}

fn config_path_in(dir: &Path) -> Option<PathBuf> {
    CONFIG_FILE_NAMES
        .into_iter()
        .map(|name| dir.join(name))
        .find(|p| p.is_file())
}

/// Loads the discovered config, or the default when none exists.
pub fn load_wrapper_config(start: &Path) -> Result<(WrapperConfig, Option<PathBuf>), WrapperError> {
    let Some(path) = discover_config_path(start) else {
        return Ok((WrapperConfig::default(), None));
    };
    let cfg = load_wrapper_config_from_path(&path)?;
    Ok((cfg, Some(path)))
}

pub fn load_wrapper_config_from_path(path: &Path) -> Result<WrapperConfig, WrapperError> {
    let ext = path
        .extension()
        .and_then(|x| x.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let cfg = match ext.as_str() {
        "json" | "json5" => load_json_config(path)?,
        "yaml" | "yml" => load_yaml_config(path)?,
        _ => return Ok(WrapperConfig::default()),
    };
    check_config_tokens(&config_tokens(&cfg)).map_err(|err| WrapperError::ConfigParse {
        path: path.to_path_buf(),
        message: format!("extraArgs: {err}"),
    })?;
    Ok(cfg)
}

fn read_config_text(path: &Path) -> Result<String, WrapperError> {
    std::fs::read_to_string(path).map_err(|source| WrapperError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn load_json_config(path: &Path) -> Result<WrapperConfig, WrapperError> {
    let raw = read_config_text(path)?;
    json5::from_str::<WrapperConfig>(&raw)
        .or_else(|_| serde_json::from_str::<WrapperConfig>(&raw))
        .map_err(|err| WrapperError::ConfigParse {
            path: path.to_path_buf(),
            message: err.to_string(),
        })
}

fn load_yaml_config(path: &Path) -> Result<WrapperConfig, WrapperError> {
    let raw = read_config_text(path)?;
    serde_yaml::from_str::<WrapperConfig>(&raw).map_err(|err| WrapperError::ConfigParse {
        path: path.to_path_buf(),
        message: err.to_string(),
    })
}
