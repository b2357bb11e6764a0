use serde::Serialize;
use thiserror::Error;

/// Single-shard defaults. Sharding is owned by whoever launches the wrapper.
pub const SHARD_HEADER: [&str; 2] = ["--shard_index=0", "--shard_count=1"];

pub const BOUNDARY: &str = "--";

pub const TEST_ARTIFACTS_SUBDIR: &str = "test_artifacts";

/// Flag of the inner test executable that receives the derived artifacts dir.
pub const TEST_ARTIFACTS_FLAG: &str = "--test_artifacts_dir";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ArgumentError {
    #[error("option {flag} expects a value")]
    MissingValue { flag: String },

    #[error("config token {token:?} is not a wrapper option")]
    NotAnOption { token: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParseResult {
    /// Complete gtest-parallel argument vector, shard header first.
    pub wrapper_args: Vec<String>,
    /// Canonical `--name[=value]` forms of the recognized options, one per option.
    pub rewritten_options: Vec<String>,
    pub executable: Option<String>,
    /// Tokens the user addressed to the test executable, in input order.
    pub passthrough_args: Vec<String>,
    pub output_dir: Option<String>,
    pub test_artifacts_dir: Option<String>,
}

impl ParseResult {
    /// Arguments forwarded to the test executable after the `--` marker.
    pub fn inner_args(&self) -> Vec<String> {
        self.test_artifacts_dir
            .iter()
            .map(|dir| format!("{TEST_ARTIFACTS_FLAG}={dir}"))
            .chain(self.passthrough_args.iter().cloned())
            .collect()
    }
}
