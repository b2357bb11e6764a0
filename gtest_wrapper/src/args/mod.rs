//! Translation of a loosely ordered wrapper command line into the argument
//! vector handed to gtest-parallel.
//!
//! Only the options in [`KNOWN_OPTIONS`] are interpreted. Every other token is
//! either the test executable (first bare positional) or belongs to it, and is
//! forwarded after a `--` marker.

mod helpers;
mod table;
mod translate;
mod types;

pub use table::{KNOWN_OPTIONS, KnownOption, Rewrite};
pub use translate::{check_config_tokens, translate, translate_with_config};
pub use types::{
    ArgumentError, BOUNDARY, ParseResult, SHARD_HEADER, TEST_ARTIFACTS_FLAG, TEST_ARTIFACTS_SUBDIR,
};
