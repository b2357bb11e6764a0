use indexmap::IndexMap;

use crate::config::{WrapperConfig, config_tokens};

use super::helpers::{is_positional, render_option, split_option_token};
use super::table::{KnownOption, Rewrite};
use super::types::{ArgumentError, BOUNDARY, ParseResult, SHARD_HEADER, TEST_ARTIFACTS_SUBDIR};

/// Translates `argv` (program name excluded) in a single left-to-right pass.
///
/// A recognized option given more than once keeps the slot of its first
/// occurrence and the value of its last. Everything after the first `--` is
/// forwarded literally.
pub fn translate(argv: &[String]) -> Result<ParseResult, ArgumentError> {
    let mut scan = Scan::default();
    scan.take_argv(argv)?;
    Ok(scan.finish())
}

/// Like [`translate`], with the config-derived options applied first.
/// Command-line values override config values without moving their slot.
///
/// Config tokens are scanned on their own and must all be complete wrapper
/// options, so they can never reach the executable or the inner arguments.
pub fn translate_with_config(
    cfg: &WrapperConfig,
    argv: &[String],
) -> Result<ParseResult, ArgumentError> {
    let mut scan = Scan::default();
    scan.take_config_tokens(&config_tokens(cfg))?;
    scan.take_argv(argv)?;
    Ok(scan.finish())
}

/// Checks that `tokens` are usable as config-supplied wrapper options.
pub fn check_config_tokens(tokens: &[String]) -> Result<(), ArgumentError> {
    Scan::default().take_config_tokens(tokens)
}

#[derive(Debug, Default)]
struct Scan {
    options: IndexMap<&'static str, Option<String>>,
    executable: Option<String>,
    passthrough: Vec<String>,
    output_dir: Option<String>,
    store_test_artifacts: bool,
}

impl Scan {
    fn take_argv(&mut self, argv: &[String]) -> Result<(), ArgumentError> {
        let mut index = 0usize;
        while index < argv.len() {
            let token = argv[index].as_str();
            if token == BOUNDARY {
                self.take_after_boundary(&argv[index + 1..]);
                break;
            }
            let next = argv.get(index + 1).map(String::as_str);
            index += 1 + self.take_token(token, next)?;
        }
        Ok(())
    }

    /// Values must come from `tokens` themselves; a trailing value-taking
    /// option is a missing value, not a claim on the command line.
    fn take_config_tokens(&mut self, tokens: &[String]) -> Result<(), ArgumentError> {
        let mut index = 0usize;
        while index < tokens.len() {
            let token = tokens[index].as_str();
            let Some((option, inline_value)) = match_known_option(token) else {
                return Err(ArgumentError::NotAnOption {
                    token: token.to_string(),
                });
            };
            let next = tokens.get(index + 1).map(String::as_str);
            index += 1 + self.take_option(option, token, inline_value, next)?;
        }
        Ok(())
    }

    /// Returns how many tokens after `token` were consumed as its value.
    fn take_token(&mut self, token: &str, next: Option<&str>) -> Result<usize, ArgumentError> {
        if let Some((option, inline_value)) = match_known_option(token) {
            return self.take_option(option, token, inline_value, next);
        }
        self.take_unrecognized(token);
        Ok(0)
    }

    fn take_option(
        &mut self,
        option: &'static KnownOption,
        token: &str,
        inline_value: Option<&str>,
        next: Option<&str>,
    ) -> Result<usize, ArgumentError> {
        let (value, consumed) = if option.takes_value {
            let (value, consumed) = option_value(token, inline_value, next)?;
            (Some(value), consumed)
        } else {
            (None, 0)
        };

        match option.rewrite {
            Rewrite::StoreTestArtifacts => self.store_test_artifacts = true,
            Rewrite::OutputDir => {
                self.output_dir = value.clone();
                self.options.insert(option.output_flag(), value);
            }
            Rewrite::Forward(flag) => {
                self.options.insert(flag, value);
            }
        }
        Ok(consumed)
    }

    fn take_unrecognized(&mut self, token: &str) {
        if self.executable.is_none() && is_positional(token) {
            self.executable = Some(token.to_string());
        } else {
            self.passthrough.push(token.to_string());
        }
    }

    fn take_after_boundary(&mut self, rest: &[String]) {
        rest.iter().for_each(|token| self.take_unrecognized(token));
    }

    fn finish(self) -> ParseResult {
        let rewritten_options = self
            .options
            .iter()
            .map(|(flag, value)| render_option(flag, value.as_deref()))
            .collect::<Vec<_>>();
        let test_artifacts_dir = if self.store_test_artifacts {
            self.output_dir.as_deref().and_then(test_artifacts_dir_for)
        } else {
            None
        };

        let result = ParseResult {
            wrapper_args: vec![],
            rewritten_options,
            executable: self.executable,
            passthrough_args: self.passthrough,
            output_dir: self.output_dir,
            test_artifacts_dir,
        };
        ParseResult {
            wrapper_args: assemble_wrapper_args(&result),
            ..result
        }
    }
}

fn assemble_wrapper_args(result: &ParseResult) -> Vec<String> {
    let inner_args = result.inner_args();
    let mut wrapper_args = SHARD_HEADER
        .iter()
        .map(|s| s.to_string())
        .collect::<Vec<_>>();
    wrapper_args.extend(result.rewritten_options.iter().cloned());
    wrapper_args.extend(result.executable.iter().cloned());
    if !inner_args.is_empty() {
        wrapper_args.push(BOUNDARY.to_string());
        wrapper_args.extend(inner_args);
    }
    wrapper_args
}

fn match_known_option(token: &str) -> Option<(&'static KnownOption, Option<&str>)> {
    let (name, inline_value) = split_option_token(token)?;
    let option = KnownOption::lookup(name)?;
    if inline_value.is_some() && !option.takes_value {
        return None;
    }
    Some((option, inline_value))
}

fn option_value(
    token: &str,
    inline_value: Option<&str>,
    next: Option<&str>,
) -> Result<(String, usize), ArgumentError> {
    if let Some(value) = inline_value {
        return Ok((value.to_string(), 0));
    }
    match next {
        Some(value) if value != BOUNDARY => Ok((value.to_string(), 1)),
        _ => Err(ArgumentError::MissingValue {
            flag: token.to_string(),
        }),
    }
}

fn test_artifacts_dir_for(output_dir: &str) -> Option<String> {
    if output_dir.is_empty() {
        return None;
    }
    let base = output_dir.trim_end_matches('/');
    Some(format!("{base}/{TEST_ARTIFACTS_SUBDIR}"))
}
