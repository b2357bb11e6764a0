use std::ffi::OsString;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use gtest_wrapper::args::translate_with_config;
use gtest_wrapper::config::{WrapperConfig, load_wrapper_config};
use gtest_wrapper::diagnostics_trace::maybe_write_translate_trace;
use gtest_wrapper::render::{render_command_line, render_json, render_lines};

const LOG_PREFIX: &str = "gtest-parallel-wrapper";
const GTEST_PARALLEL_PROGRAM: &str = "gtest-parallel";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputFormat {
    Lines,
    Json,
    Shell,
}

fn env_flag_enabled(key: &str) -> bool {
    std::env::var(key)
        .ok()
        .is_some_and(|value| !value.trim().is_empty() && value.trim() != "0")
}

fn output_format() -> OutputFormat {
    match std::env::var("GTEST_WRAPPER_FORMAT")
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase()
        .as_str()
    {
        "json" => OutputFormat::Json,
        "shell" => OutputFormat::Shell,
        _ => OutputFormat::Lines,
    }
}

fn load_config(cwd: &std::path::Path) -> (WrapperConfig, Option<PathBuf>) {
    match load_wrapper_config(cwd) {
        Ok(loaded) => loaded,
        Err(err) => {
            eprintln!("{LOG_PREFIX}: warning: ignoring config: {err}");
            (WrapperConfig::default(), None)
        }
    }
}

fn utf8_argv() -> Result<Vec<String>, OsString> {
    std::env::args_os().skip(1).map(OsString::into_string).collect()
}

fn main() -> ExitCode {
    let argv = match utf8_argv() {
        Ok(argv) => argv,
        Err(arg) => {
            eprintln!(
                "{LOG_PREFIX}: error: argument is not valid UTF-8: {}",
                arg.to_string_lossy()
            );
            return ExitCode::from(2);
        }
    };
    if matches!(argv.as_slice(), [only] if only == "--help" || only == "-h") {
        print!("{}", gtest_wrapper::help::help_text());
        return ExitCode::SUCCESS;
    }

    let started_at = Instant::now();
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let (cfg, config_path) = load_config(&cwd);
    let verbose = env_flag_enabled("GTEST_WRAPPER_VERBOSE") || cfg.verbose == Some(true);
    if verbose {
        eprintln!(
            "{LOG_PREFIX}: config={}",
            config_path
                .as_deref()
                .map(|p| p.to_string_lossy().to_string())
                .unwrap_or_else(|| "<none>".to_string())
        );
    }

    let translated = translate_with_config(&cfg, &argv);
    maybe_write_translate_trace(
        &argv,
        config_path.as_deref(),
        translated.as_ref().map_err(|err| err.to_string()),
        Some(started_at),
    );
    let result = match translated {
        Ok(result) => result,
        Err(err) => {
            eprintln!("{LOG_PREFIX}: error: {err}");
            return ExitCode::from(2);
        }
    };

    if verbose {
        eprintln!(
            "{LOG_PREFIX}: Translated command: {}",
            render_command_line(GTEST_PARALLEL_PROGRAM, &result.wrapper_args)
        );
    }

    match output_format() {
        OutputFormat::Lines => print!("{}", render_lines(&result)),
        OutputFormat::Shell => println!(
            "{}",
            render_command_line(GTEST_PARALLEL_PROGRAM, &result.wrapper_args)
        ),
        OutputFormat::Json => match render_json(&result) {
            Ok(json) => println!("{json}"),
            Err(err) => {
                eprintln!("{LOG_PREFIX}: error: {err}");
                return ExitCode::FAILURE;
            }
        },
    }
    ExitCode::SUCCESS
}
