use similar_asserts::assert_eq;

use crate::args::{ArgumentError, translate_with_config};
use crate::config::WrapperConfig;

fn argv(tokens: &[&str]) -> Vec<String> {
    tokens.iter().map(|t| t.to_string()).collect()
}

fn expected(gtest_parallel_args: &[&str]) -> Vec<String> {
    ["--shard_index=0", "--shard_count=1"]
        .iter()
        .chain(gtest_parallel_args.iter())
        .map(|t| t.to_string())
        .collect()
}

fn with_extra_args(extra: &[&str]) -> WrapperConfig {
    WrapperConfig {
        extra_args: Some(argv(extra)),
        ..Default::default()
    }
}

#[test]
fn config_values_are_overridden_by_command_line_in_config_position() {
    let cfg = WrapperConfig {
        timeout: Some(30.0),
        output_dir: Some("/cfg/out".to_string()),
        store_test_artifacts: Some(true),
        ..Default::default()
    };
    let result =
        translate_with_config(&cfg, &argv(&["--workers=4", "exec", "-d", "/cli/out"])).unwrap();
    assert_eq!(
        result.wrapper_args,
        expected(&[
            "--timeout=30",
            "--output_dir=/cli/out",
            "--workers=4",
            "exec",
            "--",
            "--test_artifacts_dir=/cli/out/test_artifacts",
        ])
    );
}

#[test]
fn extra_args_boundary_is_rejected_before_command_line() {
    let err = translate_with_config(&with_extra_args(&["--"]), &argv(&["--timeout", "5", "exec"]))
        .unwrap_err();
    assert_eq!(
        err,
        ArgumentError::NotAnOption {
            token: "--".to_string()
        }
    );
}

#[test]
fn extra_args_positional_cannot_claim_executable() {
    let err =
        translate_with_config(&with_extra_args(&["base_test"]), &argv(&["exec"])).unwrap_err();
    assert_eq!(
        err,
        ArgumentError::NotAnOption {
            token: "base_test".to_string()
        }
    );
}

#[test]
fn extra_args_trailing_option_does_not_take_command_line_value() {
    let err = translate_with_config(&with_extra_args(&["--gtest_filter"]), &argv(&["exec", "--x"]))
        .unwrap_err();
    assert_eq!(
        err,
        ArgumentError::MissingValue {
            flag: "--gtest_filter".to_string()
        }
    );
}

#[test]
fn extra_args_unknown_flag_is_rejected() {
    let err = translate_with_config(&with_extra_args(&["--some_flag"]), &argv(&["exec"]))
        .unwrap_err();
    assert_eq!(
        err,
        ArgumentError::NotAnOption {
            token: "--some_flag".to_string()
        }
    );
}

#[test]
fn extra_args_split_option_is_complete_within_config() {
    let result = translate_with_config(
        &with_extra_args(&["--gtest_filter", "Suite.*", "-r", "2"]),
        &argv(&["exec", "--x", "--repeat=5"]),
    )
    .unwrap();
    assert_eq!(
        result.wrapper_args,
        expected(&["--gtest_filter=Suite.*", "--repeat=5", "exec", "--", "--x"])
    );
    assert_eq!(result.executable.as_deref(), Some("exec"));
}
