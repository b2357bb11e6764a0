use std::process::ExitCode;

use gtest_wrapper_tests::guards::source_rules::{
    MAX_PHYSICAL_LINES, find_files_over_max_physical_lines, find_panicking_calls_in_library,
    format_violation,
};

fn main() -> ExitCode {
    let violations = find_files_over_max_physical_lines(MAX_PHYSICAL_LINES)
        .into_iter()
        .chain(find_panicking_calls_in_library())
        .collect::<Vec<_>>();
    if violations.is_empty() {
        return ExitCode::SUCCESS;
    }

    let rendered = violations.iter().map(format_violation).collect::<Vec<_>>();
    eprintln!(
        "found {} source rule violations:\n{}",
        rendered.len(),
        rendered.join("\n")
    );
    ExitCode::FAILURE
}
