use std::cmp::Reverse;
use std::path::{Path, PathBuf};

use super::workspace_scan::SourceScope;

pub const MAX_PHYSICAL_LINES: usize = 400;

const PANICKING_CALLS: [&str; 2] = [".unwrap()", ".expect("];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    TooLong {
        file_path: PathBuf,
        physical_lines: usize,
    },
    PanickingCall {
        file_path: PathBuf,
        line_number: usize,
        call: &'static str,
    },
}

fn read_source(path: &Path) -> String {
    std::fs::read_to_string(path).unwrap_or_else(|err| panic!("failed reading {path:?}: {err}"))
}

pub fn find_files_over_max_physical_lines(max_physical_lines: usize) -> Vec<Violation> {
    let mut sized = SourceScope::Workspace.rust_files()
        .into_iter()
        .map(|file_path| {
            let physical_lines = read_source(&file_path).lines().count();
            (file_path, physical_lines)
        })
        .filter(|(_, physical_lines)| *physical_lines > max_physical_lines)
        .collect::<Vec<_>>();
    sized.sort_by(|left, right| {
        (Reverse(left.1), &left.0).cmp(&(Reverse(right.1), &right.0))
    });
    sized
        .into_iter()
        .map(|(file_path, physical_lines)| Violation::TooLong {
            file_path,
            physical_lines,
        })
        .collect()
}

/// Library code propagates errors; `unwrap()`/`expect()` belong in tests only.
/// Lines inside a trailing `#[cfg(test)]` block are ignored.
pub fn find_panicking_calls_in_library() -> Vec<Violation> {
    SourceScope::Library.rust_files()
        .into_iter()
        .flat_map(|file_path| panicking_calls_in(&file_path, &read_source(&file_path)))
        .collect()
}

pub fn panicking_calls_in(file_path: &Path, source: &str) -> Vec<Violation> {
    source
        .lines()
        .take_while(|line| line.trim() != "#[cfg(test)]")
        .enumerate()
        .filter(|(_, line)| !line.trim_start().starts_with("//"))
        .flat_map(|(index, line)| {
            PANICKING_CALLS
                .into_iter()
                .filter(move |call| line.contains(call))
                .map(move |call| Violation::PanickingCall {
                    file_path: file_path.to_path_buf(),
                    line_number: index + 1,
                    call,
                })
        })
        .collect()
}

pub fn format_violation(violation: &Violation) -> String {
    match violation {
        Violation::TooLong {
            file_path,
            physical_lines,
        } => format!("{physical_lines} lines -> {}", file_path.display()),
        Violation::PanickingCall {
            file_path,
            line_number,
            call,
        } => format!("{}:{line_number}: {call}", file_path.display()),
    }
}
