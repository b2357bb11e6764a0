use super::types::BOUNDARY;

/// Splits an option-looking token into its name and inline value.
///
/// `--name=value` splits at the first `=`; short tokens (`-d`) are returned
/// whole so that attached forms like `-d/tmp` never match a table entry.
/// Positionals and the bare boundary yield `None`.
pub(super) fn split_option_token(token: &str) -> Option<(&str, Option<&str>)> {
    if token == BOUNDARY || !token.starts_with('-') {
        return None;
    }
    if !token.starts_with("--") {
        return Some((token, None));
    }
    let Some((name, value)) = token.split_once('=') else {
        return Some((token, None));
    };
    Some((name, Some(value)))
}

pub(super) fn is_positional(token: &str) -> bool {
    !token.starts_with('-')
}

pub(super) fn render_option(flag: &str, value: Option<&str>) -> String {
    match value {
        Some(value) => format!("{flag}={value}"),
        None => flag.to_string(),
    }
}
