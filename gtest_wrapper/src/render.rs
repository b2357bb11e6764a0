use crate::args::ParseResult;

pub fn render_lines(result: &ParseResult) -> String {
    result
        .wrapper_args
        .iter()
        .map(|arg| format!("{arg}\n"))
        .collect()
}

pub fn render_json(result: &ParseResult) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(result)
}

/// Joins `program` and `args` into a line a POSIX shell reads back as the
/// same argument vector.
pub fn render_command_line(program: &str, args: &[String]) -> String {
    std::iter::once(program)
        .chain(args.iter().map(String::as_str))
        .map(shell_quote)
        .collect::<Vec<_>>()
        .join(" ")
}

fn shell_quote(token: &str) -> String {
    let is_plain = !token.is_empty()
        && token
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "_@%+=:,./-".contains(c));
    if is_plain {
        return token.to_string();
    }
    format!("'{}'", token.replace('\'', r#"'\''"#))
}
