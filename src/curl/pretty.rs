//! Terminal colorization for generated commands

const RESET: &str = "\x1b[0m";
const GREEN: &str = "\x1b[32m";
const CYAN: &str = "\x1b[36m";
const BOLD_YELLOW: &str = "\x1b[1;33m";

/// Format a curl command with syntax highlighting for the terminal
///
/// Quoted values are green, flags cyan and the leading binary bold yellow.
/// Stripping the escape codes yields the input unchanged.
pub fn format_curl_pretty(cmd: &str) -> String {
    let mut result = String::with_capacity(cmd.len() * 2);

    let rest = match cmd.strip_prefix(super::CURL_BINARY) {
        Some(rest) => {
            result.push_str(BOLD_YELLOW);
            result.push_str(super::CURL_BINARY);
            result.push_str(RESET);
            rest
        }
        None => cmd,
    };

    let mut in_string = false;
    let mut at_word_start = true;
    let mut chars = rest.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '\'' && !in_string {
            in_string = true;
            result.push_str(GREEN);
            result.push(c);
        } else if c == '\'' && in_string {
            in_string = false;
            result.push(c);
            result.push_str(RESET);
        } else if !in_string && c == '\\' && chars.peek() == Some(&'\'') {
            // escaped quote between two quoted runs
            result.push(c);
            result.push('\'');
            chars.next();
        } else if !in_string && c == '-' && at_word_start {
            result.push_str(CYAN);
            result.push(c);
            while let Some(&next) = chars.peek() {
                if next.is_alphanumeric() || next == '-' {
                    result.push(next);
                    chars.next();
                } else {
                    break;
                }
            }
            result.push_str(RESET);
        } else {
            result.push(c);
        }
        at_word_start = !in_string && c == ' ';
    }

    result
}
