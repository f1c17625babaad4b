/// Escapes text for use inside a PDF literal string `( ... )`.
///
/// Backslashes and both parentheses are escaped, then `\r\n` and lone `\r`
/// are normalised to `\n`. Nothing else is touched.
pub fn escape_text(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '\\' => escaped.push_str("\\\\"),
            '(' => escaped.push_str("\\("),
            ')' => escaped.push_str("\\)"),
            '\r' => {
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
                escaped.push('\n');
            }
            _ => escaped.push(ch),
        }
    }

    escaped
}
