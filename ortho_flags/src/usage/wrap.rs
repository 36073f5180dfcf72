//! Greedy word wrapping for the usage screen.

/// Column at which paragraphs are wrapped.
pub(crate) const WRAP_AT_COLUMN: usize = 72;

/// Indentation of section contents.
pub(crate) const INDENT: &str = "    ";

/// Indentation of flag descriptions.
pub(crate) const FLAG_INDENT: &str = "        ";

/// Formats one paragraph at `indent`.
///
/// A paragraph starting with [`INDENT`] is preformatted: every line gets
/// `indent` prepended and nothing is wrapped. Any other paragraph is
/// wrapped at [`WRAP_AT_COLUMN`].
pub(crate) fn paragraph(text: &str, indent: &str) -> String {
    if text.starts_with(INDENT) {
        return text
            .lines()
            .map(|line| format!("{indent}{line}"))
            .collect::<Vec<_>>()
            .join("\n");
    }
    wrap(text, WRAP_AT_COLUMN, indent)
}

/// Wraps `text` so that no line exceeds `width` columns, `indent` included.
///
/// Whitespace runs collapse to one space. A word wider than the available
/// room sits alone on its line.
pub(crate) fn wrap(text: &str, width: usize, indent: &str) -> String {
    let room = width.saturating_sub(indent.chars().count());
    let mut lines = Vec::new();
    let mut line = String::new();
    let mut line_width = 0;
    for word in text.split_whitespace() {
        let word_width = word.chars().count();
        if line_width > 0 && line_width + 1 + word_width > room {
            lines.push(format!("{indent}{line}"));
            line.clear();
            line_width = 0;
        }
        if line_width > 0 {
            line.push(' ');
            line_width += 1;
        }
        line.push_str(word);
        line_width += word_width;
    }
    if line_width > 0 {
        lines.push(format!("{indent}{line}"));
    }
    lines.join("\n")
}
