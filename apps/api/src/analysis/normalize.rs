//! Whitespace normalization for raw extracted text.

/// Collapses PDF extraction artifacts while preserving line structure for
/// section detection: trims each line, squeezes interior whitespace runs to a
/// single space, drops blank lines, rejoins with `\n` in original order.
///
/// Empty input yields empty output; there are no error conditions.
pub fn normalize(text: &str) -> String {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(collapse_spaces)
        .collect::<Vec<_>>()
        .join("\n")
}

fn collapse_spaces(line: &str) -> String {
    line.split_whitespace().collect::<Vec<_>>().join(" ")
}
