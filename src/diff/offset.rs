use super::types::Position;

/// Map a char offset within `text` to a 1-based line/column.
///
/// Offsets past the end are clamped to the end of the text.
pub fn locate(text: &str, offset: usize) -> Position {
    let mut line = 1;
    let mut col = 1;

    for c in text.chars().take(offset) {
        if c == '\n' {
            line += 1;
            col = 1;
        } else {
            col += 1;
        }
    }

    Position { line, col }
}
