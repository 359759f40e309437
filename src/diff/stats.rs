use super::offset::locate;
use super::types::{DiffKind, DiffOp, Position};

#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct PositionStats {
    /// Share of the combined length of both versions that is not shared
    pub percentage: f64,
    /// Char offset in version A where the first change starts
    pub first_change_offset: Option<usize>,
    pub first_change: Option<Position>,
}

impl PositionStats {
    /// Percentage with two decimals, e.g. `14.29%`
    pub fn percentage_label(&self) -> String {
        format_percentage(self.percentage)
    }
}

pub fn format_percentage(percentage: f64) -> String {
    format!("{:.2}%", percentage)
}

/// Calculate the change percentage and first change position.
///
/// Lengths are counted in chars, version B's from the ops that rebuild it.
/// Every equal char appears once in each version, so it is subtracted twice
/// from the combined total.
pub fn compute_stats(full: &[DiffOp], text_a: &str) -> PositionStats {
    let mut equal_chars = 0usize;
    let mut offset_a = 0usize;
    let mut len_b = 0usize;
    let mut first_change_offset = None;

    for op in full {
        let len = op.char_len();

        if op.kind != DiffKind::Equal && first_change_offset.is_none() {
            first_change_offset = Some(offset_a);
        }
        if op.kind == DiffKind::Equal {
            equal_chars += len;
        }
        if op.kind.in_a() {
            offset_a += len;
        }
        if op.kind.in_b() {
            len_b += len;
        }
    }

    let total = text_a.chars().count() + len_b;
    let diff_len = total.saturating_sub(2 * equal_chars);
    let percentage = if total > 0 {
        100.0 * diff_len as f64 / total as f64
    } else {
        0.0
    };

    PositionStats {
        percentage,
        first_change_offset,
        first_change: first_change_offset.map(|offset| locate(text_a, offset)),
    }
}
