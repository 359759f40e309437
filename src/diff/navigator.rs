use super::normalize::NormalizedDiff;
use super::offset::locate;
use super::types::{DiffKind, Position};

/// A change resolved back to where it sits in both the text and the views
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedChange {
    /// Cursor position in the change list
    pub index: usize,
    pub kind: DiffKind,
    /// Char offset in version A where the change starts
    pub char_index_a: usize,
    /// Index of the op in the full sequence, which is also its span index in
    /// each rendered view
    pub span_position: usize,
    pub position: Position,
}

impl ResolvedChange {
    /// Whether the change should be highlighted in the view of version A
    pub fn active_in_a(&self) -> bool {
        self.kind.in_a()
    }

    /// Whether the change should be highlighted in the view of version B
    pub fn active_in_b(&self) -> bool {
        self.kind.in_b()
    }
}

/// Cursor over the change list of the current diff
#[derive(Debug, Default, Clone)]
pub struct Navigator {
    current: usize,
    last_len: usize,
}

impl Navigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> usize {
        self.current
    }

    /// Called once per diff run with the new change count. The cursor is
    /// reset only if the count changed, so re-diffing an equivalent edit
    /// keeps the user's place.
    pub fn sync(&mut self, len: usize) {
        if len != self.last_len {
            self.current = 0;
        }
        self.last_len = len;
    }

    /// Move the cursor by `delta` and resolve the change it lands on.
    ///
    /// Wraps around at most once: stepping below zero lands on the last
    /// change and stepping past the end lands on the first.
    pub fn step(
        &mut self,
        delta: isize,
        diff: &NormalizedDiff,
        text_a: &str,
    ) -> Option<ResolvedChange> {
        let len = diff.change_count();
        if len == 0 {
            return None;
        }

        let moved = (self.current as isize).saturating_add(delta);
        self.current = if moved < 0 {
            len - 1
        } else if moved as usize >= len {
            0
        } else {
            moved as usize
        };

        let span_position = diff.changes[self.current];
        let target = diff.full.get(span_position)?;

        let char_index_a = diff.full[..span_position]
            .iter()
            .filter(|op| op.kind.in_a())
            .map(|op| op.char_len())
            .sum();

        Some(ResolvedChange {
            index: self.current,
            kind: target.kind,
            char_index_a,
            span_position,
            position: locate(text_a, char_index_a),
        })
    }
}
