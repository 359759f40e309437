#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiffKind {
    Equal,
    Insert,
    Delete,
}

impl DiffKind {
    /// Whether text of this kind belongs to version A (the left side)
    pub fn in_a(self) -> bool {
        matches!(self, DiffKind::Equal | DiffKind::Delete)
    }

    /// Whether text of this kind belongs to version B (the right side)
    pub fn in_b(self) -> bool {
        matches!(self, DiffKind::Equal | DiffKind::Insert)
    }
}

/// One unit of diff output.
///
/// `index` is the position of the op inside the full sequence. It is stamped
/// by [`super::normalize`] and is what change lists refer to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffOp {
    pub index: usize,
    pub kind: DiffKind,
    pub text: String,
}

impl DiffOp {
    pub fn new(kind: DiffKind, text: impl Into<String>) -> Self {
        Self {
            index: 0,
            kind,
            text: text.into(),
        }
    }

    /// Length in chars, which is the unit all offsets are measured in
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}

/// A 1-based line/column pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub line: usize,
    pub col: usize,
}

/// Which of the two versions a buffer, view or gutter belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    A,
    B,
}

impl Side {
    pub fn label(self) -> &'static str {
        match self {
            Side::A => "Version A",
            Side::B => "Version B",
        }
    }
}
