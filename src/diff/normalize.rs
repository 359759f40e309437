use super::types::{DiffKind, DiffOp};

/// The full op sequence together with the navigable changes inside it
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizedDiff {
    /// Every op in engine order. `full[i].index == i`.
    pub full: Vec<DiffOp>,
    /// Indices into `full` of the non-equal ops, in order
    pub changes: Vec<usize>,
}

impl NormalizedDiff {
    pub fn is_empty(&self) -> bool {
        self.full.is_empty()
    }

    pub fn change_count(&self) -> usize {
        self.changes.len()
    }

    /// The op behind the `n`th change
    pub fn change(&self, n: usize) -> Option<&DiffOp> {
        self.changes.get(n).and_then(|&index| self.full.get(index))
    }
}

/// Split engine output into the full sequence and its change list.
///
/// Nothing is reordered or dropped; each op is stamped with its position so
/// the change list can refer back to it.
pub fn normalize(ops: Vec<DiffOp>) -> NormalizedDiff {
    let mut full = ops;
    let mut changes = Vec::new();

    for (index, op) in full.iter_mut().enumerate() {
        op.index = index;
        if op.kind != DiffKind::Equal {
            changes.push(index);
        }
    }

    NormalizedDiff { full, changes }
}
