use super::types::{DiffKind, DiffOp};
use serde::{Deserialize, Serialize};
use similar::{Algorithm, ChangeTag};

/// The diff algorithm used to compare the two versions.
///
/// Every engine returns an ordered op sequence whose Equal/Delete texts
/// rebuild version A and whose Equal/Insert texts rebuild version B.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiffEngine {
    /// Character diff followed by a semantic cleanup pass (human readable)
    #[default]
    Semantic,
    /// Raw Myers character diff
    Chars,
    /// Myers diff over words
    Words,
    /// Myers diff over whole lines
    Lines,
}

impl DiffEngine {
    pub const ALL: [DiffEngine; 4] = [
        DiffEngine::Semantic,
        DiffEngine::Chars,
        DiffEngine::Words,
        DiffEngine::Lines,
    ];

    pub fn label(self) -> &'static str {
        match self {
            DiffEngine::Semantic => "Semantic",
            DiffEngine::Chars => "Characters",
            DiffEngine::Words => "Words",
            DiffEngine::Lines => "Lines",
        }
    }

    /// Run the engine over `old` and `new`
    pub fn compute(self, old: &str, new: &str) -> Vec<DiffOp> {
        match self {
            DiffEngine::Semantic => dissimilar::diff(old, new)
                .into_iter()
                .map(|chunk| match chunk {
                    dissimilar::Chunk::Equal(text) => DiffOp::new(DiffKind::Equal, text),
                    dissimilar::Chunk::Delete(text) => DiffOp::new(DiffKind::Delete, text),
                    dissimilar::Chunk::Insert(text) => DiffOp::new(DiffKind::Insert, text),
                })
                .collect(),
            DiffEngine::Chars => {
                coalesce(similar::utils::diff_chars(Algorithm::Myers, old, new))
            }
            DiffEngine::Words => {
                coalesce(similar::utils::diff_words(Algorithm::Myers, old, new))
            }
            DiffEngine::Lines => {
                coalesce(similar::utils::diff_lines(Algorithm::Myers, old, new))
            }
        }
    }
}

/// Merge adjacent runs of the same tag so each op is one contiguous hunk
fn coalesce(changes: Vec<(ChangeTag, &str)>) -> Vec<DiffOp> {
    let mut ops: Vec<DiffOp> = Vec::with_capacity(changes.len());

    for (tag, text) in changes {
        let kind = match tag {
            ChangeTag::Equal => DiffKind::Equal,
            ChangeTag::Delete => DiffKind::Delete,
            ChangeTag::Insert => DiffKind::Insert,
        };

        match ops.last_mut() {
            Some(last) if last.kind == kind => last.text.push_str(text),
            _ => ops.push(DiffOp::new(kind, text)),
        }
    }

    ops
}
