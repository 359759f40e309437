//! Diff model: engine output turned into navigable changes, stats and
//! per-version render spans.

mod engine;
mod navigator;
mod normalize;
mod offset;
mod render;
mod stats;
mod types;

pub use engine::DiffEngine;
pub use navigator::{Navigator, ResolvedChange};
pub use normalize::{NormalizedDiff, normalize};
pub use offset::locate;
pub use render::{
    RenderSpan, SpanRole, build_spans, display_text, gutter_text, line_count, visible_text,
};
pub use stats::{PositionStats, compute_stats, format_percentage};
pub use types::{DiffKind, DiffOp, Position, Side};
