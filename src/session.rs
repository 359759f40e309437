//! Per-window diff state: both buffers and everything derived from them.

use crate::constant::PLACEHOLDER;
use crate::diff::{
    DiffEngine, Navigator, NormalizedDiff, PositionStats, RenderSpan, ResolvedChange, Side,
    build_spans, compute_stats, format_percentage, line_count, normalize, visible_text,
};
use tracing::debug;
use xxhash_rust::xxh64::Xxh64;

/// Strings shown in the status bar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine {
    pub percentage: String,
    pub line: String,
    pub col: String,
    pub change: String,
}

impl Default for StatusLine {
    fn default() -> Self {
        Self {
            percentage: format_percentage(0.0),
            line: PLACEHOLDER.to_string(),
            col: PLACEHOLDER.to_string(),
            change: "0/0".to_string(),
        }
    }
}

/// Rendered output for one version
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    pub spans: Vec<RenderSpan>,
    /// Lines in the rendered text, for the view's gutter
    pub lines: usize,
}

#[derive(Debug, Default)]
pub struct DiffSession {
    engine: DiffEngine,
    text_a: String,
    text_b: String,
    /// Line counts of the raw inputs, for the input gutters
    input_lines: [usize; 2],
    fingerprint: Option<u64>,
    diff: NormalizedDiff,
    view_a: ViewState,
    view_b: ViewState,
    stats: PositionStats,
    navigator: Navigator,
    active: Option<ResolvedChange>,
    status: StatusLine,
}

impl DiffSession {
    pub fn new(engine: DiffEngine) -> Self {
        Self {
            engine,
            input_lines: [1, 1],
            ..Default::default()
        }
    }

    pub fn engine(&self) -> DiffEngine {
        self.engine
    }

    /// Switch engines. The caller reruns the diff.
    pub fn set_engine(&mut self, engine: DiffEngine) {
        self.engine = engine;
    }

    pub fn text(&self, side: Side) -> &str {
        match side {
            Side::A => &self.text_a,
            Side::B => &self.text_b,
        }
    }

    /// Buffer for direct editing. Call [`touch_input`](Self::touch_input)
    /// after it changes.
    pub fn text_mut(&mut self, side: Side) -> &mut String {
        match side {
            Side::A => &mut self.text_a,
            Side::B => &mut self.text_b,
        }
    }

    pub fn set_text(&mut self, side: Side, text: String) {
        *self.text_mut(side) = text;
        self.touch_input(side);
    }

    /// Cheap per-keystroke update: refresh the input gutter of `side`
    pub fn touch_input(&mut self, side: Side) {
        let lines = line_count(self.text(side));
        self.input_lines[side as usize] = lines;
    }

    pub fn input_lines(&self, side: Side) -> usize {
        self.input_lines[side as usize]
    }

    /// Empty one buffer and rediff right away
    pub fn clear(&mut self, side: Side) -> Option<ResolvedChange> {
        self.set_text(side, String::new());
        self.run_diff()
    }

    /// Recompute the diff and everything derived from it.
    ///
    /// Returns the change the cursor rests on afterwards, so the caller can
    /// scroll to it. When both buffers are empty the engine is skipped and
    /// the session falls back to its empty state.
    pub fn run_diff(&mut self) -> Option<ResolvedChange> {
        if self.text_a.is_empty() && self.text_b.is_empty() {
            self.reset_derived();
            return None;
        }

        let fingerprint = self.fingerprint();
        if self.fingerprint == Some(fingerprint) {
            debug!("Inputs unchanged, keeping previous diff");
        } else {
            let ops = self.engine.compute(&self.text_a, &self.text_b);
            self.diff = normalize(ops);
            self.fingerprint = Some(fingerprint);

            self.view_a = Self::build_view(&self.diff, Side::A);
            self.view_b = Self::build_view(&self.diff, Side::B);

            self.stats = compute_stats(&self.diff.full, &self.text_a);

            debug!(
                engine = ?self.engine,
                ops = self.diff.full.len(),
                changes = self.diff.change_count(),
                percentage = self.stats.percentage,
                "Diff computed"
            );
        }

        self.navigator.sync(self.diff.change_count());
        self.status.percentage = self.stats.percentage_label();

        if self.diff.change_count() > 0 {
            self.step(0)
        } else {
            self.active = None;
            self.show_first_change();
            None
        }
    }

    /// Move the change cursor by `delta` and make that change active
    pub fn step(&mut self, delta: isize) -> Option<ResolvedChange> {
        let resolved = self.navigator.step(delta, &self.diff, &self.text_a)?;
        debug!(
            index = resolved.index,
            line = resolved.position.line,
            col = resolved.position.col,
            "Navigated to change"
        );

        self.active = Some(resolved);
        self.status.line = resolved.position.line.to_string();
        self.status.col = resolved.position.col.to_string();
        self.status.change = format!("{}/{}", resolved.index + 1, self.diff.change_count());
        Some(resolved)
    }

    pub fn next_change(&mut self) -> Option<ResolvedChange> {
        self.step(1)
    }

    pub fn previous_change(&mut self) -> Option<ResolvedChange> {
        self.step(-1)
    }

    pub fn diff(&self) -> &NormalizedDiff {
        &self.diff
    }

    pub fn view(&self, side: Side) -> &ViewState {
        match side {
            Side::A => &self.view_a,
            Side::B => &self.view_b,
        }
    }

    pub fn stats(&self) -> &PositionStats {
        &self.stats
    }

    pub fn status(&self) -> &StatusLine {
        &self.status
    }

    pub fn active(&self) -> Option<&ResolvedChange> {
        self.active.as_ref()
    }

    /// Span index to highlight in the view of `side`
    pub fn active_span(&self, side: Side) -> Option<usize> {
        let active = self.active.as_ref()?;
        let shown = match side {
            Side::A => active.active_in_a(),
            Side::B => active.active_in_b(),
        };
        shown.then_some(active.span_position)
    }

    pub fn current_change(&self) -> usize {
        self.navigator.current()
    }

    fn build_view(diff: &NormalizedDiff, side: Side) -> ViewState {
        let spans = build_spans(&diff.full, side);
        let lines = line_count(&visible_text(&spans));
        ViewState { spans, lines }
    }

    fn show_first_change(&mut self) {
        self.status.change = "0/0".to_string();
        match self.stats.first_change {
            Some(position) => {
                self.status.line = position.line.to_string();
                self.status.col = position.col.to_string();
            }
            None => {
                self.status.line = PLACEHOLDER.to_string();
                self.status.col = PLACEHOLDER.to_string();
            }
        }
    }

    fn reset_derived(&mut self) {
        self.fingerprint = None;
        self.diff = NormalizedDiff::default();
        self.view_a = ViewState {
            spans: Vec::new(),
            lines: 1,
        };
        self.view_b = ViewState {
            spans: Vec::new(),
            lines: 1,
        };
        self.stats = PositionStats::default();
        self.navigator.sync(0);
        self.active = None;
        self.status = StatusLine::default();
    }

    fn fingerprint(&self) -> u64 {
        let mut hasher = Xxh64::new(0);
        hasher.update(self.engine.label().as_bytes());
        hasher.update(&(self.text_a.len() as u64).to_le_bytes());
        hasher.update(self.text_a.as_bytes());
        hasher.update(self.text_b.as_bytes());
        hasher.digest()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diff::{DiffKind, Position};

    fn session(a: &str, b: &str) -> DiffSession {
        let mut session = DiffSession::new(DiffEngine::Semantic);
        session.set_text(Side::A, a.to_string());
        session.set_text(Side::B, b.to_string());
        session
    }

    #[test]
    fn empty_inputs_short_circuit() {
        let mut session = session("", "");
        assert!(session.run_diff().is_none());

        assert_eq!(session.status(), &StatusLine::default());
        assert_eq!(session.status().percentage, "0.00%");
        assert_eq!(session.status().line, "-");
        assert!(session.view(Side::A).spans.is_empty());
        assert!(session.view(Side::B).spans.is_empty());
        assert!(session.diff().is_empty());
    }

    #[test]
    fn foo_bar_scenario() {
        let mut session = session("foo bar", "foo baz");
        let resolved = session.run_diff().unwrap();

        let diff = session.diff();
        assert_eq!(diff.change_count(), 2);
        let kinds: Vec<_> = (0..2).map(|n| diff.change(n).unwrap().kind).collect();
        assert!(kinds.contains(&DiffKind::Delete));
        assert!(kinds.contains(&DiffKind::Insert));

        let stats = session.stats();
        assert!(stats.percentage > 0.0 && stats.percentage < 100.0);
        assert_eq!(stats.first_change.map(|p| p.line), Some(1));

        assert_eq!(resolved.index, 0);
        assert_eq!(resolved.position, Position { line: 1, col: 7 });
        assert_eq!(session.status().line, "1");
        assert_eq!(session.status().col, "7");
        assert_eq!(session.status().change, "1/2");
    }

    #[test]
    fn identical_inputs_have_nothing_to_navigate() {
        let mut session = session("same\ntext", "same\ntext");
        assert!(session.run_diff().is_none());

        assert_eq!(session.status().percentage, "0.00%");
        assert_eq!(session.status().line, "-");
        assert_eq!(session.diff().change_count(), 0);
        assert!(session.next_change().is_none());
        assert!(session.previous_change().is_none());
        assert!(session.active().is_none());
    }

    #[test]
    fn span_counts_match_ops() {
        let mut session = session("alpha\nbeta\ngamma", "alpha\nBETA\ngamma\ndelta");
        session.run_diff();

        let ops = session.diff().full.len();
        assert_eq!(session.view(Side::A).spans.len(), ops);
        assert_eq!(session.view(Side::B).spans.len(), ops);
        assert_eq!(session.view(Side::A).lines, 3);
        assert_eq!(session.view(Side::B).lines, 4);
    }

    #[test]
    fn cursor_is_kept_when_change_count_holds() {
        let mut session = session("one two three", "one 2 three");
        session.run_diff();
        let changes = session.diff().change_count();
        assert!(changes > 1);

        session.next_change();
        assert_eq!(session.current_change(), 1);

        // Different edit, same number of changes
        session.set_text(Side::B, "one 3 three".to_string());
        session.run_diff();
        assert_eq!(session.diff().change_count(), changes);
        assert_eq!(session.current_change(), 1);
    }

    #[test]
    fn cursor_resets_when_change_count_moves() {
        let mut session = session("one two three", "one 2 three");
        session.run_diff();
        session.next_change();
        assert_eq!(session.current_change(), 1);

        session.set_text(Side::B, "one two three four".to_string());
        session.run_diff();
        assert_eq!(session.diff().change_count(), 1);
        assert_eq!(session.current_change(), 0);
    }

    #[test]
    fn active_span_follows_change_kind() {
        let mut session = session("foo bar", "foo baz");
        let first = session.run_diff().unwrap();

        let (a, b) = (session.active_span(Side::A), session.active_span(Side::B));
        match first.kind {
            DiffKind::Delete => {
                assert_eq!(a, Some(first.span_position));
                assert_eq!(b, None);
            }
            DiffKind::Insert => {
                assert_eq!(a, None);
                assert_eq!(b, Some(first.span_position));
            }
            DiffKind::Equal => unreachable!("changes are never equal"),
        }
    }

    #[test]
    fn clearing_one_side_rediffs_immediately() {
        let mut session = session("keep me", "keep me too");
        session.run_diff();

        let resolved = session.clear(Side::B).unwrap();
        assert_eq!(session.text(Side::B), "");
        assert_eq!(session.status().percentage, "100.00%");
        assert_eq!(resolved.kind, DiffKind::Delete);

        assert!(session.clear(Side::A).is_none());
        assert_eq!(session.status(), &StatusLine::default());
    }

    #[test]
    fn input_line_counts_update_per_keystroke() {
        let mut session = DiffSession::new(DiffEngine::Semantic);
        assert_eq!(session.input_lines(Side::A), 1);

        session.text_mut(Side::A).push_str("a\nb\nc");
        session.touch_input(Side::A);
        assert_eq!(session.input_lines(Side::A), 3);
        assert_eq!(session.input_lines(Side::B), 1);
    }

    #[test]
    fn switching_engines_recomputes() {
        let mut session = session("abc\ndef\n", "abc\ndxf\n");
        session.run_diff();
        let semantic_ops = session.diff().full.clone();

        session.set_engine(DiffEngine::Lines);
        session.run_diff();
        assert_ne!(session.diff().full, semantic_ops);
        assert!(session.diff().full.iter().any(|op| op.text == "def\n"));
    }
}
