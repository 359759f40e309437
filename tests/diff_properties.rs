//! Property tests for the diff model: every run must rebuild both inputs,
//! keep the views aligned and report a sane percentage.

use paper_diff::diff::{
    DiffEngine, DiffKind, Navigator, Side, build_spans, compute_stats, normalize, visible_text,
};
use paper_diff::session::DiffSession;
use proptest::prelude::*;

// Small alphabet so the two sides share enough to produce interesting diffs
const TEXT: &str = "[ab \n我]{0,40}";

fn engine() -> impl Strategy<Value = DiffEngine> {
    prop::sample::select(DiffEngine::ALL.to_vec())
}

proptest! {
    #[test]
    fn ops_rebuild_both_versions(a in TEXT, b in TEXT, engine in engine()) {
        let diff = normalize(engine.compute(&a, &b));

        let rebuilt_a: String = diff.full.iter().filter(|op| op.kind.in_a()).map(|op| op.text.as_str()).collect();
        let rebuilt_b: String = diff.full.iter().filter(|op| op.kind.in_b()).map(|op| op.text.as_str()).collect();
        prop_assert_eq!(rebuilt_a, a);
        prop_assert_eq!(rebuilt_b, b);
    }

    #[test]
    fn views_have_one_span_per_op(a in TEXT, b in TEXT) {
        let diff = normalize(DiffEngine::Semantic.compute(&a, &b));
        let spans_a = build_spans(&diff.full, Side::A);
        let spans_b = build_spans(&diff.full, Side::B);

        prop_assert_eq!(spans_a.len(), diff.full.len());
        prop_assert_eq!(spans_b.len(), diff.full.len());
        prop_assert_eq!(visible_text(&spans_a), a);
        prop_assert_eq!(visible_text(&spans_b), b);
    }

    #[test]
    fn changes_point_at_non_equal_ops(a in TEXT, b in TEXT) {
        let diff = normalize(DiffEngine::Semantic.compute(&a, &b));

        for &index in &diff.changes {
            prop_assert!(diff.full[index].kind != DiffKind::Equal);
        }
        let non_equal = diff.full.iter().filter(|op| op.kind != DiffKind::Equal).count();
        prop_assert_eq!(diff.change_count(), non_equal);
    }

    #[test]
    fn percentage_stays_in_bounds(a in TEXT, b in TEXT) {
        let diff = normalize(DiffEngine::Semantic.compute(&a, &b));
        let stats = compute_stats(&diff.full, &a);

        prop_assert!(stats.percentage >= 0.0);
        prop_assert!(stats.percentage <= 100.0);
        prop_assert_eq!(stats.first_change_offset.is_some(), a != b);
    }

    #[test]
    fn stepping_through_every_change_returns_home(a in TEXT, b in TEXT) {
        let diff = normalize(DiffEngine::Semantic.compute(&a, &b));
        let n = diff.change_count();
        prop_assume!(n > 0);

        let mut nav = Navigator::new();
        nav.sync(n);
        for _ in 0..n {
            prop_assert!(nav.step(1, &diff, &a).is_some());
        }
        prop_assert_eq!(nav.current(), 0);

        let last = nav.step(-1, &diff, &a).unwrap();
        prop_assert_eq!(last.index, n - 1);
    }

    #[test]
    fn resolved_offsets_stay_inside_version_a(a in TEXT, b in TEXT) {
        let diff = normalize(DiffEngine::Semantic.compute(&a, &b));
        let len_a = a.chars().count();

        let mut nav = Navigator::new();
        nav.sync(diff.change_count());
        for _ in 0..diff.change_count() {
            let resolved = nav.step(1, &diff, &a).unwrap();
            prop_assert!(resolved.char_index_a <= len_a);
            prop_assert_eq!(resolved.span_position, diff.changes[resolved.index]);
        }
    }
}

#[test]
fn identical_inputs_report_no_change() {
    for text in ["x", "same\ntext\n", "我爱你"] {
        let mut session = DiffSession::new(DiffEngine::Semantic);
        session.set_text(Side::A, text.to_string());
        session.set_text(Side::B, text.to_string());

        assert!(session.run_diff().is_none());
        assert_eq!(session.status().percentage, "0.00%");
        assert_eq!(session.diff().change_count(), 0);
        assert!(session.next_change().is_none());
    }
}

#[test]
fn navigation_walks_a_multi_line_document() {
    let a = "fn main() {\n    let x = 1;\n    println!(\"{}\", x);\n}\n";
    let b = "fn main() {\n    let y = 2;\n    println!(\"{}\", y);\n}\n";

    let mut session = DiffSession::new(DiffEngine::Semantic);
    session.set_text(Side::A, a.to_string());
    session.set_text(Side::B, b.to_string());

    let first = session.run_diff().unwrap();
    assert_eq!(first.position.line, 2);

    let mut lines = vec![first.position.line];
    for _ in 1..session.diff().change_count() {
        lines.push(session.next_change().unwrap().position.line);
    }

    // Changes come in document order and end on the println line
    assert!(lines.windows(2).all(|w| w[0] <= w[1]));
    assert_eq!(lines.last().copied(), Some(3));

    // One more step wraps back to the first change
    assert_eq!(session.next_change().unwrap(), first);
}
