use super::types::{DiffKind, DiffOp, Side};
use std::borrow::Cow;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpanRole {
    Equal,
    Added,
    Removed,
}

/// One styled unit of a rendered view
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderSpan {
    pub role: SpanRole,
    pub text: String,
    pub visible: bool,
}

/// Project the full op sequence onto the view of one version.
///
/// Produces exactly one span per op. Ops that do not belong to `side`
/// become invisible placeholders so span indices stay aligned with the op
/// indices in both views.
pub fn build_spans(full: &[DiffOp], side: Side) -> Vec<RenderSpan> {
    full.iter()
        .map(|op| {
            let role = match op.kind {
                DiffKind::Equal => SpanRole::Equal,
                DiffKind::Insert => SpanRole::Added,
                DiffKind::Delete => SpanRole::Removed,
            };
            let visible = match side {
                Side::A => op.kind.in_a(),
                Side::B => op.kind.in_b(),
            };

            RenderSpan {
                role,
                text: if visible { op.text.clone() } else { String::new() },
                visible,
            }
        })
        .collect()
}

/// The text a view actually shows, used to size its line number gutter
pub fn visible_text(spans: &[RenderSpan]) -> String {
    spans
        .iter()
        .filter(|span| span.visible)
        .map(|span| span.text.as_str())
        .collect()
}

/// Number of lines a gutter should list for `text`. Empty text still has
/// one line.
pub fn line_count(text: &str) -> usize {
    text.split('\n').count()
}

/// Gutter content: `1\n2\n...\nN`
pub fn gutter_text(lines: usize) -> String {
    (1..=lines.max(1))
        .map(|n| n.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Prepare span text for drawing.
///
/// Control chars other than newline and tab are shown as their Unicode
/// control pictures. With `visible_whitespace`, spaces and tabs get markers.
/// The char count is never changed, so offsets into the text stay valid.
pub fn display_text(text: &str, visible_whitespace: bool) -> Cow<'_, str> {
    let needs_change = text.chars().any(|c| {
        (c.is_control() && c != '\n' && c != '\t')
            || (visible_whitespace && (c == ' ' || c == '\t'))
    });
    if !needs_change {
        return Cow::Borrowed(text);
    }

    Cow::Owned(
        text.chars()
            .map(|c| match c {
                ' ' if visible_whitespace => '·',
                '\t' if visible_whitespace => '→',
                '\n' | '\t' => c,
                c if (c as u32) < 0x20 => char::from_u32(0x2400 + c as u32).unwrap_or('\u{FFFD}'),
                '\u{7f}' => '\u{2421}',
                c if c.is_control() => '\u{FFFD}',
                c => c,
            })
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full() -> Vec<DiffOp> {
        vec![
            DiffOp::new(DiffKind::Equal, "foo ba"),
            DiffOp::new(DiffKind::Delete, "r"),
            DiffOp::new(DiffKind::Insert, "z\nqux"),
        ]
    }

    #[test]
    fn one_span_per_op_in_each_view() {
        let full = full();
        assert_eq!(build_spans(&full, Side::A).len(), full.len());
        assert_eq!(build_spans(&full, Side::B).len(), full.len());
    }

    #[test]
    fn inserts_are_hidden_in_version_a() {
        let spans = build_spans(&full(), Side::A);

        assert_eq!(spans[1].role, SpanRole::Removed);
        assert!(spans[1].visible);
        assert_eq!(spans[2].role, SpanRole::Added);
        assert!(!spans[2].visible);
        assert_eq!(spans[2].text, "");
        assert_eq!(visible_text(&spans), "foo bar");
    }

    #[test]
    fn deletes_are_hidden_in_version_b() {
        let spans = build_spans(&full(), Side::B);

        assert!(!spans[1].visible);
        assert!(spans[2].visible);
        assert_eq!(visible_text(&spans), "foo baz\nqux");
    }

    #[test]
    fn line_counts() {
        assert_eq!(line_count(""), 1);
        assert_eq!(line_count("one"), 1);
        assert_eq!(line_count("one\ntwo"), 2);
        assert_eq!(line_count("one\n"), 2);
    }

    #[test]
    fn gutter_lists_every_line() {
        assert_eq!(gutter_text(3), "1\n2\n3");
        assert_eq!(gutter_text(0), "1");
    }

    #[test]
    fn plain_text_is_borrowed() {
        assert!(matches!(display_text("a b\n", false), Cow::Borrowed(_)));
    }

    #[test]
    fn whitespace_markers_keep_char_count() {
        let text = "a b\tc\n";
        let shown = display_text(text, true);
        assert_eq!(shown, "a·b→c\n");
        assert_eq!(shown.chars().count(), text.chars().count());
    }

    #[test]
    fn control_chars_become_pictures() {
        assert_eq!(display_text("a\u{0}b\r", false), "a\u{2400}b\u{240d}");
        assert_eq!(display_text("\u{7f}", false), "\u{2421}");
    }
}
