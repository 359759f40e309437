use super::gutter::show_gutter;
use crate::diff::{RenderSpan, Side, SpanRole, display_text};
use crate::session::ViewState;
use crate::sync::{Pane, ScrollGroup};
use egui::{Color32, FontId, RichText, ScrollArea, TextFormat, Ui, text::LayoutJob};

// Color constants for better maintainability
const REMOVED_BG: Color32 = Color32::from_rgb(255, 200, 200);
const ADDED_BG: Color32 = Color32::from_rgb(200, 255, 200);
const REMOVED_TEXT_COLOR: Color32 = Color32::from_rgb(150, 0, 0);
const ADDED_TEXT_COLOR: Color32 = Color32::from_rgb(0, 100, 0);
const ACTIVE_BG: Color32 = Color32::from_rgb(214, 188, 250);
const ACTIVE_TEXT_COLOR: Color32 = Color32::from_rgb(60, 20, 110);

pub struct ViewOptions {
    pub font_size: f32,
    pub line_height: f32,
    pub visible_whitespace: bool,
}

pub struct DiffView;

impl DiffView {
    /// Draw the rendered spans of one version next to its gutter.
    ///
    /// `active` is the span index of the change under the cursor, if it
    /// shows in this view.
    pub fn show(
        ui: &mut Ui,
        side: Side,
        view: &ViewState,
        active: Option<usize>,
        options: &ViewOptions,
        scroll: &mut ScrollGroup,
    ) {
        let (pane, gutter) = match side {
            Side::A => (Pane::ViewA, Pane::GutterA),
            Side::B => (Pane::ViewB, Pane::GutterB),
        };
        let font_id = FontId::monospace(options.font_size);

        ui.label(RichText::new(format!("{} (diff)", side.label())).strong());

        ui.horizontal_top(|ui| {
            show_gutter(
                ui,
                gutter,
                view.lines,
                &font_id,
                Some(options.line_height),
                scroll,
            );

            let mut area = ScrollArea::both()
                .id_salt(pane)
                .auto_shrink([false, false]);
            if let Some(offset) = scroll.take_pending(pane) {
                area = area.vertical_scroll_offset(offset);
            }

            let output = area.show(ui, |ui| {
                let job = layout_spans(ui, &view.spans, active, &font_id, options);
                ui.add(egui::Label::new(job).extend());
            });

            if scroll.on_scroll(pane, output.state.offset.y) {
                ui.ctx().request_repaint();
            }
        });
    }
}

/// Build one unwrapped layout job for the whole view
fn layout_spans(
    ui: &Ui,
    spans: &[RenderSpan],
    active: Option<usize>,
    font_id: &FontId,
    options: &ViewOptions,
) -> LayoutJob {
    let base_text_color = ui.visuals().text_color();
    let mut job = LayoutJob::default();

    for (index, span) in spans.iter().enumerate() {
        if !span.visible || span.text.is_empty() {
            continue;
        }

        let (color, background) = if active == Some(index) {
            (ACTIVE_TEXT_COLOR, ACTIVE_BG)
        } else {
            match span.role {
                SpanRole::Equal => (base_text_color, Color32::TRANSPARENT),
                SpanRole::Added => (ADDED_TEXT_COLOR, ADDED_BG),
                SpanRole::Removed => (REMOVED_TEXT_COLOR, REMOVED_BG),
            }
        };

        job.append(
            &display_text(&span.text, options.visible_whitespace),
            0.0,
            TextFormat {
                font_id: font_id.clone(),
                color,
                background,
                line_height: Some(options.line_height),
                ..Default::default()
            },
        );
    }

    job.wrap.max_width = f32::INFINITY;
    job
}
