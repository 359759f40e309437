use super::gutter::show_gutter;
use crate::diff::Side;
use crate::sync::{Pane, ScrollGroup};
use egui::{FontId, RichText, ScrollArea, TextEdit, Ui};

pub struct InputPane;

impl InputPane {
    /// Draw the editor for one version with its line numbers.
    ///
    /// Returns true if the text was edited this frame.
    pub fn show(
        ui: &mut Ui,
        side: Side,
        text: &mut String,
        lines: usize,
        font_size: f32,
        scroll: &mut ScrollGroup,
    ) -> bool {
        let (pane, gutter) = match side {
            Side::A => (Pane::InputA, Pane::InputGutterA),
            Side::B => (Pane::InputB, Pane::InputGutterB),
        };
        let font_id = FontId::monospace(font_size);

        ui.label(RichText::new(side.label()).strong());

        ui.horizontal_top(|ui| {
            show_gutter(ui, gutter, lines, &font_id, None, scroll);

            let mut area = ScrollArea::vertical()
                .id_salt(pane)
                .auto_shrink([false, false]);
            if let Some(offset) = scroll.take_pending(pane) {
                area = area.vertical_scroll_offset(offset);
            }

            let output = area.show(ui, |ui| {
                ui.add(
                    TextEdit::multiline(text)
                        .code_editor()
                        .font(font_id.clone())
                        .frame(false)
                        .hint_text(format!("Paste {} here", side.label()))
                        .desired_width(f32::INFINITY)
                        .desired_rows(lines.max(8)),
                )
                .changed()
            });

            if scroll.on_scroll(pane, output.state.offset.y) {
                ui.ctx().request_repaint();
            }
            output.inner
        })
        .inner
    }
}
