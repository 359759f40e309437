use crate::diff::gutter_text;
use crate::sync::{Pane, ScrollGroup};
use egui::scroll_area::ScrollBarVisibility;
use egui::text::LayoutJob;
use egui::{FontId, ScrollArea, TextFormat, Ui};

const GUTTER_PADDING: f32 = 8.0;
/// Approximate advance of one monospace digit, relative to the font size
const DIGIT_WIDTH_RATIO: f32 = 0.62;

/// Draw a line number column that only scrolls when its group does.
///
/// Gutters only follow their group, they never report offsets back.
///
/// `line_height` must match the pane the gutter sits next to. `None` uses
/// the font's natural row height, like a plain text editor.
pub fn show_gutter(
    ui: &mut Ui,
    pane: Pane,
    lines: usize,
    font_id: &FontId,
    line_height: Option<f32>,
    scroll: &mut ScrollGroup,
) {
    let digits = lines.max(1).to_string().len().max(2);
    let width = digits as f32 * font_id.size * DIGIT_WIDTH_RATIO + GUTTER_PADDING;

    let mut area = ScrollArea::vertical()
        .id_salt(pane)
        .enable_scrolling(false)
        .scroll_bar_visibility(ScrollBarVisibility::AlwaysHidden)
        .auto_shrink([false, false])
        .max_width(width);
    if let Some(offset) = scroll.take_pending(pane) {
        area = area.vertical_scroll_offset(offset);
    }

    area.show(ui, |ui| {
        ui.set_width(width);
        let mut job = LayoutJob::default();
        job.append(
            &gutter_text(lines),
            0.0,
            TextFormat {
                font_id: font_id.clone(),
                color: ui.visuals().weak_text_color(),
                line_height,
                ..Default::default()
            },
        );
        ui.add(egui::Label::new(job).extend().selectable(false));
    });
}
