use crate::diff::{DiffEngine, Side};
use egui::{Align, Layout, Ui};

pub enum ToolbarAction {
    PreviousChange,
    NextChange,
    Clear(Side),
    Open(Side),
    SetEngine(DiffEngine),
    ToggleWhitespace,
}

pub struct Toolbar;

pub struct ToolbarState {
    pub engine: DiffEngine,
    pub visible_whitespace: bool,
    pub has_changes: bool,
}

impl Toolbar {
    pub fn show(ui: &mut Ui, state: ToolbarState) -> Option<ToolbarAction> {
        let ToolbarState {
            engine,
            visible_whitespace,
            has_changes,
        } = state;

        let mut action = None;

        ui.horizontal(|ui| {
            ui.with_layout(Layout::left_to_right(Align::Center), |ui| {
                for side in [Side::A, Side::B] {
                    let suffix = match side {
                        Side::A => "A",
                        Side::B => "B",
                    };
                    if ui
                        .button(format!("📂 {}", suffix))
                        .on_hover_text(format!("Open a file into {}", side.label()))
                        .clicked()
                    {
                        action = Some(ToolbarAction::Open(side));
                    }
                    if ui
                        .button(format!("🗑 {}", suffix))
                        .on_hover_text(format!("Clear {}", side.label()))
                        .clicked()
                    {
                        action = Some(ToolbarAction::Clear(side));
                    }
                }

                ui.separator();

                egui::ComboBox::from_id_salt("diff_engine")
                    .selected_text(engine.label())
                    .show_ui(ui, |ui| {
                        for candidate in DiffEngine::ALL {
                            if ui
                                .selectable_label(candidate == engine, candidate.label())
                                .clicked()
                                && candidate != engine
                            {
                                action = Some(ToolbarAction::SetEngine(candidate));
                            }
                        }
                    })
                    .response
                    .on_hover_text("Diff algorithm");

                if ui
                    .selectable_label(visible_whitespace, "·␣")
                    .on_hover_text("Show whitespace")
                    .clicked()
                {
                    action = Some(ToolbarAction::ToggleWhitespace);
                }
            });

            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                if ui
                    .add_enabled(has_changes, egui::Button::new("Next ⏷"))
                    .on_hover_text("Next change")
                    .clicked()
                {
                    action = Some(ToolbarAction::NextChange);
                }
                if ui
                    .add_enabled(has_changes, egui::Button::new("⏶ Previous"))
                    .on_hover_text("Previous change")
                    .clicked()
                {
                    action = Some(ToolbarAction::PreviousChange);
                }
            });
        });

        action
    }
}
