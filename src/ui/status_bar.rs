use crate::session::StatusLine;
use egui::{RichText, Ui};

pub struct StatusBar;

impl StatusBar {
    pub fn show(ui: &mut Ui, status: &StatusLine) {
        ui.horizontal(|ui| {
            ui.label(RichText::new(format!("Changed: {}", status.percentage)).small());
            ui.separator();
            ui.label(RichText::new(format!("Ln {}, Col {}", status.line, status.col)).small());
            ui.separator();
            ui.label(RichText::new(format!("Change {}", status.change)).small());
        });
    }
}
