use egui::{RichText, Ui};
use crate::QuizApp;
use crate::ui::helpers::marked_option;

pub fn ui_results(app: &QuizApp, ui: &mut Ui) {
    for row in app.result_rows() {
        ui.add_space(6.0);
        ui.label(row.label());
        ui.indent(("result", row.number), |ui| {
            for option in &row.options {
                marked_option(ui, option.label(), option.mark);
            }
        });
    }

    ui.add_space(12.0);
    ui.heading(RichText::new(format!("Tu puntuación: {}", app.score_label())).strong());
}
