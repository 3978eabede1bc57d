mod helpers;
pub mod layout;
pub mod views;

use crate::QuizApp;
use eframe::{App, Frame};
use egui::{CentralPanel, Context, ScrollArea};
use layout::{bottom_panel, section, top_panel};

impl App for QuizApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        draw(self, ctx);
    }
}

/// Pinta un frame completo. Separado de `update` para poder probarlo sin eframe.
pub fn draw(app: &mut QuizApp, ctx: &Context) {
    top_panel(ctx);

    bottom_panel(ctx);

    CentralPanel::default().show(ctx, |ui| {
        let max_width = 720.0;
        let panel_width = (ui.available_width() * 0.97).min(max_width);

        ScrollArea::vertical().auto_shrink([false; 2]).show(ui, |ui| {
            ui.set_width(panel_width);

            section(ui, "Selección de tema", |ui| {
                views::selection::ui_selection(app, ui, panel_width);
            });

            if app.shows_question_form() {
                ui.add_space(12.0);
                section(ui, "Preguntas", |ui| {
                    views::questions::ui_questions(app, ui, panel_width);
                });
            }

            if app.shows_results() {
                ui.add_space(12.0);
                section(ui, "Resultados", |ui| {
                    views::results::ui_results(app, ui);
                });
            }
        });
    });
}
