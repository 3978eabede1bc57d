use egui::{RadioButton, Ui};
use crate::QuizApp;
use crate::ui::helpers::sized_button;

/// Formulario de preguntas. Tras enviar se queda visible pero deshabilitado.
pub fn ui_questions(app: &mut QuizApp, ui: &mut Ui, panel_width: f32) {
    let enabled = app.options_enabled();
    let mut picked: Option<(usize, usize)> = None;

    for (qi, question) in app.questions().iter().enumerate() {
        ui.add_space(6.0);
        ui.label(format!("{}. {}", qi + 1, question.text));
        let chosen = app.answer_for(qi);

        ui.indent(("question", qi), |ui| {
            for (oi, option) in question.options.iter().enumerate() {
                let radio = RadioButton::new(chosen == Some(oi), option.as_str());
                if ui.add_enabled(enabled, radio).clicked() {
                    picked = Some((qi, oi));
                }
            }
        });
    }

    if let Some((qi, oi)) = picked {
        app.answer(qi, oi);
    }

    if !app.shows_form_buttons() {
        return;
    }

    ui.add_space(10.0);
    ui.label(app.progress_label());
    ui.add_space(6.0);

    let btn_w = (panel_width - 8.0) / 4.0;
    let mut enviar = false;
    let mut reiniciar = false;
    ui.horizontal(|ui| {
        enviar = sized_button(ui, "Enviar", btn_w, 32.0);
        reiniciar = sized_button(ui, "Reiniciar", btn_w, 32.0);
    });

    if enviar {
        app.submit();
    }
    if reiniciar {
        app.reset();
    }
}
