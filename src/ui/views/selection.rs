use egui::Ui;
use crate::QuizApp;
use crate::ui::helpers::choice_combo;

pub fn ui_selection(app: &mut QuizApp, ui: &mut Ui, panel_width: f32) {
    let combo_width = (panel_width / 2.0).max(180.0);
    let topics: Vec<String> = app.topic_names().map(str::to_owned).collect();

    ui.label("Selecciona un tema:");
    let current = app.selected_topic().map(str::to_owned);
    if let Some(topic) = choice_combo(
        ui,
        "topic_select",
        "--Selecciona tema--",
        &topics,
        current.as_deref(),
        combo_width,
    ) {
        app.select_topic(topic.as_deref());
    }

    if !app.shows_subtopic_selector() {
        return;
    }

    ui.add_space(8.0);
    ui.label("Selecciona un subtema:");
    let subtopics = app.subtopics().to_vec();
    let current = app.selected_subtopic().map(str::to_owned);
    if let Some(subtopic) = choice_combo(
        ui,
        "subtopic_select",
        "--Selecciona subtema--",
        &subtopics,
        current.as_deref(),
        combo_width,
    ) {
        app.select_subtopic(subtopic.as_deref());
    }
}
