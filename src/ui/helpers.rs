// src/ui/helpers.rs
use egui::{Button, Color32, ComboBox, RichText, Ui, Vec2};
use crate::model::OptionMark;

/// Desplegable con una entrada vacía (`placeholder`) delante de `items`.
/// Devuelve `Some(nueva_selección)` solo si el usuario la ha cambiado.
pub fn choice_combo(
    ui: &mut Ui,
    id: &str,
    placeholder: &str,
    items: &[String],
    current: Option<&str>,
    width: f32,
) -> Option<Option<String>> {
    let before = current.map(str::to_owned);
    let mut selected = before.clone();

    ComboBox::from_id_salt(id)
        .selected_text(current.unwrap_or(placeholder))
        .width(width)
        .show_ui(ui, |ui| {
            ui.selectable_value(&mut selected, None, placeholder);
            for item in items {
                ui.selectable_value(&mut selected, Some(item.clone()), item.as_str());
            }
        });

    (selected != before).then_some(selected)
}

pub fn sized_button(ui: &mut Ui, label: &str, width: f32, height: f32) -> bool {
    ui.add(Button::new(label).min_size(Vec2::new(width, height)))
        .clicked()
}

/// Verde la correcta, rojo la elegida incorrecta, color normal el resto.
pub fn marked_option(ui: &mut Ui, label: String, mark: OptionMark) {
    let color = match mark {
        OptionMark::Correct => Color32::GREEN,
        OptionMark::IncorrectPick => Color32::RED,
        OptionMark::Neutral => ui.visuals().text_color(),
    };
    ui.label(RichText::new(label).color(color));
}
