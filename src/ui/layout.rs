use egui::{Context, Frame, RichText, Ui, Visuals};

pub const APP_TITLE: &str = "AI Quiz Coach";

pub fn top_panel(ctx: &Context) {
    egui::TopBottomPanel::top("title_panel").show(ctx, |ui| {
        ui.add_space(4.0);
        ui.heading(RichText::new(APP_TITLE).strong());
        ui.add_space(4.0);
    });
}

/// Selector de tema claro/oscuro; el activo aparece marcado.
pub fn bottom_panel(ctx: &Context) {
    egui::TopBottomPanel::bottom("theme_panel").show(ctx, |ui| {
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let dark = ctx.style().visuals.dark_mode;
            if ui.selectable_label(dark, "🌙 Oscuro").clicked() && !dark {
                ctx.set_visuals(Visuals::dark());
            }
            if ui.selectable_label(!dark, "☀ Claro").clicked() && dark {
                ctx.set_visuals(Visuals::light());
            }
            ui.label("Tema:");
        });
    });
}

/// Bloque con cabecera, como una tarjeta: título arriba y contenido `inner` debajo.
pub fn section(ui: &mut Ui, title: &str, inner: impl FnOnce(&mut Ui)) {
    Frame::default()
        .fill(ui.visuals().window_fill())
        .inner_margin(egui::Margin::symmetric(16, 12))
        .show(ui, |ui| {
            ui.heading(title);
            ui.separator();
            inner(ui);
        });
}
