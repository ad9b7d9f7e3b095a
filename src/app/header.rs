use eframe::egui::{self, Align, Layout, RichText};

use crate::app::settings::{save_settings_to_disk, with_settings, with_settings_mut};
use crate::localization::{
    initialize_localization, set_current_language, translate, translate_with, SupportedLang,
};

/// Auto -> each supported language in order -> back to Auto.
fn next_language(current: Option<SupportedLang>) -> Option<SupportedLang> {
    use strum::IntoEnumIterator;
    let all: Vec<SupportedLang> = SupportedLang::iter().collect();
    match current {
        None => all.first().copied(),
        Some(lang) => {
            let idx = all.iter().position(|l| *l == lang)?;
            all.get(idx + 1).copied()
        }
    }
}

/// Title row with the course count plus theme and language switches.
pub fn draw_header(ui: &mut egui::Ui, course_count: usize) {
    ui.horizontal(|ui| {
        ui.heading(translate("header-title"));
        ui.label(
            RichText::new(translate_with(
                "header-count",
                &[("count", course_count.to_string())],
            ))
            .weak(),
        );

        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
            let lang = with_settings(|s| s.language);
            let lang_label = translate(lang.map_or("language-auto", SupportedLang::label_id));
            if ui
                .button(translate_with("header-language", &[("language", lang_label)]))
                .clicked()
            {
                let next = next_language(lang);
                with_settings_mut(|s| s.language = next);
                let res = match next {
                    Some(l) => set_current_language(l),
                    None => initialize_localization(None),
                };
                if let Err(e) = res {
                    log::warn!("language switch failed: {e}");
                }
                ui.ctx()
                    .send_viewport_cmd(egui::ViewportCommand::Title(translate("app-window-title")));
                save_settings_to_disk();
            }

            let theme = with_settings(|s| s.theme);
            let theme_label = translate(theme.label_id());
            if ui
                .button(translate_with("header-theme", &[("theme", theme_label)]))
                .clicked()
            {
                with_settings_mut(|s| s.theme = theme.next());
                save_settings_to_disk();
            }
        });
    });
}
