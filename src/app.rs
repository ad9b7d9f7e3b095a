// Application shell: owns the catalog, applies the theme, draws header + list.

use eframe::{egui, App};

use crate::catalog::Catalog;
use crate::theme::{apply_visuals, Palette, ThemePreference};
use crate::views::list::course_list;

mod header;
pub mod settings;

pub struct CourseCardsApp {
    catalog: Catalog,
    applied_theme: Option<ThemePreference>,
}

impl Default for CourseCardsApp {
    fn default() -> Self {
        let catalog = Catalog::sample();
        log::info!("catalog ready: {} courses", catalog.len());
        Self {
            catalog,
            applied_theme: None,
        }
    }
}

impl App for CourseCardsApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let theme = settings::with_settings(|s| s.theme);
        if self.applied_theme != Some(theme) {
            apply_visuals(ctx, theme);
            self.applied_theme = Some(theme);
            log::debug!("applied {:?} theme", theme);
        }
        let palette = Palette::for_theme(theme);

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            header::draw_header(ui, self.catalog.len());
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            course_list(ui, &self.catalog, &palette);
        });
    }
}
