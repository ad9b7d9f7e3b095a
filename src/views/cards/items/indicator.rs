use eframe::egui::{self, emath::Rot2, Color32, Pos2, Sense, Stroke};

use crate::ui_constants::card::INDICATOR_SIZE;

/// Chevron that points down at angle 0 and up at PI.
pub fn draw_indicator(ui: &mut egui::Ui, angle: f32, color: Color32) -> egui::Response {
    let (rect, response) =
        ui.allocate_exact_size(egui::vec2(INDICATOR_SIZE, INDICATOR_SIZE), Sense::hover());
    if ui.is_rect_visible(rect) {
        let points = chevron_points(rect.center(), rect.width() * 0.25, angle);
        ui.painter()
            .add(egui::Shape::line(points.to_vec(), Stroke::new(2.0, color)));
    }
    response
}

// Screen y grows downward, so the unrotated tip sits below the centre.
fn chevron_points(center: Pos2, half: f32, angle: f32) -> [Pos2; 3] {
    let rot = Rot2::from_angle(angle);
    [
        egui::vec2(-half, -half * 0.5),
        egui::vec2(0.0, half * 0.5),
        egui::vec2(half, -half * 0.5),
    ]
    .map(|v| center + rot * v)
}
