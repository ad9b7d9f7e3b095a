use eframe::egui::collapsing_header::CollapsingState;
use eframe::egui::{self, Align, Color32, CursorIcon, Layout, Margin, RichText, Rounding, Sense};

use super::indicator::draw_indicator;
use crate::localization::translate;
use crate::theme::Palette;
use crate::ui_constants::{card, spacing};
use crate::views::cards::model::{CardModel, Indicator};
use crate::views::cards::state::{load_state, toggle_state};

fn text_label(ui: &mut egui::Ui, text: RichText) {
    ui.add(egui::Label::new(text).selectable(false));
}

/// Full-width expandable card for one course.
/// A click anywhere on the card flips its state; tint and chevron ease toward
/// the new state over the next frames.
pub fn course_card(ui: &mut egui::Ui, model: &CardModel<'_>, palette: &Palette) -> egui::Response {
    let id = model.id();
    let ctx = ui.ctx().clone();
    let state = load_state(&ctx, id);
    let expanded = state.is_expanded();

    let tint_t = ctx.animate_bool_with_time(id.with("tint"), expanded, card::TINT_ANIM_SECS);
    let arrow_t = ctx.animate_bool_with_time(id.with("arrow"), expanded, card::ARROW_ANIM_SECS);
    let fill = palette.container_at(tint_t);
    let text: Color32 = palette.on_container(expanded);
    let lines = model.lines(state);

    let frame_out = egui::Frame::none()
        .fill(fill)
        .rounding(Rounding::same(card::ROUNDING))
        .shadow(ui.visuals().popup_shadow)
        .inner_margin(Margin::same(card::INNER_MARGIN))
        .outer_margin(Margin::same(card::OUTER_MARGIN))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());

            text_label(ui, RichText::new(&lines.title).heading().color(text));
            ui.add_space(spacing::SMALL);
            text_label(
                ui,
                RichText::new(&lines.summary)
                    .small()
                    .color(text.gamma_multiply(card::SUMMARY_ALPHA)),
            );
            ui.add_space(spacing::MEDIUM);

            ui.horizontal(|ui| {
                ui.vertical(|ui| {
                    text_label(ui, RichText::new(&lines.code).color(text));
                    text_label(ui, RichText::new(&lines.credits).color(text));
                });
                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    let angle = egui::lerp(
                        Indicator::Down.angle()..=Indicator::Up.angle(),
                        arrow_t,
                    );
                    draw_indicator(ui, angle, text).on_hover_text(translate("card-toggle-hint"));
                });
            });

            // Body keeps its text while easing shut, so it can't rely on lines.details.
            let details = lines.details.clone().unwrap_or_else(|| model.details());
            let mut body = CollapsingState::load_with_default_open(ui.ctx(), id.with("details"), false);
            body.set_open(expanded);
            body.show_body_unindented(ui, |ui| {
                ui.add_space(spacing::MEDIUM);
                text_label(ui, RichText::new(&details.description).color(text));
                ui.add_space(spacing::SMALL);
                text_label(ui, RichText::new(&details.prerequisites).color(text));
            });
            body.store(ui.ctx());
        });

    // The outer margin is spacing between cards, not part of the card.
    let card_rect = frame_out.response.rect.shrink(card::OUTER_MARGIN);
    let response = ui
        .interact(card_rect, id.with("click"), Sense::click())
        .on_hover_cursor(CursorIcon::PointingHand);
    if response.clicked() {
        let next = toggle_state(&ctx, id);
        log::debug!(
            "card {} ({}) -> {:?}",
            model.index,
            model.course.code,
            next
        );
        ctx.request_repaint();
    }
    response
}
