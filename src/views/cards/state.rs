// Per-card toggle state, kept in egui's temporary memory under the card's id.

use eframe::egui;

use super::model::CardState;

pub fn load_state(ctx: &egui::Context, id: egui::Id) -> CardState {
    ctx.data(|d| d.get_temp::<CardState>(id)).unwrap_or_default()
}

pub fn store_state(ctx: &egui::Context, id: egui::Id, state: CardState) {
    ctx.data_mut(|d| d.insert_temp(id, state));
}

/// Flip the card's state and return the new one.
pub fn toggle_state(ctx: &egui::Context, id: egui::Id) -> CardState {
    let next = load_state(ctx, id).toggle();
    store_state(ctx, id, next);
    next
}
