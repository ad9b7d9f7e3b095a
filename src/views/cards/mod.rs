// Course cards: pure model (state machine + text), per-card state storage and
// the egui painter.
mod items;
pub mod model;
pub mod state;

pub use items::course_card;
pub use model::CardModel;
