pub mod cards;
pub mod list;
