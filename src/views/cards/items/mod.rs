// Card drawing primitives; only the card itself is public.
mod card;
mod indicator;
pub use card::course_card;
