// Card model: the two-state toggle and the text a card shows in each state.

use std::borrow::Cow;

use crate::catalog::Course;
use crate::localization::translate_with;
use crate::ui_constants::{ELLIPSIS, SUMMARY_LIMIT};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CardState {
    #[default]
    Collapsed,
    Expanded,
}

impl CardState {
    pub fn toggle(self) -> Self {
        match self {
            CardState::Collapsed => CardState::Expanded,
            CardState::Expanded => CardState::Collapsed,
        }
    }

    pub fn is_expanded(self) -> bool {
        self == CardState::Expanded
    }

    pub fn indicator(self) -> Indicator {
        match self {
            CardState::Collapsed => Indicator::Down,
            CardState::Expanded => Indicator::Up,
        }
    }
}

/// Direction of the expand chevron.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indicator {
    Down,
    Up,
}

impl Indicator {
    /// Rotation applied to a down-pointing chevron, in radians.
    pub fn angle(self) -> f32 {
        match self {
            Indicator::Down => 0.0,
            Indicator::Up => std::f32::consts::PI,
        }
    }
}

/// Collapsed-view summary: at most `SUMMARY_LIMIT` characters, plus an
/// ellipsis only when something was cut.
pub fn summarize(description: &str) -> Cow<'_, str> {
    match description.char_indices().nth(SUMMARY_LIMIT) {
        Some((cut, _)) => Cow::Owned(format!("{}{}", &description[..cut], ELLIPSIS)),
        None => Cow::Borrowed(description),
    }
}

/// One row of the list: a course and its position in the catalog.
#[derive(Debug, Clone, Copy)]
pub struct CardModel<'a> {
    pub index: usize,
    pub course: &'a Course,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardDetails {
    pub description: String,
    pub prerequisites: String,
}

/// Everything a card renders for a given state, already localized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardLines {
    pub title: String,
    pub summary: String,
    pub code: String,
    pub credits: String,
    pub indicator: Indicator,
    /// Only present while expanded.
    pub details: Option<CardDetails>,
}

impl<'a> CardModel<'a> {
    pub fn new(index: usize, course: &'a Course) -> Self {
        Self { index, course }
    }

    /// Stable egui id; keys the card's toggle state and animations.
    pub fn id(&self) -> eframe::egui::Id {
        eframe::egui::Id::new(("course_card", self.index))
    }

    /// Full description and prerequisites, regardless of state.
    pub fn details(&self) -> CardDetails {
        let c = self.course;
        CardDetails {
            description: translate_with("card-description", &[("description", c.description.clone())]),
            prerequisites: translate_with(
                "card-prerequisites",
                &[("prerequisites", c.prerequisites.clone())],
            ),
        }
    }

    pub fn lines(&self, state: CardState) -> CardLines {
        let c = self.course;
        let details = state.is_expanded().then(|| self.details());
        CardLines {
            title: c.title.clone(),
            summary: summarize(&c.description).into_owned(),
            code: translate_with("card-code", &[("code", c.code.clone())]),
            credits: translate_with("card-credits", &[("credits", c.credit_hours.to_string())]),
            indicator: state.indicator(),
            details,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_description_is_untouched() {
        let d = "Introduction to calculus concepts and techniques.";
        assert!(matches!(summarize(d), Cow::Borrowed(s) if s == d));
        assert_eq!(summarize(""), "");
    }

    #[test]
    fn exactly_limit_has_no_ellipsis() {
        let d = "x".repeat(SUMMARY_LIMIT);
        assert_eq!(summarize(&d), d);
    }

    #[test]
    fn long_description_is_cut_with_ellipsis() {
        let d = "Study the design and implementation of modern operating systems.";
        assert_eq!(
            summarize(d),
            "Study the design and implementation of modern operating syst..."
        );
        let d = "y".repeat(SUMMARY_LIMIT + 1);
        assert_eq!(summarize(&d), format!("{}...", "y".repeat(SUMMARY_LIMIT)));
    }

    #[test]
    fn truncation_counts_characters_not_bytes() {
        let d = "é".repeat(SUMMARY_LIMIT + 5);
        let s = summarize(&d);
        assert_eq!(s.chars().count(), SUMMARY_LIMIT + ELLIPSIS.len());
        assert!(s.starts_with(&"é".repeat(SUMMARY_LIMIT)));

        let d = "ж".repeat(SUMMARY_LIMIT);
        assert_eq!(summarize(&d), d);
    }

    #[test]
    fn toggle_parity() {
        for n in 0..8 {
            let mut state = CardState::default();
            for _ in 0..n {
                state = state.toggle();
            }
            let expected = if n % 2 == 0 { CardState::Collapsed } else { CardState::Expanded };
            assert_eq!(state, expected, "after {n} toggles");
        }
    }

    #[test]
    fn calculus_scenario() {
        let course = Course::new(
            "Calculus I",
            "MATH101",
            3,
            "Introduction to calculus concepts and techniques.",
            "None",
        );
        let model = CardModel::new(0, &course);

        let mut state = CardState::default();
        let initial = model.lines(state);
        assert_eq!(initial.title, "Calculus I");
        assert_eq!(initial.summary, course.description);
        assert_eq!(initial.code, "Code: MATH101");
        assert_eq!(initial.credits, "Credits: 3");
        assert_eq!(initial.indicator, Indicator::Down);
        assert_eq!(initial.details, None);

        state = state.toggle();
        let expanded = model.lines(state);
        assert_eq!(expanded.indicator, Indicator::Up);
        let details = expanded.details.as_ref().unwrap();
        assert_eq!(details.prerequisites, "Prerequisites: None");
        assert_eq!(
            details.description,
            "Description: Introduction to calculus concepts and techniques."
        );
        // Collapsed content stays visible when expanded.
        assert_eq!(expanded.summary, initial.summary);
        assert_eq!(expanded.code, initial.code);

        state = state.toggle();
        assert_eq!(model.lines(state), initial);
    }

    #[test]
    fn odd_values_render() {
        let course = Course::new("", "", -2, "", "");
        let lines = CardModel::new(3, &course).lines(CardState::Expanded);
        assert_eq!(lines.credits, "Credits: -2");
        assert_eq!(lines.code, "Code: ");
        assert_eq!(lines.summary, "");
    }

    #[test]
    fn ids_differ_per_row() {
        let course = Course::new("a", "b", 1, "c", "d");
        assert_ne!(CardModel::new(0, &course).id(), CardModel::new(1, &course).id());
    }

    #[test]
    fn details_available_while_collapsed() {
        let course = Course::new("Data Structures", "CS201", 3, "Trees.", "CS101");
        let model = CardModel::new(2, &course);
        assert_eq!(model.lines(CardState::Collapsed).details, None);
        assert_eq!(Some(model.details()), model.lines(CardState::Expanded).details);
        assert_eq!(model.details().prerequisites, "Prerequisites: CS101");
    }
}
