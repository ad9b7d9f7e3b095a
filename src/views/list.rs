use eframe::egui;

use crate::catalog::Catalog;
use crate::theme::Palette;
use crate::ui_constants::LIST_PADDING;
use crate::views::cards::{course_card, CardModel};

/// One row model per course, in catalog order.
pub fn rows(catalog: &Catalog) -> Vec<CardModel<'_>> {
    catalog
        .iter()
        .enumerate()
        .map(|(index, course)| CardModel::new(index, course))
        .collect()
}

/// Vertically scrollable column of course cards. Reads the catalog only.
/// Returns each card's click response, in row order.
pub fn course_list(ui: &mut egui::Ui, catalog: &Catalog, palette: &Palette) -> Vec<egui::Response> {
    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            // Cards carry their own outer margin.
            ui.spacing_mut().item_spacing.y = 0.0;
            ui.add_space(LIST_PADDING);
            let responses: Vec<egui::Response> = rows(catalog)
                .iter()
                .map(|row| course_card(ui, row, palette))
                .collect();
            ui.add_space(LIST_PADDING);
            responses
        })
        .inner
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Course;
    use crate::ui_constants::card;
    use crate::views::cards::state::{load_state, store_state};
    use crate::views::cards::model::CardState;

    fn permutations(items: Vec<Course>) -> Vec<Vec<Course>> {
        if items.len() <= 1 {
            return vec![items];
        }
        let mut out = Vec::new();
        for i in 0..items.len() {
            let mut rest = items.clone();
            let head = rest.remove(i);
            for mut tail in permutations(rest) {
                tail.insert(0, head.clone());
                out.push(tail);
            }
        }
        out
    }

    fn render(ctx: &egui::Context, catalog: &Catalog) {
        run_frame(ctx, catalog, Vec::new());
    }

    // One frame with the given input; returns the card rects it laid out.
    fn run_frame(ctx: &egui::Context, catalog: &Catalog, events: Vec<egui::Event>) -> Vec<egui::Rect> {
        let mut rects = Vec::new();
        let input = egui::RawInput {
            events,
            ..Default::default()
        };
        let _ = ctx.run(input, |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                rects = course_list(ui, catalog, &Palette::light())
                    .iter()
                    .map(|r| r.rect)
                    .collect();
            });
        });
        rects
    }

    fn button(pos: egui::Pos2, pressed: bool) -> egui::Event {
        egui::Event::PointerButton {
            pos,
            button: egui::PointerButton::Primary,
            pressed,
            modifiers: egui::Modifiers::default(),
        }
    }

    /// Hover, press, release at `pos`; returns the rects after the release frame.
    fn click_at(ctx: &egui::Context, catalog: &Catalog, pos: egui::Pos2) -> Vec<egui::Rect> {
        run_frame(ctx, catalog, vec![egui::Event::PointerMoved(pos)]);
        run_frame(ctx, catalog, vec![button(pos, true)]);
        let rects = run_frame(ctx, catalog, vec![button(pos, false)]);
        // Leave the pointer parked outside every card.
        run_frame(ctx, catalog, vec![egui::Event::PointerGone]);
        rects
    }

    fn states(ctx: &egui::Context, catalog: &Catalog) -> Vec<CardState> {
        rows(catalog).iter().map(|r| load_state(ctx, r.id())).collect()
    }

    fn only_expanded(n: usize, expanded: &[usize]) -> Vec<CardState> {
        (0..n)
            .map(|i| if expanded.contains(&i) { CardState::Expanded } else { CardState::Collapsed })
            .collect()
    }

    #[test]
    fn rows_follow_catalog_order_for_every_permutation() {
        let sample: Vec<Course> = Catalog::sample().iter().take(4).cloned().collect();
        for perm in permutations(sample) {
            let expected: Vec<String> = perm.iter().map(|c| c.code.clone()).collect();
            let catalog = Catalog::new(perm);
            let got: Vec<String> = rows(&catalog).iter().map(|r| r.course.code.clone()).collect();
            assert_eq!(got, expected);
            for (i, row) in rows(&catalog).iter().enumerate() {
                assert_eq!(row.index, i);
            }
        }
    }

    #[test]
    fn empty_catalog_has_no_rows() {
        assert!(rows(&Catalog::default()).is_empty());
    }

    #[test]
    fn renders_odd_courses_in_both_states() {
        let catalog = Catalog::new(vec![
            Course::new("", "", 0, "", ""),
            Course::new("Long", "L1", -4, "w".repeat(500), "None"),
            Course::new("Ünïcödé", "U1", 1, "ü".repeat(61), ""),
        ]);
        let ctx = egui::Context::default();
        render(&ctx, &catalog);

        for row in rows(&catalog) {
            store_state(&ctx, row.id(), CardState::Expanded);
        }
        render(&ctx, &catalog);
        render(&ctx, &catalog);
    }

    #[test]
    fn rendering_does_not_touch_card_state() {
        let catalog = Catalog::sample();
        let ctx = egui::Context::default();
        let rows = rows(&catalog);
        store_state(&ctx, rows[2].id(), CardState::Expanded);

        render(&ctx, &catalog);

        for row in &rows {
            let expected = if row.index == 2 { CardState::Expanded } else { CardState::Collapsed };
            assert_eq!(load_state(&ctx, row.id()), expected);
        }
        assert_eq!(catalog.len(), 6);
    }

    #[test]
    fn click_toggles_only_that_card() {
        let catalog = Catalog::sample();
        let n = catalog.len();
        let ctx = egui::Context::default();
        let rects = run_frame(&ctx, &catalog, Vec::new());
        assert_eq!(rects.len(), n);

        let rects = click_at(&ctx, &catalog, rects[1].center());
        assert_eq!(states(&ctx, &catalog), only_expanded(n, &[1]));

        click_at(&ctx, &catalog, rects[1].center());
        assert_eq!(states(&ctx, &catalog), only_expanded(n, &[]));
    }

    #[test]
    fn click_on_title_area_toggles() {
        let catalog = Catalog::sample();
        let n = catalog.len();
        let ctx = egui::Context::default();
        let rects = run_frame(&ctx, &catalog, Vec::new());

        // Just inside the inner margin, on the heading line.
        let title = rects[2].left_top() + egui::vec2(30.0, card::INNER_MARGIN + 6.0);
        click_at(&ctx, &catalog, title);
        assert_eq!(states(&ctx, &catalog), only_expanded(n, &[2]));
    }

    #[test]
    fn click_in_gap_between_cards_does_nothing() {
        let catalog = Catalog::sample();
        let n = catalog.len();
        let ctx = egui::Context::default();
        let rects = run_frame(&ctx, &catalog, Vec::new());

        // 3px above card 3, inside its outer margin.
        let gap = egui::pos2(rects[3].center().x, rects[3].top() - 3.0);
        assert!(!rects[2].contains(gap));
        click_at(&ctx, &catalog, gap);
        assert_eq!(states(&ctx, &catalog), only_expanded(n, &[]));
    }
}
