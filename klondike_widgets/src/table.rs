use klondike_core::geometry::{Point, Size};
use klondike_core::pile::{PileId, PileKind};
use klondike_core::state::State;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::Widget;

use crate::card::CardWidget;
use crate::slot::SlotWidget;
use crate::theme::Theme;

/// Terminal cells covered by a box of the table, table coordinates being
/// cells relative to `area`. Anything left of or above `area` is clamped.
pub fn cell_rect(area: Rect, origin: Point, size: Size) -> Rect {
    let cells = |v: f64| v.round().clamp(0.0, f64::from(u16::MAX)) as u16;
    Rect::new(
        area.x.saturating_add(cells(origin.x)),
        area.y.saturating_add(cells(origin.y)),
        cells(size.width),
        cells(size.height),
    )
}

/// Table coordinates of a terminal cell.
pub fn cell_point(area: Rect, column: u16, row: u16) -> Point {
    Point::new(
        f64::from(column) - f64::from(area.x),
        f64::from(row) - f64::from(area.y),
    )
}

/// Draws a whole snapshot: felt, piles in order, then the held cards on top.
pub struct TableWidget<'a> {
    pub state: &'a State,
}

impl<'a> TableWidget<'a> {
    pub fn new(state: &'a State) -> Self {
        Self { state }
    }

    fn render_pile(&self, id: PileId, area: Rect, buf: &mut Buffer) {
        let state = self.state;
        let pile = state.pile(id);
        let hovered = state
            .hand
            .as_ref()
            .and_then(|hand| hand.hovering_slot)
            .is_some_and(|slot| slot == id);
        let rect = |origin: Point| cell_rect(area, origin, state.card_size);

        let Some(top) = pile.top() else {
            let slot = SlotWidget::new().highlighted(hovered);
            let slot = match id.kind() {
                PileKind::Source => slot.symbol('\u{21bb}'), // ↻
                PileKind::Target => slot.symbol('A'),
                PileKind::Packing => slot.symbol('K'),
                PileKind::Waste => slot,
            };
            slot.render(rect(pile.origin), buf);
            return;
        };

        match id.kind() {
            // Source cards keep their face but are never shown.
            PileKind::Source => CardWidget::new(*top).face_down(true).render(rect(top.position), buf),
            PileKind::Waste | PileKind::Target => CardWidget::new(*top)
                .highlighted(hovered)
                .render(rect(top.position), buf),
            PileKind::Packing => {
                let last = pile.len() - 1;
                for (i, card) in pile.cards.iter().enumerate() {
                    CardWidget::new(*card)
                        .highlighted(hovered && i == last)
                        .render(rect(card.position), buf);
                }
            }
        }
    }
}

impl Widget for TableWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                if let Some(cell) = buf.cell_mut((x, y)) {
                    cell.set_symbol(" ");
                    cell.set_bg(if y % 2 == 0 { Theme::FELT } else { Theme::FELT_DARK });
                }
            }
        }

        for id in PileId::ALL {
            self.render_pile(id, area, buf);
        }

        if let Some(hand) = &self.state.hand {
            for card in &hand.cards {
                CardWidget::new(*card).render(cell_rect(area, card.position, self.state.card_size), buf);
            }
        }
    }
}
