use klondike_core::card::Card;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::Widget;

use crate::theme::Theme;

/// Smallest area a card still draws in: a border around one cell of label.
pub const MIN_WIDTH: u16 = 3;
pub const MIN_HEIGHT: u16 = 2;

/// A playing card of whatever size the layout hands out
pub struct CardWidget {
    pub card: Card,
    pub face_down: bool,
    pub highlighted: bool,
}

impl CardWidget {
    pub fn new(card: Card) -> Self {
        Self {
            card,
            face_down: !card.is_face_up(),
            highlighted: false,
        }
    }

    pub fn face_down(mut self, face_down: bool) -> Self {
        self.face_down = face_down;
        self
    }

    pub fn highlighted(mut self, highlighted: bool) -> Self {
        self.highlighted = highlighted;
        self
    }

    fn suit_color(&self) -> Color {
        if self.card.suit.is_red() {
            Theme::RED_SUIT
        } else {
            Theme::BLACK_SUIT
        }
    }

    fn border_color(&self) -> Color {
        if self.highlighted {
            Theme::HOVER
        } else {
            Theme::CARD_BORDER
        }
    }
}

impl Widget for CardWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
            return;
        }

        let border_style = Style::default().fg(self.border_color());
        draw_border(area, buf, border_style, ['\u{256d}', '\u{256e}', '\u{2570}', '\u{256f}'], '\u{2500}', '\u{2502}');

        if self.face_down {
            let fill_style = Style::default().fg(Theme::CARD_BACK);
            for (x, y) in interior(area) {
                let pattern = if (x + y) % 2 == 0 { '\u{2593}' } else { '\u{2591}' }; // ▓ ░
                put(buf, x, y, pattern, fill_style);
            }
            return;
        }

        for (x, y) in interior(area) {
            put(buf, x, y, ' ', Style::default());
        }

        let suit_color = self.suit_color();
        let rank_style = Style::default().fg(suit_color).add_modifier(Modifier::BOLD);
        let suit_style = Style::default().fg(suit_color);
        let rank = self.card.rank.short_name();
        let suit = self.card.suit.symbol();
        let right = area.right() - 1;

        // Two-row cards carry their label on the top border.
        let label_y = if area.height > 2 { area.y + 1 } else { area.y };
        let mut x = area.x + 1;
        for ch in rank.chars() {
            if x < right {
                put(buf, x, label_y, ch, rank_style);
            }
            x += 1;
        }
        if x < right {
            put(buf, x, label_y, suit, suit_style);
        }

        let label_width = rank.len() as u16 + 1;
        if area.height >= 4 && area.width >= label_width + 2 {
            let y = area.bottom() - 2;
            let x = right - label_width;
            put(buf, x, y, suit, suit_style);
            for (i, ch) in rank.chars().enumerate() {
                put(buf, x + 1 + i as u16, y, ch, rank_style);
            }
        }

        if area.height >= 5 {
            put(buf, area.x + area.width / 2, area.y + area.height / 2, suit, suit_style);
        }
    }
}

/// Writes one cell, skipping anything that falls outside the buffer.
pub(crate) fn put(buf: &mut Buffer, x: u16, y: u16, ch: char, style: Style) {
    if let Some(cell) = buf.cell_mut((x, y)) {
        cell.set_char(ch).set_style(style);
    }
}

pub(crate) fn interior(area: Rect) -> impl Iterator<Item = (u16, u16)> {
    let xs = area.x + 1..area.right().saturating_sub(1);
    (area.y + 1..area.bottom().saturating_sub(1)).flat_map(move |y| xs.clone().map(move |x| (x, y)))
}

/// Corners in reading order: top-left, top-right, bottom-left, bottom-right.
pub(crate) fn draw_border(
    area: Rect,
    buf: &mut Buffer,
    style: Style,
    corners: [char; 4],
    horizontal: char,
    vertical: char,
) {
    let (left, top) = (area.x, area.y);
    let (right, bottom) = (area.right() - 1, area.bottom() - 1);
    for x in left + 1..right {
        put(buf, x, top, horizontal, style);
        put(buf, x, bottom, horizontal, style);
    }
    for y in top + 1..bottom {
        put(buf, left, y, vertical, style);
        put(buf, right, y, vertical, style);
    }
    put(buf, left, top, corners[0], style);
    put(buf, right, top, corners[1], style);
    put(buf, left, bottom, corners[2], style);
    put(buf, right, bottom, corners[3], style);
}

#[cfg(test)]
mod tests {
    use super::*;
    use klondike_core::card::{Rank, Suit};

    fn symbol(buf: &Buffer, x: u16, y: u16) -> &str {
        buf[(x, y)].symbol()
    }

    #[test]
    fn test_face_up_card_shows_rank_and_suit() {
        let area = Rect::new(0, 0, 9, 7);
        let mut buf = Buffer::empty(area);
        CardWidget::new(Card::new(Rank::Ten, Suit::Hearts)).render(area, &mut buf);
        assert_eq!(symbol(&buf, 0, 0), "\u{256d}");
        assert_eq!(symbol(&buf, 8, 6), "\u{256f}");
        assert_eq!(symbol(&buf, 1, 1), "1");
        assert_eq!(symbol(&buf, 2, 1), "0");
        assert_eq!(symbol(&buf, 3, 1), "\u{2665}");
        assert_eq!(symbol(&buf, 4, 3), "\u{2665}");
        assert_eq!(symbol(&buf, 5, 5), "\u{2665}");
        assert_eq!(symbol(&buf, 7, 5), "0");
        assert_eq!(buf[(1, 1)].fg, Theme::RED_SUIT);
    }

    #[test]
    fn test_face_down_card_shows_pattern() {
        let area = Rect::new(0, 0, 5, 3);
        let mut buf = Buffer::empty(area);
        CardWidget::new(Card::new(Rank::Ace, Suit::Spades).face_down()).render(area, &mut buf);
        assert_eq!(symbol(&buf, 1, 1), "\u{2593}");
        assert_eq!(symbol(&buf, 2, 1), "\u{2591}");
    }

    #[test]
    fn test_two_row_card_labels_the_border() {
        let area = Rect::new(0, 0, 4, 2);
        let mut buf = Buffer::empty(area);
        CardWidget::new(Card::new(Rank::King, Suit::Clubs)).render(area, &mut buf);
        assert_eq!(symbol(&buf, 1, 0), "K");
        assert_eq!(symbol(&buf, 2, 0), "\u{2663}");
        assert_eq!(symbol(&buf, 3, 0), "\u{256e}");
    }

    #[test]
    fn test_highlight_colors_the_border() {
        let area = Rect::new(0, 0, 5, 3);
        let mut buf = Buffer::empty(area);
        CardWidget::new(Card::new(Rank::Ace, Suit::Spades))
            .highlighted(true)
            .render(area, &mut buf);
        assert_eq!(buf[(0, 0)].fg, Theme::HOVER);
    }

    #[test]
    fn test_too_small_area_draws_nothing() {
        let area = Rect::new(0, 0, 2, 2);
        let mut buf = Buffer::empty(area);
        CardWidget::new(Card::new(Rank::Ace, Suit::Spades)).render(area, &mut buf);
        assert_eq!(buf, Buffer::empty(area));
    }

    #[test]
    fn test_card_past_the_buffer_edge_is_clipped() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 4, 4));
        CardWidget::new(Card::new(Rank::Ace, Suit::Spades)).render(Rect::new(2, 2, 5, 3), &mut buf);
        assert_eq!(symbol(&buf, 2, 2), "\u{256d}");
        assert_eq!(symbol(&buf, 3, 3), "A");
    }
}
