use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::Widget;

use crate::card::{draw_border, put, MIN_HEIGHT, MIN_WIDTH};
use crate::theme::Theme;

/// Dashed outline of an empty pile
pub struct SlotWidget {
    pub highlighted: bool,
    /// Hint drawn in the middle, e.g. the recycle arrow on an empty source
    pub symbol: Option<char>,
}

impl SlotWidget {
    pub fn new() -> Self {
        Self {
            highlighted: false,
            symbol: None,
        }
    }

    pub fn highlighted(mut self, highlighted: bool) -> Self {
        self.highlighted = highlighted;
        self
    }

    pub fn symbol(mut self, symbol: char) -> Self {
        self.symbol = Some(symbol);
        self
    }
}

impl Default for SlotWidget {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for SlotWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
            return;
        }
        let color = if self.highlighted {
            Theme::HOVER
        } else {
            Theme::SLOT_BORDER
        };
        let style = Style::default().fg(color);
        draw_border(area, buf, style, ['\u{250c}', '\u{2510}', '\u{2514}', '\u{2518}'], '\u{2504}', '\u{2506}');
        if let Some(symbol) = self.symbol {
            let style = Style::default().fg(Theme::DIM_TEXT);
            put(buf, area.x + area.width / 2, area.y + area.height / 2, symbol, style);
        }
    }
}
