#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ratio {
    pub x: f64,
    pub y: f64,
}

/// Read-only layout inputs. Units are whatever the caller measures the
/// viewport in: pixels for a browser-sized surface, cells for a terminal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    /// Aspect ratio of the playing area fitted into the viewport
    pub aspect_ratio: Ratio,
    pub container_margin: f64,
    /// Gap between neighbouring piles
    pub card_margin: f64,
    pub columns: u32,
    pub card_ratio: Ratio,
    /// Fraction of the card height that each fanned packing card shows
    pub card_stack_offset: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            aspect_ratio: Ratio { x: 16.0, y: 10.0 },
            container_margin: 40.0,
            card_margin: 10.0,
            columns: 7,
            card_ratio: Ratio { x: 63.0, y: 88.0 },
            card_stack_offset: 0.2,
        }
    }
}

impl Config {
    /// Cell-based preset. Terminal cells are roughly twice as tall as wide.
    pub fn terminal() -> Self {
        Self {
            aspect_ratio: Ratio { x: 2.0, y: 1.0 },
            container_margin: 1.0,
            card_margin: 1.0,
            columns: 7,
            card_ratio: Ratio { x: 9.0, y: 7.0 },
            card_stack_offset: 0.25,
        }
    }
}
