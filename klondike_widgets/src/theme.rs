use ratatui::style::Color;

/// Green-felt palette for the card table
pub struct Theme;

impl Theme {
    // Backgrounds
    pub const FELT: Color = Color::Rgb(16, 72, 44);
    pub const FELT_DARK: Color = Color::Rgb(11, 54, 33);

    // Card colors
    pub const CARD_BORDER: Color = Color::Rgb(108, 117, 125);
    pub const CARD_BACK: Color = Color::Rgb(60, 60, 120);

    // Suit colors
    pub const RED_SUIT: Color = Color::Rgb(230, 57, 70);
    pub const BLACK_SUIT: Color = Color::Rgb(224, 224, 224);

    // Piles
    pub const SLOT_BORDER: Color = Color::Rgb(70, 120, 90);
    /// Border of the pile the held cards would land on
    pub const HOVER: Color = Color::Rgb(255, 214, 10);

    // Text
    pub const DIM_TEXT: Color = Color::Rgb(100, 130, 110);
    pub const BRIGHT_TEXT: Color = Color::Rgb(255, 255, 255);
}
