pub mod card;
pub mod slot;
pub mod table;
pub mod theme;

pub use card::CardWidget;
pub use slot::SlotWidget;
pub use table::{cell_point, cell_rect, TableWidget};
pub use theme::Theme;
