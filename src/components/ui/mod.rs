pub mod button;
pub mod field;
pub mod menu;
pub mod tooltip;

// Re-export component symbols so callers can `use crate::components::ui::Button` etc.
pub use button::*;
pub use field::*;
pub use menu::*;
pub use tooltip::*;
