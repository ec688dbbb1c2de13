mod capture;
mod images;
mod layout;
mod ui;

pub use capture::WindowCapture;
pub use images::{ImagesState, SlotImage};
pub use layout::CardLayout;
pub use ui::UIState;
