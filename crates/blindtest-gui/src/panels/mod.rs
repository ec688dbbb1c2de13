pub mod menu_bar;
pub mod modal;
pub mod status;
pub mod survey;
pub mod viewport;
