pub mod config;
pub mod consts;
pub mod error;
pub mod geometry;
pub mod script;
pub mod survey;
pub mod viewport;
