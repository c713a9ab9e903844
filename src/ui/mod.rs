//! Terminal rendering using ratatui.
//!
//! One module per view plus shared chrome and the color theme.

pub mod add_form;
pub mod card;
pub mod common;
pub mod domains;
pub mod monitor;
pub mod theme;

pub use theme::Theme;
