//! UI components for the TUI.
//!
//! This module organizes UI rendering into logical components.
//!
//! # Component Organization
//!
//! - `search_bar` - Destination search input with the AI recommendation button
//! - `category_row` - Category shortcut chips under the search bar
//! - `booking_form` - Travel-type tabs, city pair, and date rows
//! - `deals_list` - Promotional flight deal cards
//! - `calendar_view` - Full-screen date picker overlay
//! - `help_popup` - Help overlay with keybindings

mod booking_form;
mod calendar_view;
mod category_row;
mod deals_list;
mod help_popup;
mod search_bar;

// Re-export all render functions for use in ui.rs
pub use booking_form::render_booking_form;
pub use calendar_view::render_calendar;
pub use category_row::render_category_row;
pub use deals_list::render_deals_list;
pub use help_popup::render_help_popup;
pub use search_bar::render_search_bar;

/// Terminal column width of a string. CJK characters occupy two cells.
pub(crate) fn display_width(s: &str) -> usize {
    s.chars().map(char_width).sum()
}

pub(crate) fn char_width(c: char) -> usize {
    if c.is_ascii() { 1 } else { 2 }
}
