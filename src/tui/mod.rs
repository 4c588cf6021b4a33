//! Terminal UI: render dispatch, theme, components, and mouse regions.

pub mod components;
pub mod interaction;
pub mod theme;
pub mod ui;
