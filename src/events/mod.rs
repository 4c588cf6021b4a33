//! Event handling module for keyboard and mouse events.
//!
//! Input events are translated into [`Action`] values by focused handlers;
//! the event loop in main.rs applies actions to the app state.

mod action;
mod handler;
mod keyboard;
mod mouse;

pub use action::Action;
pub use handler::EventHandler;
