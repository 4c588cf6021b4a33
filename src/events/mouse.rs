//! Mouse event handling.
//!
//! Mouse events are dispatched through the interaction registry, which is
//! populated by UI components during each render. This allows components
//! to define their own clickable/scrollable regions without modifying
//! the mouse handler.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use crate::app::{App, InputMode};

use super::Action;

/// Handle mouse events and return the appropriate action.
///
/// Clicks go through the interaction registry (day cells, tabs, the AI and
/// confirm buttons register themselves during render). Scrolling falls back
/// to scrolling the calendar overlay when it is open.
pub fn handle_mouse_event(app: &App, mouse: MouseEvent) -> Action {
    let x = mouse.column;
    let y = mouse.row;

    match mouse.kind {
        MouseEventKind::ScrollUp => {
            let action = app.interactions.handle_scroll_up(x, y);
            if action == Action::None && app.input_mode == InputMode::Calendar {
                Action::CalendarScrollUp(3)
            } else {
                action
            }
        }
        MouseEventKind::ScrollDown => {
            let action = app.interactions.handle_scroll_down(x, y);
            if action == Action::None && app.input_mode == InputMode::Calendar {
                Action::CalendarScrollDown(3)
            } else {
                action
            }
        }
        MouseEventKind::Down(MouseButton::Left) => app.interactions.handle_click(x, y),
        _ => Action::None,
    }
}
