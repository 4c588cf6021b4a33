//! Keyboard event handling by input mode.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::{App, InputMode};
use crate::calendar::TripLeg;

use super::Action;

/// Handle keyboard events and return the appropriate action.
pub fn handle_key_event(app: &App, key: KeyEvent) -> Action {
    match app.input_mode {
        InputMode::Normal => handle_normal_mode(key),
        InputMode::SearchInput => handle_search_mode(key),
        InputMode::Calendar => handle_calendar_mode(app, key),
        InputMode::Help => handle_help_mode(key),
    }
}

fn handle_normal_mode(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Char('q') => Action::Quit,
        KeyCode::Char('?') => Action::OpenHelp,

        // Travel-type tabs
        KeyCode::Tab => Action::NextTab,
        KeyCode::BackTab => Action::PrevTab,
        KeyCode::Char(c @ '1'..='5') => Action::SelectTab((c as usize) - ('1' as usize)),

        // Deals list
        KeyCode::Char('j') | KeyCode::Down => Action::NextDeal,
        KeyCode::Char('k') | KeyCode::Up => Action::PrevDeal,

        // Destination input
        KeyCode::Char('i') | KeyCode::Char('/') => Action::EnterSearch,

        // Swap origin and destination
        KeyCode::Char('s') => Action::SwapCities,

        // Date pickers
        KeyCode::Char('d') => Action::OpenCalendar(TripLeg::Departure),
        KeyCode::Char('r') => Action::OpenCalendar(TripLeg::Return),

        // AI recommendations
        KeyCode::Char('a') => Action::AskAi,

        _ => Action::None,
    }
}

fn handle_search_mode(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Esc | KeyCode::Enter => Action::ExitSearch,

        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Action::ClearInput,

        // Navigation - emacs style
        KeyCode::Char('a') if key.modifiers.contains(KeyModifiers::CONTROL) => Action::InputHome,
        KeyCode::Char('e') if key.modifiers.contains(KeyModifiers::CONTROL) => Action::InputEnd,
        KeyCode::Home => Action::InputHome,
        KeyCode::End => Action::InputEnd,

        // Basic editing
        KeyCode::Backspace => Action::InputBackspace,
        KeyCode::Delete => Action::InputDelete,
        KeyCode::Left => Action::InputLeft,
        KeyCode::Right => Action::InputRight,

        // Character input
        KeyCode::Char(c) => Action::InputChar(c),

        _ => Action::None,
    }
}

fn handle_calendar_mode(app: &App, key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => Action::CloseCalendar,
        KeyCode::Enter => Action::ConfirmCalendar,

        // Day-by-day movement
        KeyCode::Char('h') | KeyCode::Left => Action::CalendarPrevDay,
        KeyCode::Char('l') | KeyCode::Right => Action::CalendarNextDay,
        KeyCode::Char('j') | KeyCode::Down => Action::CalendarNextWeek,
        KeyCode::Char('k') | KeyCode::Up => Action::CalendarPrevWeek,

        // Month jumps
        KeyCode::Char('n') | KeyCode::PageDown => Action::CalendarNextMonth,
        KeyCode::Char('p') | KeyCode::PageUp => Action::CalendarPrevMonth,

        // Scroll - vim style
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Action::CalendarScrollUp(app.viewport_height / 2)
        }
        KeyCode::Char('d') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Action::CalendarScrollDown(app.viewport_height / 2)
        }

        _ => Action::None,
    }
}

fn handle_help_mode(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q') => Action::CloseHelp,
        _ => Action::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    #[test]
    fn test_normal_mode_keys() {
        let app = App::new("上海".to_string(), 6);
        assert_eq!(handle_key_event(&app, key(KeyCode::Char('q'))), Action::Quit);
        assert_eq!(
            handle_key_event(&app, key(KeyCode::Char('d'))),
            Action::OpenCalendar(TripLeg::Departure)
        );
        assert_eq!(
            handle_key_event(&app, key(KeyCode::Char('r'))),
            Action::OpenCalendar(TripLeg::Return)
        );
        assert_eq!(handle_key_event(&app, key(KeyCode::Char('a'))), Action::AskAi);
        assert_eq!(handle_key_event(&app, key(KeyCode::Char('3'))), Action::SelectTab(2));
    }

    #[test]
    fn test_calendar_mode_keys() {
        let mut app = App::new("上海".to_string(), 6);
        app.open_calendar(TripLeg::Departure);
        assert_eq!(handle_key_event(&app, key(KeyCode::Enter)), Action::ConfirmCalendar);
        assert_eq!(handle_key_event(&app, key(KeyCode::Esc)), Action::CloseCalendar);
        assert_eq!(
            handle_key_event(&app, key(KeyCode::Char('j'))),
            Action::CalendarNextWeek
        );
        assert_eq!(
            handle_key_event(&app, key(KeyCode::Char('n'))),
            Action::CalendarNextMonth
        );
        assert_eq!(
            handle_key_event(&app, ctrl('d')),
            Action::CalendarScrollDown(app.viewport_height / 2)
        );
    }

    #[test]
    fn test_search_mode_passes_characters_through() {
        let mut app = App::new("上海".to_string(), 6);
        app.enter_search();
        // 'q' must type, not quit, while the search field has focus.
        assert_eq!(
            handle_key_event(&app, key(KeyCode::Char('q'))),
            Action::InputChar('q')
        );
        assert_eq!(handle_key_event(&app, ctrl('c')), Action::ClearInput);
        assert_eq!(handle_key_event(&app, key(KeyCode::Esc)), Action::ExitSearch);
    }
}
