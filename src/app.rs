use crate::calendar::{CalendarDate, DatePicker, TripLeg};
use crate::deals::{seed_deals, DealsState};
use crate::tui::interaction::InteractionRegistry;

/// Which part of the UI owns keyboard input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputMode {
    Normal,      // Browsing the home screen
    SearchInput, // Typing a destination
    Calendar,    // Date picker overlay open
    Help,        // Help popup showing all hotkeys
}

/// Travel-type tabs across the top of the booking card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TravelType {
    Flight,
    Train,
    Hotel,
    Vacation,
    Ticket,
}

impl TravelType {
    pub const ALL: [TravelType; 5] = [
        TravelType::Flight,
        TravelType::Train,
        TravelType::Hotel,
        TravelType::Vacation,
        TravelType::Ticket,
    ];

    pub fn label(self) -> &'static str {
        match self {
            TravelType::Flight => "机票",
            TravelType::Train => "火车票",
            TravelType::Hotel => "酒店",
            TravelType::Vacation => "度假",
            TravelType::Ticket => "门票",
        }
    }

    pub fn index(self) -> usize {
        Self::ALL.iter().position(|t| *t == self).unwrap_or(0)
    }
}

/// Category shortcut row under the search bar. Display-only.
pub const CATEGORY_SHORTCUTS: [&str; 5] = ["牛人专线", "牛人严选", "长隆酒景", "包车游", "迪士尼"];

/// Spinner frames for loading animation
pub const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// A rectangular screen region used for click hit testing.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClickRegion {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl ClickRegion {
    pub fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self { x, y, width, height }
    }

    pub fn from_rect(rect: ratatui::layout::Rect) -> Self {
        Self::new(rect.x, rect.y, rect.width, rect.height)
    }

    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x && x < self.x + self.width && y >= self.y && y < self.y + self.height
    }
}

pub struct App {
    pub input_mode: InputMode,
    pub active_tab: TravelType,
    pub origin: String,
    pub destination: String,
    pub cursor_position: usize, // char index into destination
    pub departure: CalendarDate,
    pub return_date: Option<CalendarDate>,
    pub deals: DealsState,
    pub loading_ai: bool,
    pub spinner_frame: usize,
    pub date_picker: Option<DatePicker>,
    pub months_shown: usize,
    pub interactions: InteractionRegistry,
    pub viewport_height: usize,
    pub should_quit: bool,
}

impl App {
    pub fn new(origin: String, months_shown: usize) -> Self {
        Self {
            input_mode: InputMode::Normal,
            active_tab: TravelType::Flight,
            origin,
            destination: String::new(),
            cursor_position: 0,
            departure: CalendarDate::today(),
            return_date: None,
            deals: DealsState::new(seed_deals()),
            loading_ai: false,
            spinner_frame: 0,
            date_picker: None,
            months_shown,
            interactions: InteractionRegistry::new(),
            viewport_height: 20, // Default, updated on render
            should_quit: false,
        }
    }

    /// Advance spinner animation
    pub fn tick_spinner(&mut self) {
        self.spinner_frame = (self.spinner_frame + 1) % SPINNER_FRAMES.len();
    }

    /// Get current spinner character
    pub fn spinner(&self) -> &'static str {
        SPINNER_FRAMES[self.spinner_frame]
    }

    /// Update viewport height (called from render)
    pub fn set_viewport_height(&mut self, height: usize) {
        self.viewport_height = height;
    }

    // === Tabs ===

    pub fn next_tab(&mut self) {
        let next = (self.active_tab.index() + 1) % TravelType::ALL.len();
        self.active_tab = TravelType::ALL[next];
    }

    pub fn prev_tab(&mut self) {
        let len = TravelType::ALL.len();
        let prev = self.active_tab.index().checked_sub(1).unwrap_or(len - 1);
        self.active_tab = TravelType::ALL[prev];
    }

    pub fn select_tab(&mut self, index: usize) {
        if let Some(tab) = TravelType::ALL.get(index) {
            self.active_tab = *tab;
        }
    }

    // === Cities ===

    /// Exchange origin and destination. Ignored while the destination is
    /// still empty.
    pub fn swap_cities(&mut self) {
        if !self.destination.is_empty() {
            std::mem::swap(&mut self.origin, &mut self.destination);
            self.cursor_position = self.destination.chars().count();
        }
    }

    // === Calendar overlay ===

    /// Open the date picker for one trip leg.
    pub fn open_calendar(&mut self, leg: TripLeg) {
        let initial = match leg {
            TripLeg::Departure => self.departure,
            TripLeg::Return => self.return_date.unwrap_or_else(CalendarDate::today),
        };
        self.date_picker = Some(DatePicker::open(initial, leg, self.months_shown));
        self.input_mode = InputMode::Calendar;
    }

    /// Close the date picker without confirming. No date is delivered.
    pub fn close_calendar(&mut self) {
        self.date_picker = None;
        self.input_mode = InputMode::Normal;
    }

    /// Confirm the picker's selection into the booking form and close it.
    ///
    /// A departure later than the current return date clears the return.
    pub fn confirm_calendar(&mut self) {
        if let Some(picker) = &self.date_picker {
            let date = picker.confirm();
            match picker.leg {
                TripLeg::Departure => {
                    self.departure = date;
                    if self.return_date.is_some_and(|r| date > r) {
                        self.return_date = None;
                    }
                }
                TripLeg::Return => self.return_date = Some(date),
            }
        }
        self.close_calendar();
    }

    /// Scroll the calendar overlay up by n rows.
    pub fn calendar_scroll_up(&mut self, n: usize) {
        if let Some(picker) = &mut self.date_picker {
            picker.scroll_offset = picker.scroll_offset.saturating_sub(n);
        }
    }

    /// Scroll the calendar overlay down by n rows.
    pub fn calendar_scroll_down(&mut self, n: usize) {
        if let Some(picker) = &mut self.date_picker {
            picker.scroll_offset = picker.scroll_offset.saturating_add(n);
        }
    }

    // === Search input ===

    /// Enter search-input mode
    pub fn enter_search(&mut self) {
        self.input_mode = InputMode::SearchInput;
    }

    /// Exit to normal mode
    pub fn exit_search(&mut self) {
        self.input_mode = InputMode::Normal;
    }

    /// Open the help popup
    pub fn open_help(&mut self) {
        self.input_mode = InputMode::Help;
    }

    /// Close the help popup
    pub fn close_help(&mut self) {
        self.input_mode = InputMode::Normal;
    }

    fn byte_pos(&self) -> usize {
        self.destination
            .char_indices()
            .nth(self.cursor_position)
            .map(|(i, _)| i)
            .unwrap_or(self.destination.len())
    }

    /// Add a character to the destination input. Char-indexed because the
    /// storefront takes CJK input.
    pub fn input_char(&mut self, c: char) {
        let pos = self.byte_pos();
        self.destination.insert(pos, c);
        self.cursor_position += 1;
    }

    /// Delete character before cursor
    pub fn input_backspace(&mut self) {
        if self.cursor_position > 0 {
            self.cursor_position -= 1;
            let pos = self.byte_pos();
            self.destination.remove(pos);
        }
    }

    /// Delete character at cursor
    pub fn input_delete(&mut self) {
        if self.cursor_position < self.destination.chars().count() {
            let pos = self.byte_pos();
            self.destination.remove(pos);
        }
    }

    /// Move cursor left
    pub fn input_left(&mut self) {
        if self.cursor_position > 0 {
            self.cursor_position -= 1;
        }
    }

    /// Move cursor right
    pub fn input_right(&mut self) {
        if self.cursor_position < self.destination.chars().count() {
            self.cursor_position += 1;
        }
    }

    /// Move cursor to start of input
    pub fn input_home(&mut self) {
        self.cursor_position = 0;
    }

    /// Move cursor to end of input
    pub fn input_end(&mut self) {
        self.cursor_position = self.destination.chars().count();
    }

    /// Clear the destination input
    pub fn clear_input(&mut self) {
        self.destination.clear();
        self.cursor_position = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> CalendarDate {
        CalendarDate::new(year, month, day).unwrap()
    }

    fn app() -> App {
        App::new("上海".to_string(), 6)
    }

    #[test]
    fn test_tab_cycling_wraps() {
        let mut app = app();
        assert_eq!(app.active_tab, TravelType::Flight);
        app.prev_tab();
        assert_eq!(app.active_tab, TravelType::Ticket);
        app.next_tab();
        assert_eq!(app.active_tab, TravelType::Flight);
        app.select_tab(2);
        assert_eq!(app.active_tab, TravelType::Hotel);
        app.select_tab(99); // out of range is ignored
        assert_eq!(app.active_tab, TravelType::Hotel);
    }

    #[test]
    fn test_swap_requires_destination() {
        let mut app = app();
        app.swap_cities();
        assert_eq!(app.origin, "上海");

        app.destination = "北京".to_string();
        app.swap_cities();
        assert_eq!(app.origin, "北京");
        assert_eq!(app.destination, "上海");
        assert_eq!(app.cursor_position, 2);
    }

    #[test]
    fn test_confirm_departure_clears_stale_return() {
        let mut app = app();
        app.return_date = Some(date(2025, 11, 25));
        app.date_picker = Some(DatePicker::open_at(
            date(2025, 11, 28),
            TripLeg::Departure,
            date(2025, 11, 20),
            6,
        ));
        app.input_mode = InputMode::Calendar;

        app.confirm_calendar();
        assert_eq!(app.departure, date(2025, 11, 28));
        assert_eq!(app.return_date, None);
        assert!(app.date_picker.is_none());
        assert_eq!(app.input_mode, InputMode::Normal);
    }

    #[test]
    fn test_confirm_return_keeps_departure() {
        let mut app = app();
        app.departure = date(2025, 11, 24);
        app.date_picker = Some(DatePicker::open_at(
            date(2025, 11, 28),
            TripLeg::Return,
            date(2025, 11, 20),
            6,
        ));

        app.confirm_calendar();
        assert_eq!(app.departure, date(2025, 11, 24));
        assert_eq!(app.return_date, Some(date(2025, 11, 28)));
    }

    #[test]
    fn test_close_calendar_delivers_nothing() {
        let mut app = app();
        let before = app.departure;
        app.open_calendar(TripLeg::Departure);
        if let Some(picker) = &mut app.date_picker {
            let later = picker.today().plus_days(3).unwrap();
            picker.select_day(later);
        }
        app.close_calendar();
        assert_eq!(app.departure, before);
        assert_eq!(app.input_mode, InputMode::Normal);
    }

    #[test]
    fn test_cjk_input_editing() {
        let mut app = app();
        app.enter_search();
        for c in "三亚".chars() {
            app.input_char(c);
        }
        assert_eq!(app.destination, "三亚");
        app.input_left();
        app.input_char('个');
        assert_eq!(app.destination, "三个亚");
        app.input_backspace();
        assert_eq!(app.destination, "三亚");
        app.input_home();
        app.input_delete();
        assert_eq!(app.destination, "亚");
    }

    #[test]
    fn test_click_region_contains() {
        let region = ClickRegion::new(10, 10, 20, 10);
        assert!(region.contains(10, 10)); // top-left corner
        assert!(region.contains(29, 19)); // just inside bottom-right
        assert!(!region.contains(30, 20)); // just outside
        assert!(!region.contains(9, 10)); // just left
    }
}
