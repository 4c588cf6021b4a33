//! Action enum for decoupling input handling from state changes.
//!
//! Actions represent user intents that can be logged, replayed, or customized.

use crate::calendar::{CalendarDate, TripLeg};

/// Actions that can be dispatched from event handlers.
///
/// These represent user intents and are processed by the event loop to
/// update app state.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // === Application ===
    /// Quit the application
    Quit,

    // === Mode switching ===
    /// Open help popup
    OpenHelp,
    /// Close help popup
    CloseHelp,
    /// Enter destination-input mode
    EnterSearch,
    /// Exit destination-input mode
    ExitSearch,

    // === Travel-type tabs ===
    /// Select next tab
    NextTab,
    /// Select previous tab
    PrevTab,
    /// Select tab by index (1-5)
    SelectTab(usize),

    // === Cities ===
    /// Exchange origin and destination
    SwapCities,

    // === Deals list ===
    /// Move deal cursor down
    NextDeal,
    /// Move deal cursor up
    PrevDeal,
    /// Select a deal card by index (mouse)
    SelectDeal(usize),

    // === AI recommendations ===
    /// Ask for AI destination recommendations
    AskAi,

    // === Destination input ===
    /// Add character to destination input
    InputChar(char),
    /// Delete character before cursor
    InputBackspace,
    /// Delete character at cursor
    InputDelete,
    /// Move cursor left
    InputLeft,
    /// Move cursor right
    InputRight,
    /// Move cursor to start
    InputHome,
    /// Move cursor to end
    InputEnd,
    /// Clear destination input (Ctrl+C)
    ClearInput,

    // === Calendar overlay ===
    /// Open the date picker for one trip leg
    OpenCalendar(TripLeg),
    /// Close the picker without confirming
    CloseCalendar,
    /// Confirm the picker's selection
    ConfirmCalendar,
    /// Select a specific day cell (mouse)
    SelectDay(CalendarDate),
    /// Move selection one day back
    CalendarPrevDay,
    /// Move selection one day forward
    CalendarNextDay,
    /// Move selection one week back
    CalendarPrevWeek,
    /// Move selection one week forward
    CalendarNextWeek,
    /// Jump selection one month back
    CalendarPrevMonth,
    /// Jump selection one month forward
    CalendarNextMonth,
    /// Scroll the overlay up by n rows
    CalendarScrollUp(usize),
    /// Scroll the overlay down by n rows
    CalendarScrollDown(usize),

    // === No-op ===
    /// No action to take
    None,
}
