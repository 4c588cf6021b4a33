//! Calendar date grid and selection state for the date picker.
//!
//! The picker works on month pages: each page is the cell sequence of one
//! calendar month, with leading empty cells so that day-of-week columns line
//! up (Sunday first, matching the 日..六 week header). Selection state lives
//! in [`DatePicker`] for the lifetime of one picker session.

use chrono::{Datelike, Local, NaiveDate};

/// Week column labels, Sunday first.
pub const WEEK_LABELS: [&str; 7] = ["日", "一", "二", "三", "四", "五", "六"];

/// A civil (year, month, day) date. Always valid by construction; ordering
/// is chronological and no time-of-day takes part in comparisons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct CalendarDate(NaiveDate);

impl CalendarDate {
    /// Create a date, returning `None` for invalid (year, month, day) triples.
    pub fn new(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    /// Today according to the local calendar.
    pub fn today() -> Self {
        Self(Local::now().date_naive())
    }

    pub fn year(self) -> i32 {
        self.0.year()
    }

    pub fn month(self) -> u32 {
        self.0.month()
    }

    pub fn day(self) -> u32 {
        self.0.day()
    }

    /// Day-of-week column index: 0 = Sunday .. 6 = Saturday.
    pub fn weekday_index(self) -> u32 {
        self.0.weekday().num_days_from_sunday()
    }

    pub fn is_weekend(self) -> bool {
        matches!(self.weekday_index(), 0 | 6)
    }

    /// Strictly before the start of `today`'s calendar day.
    pub fn is_past(self, today: CalendarDate) -> bool {
        self < today
    }

    pub fn is_today(self, today: CalendarDate) -> bool {
        self == today
    }

    pub fn is_same_day(self, other: CalendarDate) -> bool {
        self == other
    }

    /// Step forward/backward by whole days. `None` only at the ends of the
    /// representable range.
    pub fn plus_days(self, days: i64) -> Option<Self> {
        self.0.checked_add_signed(chrono::Duration::days(days)).map(Self)
    }

    /// Step by whole months, clamping the day to the target month's length
    /// (Jan 31 + 1 month = Feb 28/29).
    pub fn plus_months(self, months: i32) -> Option<Self> {
        let total = self.year() * 12 + self.month() as i32 - 1 + months;
        let year = total.div_euclid(12);
        let month = total.rem_euclid(12) as u32 + 1;
        let day = self.day().min(days_in_month(year, month));
        Self::new(year, month, day)
    }
}

/// Number of days in (year, month), 0 for an invalid month.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    let first = match NaiveDate::from_ymd_opt(year, month, 1) {
        Some(d) => d,
        None => return 0,
    };
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };
    match next {
        Some(n) => n.signed_duration_since(first).num_days() as u32,
        None => 0,
    }
}

/// Day-of-week column of the 1st of (year, month): 0 = Sunday .. 6 = Saturday.
pub fn first_weekday(year: i32, month: u32) -> u32 {
    NaiveDate::from_ymd_opt(year, month, 1)
        .map(|d| d.weekday().num_days_from_sunday())
        .unwrap_or(0)
}

/// One month's display grid.
///
/// `cells` holds `first_weekday` leading empties followed by one cell per
/// day of the month. There is no trailing padding, so
/// `cells.len() == first_weekday + days_in_month`.
#[derive(Debug, Clone)]
pub struct MonthPage {
    pub year: i32,
    pub month: u32,
    pub cells: Vec<Option<CalendarDate>>,
}

impl MonthPage {
    /// Heading shown above the grid, e.g. "2025年11月".
    pub fn label(&self) -> String {
        format!("{}年{}月", self.year, self.month)
    }

    /// Cells grouped into week rows of 7. The last row may be short.
    pub fn week_rows(&self) -> impl Iterator<Item = &[Option<CalendarDate>]> {
        self.cells.chunks(7)
    }
}

/// Build the grid for one month.
pub fn month_page(year: i32, month: u32) -> MonthPage {
    let mut cells: Vec<Option<CalendarDate>> = vec![None; first_weekday(year, month) as usize];
    for day in 1..=days_in_month(year, month) {
        cells.push(CalendarDate::new(year, month, day));
    }
    MonthPage { year, month, cells }
}

/// Build `count` consecutive month pages beginning at the month containing
/// `start` (the day of month is ignored), in chronological order.
pub fn generate_months(start: CalendarDate, count: usize) -> Vec<MonthPage> {
    let mut year = start.year();
    let mut month = start.month();
    let mut pages = Vec::with_capacity(count);
    for _ in 0..count {
        pages.push(month_page(year, month));
        month += 1;
        if month > 12 {
            month = 1;
            year += 1;
        }
    }
    pages
}

/// Format a date the way the storefront shows it, e.g. "11月24日 周一".
pub fn format_date(date: CalendarDate) -> String {
    format!(
        "{}月{}日 周{}",
        date.month(),
        date.day(),
        WEEK_LABELS[date.weekday_index() as usize]
    )
}

/// Which leg of the trip a picker session selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TripLeg {
    Departure,
    Return,
}

impl TripLeg {
    /// Badge shown on the selected day cell.
    pub fn tag(self) -> &'static str {
        match self {
            TripLeg::Departure => "去程",
            TripLeg::Return => "返程",
        }
    }

    /// Picker overlay title.
    pub fn title(self) -> &'static str {
        match self {
            TripLeg::Departure => "选择出发日期",
            TripLeg::Return => "选择返程日期",
        }
    }
}

/// Selection state for one picker session.
///
/// Month pages are generated once when the session opens, starting at
/// today's month. When the initial date falls after the last page the page
/// count is extended so the selection is always on a visible page.
#[derive(Debug, Clone)]
pub struct DatePicker {
    pub leg: TripLeg,
    pub months: Vec<MonthPage>,
    pub selected: CalendarDate,
    /// Render scroll offset in text rows, maintained by the view.
    pub scroll_offset: usize,
    today: CalendarDate,
}

impl DatePicker {
    /// Open a picker session for `leg` with today's date as the range anchor.
    pub fn open(initial: CalendarDate, leg: TripLeg, months_shown: usize) -> Self {
        Self::open_at(initial, leg, CalendarDate::today(), months_shown)
    }

    /// Open with an explicit `today`, anchoring the generated month range.
    pub fn open_at(
        initial: CalendarDate,
        leg: TripLeg,
        today: CalendarDate,
        months_shown: usize,
    ) -> Self {
        let span = month_span(today, initial);
        let count = months_shown.max(1).max(span + 1);
        Self {
            leg,
            months: generate_months(today, count),
            selected: initial,
            scroll_offset: 0,
            today,
        }
    }

    pub fn today(&self) -> CalendarDate {
        self.today
    }

    /// Select a day cell. Past dates are ignored: selection stays unchanged
    /// and no error is raised.
    pub fn select_day(&mut self, date: CalendarDate) {
        if !date.is_past(self.today) {
            self.selected = date;
        }
    }

    /// The confirmed date for this session. Closing the overlay is the
    /// caller's job.
    pub fn confirm(&self) -> CalendarDate {
        self.selected
    }

    /// Move the selection by whole days, staying inside the generated range.
    pub fn move_days(&mut self, days: i64) {
        if let Some(date) = self.selected.plus_days(days) {
            if self.in_range(date) {
                self.select_day(date);
            }
        }
    }

    /// Move the selection by whole months (day clamped), staying in range.
    pub fn move_months(&mut self, months: i32) {
        if let Some(date) = self.selected.plus_months(months) {
            if self.in_range(date) {
                self.select_day(date);
            }
        }
    }

    /// Index of the month page holding the selection, if any.
    pub fn selected_month_index(&self) -> Option<usize> {
        self.months
            .iter()
            .position(|p| p.year == self.selected.year() && p.month == self.selected.month())
    }

    fn in_range(&self, date: CalendarDate) -> bool {
        match self.months.last() {
            Some(last) => {
                let end = CalendarDate::new(last.year, last.month, days_in_month(last.year, last.month));
                match end {
                    Some(end) => date <= end,
                    None => false,
                }
            }
            None => false,
        }
    }
}

/// Whole months from the month of `from` to the month of `to`, 0 when `to`
/// is not later.
fn month_span(from: CalendarDate, to: CalendarDate) -> usize {
    let diff = (to.year() - from.year()) * 12 + to.month() as i32 - from.month() as i32;
    diff.max(0) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> CalendarDate {
        CalendarDate::new(year, month, day).unwrap()
    }

    #[test]
    fn test_rejects_invalid_dates() {
        assert!(CalendarDate::new(2025, 2, 29).is_none());
        assert!(CalendarDate::new(2025, 13, 1).is_none());
        assert!(CalendarDate::new(2025, 11, 0).is_none());
        assert!(CalendarDate::new(2024, 2, 29).is_some());
    }

    #[test]
    fn test_month_page_length_identity() {
        // cells.len() == first_weekday + days_in_month for every month of a
        // leap and a non-leap year.
        for year in [2023, 2024] {
            for month in 1..=12 {
                let page = month_page(year, month);
                assert_eq!(
                    page.cells.len() as u32,
                    first_weekday(year, month) + days_in_month(year, month),
                    "{}-{}",
                    year,
                    month
                );
            }
        }
    }

    #[test]
    fn test_first_day_cell_is_day_one() {
        let page = month_page(2025, 11);
        // November 2025 starts on a Saturday: six leading empties.
        assert_eq!(first_weekday(2025, 11), 6);
        assert!(page.cells[..6].iter().all(|c| c.is_none()));
        let first = page.cells.iter().flatten().next().unwrap();
        assert_eq!(first.day(), 1);
    }

    #[test]
    fn test_leap_year_february() {
        let leap = month_page(2024, 2);
        let common = month_page(2023, 2);
        assert_eq!(leap.cells.iter().flatten().count(), 29);
        assert_eq!(common.cells.iter().flatten().count(), 28);
    }

    #[test]
    fn test_no_trailing_padding() {
        let page = month_page(2025, 11);
        assert!(page.cells.last().unwrap().is_some());
        assert_eq!(page.cells.last().unwrap().unwrap().day(), 30);
    }

    #[test]
    fn test_generate_months_rolls_over_year() {
        let pages = generate_months(date(2025, 11, 20), 4);
        let labels: Vec<(i32, u32)> = pages.iter().map(|p| (p.year, p.month)).collect();
        assert_eq!(labels, vec![(2025, 11), (2025, 12), (2026, 1), (2026, 2)]);
    }

    #[test]
    fn test_generate_months_chronological() {
        let pages = generate_months(date(2024, 1, 31), 14);
        assert_eq!(pages.len(), 14);
        for pair in pages.windows(2) {
            assert!((pair[0].year, pair[0].month) < (pair[1].year, pair[1].month));
        }
    }

    #[test]
    fn test_plus_months_clamps_day() {
        assert_eq!(date(2024, 1, 31).plus_months(1), Some(date(2024, 2, 29)));
        assert_eq!(date(2023, 1, 31).plus_months(1), Some(date(2023, 2, 28)));
        assert_eq!(date(2025, 12, 15).plus_months(1), Some(date(2026, 1, 15)));
        assert_eq!(date(2026, 1, 15).plus_months(-2), Some(date(2025, 11, 15)));
    }

    #[test]
    fn test_select_day_ignores_past_dates() {
        let today = date(2025, 11, 20);
        let mut picker = DatePicker::open_at(today, TripLeg::Departure, today, 6);
        picker.select_day(date(2025, 11, 15));
        assert_eq!(picker.selected, today);
        // Repeating the rejected tap stays a no-op.
        picker.select_day(date(2025, 11, 15));
        assert_eq!(picker.selected, today);
    }

    #[test]
    fn test_select_day_accepts_today_and_future() {
        let today = date(2025, 11, 20);
        let mut picker = DatePicker::open_at(today, TripLeg::Departure, today, 6);
        picker.select_day(date(2025, 11, 20));
        assert_eq!(picker.selected, today);
        picker.select_day(date(2026, 3, 1));
        assert_eq!(picker.selected, date(2026, 3, 1));
    }

    #[test]
    fn test_confirm_departure_scenario() {
        // Open for departure on 2025-11-20 (a Thursday), tap Nov 24, confirm.
        let today = date(2025, 11, 20);
        assert_eq!(today.weekday_index(), 4);
        let mut picker = DatePicker::open_at(today, TripLeg::Departure, today, 6);
        picker.select_day(date(2025, 11, 24));
        let confirmed = picker.confirm();
        assert_eq!(
            (confirmed.year(), confirmed.month(), confirmed.day()),
            (2025, 11, 24)
        );
    }

    #[test]
    fn test_past_tap_keeps_prior_selection() {
        let today = date(2025, 11, 20);
        let mut picker = DatePicker::open_at(date(2025, 11, 28), TripLeg::Return, today, 6);
        picker.select_day(date(2025, 11, 15));
        assert_eq!(picker.confirm(), date(2025, 11, 28));
    }

    #[test]
    fn test_open_extends_range_for_late_initial_date() {
        let today = date(2025, 11, 20);
        let picker = DatePicker::open_at(date(2026, 6, 5), TripLeg::Departure, today, 6);
        let last = picker.months.last().unwrap();
        assert_eq!((last.year, last.month), (2026, 6));
        assert_eq!(picker.months.len(), 8);
        assert_eq!(picker.selected_month_index(), Some(7));
    }

    #[test]
    fn test_movement_stays_in_generated_range() {
        let today = date(2025, 11, 20);
        let mut picker = DatePicker::open_at(today, TripLeg::Departure, today, 2);
        // Last page is December 2025; a month jump past it is ignored.
        picker.move_months(2);
        assert_eq!(picker.selected, today);
        picker.move_months(1);
        assert_eq!(picker.selected, date(2025, 12, 20));
        // Stepping back below today is rejected by select_day.
        picker.move_days(-31);
        assert_eq!(picker.selected, date(2025, 12, 20));
    }

    #[test]
    fn test_is_same_day_reflexive_and_symmetric() {
        let a = date(2025, 11, 24);
        let b = date(2025, 11, 25);
        assert!(a.is_same_day(a));
        assert_eq!(a.is_same_day(b), b.is_same_day(a));
        assert!(!a.is_same_day(b));
    }

    #[test]
    fn test_predicates() {
        let today = date(2025, 11, 20);
        assert!(date(2025, 11, 19).is_past(today));
        assert!(!today.is_past(today));
        assert!(today.is_today(today));
        assert!(date(2025, 11, 22).is_weekend()); // Saturday
        assert!(date(2025, 11, 23).is_weekend()); // Sunday
        assert!(!date(2025, 11, 24).is_weekend()); // Monday
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date(date(2025, 11, 24)), "11月24日 周一");
        assert_eq!(format_date(date(2025, 11, 23)), "11月23日 周日");
    }

    #[test]
    fn test_week_rows_align_columns() {
        let page = month_page(2025, 11);
        let rows: Vec<_> = page.week_rows().collect();
        assert_eq!(rows[0].len(), 7);
        // Nov 1 2025 sits in the Saturday column of the first row.
        assert_eq!(rows[0][6].unwrap().day(), 1);
        // Final row is unpadded: Nov 30 is a Sunday, alone in its row.
        assert_eq!(rows.last().unwrap().len(), 1);
    }
}
