//! Full-screen date picker overlay.
//!
//! Renders the scrolling list of month grids with the Sunday-first week
//! header, marks today / weekends / past days, and registers a tap target
//! for every selectable day cell at its on-screen position.

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::app::{App, ClickRegion};
use crate::calendar::{CalendarDate, TripLeg, WEEK_LABELS, format_date};
use crate::events::Action;
use crate::tui::interaction::InteractiveRegion;
use crate::tui::theme::*;

use super::display_width;

pub fn render_calendar(frame: &mut Frame, area: Rect, app: &mut App) {
    let Some(picker) = app.date_picker.as_mut() else {
        return;
    };

    let layout = Layout::vertical([
        Constraint::Length(1), // Title bar
        Constraint::Length(1), // Week header
        Constraint::Min(0),    // Month grids
        Constraint::Length(1), // Selection + confirm bar
    ])
    .split(area);

    let cell_w = (layout[2].width / 7).max(4);
    let leg = picker.leg;
    let today = picker.today();
    let selected = picker.selected;

    render_title_bar(frame, layout[0], leg);
    render_week_header(frame, layout[1], cell_w);

    // Build all grid lines up front; scrolling is a row offset into them.
    let body = layout[2];
    let mut lines: Vec<Line> = vec![];
    // Selectable cells per line: (line index, [(column x, date)])
    let mut day_rows: Vec<(usize, Vec<(u16, CalendarDate)>)> = vec![];

    for page in &picker.months {
        lines.push(Line::styled(
            page.label(),
            Style::new().fg(TEXT_WHITE).bold(),
        ));
        for row in page.week_rows() {
            let line_idx = lines.len();
            let mut spans: Vec<Span> = vec![];
            let mut clicks: Vec<(u16, CalendarDate)> = vec![];
            for (col, cell) in row.iter().enumerate() {
                match cell {
                    None => spans.push(Span::raw(" ".repeat(cell_w as usize))),
                    Some(date) => {
                        spans.push(day_cell(*date, today, selected, cell_w));
                        if !date.is_past(today) {
                            clicks.push((col as u16 * cell_w, *date));
                        }
                    }
                }
            }
            lines.push(Line::from(spans));
            day_rows.push((line_idx, clicks));
        }
        lines.push(Line::raw(""));
    }

    let visible = body.height as usize;
    let max_scroll = lines.len().saturating_sub(visible);
    picker.scroll_offset = picker.scroll_offset.min(max_scroll);
    let offset = picker.scroll_offset;

    frame.render_widget(Paragraph::new(lines).scroll((offset as u16, 0)), body);

    // Tap targets for the day cells currently on screen
    for (line_idx, clicks) in day_rows {
        if line_idx < offset {
            continue;
        }
        let y = body.y + (line_idx - offset) as u16;
        if y >= body.bottom() {
            break;
        }
        for (col_x, date) in clicks {
            app.interactions.register_click(
                "day_cell",
                ClickRegion::new(body.x + col_x, y, cell_w, 1),
                Action::SelectDay(date),
            );
        }
    }

    app.interactions.register(InteractiveRegion::scrollable(
        "calendar_body",
        ClickRegion::from_rect(body),
        Action::CalendarScrollUp(3),
        Action::CalendarScrollDown(3),
    ));

    render_bottom_bar(frame, layout[3], leg, selected, app);

    // Close button in the title bar
    app.interactions.register_click(
        "calendar_close",
        ClickRegion::new(layout[0].x, layout[0].y, 4, 1),
        Action::CloseCalendar,
    );
}

/// One day cell, padded to the column width.
fn day_cell(date: CalendarDate, today: CalendarDate, selected: CalendarDate, cell_w: u16) -> Span<'static> {
    let is_today = date.is_today(today);
    let text = if is_today {
        "今天".to_string()
    } else {
        date.day().to_string()
    };
    let pad = (cell_w as usize).saturating_sub(display_width(&text));
    let padded = format!("{}{}", text, " ".repeat(pad));

    let style = if date.is_same_day(selected) {
        Style::new().fg(TEXT_WHITE).bg(BRAND_BLUE).bold()
    } else if date.is_past(today) {
        Style::new().fg(PAST_GRAY)
    } else if is_today {
        Style::new().fg(BRAND_BLUE).bold()
    } else if date.is_weekend() {
        Style::new().fg(WEEKEND_ORANGE)
    } else {
        Style::new().fg(TEXT_WHITE)
    };

    Span::styled(padded, style)
}

fn render_title_bar(frame: &mut Frame, area: Rect, leg: TripLeg) {
    let title = leg.title();
    let left = " ✕  ";
    let used = display_width(left) + display_width(title);
    let pad = (area.width as usize).saturating_sub(used + 6);
    let line = Line::from(vec![
        Span::styled(left, Style::new().fg(TEXT_WHITE)),
        Span::styled(title, Style::new().fg(TEXT_WHITE).bold()),
        Span::raw(" ".repeat(pad)),
        Span::styled("[Esc]", Style::new().fg(BRAND_LIGHT_BLUE)),
    ]);
    frame.render_widget(
        Paragraph::new(line).style(Style::new().bg(BRAND_BLUE)),
        area,
    );
}

fn render_week_header(frame: &mut Frame, area: Rect, cell_w: u16) {
    let mut spans: Vec<Span> = vec![];
    for (i, label) in WEEK_LABELS.iter().enumerate() {
        let pad = (cell_w as usize).saturating_sub(display_width(label));
        let style = if i == 0 || i == 6 {
            Style::new().fg(WEEKEND_ORANGE)
        } else {
            Style::new().fg(TEXT_DIM)
        };
        spans.push(Span::styled(format!("{}{}", label, " ".repeat(pad)), style));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_bottom_bar(
    frame: &mut Frame,
    area: Rect,
    leg: TripLeg,
    selected: CalendarDate,
    app: &mut App,
) {
    let confirm = " 确定 ";
    let confirm_width = display_width(confirm) as u16;
    let summary = format!(" {} {}", leg.tag(), format_date(selected));
    let pad = (area.width as usize)
        .saturating_sub(display_width(&summary) + confirm_width as usize);
    let line = Line::from(vec![
        Span::styled(summary, Style::new().fg(TEXT_WHITE)),
        Span::raw(" ".repeat(pad)),
        Span::styled(confirm, Style::new().fg(TEXT_WHITE).bg(BRAND_BLUE).bold()),
    ]);
    frame.render_widget(Paragraph::new(line), area);

    app.interactions.register_click(
        "calendar_confirm",
        ClickRegion::new(
            area.right().saturating_sub(confirm_width),
            area.y,
            confirm_width,
            1,
        ),
        Action::ConfirmCalendar,
    );
}
