//! Flight booking card: travel-type tabs, city pair, and the two date rows
//! that open the calendar overlay.

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::app::{App, ClickRegion, TravelType};
use crate::calendar::{TripLeg, format_date};
use crate::events::Action;
use crate::tui::theme::*;

use super::display_width;

pub fn render_booking_form(frame: &mut Frame, area: Rect, app: &mut App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::new().fg(TEXT_DIM));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines: Vec<Line> = vec![];

    // Travel-type tabs. Track x offsets so each tab gets a click region.
    let mut tab_spans: Vec<Span> = vec![];
    let mut x = inner.x;
    for (i, tab) in TravelType::ALL.iter().enumerate() {
        let label = format!(" {} ", tab.label());
        let width = display_width(&label) as u16;
        let style = if *tab == app.active_tab {
            Style::new().fg(TEXT_WHITE).bg(BRAND_BLUE).bold()
        } else {
            Style::new().fg(TEXT_DIM)
        };
        app.interactions.register_click(
            "travel_tab",
            ClickRegion::new(x, inner.y, width, 1),
            Action::SelectTab(i),
        );
        tab_spans.push(Span::styled(label, style));
        tab_spans.push(Span::raw(" "));
        x += width + 1;
    }
    lines.push(Line::from(tab_spans));
    lines.push(Line::raw(""));

    // City pair with the swap arrow between the two cities
    let destination = if app.destination.is_empty() {
        Span::styled("请选择目的地", Style::new().fg(TEXT_DIM))
    } else {
        Span::styled(app.destination.clone(), Style::new().fg(TEXT_WHITE).bold())
    };
    let origin_width = display_width(&app.origin) as u16;
    lines.push(Line::from(vec![
        Span::styled(app.origin.clone(), Style::new().fg(TEXT_WHITE).bold()),
        Span::styled("  ⇄  ", Style::new().fg(BRAND_BLUE)),
        destination,
    ]));
    app.interactions.register_click(
        "swap_cities",
        ClickRegion::new(inner.x + origin_width, inner.y + 2, 5, 1),
        Action::SwapCities,
    );
    lines.push(Line::raw(""));

    // Date rows: departure on the left, return on the right half
    let departure_label = format_date(app.departure);
    let return_label = match app.return_date {
        Some(date) => format_date(date),
        None => "请选择".to_string(),
    };
    let half = inner.width / 2;
    let one_way = if app.return_date.is_none() {
        Span::styled("  单程", Style::new().fg(BRAND_GOLD))
    } else {
        Span::styled("  往返", Style::new().fg(BRAND_GOLD))
    };
    let dep_text = format!("去程  {}", departure_label);
    let ret_text = format!("返程  {}", return_label);
    let pad = half.saturating_sub(display_width(&dep_text) as u16);
    lines.push(Line::from(vec![
        Span::styled("去程  ", Style::new().fg(TEXT_DIM)),
        Span::styled(departure_label, Style::new().fg(TEXT_WHITE)),
        Span::raw(" ".repeat(pad as usize)),
        Span::styled("返程  ", Style::new().fg(TEXT_DIM)),
        Span::styled(
            return_label,
            match app.return_date {
                Some(_) => Style::new().fg(TEXT_WHITE),
                None => Style::new().fg(TEXT_DIM),
            },
        ),
        one_way,
    ]));
    let dates_y = inner.y + 4;
    app.interactions.register_click(
        "departure_date",
        ClickRegion::new(inner.x, dates_y, half, 1),
        Action::OpenCalendar(TripLeg::Departure),
    );
    app.interactions.register_click(
        "return_date",
        ClickRegion::new(inner.x + half, dates_y, display_width(&ret_text).max(half as usize) as u16, 1),
        Action::OpenCalendar(TripLeg::Return),
    );
    lines.push(Line::raw(""));

    // Search button
    let button = " 搜索特价机票 ";
    let button_width = display_width(button) as u16;
    let padding = (inner.width.saturating_sub(button_width)) / 2;
    lines.push(Line::from(vec![
        Span::raw(" ".repeat(padding as usize)),
        Span::styled(button, Style::new().fg(TEXT_WHITE).bg(BRAND_BLUE).bold()),
    ]));
    app.interactions.register_click(
        "search_button",
        ClickRegion::new(inner.x + padding, inner.y + 6, button_width, 1),
        Action::EnterSearch,
    );

    frame.render_widget(Paragraph::new(lines), inner);
}
