use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::app::{App, InputMode};

use super::components::{
    render_booking_form, render_calendar, render_category_row, render_deals_list,
    render_help_popup, render_search_bar,
};
use super::theme::*;

pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();
    app.set_viewport_height(area.height as usize);

    // Regions are re-registered by whatever is on screen this frame
    app.interactions.clear();

    // The date picker takes over the whole screen
    if app.input_mode == InputMode::Calendar {
        render_calendar(frame, area, app);
        return;
    }

    // Main vertical layout: logo, search, categories, booking card, deals, hotkeys
    let main_layout = Layout::vertical([
        Constraint::Length(2), // Logo + spacing
        Constraint::Length(3), // Search bar
        Constraint::Length(2), // Category shortcuts
        Constraint::Length(9), // Booking card
        Constraint::Min(0),    // Deals
        Constraint::Length(1), // Hotkeys
    ])
    .split(area);

    render_logo(frame, main_layout[0]);
    render_search_bar(frame, main_layout[1], app);
    render_category_row(frame, main_layout[2]);
    render_booking_form(frame, main_layout[3], app);
    render_deals_list(frame, main_layout[4], app);
    render_hotkeys(frame, main_layout[5], app);

    if app.input_mode == InputMode::Help {
        render_help_popup(frame, area);
    }
}

fn render_logo(frame: &mut Frame, area: Rect) {
    // Center the "蓝途旅行" brand mark (8 display columns + plane)
    let padding = (area.width.saturating_sub(11)) / 2;
    let centered = Line::from(vec![
        Span::raw(" ".repeat(padding as usize)),
        Span::styled("蓝", Style::new().fg(BRAND_BLUE).bold()),
        Span::styled("途", Style::new().fg(BRAND_LIGHT_BLUE).bold()),
        Span::styled("旅", Style::new().fg(BRAND_BLUE).bold()),
        Span::styled("行", Style::new().fg(BRAND_LIGHT_BLUE).bold()),
        Span::styled(" ✈", Style::new().fg(BRAND_GOLD)),
    ]);

    frame.render_widget(Paragraph::new(centered), area);
}

fn render_hotkeys(frame: &mut Frame, area: Rect, app: &App) {
    let pairs: &[(&str, &str)] = match app.input_mode {
        InputMode::Normal => &[
            ("i", "搜索"),
            ("d", "去程"),
            ("r", "返程"),
            ("a", "AI推荐"),
            ("j/k", "特价"),
            ("?", "帮助"),
            ("q", "退出"),
        ],
        InputMode::SearchInput => &[("Enter", "完成"), ("C-c", "清空"), ("Esc", "返回")],
        InputMode::Help => &[("Esc", "关闭")],
        InputMode::Calendar => &[], // Calendar renders its own bottom bar
    };

    let mut spans: Vec<Span> = vec![Span::raw(" ")];
    for (i, (key, desc)) in pairs.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled(
            format!("[{}]", key),
            Style::new().fg(TEXT_WHITE),
        ));
        spans.push(Span::styled(format!(" {}", desc), Style::new().fg(TEXT_DIM)));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
