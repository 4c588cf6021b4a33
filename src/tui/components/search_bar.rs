//! Destination search bar with the AI recommendation button.

use ratatui::{
    Frame,
    layout::{Position, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::app::{App, ClickRegion, InputMode};
use crate::events::Action;
use crate::tui::theme::*;

use super::display_width;

const PLACEHOLDER: &str = "搜索目的地 / 关键词";
const AI_BUTTON: &str = " ✦ AI推荐 ";

/// Render the search bar: destination input on the left, AI button on the
/// right. Registers click regions for both.
pub fn render_search_bar(frame: &mut Frame, area: Rect, app: &mut App) {
    let in_search = app.input_mode == InputMode::SearchInput;

    let border_style = if in_search {
        Style::new().fg(BRAND_BLUE)
    } else {
        Style::new().fg(TEXT_DIM)
    };

    let block = Block::default().borders(Borders::ALL).border_style(border_style);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut spans: Vec<Span> = vec![Span::raw(" ")];
    if app.destination.is_empty() && !in_search {
        spans.push(Span::styled(PLACEHOLDER, Style::new().fg(TEXT_DIM)));
    } else {
        spans.push(Span::styled(
            app.destination.clone(),
            Style::new().fg(TEXT_WHITE),
        ));
    }

    // AI button pinned to the right edge
    let button_label = if app.loading_ai {
        format!(" {} AI推荐 ", app.spinner())
    } else {
        AI_BUTTON.to_string()
    };
    let button_width = display_width(&button_label) as u16;
    let used = spans.iter().map(|s| display_width(&s.content)).sum::<usize>() as u16;
    let gap = inner.width.saturating_sub(used + button_width);
    spans.push(Span::raw(" ".repeat(gap as usize)));
    spans.push(Span::styled(
        button_label,
        Style::new().fg(BRAND_GOLD).bold(),
    ));

    frame.render_widget(Paragraph::new(Line::from(spans)), inner);

    // Visible cursor while typing
    if in_search {
        let prefix: String = app.destination.chars().take(app.cursor_position).collect();
        let cursor_x = inner.x + 1 + display_width(&prefix) as u16;
        frame.set_cursor_position(Position::new(cursor_x.min(inner.right().saturating_sub(1)), inner.y));
    }

    // Click targets: the input area focuses search, the button asks the AI
    let button_x = inner.right().saturating_sub(button_width);
    app.interactions.register_click(
        "search_input",
        ClickRegion::new(inner.x, inner.y, inner.width.saturating_sub(button_width), 1),
        Action::EnterSearch,
    );
    app.interactions.register_click(
        "ai_button",
        ClickRegion::new(button_x, inner.y, button_width, 1),
        Action::AskAi,
    );
}
