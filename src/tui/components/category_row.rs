//! Category shortcut chips under the search bar. Display-only.

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::app::CATEGORY_SHORTCUTS;
use crate::tui::theme::*;

pub fn render_category_row(frame: &mut Frame, area: Rect) {
    let mut spans: Vec<Span> = vec![Span::raw(" ")];
    for (i, label) in CATEGORY_SHORTCUTS.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled("  ·  ", Style::new().fg(TEXT_DIM)));
        }
        spans.push(Span::styled(*label, Style::new().fg(BRAND_LIGHT_BLUE)));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
