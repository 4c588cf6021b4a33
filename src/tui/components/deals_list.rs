//! Promotional flight deal cards on the home screen.

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::app::{App, ClickRegion};
use crate::events::Action;
use crate::tui::theme::*;

pub fn render_deals_list(frame: &mut Frame, area: Rect, app: &mut App) {
    let title = if app.loading_ai {
        Line::from(vec![
            Span::styled(" 特价机票 ", Style::new().fg(TEXT_WHITE).bold()),
            Span::styled(
                format!("{} AI 推荐中...", app.spinner()),
                Style::new().fg(BRAND_GOLD),
            ),
        ])
    } else {
        Line::from(vec![
            Span::styled(" 特价机票 ", Style::new().fg(TEXT_WHITE).bold()),
            Span::styled("· 为你推荐", Style::new().fg(TEXT_DIM)),
        ])
    };

    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(Style::new().fg(TEXT_DIM))
        .title(title);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines: Vec<Line> = vec![];
    for (i, deal) in app.deals.deals.iter().enumerate() {
        let is_selected = i == app.deals.selected;
        let cursor = if is_selected { "> " } else { "  " };

        let badge_color = match deal.rank {
            Some(1) => RANK_RED,
            Some(2) => PRICE_ORANGE,
            Some(3) => BRAND_GOLD,
            _ => TEXT_DIM,
        };
        let badge = match deal.rank {
            Some(n) => format!("TOP{} ", n),
            None => String::new(),
        };

        let name_style = if is_selected {
            Style::new().fg(TEXT_WHITE).bold()
        } else {
            Style::new().fg(TEXT_WHITE)
        };

        lines.push(Line::from(vec![
            Span::raw(cursor),
            Span::styled(badge, Style::new().fg(badge_color).bold()),
            Span::styled(format!("{} ✈ {}", app.origin, deal.destination), name_style),
            Span::raw("  "),
            Span::styled(format!("¥{}", deal.price), Style::new().fg(PRICE_ORANGE).bold()),
            Span::styled(" 起", Style::new().fg(TEXT_DIM)),
        ]));
        lines.push(Line::from(vec![
            Span::raw("   "),
            Span::styled(deal.date_label.clone(), Style::new().fg(TEXT_DIM)),
        ]));
        lines.push(Line::raw("")); // Spacing

        // Each card is a tap target
        let card_y = inner.y + (i as u16) * 3;
        if card_y + 1 < inner.bottom() {
            app.interactions.register_click(
                "deal_card",
                ClickRegion::new(inner.x, card_y, inner.width, 2),
                Action::SelectDeal(i),
            );
        }
    }

    if lines.is_empty() {
        lines.push(Line::styled("暂无特价", Style::new().fg(TEXT_DIM)));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}
