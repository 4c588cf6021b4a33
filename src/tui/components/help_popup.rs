//! Help popup component.

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::tui::theme::*;

/// Render the help popup with keyboard shortcuts.
#[allow(clippy::vec_init_then_push)]
pub fn render_help_popup(frame: &mut Frame, area: Rect) {
    // Calculate centered popup area
    let popup_width = 46u16;
    let popup_height = 24u16;
    let x = area.x + (area.width.saturating_sub(popup_width)) / 2;
    let y = area.y + (area.height.saturating_sub(popup_height)) / 2;
    let popup_area = Rect::new(
        x,
        y,
        popup_width.min(area.width),
        popup_height.min(area.height),
    );

    // Clear the area behind the popup
    frame.render_widget(Clear, popup_area);

    let mut lines: Vec<Line> = vec![];

    // Title
    lines.push(Line::from(vec![Span::styled(
        "快捷键",
        Style::new().fg(TEXT_WHITE).bold(),
    )]));
    lines.push(Line::raw(""));

    // Home screen
    lines.push(Line::styled("主页", Style::new().fg(BRAND_LIGHT_BLUE).bold()));
    lines.push(help_line("  i /     ", "输入目的地"));
    lines.push(help_line("  d       ", "选择去程日期"));
    lines.push(help_line("  r       ", "选择返程日期"));
    lines.push(help_line("  s       ", "交换出发地和目的地"));
    lines.push(help_line("  a       ", "AI 推荐目的地"));
    lines.push(help_line("  Tab/1-5 ", "切换出行类型"));
    lines.push(help_line("  j/k     ", "浏览特价机票"));
    lines.push(help_line("  q       ", "退出"));
    lines.push(Line::raw(""));

    // Calendar overlay
    lines.push(Line::styled("日历", Style::new().fg(BRAND_LIGHT_BLUE).bold()));
    lines.push(help_line("  h/l     ", "前一天 / 后一天"));
    lines.push(help_line("  j/k     ", "后一周 / 前一周"));
    lines.push(help_line("  n/p     ", "后一月 / 前一月"));
    lines.push(help_line("  C-u/C-d ", "翻半页"));
    lines.push(help_line("  Enter   ", "确定"));
    lines.push(help_line("  Esc     ", "取消"));
    lines.push(Line::raw(""));

    // Input mode
    lines.push(Line::styled("输入", Style::new().fg(BRAND_LIGHT_BLUE).bold()));
    lines.push(help_line("  Enter/Esc ", "完成输入"));
    lines.push(help_line("  C-c       ", "清空输入"));

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::new().fg(BRAND_BLUE));
    frame.render_widget(Paragraph::new(lines).block(block), popup_area);
}

fn help_line(key: &str, desc: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(key.to_string(), Style::new().fg(TEXT_WHITE)),
        Span::styled(desc.to_string(), Style::new().fg(TEXT_DIM)),
    ])
}
