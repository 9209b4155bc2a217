use super::Frame;
use crate::ui::widgets::styling;
use crate::ui::Theme;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

/// Render a blocking alert over everything else.
///
pub fn alert(frame: &mut Frame, size: Rect, message: &str, theme: &Theme) {
    let area = centered_rect(60, 9, size);
    frame.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(" Alert ", styling::error_text_style(theme)))
        .border_style(styling::error_block_border_style(theme))
        .style(styling::background_style(theme));

    let text = vec![
        Line::from(""),
        Line::from(Span::styled(message, styling::normal_text_style(theme))),
        Line::from(""),
        Line::from(Span::styled(
            "Press Enter to dismiss",
            styling::muted_text_style(theme),
        )),
    ];
    let paragraph = Paragraph::new(text)
        .block(block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}

/// Return a rect of the given width percentage and fixed height centered in
/// the area.
///
fn centered_rect(percent_x: u16, height: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}
