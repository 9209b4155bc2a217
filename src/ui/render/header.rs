use super::{Frame, AGENCY_NAME};
use crate::state::{Page, State};
use crate::ui::widgets::styling;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Render the agency name and the navigation items.
///
pub fn header(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.theme();
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(styling::normal_block_border_style(theme));
    let inner = block.inner(size);
    frame.render_widget(block, size);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(AGENCY_NAME.len() as u16 + 2), Constraint::Min(0)])
        .split(inner);

    let name = Paragraph::new(Line::from(Span::styled(
        format!(" {}", AGENCY_NAME),
        styling::heading_style(theme),
    )));
    frame.render_widget(name, columns[0]);

    let mut spans = vec![];
    for page in Page::ALL {
        let style = if page == state.current_page() {
            styling::active_nav_style(theme)
        } else {
            styling::normal_text_style(theme)
        };
        spans.push(Span::styled(
            format!("F{}", page.function_key()),
            styling::muted_text_style(theme),
        ));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(page.label(), style));
        spans.push(Span::raw("   "));
    }
    let nav = Paragraph::new(Line::from(spans)).alignment(Alignment::Right);
    frame.render_widget(nav, columns[1]);
}
