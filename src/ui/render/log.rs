use super::Frame;
use crate::state::State;
use crate::ui::widgets::styling;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
};

/// Render the most recent log lines that fit.
///
pub fn log(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.theme();
    let block = Block::default()
        .title(" Log ")
        .borders(Borders::ALL)
        .border_style(styling::normal_block_border_style(theme));

    let visible = size.height.saturating_sub(2) as usize;
    let items: Vec<ListItem> = state
        .log_lines(visible)
        .into_iter()
        .map(|line| ListItem::new(Line::from(Span::styled(
            line,
            styling::muted_text_style(theme),
        ))))
        .collect();

    frame.render_widget(List::new(items).block(block), size);
}
