use super::{Frame, AGENCY_NAME};
use crate::state::{FormPhase, Page, State};
use crate::ui::widgets::styling;
use chrono::Datelike;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
};

/// Return the key hints for the current page.
///
fn hints(state: &State) -> &'static str {
    match state.current_page() {
        Page::Home => "Enter: learn more  1-3: pages  Ctrl+D: log  q: quit ",
        Page::About => "Enter: join us  Esc: home  1-3: pages  q: quit ",
        Page::Apply => match state.form().phase() {
            FormPhase::Submitted => "Esc: back  1-3: pages  q: quit ",
            _ => "Tab/Up/Down: field  Enter: next/submit  Ctrl+S: submit  Esc: back ",
        },
    }
}

/// Render the copyright line and key hints.
///
pub fn footer(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.theme();
    let year = chrono::Local::now().year();
    let copyright = Line::from(Span::styled(
        format!(" © {} {}. All rights reserved.", year, AGENCY_NAME),
        styling::muted_text_style(theme),
    ));

    // Copyright keeps its full width, hints take what is left
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(copyright.width() as u16),
            Constraint::Min(0),
        ])
        .split(size);

    frame.render_widget(Paragraph::new(copyright), columns[0]);

    let keys = Paragraph::new(Line::from(Span::styled(
        hints(state),
        styling::muted_text_style(theme),
    )))
    .alignment(Alignment::Right);
    frame.render_widget(keys, columns[1]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    fn footer_row(width: u16) -> String {
        let state = State::default();
        let mut terminal = Terminal::new(TestBackend::new(width, 1)).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.size();
                footer(frame, area, &state);
            })
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn copyright_is_not_clipped() {
        for width in [80, 100] {
            let row = footer_row(width);
            assert!(row.contains("All rights reserved."), "width {}: {:?}", width, row);
        }
    }

    #[test]
    fn hints_fill_remaining_width() {
        let row = footer_row(140);
        assert!(row.contains("Enter: learn more"));
    }
}
