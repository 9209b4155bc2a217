use super::{Frame, AGENCY_NAME};
use crate::state::State;
use crate::ui::widgets::styling;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

pub const TAGLINE: &str = "Discover a world of comfort and opportunity";

/// Render the landing page.
///
pub fn home(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.theme();
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(35),
            Constraint::Length(5),
            Constraint::Min(0),
        ])
        .split(size);

    let spaced_name: String = AGENCY_NAME
        .to_uppercase()
        .chars()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(" ");

    let lines = vec![
        Line::from(Span::styled(
            format!("~  {}  ~", spaced_name),
            styling::banner_style(theme),
        )),
        Line::from(""),
        Line::from(Span::styled(TAGLINE, styling::normal_text_style(theme))),
        Line::from(""),
        Line::from(Span::styled(
            "  Enter  Learn more  ",
            styling::button_style(theme),
        )),
    ];
    let banner = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(banner, rows[1]);
}
