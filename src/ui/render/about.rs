use super::Frame;
use crate::state::State;
use crate::ui::widgets::styling;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

const HEADING: &str = "Our Advantages";

const INTRO: &str = "We have built working conditions where every member of the team feels \
protected and valued, and can grow without worrying about anything else.";

/// Title and description of each advantage card.
///
pub const ADVANTAGES: [(&str, &str); 4] = [
    (
        "10+ years of experience",
        "We have been leaders in our market for more than a decade.",
    ),
    (
        "Large client base",
        "Loyal, established clients who value quality and service.",
    ),
    (
        "Support 24/7",
        "Our team is always in touch to keep your work comfortable.",
    ),
    (
        "Safety and care",
        "In-house security and personal drivers for your complete peace of mind.",
    ),
];

const CLOSING_HEADING: &str = "Work without fines or deductions";

const CLOSING: &str = "We value your work. Your whole salary stays with you. \
We guarantee full transparency and honesty.";

/// Render the advantages page.
///
pub fn about(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.theme();
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Back link
            Constraint::Length(5), // Heading and intro
            Constraint::Min(8),    // Advantage grid
            Constraint::Length(6), // Closing
        ])
        .margin(1)
        .split(size);

    let back = Paragraph::new(Line::from(vec![
        Span::styled("← Esc ", styling::muted_text_style(theme)),
        Span::styled("Back to home", styling::normal_text_style(theme)),
    ]));
    frame.render_widget(back, rows[0]);

    let intro = Paragraph::new(vec![
        Line::from(Span::styled(HEADING, styling::heading_style(theme))),
        Line::from(""),
        Line::from(Span::styled(INTRO, styling::normal_text_style(theme))),
    ])
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true });
    frame.render_widget(intro, rows[1]);

    advantage_grid(frame, rows[2], state);

    let closing = Paragraph::new(vec![
        Line::from(Span::styled(CLOSING_HEADING, styling::heading_style(theme))),
        Line::from(Span::styled(CLOSING, styling::normal_text_style(theme))),
        Line::from(""),
        Line::from(Span::styled("  Enter  Join us  ", styling::button_style(theme))),
    ])
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true });
    frame.render_widget(closing, rows[3]);
}

/// Render the advantages as a two by two grid of cards.
///
fn advantage_grid(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.theme();
    let grid_rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(size);

    for (row_idx, pair) in ADVANTAGES.chunks(2).enumerate() {
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(grid_rows[row_idx]);

        for (cell_idx, (title, description)) in pair.iter().enumerate() {
            let card = Paragraph::new(Line::from(Span::styled(
                *description,
                styling::normal_text_style(theme),
            )))
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(styling::normal_block_border_style(theme))
                    .style(Style::default().bg(theme.surface.to_color()))
                    .title(Span::styled(format!(" ★ {} ", title), styling::heading_style(theme))),
            );
            frame.render_widget(card, cells[cell_idx]);
        }
    }
}
