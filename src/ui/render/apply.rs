use super::Frame;
use crate::state::{ApplicationForm, FormCursor, FormField, FormPhase, State};
use crate::ui::widgets::{spinner, styling};
use crate::ui::Theme;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

const FORM_WIDTH: u16 = 72;

/// Render the application form, or the thank-you panel once submitted.
///
pub fn apply(frame: &mut Frame, size: Rect, state: &State) {
    let area = centered_column(size, FORM_WIDTH);
    match state.form().phase() {
        FormPhase::Submitted => thank_you(frame, area, state.theme()),
        FormPhase::Editing | FormPhase::Sending => form(frame, area, state),
    }
}

fn centered_column(size: Rect, width: u16) -> Rect {
    let width = width.min(size.width);
    Rect {
        x: size.x + (size.width - width) / 2,
        width,
        ..size
    }
}

fn thank_you(frame: &mut Frame, size: Rect, theme: &Theme) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Length(6),
            Constraint::Min(0),
        ])
        .split(size);

    let panel = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            "Thank you for your application!",
            styling::heading_style(theme),
        )),
        Line::from(Span::styled(
            "We will contact you shortly.",
            styling::normal_text_style(theme),
        )),
    ])
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(styling::active_block_border_style(theme))
            .style(Style::default().bg(theme.surface.to_color())),
    );
    frame.render_widget(panel, rows[1]);
}

fn form(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.theme();
    let form = state.form();

    let mut constraints = vec![
        Constraint::Length(2), // Back link
        Constraint::Length(3), // Title
    ];
    constraints.extend(FormField::ALL.iter().map(|_| Constraint::Length(4)));
    constraints.push(Constraint::Length(3)); // Submit button
    constraints.push(Constraint::Min(0));

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .margin(1)
        .split(size);

    let back = Paragraph::new(Line::from(vec![
        Span::styled("← Esc ", styling::muted_text_style(theme)),
        Span::styled("Back to advantages", styling::normal_text_style(theme)),
    ]));
    frame.render_widget(back, rows[0]);

    let title = Paragraph::new(vec![
        Line::from(Span::styled("Job Application", styling::heading_style(theme))),
        Line::from(Span::styled(
            "Fill in the form and we will get back to you",
            styling::muted_text_style(theme),
        )),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(title, rows[1]);

    for (idx, field) in FormField::ALL.iter().enumerate() {
        input(frame, rows[2 + idx], form, *field, theme);
    }

    submit_button(frame, rows[2 + FormField::ALL.len()], state);
}

/// Render one labelled input with its inline error underneath.
///
fn input(frame: &mut Frame, size: Rect, form: &ApplicationForm, field: FormField, theme: &Theme) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Length(1)])
        .split(size);

    let focused = form.cursor() == FormCursor::Field(field);
    let error = form.errors().get(field);

    let border_style = match (error, focused) {
        (Some(_), _) => styling::error_block_border_style(theme),
        (None, true) => styling::active_block_border_style(theme),
        (None, false) => styling::normal_block_border_style(theme),
    };

    let value = form.value(field);
    let mut spans = vec![];
    if value.is_empty() {
        if let Some(placeholder) = field.placeholder() {
            spans.push(Span::styled(placeholder, styling::muted_text_style(theme)));
        }
    } else {
        spans.push(Span::styled(value, styling::normal_text_style(theme)));
    }
    if focused && form.phase() == FormPhase::Editing {
        spans.insert(
            if value.is_empty() { 0 } else { spans.len() },
            Span::styled("▏", styling::active_block_border_style(theme)),
        );
    }

    let widget = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .title(field.label())
            .border_style(border_style)
            .style(Style::default().bg(theme.surface.to_color())),
    );
    frame.render_widget(widget, chunks[0]);

    if let Some(error) = error {
        let message = Paragraph::new(Line::from(Span::styled(
            error.message(field),
            styling::error_text_style(theme),
        )));
        frame.render_widget(message, chunks[1]);
    }
}

fn submit_button(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.theme();
    let form = state.form();

    let (label, style) = match form.phase() {
        FormPhase::Sending => (
            format!("{} Sending...", spinner::frame(state.spinner_index())),
            styling::disabled_button_style(theme),
        ),
        _ if form.can_submit() => (
            "Send application".to_string(),
            styling::button_style(theme),
        ),
        _ => (
            "Send application".to_string(),
            styling::disabled_button_style(theme),
        ),
    };

    let border_style = if form.cursor() == FormCursor::Submit {
        styling::active_block_border_style(theme)
    } else {
        styling::normal_block_border_style(theme)
    };

    let button = Paragraph::new(Line::from(Span::styled(label, style)))
        .alignment(Alignment::Center)
        .style(style)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style),
        );
    frame.render_widget(button, size);
}
