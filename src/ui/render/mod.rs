mod about;
mod alert;
mod apply;
mod footer;
mod header;
mod home;
mod log;

use super::widgets::styling;
use super::Frame;
use crate::state::{Page, State};
use about::about;
use alert::alert;
use apply::apply;
use footer::footer;
use header::header;
use home::home;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    widgets::Block,
};

/// Name shown in the header, the banner and the footer.
///
pub const AGENCY_NAME: &str = "Elite Agency";

/// Render the whole screen according to state.
///
pub fn render(frame: &mut Frame, state: &State) {
    let size = frame.size();
    let theme = state.theme();
    frame.render_widget(Block::default().style(styling::background_style(theme)), size);

    let mut constraints = vec![Constraint::Length(3), Constraint::Min(1)];
    if state.is_log_visible() {
        constraints.push(Constraint::Length(8));
    }
    constraints.push(Constraint::Length(1));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(size);

    header(frame, chunks[0], state);
    body(frame, chunks[1], state);
    if state.is_log_visible() {
        log::log(frame, chunks[2], state);
    }
    footer(frame, chunks[chunks.len() - 1], state);

    if let Some(message) = state.alert() {
        alert(frame, size, message, theme);
    }
}

/// Render the current page, or nothing while faded out.
///
fn body(frame: &mut Frame, size: Rect, state: &State) {
    if state.is_content_hidden() {
        return;
    }
    match state.current_page() {
        Page::Home => home(frame, size, state),
        Page::About => about(frame, size, state),
        Page::Apply => apply(frame, size, state),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::SubmitOutcome;
    use crate::state::FormField;
    use ratatui::{backend::TestBackend, Terminal};
    use std::time::{Duration, Instant};

    fn draw(state: &State) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
        terminal.draw(|frame| render(frame, state)).unwrap();
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    fn state_on(page: Page) -> State {
        let mut state = State::default();
        let now = Instant::now();
        state.navigate_at(page, now);
        state.tick_at(now + Duration::from_secs(1));
        state
    }

    #[test]
    fn home_shows_banner_and_call_to_action() {
        let screen = draw(&state_on(Page::Home));
        assert!(screen.contains(AGENCY_NAME));
        assert!(screen.contains("Learn more"));
        assert!(screen.contains("All rights reserved"));
    }

    #[test]
    fn about_lists_advantages() {
        let screen = draw(&state_on(Page::About));
        assert!(screen.contains("Our Advantages"));
        assert!(screen.contains("Support 24/7"));
        assert!(screen.contains("Join us"));
    }

    #[test]
    fn body_is_blank_mid_transition() {
        let mut state = State::default();
        state.navigate_at(Page::About, Instant::now());
        let screen = draw(&state);
        assert!(!screen.contains("Learn more"));
        assert!(!screen.contains("Our Advantages"));
        assert!(screen.contains(AGENCY_NAME));
    }

    #[test]
    fn apply_shows_inline_errors() {
        let mut state = state_on(Page::Apply);
        let form = state.form_mut();
        form.set_value(FormField::Name, "A");
        form.set_value(FormField::Age, "20");
        form.set_value(FormField::City, "B");
        form.set_value(FormField::Phone, "123");
        form.begin_submit("contact");

        let screen = draw(&state);
        assert!(screen.contains("Job Application"));
        assert!(screen.contains("Enter the number as +380XXXXXXXXX"));
    }

    #[test]
    fn thank_you_survives_redraws() {
        let mut state = state_on(Page::Apply);
        let form = state.form_mut();
        form.set_value(FormField::Name, "Olena");
        form.set_value(FormField::Age, "20");
        form.set_value(FormField::City, "Kyiv");
        form.set_value(FormField::Phone, "+380501234567");
        form.begin_submit("contact");
        let generation = state.form().generation();
        state.complete_submission(generation, SubmitOutcome::Delivered { status: 200 });

        for _ in 0..3 {
            let screen = draw(&state);
            assert!(screen.contains("Thank you for your application!"));
            assert!(!screen.contains("Send application"));
        }
    }

    #[test]
    fn alert_is_drawn_on_top() {
        let mut state = state_on(Page::Home);
        state.show_alert("error sending request".to_string());
        let screen = draw(&state);
        assert!(screen.contains("error sending request"));
    }

    #[test]
    fn log_panel_toggles() {
        let mut state = state_on(Page::Home);
        assert!(!draw(&state).contains(" Log "));
        state.toggle_log();
        assert!(draw(&state).contains(" Log "));
    }
}
