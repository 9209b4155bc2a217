use crate::app::NetworkEventSender;
use crate::backend::SubmitOutcome;
use crate::config::Config;
use crate::events::network::Event as NetworkEvent;
use crate::logger::LogBuffer;
use crate::ui::{Theme, SPINNER_FRAME_COUNT};
use log::*;
use std::time::{Duration, Instant};

use super::error::StateError;
use super::form::{ApplicationForm, SubmitAttempt};
use super::navigation::Page;
use super::router::Router;

const DEFAULT_FORM_NAME: &str = "contact";
const DEFAULT_TRANSITION: Duration = Duration::from_millis(300);

/// Houses data representative of application state.
///
/// Owned by the controller and handed to the renderer, the key handlers and
/// the network worker by reference.
pub struct State {
    net_sender: Option<NetworkEventSender>,
    router: Router,
    form: ApplicationForm,
    form_generation: u64,
    form_name: String,
    alert: Option<String>,
    log_buffer: LogBuffer,
    log_visible: bool,
    spinner_index: usize,
    theme: Theme,
}

/// Defines default application state.
///
impl Default for State {
    fn default() -> State {
        State {
            net_sender: None,
            router: Router::new(DEFAULT_TRANSITION),
            form: ApplicationForm::new(0),
            form_generation: 0,
            form_name: DEFAULT_FORM_NAME.to_string(),
            alert: None,
            log_buffer: LogBuffer::new(),
            log_visible: false,
            spinner_index: 0,
            theme: Theme::default(),
        }
    }
}

impl State {
    /// Return new instance wired to the network worker.
    ///
    pub fn new(net_sender: NetworkEventSender, config: &Config, log_buffer: LogBuffer) -> Self {
        let theme = Theme::from_name(&config.theme_name).unwrap_or_else(|| {
            warn!(
                "Unknown theme '{}', falling back to default.",
                config.theme_name
            );
            Theme::default()
        });
        debug!("Using theme {}.", theme.name);
        State {
            net_sender: Some(net_sender),
            router: Router::new(config.transition_delay()),
            form_name: config.form_name.clone(),
            log_buffer,
            theme,
            ..State::default()
        }
    }

    pub fn current_page(&self) -> Page {
        self.router.current()
    }

    /// Whether the page content is faded out mid-transition.
    ///
    pub fn is_content_hidden(&self) -> bool {
        self.router.is_hidden()
    }

    /// Navigate to the page using the wall clock.
    ///
    pub fn navigate(&mut self, page: Page) -> bool {
        self.navigate_at(page, Instant::now())
    }

    pub fn navigate_at(&mut self, page: Page, now: Instant) -> bool {
        let scheduled = self.router.navigate(page, now);
        if scheduled {
            debug!("Navigating from {:?} to {:?}...", self.router.current(), page);
        }
        scheduled
    }

    /// Advance timers using the wall clock.
    ///
    pub fn tick(&mut self) {
        self.tick_at(Instant::now());
    }

    /// Advance the spinner and complete a due transition. Leaving the apply
    /// page discards its form.
    ///
    pub fn tick_at(&mut self, now: Instant) {
        self.spinner_index = (self.spinner_index + 1) % SPINNER_FRAME_COUNT;
        if let Some(left) = self.router.tick(now) {
            info!("Showing {} page.", self.router.current().label());
            if left == Page::Apply {
                self.remount_form();
            }
        }
    }

    fn remount_form(&mut self) {
        self.form_generation += 1;
        self.form = ApplicationForm::new(self.form_generation);
        debug!("Mounted application form #{}.", self.form_generation);
    }

    pub fn form(&self) -> &ApplicationForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut ApplicationForm {
        &mut self.form
    }

    /// Press submit on the application form. A ready submission is handed
    /// to the network worker; if that fails the form goes back to editing
    /// and an alert is raised.
    ///
    pub fn submit_application(&mut self) -> Result<SubmitAttempt, StateError> {
        let attempt = self.form.begin_submit(&self.form_name);
        if let SubmitAttempt::Ready(submission) = &attempt {
            debug!("Form submitted: {:?}", submission.pairs());
            let event = NetworkEvent::SubmitApplication {
                generation: self.form.generation(),
                submission: submission.clone(),
            };
            if let Err(e) = self.dispatch(event) {
                self.form.abort_sending();
                self.show_alert(e.to_string());
                return Err(e);
            }
            info!("Application queued for delivery.");
        }
        Ok(attempt)
    }

    fn dispatch(&self, event: NetworkEvent) -> Result<(), StateError> {
        let sender = self
            .net_sender
            .as_ref()
            .ok_or(StateError::NetworkUnavailable)?;
        sender
            .send(event)
            .map_err(|_| StateError::NetworkChannelClosed)
    }

    /// Record how delivery went for the form with the given generation.
    ///
    pub fn complete_submission(&mut self, generation: u64, outcome: SubmitOutcome) {
        let is_current = generation == self.form.generation();
        match outcome {
            SubmitOutcome::Delivered { status } => {
                if is_current {
                    self.form.mark_submitted();
                    info!("Application delivered (status {}).", status);
                } else {
                    debug!(
                        "Ignoring delivery for discarded form #{} (status {}).",
                        generation, status
                    );
                }
            }
            SubmitOutcome::Failed(message) => {
                if is_current {
                    self.form.abort_sending();
                }
                self.show_alert(message);
            }
        }
    }

    pub fn alert(&self) -> Option<&str> {
        self.alert.as_deref()
    }

    pub fn show_alert(&mut self, message: String) {
        warn!("Alert: {}", message);
        self.alert = Some(message);
    }

    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }

    pub fn is_log_visible(&self) -> bool {
        self.log_visible
    }

    pub fn toggle_log(&mut self) {
        self.log_visible = !self.log_visible;
    }

    /// Return the most recent log lines.
    ///
    pub fn log_lines(&self, count: usize) -> Vec<String> {
        self.log_buffer.tail(count)
    }

    pub fn spinner_index(&self) -> usize {
        self.spinner_index
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{FormField, FormPhase};
    use std::sync::mpsc;

    const DELAY: Duration = Duration::from_millis(300);

    fn connected_state() -> (State, mpsc::Receiver<NetworkEvent>) {
        let (tx, rx) = mpsc::channel();
        let state = State::new(tx, &Config::new(), LogBuffer::new());
        (state, rx)
    }

    fn fill_valid(state: &mut State) {
        let form = state.form_mut();
        form.set_value(FormField::Name, "Olena");
        form.set_value(FormField::Age, "22");
        form.set_value(FormField::City, "Lviv");
        form.set_value(FormField::Phone, "+380931234567");
    }

    fn go_to(state: &mut State, page: Page, now: &mut Instant) {
        state.navigate_at(page, *now);
        *now += DELAY;
        state.tick_at(*now);
    }

    #[test]
    fn navigation_round_trip() {
        let (mut state, _rx) = connected_state();
        let mut now = Instant::now();
        for page in [Page::About, Page::Apply, Page::Home] {
            go_to(&mut state, page, &mut now);
            assert_eq!(state.current_page(), page);
            assert!(!state.is_content_hidden());
        }
    }

    #[test]
    fn navigate_to_current_page_fires_nothing() {
        let (mut state, _rx) = connected_state();
        assert!(!state.navigate(Page::Home));
        assert!(!state.is_content_hidden());
    }

    #[test]
    fn content_hidden_during_transition() {
        let (mut state, _rx) = connected_state();
        let now = Instant::now();
        state.navigate_at(Page::About, now);
        state.tick_at(now + Duration::from_millis(100));
        assert!(state.is_content_hidden());
        assert_eq!(state.current_page(), Page::Home);
    }

    #[test]
    fn invalid_submit_sends_nothing() {
        let (mut state, rx) = connected_state();
        fill_valid(&mut state);
        state.form_mut().set_value(FormField::Phone, "123");

        let attempt = state.submit_application().unwrap();
        assert_eq!(attempt, SubmitAttempt::Invalid);
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn valid_submit_dispatches_event() {
        let (mut state, rx) = connected_state();
        fill_valid(&mut state);

        let attempt = state.submit_application().unwrap();
        assert!(matches!(attempt, SubmitAttempt::Ready(_)));
        assert_eq!(state.form().phase(), FormPhase::Sending);

        match rx.try_recv().unwrap() {
            NetworkEvent::SubmitApplication {
                generation,
                submission,
            } => {
                assert_eq!(generation, state.form().generation());
                assert_eq!(submission.get("form-name"), Some("contact"));
                assert_eq!(submission.get("city"), Some("Lviv"));
            }
        }
    }

    #[test]
    fn double_submit_dispatches_once() {
        let (mut state, rx) = connected_state();
        fill_valid(&mut state);
        state.submit_application().unwrap();
        assert_eq!(state.submit_application().unwrap(), SubmitAttempt::Ignored);
        assert!(rx.try_recv().is_ok());
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn submit_without_worker_raises_alert() {
        let mut state = State::default();
        fill_valid(&mut state);
        assert!(matches!(
            state.submit_application(),
            Err(StateError::NetworkUnavailable)
        ));
        assert_eq!(state.form().phase(), FormPhase::Editing);
        assert!(state.alert().is_some());
    }

    #[test]
    fn submit_with_closed_worker_raises_alert() {
        let (mut state, rx) = connected_state();
        drop(rx);
        fill_valid(&mut state);
        assert!(matches!(
            state.submit_application(),
            Err(StateError::NetworkChannelClosed)
        ));
        assert_eq!(state.form().phase(), FormPhase::Editing);
    }

    #[test]
    fn delivery_is_terminal_across_ticks() {
        let (mut state, _rx) = connected_state();
        fill_valid(&mut state);
        state.submit_application().unwrap();
        let generation = state.form().generation();
        state.complete_submission(generation, SubmitOutcome::Delivered { status: 200 });

        for _ in 0..10 {
            state.tick();
        }
        assert_eq!(state.form().phase(), FormPhase::Submitted);
        assert!(state.alert().is_none());
    }

    #[test]
    fn failure_alerts_and_keeps_form_editable() {
        let (mut state, _rx) = connected_state();
        fill_valid(&mut state);
        state.submit_application().unwrap();
        let generation = state.form().generation();
        state.complete_submission(generation, SubmitOutcome::Failed("connection refused".into()));

        assert_eq!(state.alert(), Some("connection refused"));
        assert_eq!(state.form().phase(), FormPhase::Editing);
        assert_eq!(state.form().value(FormField::City), "Lviv");

        state.dismiss_alert();
        assert!(state.alert().is_none());
    }

    #[test]
    fn leaving_apply_remounts_form() {
        let (mut state, _rx) = connected_state();
        let mut now = Instant::now();
        go_to(&mut state, Page::Apply, &mut now);
        fill_valid(&mut state);
        state.submit_application().unwrap();
        let old_generation = state.form().generation();
        state.complete_submission(old_generation, SubmitOutcome::Delivered { status: 200 });
        assert_eq!(state.form().phase(), FormPhase::Submitted);

        go_to(&mut state, Page::About, &mut now);
        go_to(&mut state, Page::Apply, &mut now);
        assert_eq!(state.form().phase(), FormPhase::Editing);
        assert_eq!(state.form().value(FormField::Name), "");
        assert_ne!(state.form().generation(), old_generation);
    }

    #[test]
    fn stale_delivery_is_ignored() {
        let (mut state, _rx) = connected_state();
        let mut now = Instant::now();
        go_to(&mut state, Page::Apply, &mut now);
        fill_valid(&mut state);
        state.submit_application().unwrap();
        let old_generation = state.form().generation();

        go_to(&mut state, Page::Home, &mut now);
        state.complete_submission(old_generation, SubmitOutcome::Delivered { status: 200 });
        assert_eq!(state.form().phase(), FormPhase::Editing);
    }

    #[test]
    fn toggle_log_panel() {
        let mut state = State::default();
        assert!(!state.is_log_visible());
        state.toggle_log();
        assert!(state.is_log_visible());
    }
}
