use crate::backend::{FormBackend, Submission};
use crate::state::State;
use anyhow::Result;
use log::*;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Specify different network event types.
///
#[derive(Debug, Clone)]
pub enum Event {
    SubmitApplication {
        generation: u64,
        submission: Submission,
    },
}

/// Specify struct for managing state with network events.
///
pub struct Handler<'a, B: FormBackend> {
    state: &'a Arc<Mutex<State>>,
    backend: &'a B,
}

impl<'a, B: FormBackend> Handler<'a, B> {
    /// Return new instance with reference to state.
    ///
    pub fn new(state: &'a Arc<Mutex<State>>, backend: &'a B) -> Self {
        Handler { state, backend }
    }

    /// Handle network events by type.
    ///
    pub async fn handle(&mut self, event: Event) -> Result<()> {
        debug!("Processing network event '{:?}'...", event);
        match event {
            Event::SubmitApplication {
                generation,
                submission,
            } => self.submit_application(generation, submission).await?,
        }
        Ok(())
    }

    /// Deliver the application and record the outcome in state.
    ///
    async fn submit_application(&mut self, generation: u64, submission: Submission) -> Result<()> {
        info!("Sending application...");
        let outcome = self.backend.submit(&submission).await;
        let mut state = self.state.lock().await;
        state.complete_submission(generation, outcome);
        Ok(())
    }
}
