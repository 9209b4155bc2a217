use crate::backend::HttpBackend;
use crate::config::Config;
use crate::error::AppResult;
use crate::events::network::{Event as NetworkEvent, Handler as NetworkEventHandler};
use crate::events::terminal::Handler as TerminalEventHandler;
use crate::logger::{self, LogBuffer};
use crate::state::State;
use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::*;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, stdout, Stdout};
use std::sync::Arc;
use tokio::sync::Mutex;

pub type NetworkEventSender = std::sync::mpsc::Sender<NetworkEvent>;
type NetworkEventReceiver = std::sync::mpsc::Receiver<NetworkEvent>;

/// Oversees event processing, state management, and terminal output.
///
pub struct App {
    state: Arc<Mutex<State>>,
    config: Config,
}

impl App {
    /// Start a new application according to the given configuration. Returns
    /// the result of the application execution.
    ///
    pub async fn start(config: Config) -> Result<()> {
        let log_buffer = LogBuffer::new();
        logger::init(config.log_level_filter(), log_buffer.clone())?;

        info!("Starting application...");
        debug!("Using configuration {:?}", config);
        let (tx, rx) = std::sync::mpsc::channel::<NetworkEvent>();
        let app = App {
            state: Arc::new(Mutex::new(State::new(tx, &config, log_buffer))),
            config,
        };
        app.start_network(rx)?;
        app.start_ui().await?;

        info!("Exiting application...");
        Ok(())
    }

    /// Start a separate thread for asynchronous state mutations.
    ///
    fn start_network(&self, net_receiver: NetworkEventReceiver) -> AppResult<()> {
        debug!("Creating new thread for asynchronous networking...");
        let backend = HttpBackend::new(&self.config.form_endpoint)?;
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()?;
        let cloned_state = Arc::clone(&self.state);
        std::thread::spawn(move || {
            runtime.block_on(async {
                let mut network_event_handler = NetworkEventHandler::new(&cloned_state, &backend);
                while let Ok(network_event) = net_receiver.recv() {
                    if let Err(e) = network_event_handler.handle(network_event).await {
                        error!("Failed to handle network event: {}", e);
                    }
                }
            })
        });
        Ok(())
    }

    /// Begin the terminal event poll on a separate thread before starting the
    /// render loop on the main thread. The terminal is restored even if the
    /// loop fails.
    ///
    async fn start_ui(&self) -> Result<()> {
        debug!("Starting user interface on main thread...");
        let mut stdout = stdout();
        execute!(stdout, EnterAlternateScreen)?;
        enable_raw_mode()?;

        let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        terminal.hide_cursor()?;

        let result = self.run_ui(&mut terminal).await;

        disable_raw_mode()?;
        execute!(io::stdout(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        result
    }

    async fn run_ui(&self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        let terminal_event_handler = TerminalEventHandler::new();
        loop {
            let mut state = self.state.lock().await;
            terminal.draw(|frame| crate::ui::render(frame, &state))?;
            if !terminal_event_handler.handle_next(&mut state)? {
                debug!("Received application exit request.");
                break;
            }
        }
        Ok(())
    }
}
