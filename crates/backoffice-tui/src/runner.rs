//! Main TUI runner - entry point and event loop

use std::sync::Arc;

use backoffice_app::config::Settings;
use backoffice_app::message::Message;
use backoffice_app::process::process_message;
use backoffice_app::signals;
use backoffice_app::state::AppState;
use backoffice_client::{AdminApi, AdminClient};
use backoffice_core::prelude::*;
use tokio::sync::mpsc;

use super::{event, render, terminal};

/// Run the admin console against the configured backend
pub async fn run(settings: Settings) -> Result<()> {
    let client = AdminClient::builder(settings.api.base_url.clone())
        .timeout(settings.api.timeout())
        .retry(settings.retry.policy())
        .build()
        .map_err(|e| Error::config(format!("Failed to create HTTP client: {}", e)))?;
    info!("Using backend at {}", client.base_url());
    let api = Arc::new(client);

    // Install panic hook for terminal restoration
    terminal::install_panic_hook();

    let mut term = ratatui::init();
    let mut state = AppState::with_settings(settings);

    let (msg_tx, msg_rx) = mpsc::channel::<Message>(256);

    // Sends Message::Quit on SIGINT/SIGTERM
    signals::spawn_signal_handler(msg_tx.clone());

    // First page load
    process_message(&mut state, Message::Refresh, &msg_tx, &api);

    let result = run_loop(&mut term, &mut state, msg_rx, msg_tx, api);

    ratatui::restore();
    info!("Backoffice exiting");

    result
}

/// Main event loop
fn run_loop<A>(
    terminal: &mut ratatui::DefaultTerminal,
    state: &mut AppState,
    mut msg_rx: mpsc::Receiver<Message>,
    msg_tx: mpsc::Sender<Message>,
    api: Arc<A>,
) -> Result<()>
where
    A: AdminApi + Send + Sync + 'static,
{
    while !state.should_quit() {
        // Results from background requests, signals and timers
        while let Ok(msg) = msg_rx.try_recv() {
            process_message(state, msg, &msg_tx, &api);
        }

        terminal
            .draw(|frame| render::view(frame, state))
            .context("Failed to draw frame")?;

        if let Some(message) = event::poll().context("Failed to read terminal input")? {
            process_message(state, message, &msg_tx, &api);
        }
    }

    Ok(())
}
