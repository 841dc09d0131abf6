mod api;
mod app;
mod banner;
mod handlers;
mod logging;
mod model;
mod prefs;
mod sound;
mod state;
mod ui;

use std::{env, error::Error, io, time::Duration};

use app::{ApiCommand, ApiEvent, App};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event as CEvent},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use sound::SoundManager;
use tokio::sync::mpsc;

const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:5501";

/// Application events
enum AppEvent {
    Terminal(CEvent),
    Api(ApiEvent),
    Tick,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    logging::init_tracing();
    prefs::init_global_prefs();

    // Get server address from command line or use default
    let server_url = env::args().nth(1).unwrap_or_else(|| DEFAULT_SERVER_URL.to_string());
    let api_client = api::ApiClient::new(server_url.clone());

    // Enable terminal raw mode; mouse capture feeds the context-menu flow
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let (api_tx, mut api_rx) = mpsc::unbounded_channel::<ApiCommand>();
    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<AppEvent>();

    // Initialize sound manager
    let sound_manager = SoundManager::new();

    // Create app instance (restores the persisted theme)
    let mut app = App::new(api_tx, &sound_manager, server_url);
    let tick_rate = Duration::from_millis(app.config.tick_rate_ms);
    let poll_interval = Duration::from_millis(app.config.poll_interval_ms);

    // Spawn terminal event handler
    let event_tx_clone = event_tx.clone();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(tick_rate);
        loop {
            interval.tick().await;

            // Check for terminal events (non-blocking)
            if event::poll(Duration::from_millis(0)).unwrap_or(false) {
                if let Ok(event) = event::read() {
                    if event_tx_clone.send(AppEvent::Terminal(event)).is_err() {
                        break;
                    }
                }
            }

            // Send tick event for animation
            if event_tx_clone.send(AppEvent::Tick).is_err() {
                break;
            }
        }
    });

    // Spawn the history poller: one fetch immediately, then every second for
    // the lifetime of the process. A failed fetch only logs; the next tick
    // is the retry.
    let poll_client = api_client.clone();
    let event_tx_clone = event_tx.clone();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(poll_interval);
        loop {
            interval.tick().await;
            match poll_client.message_history().await {
                Ok(entries) => {
                    if event_tx_clone.send(AppEvent::Api(ApiEvent::History(entries))).is_err() {
                        break;
                    }
                }
                Err(e) => tracing::error!("message history fetch failed: {}", e),
            }
        }
    });

    // Spawn the API command runner. Failures are logged and produce no
    // event, so the UI stays exactly as it was.
    let event_tx_clone = event_tx.clone();
    tokio::spawn(async move {
        while let Some(cmd) = api_rx.recv().await {
            match cmd {
                ApiCommand::SendMessage(msg) => match api_client.send_message(&msg).await {
                    Ok(()) => {
                        let _ = event_tx_clone.send(AppEvent::Api(ApiEvent::MessageSent));
                    }
                    Err(e) => tracing::error!("send-message failed: {}", e),
                },
                ApiCommand::IgnoreMessage { message_id, duration } => {
                    match api_client.ignore_message(&message_id, duration).await {
                        Ok(()) => {
                            let _ = event_tx_clone.send(AppEvent::Api(ApiEvent::IgnoreConfirmed));
                            // muting succeeded: refresh now instead of
                            // waiting out the poll interval
                            forward_history(&api_client, &event_tx_clone).await;
                        }
                        Err(e) => tracing::error!("ignore_message failed: {}", e),
                    }
                }
                ApiCommand::ClearHistory => match api_client.clear_history().await {
                    Ok(()) => {
                        let _ = event_tx_clone.send(AppEvent::Api(ApiEvent::HistoryCleared));
                        forward_history(&api_client, &event_tx_clone).await;
                    }
                    Err(e) => tracing::error!("clear-history failed: {}", e),
                },
                ApiCommand::RefreshHistory => {
                    forward_history(&api_client, &event_tx_clone).await;
                }
            }
        }
    });

    // Main application loop
    while !app.ui.should_quit {
        // Render UI
        terminal.draw(|f| ui::ui(f, &mut app))?;

        // Handle events
        if let Some(event) = event_rx.recv().await {
            match event {
                AppEvent::Terminal(terminal_event) => match terminal_event {
                    CEvent::Key(key) => handlers::handle_key_event(key, &mut app),
                    CEvent::Mouse(mouse) => handlers::handle_mouse_event(mouse, &mut app),
                    CEvent::Resize(width, height) => app.backgrounds.resize(width, height),
                    _ => {}
                },
                AppEvent::Api(api_event) => {
                    app.handle_api_event(api_event);
                }
                AppEvent::Tick => {
                    app.on_tick();
                }
            }
        }
    }

    // Cleanup
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;

    Ok(())
}

async fn forward_history(
    client: &api::ApiClient,
    event_tx: &mpsc::UnboundedSender<AppEvent>,
) {
    match client.message_history().await {
        Ok(entries) => {
            let _ = event_tx.send(AppEvent::Api(ApiEvent::History(entries)));
        }
        Err(e) => tracing::error!("message history fetch failed: {}", e),
    }
}
