use crate::config::ConfigStore;
use crate::profile::ProfileSource;
use crate::shutdown::ShutdownHandle;
use crate::ui::app::{App, UiCommand};
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use std::sync::mpsc::{RecvTimeoutError, Sender};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::runtime::Handle;
use tokio::sync::mpsc;
use tracing::{debug, info};

const COMMAND_QUEUE: usize = 8;

pub fn run<S: ProfileSource>(
    config: ConfigStore,
    source: Arc<S>,
    runtime: &Handle,
    shutdown: ShutdownHandle,
) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let settings = config.get();
    let frame_rate = Duration::from_millis(settings.ui.frame_ms);
    let mut app = App::new(settings);
    let events = EventHandler::new(frame_rate, shutdown.clone());

    let (command_tx, command_rx) = mpsc::channel(COMMAND_QUEUE);
    app.attach_commands(command_tx);
    runtime.spawn(serve_commands(command_rx, source, events.sender()));

    if let Ok((cols, rows)) = crossterm::terminal::size() {
        app.on_resize(cols, rows);
    }
    app.request_batch();

    let mut last_frame = Instant::now();
    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() || shutdown.is_shutting_down() {
            break;
        }

        match events.next(frame_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Mouse(mouse)) => app.on_mouse(mouse),
            Ok(AppEvent::Resize(cols, rows)) => app.on_resize(cols, rows),
            Ok(AppEvent::Frame) => {
                let now = Instant::now();
                app.on_frame(now.duration_since(last_frame));
                last_frame = now;
            }
            Ok(AppEvent::ProfilesLoaded(profiles)) => app.on_profiles_loaded(profiles),
            Ok(AppEvent::Shutdown) => app.request_quit(),
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    info!("UI loop finished");
    drop(guard);
    Ok(())
}

/// Executes UI commands on the async runtime.
///
/// Results come back on the UI event channel, so they are ordered with
/// input and frames. Stops once either side hangs up.
pub async fn serve_commands<S: ProfileSource>(
    mut commands: mpsc::Receiver<UiCommand>,
    source: Arc<S>,
    events: Sender<AppEvent>,
) {
    while let Some(command) = commands.recv().await {
        match command {
            UiCommand::FetchBatch { count } => {
                debug!(count, "Fetching profile batch");
                let profiles = source.fetch_batch(count).await;
                if events.send(AppEvent::ProfilesLoaded(profiles)).is_err() {
                    break;
                }
            }
        }
    }
    debug!("Command loop stopped");
}
