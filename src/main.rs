use hiretrack::app::{App, AppMessage, Focus, Screen};
use hiretrack::config::AppConfig;
use hiretrack::models::{StageAction, StatusFilter};
use hiretrack::ui;
use hiretrack::ui::interaction::PointerEvent;

use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use crossterm::{
    cursor::Show,
    event::{
        DisableMouseCapture, EnableMouseCapture, Event, EventStream, KeyCode, KeyEvent,
        KeyEventKind, KeyModifiers, MouseButton, MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use tokio::sync::mpsc;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Write tracing output to a log file; the TUI owns the terminal.
///
/// The returned guard flushes the writer on drop and must live until exit.
fn init_logging(config: &AppConfig) -> Result<tracing_appender::non_blocking::WorkerGuard> {
    use tracing_subscriber::EnvFilter;

    let log_dir = dirs::data_local_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("hiretrack");
    std::fs::create_dir_all(&log_dir).wrap_err("failed to create log directory")?;
    let log_file = std::fs::File::create(log_dir.join("hiretrack.log"))
        .wrap_err("failed to create log file")?;
    let (writer, guard) = tracing_appender::non_blocking(log_file);

    let filter = EnvFilter::try_new(&config.log_filter)
        .unwrap_or_else(|_| EnvFilter::new("hiretrack=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .init();
    Ok(guard)
}

#[tokio::main]
async fn main() -> Result<()> {
    if std::env::args().any(|arg| arg == "--version" || arg == "-V") {
        println!("hiretrack {}", VERSION);
        return Ok(());
    }

    color_eyre::install()?;
    let config = AppConfig::from_env();
    let _log_guard = init_logging(&config)?;
    tracing::info!(version = VERSION, base_url = %config.base_url, "starting hiretrack");

    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(&config);
    if !config.skip_initial_fetch {
        app.refresh_candidates();
        app.refresh_months();
    }

    let result = run_app(&mut terminal, &mut app).await;

    // Terminal teardown, even when the loop errored
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture,
        Show
    )?;

    if let Err(ref e) = result {
        tracing::error!(error = %e, "event loop exited with error");
    }
    result
}

/// Main event loop: terminal events and background-task messages.
async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let mut event_stream = EventStream::new();

    // Take the message receiver from the app (we need ownership for select!)
    let mut message_rx: Option<mpsc::UnboundedReceiver<AppMessage>> = app.message_rx.take();

    loop {
        if app.needs_redraw {
            terminal.draw(|frame| ui::render(frame, app))?;
            app.needs_redraw = false;
        }

        tokio::select! {
            maybe_event = event_stream.next() => {
                match maybe_event {
                    Some(Ok(event)) => handle_terminal_event(app, event),
                    Some(Err(e)) => {
                        tracing::warn!(error = %e, "terminal event stream error");
                    }
                    None => break,
                }
            }
            Some(message) = async {
                match message_rx.as_mut() {
                    Some(rx) => rx.recv().await,
                    None => None,
                }
            } => {
                app.handle_message(message);
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

fn handle_terminal_event(app: &mut App, event: Event) {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => handle_key(app, key),
        Event::Mouse(mouse) => {
            if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
                let press = PointerEvent::new(mouse.column, mouse.row);
                // Capture ordering: outside observers must see every press
                // before a hit area can consume it.
                app.outside.notify(press, &app.regions);

                if let Some(action) = app.hit_registry.hit_test(mouse.column, mouse.row) {
                    ui::handle_click_action(app, action);
                }
                app.mark_dirty();
            }
        }
        Event::Resize(_, _) => app.mark_dirty(),
        _ => {}
    }
}

fn handle_key(app: &mut App, key: KeyEvent) {
    // Ctrl+C always quits
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.should_quit = true;
        return;
    }

    if app.screen == Screen::Dashboard && app.focus == Focus::Search {
        handle_search_key(app, key);
        return;
    }

    match app.screen {
        Screen::Dashboard => handle_dashboard_key(app, key),
        Screen::Detail => handle_detail_key(app, key),
    }
}

fn handle_search_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Enter => {
            app.focus = Focus::Table;
        }
        KeyCode::Backspace => {
            app.search.backspace();
            app.clamp_selection();
        }
        KeyCode::Char(c) => {
            app.search.push(c);
            app.clamp_selection();
        }
        _ => {}
    }
    app.mark_dirty();
}

fn handle_dashboard_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') => {
            app.should_quit = true;
        }
        KeyCode::Char('/') => {
            app.focus = Focus::Search;
        }
        KeyCode::Char('m') => {
            app.toggle_month_dropdown();
        }
        KeyCode::Esc => {
            // Esc closes the dropdown first, then clears the search.
            if app.month_dropdown_open() {
                app.close_month_dropdown();
            } else if !app.search.is_empty() {
                app.search.clear();
                app.clamp_selection();
            }
        }
        KeyCode::Up => {
            app.selected_row = app.selected_row.saturating_sub(1);
        }
        KeyCode::Down => {
            app.selected_row += 1;
            app.clamp_selection();
        }
        KeyCode::Enter => {
            if let Some(id) = app.selected_application_id() {
                app.open_detail(id);
            }
        }
        KeyCode::Tab => {
            let current = StatusFilter::ALL
                .iter()
                .position(|f| *f == app.status_filter)
                .unwrap_or(0);
            app.status_filter = StatusFilter::ALL[(current + 1) % StatusFilter::ALL.len()];
            app.refresh_candidates();
        }
        _ => {}
    }
    app.mark_dirty();
}

fn handle_detail_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') => {
            app.should_quit = true;
        }
        KeyCode::Esc | KeyCode::Backspace => {
            app.back_to_dashboard();
        }
        KeyCode::Char('a') => {
            if let Some(id) = app.detail.as_ref().map(|d| d.application_id) {
                app.update_stage(id, StageAction::Advance);
            }
        }
        KeyCode::Char('r') => {
            if let Some(id) = app.detail.as_ref().map(|d| d.application_id) {
                app.update_stage(id, StageAction::Reject);
            }
        }
        _ => {}
    }
    app.mark_dirty();
}
