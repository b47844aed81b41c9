use hanami::app::App;
use hanami::cli::{parse_args, run_cli_command, CliCommand};
use hanami::startup::{init_logging, AppConfig};
use hanami::ui;

use color_eyre::Result;
use crossterm::{
    cursor::Show,
    event::{Event, EventStream},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;

fn main() -> Result<()> {
    color_eyre::install()?;

    let command = parse_args(std::env::args());
    init_logging();

    let config = AppConfig::from_env()?;
    let (content, settings) = config.build_sources();

    // Create Tokio runtime for the entire application
    let runtime = tokio::runtime::Runtime::new()?;

    // Non-interactive commands print and exit before the terminal is touched
    if command != CliCommand::RunTui {
        let result = runtime.block_on(run_cli_command(
            &command,
            content,
            settings,
            &mut io::stdout(),
        ));
        if let Some(Err(e)) = result {
            tracing::error!("{:?} failed: {}", command, e);
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
        return Ok(());
    }

    // Setup panic hook to ensure terminal cleanup on panic
    setup_panic_hook();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let mut app = App::new(content, settings);
    let size = terminal.size()?;
    app.update_terminal_dimensions(size.width, size.height);

    let result = runtime.block_on(run_app(&mut terminal, &mut app));

    // Restore terminal
    restore_terminal(&mut terminal)?;

    if let Err(ref e) = result {
        tracing::error!("TUI exited with error: {}", e);
    }
    result
}

/// Setup panic hook to restore terminal on panic
fn setup_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        // Try to restore terminal state
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, Show);

        // Call the original panic hook
        original_hook(panic_info);
    }));
}

/// Restore terminal to normal mode
fn restore_terminal<B: ratatui::backend::Backend + std::io::Write>(
    terminal: &mut Terminal<B>,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    // Create async event stream for keyboard input
    let mut event_stream = EventStream::new();

    // First frame shows the loading state, then settings and content load
    terminal.draw(|f| ui::render(f, app))?;
    app.initialize().await;

    loop {
        // Draw the UI only when needed
        if app.needs_redraw {
            terminal.draw(|f| ui::render(f, app))?;
            app.needs_redraw = false;
        }

        if app.should_quit {
            break;
        }

        // A changed search or filter refetches once the frame showing the
        // change is on screen
        if app.library_needs_fetch() {
            app.refresh_library().await;
            continue;
        }

        // 16ms tick keeps key handling responsive without busy-looping
        let timeout = tokio::time::sleep(std::time::Duration::from_millis(16));

        tokio::select! {
            _ = timeout => {
                app.tick();
            }

            // Handle keyboard events
            event_result = event_stream.next() => {
                match event_result {
                    Some(Ok(Event::Resize(width, height))) => {
                        app.update_terminal_dimensions(width, height);
                    }
                    Some(Ok(Event::Key(key))) => {
                        app.handle_key_event(key).await;
                    }
                    Some(Ok(_)) => {}
                    Some(Err(e)) => {
                        tracing::warn!("terminal event error: {}", e);
                    }
                    None => break,
                }
            }
        }
    }

    Ok(())
}
