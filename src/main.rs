//! Wavereader - browse surf breaks and their 7-day forecasts
//!
//! A terminal UI application showing surf breaks grouped by state, with
//! per-break wave/wind forecast charts, generated surf reports, and a
//! persistent favorites list.

use std::io;
use std::panic;
use std::time::Duration;

use clap::Parser;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use wavereader::app::{App, AppState};
use wavereader::cli::{Cli, StartupConfig};
use wavereader::ui;

/// Sets up a panic hook that restores the terminal before printing the panic
/// message, so the terminal stays usable after a crash
fn setup_panic_hook() {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));
}

/// Renders the UI based on the current application state
fn render_ui(frame: &mut ratatui::Frame, app: &App) {
    match &app.state {
        AppState::Loading => {
            render_loading(frame);
        }
        AppState::BreakList => {
            ui::render_break_list(frame, app);
        }
        AppState::BreakDetail(name) => {
            ui::render_break_detail(frame, app, name);
        }
        AppState::Favorites => {
            ui::render_favorites(frame, app);
        }
    }

    if app.show_help {
        ui::render_help_overlay(frame);
    }
}

/// Renders a loading message while data is being fetched
fn render_loading(frame: &mut ratatui::Frame) {
    use ratatui::{
        layout::{Alignment, Constraint, Direction, Layout},
        style::{Color, Style},
        widgets::Paragraph,
    };

    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(45),
            Constraint::Length(3),
            Constraint::Percentage(45),
        ])
        .split(area);

    let loading_text = Paragraph::new("Loading surf breaks...")
        .style(Style::default().fg(Color::Cyan))
        .alignment(Alignment::Center);

    frame.render_widget(loading_text, chunks[1]);
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = StartupConfig::from_cli(&cli);

    setup_panic_hook();

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::with_startup_config(config);

    // Initial render to show the loading state while data is fetched
    terminal.draw(|f| render_ui(f, &app))?;
    app.load_all_data().await;

    loop {
        terminal.draw(|f| render_ui(f, &app))?;

        // Poll for keyboard events with 100ms timeout
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                app.handle_key(key);
            }
        }

        // Opening a detail view triggers its fetch on the next tick
        let pending_detail = match &app.state {
            AppState::BreakDetail(name) if !app.detail_ready(name) => Some(name.clone()),
            _ => None,
        };
        if let Some(name) = pending_detail {
            app.load_detail(&name).await;
        }

        if app.refresh_requested {
            app.refresh_requested = false;
            app.load_all_data().await;
        }

        if app.should_quit {
            break;
        }
    }

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;

    Ok(())
}
