// Binary includes library modules - some public API items are only for library consumers
#![allow(unused)]

use std::io;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::Event,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Layout},
    Terminal,
};
use tracing_subscriber::EnvFilter;

mod api;
mod app;
mod config;
mod data;
mod events;
mod ui;

use api::HttpClient;
use app::{App, View};
use ui::Theme;

#[derive(Parser, Debug)]
#[command(name = "domwatch")]
#[command(about = "Terminal dashboard for monitoring web domain availability")]
struct Args {
    /// Base address of the domain-health API
    #[arg(short, long)]
    api_base: Option<String>,

    /// Path to a TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Open the monitor view for this domain directly
    #[arg(short, long)]
    domain: Option<String>,

    /// Force a color theme instead of detecting the terminal background
    #[arg(long, value_parser = ["light", "dark"])]
    theme: Option<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Logs go to stderr so they never touch the alternate screen;
    // enable with RUST_LOG and redirect stderr to a file.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .compact()
        .init();

    let settings = config::Settings::load(args.config.as_deref(), args.api_base.as_deref())?;

    let theme = match args.theme.as_deref() {
        Some("light") => Theme::light(),
        Some("dark") => Theme::dark(),
        _ => Theme::auto_detect(),
    };

    // The runtime must outlive the TUI loop; request tasks run on it while
    // the main thread drives the terminal.
    let rt = tokio::runtime::Runtime::new()?;
    let client = Box::new(HttpClient::new(rt.handle().clone(), &settings.api_base));

    let mut app = App::new(client, theme);
    match args.domain {
        Some(domain) => app.open_monitor(domain),
        None => app.open_domains(),
    }

    run_tui(&mut app)
}

/// Run the TUI until the user quits
fn run_tui(app: &mut App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Setup panic hook to restore terminal
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic);
    }));

    // Run the main loop
    let result = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    // Minimum terminal size for usable display
    const MIN_WIDTH: u16 = 50;
    const MIN_HEIGHT: u16 = 12;

    while app.running {
        // Draw UI
        terminal.draw(|frame| {
            let area = frame.area();

            // Check for minimum terminal size
            if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
                let msg = format!(
                    "Terminal too small: {}x{}\nMinimum: {}x{}\n\nResize to continue",
                    area.width, area.height, MIN_WIDTH, MIN_HEIGHT
                );
                let paragraph = ratatui::widgets::Paragraph::new(msg)
                    .alignment(ratatui::layout::Alignment::Center)
                    .style(ratatui::style::Style::default().fg(ratatui::style::Color::Yellow));
                let centered = ratatui::layout::Rect::new(0, area.height / 2 - 2, area.width, 5);
                frame.render_widget(paragraph, centered);
                return;
            }

            let chunks = Layout::vertical([
                Constraint::Length(1), // Header bar
                Constraint::Length(1), // Tabs
                Constraint::Min(8),    // Content
                Constraint::Length(1), // Status bar
            ])
            .split(area);

            ui::common::render_header(frame, app, chunks[0]);
            ui::common::render_tabs(frame, app, chunks[1]);

            // Render current view
            match app.current_view {
                View::Domains => ui::domains::render(frame, app, chunks[2]),
                View::Monitor => ui::monitor::render(frame, app, chunks[2]),
                View::AddDomain => ui::add_form::render(frame, app, chunks[2]),
            }

            ui::common::render_status_bar(frame, app, chunks[3]);

            // Render help overlay if active
            if app.show_help {
                ui::common::render_help(frame, app, area);
            }
        })?;

        // Poll for events with a short timeout
        if let Some(event) = events::poll_event(Duration::from_millis(100))? {
            match event {
                Event::Key(key) => events::handle_key_event(app, key),
                Event::Resize(_, _) => {
                    // Terminal will redraw on next iteration
                }
                _ => {}
            }
        }

        // Apply any responses that resolved since the last tick
        app.poll_api();
    }

    Ok(())
}
