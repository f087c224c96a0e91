//! # Scorecard CLI Entry Point
//!
//! This is the main entry point for the scorecard TUI.
//!
//! ## Overview
//!
//! Scorecard is a terminal front end for a prediction model: it collects
//! 0-100 score inputs through a validated form, and, when the caller has
//! already computed a prediction, reveals it with a short entrance
//! animation. On a valid submission the entered values are printed as a
//! JSON object on stdout for the caller to feed into the model; the
//! prediction itself is out of scope here.
//!
//! ## Usage
//!
//! ```bash
//! # Enter scores; the submitted values land on stdout as JSON
//! scorecard
//!
//! # Reveal a result computed elsewhere
//! scorecard --score 87
//!
//! # Use a custom form definition
//! scorecard --form ./form.json
//!
//! # Debug mode - print the resolved form definition and exit
//! scorecard --debug
//! ```
//!
//! ## Key Bindings
//!
//! - `Tab` / `Down` - focus next control
//! - `Shift+Tab` / `Up` - focus previous control
//! - `0-9` / `Backspace` - edit a numeric field (clamped to 0-100)
//! - `Left` / `Right` / `Space` - cycle a select's options
//! - `Enter` - advance, or submit when the submit control is focused
//! - `Esc` / `q` - quit

use scorecard::form::FormSpec;
use scorecard::ui::app::Focus;
use scorecard::ui::config::Config;
use scorecard::ui::reveal::Reveal;
use scorecard::ui::theme::Theme;
use scorecard::ui::{self, App};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::panic;
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// How long the loading frame stays on screen before the app exits and the
/// submission payload is emitted.
const LOADING_LINGER: Duration = Duration::from_millis(400);

/// Trait for reading terminal events (allows dependency injection for testing)
trait EventReader {
    fn read_event(&mut self, timeout: Duration) -> Result<Option<Event>>;
}

/// Production event reader that uses crossterm's event polling + read
struct CrosstermEventReader;

impl EventReader for CrosstermEventReader {
    fn read_event(&mut self, timeout: Duration) -> Result<Option<Event>> {
        if event::poll(timeout).context("Failed to poll for events")? {
            Ok(Some(
                event::read().context("Failed to read keyboard event")?,
            ))
        } else {
            Ok(None)
        }
    }
}

/// Scorecard - a terminal form for prediction-model scores
#[derive(Parser, Debug)]
#[command(name = "scorecard")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Enter prediction-model scores and reveal the result", long_about = None)]
struct Args {
    /// Predicted score (0-100) computed by the caller; shows the result card
    #[arg(short, long, value_parser = clap::value_parser!(u16).range(0..=100))]
    score: Option<u16>,

    /// Target fill of the result progress bar in percent (defaults to the score)
    #[arg(long, value_parser = clap::value_parser!(u16).range(0..=100))]
    fill: Option<u16>,

    /// Path to a JSON form definition replacing the built-in form
    #[arg(short = 'f', long = "form", value_name = "FILE")]
    form: Option<PathBuf>,

    /// Theme name override (see built-in themes)
    #[arg(long, value_name = "NAME")]
    theme: Option<String>,

    /// Print the resolved form definition and exit
    #[arg(long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Set up panic hook to ensure terminal is restored on panic
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);

        original_hook(panic_info);
    }));

    let result = run_application(args).await;

    // Restore panic hook
    let _ = panic::take_hook();

    result
}

async fn run_application(args: Args) -> Result<()> {
    // Resolve the form: a caller-supplied definition or the built-in one
    let spec = match &args.form {
        Some(path) => FormSpec::load_from(path)?,
        None => FormSpec::built_in(),
    };

    // Debug mode: print the resolved form and exit
    if args.debug {
        println!("=== Form Definition: {} ===", spec.title);
        for field in &spec.fields {
            println!(
                "  Id: {}\n    Label: {}\n    Kind: {:?}\n    Required: {}\n",
                field.id, field.label, field.kind, field.required
            );
        }
        println!("Total: {} fields", spec.fields.len());
        return Ok(());
    }

    // Theme: CLI flag wins over persisted config; unknown names fall back
    let config = Config::load();
    let theme_name = args.theme.as_deref().unwrap_or(&config.theme);
    let theme = match Theme::by_name(theme_name) {
        Some(theme) => {
            // Remember an explicit, valid theme choice for next time
            if args.theme.is_some() && config.theme != theme.name {
                let updated = Config {
                    theme: theme.name.to_string(),
                };
                if let Err(e) = updated.save() {
                    eprintln!("Warning: Could not save theme selection: {e}");
                }
            }
            theme.clone()
        }
        None => {
            eprintln!("Warning: Unknown theme '{theme_name}', using default");
            Theme::default_theme().clone()
        }
    };

    // The reveal exists only when the caller supplied a result; its absence
    // just means the feature is absent.
    let reveal = args
        .score
        .map(|score| Reveal::new(score, args.fill.unwrap_or(score)));

    // Setup terminal
    enable_raw_mode().context("Failed to enable raw mode for terminal")?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to setup terminal")?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let mut app = App::new(spec, reveal, theme);

    // Run the app and ensure cleanup happens even on error
    let mut event_reader = CrosstermEventReader;
    let run_result = run_app(&mut terminal, &mut app, &mut event_reader).await;

    // Restore terminal (always runs, even if run_app failed)
    let cleanup_result = cleanup_terminal(&mut terminal);

    run_result?;
    cleanup_result?;

    // The analog of the native form post: hand the submitted values to
    // whoever invoked us, now that the alternate screen is gone.
    if app.loading {
        let payload =
            serde_json::to_string_pretty(&app.submission_payload())
                .context("Failed to serialize submission payload")?;
        println!("{payload}");
    }

    Ok(())
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    event_reader: &mut dyn EventReader,
) -> Result<()> {
    loop {
        let now = Instant::now();
        terminal
            .draw(|f| ui::render(f, app, now))
            .context("Failed to draw terminal UI")?;

        // The loading state is never cleared; once its frame has been
        // visible briefly the app exits and the payload is emitted.
        if let Some(since) = app.loading_since {
            if since.elapsed() >= LOADING_LINGER {
                break;
            }
        }

        // Short timeout while animations (or the loading linger) need
        // repaints; relaxed polling otherwise
        let poll_timeout = if app.loading || app.is_animating(now) {
            Duration::from_millis(50)
        } else {
            Duration::from_millis(100)
        };

        let event = event_reader.read_event(poll_timeout)?;

        // If no event, continue the loop (re-render for animations)
        let event = match event {
            Some(e) => e,
            None => continue,
        };

        if let Event::Key(key) = event {
            // Everything is inert while the submission is in flight
            if app.loading {
                continue;
            }

            match key.code {
                KeyCode::Esc => {
                    app.should_quit = true;
                }
                KeyCode::Tab | KeyCode::Down => {
                    app.focus_next();
                }
                KeyCode::BackTab | KeyCode::Up => {
                    app.focus_prev();
                }
                KeyCode::Left => {
                    app.cycle_option(-1);
                }
                KeyCode::Right => {
                    app.cycle_option(1);
                }
                KeyCode::Backspace => {
                    app.backspace();
                }
                KeyCode::Enter => {
                    if app.focus == Focus::Submit {
                        app.submit();
                    } else {
                        app.focus_next();
                    }
                }
                KeyCode::Char(c) => {
                    // Characters the focused control does not consume fall
                    // through to the global bindings
                    if !app.handle_input(c) && matches!(c, 'q' | 'Q') {
                        app.should_quit = true;
                    }
                }
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Clean up terminal state
fn cleanup_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;

    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .context("Failed to restore terminal")?;

    terminal.show_cursor().context("Failed to show cursor")?;

    Ok(())
}
