mod app;
mod clock;
mod domain;
mod input;
mod persistence;
mod report;
mod session;
mod store;
mod ui;

use anyhow::Result;
use app::AppState;
use clap::{Parser, Subcommand};
use clock::SystemClock;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use domain::Theme;
use persistence::{ensure_daylist_dir, get_daylist_dir, init_local_daylist, theme_key, FileStore, KvStore};
use ratatui::{backend::CrosstermBackend, Terminal};
use session::current_session;
use std::io;
use std::time::Duration;
use store::TaskStore;

/// Poll timeout; also how often the UI refreshes, so a midnight crossing
/// rebuckets without a keypress.
const TICK_MS: u64 = 1000;

#[derive(Parser)]
#[command(name = "daylist")]
#[command(about = "A terminal-based daily checklist with progress tracking and a 7-day history", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a local .daylist directory in the current directory
    Init,
    /// Generate a weekly summary with statistics
    Stats {
        /// Date to generate the summary for (YYYY-MM-DD format). Defaults to today.
        #[arg(short, long)]
        date: Option<String>,
        /// Output file path. Defaults to ~/.daylist/summary-YYYY-MM-DD.md
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Sign in to a named profile (created on first use)
    Login {
        /// Profile name
        name: String,
    },
    /// Sign out of the active profile
    Logout,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Init) => {
            let daylist_dir = init_local_daylist()?;
            println!("Initialized daylist directory: {}", daylist_dir.display());
            println!();
            println!("Daylist will now use this local directory for task storage.");
            println!("Run 'daylist' to start your checklist.");
            Ok(())
        }
        Some(Commands::Stats { date, output }) => {
            let report_date = if let Some(date_str) = date {
                chrono::NaiveDate::parse_from_str(&date_str, "%Y-%m-%d")
                    .map_err(|e| anyhow::anyhow!("Invalid date format. Use YYYY-MM-DD: {}", e))?
            } else {
                chrono::Local::now().date_naive()
            };

            let output_path = output.map(std::path::PathBuf::from);

            println!("Generating summary for {}...", report_date);
            let report_path = report::generate_report(Some(report_date), output_path)?;
            println!("Summary written: {}", report_path.display());
            Ok(())
        }
        Some(Commands::Login { name }) => {
            let identity = session::sign_in(&name, &SystemClock)?;
            println!(
                "Signed in as {} ({})",
                identity.display_name, identity.id
            );
            println!("Your checklist is now stored separately from other profiles.");
            Ok(())
        }
        Some(Commands::Logout) => {
            match session::sign_out()? {
                Some(identity) => println!("Signed out of {}", identity.display_name),
                None => println!("No profile is signed in."),
            }
            Ok(())
        }
        None => run_tui(),
    }
}

fn run_tui() -> Result<()> {
    // Ensure the daylist directory exists
    let dir = ensure_daylist_dir()?;
    eprintln!("Using daylist directory: {}", get_daylist_dir()?.display());

    // Resolve the session and load its task collection
    let session = current_session()?;
    let backend = FileStore::new(dir.clone());
    let store = TaskStore::load(
        Box::new(backend),
        session.storage_key(),
        Box::new(SystemClock),
    )?;

    // Theme is read once at startup, written on every toggle
    let settings = FileStore::new(dir);
    let theme = settings
        .load(theme_key())?
        .map(|value| Theme::parse(&value))
        .unwrap_or_default();

    let mut app = AppState::new(store, session, theme, Box::new(settings));

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Print any errors
    if let Err(err) = result {
        eprintln!("Error: {}", err);
    }

    Ok(())
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut AppState) -> Result<()> {
    let tick_rate = Duration::from_millis(TICK_MS);

    loop {
        // Render. Buckets and statistics are recomputed against the clock on
        // every pass, so crossing midnight reclassifies on the next draw.
        terminal.draw(|f| ui::render(f, app))?;

        // Handle events with a timeout so the view keeps refreshing
        if event::poll(tick_rate)? {
            if let Event::Key(key) = event::read()? {
                // Only process key press events (ignore key release)
                if key.kind == KeyEventKind::Press {
                    let should_quit = input::handle_key(app, key)?;
                    if should_quit {
                        return Ok(());
                    }
                }
            }
        }
    }
}
