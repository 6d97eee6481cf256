//! BitBetty - Bitcoin price guessing game in the terminal
//!
//! Polls the BTC price, draws it live and lets the player guess whether it
//! goes up or down over the next round.

use std::io;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::{error, info};

use bitbetty_terminal::bin_common::{load_config_from_env, parse_args, CliArgs, USAGE};
use bitbetty_terminal::bitbetty::application::terminal::{ui, App};
use bitbetty_terminal::bitbetty::{init_tracing, GameConfig};

/// How long to wait for input before redrawing
const INPUT_POLL_TIMEOUT: Duration = Duration::from_millis(50);

fn main() -> Result<()> {
    // Load environment variables
    dotenv::dotenv().ok();

    let args = CliArgs::parse(parse_args())?;
    if args.help {
        println!("{}", USAGE);
        return Ok(());
    }

    let config_path = load_config_from_env(args.config_type());
    let config = if args.config.is_some() {
        GameConfig::load(&config_path)?
    } else {
        GameConfig::load_or_default(&config_path)?
    };

    init_tracing(&config.log_level, &config.log_file)?;
    info!("Starting BitBetty (config: {})", config_path.display());

    // Create tokio runtime
    let runtime = tokio::runtime::Runtime::new()?;

    // Starts the price poller right away
    let mut app = App::initialize(runtime.handle().clone(), &config)?;
    if let Some(name) = &args.username {
        app.set_username(name);
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run the main loop
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    app.shutdown();
    drop(app);
    runtime.shutdown_timeout(Duration::from_secs(1));

    if let Err(e) = &result {
        error!("Terminal error: {:#}", e);
        eprintln!("Error: {}", e);
    }
    info!("BitBetty stopped");

    result
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|frame| ui::draw(frame, app))?;

        if event::poll(INPUT_POLL_TIMEOUT)? {
            if let Event::Key(key) = event::read()? {
                // Only handle key press events (not release)
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key.code);
                }
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
