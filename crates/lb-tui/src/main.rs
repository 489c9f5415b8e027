mod app;
mod board;
mod command;
mod ui;
mod widgets;

use std::io::{self, BufRead, Write as _};
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::{
    event::{self as ct_event, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use lb_core::config::Config;
use lb_core::store::LeadStore;

use crate::app::App;

struct Args {
    headless: bool,
    config: Option<PathBuf>,
    seed: Option<PathBuf>,
}

fn parse_args() -> Args {
    // Simple flag scan, no clap dependency.
    let args: Vec<String> = std::env::args().collect();
    let value_of = |flag: &str| {
        args.iter()
            .position(|a| a == flag)
            .and_then(|i| args.get(i + 1))
            .map(PathBuf::from)
    };
    Args {
        headless: args.iter().any(|a| a == "--headless"),
        config: value_of("--config"),
        seed: value_of("--seed"),
    }
}

fn main() -> Result<()> {
    let args = parse_args();

    let config = match &args.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("loading config")?;

    if args.headless {
        // stdout carries the JSON stream; logs go to stderr.
        if config.general.log_json {
            lb_telemetry::logging::init_logging_json("leadboard", &config.general.log_level);
        } else {
            lb_telemetry::logging::init_logging("leadboard", &config.general.log_level);
        }
    } else {
        lb_telemetry::logging::init_file_logging(
            "leadboard",
            &config.general.log_level,
            &config.log_path(),
            config.general.log_json,
        )
        .context("opening log file")?;
    }

    let store = load_store(&args, &config)?;
    tracing::info!(leads = store.len(), "lead store ready");
    let app = App::new(store, config.board.clone());

    if args.headless {
        return run_headless(app);
    }

    // Set up panic hook to restore terminal on panic.
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal();
        original_hook(panic_info);
    }));

    let result = run(app);

    restore_terminal()?;
    result
}

fn load_store(args: &Args, config: &Config) -> Result<LeadStore> {
    let seed = args
        .seed
        .clone()
        .or_else(|| config.data.seed_file.as_ref().map(PathBuf::from));
    match seed {
        Some(path) => LeadStore::load_json(&path)
            .with_context(|| format!("loading leads from {}", path.display())),
        None => Ok(LeadStore::seeded()),
    }
}

/// Run the interactive TUI with the standard crossterm backend.
fn run(mut app: App) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    loop {
        terminal.draw(|frame| {
            ui::render(frame, &app);
        })?;

        if ct_event::poll(Duration::from_millis(250))? {
            if let Event::Key(key) = ct_event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.on_key(key);
                }
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Headless mode: reads commands from stdin, writes JSON to stdout.
/// No terminal rendering.
///
/// Usage: `echo '{"cmd":"query_stats"}' | leadboard --headless`
fn run_headless(mut app: App) -> Result<()> {
    emit_event(&serde_json::json!({
        "event": "started",
        "leads": app.store.len(),
    }));

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        // Try JSON command first, then text command
        let cmd = command::parse_json_command(line).or_else(|| command::parse_command(line));

        match cmd {
            Some(cmd) => {
                let modal_was_open = app.show_add_modal;
                let result = command::execute_command(&mut app, cmd);

                if app.show_add_modal != modal_was_open {
                    emit_event(&serde_json::json!({
                        "event": "modal_changed",
                        "add_modal_open": app.show_add_modal,
                    }));
                }

                match result {
                    Some(json_str) => {
                        println!("{json_str}");
                        io::stdout().flush()?;
                    }
                    None => emit_event(&serde_json::json!({"event": "ok"})),
                }
            }
            None => {
                tracing::debug!(input = line, "unknown command");
                emit_event(&serde_json::json!({
                    "event": "error",
                    "message": format!("unknown command: {line}"),
                }));
            }
        }

        if app.should_quit {
            emit_event(&serde_json::json!({"event": "quit"}));
            break;
        }
    }

    Ok(())
}

fn emit_event(value: &serde_json::Value) {
    println!("{value}");
    let _ = io::stdout().flush();
}

fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, LeaveAlternateScreen)?;
    Ok(())
}
