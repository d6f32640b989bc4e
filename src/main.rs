// BrackeTTY: step-by-step bracket matching visualizer

use std::fs::OpenOptions;
use std::io;
use std::process::ExitCode;

use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing_subscriber::EnvFilter;

use bracketty::config::{Cli, Config, OutputMode};
use bracketty::error::AppError;
use bracketty::report;
use bracketty::trace::evaluate;
use bracketty::ui::App;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(2)
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode, AppError> {
    let config = Config::from_cli(cli)?;
    init_logging(&config)?;

    match config.mode {
        OutputMode::Plain => {
            let trace = evaluate(&config.input);
            print!("{}", report::render_plain(&trace));
            Ok(verdict(trace.is_valid))
        }
        OutputMode::Json => {
            let trace = evaluate(&config.input);
            println!("{}", report::render_json(&trace)?);
            Ok(verdict(trace.is_valid))
        }
        OutputMode::Tui => {
            run_tui(&config)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn verdict(is_valid: bool) -> ExitCode {
    if is_valid {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    }
}

/// Logs go to `--log-file` when given; otherwise to stderr, except in the TUI
/// where stderr would corrupt the screen.
fn init_logging(config: &Config) -> Result<(), AppError> {
    let filter = || EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    if let Some(path) = &config.log_file {
        let log_file = OpenOptions::new().create(true).append(true).open(path)?;
        tracing_subscriber::fmt()
            .with_env_filter(filter())
            .with_writer(log_file)
            .with_ansi(false)
            .init();
    } else if config.mode != OutputMode::Tui {
        tracing_subscriber::fmt()
            .with_env_filter(filter())
            .with_writer(io::stderr)
            .init();
    }

    Ok(())
}

fn run_tui(config: &Config) -> Result<(), AppError> {
    let mut app = App::new(config);
    app.check();

    enable_raw_mode()?;
    let res = run_on_alternate_screen(&mut app);

    // Raw mode is left even when screen setup failed
    finish_with(res, disable_raw_mode)
}

fn run_on_alternate_screen(app: &mut App) -> io::Result<()> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = match Terminal::new(backend) {
        Ok(terminal) => terminal,
        Err(e) => {
            let _ = execute!(io::stdout(), LeaveAlternateScreen);
            return Err(e);
        }
    };

    let res = app.run(&mut terminal);

    // Restore terminal
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

/// Run `restore` whatever `result` holds; an error in `result` takes priority
fn finish_with<T>(
    result: io::Result<T>,
    restore: impl FnOnce() -> io::Result<()>,
) -> Result<T, AppError> {
    let restored = restore();
    let value = result?;
    restored?;
    Ok(value)
}
