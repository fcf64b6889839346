// twosum-tty: step-by-step Two Sum visualizer

use std::fs::{self, OpenOptions};
use std::io;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing_subscriber::EnvFilter;

use twosum_tty::input::{self, random, InputData, InputError, PRESETS};
use twosum_tty::listing::Language;
use twosum_tty::prefs::{self, Preferences};
use twosum_tty::steps::{generate_steps, result_from_steps, Step};
use twosum_tty::ui::App;

/// Headless output format
#[derive(Debug, Clone, Copy, ValueEnum)]
enum DumpFormat {
    Text,
    Json,
}

#[derive(Debug, Parser)]
#[command(name = "twosum-tty", version, about = "Step through the Two Sum algorithm")]
struct Cli {
    /// Input array, e.g. "[2,7,11,15]" or "2,7,11,15"
    #[arg(long, allow_hyphen_values = true, requires = "target")]
    nums: Option<String>,

    /// Target sum
    #[arg(long, allow_hyphen_values = true)]
    target: Option<String>,

    /// Use one of the built-in examples (1-4)
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=4), conflicts_with = "nums")]
    preset: Option<u8>,

    /// Generate a random solvable input
    #[arg(long, conflicts_with_all = ["nums", "preset"])]
    random: bool,

    /// Display language of the source pane
    #[arg(long, value_enum)]
    language: Option<Language>,

    /// Print every step instead of starting the TUI
    #[arg(long, value_enum)]
    dump: Option<DumpFormat>,

    /// Preferences file (default: ~/.twosum-tty/prefs.toml)
    #[arg(long)]
    prefs: Option<PathBuf>,
}

impl Cli {
    fn input_data(&self) -> Result<InputData, InputError> {
        if self.random {
            return Ok(random::random_input());
        }
        if let Some(n) = self.preset {
            return Ok(PRESETS[usize::from(n) - 1].input());
        }
        match (&self.nums, &self.target) {
            (Some(nums), Some(target)) => Ok(InputData::new(
                input::parse_array(nums)?,
                input::parse_target(target)?,
            )),
            _ => Ok(InputData::default()),
        }
    }
}

/// Filter from a `RUST_LOG`-style spec, `warn` when absent or malformed
fn log_filter(spec: Option<&str>) -> EnvFilter {
    spec.and_then(|s| EnvFilter::try_new(s).ok())
        .unwrap_or_else(|| EnvFilter::new("warn"))
}

/// Log to a file; the terminal belongs to the TUI
fn init_logging() -> io::Result<()> {
    fs::create_dir_all(prefs::logs_dir())?;

    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(prefs::log_file_path())?;

    tracing_subscriber::fmt()
        .with_env_filter(log_filter(
            std::env::var(EnvFilter::DEFAULT_ENV).ok().as_deref(),
        ))
        .with_writer(log_file)
        .with_ansi(false)
        .init();

    Ok(())
}

fn print_steps_text(steps: &[Step]) {
    for step in steps {
        println!(
            "#{:<3} line {:<2} {} | {}",
            step.index, step.current_line, step.description, step.action_label
        );
        if let Some(calc) = &step.calculation {
            println!("         {}  =>  {}", calc.expression, calc.result);
        }
        if !step.hash_map_state.is_empty() {
            let entries: Vec<String> = step
                .hash_map_state
                .iter()
                .map(|e| format!("{}->{}", e.key, e.value))
                .collect();
            println!("         map {{{}}}", entries.join(", "));
        }
    }
    match result_from_steps(steps) {
        Some((j, i)) => println!("answer: [{}, {}]", j, i),
        None => println!("answer: none"),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if let Err(e) = init_logging() {
        eprintln!("Warning: logging disabled: {}", e);
    }

    let data = match cli.input_data() {
        Ok(data) => data,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = input::validate_input(&data) {
        eprintln!("Error: {}", e);
        eprintln!("Input: {}", input::format_input_line(&data));
        std::process::exit(1);
    }

    if let Some(format) = cli.dump {
        let steps = generate_steps(&data.nums, data.target);
        match format {
            DumpFormat::Text => print_steps_text(&steps),
            DumpFormat::Json => println!("{}", serde_json::to_string_pretty(&steps)?),
        }
        return Ok(());
    }

    let prefs_path = cli.prefs.clone().unwrap_or_else(prefs::prefs_path);
    let mut preferences = Preferences::load_or_default(&prefs_path);
    if let Some(language) = cli.language {
        preferences.language = language;
    }

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create and run app
    let mut app = App::new(data, preferences);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = app.preferences().save(&prefs_path) {
        tracing::warn!(path = %prefs_path.display(), error = %e, "Failed to save preferences");
    }

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing::level_filters::LevelFilter;

    #[test]
    fn test_log_filter_defaults_to_warn() {
        assert_eq!(log_filter(None).max_level_hint(), Some(LevelFilter::WARN));
    }

    #[test]
    fn test_log_filter_honors_explicit_level() {
        assert_eq!(
            log_filter(Some("debug")).max_level_hint(),
            Some(LevelFilter::DEBUG)
        );
        assert_eq!(
            log_filter(Some("twosum_tty=info")).max_level_hint(),
            Some(LevelFilter::INFO)
        );
    }
}
