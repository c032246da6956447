//! Fretcycle — CAGED chord practice in the terminal.
//!
//! Resolves settings (defaults < config file < CLI flags), then either
//! exports a chord cycle to WAV or runs the interactive TUI.

use std::io;
use std::path::PathBuf;

use clap::Parser;
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use fretcycle::audio::{export_cycle, StrumSpeed};
use fretcycle::config::{ConfigFile, Settings};
use fretcycle::theory::Note;
use fretcycle::tui::{App, Lang};

#[derive(Debug, Parser)]
#[command(name = "fretcycle", version, about = "CAGED chord practice in the terminal")]
struct Cli {
    /// Starting key (C, C#, Db, ... B)
    #[arg(short, long)]
    key: Option<Note>,

    /// Auto-advance interval in milliseconds (500-4000)
    #[arg(short, long)]
    tempo: Option<u64>,

    /// Display language (en|zh)
    #[arg(short, long)]
    lang: Option<Lang>,

    /// Strum sweep speed (slow|fast)
    #[arg(short, long)]
    strum: Option<StrumSpeed>,

    /// Render the full chord cycle for the key to a WAV file and exit
    #[arg(long, value_name = "FILE")]
    export: Option<PathBuf>,
}

/// Restores the terminal even when the app errors out.
struct RawModeGuard;

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = crossterm::execute!(io::stdout(), LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}

fn main() {
    let cli = Cli::parse();

    let mut settings = Settings::from_config(ConfigFile::load());
    if let Some(key) = cli.key {
        settings.key = key;
    }
    if let Some(tempo) = cli.tempo {
        settings.tempo_ms = tempo.clamp(
            fretcycle::tui::TEMPO_MIN_MS,
            fretcycle::tui::TEMPO_MAX_MS,
        );
    }
    if let Some(lang) = cli.lang {
        settings.lang = lang;
    }
    if let Some(strum) = cli.strum {
        settings.strum = strum;
    }

    if let Some(path) = cli.export {
        if let Err(e) = export_cycle(&path, settings.key, settings.strum, settings.tempo_ms) {
            eprintln!("export failed: {e}");
            std::process::exit(1);
        }
        println!(
            "wrote {} cycle ({} strum, {} ms) to {}",
            settings.key,
            settings.strum,
            settings.tempo_ms,
            path.display()
        );
        return;
    }

    if let Err(e) = run_tui(settings) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn run_tui(settings: Settings) -> io::Result<()> {
    terminal::enable_raw_mode()?;
    crossterm::execute!(io::stdout(), EnterAlternateScreen)?;
    let _guard = RawModeGuard;

    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend).map_err(|e| io::Error::other(e.to_string()))?;
    terminal
        .clear()
        .map_err(|e| io::Error::other(e.to_string()))?;

    let mut app = App::new(
        settings.key,
        settings.tempo_ms,
        settings.strum,
        settings.lang,
    );
    app.run(&mut terminal)
}
