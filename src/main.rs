// src/main.rs

use clap::{Parser, Subcommand};
use color_eyre::eyre::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind,
    },
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::prelude::*;
use securecheck::config::{Settings, DEFAULT_SCAN_DELAY_MS};
use securecheck::core::knowledge_base::search_glossary;
use securecheck::core::models::SecurityReport;
use securecheck::export::{self, ExportFormat};
use securecheck::{assess_domain, logging, perform_security_assessment};
use std::io::stdout;
use std::path::PathBuf;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::info;

mod app;
mod ui;

use app::App;

/// Educational website security reports, fully simulated from the domain name.
#[derive(Parser)]
#[command(name = "securecheck", version, about)]
struct Cli {
    /// Cosmetic delay before the interactive scan shows its result.
    #[arg(long, env = "SECURECHECK_SCAN_DELAY_MS", default_value_t = DEFAULT_SCAN_DELAY_MS)]
    scan_delay_ms: u64,
    /// Directory exported reports are written to.
    #[arg(long, env = "SECURECHECK_EXPORT_DIR")]
    export_dir: Option<PathBuf>,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Assess a domain and print the report.
    Scan {
        domain: String,
        #[arg(long, value_enum, default_value_t = ExportFormat::Text)]
        format: ExportFormat,
    },
    /// Assess a domain and write the report to a file.
    Export {
        domain: String,
        #[arg(long, value_enum, default_value_t = ExportFormat::Text)]
        format: ExportFormat,
        /// Overrides the export directory for this run.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// List glossary terms, optionally filtered.
    Glossary {
        query: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    if let Err(e) = logging::initialize_logging() {
        eprintln!("warning: file logging disabled: {e}");
    }

    let settings = Settings::new(cli.scan_delay_ms, cli.export_dir);

    match cli.command {
        None => run_tui(settings).await,
        Some(Commands::Scan { domain, format }) => {
            let report = assess_domain(&domain)?;
            println!("{}", export::render(&report, format)?);
            Ok(())
        }
        Some(Commands::Export { domain, format, output }) => {
            let report = assess_domain(&domain)?;
            let dir = output.unwrap_or(settings.export_dir);
            let path = export::write_report(&report, &dir, format)?;
            println!("{}", path.display());
            Ok(())
        }
        Some(Commands::Glossary { query }) => {
            for entry in search_glossary(query.as_deref().unwrap_or_default()) {
                println!("{}\n    {}", entry.term, entry.definition);
            }
            Ok(())
        }
    }
}

async fn run_tui(settings: Settings) -> Result<()> {
    // --- Setup ---
    stdout().execute(EnterAlternateScreen)?;
    stdout().execute(EnableMouseCapture)?;
    enable_raw_mode()?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;
    terminal.clear()?;

    info!("Starting interactive session.");
    let result = event_loop(&mut terminal, settings).await;

    // --- Restore Terminal ---
    stdout().execute(LeaveAlternateScreen)?;
    stdout().execute(DisableMouseCapture)?;
    disable_raw_mode()?;
    result
}

async fn event_loop<B: Backend>(terminal: &mut Terminal<B>, settings: Settings) -> Result<()> {
    let mut app = App::new(settings);
    let (tx, mut rx) = mpsc::channel(1);

    while !app.should_quit {
        terminal.draw(|frame| ui::render(&mut app, frame))?;

        if event::poll(Duration::from_millis(100))? {
            handle_events(&mut app, &tx)?;
        }

        if let Ok(report) = rx.try_recv() {
            app.finish_scan(report);
        }
        app.on_tick();
    }
    Ok(())
}

fn handle_events(app: &mut App, tx: &mpsc::Sender<SecurityReport>) -> Result<()> {
    if let Event::Key(key) = event::read()? {
        if key.kind != KeyEventKind::Press {
            return Ok(());
        }
        let Some(domain) = app.on_key(key.code) else {
            return Ok(());
        };
        let tx_clone = tx.clone();
        let delay = app.settings.scan_delay;

        // The pause only makes the analysis feel like a scan; the report does not depend on it.
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let report = perform_security_assessment(&domain);
            let _ = tx_clone.send(report).await;
        });
    }
    Ok(())
}
