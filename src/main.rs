use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{
    fs, io,
    path::PathBuf,
    sync::atomic::{AtomicBool, Ordering},
    time::Duration,
};
use tokio::sync::mpsc;

/// Sathi - terminal gardening companion
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable debug logging to the temp dir
    #[arg(short, long)]
    debug: bool,

    /// Enable vim keybindings (hjkl)
    #[arg(long)]
    vim: bool,

    /// Path to config file (default: platform-specific, see docs)
    #[arg(short, long)]
    config: Option<String>,

    /// Override the theme for this session without persisting (dark|light)
    #[arg(long)]
    theme: Option<String>,

    /// Override the language for this session without persisting (en|hi)
    #[arg(long)]
    lang: Option<String>,
}

// Global flag for debug mode
static DEBUG_MODE: AtomicBool = AtomicBool::new(false);

mod config;
mod handlers;
mod services;
mod ui;
mod utils;

use config::Config;
use sathi::i18n::Language;
use sathi::{data, i18n, logic, model, prefs, Screen, ThemeMode};
use services::fetch::{spawn_fetch_service, FetchRequest, FetchResponse};

pub fn log_debug(msg: &str) {
    // Only log if debug mode is enabled
    if !DEBUG_MODE.load(Ordering::Relaxed) {
        return;
    }

    use std::fs::OpenOptions;
    use std::io::Write;
    if let Ok(mut file) = OpenOptions::new()
        .create(true)
        .append(true)
        .open(utils::get_debug_log_path())
    {
        let _ = writeln!(file, "{}", msg);
    }
}

pub struct App {
    pub model: model::Model,

    /// None when the preference store could not be opened; the app keeps
    /// running with defaults and in-memory preferences
    prefs: Option<prefs::PrefsDb>,

    pub fetch_tx: mpsc::UnboundedSender<FetchRequest>,
    fetch_rx: mpsc::UnboundedReceiver<FetchResponse>,
}

impl App {
    fn new(config: Config, args: &Args) -> Self {
        // Open the preference store; failures fall back to defaults
        let prefs_db = match prefs::PrefsDb::new() {
            Ok(db) => Some(db),
            Err(e) => {
                log_debug(&format!("Failed to open preference store: {}", e));
                None
            }
        };

        let stored_theme = prefs_db
            .as_ref()
            .and_then(|db| read_pref(db, prefs::KEY_THEME));
        let stored_lang = prefs_db
            .as_ref()
            .and_then(|db| read_pref(db, prefs::KEY_LANGUAGE));

        // CLI override wins for this session only; stored value next;
        // built-in default last
        let theme = args
            .theme
            .as_deref()
            .or(stored_theme.as_deref())
            .map(ThemeMode::from_pref)
            .unwrap_or_default();
        let language = args
            .lang
            .as_deref()
            .or(stored_lang.as_deref())
            .map(Language::from_pref)
            .unwrap_or_default();

        let mut model = model::Model::new(theme, language);
        model.ui.vim_mode = config.vim_mode || args.vim;
        model.social.radius_km = config.default_radius_km;
        model.social.refilter();

        let (fetch_tx, fetch_rx) = spawn_fetch_service(
            Duration::from_millis(config.fetch_delay_ms),
            config.simulate_permission_denied,
        );

        App {
            model,
            prefs: prefs_db,
            fetch_tx,
            fetch_rx,
        }
    }

    /// Persist a preference; failures are logged and otherwise ignored
    pub fn write_pref(&self, key: &str, value: &str) {
        if let Some(db) = &self.prefs {
            if let Err(e) = db.set(key, value) {
                log_debug(&format!("Failed to write pref {}={}: {}", key, value, e));
            }
        }
    }
}

fn read_pref(db: &prefs::PrefsDb, key: &str) -> Option<String> {
    match db.get(key) {
        Ok(value) => value,
        Err(e) => {
            log_debug(&format!("Failed to read pref {}: {}", key, e));
            None
        }
    }
}

/// Determine the config file path with fallback logic
///
/// Unlike the preference store, the config file is optional: None means
/// "use defaults".
fn get_config_path(cli_path: Option<String>) -> Result<Option<PathBuf>> {
    if let Some(path) = cli_path {
        let p = PathBuf::from(&path);
        if p.exists() {
            return Ok(Some(p));
        } else {
            anyhow::bail!("Config file not found at specified path: {}", path);
        }
    }

    if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join("sathi").join("config.yaml");
        if config_path.exists() {
            return Ok(Some(config_path));
        }
    }

    let local_config = PathBuf::from("config.yaml");
    if local_config.exists() {
        return Ok(Some(local_config));
    }

    Ok(None)
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    DEBUG_MODE.store(args.debug, Ordering::Relaxed);

    if args.debug {
        log_debug("Debug mode enabled");
    }

    let config = match get_config_path(args.config.clone())? {
        Some(path) => {
            if args.debug {
                log_debug(&format!("Loading config from: {:?}", path));
            }
            let config_str = fs::read_to_string(&path)?;
            serde_yaml::from_str(&config_str)?
        }
        None => Config::default(),
    };

    let mut app = App::new(config, &args);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app with error handler
    let result = run_app(&mut terminal, &mut app).await;

    // Cleanup terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()> {
    loop {
        terminal.draw(|f| {
            ui::render(f, &app.model);
        })?;

        // Auto-dismiss toast after 1.5 seconds
        if let Some((_, timestamp)) = &app.model.ui.toast {
            if logic::ui::should_dismiss_toast(timestamp.elapsed().as_millis()) {
                app.model.ui.toast = None;
            }
        }

        if app.model.ui.should_quit {
            break;
        }

        // Process fetch responses (non-blocking)
        while let Ok(response) = app.fetch_rx.try_recv() {
            handlers::handle_fetch_response(app, response);
        }

        if event::poll(Duration::from_millis(250))? {
            if let Event::Key(key) = event::read()? {
                handlers::handle_key(app, key)?;
            }
        }
    }

    Ok(())
}
