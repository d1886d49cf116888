use std::path::Path;

use clap::Parser;
use color_eyre::eyre::Result;
use tracing_appender::non_blocking::WorkerGuard;

use letopis::action::Action;
use letopis::app::App;
use letopis::config::{Cli, ConfigFile, Settings};
use letopis::domain::EventStore;
use letopis::event::{key_to_action, AppEvent, EventHandler};
use letopis::filter::Query;
use letopis::tui::Tui;
use letopis::{report, widgets};

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // A broken default config file is not fatal; an explicit one is.
    let explicit_config = cli.config.is_some();
    let (file, config_error) = match ConfigFile::load(&cli) {
        Ok(file) => (file, None),
        Err(e) if !explicit_config => (ConfigFile::default(), Some(e)),
        Err(e) => return Err(e.into()),
    };
    let settings = Settings::resolve(cli, file);

    // Set up logging
    let _log_guard = match settings.log_file {
        Some(ref path) => Some(init_logging(path)?),
        None => None,
    };
    if let Some(e) = config_error {
        tracing::warn!("ignoring config file: {}", e);
    }

    let store = EventStore::builtin();
    tracing::info!(events = store.len(), "loaded event store");

    if settings.print {
        return print_report(&settings, store);
    }

    run_tui(settings, store).await
}

fn init_logging(path: &Path) -> Result<WorkerGuard> {
    let file = std::fs::File::create(path)?;
    let (writer, guard) = tracing_appender::non_blocking(file);
    tracing_subscriber::fmt()
        .with_writer(writer)
        .with_ansi(false)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();
    Ok(guard)
}

fn print_report(settings: &Settings, store: EventStore) -> Result<()> {
    let query = Query::new(
        settings.query.clone().unwrap_or_default(),
        settings.year.clone().unwrap_or_default(),
    );
    let events = query.apply(store.events());
    tracing::debug!(matches = events.len(), "headless search");

    if settings.json {
        println!("{}", report::render_json(&events)?);
    } else {
        print!("{}", report::render_plain(&events));
    }
    Ok(())
}

async fn run_tui(settings: Settings, store: EventStore) -> Result<()> {
    let mut app = App::new(store);
    if settings.has_initial_query() {
        app.text_input = settings.query.clone().unwrap_or_default();
        app.year_input = settings.year.clone().unwrap_or_default();
        app.search();
    }

    let mut terminal = letopis::tui::init()?;
    let mut events = EventHandler::new(settings.tick_rate);

    let result = event_loop(&mut terminal, &mut app, &mut events).await;

    // Restore terminal
    letopis::tui::restore()?;

    result
}

async fn event_loop(terminal: &mut Tui, app: &mut App, events: &mut EventHandler) -> Result<()> {
    loop {
        terminal.draw(|frame| widgets::draw(app, frame))?;

        let Some(event) = events.next().await else {
            break;
        };
        let action = match event {
            AppEvent::Key(key) => {
                let input = app.editing().map(|field| app.input(field)).unwrap_or("");
                key_to_action(key, &app.input_mode, &app.overlay, input)
            }
            AppEvent::Tick => Some(Action::Tick),
        };
        if let Some(action) = action {
            app.update(action);
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}
