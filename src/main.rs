use std::fs::File;
use std::path::Path;
use std::process::ExitCode;

use clap::Parser;
use log::{error, info, warn};
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};

use todoer::core::config::{self, ResolvedConfig};
use todoer::core::state::App;
use todoer::core::store::{self, DB_NAME, Store};
use todoer::tui;

#[derive(Parser)]
#[command(name = "todoer", version, about = "Terminal todo list backed by a local database")]
struct Args {}

fn main() -> ExitCode {
    let _args = Args::parse();

    let dir = match store::data_dir() {
        Ok(dir) => dir,
        Err(e) => return fatal(&e),
    };

    let (config, config_error) = match config::config_path().map(|p| config::load_config(&p)) {
        Some(Ok(config)) => (config::resolve(&config), None),
        Some(Err(e)) => (ResolvedConfig::default(), Some(e)),
        None => (ResolvedConfig::default(), None),
    };

    init_logging(&dir, config.log_level);
    info!("Todoer starting up in {}", dir.display());
    if let Some(e) = config_error {
        warn!("Ignoring config file: {}", e);
    }

    let store = match Store::open(&dir.join(DB_NAME)) {
        Ok(store) => store,
        Err(e) => return fatal(&e),
    };

    match tui::run(App::new(store), &config) {
        Ok(()) => {
            info!("Todoer exiting");
            ExitCode::SUCCESS
        }
        Err(e) => fatal(&e),
    }
}

/// Initialize the file logger at `<dir>/todoer.log`. The terminal belongs
/// to the UI, so nothing is logged to stdout/stderr while it runs.
fn init_logging(dir: &Path, level: LevelFilter) {
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();

    if let Ok(log_file) = File::create(dir.join("todoer.log")) {
        let _ = WriteLogger::init(level, log_config, log_file);
    }
}

/// Unrecoverable startup or terminal error: log it, tell the user, exit non-zero.
fn fatal(e: &dyn std::error::Error) -> ExitCode {
    error!("{}", e);
    eprintln!("todoer: {e}");
    ExitCode::FAILURE
}
