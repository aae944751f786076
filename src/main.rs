use clap::Parser;
use log::{info, warn};
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use wkv::core::config::{self, CliOverrides, ResolvedConfig};
use wkv::core::parser;
use wkv::core::source::{self, Source};
use wkv::core::state::{Scope, ViewState};

#[derive(Parser)]
#[command(name = "wkv", about = "Fuzzy-filterable viewer for WezTerm key bindings")]
struct Args {
    /// Read a saved `wezterm show-keys` dump instead of running wezterm (`-` for stdin)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Start scoped to this key table
    #[arg(short, long)]
    scope: Option<String>,

    /// Start with this search query applied
    #[arg(short, long)]
    query: Option<String>,

    /// Log level (error, warn, info, debug, trace, off)
    #[arg(long)]
    log_level: Option<String>,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let (file_config, config_error) = match config::load_config() {
        Ok(config) => (config, None),
        Err(e) => (Default::default(), Some(e)),
    };
    let resolved = config::resolve(
        &file_config,
        &CliOverrides {
            log_level: args.log_level.as_deref(),
            scope: args.scope.as_deref(),
        },
    );

    init_logging(resolved.log_file.as_deref(), resolved.log_level);
    info!("wkv starting up");
    if let Some(e) = config_error {
        warn!("Ignoring config file: {}", e);
    }

    let source = match &args.input {
        Some(path) => Source::from_input_arg(path),
        None => Source::Command {
            program: resolved.command.clone(),
            args: resolved.args.clone(),
        },
    };

    let text = match source::read(&source) {
        Ok(text) => text,
        Err(e) => {
            eprintln!("error: failed to read key bindings from {source}: {e}");
            return ExitCode::FAILURE;
        }
    };

    let state = initial_state(&text, &resolved, args.query);

    match wkv::tui::run(state) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: terminal: {e}");
            ExitCode::FAILURE
        }
    }
}

fn initial_state(text: &str, resolved: &ResolvedConfig, query: Option<String>) -> ViewState {
    let result = parser::parse(text);
    info!(
        "Parsed {} bindings across {} tables",
        result.bindings.len(),
        result.tables.len()
    );

    let scope = resolved.initial_scope.as_deref().and_then(|name| {
        let index = result.table_index(name);
        if index.is_none() {
            warn!("Unknown key table {name:?}, showing all");
        }
        index
    });

    let mut state = ViewState::new(result);
    if let Some(index) = scope {
        state.set_scope(Scope::Table(index));
    }
    if let Some(query) = query {
        state.set_query(query);
    }
    state
}

/// File logger; stdout belongs to the TUI. Failure to open the file just
/// means no logs.
fn init_logging(path: Option<&Path>, level: LevelFilter) {
    let Some(path) = path else {
        return;
    };
    if let Some(parent) = path.parent() {
        let _ = fs::create_dir_all(parent);
    }

    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    if let Ok(log_file) = File::create(path) {
        let _ = WriteLogger::init(level, log_config, log_file);
    }
}
