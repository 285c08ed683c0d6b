mod app;
mod config;
mod event;
mod paths;
mod render;
mod source;
mod terminal;

use std::env;
use std::fs::{self, File};
use std::process::ExitCode;

use log::{error, info};
use simplelog::{Config, LevelFilter, WriteLogger};
use thiserror::Error;

use crate::app::App;
use crate::config::{AppConfig, LogConfig};
use crate::source::Listing;
use crate::terminal::Terminal;

/// Command line error type.
#[derive(Debug, PartialEq, Eq, Error)]
enum ArgsError {
    #[error("--cmd requires a command name")]
    MissingCommandName,
}

fn init_logging(config: &LogConfig) {
    paths::rotate_logs(config.keep);
    let Some(path) = paths::log_file() else { return };
    if let Some(parent) = path.parent() {
        let _ = fs::create_dir_all(parent);
    }
    if let Ok(file) = File::create(&path) {
        let _ = WriteLogger::init(LevelFilter::Debug, Config::default(), file);
    }
}

/// Split `--cmd NAME` pairs from the item arguments.
fn parse_args(mut args: impl Iterator<Item = String>) -> Result<(Vec<String>, Vec<String>), ArgsError> {
    let mut commands = Vec::new();
    let mut items = Vec::new();
    while let Some(arg) = args.next() {
        if arg == "--cmd" {
            commands.push(args.next().ok_or(ArgsError::MissingCommandName)?);
        } else {
            items.push(arg);
        }
    }
    Ok((commands, items))
}

fn main() -> ExitCode {
    let (config, config_source) = AppConfig::load();
    init_logging(&config.log);
    config_source.log();

    let (commands, args) = match parse_args(env::args().skip(1)) {
        Ok(parsed) => parsed,
        Err(e) => {
            error!("{}", e);
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };
    let selectable = config.marks.selectable.clone();

    let (title, entries) = if args.is_empty() {
        let cwd = env::current_dir().unwrap_or_default();
        match source::from_dir(&cwd, &selectable) {
            Ok(entries) => (cwd.display().to_string(), entries),
            Err(e) => {
                eprintln!("Error: cannot read {}: {}", cwd.display(), e);
                return ExitCode::FAILURE;
            }
        }
    } else {
        ("arguments".to_string(), source::from_args(args, &selectable))
    };

    let listing = Listing::new(entries, &selectable);
    info!("{} entries, {} selectable", listing.entries().len(), listing.item_count());

    let mut app = match App::new(title, listing, &config) {
        Ok(app) => app,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    for name in &commands {
        match app.call(name) {
            Ok(output) => {
                if let Some(text) = app.describe(&output) {
                    info!("{name}: {text}");
                    println!("{text}");
                }
            }
            Err(e) => {
                eprintln!("Error: {}", e);
                return ExitCode::FAILURE;
            }
        }
    }

    let result = Terminal::new().and_then(|mut terminal| app.run_loop(&mut terminal));
    if let Err(e) = result {
        error!("terminal error: {}", e);
        eprintln!("Error: {}", e);
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_args() {
        let args = ["a", "--cmd", "selectAll", "b", "--cmd", "getCount"].map(String::from);
        let (commands, items) = parse_args(args.into_iter()).unwrap();
        assert_eq!(commands, vec!["selectAll", "getCount"]);
        assert_eq!(items, vec!["a", "b"]);
    }

    #[test]
    fn test_trailing_cmd_without_name_is_rejected() {
        let args = ["a", "--cmd", "selectAll", "b", "--cmd"].map(String::from);
        assert_eq!(parse_args(args.into_iter()), Err(ArgsError::MissingCommandName));
    }
}
