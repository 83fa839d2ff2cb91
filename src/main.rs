//mdspace/src/main.rs
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use std::process::ExitCode;

use mdspace::kernel::{Store, WorkspaceState};
use mdspace::replay::replay;
use mdspace::services::{load_config, WorkspaceConfig};

mod logging;

const USAGE: &str = "usage: mdspace-replay <actions.jsonl> [--config <settings.json>] [--log-dir <dir>]";

struct Args {
    actions: PathBuf,
    config: Option<PathBuf>,
    log_dir: Option<PathBuf>,
}

fn parse_args() -> Option<Args> {
    let mut args = std::env::args().skip(1);
    let mut actions = None;
    let mut config = None;
    let mut log_dir = None;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" => config = Some(PathBuf::from(args.next()?)),
            "--log-dir" => log_dir = Some(PathBuf::from(args.next()?)),
            _ if actions.is_none() => actions = Some(PathBuf::from(arg)),
            _ => return None,
        }
    }

    Some(Args {
        actions: actions?,
        config,
        log_dir,
    })
}

fn main() -> ExitCode {
    let Some(args) = parse_args() else {
        eprintln!("{USAGE}");
        return ExitCode::from(2);
    };

    let config = match args.config.as_deref().map(load_config) {
        Some(Ok(config)) => config,
        Some(Err(err)) => {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
        None => WorkspaceConfig::default(),
    };

    let log_dir = args.log_dir.unwrap_or_else(logging::default_log_dir);
    let _logging = logging::init(&log_dir, &config.log_filter);

    let file = match File::open(&args.actions) {
        Ok(file) => file,
        Err(err) => {
            eprintln!("{}: {err}", args.actions.display());
            return ExitCode::FAILURE;
        }
    };

    let mut store = Store::new(WorkspaceState::new(&config));
    match replay(BufReader::new(file), &mut store) {
        Ok(summary) => {
            tracing::info!(
                actions = summary.actions,
                state_changes = summary.state_changes,
                "replay finished"
            );
            match serde_json::to_string_pretty(&store.state().snapshot()) {
                Ok(json) => {
                    println!("{json}");
                    ExitCode::SUCCESS
                }
                Err(err) => {
                    eprintln!("{err}");
                    ExitCode::FAILURE
                }
            }
        }
        Err(err) => {
            tracing::error!(%err, "replay failed");
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
