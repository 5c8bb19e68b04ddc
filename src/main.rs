use std::fs::File;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use simplelog::{ConfigBuilder, WriteLogger};
use term_todo::core::config::{self, CliOverrides};

#[derive(Parser)]
#[command(name = "term-todo", version, about = "Terminal to-do lists, one per account")]
struct Args {
    /// Directory holding one <account>.db file per account
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Config file to use instead of ~/.term-todo/config.toml
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Where to write the log
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Log level: error, warn, info, debug, trace or off
    #[arg(long)]
    log_level: Option<String>,
}

fn main() -> ExitCode {
    let args = Args::parse();
    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // The terminal is already restored by the time we get here
            eprintln!("term-todo: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> term_todo::Result<()> {
    let config_source = args.config.clone().or_else(config::config_path);
    let file_config = config::load_config(args.config.as_deref())?;
    let cli = CliOverrides {
        data_dir: args.data_dir,
        log_file: args.log_file,
        log_level: args.log_level,
    };
    let resolved = config::resolve(&file_config, &cli);

    // Initialize file logger; the terminal belongs to the UI
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    if let Ok(log_file) = File::create(&resolved.log_file) {
        let _ = WriteLogger::init(resolved.log_level, log_config, log_file);
    }

    match &config_source {
        Some(path) => log::info!("Config: {}", path.display()),
        None => log::info!("No home directory, using default config"),
    }
    log::info!(
        "term-todo starting up (data dir {:?}, page size {})",
        resolved.data_dir,
        resolved.page_size
    );

    let result = term_todo::tui::run(resolved);
    if let Err(e) = &result {
        log::error!("Exiting with error: {e}");
    }
    result
}
