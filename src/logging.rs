//! Logger installation: `env_logger` on stderr, or a `simplelog` file logger.

use std::error::Error;
use std::fs::File;
use std::path::PathBuf;

use log::LevelFilter;

#[derive(Clone, Debug, clap::Args)]
pub(crate) struct LoggingArgs {
    /// Debug logging (per-frame lighting summaries).
    #[arg(long, short = 'v', global = true)]
    pub(crate) verbose: bool,

    /// Write logs to this file instead of stderr.
    #[arg(long = "log-file", value_name = "FILE", global = true)]
    pub(crate) log_file: Option<PathBuf>,
}

pub(crate) fn install(args: &LoggingArgs) -> Result<(), Box<dyn Error>> {
    let level = if args.verbose { LevelFilter::Debug } else { LevelFilter::Info };
    match &args.log_file {
        Some(path) => {
            let file = File::create(path).map_err(|e| format!("creating {}: {e}", path.display()))?;
            let config = simplelog::ConfigBuilder::new().set_location_level(LevelFilter::Off).build();
            simplelog::WriteLogger::init(level, config, file)?;
        }
        None => {
            // RUST_LOG still wins when set.
            env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level.as_str()))
                .format_timestamp(None)
                .try_init()?;
        }
    }
    Ok(())
}
