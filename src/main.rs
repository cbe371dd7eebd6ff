mod config;

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use config::Config;

#[derive(Parser)]
#[command(name = "dewhite", about = "Make near-white PNG backgrounds transparent, in place")]
struct Cli {
    /// Directory containing the PNG files (overrides assets_dir from the config)
    path: Option<PathBuf>,

    /// Config file [default: dewhite.toml if present]
    #[arg(long)]
    config: Option<PathBuf>,
}

impl Cli {
    /// Directory to process: the CLI path wins over the config file.
    fn assets_dir(self, config: Config) -> PathBuf {
        self.path.unwrap_or(config.assets_dir)
    }
}

fn main() -> ExitCode {
    env_logger::init();

    let cli = Cli::parse();

    let config = match Config::resolve(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error loading config: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let assets_dir = cli.assets_dir(config);
    log::info!("Processing {}", assets_dir.display());

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match dewhite_core::process_dir(&assets_dir, &mut out).and_then(|_| out.flush()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("Batch aborted: {}", e);
            ExitCode::FAILURE
        }
    }
}
