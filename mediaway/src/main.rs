use clap::{Parser, Subcommand};
use mediaway_core::cli;
use mediaway_core::library::Collection;
use mediaway_core::logging::init_logging;
use std::path::PathBuf;
use uuid::Uuid;

const DEFAULT_CONFIG_DIR: &str = "config";

#[derive(Parser, Debug)]
#[command(
    name = "mediaway",
    version,
    about = "mediaway: Pingora-based range-aware media file server"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the media server (default)
    Run {
        /// Path to the config directory
        #[arg(long, default_value = DEFAULT_CONFIG_DIR)]
        config: PathBuf,
    },

    /// Validate configuration and exit
    Check {
        /// Path to the config directory
        #[arg(default_value = DEFAULT_CONFIG_DIR)]
        path: PathBuf,

        /// Print errors without diagnostics formatting
        #[arg(short, long, default_value = "false")]
        plain: bool,
    },

    /// Print the stream URL for a file of a library entry
    Url {
        /// Path to the config directory
        #[arg(long, default_value = DEFAULT_CONFIG_DIR)]
        config: PathBuf,

        /// `movies` or `tvshows`
        #[arg(long, default_value = "movies")]
        collection: Collection,

        /// Entity id
        #[arg(long)]
        id: Uuid,

        /// File path below the entity root, e.g. "extras/trailer.mp4"
        relative: String,

        /// Base URL; defaults to the listen address
        #[arg(long)]
        base: Option<String>,
    },

    /// Ask a running server to reload its library (SIGHUP)
    Reload {
        #[arg(long, default_value = "mediaway.pid")]
        pid_file: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Some(Command::Check { path, plain }) => cli::check::check(&path, plain),

        Some(Command::Url {
            config,
            collection,
            id,
            relative,
            base,
        }) => cli::url::url(&config, collection, id, &relative, base.as_deref()),

        Some(Command::Reload { pid_file }) => cli::reload::run(pid_file),

        Some(Command::Run { config }) => {
            init_logging();
            cli::run::run(config)
        }

        None => {
            init_logging();
            cli::run::run(PathBuf::from(DEFAULT_CONFIG_DIR))
        }
    };

    if let Err(e) = result {
        eprintln!("mediaway error: {e:#}");
        std::process::exit(1);
    }
}
