use anyhow::Result;
use clap::{Parser, Subcommand};

/// mygram - user accounts behind cookie sessions
#[derive(Parser)]
#[command(name = "mygram")]
#[command(about = "User registration and session authentication service", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Server host address (overrides config file)
        #[arg(long)]
        host: Option<String>,

        /// Server port (overrides config file)
        #[arg(long)]
        port: Option<u16>,
    },
    /// Run database migrations
    Migrate,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // A missing signing secret stops the process here
    let config = mygram::Config::load(cli.config.clone())?;

    mygram::observability::init_observability(
        "mygram",
        env!("CARGO_PKG_VERSION"),
        &config.observability.log_level,
    )?;

    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    match cli.command {
        Commands::Serve { host, port } => mygram::cli::server::serve(config, host, port).await,
        Commands::Migrate => mygram::cli::migrate::migrate(config).await,
    }
}
