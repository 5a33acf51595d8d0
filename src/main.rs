use std::time::Duration;

use anyhow::Result;
use clap::{Parser, Subcommand};
use portfolio_contact::Submission;
use portfolio_form::SubmitOutcome;
use url::Url;

/// portfolio - personal site server and contact form relay
#[derive(Parser)]
#[command(name = "portfolio")]
#[command(about = "Serves the portfolio site and relays contact form messages", long_about = None)]
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
    /// Send one contact form submission to a running server
    Submit {
        /// Base url of the server
        #[arg(long, default_value = "http://127.0.0.1:5000")]
        url: Url,

        #[arg(long)]
        name: String,

        #[arg(long)]
        email: String,

        #[arg(long)]
        subject: String,

        #[arg(long)]
        message: String,

        /// Give up on the request after this many seconds (0 waits forever)
        #[arg(long, default_value_t = 30)]
        timeout_secs: u64,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration (validated by `serve`, `submit` only needs logging)
    let config = portfolio::config::Config::load(cli.config.clone())?;

    portfolio::observability::init_observability(
        "portfolio",
        env!("CARGO_PKG_VERSION"),
        &config.logging,
    )?;

    match cli.command {
        Commands::Serve { host, port } => portfolio::cli::serve(config, host, port).await,
        Commands::Submit {
            url,
            name,
            email,
            subject,
            message,
            timeout_secs,
        } => {
            let timeout = (timeout_secs > 0).then(|| Duration::from_secs(timeout_secs));
            let fields = Submission {
                name,
                email,
                subject,
                message,
            };

            match portfolio::cli::submit(url, fields, timeout).await? {
                SubmitOutcome::Sent { message } => {
                    println!("{message}");
                    Ok(())
                }
                SubmitOutcome::Rejected { error } => Err(anyhow::anyhow!(error)),
                SubmitOutcome::Ignored => Err(anyhow::anyhow!("submission ignored")),
            }
        }
    }
}
