//! Top-level CLI interface for cropcast

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "cropcast",
    version = "0.1.0",
    about = "Crop recommendation inference server"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Serve the HTTP form and prediction endpoint
    Serve {
        /// Host/IP to bind (overrides config)
        #[arg(long)]
        host: Option<String>,
        /// Port to bind (overrides config)
        #[arg(long)]
        port: Option<u16>,
    },

    /// Load and validate the artifact files without starting the server
    Check,
}
