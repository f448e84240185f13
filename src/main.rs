// cropcast - main.rs
// Bootstrap: load config, load artifacts, then serve or check.

use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tracing::info;

use cropcast::app_state::AppState;
use cropcast::artifacts::ArtifactSet;
use cropcast::catalog;
use cropcast::cli::{Cli, Commands};
use cropcast::config::load_config;
use cropcast::pipeline::InferencePipeline;
use cropcast::web::build_router;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let config = load_config().context("failed to load configuration")?;

    match cli.command {
        Commands::Serve { host, port } => {
            // Artifact load failures are fatal: the server cannot predict
            // without all three files.
            let artifacts =
                ArtifactSet::load(&config.artifacts).context("failed to load artifacts")?;
            let pipeline = InferencePipeline::new(artifacts);
            let state = Arc::new(AppState::new(pipeline, config.static_dir.clone()));
            let app = build_router(state);

            let host = host.unwrap_or(config.server.host);
            let port = port.unwrap_or(config.server.port);
            let addr = format!("{host}:{port}");

            let listener = tokio::net::TcpListener::bind(&addr)
                .await
                .with_context(|| format!("failed to bind {addr}"))?;
            info!("serving on http://{addr}");
            axum::serve(listener, app)
                .await
                .context("server exited with error")?;
        }
        Commands::Check => {
            let artifacts =
                ArtifactSet::load(&config.artifacts).context("artifact validation failed")?;
            println!(
                "artifacts ok: model '{}' with {} classes",
                artifacts.classifier.model_id,
                artifacts.classifier.classes.len()
            );
            for label in &artifacts.classifier.classes {
                if catalog::crop_name(*label).is_none() {
                    println!("warning: label {label} has no crop table entry");
                }
            }
        }
    }

    Ok(())
}
