//! Challenge Forge · exercise catalogue -> graded coding challenges
//!
//! - `transform`: read the exercise catalogue, write the challenge catalogue
//! - `serve`: Axum HTTP API over an in-memory catalogue
//!
//! Important env variables:
//!   FORGE_CONFIG_PATH : path to TOML config (paths, seed, templates)
//!   EXERCISES_PATH    : source catalogue (default "assets/exercices.json")
//!   CHALLENGES_PATH   : output catalogue (default "assets/challenges.json")
//!   FORGE_SEED        : fixed RNG seed for reproducible test cases
//!   PORT              : u16 (default 3000)
//!   LOG_LEVEL         : tracing filter, e.g. "debug" or full directives
//!   LOG_FORMAT        : "pretty" (default) or "json"

mod catalogue;
mod classifier;
mod config;
mod difficulty;
mod domain;
mod generator;
mod protocol;
mod routes;
mod state;
mod synth;
mod telemetry;
mod util;

use std::{net::SocketAddr, path::PathBuf, sync::Arc};

use clap::{Parser, Subcommand};
use tokio::net::TcpListener;
use tracing::info;

use crate::config::{load_config, ForgeConfig};
use crate::routes::build_router;
use crate::state::AppState;

/// Turn a catalogue of exercise statements into auto-graded coding challenges.
#[derive(Parser)]
#[command(name = "challenge-forge", version, about, long_about = None)]
struct Cli {
    /// Path to a TOML config file.
    #[arg(long, global = true, env = "FORGE_CONFIG_PATH")]
    config: Option<PathBuf>,

    /// Fixed RNG seed for reproducible test cases.
    #[arg(long, global = true, env = "FORGE_SEED")]
    seed: Option<u64>,

    /// Source exercise catalogue (JSON array).
    #[arg(long, global = true, env = "EXERCISES_PATH")]
    exercises: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the challenge catalogue file (default).
    Transform {
        /// Where to write the challenges (JSON array).
        #[arg(long, short, env = "CHALLENGES_PATH")]
        output: Option<PathBuf>,
    },

    /// Serve the catalogue over HTTP.
    Serve {
        #[arg(long, env = "PORT", default_value_t = 3000)]
        port: u16,
    },
}

impl Cli {
    /// CLI/env values override the TOML file.
    fn resolve_config(&self) -> ForgeConfig {
        let mut cfg = load_config(self.config.clone());
        if let Some(seed) = self.seed {
            cfg.seed = Some(seed);
        }
        if let Some(path) = &self.exercises {
            cfg.exercises_path = path.clone();
        }
        if let Some(Commands::Transform { output: Some(path) }) = &self.command {
            cfg.challenges_path = path.clone();
        }
        cfg
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    telemetry::init_tracing();

    let cli = Cli::parse();
    let cfg = cli.resolve_config();

    match cli.command.unwrap_or(Commands::Transform { output: None }) {
        Commands::Transform { .. } => {
            let count = catalogue::transform(&cfg)?;
            println!("Generated {} challenges.", count);
        }
        Commands::Serve { port } => {
            let state = Arc::new(AppState::new(cfg).await);
            let app = build_router(state);

            let addr = SocketAddr::from(([0, 0, 0, 0], port));
            let listener = TcpListener::bind(addr).await?;
            info!(target: "forge", %addr, "HTTP server listening");
            axum::serve(listener, app)
                .with_graceful_shutdown(async {
                    let _ = tokio::signal::ctrl_c().await;
                    info!(target: "forge", "Shutdown signal received");
                })
                .await?;
        }
    }
    Ok(())
}
