//! Telemetry initialization (tracing/tracing-subscriber).
//!
//! Behavior:
//! - LOG_LEVEL controls the filter (e.g. "debug" or detailed directives like
//!   "info,challenge_forge=debug,synth=debug,tower_http=info").
//! - LOG_FORMAT selects "pretty" (default) or "json" structured logs.
//!
//! Targets: `forge` for catalogue/orchestration events, `synth` for the engine.

use tracing_subscriber::EnvFilter;

/// Filter used when LOG_LEVEL is unset or unparsable. `challenge_forge` covers
/// spans from the crate's own modules; `forge`/`synth` are explicit event targets.
const DEFAULT_FILTER: &str = "info,challenge_forge=debug,forge=debug,synth=info,tower_http=info,axum=info";

pub fn init_tracing() {
    let filter = EnvFilter::try_from_env("LOG_LEVEL").unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(true)
        .with_line_number(true);

    match std::env::var("LOG_FORMAT").as_deref() {
        Ok("json") => {
            builder.json().init();
        }
        _ => {
            builder.init();
        }
    }
}
