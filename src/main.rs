// In src/main.rs

use surface_bridge::backend::RecordingBackend;
use surface_bridge::config::Config;
use surface_bridge::replay::{self, ReplaySurface, Script};
use surface_bridge::NativeBridge;

// Logging
use anyhow::Context;
use log::{info, warn};

const USAGE: &str = "usage: surface-bridge <script.json> [config.json]";

/// Replays a host session script and prints what the backend saw.
fn main() -> anyhow::Result<()> {
    // Default filter is "info" if RUST_LOG is not set.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_micros()
        .init();

    let mut args = std::env::args().skip(1);
    let script_path = args.next().context(USAGE)?;
    let config = match args.next() {
        Some(path) => Config::load(&path).with_context(|| format!("Failed to load config '{}'", path))?,
        None => {
            info!("No config given, using defaults.");
            Config::default()
        }
    };
    if args.next().is_some() {
        warn!("Ignoring extra arguments. {}", USAGE);
    }

    let text = std::fs::read_to_string(&script_path)
        .with_context(|| format!("Failed to read script '{}'", script_path))?;
    let script = Script::from_json_str(&text)
        .with_context(|| format!("Failed to parse script '{}'", script_path))?;
    info!("Loaded {} host events from '{}'", script.events.len(), script_path);

    let backend = RecordingBackend::<ReplaySurface>::default();
    let transcript = backend.transcript();
    let mut bridge =
        NativeBridge::with_config(backend, config).context("Failed to construct bridge")?;

    let consumed = replay::run(&mut bridge, &script);
    // Releases the handle, so the transcript ends with it.
    drop(bridge);
    info!("Replay finished, {} pointer events consumed.", consumed);

    for call in transcript.calls() {
        println!(
            "{}",
            serde_json::to_string(&call).context("Failed to serialize backend call")?
        );
    }
    Ok(())
}
