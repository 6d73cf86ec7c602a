//! Wiring of config, collaborators and the frame loop for the binary.

use anyhow::{Context, Result};
use log::{info, warn};
use signal_hook::consts::signal::{SIGINT, SIGTERM};
use signal_hook::iterator::Signals;
use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;

use crate::config::Config;
use crate::dispatch::{ActionDispatcher, CommandDispatcher, LogDispatcher};
use crate::gesture::{Debouncer, GestureMapper};
use crate::tracking::{FrameLoop, GestureController, LoopSummary, Recording, StopReason};

/// Registers SIGINT/SIGTERM and returns the flag they set.
///
/// The handler thread lives until process exit; it owns nothing that needs
/// cleanup.
pub fn install_quit_handler() -> Result<Arc<AtomicBool>> {
    let quit = Arc::new(AtomicBool::new(false));
    let mut signals =
        Signals::new([SIGINT, SIGTERM]).context("Failed to register signal handler")?;

    let quit_flag = quit.clone();
    thread::spawn(move || {
        for sig in signals.forever() {
            match sig {
                SIGINT | SIGTERM => {
                    info!(
                        "Received {} - stopping after the current frame",
                        if sig == SIGTERM { "SIGTERM" } else { "SIGINT" }
                    );
                    quit_flag.store(true, Ordering::Release);
                }
                _ => warn!("Received unexpected signal: {}", sig),
            }
        }
    });

    Ok(quit)
}

/// Picks the dispatcher for `config`: the external command if one is
/// configured, otherwise a log line per action on stdout.
pub fn build_dispatcher(config: &Config) -> Result<Box<dyn ActionDispatcher>> {
    let keys = config.key_map()?;
    match CommandDispatcher::new(&config.dispatch.command, keys.clone()) {
        Some(dispatcher) => {
            info!("Dispatching actions via '{}'", config.dispatch.command.join(" "));
            Ok(Box::new(dispatcher))
        }
        None => {
            info!("No dispatch command configured, actions are only printed");
            Ok(Box::new(LogDispatcher::stdout(keys)))
        }
    }
}

/// Plays a recorded session through the full gesture chain.
pub fn run_replay(
    config: &Config,
    path: &Path,
    quit: Arc<AtomicBool>,
) -> Result<(StopReason, LoopSummary)> {
    let recording = Recording::load(path)
        .with_context(|| format!("Failed to load recording {}", path.display()))?;
    info!(
        "Replaying {} frames from {} (profile: {}, cooldown: {:.2}s)",
        recording.len(),
        path.display(),
        config.gesture.profile,
        config.gesture.cooldown_secs
    );

    let (mut source, mut estimator) = recording.into_parts(&config.detection);
    let mut controller = GestureController::new(
        GestureMapper::new(config.gesture.profile),
        Debouncer::new(config.cooldown()),
        build_dispatcher(config)?,
    );

    let frame_loop = FrameLoop::new(config.exit_key(), quit);
    let result = frame_loop
        .run(&mut source, &mut estimator, &mut controller)
        .context("Frame source failed")?;
    Ok(result)
}
