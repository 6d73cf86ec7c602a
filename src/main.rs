use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use std::path::PathBuf;

use gesture_deck::app;
use gesture_deck::config::{Config, Profile};

#[derive(Parser, Debug)]
#[command(name = "gesture-deck")]
#[command(version, about = "Hand-gesture slide control for presentation applications")]
struct Cli {
    /// Play back a recorded landmark session (JSON lines)
    #[arg(long, short = 'r', value_name = "FILE")]
    replay: Option<PathBuf>,

    /// Config file to use instead of ~/.config/gesture-deck/config.toml
    #[arg(long, short = 'c', value_name = "FILE")]
    config: Option<PathBuf>,

    /// Gesture profile (basic or extended)
    #[arg(long, short = 'p', value_name = "PROFILE")]
    profile: Option<Profile>,

    /// Seconds that must pass between two emitted actions
    #[arg(long, value_name = "SECS")]
    cooldown: Option<f64>,

    /// Key-injection command, "{key}" is replaced by the key chord (must come last)
    #[arg(long, value_name = "ARG", num_args = 1.., allow_hyphen_values = true)]
    dispatch_command: Option<Vec<String>>,

    /// Write the example config file and exit
    #[arg(long, action = ArgAction::SetTrue, conflicts_with = "replay")]
    init_config: bool,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    if cli.init_config {
        let path = match &cli.config {
            Some(path) => path.clone(),
            None => Config::get_config_path()?,
        };
        Config::create_default_file(&path)?;
        println!("Wrote example config to {}", path.display());
        return Ok(());
    }

    let Some(recording) = cli.replay.as_deref() else {
        println!("gesture-deck: Hand-gesture slide control for presentation applications");
        println!();
        println!("Usage:");
        println!("  gesture-deck --replay session.jsonl   Play a recorded landmark session");
        println!("  gesture-deck --init-config            Write ~/.config/gesture-deck/config.toml");
        println!("  gesture-deck --help                   Show help");
        println!();
        println!("Gestures (mirrored view, right hand):");
        println!("  1 finger   Next slide");
        println!("  2 fingers  Previous slide");
        println!("  extended profile: fist = end show, 3 = start show,");
        println!("                    4 = blank screen, 5 = first slide");
        return Ok(());
    };

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load().context("Failed to load config")?,
    };

    if let Some(profile) = cli.profile {
        config.gesture.profile = profile;
    }
    if let Some(cooldown) = cli.cooldown {
        config.gesture.cooldown_secs = cooldown;
    }
    if let Some(command) = cli.dispatch_command {
        config.dispatch.command = command;
    }
    config.validate_and_clamp();

    let quit = app::install_quit_handler()?;
    let (reason, summary) = app::run_replay(&config, recording, quit)?;

    log::info!("Stopped: {:?}", reason);
    println!(
        "Processed {} frames, emitted {} actions",
        summary.frames, summary.emitted
    );
    if summary.dispatch_failures > 0 {
        log::warn!("{} actions failed to dispatch", summary.dispatch_failures);
    }

    Ok(())
}
