//! MegaMario headless runner.
//!
//! Loads the INI configuration, opens the menu (or a level given with
//! `--level`), feeds held actions and steps the simulation for a fixed number
//! of frames. Audio commands are drained by a background sink thread that
//! only logs them.
//!
//! # Running
//!
//! ```sh
//! RUST_LOG=debug cargo run --release -- --level assets/level1.txt --hold RIGHT --frames 120 --dump
//! ```

use std::path::PathBuf;
use std::thread;

use clap::Parser;
use crossbeam_channel::Receiver;
use log::{debug, error, info, warn};

use megamario::events::action::ActionKind;
use megamario::events::audio::AudioCmd;
use megamario::game::GameEngine;
use megamario::resources::audio::AudioBridge;
use megamario::resources::gameconfig::{DEFAULT_CONFIG_PATH, GameConfig};

/// MegaMario 2D platformer simulation
#[derive(Parser)]
#[command(version, about = "Steps the MegaMario simulation without a window.")]
struct Cli {
    /// Path to the INI configuration file.
    #[arg(long, value_name = "PATH", default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Start this level directly instead of the menu.
    #[arg(long, value_name = "PATH")]
    level: Option<PathBuf>,

    /// Number of frames to simulate.
    #[arg(long, default_value_t = 600)]
    frames: u64,

    /// Action held from the first frame on (e.g. RIGHT, JUMP). Repeatable.
    #[arg(long, value_name = "ACTION")]
    hold: Vec<String>,

    /// Print the entity tables as JSON when done.
    #[arg(long)]
    dump: bool,
}

fn audio_sink(rx: Receiver<AudioCmd>) {
    for cmd in rx.iter() {
        match cmd {
            AudioCmd::Shutdown => break,
            AudioCmd::LoadFx { id, path } => debug!("audio: load {id} from {}", path.display()),
            AudioCmd::PlayFx { id, volume } => debug!("audio: play {id} at {volume:.2}"),
        }
    }
    debug!("audio sink stopped");
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = GameConfig::with_path(&cli.config);
    if let Err(e) = config.load_from_file() {
        warn!("{e}; using default configuration");
    }
    info!(
        "{}: {}x{} at {} fps",
        config.title, config.window_width, config.window_height, config.framerate
    );

    let (audio, rx_cmd) = AudioBridge::new();
    let sink = thread::spawn(move || audio_sink(rx_cmd));

    let mut engine = GameEngine::new(config, audio);
    if let Some(level) = &cli.level {
        if let Err(e) = engine.start_level(level) {
            error!("Could not start level {}: {e}", level.display());
            std::process::exit(1);
        }
    }
    for name in &cli.hold {
        engine.do_action(&name.to_uppercase(), ActionKind::Start);
    }

    let mut frames_run = 0;
    while frames_run < cli.frames && engine.is_running() {
        if let Err(e) = engine.update() {
            error!("Frame {frames_run} failed: {e}");
            std::process::exit(1);
        }
        frames_run += 1;
    }
    info!(
        "Ran {frames_run} frames, ending in the {} scene",
        engine.current_kind()
    );

    if cli.dump {
        match engine.play_scene() {
            Some(play) => match serde_json::to_string_pretty(&play.tag_tables()) {
                Ok(json) => println!("{json}"),
                Err(e) => error!("Could not serialize entity tables: {e}"),
            },
            None => warn!("--dump needs a running level"),
        }
    }

    engine.quit();
    if sink.join().is_err() {
        error!("audio sink thread panicked");
    }
}
