//! ledgekit demo runner.
//!
//! Loads a level and drives its controlled actor with a seeded autopilot.
//! Each tick runs the schedule, then the signals are drained into the
//! [`ModeController`], which decides on reloads, level changes and game
//! over.
//!
//! # Running
//!
//! ```sh
//! cargo run --release -- --level assets/levels/level01.json --ticks 1200 --seed 7
//! ```

use clap::Parser;
use fastrand::Rng;
use log::{error, info, warn};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use ledgekit::components::inputcontrolled::MoveIntent;
use ledgekit::game::{
    ModeAction, ModeController, actor_position, build_tick_schedule, build_world, load_level,
    set_intent, spawn_level, tick,
};
use ledgekit::resources::gameconfig::PhysicsConfig;
use ledgekit::resources::level::LevelData;
use ledgekit::resources::signalbridge::SignalBridge;

const PLAYER_ID: u32 = 0;
/// Ticks between autopilot decisions.
const AUTOPILOT_PERIOD: u64 = 20;

/// Headless platformer physics demo.
#[derive(Parser)]
#[command(version, about = "Runs a ledgekit level with a random autopilot.")]
struct Cli {
    /// Level JSON file. Other levels are looked up next to it as `levelNN.json`.
    #[arg(long, value_name = "PATH", default_value = "assets/levels/level01.json")]
    level: PathBuf,

    /// Physics configuration INI file.
    #[arg(long, value_name = "PATH", default_value = "./config.ini")]
    config: PathBuf,

    /// Number of ticks to simulate.
    #[arg(long, default_value_t = 600)]
    ticks: u64,

    /// Autopilot seed.
    #[arg(long, default_value_t = 1)]
    seed: u64,

    /// Sleep between ticks to run at the configured frame rate.
    #[arg(long)]
    realtime: bool,
}

fn level_path(dir: &Path, id: u32) -> PathBuf {
    dir.join(format!("level{:02}.json", id))
}

fn autopilot(rng: &mut Rng) -> MoveIntent {
    let dir = rng.u8(0..10);
    MoveIntent {
        left: dir < 2,
        right: dir >= 4,
        jump: rng.u8(0..4) == 0,
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = PhysicsConfig::with_path(&cli.config);
    if let Err(e) = config.load_from_file() {
        warn!("{}; using default physics settings", e);
    }

    let level = match LevelData::load_from_file(&cli.level) {
        Ok(level) => level,
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    };
    let level_dir = cli
        .level
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_default();

    let frame_time = Duration::from_secs_f64(1.0 / f64::from(config.target_fps.max(1)));
    let mut world = build_world(config.clone());
    spawn_level(&mut world, &level, &config);
    let mut schedule = build_tick_schedule();
    let mut mode = ModeController::new(level.id);
    let mut rng = Rng::with_seed(cli.seed);

    info!(
        "Running level {} for {} ticks (seed {})",
        level.id, cli.ticks, cli.seed
    );

    for frame in 0..cli.ticks {
        let started = Instant::now();

        if frame % AUTOPILOT_PERIOD == 0 {
            set_intent(&mut world, PLAYER_ID, autopilot(&mut rng));
        }
        tick(&mut world, &mut schedule);

        let signals = world.resource::<SignalBridge>().drain();
        match mode.process(&signals) {
            Some(ModeAction::Reload(id)) | Some(ModeAction::Load(id)) => {
                let path = level_path(&level_dir, id);
                match LevelData::load_from_file(&path) {
                    Ok(next) => load_level(&mut world, &next),
                    Err(e) => {
                        info!("{}; no more levels, stopping", e);
                        break;
                    }
                }
            }
            Some(ModeAction::GameOver) => break,
            None => {}
        }

        if cli.realtime {
            let elapsed = started.elapsed();
            if elapsed < frame_time {
                std::thread::sleep(frame_time - elapsed);
            }
        }
    }

    info!(
        "Finished on level {} with {} lives, {} switches off, {} doors opened, player at {:?}",
        mode.level,
        mode.lives,
        mode.switches_off,
        mode.doors_opened,
        actor_position(&mut world, PLAYER_ID)
    );
}
