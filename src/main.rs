//! Brickout headless runner
//!
//! Plays the simulation with the autopilot and prints a JSON summary:
//!
//! ```text
//! brickout [seed] [ticks] [config.json]
//! ```

use serde::Serialize;

use brickout::GameConfig;
use brickout::consts::TICK_MS;
use brickout::session::{Session, autopilot_target};
use brickout::sim::GameStatus;

/// Reference field size (portrait phone)
const FIELD_WIDTH: f32 = 1080.0;
const FIELD_HEIGHT: f32 = 1920.0;

const DEFAULT_SEED: u64 = 0x5EED;
const DEFAULT_TICKS: u64 = 60 * 60 * 5;

#[derive(Debug, Serialize)]
struct RunSummary {
    seed: u64,
    ticks: u64,
    simulated_ms: u64,
    status: GameStatus,
    level: u32,
    score: u32,
    lives: u32,
    bricks_left: usize,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    #[cfg(not(target_arch = "wasm32"))]
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let seed = match args.next() {
        Some(arg) => arg.parse()?,
        None => DEFAULT_SEED,
    };
    let ticks = match args.next() {
        Some(arg) => arg.parse()?,
        None => DEFAULT_TICKS,
    };
    let config = match args.next() {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig::default(),
    };

    log::info!("Brickout (headless) starting, seed {seed}, {ticks} ticks");

    let mut session = Session::new(config, seed);
    session.resize(FIELD_WIDTH, FIELD_HEIGHT);

    let mut ran = 0;
    while ran < ticks {
        match session.state().status {
            GameStatus::GameOver | GameStatus::GameWon => break,
            GameStatus::Ready | GameStatus::LevelComplete => {
                session.tap();
            }
            GameStatus::Running | GameStatus::Paused => {}
        }
        if let Some(target) = autopilot_target(session.state()) {
            session.steer(target);
        }
        session.tick();
        ran += 1;
    }

    let state = session.state();
    let summary = RunSummary {
        seed,
        ticks: ran,
        simulated_ms: ran * TICK_MS,
        status: state.status,
        level: state.level,
        score: state.score,
        lives: state.lives,
        bricks_left: state.visible_bricks().count(),
    };
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}
