//! Headless driver: generate a dungeon, replay a scripted key sequence through
//! the per-frame tick and print where the player ended up.
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tilecrawl::input::{ActionMap, InputState, KeyCode, direction_from_input};
use tilecrawl::{Config, Session};
use tracing::info;

/// Simulated frame rate.
const FPS: f32 = 60.0;

/// Keys held for a number of seconds, in order.  An empty slice is a pause.
const SCRIPT: &[(&[KeyCode], f32)] = &[
    (&[KeyCode::ArrowRight], 0.05),
    (&[], 0.1),
    (&[KeyCode::KeyD], 0.6),
    (&[KeyCode::ArrowDown], 0.4),
    (&[KeyCode::KeyW, KeyCode::KeyA], 0.3),
    (&[], 0.2),
    (&[KeyCode::ArrowLeft], 1.0),
];

#[derive(Parser)]
#[command(name = "tilecrawl")]
#[command(about = "Generate a dungeon and walk a scripted route through it", long_about = None)]
struct Cli {
    /// JSON config file; defaults are used when omitted.
    config: Option<PathBuf>,

    /// Seed for the dungeon generator.  Random when omitted.
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::from_file(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => Config::default(),
    };

    let mut session = match cli.seed {
        Some(seed) => Session::with_seed(config, seed),
        None => Session::new(config),
    };
    session.start();
    print_map(&session);

    let bindings = ActionMap::default_movement();
    let mut keys = InputState::new();
    let dt = 1.0 / FPS;

    for (held, seconds) in SCRIPT {
        keys.keys_held.clear();
        for key in held.iter() {
            keys.press(*key);
        }
        let frames = (seconds * FPS).round() as u32;
        for _ in 0..frames {
            session.update(dt, direction_from_input(&keys, &bindings));
        }
    }

    // Let a step still in flight land.
    keys.keys_held.clear();
    while session.player().is_moving() {
        session.update(dt, direction_from_input(&keys, &bindings));
    }

    let player = session.player();
    info!(
        cell = ?player.grid(),
        pixel = ?player.pixel(),
        camera = ?session.camera().offset,
        "script finished"
    );
    print_map(&session);

    session.quit();
    Ok(())
}

fn print_map(session: &Session) {
    let dungeon = session.dungeon();
    let at = session.player().grid();
    let mut map = dungeon.to_ascii();
    if dungeon.in_bounds(at.x, at.y) {
        let i = at.y as usize * (dungeon.width() as usize + 1) + at.x as usize;
        map.replace_range(i..i + 1, "@");
    }
    println!("{map}");
}
