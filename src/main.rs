//! Strafe - headless movement driver
//!
//! Runs a scripted input sequence through the simulation at a render rate
//! faster than the physics tick and logs the debug readout.
//!
//! Usage: `strafe [tuning.toml]`

use std::path::Path;

use anyhow::Context;
use strafe_game::{
    Arena, DebugReadout, FlatGroundBody, InputMapper, PlayerInput, Simulation, SimulationConfig,
};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Rendered frames per second.
const RENDER_RATE: f32 = 144.0;

/// One step of the input script.
struct Phase {
    name: &'static str,
    seconds: f32,
    input: PlayerInput,
}

fn script() -> Vec<Phase> {
    let mut forward = PlayerInput::default();
    forward.movement.forward = true;

    let mut strafe_turn = PlayerInput::default();
    strafe_turn.movement.forward = true;
    strafe_turn.movement.right = true;
    strafe_turn.look_delta = (1.0, 0.0);

    let mut jump = forward.clone();
    jump.jump = true;

    let mut look_up = PlayerInput::default();
    look_up.look_delta = (0.0, 1.0);

    vec![
        Phase {
            name: "walk forward",
            seconds: 1.0,
            input: forward,
        },
        Phase {
            name: "strafe and turn",
            seconds: 1.5,
            input: strafe_turn,
        },
        Phase {
            name: "jump (held)",
            seconds: 1.5,
            input: jump,
        },
        Phase {
            name: "release",
            seconds: 1.0,
            input: PlayerInput::default(),
        },
        Phase {
            name: "look up",
            seconds: 2.0,
            input: look_up,
        },
    ]
}

fn load_config(path: &Path) -> anyhow::Result<SimulationConfig> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading tuning file {}", path.display()))?;
    let config: SimulationConfig =
        toml::from_str(&text).with_context(|| format!("parsing tuning file {}", path.display()))?;
    Ok(config)
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env().add_directive("strafe=debug".parse()?))
        .init();

    let config = match std::env::args_os().nth(1) {
        Some(path) => load_config(Path::new(&path))?,
        None => SimulationConfig::default(),
    };
    tracing::info!(
        tick_rate = config.tick_rate,
        max_speed = config.movement.max_speed,
        "Starting Strafe"
    );

    let body = FlatGroundBody::on_floor().with_arena(Arena::square(20.0));
    let mut sim = Simulation::new(config, body)?;
    let mut mapper = InputMapper::new();
    let frame_time = 1.0 / RENDER_RATE;

    for phase in script() {
        tracing::info!(phase = phase.name, seconds = phase.seconds, "phase");

        let frames = (phase.seconds * RENDER_RATE).round() as u32;
        let mut ticks = 0;
        for _ in 0..frames {
            let input = mapper.map(&phase.input);
            let report = sim.frame(&input, frame_time)?;
            ticks += report.ticks;
        }

        let state = sim.state();
        tracing::info!(
            frames,
            ticks,
            yaw = state.yaw,
            pitch = state.pitch,
            position = ?sim.body().position,
            "end of phase\n{}",
            DebugReadout::from(state)
        );
    }

    tracing::info!(frames = sim.frame, ticks = sim.tick, "done");

    Ok(())
}
