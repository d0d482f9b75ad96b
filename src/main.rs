//! Love Blitz headless demo
//!
//! Drives a short scripted session against the simulation core and prints
//! the final snapshot as JSON. Useful for eyeballing balance changes without
//! a renderer attached.

use glam::Vec2;
use love_blitz::consts::TICKS_PER_SECOND;
use love_blitz::{Difficulty, GameSession};

fn main() {
    env_logger::init();

    let difficulty = std::env::args()
        .nth(1)
        .and_then(|arg| Difficulty::from_str(&arg))
        .unwrap_or_default();

    let mut session = GameSession::new(difficulty, 0xC0FFEE);
    session.set_viewport(1280.0, 720.0);
    log::info!("demo session on {}", difficulty.as_str());

    session.start_game();

    // Ten simulated seconds: fire at the nearest target a few times a second,
    // tick the clock once per simulated second.
    for _second in 0..10 {
        for frame in 0..TICKS_PER_SECOND {
            if frame % 15 == 0 {
                // Lead the first target slightly so slow hearts connect
                let aim = session
                    .state()
                    .targets
                    .first()
                    .map(|t| t.pos + Vec2::new(t.vx * 20.0, 0.0));
                if let Some(aim) = aim {
                    session.move_cow(aim.y);
                    session.fire(aim);
                }
            }
            session.frame();
        }
        session.clock_tick();
    }

    session.end_game();

    let state = session.state();
    log::info!(
        "final: score={} combo={} love={:.0}%",
        state.score,
        state.combo,
        state.love_percentage()
    );
    match serde_json::to_string_pretty(state) {
        Ok(json) => println!("{json}"),
        Err(err) => eprintln!("failed to serialize snapshot: {err}"),
    }
}
