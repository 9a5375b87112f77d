//! Headless autoplay demo
//!
//! Runs one real-time session with a trivial autopilot and prints the final
//! snapshot as JSON plus the leaderboard. Useful for eyeballing balance and
//! exercising the whole engine without a frontend.
//!
//! Usage: space-mission [seed] [tuning.json]

use std::path::Path;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use space_mission::sim::{Phase, Scheduler, Session, ShipKind};
use space_mission::{HighScores, Tuning};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let seed = match args.next() {
        Some(s) => s.parse()?,
        None => SystemTime::now().duration_since(UNIX_EPOCH)?.as_nanos() as u64,
    };
    let tuning = match args.next() {
        Some(path) => Tuning::load_or_default(Path::new(&path)),
        None => Tuning::default(),
    };

    log::info!("starting autoplay run with seed {seed}");
    let mut session = Session::new(seed, tuning);
    session.start_session("Autopilot", Some(ShipKind::Rocket))?;

    let mut scheduler = Scheduler::for_session(&session);
    let started = Instant::now();
    let mut last_fire_tick = 0;

    while session.phase() == Phase::Active && started.elapsed() < Duration::from_secs(60) {
        let ran = scheduler.advance(&mut session, Instant::now());
        if ran > 0 {
            steer(&mut session);
            let ticks = session.state().ticks;
            if ticks >= last_fire_tick + 3 {
                session.fire();
                last_fire_tick = ticks;
            }
        }
        std::thread::sleep(Duration::from_millis(5));
    }

    let mut scores = HighScores::new();
    {
        let state = session.state();
        let name = state
            .profile
            .as_ref()
            .map(|p| p.name.as_str())
            .unwrap_or("?");
        log::info!(
            "run finished: score {}, {} ticks survived",
            state.score,
            state.ticks
        );
        scores.add_score(name, state.score, state.ticks);
    }

    println!("{}", serde_json::to_string_pretty(&session.snapshot())?);
    for (i, entry) in scores.entries.iter().enumerate() {
        println!(
            "#{} {} - {} pts ({} ticks)",
            i + 1,
            entry.name,
            entry.score,
            entry.ticks
        );
    }

    Ok(())
}

/// Chase the deepest enemy's column; drift home when the field is clear
fn steer(session: &mut Session) {
    let target = session
        .state()
        .enemies
        .iter()
        .max_by(|a, b| a.pos.y.total_cmp(&b.pos.y))
        .map(|e| e.pos.x)
        .unwrap_or(50.0);

    let player_x = session.state().player.pos.x;
    let step = session.tuning().move_step;
    if target < player_x - step / 2.0 {
        session.move_left();
    } else if target > player_x + step / 2.0 {
        session.move_right();
    }
}
