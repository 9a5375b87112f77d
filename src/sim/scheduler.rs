//! Wall-clock tick pacing
//!
//! Fixed-timestep accumulator over the session's tick period. Ticks never
//! overlap: the scheduler is the sole driver of simulation time, a bounded
//! catch-up per advance prevents the spiral of death after a stall, and any
//! accumulated debt is dropped the moment the session leaves Active.

use std::time::{Duration, Instant};

use super::session::Session;
use super::state::Phase;
use crate::consts::MAX_CATCHUP_TICKS;

#[derive(Debug)]
pub struct Scheduler {
    period: Duration,
    accumulator: Duration,
    last: Option<Instant>,
    in_tick: bool,
}

impl Scheduler {
    /// Scheduler paced to the session's configured tick period
    pub fn for_session(session: &Session) -> Self {
        Self::new(Duration::from_millis(session.tuning().tick_ms))
    }

    pub fn new(period: Duration) -> Self {
        Self {
            period,
            accumulator: Duration::ZERO,
            last: None,
            in_tick: false,
        }
    }

    /// Run every tick that has come due by `now`. Returns how many ran.
    ///
    /// The first call only establishes the time baseline. A call arriving
    /// while a previous advance is still ticking (re-entrant host timer) is
    /// rejected outright, keeping ticks serialized.
    pub fn advance(&mut self, session: &mut Session, now: Instant) -> u32 {
        if self.in_tick {
            log::warn!("overlapping scheduler advance suppressed");
            return 0;
        }

        let elapsed = match self.last.replace(now) {
            Some(last) => now.saturating_duration_since(last),
            None => Duration::ZERO,
        };

        if session.phase() != Phase::Active {
            self.accumulator = Duration::ZERO;
            return 0;
        }
        self.accumulator += elapsed;

        self.in_tick = true;
        let mut ran = 0;
        while self.accumulator >= self.period && ran < MAX_CATCHUP_TICKS {
            session.tick();
            self.accumulator -= self.period;
            ran += 1;
            if session.phase() != Phase::Active {
                // Session just ended - drop the remaining debt
                self.accumulator = Duration::ZERO;
                break;
            }
        }
        // After a long stall, forget what we couldn't catch up on
        if ran == MAX_CATCHUP_TICKS {
            self.accumulator = Duration::ZERO;
        }
        self.in_tick = false;

        ran
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::ShipKind;
    use crate::tuning::Tuning;

    fn started_session() -> Session {
        // Quiet playfield so tick counts are the only observable
        let tuning = Tuning {
            spawn_chance: 0.0,
            ..Tuning::default()
        };
        let mut session = Session::new(1, tuning);
        session
            .start_session("Ari", Some(ShipKind::Rocket))
            .unwrap();
        session
    }

    #[test]
    fn test_first_advance_establishes_baseline() {
        let mut session = started_session();
        let mut scheduler = Scheduler::for_session(&session);
        let t0 = Instant::now();
        assert_eq!(scheduler.advance(&mut session, t0), 0);
        assert_eq!(session.state().ticks, 0);
    }

    #[test]
    fn test_elapsed_time_converts_to_ticks() {
        let mut session = started_session();
        let mut scheduler = Scheduler::for_session(&session);
        let t0 = Instant::now();
        scheduler.advance(&mut session, t0);

        // 250ms at a 50ms period is exactly 5 ticks
        let ran = scheduler.advance(&mut session, t0 + Duration::from_millis(250));
        assert_eq!(ran, 5);
        assert_eq!(session.state().ticks, 5);

        // 30ms more leaves the debt below one period
        let ran = scheduler.advance(&mut session, t0 + Duration::from_millis(280));
        assert_eq!(ran, 0);
        // ...and the next 20ms completes the sixth tick
        let ran = scheduler.advance(&mut session, t0 + Duration::from_millis(300));
        assert_eq!(ran, 1);
    }

    #[test]
    fn test_catch_up_is_bounded_after_stall() {
        let mut session = started_session();
        let mut scheduler = Scheduler::for_session(&session);
        let t0 = Instant::now();
        scheduler.advance(&mut session, t0);

        let ran = scheduler.advance(&mut session, t0 + Duration::from_secs(10));
        assert_eq!(ran, MAX_CATCHUP_TICKS);

        // Debt from the stall was dropped, pacing resumes normally
        let ran = scheduler.advance(
            &mut session,
            t0 + Duration::from_secs(10) + Duration::from_millis(50),
        );
        assert_eq!(ran, 1);
    }

    #[test]
    fn test_inactive_session_accumulates_nothing() {
        let mut session = Session::new(1, Tuning::default());
        let mut scheduler = Scheduler::for_session(&session);
        let t0 = Instant::now();
        scheduler.advance(&mut session, t0);
        let ran = scheduler.advance(&mut session, t0 + Duration::from_secs(1));
        assert_eq!(ran, 0);
        assert_eq!(session.state().ticks, 0);
    }
}
