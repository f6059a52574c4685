use glam::Vec2;
use hecs::World;
use rand::Rng;

use crate::components::{Ball, BallSide, Body, Facing, Player};
use crate::config::Config;
use crate::params::Params;
use crate::resources::{DisplayRequest, Events, GameRng, PhysicsRequest, Score, Time};
use crate::scheduler::{EventKind, Scheduler};
use crate::systems::ball::classify_side;
use crate::systems::health;

/// Match lifecycle phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchPhase {
    /// Round clock running, simulation live.
    CountdownActive,
    /// Transient: attributing the point after the clock expired. Never
    /// left standing across a step.
    Scoring,
    /// Simulation paused while the score message is shown.
    RoundFreeze,
    /// "3, 2, 1, Go!" before the next round.
    PreRoundCountdown,
    /// Terminal until an explicit restart.
    GameOver,
}

/// Actions that drive phase transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchAction {
    RoundExpired,
    PointSettled,
    MatchWon,
    FreezeElapsed,
    CountdownDone,
    Restart,
}

/// Get next phase for a given action (if valid)
fn next_phase(phase: MatchPhase, action: MatchAction) -> Option<MatchPhase> {
    match (phase, action) {
        (MatchPhase::CountdownActive, MatchAction::RoundExpired) => Some(MatchPhase::Scoring),
        (MatchPhase::Scoring, MatchAction::PointSettled) => Some(MatchPhase::RoundFreeze),
        (MatchPhase::Scoring, MatchAction::MatchWon) => Some(MatchPhase::GameOver),
        (MatchPhase::RoundFreeze, MatchAction::FreezeElapsed) => Some(MatchPhase::PreRoundCountdown),
        (MatchPhase::PreRoundCountdown, MatchAction::CountdownDone) => {
            Some(MatchPhase::CountdownActive)
        }
        (MatchPhase::GameOver, MatchAction::Restart) => Some(MatchPhase::CountdownActive),

        // Invalid transition
        _ => None,
    }
}

/// Round/match orchestrator. Owns the score and the scheduled round
/// clock; reads ball and player state through the world it is handed.
#[derive(Debug)]
pub struct MatchCtl {
    phase: MatchPhase,
    pub score: Score,
    round_clock: u32,
    physics_paused: bool,
}

impl MatchCtl {
    pub fn new(config: &Config) -> Self {
        Self {
            phase: MatchPhase::CountdownActive,
            score: Score::new(),
            round_clock: config.round_seconds,
            physics_paused: false,
        }
    }

    pub fn phase(&self) -> MatchPhase {
        self.phase
    }

    pub fn round_clock(&self) -> u32 {
        self.round_clock
    }

    /// Whether kinematic systems should run this frame. Tracked apart
    /// from the phase: the physics resume after a freeze rides its own
    /// timer, not the countdown's.
    pub fn physics_live(&self) -> bool {
        !self.physics_paused
    }

    pub fn winner(&self, config: &Config) -> Option<u8> {
        self.score.winner(config.win_score)
    }

    pub fn winner_label(&self, config: &Config) -> Option<&'static str> {
        self.score.winner_label(config.win_score)
    }

    /// Start the match clock. Call once after the court is set up.
    pub fn begin(&mut self, config: &Config, scheduler: &mut Scheduler, time: &Time) {
        self.begin_round(config, scheduler, time);
    }

    fn transition(&mut self, action: MatchAction) -> bool {
        if let Some(next) = next_phase(self.phase, action) {
            log::debug!("match phase {:?} -> {:?} on {:?}", self.phase, next, action);
            self.phase = next;
            true
        } else {
            log::debug!("ignoring {:?} in phase {:?}", action, self.phase);
            false
        }
    }

    fn begin_round(&mut self, config: &Config, scheduler: &mut Scheduler, time: &Time) {
        self.round_clock = config.round_seconds;
        scheduler.schedule_in_phase(
            time.now + 1.0,
            MatchPhase::CountdownActive,
            EventKind::RoundClockTick,
        );
    }

    /// Dispatch one due scheduled event.
    #[allow(clippy::too_many_arguments)]
    pub fn handle_event(
        &mut self,
        kind: EventKind,
        world: &mut World,
        config: &Config,
        scheduler: &mut Scheduler,
        events: &mut Events,
        rng: &mut GameRng,
        time: &Time,
    ) {
        match kind {
            EventKind::RoundClockTick => {
                if self.phase != MatchPhase::CountdownActive {
                    return;
                }
                self.round_clock = self.round_clock.saturating_sub(1);
                events.display.push(DisplayRequest::RoundClock(self.round_clock));
                if self.round_clock == 0 {
                    self.settle_point(world, config, scheduler, events, time);
                } else {
                    scheduler.schedule_in_phase(
                        time.now + 1.0,
                        MatchPhase::CountdownActive,
                        EventKind::RoundClockTick,
                    );
                }
            }
            EventKind::FreezeElapsed => {
                if !self.transition(MatchAction::FreezeElapsed) {
                    return;
                }
                scheduler.cancel_phase(MatchPhase::RoundFreeze);
                events.display.push(DisplayRequest::ClearRoundResult);

                // New serve spot for the next round; the ball is reset in
                // place, never recreated.
                let serve = Vec2::new(
                    rng.0.gen_range(Params::SERVE_AREA_X_MIN..=Params::SERVE_AREA_X_MAX),
                    rng.0.gen_range(Params::SERVE_AREA_Y_MIN..=Params::SERVE_AREA_Y_MAX),
                );
                for (_entity, (ball, body)) in world.query_mut::<(&mut Ball, &mut Body)>() {
                    body.pos = serve;
                    body.vel = Vec2::ZERO;
                    body.angular_vel = 0.0;
                    ball.side = classify_side(serve.x, config.net_x);
                }

                // Resume and countdown run on independent timers from
                // here. Resume is untagged: it must survive the hop into
                // the next phase.
                scheduler.schedule(
                    time.now + Params::RESUME_DELAY_SECS,
                    EventKind::ResumePhysics,
                );
                events
                    .display
                    .push(DisplayRequest::CountdownTick(Params::PRE_ROUND_STEPS));
                self.schedule_countdown_followup(Params::PRE_ROUND_STEPS, scheduler, time);
            }
            EventKind::ResumePhysics => {
                if self.phase == MatchPhase::GameOver {
                    return;
                }
                if self.physics_paused {
                    self.physics_paused = false;
                    events.physics.push(PhysicsRequest::Resume);
                }
            }
            EventKind::CountdownStep(n) => {
                events.display.push(DisplayRequest::CountdownTick(n));
                self.schedule_countdown_followup(n, scheduler, time);
            }
            EventKind::CountdownGo => {
                events.display.push(DisplayRequest::CountdownGo);
                scheduler.schedule_in_phase(
                    time.now + Params::PRE_ROUND_LINGER_SECS,
                    MatchPhase::PreRoundCountdown,
                    EventKind::CountdownDone,
                );
            }
            EventKind::CountdownDone => {
                events.display.push(DisplayRequest::ClearCountdown);
                scheduler.cancel_phase(MatchPhase::PreRoundCountdown);
                if self.transition(MatchAction::CountdownDone) {
                    self.begin_round(config, scheduler, time);
                }
            }
            EventKind::InvincibilityEnd(entity) => health::end_invincibility(world, entity),
        }
    }

    fn schedule_countdown_followup(&self, shown: u8, scheduler: &mut Scheduler, time: &Time) {
        let kind = if shown > 1 {
            EventKind::CountdownStep(shown - 1)
        } else {
            EventKind::CountdownGo
        };
        scheduler.schedule_in_phase(
            time.now + Params::PRE_ROUND_STEP_SECS,
            MatchPhase::PreRoundCountdown,
            kind,
        );
    }

    /// The round clock ran out: attribute the point from the ball's
    /// current side and move on to freeze or game over.
    fn settle_point(
        &mut self,
        world: &mut World,
        config: &Config,
        scheduler: &mut Scheduler,
        events: &mut Events,
        time: &Time,
    ) {
        self.transition(MatchAction::RoundExpired);
        // The superseded clock chain must not outlive this round.
        scheduler.cancel_phase(MatchPhase::CountdownActive);

        let side = match world.query::<&Ball>().iter().next().map(|(_e, b)| b.side) {
            Some(side) => side,
            None => {
                log::warn!("round expired with no ball in the world");
                BallSide::Neutral
            }
        };
        let scorer = match side {
            BallSide::Left => {
                self.score.increment_left();
                events.left_scored = true;
                Some(0)
            }
            BallSide::Right => {
                self.score.increment_right();
                events.right_scored = true;
                Some(1)
            }
            // Ball dead on the net line at expiry: nobody scores.
            BallSide::Neutral => None,
        };
        log::debug!(
            "round settled on {:?}: {} - {}",
            side,
            self.score.left,
            self.score.right
        );

        self.physics_paused = true;
        events.physics.push(PhysicsRequest::Pause);

        if let Some(winner) = self.score.winner(config.win_score) {
            self.transition(MatchAction::MatchWon);
            events.display.push(DisplayRequest::WinnerBanner(winner));
        } else {
            self.transition(MatchAction::PointSettled);
            events.display.push(DisplayRequest::RoundResult(scorer));
            scheduler.schedule_in_phase(
                time.now + Params::FREEZE_SECS,
                MatchPhase::RoundFreeze,
                EventKind::FreezeElapsed,
            );
        }
    }

    /// Full match reset from game over: scores zeroed, timers dropped,
    /// court back to its starting shape. Returns false outside
    /// `GameOver`.
    pub fn restart(
        &mut self,
        world: &mut World,
        config: &Config,
        scheduler: &mut Scheduler,
        events: &mut Events,
        time: &Time,
    ) -> bool {
        if !self.transition(MatchAction::Restart) {
            return false;
        }
        self.score.reset();
        scheduler.clear();
        events.display.push(DisplayRequest::ClearRoundResult);
        events.display.push(DisplayRequest::ClearCountdown);

        let serve = config.ball_serve_pos();
        for (_entity, (ball, body)) in world.query_mut::<(&mut Ball, &mut Body)>() {
            body.pos = serve;
            body.vel = Vec2::new(Params::BALL_SERVE_VX, Params::BALL_SERVE_VY);
            body.angular_vel = 0.0;
            ball.side = classify_side(serve.x, config.net_x);
        }
        for (_entity, (player, body)) in world.query_mut::<(&mut Player, &mut Body)>() {
            body.pos = config.player_spawn(player.id);
            body.vel = Vec2::ZERO;
            player.jumps_left = Params::MAX_JUMPS;
            player.jump_held = false;
            player.facing = if player.id == 0 {
                Facing::Right
            } else {
                Facing::Left
            };
        }

        self.physics_paused = false;
        events.physics.push(PhysicsRequest::Resume);
        self.begin_round(config, scheduler, time);
        true
    }
}
