use glam::Vec2;
use hecs::World;
use volley_core::*;

/// Everything a match needs, driven through the public `step()` the way
/// a host engine would drive it.
struct TestMatch {
    world: World,
    time: Time,
    config: Config,
    ctl: MatchCtl,
    scheduler: Scheduler,
    queue: HostQueue,
    events: Events,
    rng: GameRng,
    ball: hecs::Entity,
    left_player: hecs::Entity,
    display_log: Vec<DisplayRequest>,
    sound_log: Vec<SoundRequest>,
}

impl TestMatch {
    fn new(config: Config) -> Self {
        config.validate().expect("test config should be valid");
        let mut world = World::new();
        let ball = create_ball(&mut world, &config);
        let left_player = create_player(&mut world, 0, ControlScheme::Arrows, &config);
        create_player(&mut world, 1, ControlScheme::Wasd, &config);

        let mut ctl = MatchCtl::new(&config);
        let mut scheduler = Scheduler::new();
        let time = Time::new(0.1, 0.0);
        ctl.begin(&config, &mut scheduler, &time);

        Self {
            world,
            time,
            config,
            ctl,
            scheduler,
            queue: HostQueue::new(),
            events: Events::new(),
            rng: GameRng::new(99),
            ball,
            left_player,
            display_log: Vec::new(),
            sound_log: Vec::new(),
        }
    }

    fn step(&mut self) {
        step(
            &mut self.world,
            &mut self.time,
            &self.config,
            &mut self.ctl,
            &mut self.scheduler,
            &mut self.queue,
            &mut self.events,
            &mut self.rng,
        );
        self.display_log.extend(self.events.display.iter().copied());
        self.sound_log.extend(self.events.sounds.iter().copied());
    }

    fn run_until(&mut self, max_steps: usize, pred: impl Fn(&Self) -> bool) -> bool {
        for _ in 0..max_steps {
            self.step();
            if pred(self) {
                return true;
            }
        }
        false
    }

    fn place_ball(&mut self, x: f32, y: f32) {
        let mut body = self.world.get::<&mut Body>(self.ball).unwrap();
        body.pos = Vec2::new(x, y);
        body.vel = Vec2::ZERO;
    }

    fn ball_body(&self) -> Body {
        *self.world.get::<&Body>(self.ball).unwrap()
    }

    fn ground_player(&mut self, entity: hecs::Entity, grounded: bool) {
        let mut body = self.world.get::<&mut Body>(entity).unwrap();
        body.blocked.down = grounded;
    }
}

fn short_config() -> Config {
    let mut config = Config::new();
    config.net_x = 500.0;
    config.round_seconds = 2;
    config
}

#[test]
fn test_round_expiry_scores_for_ball_side() {
    let mut config = Config::new();
    config.net_x = 500.0;
    let mut m = TestMatch::new(config);
    m.place_ball(50.0, 300.0);

    // Ball sits left of the net for the whole round.
    let reached = m.run_until(400, |m| m.ctl.phase() == MatchPhase::RoundFreeze);

    assert!(reached, "round should expire and freeze");
    assert_eq!(m.ctl.score.left, 1);
    assert_eq!(m.ctl.score.right, 0);
    assert!(!m.ctl.physics_live(), "frozen after the point");
    assert!(m.display_log.contains(&DisplayRequest::RoundResult(Some(0))));
}

#[test]
fn test_match_point_reaches_game_over() {
    let mut m = TestMatch::new(short_config());
    m.place_ball(90.0, 300.0);
    m.ctl.score.left = m.config.win_score - 1;

    let reached = m.run_until(100, |m| m.ctl.phase() == MatchPhase::GameOver);

    assert!(reached, "final point should end the match");
    assert_eq!(m.ctl.score.left, m.config.win_score);
    assert_eq!(m.ctl.winner_label(&m.config), Some("Player One"));
    assert!(m.display_log.contains(&DisplayRequest::WinnerBanner(0)));
    assert!(!m.ctl.physics_live());
}

#[test]
fn test_right_side_win_names_player_two() {
    let mut m = TestMatch::new(short_config());
    m.place_ball(900.0, 300.0);
    m.ctl.score.right = m.config.win_score - 1;

    let reached = m.run_until(100, |m| m.ctl.phase() == MatchPhase::GameOver);

    assert!(reached);
    assert_eq!(m.ctl.winner_label(&m.config), Some("Player Two"));
}

#[test]
fn test_full_round_cycle_returns_to_live_play() {
    let mut m = TestMatch::new(short_config());
    m.place_ball(50.0, 300.0);

    assert!(m.run_until(100, |m| m.ctl.phase() == MatchPhase::RoundFreeze));
    // Freeze (3s) + countdown (3s + linger) + resume (3s) all fit well
    // inside 15 simulated seconds.
    assert!(
        m.run_until(150, |m| m.ctl.phase() == MatchPhase::CountdownActive),
        "match should come back around to live play"
    );

    assert!(m.ctl.physics_live(), "independent resume timer has fired by now");
    assert_eq!(m.ctl.round_clock(), m.config.round_seconds, "fresh clock");

    let body = m.ball_body();
    assert!(
        body.pos.x >= Params::SERVE_AREA_X_MIN && body.pos.x <= Params::SERVE_AREA_X_MAX,
        "ball repositioned inside the serve area, got x {}",
        body.pos.x
    );
    assert!(body.pos.y >= Params::SERVE_AREA_Y_MIN && body.pos.y <= Params::SERVE_AREA_Y_MAX);

    for expected in [
        DisplayRequest::RoundResult(Some(0)),
        DisplayRequest::ClearRoundResult,
        DisplayRequest::CountdownTick(3),
        DisplayRequest::CountdownTick(2),
        DisplayRequest::CountdownTick(1),
        DisplayRequest::CountdownGo,
        DisplayRequest::ClearCountdown,
    ] {
        assert!(
            m.display_log.contains(&expected),
            "missing display request {expected:?}"
        );
    }

    // Second round scores again: no carry-over weirdness.
    m.place_ball(900.0, 300.0);
    assert!(m.run_until(100, |m| m.ctl.phase() == MatchPhase::RoundFreeze));
    assert_eq!(m.ctl.score.left, 1);
    assert_eq!(m.ctl.score.right, 1);
}

#[test]
fn test_stationary_grounded_hit_pops_ball_up_and_out() {
    let mut m = TestMatch::new(short_config());
    m.place_ball(400.0, 300.0);
    m.ground_player(m.left_player, true);
    m.queue.push_contact(0);

    m.step();

    let body = m.ball_body();
    // Left player spawns facing the net (right): floor push right, pop up.
    let expected_vx = Params::HIT_MIN_PUSH * m.config.ball_damping;
    assert!(
        (body.vel.x - expected_vx).abs() < 1e-3,
        "push floor then one damping tick, got {}",
        body.vel.x
    );
    assert_eq!(body.vel.y, Params::HIT_GROUND_POP);
    assert!(m.sound_log.contains(&SoundRequest::BallHit));
}

#[test]
fn test_double_jump_over_two_frames() {
    let mut m = TestMatch::new(short_config());
    m.ground_player(m.left_player, true);
    m.queue.push_sample(
        0,
        ControlSample {
            primary: 1.0,
            ..ControlSample::default()
        },
    );
    m.step();
    {
        let body = *m.world.get::<&Body>(m.left_player).unwrap();
        assert_eq!(body.vel.y, m.config.jump_speed, "grounded jump fires");
    }

    // Airborne now; release, then press again for the air jump.
    m.ground_player(m.left_player, false);
    m.queue.push_sample(0, ControlSample::default());
    m.step();
    m.queue.push_sample(
        0,
        ControlSample {
            primary: 1.0,
            ..ControlSample::default()
        },
    );
    m.step();

    let body = *m.world.get::<&Body>(m.left_player).unwrap();
    let player = *m.world.get::<&Player>(m.left_player).unwrap();
    assert_eq!(body.vel.y, m.config.jump_speed, "air jump fires");
    assert_eq!(player.jumps_left, Params::MAX_JUMPS - 1, "air jump spent budget");
}

#[test]
fn test_frozen_match_ignores_inputs_and_contacts() {
    let mut m = TestMatch::new(short_config());
    m.place_ball(50.0, 300.0);
    assert!(m.run_until(100, |m| m.ctl.phase() == MatchPhase::RoundFreeze));
    let ball_before = m.ball_body();
    m.sound_log.clear();

    m.queue.push_sample(
        0,
        ControlSample {
            left: 1.0,
            ..ControlSample::default()
        },
    );
    m.queue.push_contact(0);
    m.step();

    let ball_after = m.ball_body();
    assert_eq!(ball_before.vel, ball_after.vel, "frozen ball takes no impulse");
    assert!(m.sound_log.is_empty(), "no hit sound while frozen");
    let player_body = *m.world.get::<&Body>(m.left_player).unwrap();
    assert_eq!(player_body.vel.x, 0.0, "frozen player ignores movement input");
}

#[test]
fn test_restart_after_game_over_plays_again() {
    let mut m = TestMatch::new(short_config());
    m.place_ball(50.0, 300.0);
    m.ctl.score.left = m.config.win_score - 1;
    assert!(m.run_until(100, |m| m.ctl.phase() == MatchPhase::GameOver));

    let restarted = m.ctl.restart(
        &mut m.world,
        &m.config,
        &mut m.scheduler,
        &mut m.events,
        &m.time,
    );
    assert!(restarted);
    assert_eq!(m.ctl.score.left, 0);
    assert_eq!(m.ball_body().pos, m.config.ball_serve_pos());

    // The fresh match runs: clock ticks down again.
    m.place_ball(900.0, 300.0);
    assert!(m.run_until(100, |m| m.ctl.phase() == MatchPhase::RoundFreeze));
    assert_eq!(m.ctl.score.right, 1);
}

#[test]
fn test_control_scheme_rebind_changes_jump_semantics() {
    let mut m = TestMatch::new(short_config());
    set_control_scheme(&mut m.world, 0, ControlScheme::Gamepad);
    m.ground_player(m.left_player, false);

    // Held trigger: a gamepad retriggers by level, draining the budget.
    for _ in 0..2 {
        m.queue.push_sample(
            0,
            ControlSample {
                primary: 1.0,
                ..ControlSample::default()
            },
        );
        m.step();
    }

    let player = *m.world.get::<&Player>(m.left_player).unwrap();
    assert_eq!(player.jumps_left, 0, "both air jumps spent on a held trigger");
}
