/// Time resource for tracking simulation time
#[derive(Debug, Clone, Copy)]
pub struct Time {
    pub dt: f32,  // Delta time for this step
    pub now: f32, // Total elapsed time
}

impl Time {
    pub fn new(dt: f32, now: f32) -> Self {
        Self { dt, now }
    }
}

impl Default for Time {
    fn default() -> Self {
        Self {
            dt: 0.016,
            now: 0.0,
        }
    }
}

/// Match score tracking
#[derive(Debug, Clone, Copy, Default)]
pub struct Score {
    pub left: u8,
    pub right: u8,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment_left(&mut self) {
        self.left += 1;
    }

    pub fn increment_right(&mut self) {
        self.right += 1;
    }

    /// Winner check; `>=` so the contract also covers multi-point
    /// increments.
    pub fn winner(&self, win_score: u8) -> Option<u8> {
        if self.left >= win_score {
            Some(0)
        } else if self.right >= win_score {
            Some(1)
        } else {
            None
        }
    }

    pub fn winner_label(&self, win_score: u8) -> Option<&'static str> {
        self.winner(win_score).map(|id| match id {
            0 => "Player One",
            _ => "Player Two",
        })
    }

    pub fn reset(&mut self) {
        self.left = 0;
        self.right = 0;
    }
}

/// Seeded random number generator; the sole randomness source so runs
/// are reproducible under a fixed seed.
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(4242)
    }
}

/// One player's normalized controls for a tick. Digital sources report
/// 0 or 1; analog sources pass magnitude through.
#[derive(Debug, Clone, Copy, Default)]
pub struct ControlSample {
    pub up: f32,
    pub down: f32,
    pub left: f32,
    pub right: f32,
    /// Jump
    pub primary: f32,
    /// Sprint modifier
    pub secondary: f32,
    /// Attack
    pub tertiary: f32,
}

/// Per-frame inbound queue filled by the host: control samples and
/// ball-contact reports. Cleared at the end of every step.
#[derive(Debug, Clone, Default)]
pub struct HostQueue {
    pub samples: Vec<(u8, ControlSample)>,
    /// Player ids the ball touched this frame, as detected by the host's
    /// collision pass.
    pub contacts: Vec<u8>,
}

impl HostQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_sample(&mut self, player_id: u8, sample: ControlSample) {
        self.samples.push((player_id, sample));
    }

    pub fn push_contact(&mut self, player_id: u8) {
        self.contacts.push(player_id);
    }

    /// Remove and return this tick's sample for a player, if the host
    /// provided one.
    pub fn take_sample(&mut self, player_id: u8) -> Option<ControlSample> {
        let idx = self.samples.iter().position(|(id, _)| *id == player_id)?;
        Some(self.samples.swap_remove(idx).1)
    }

    pub fn clear(&mut self) {
        self.samples.clear();
        self.contacts.clear();
    }
}

/// Animation the host should play for a player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimKind {
    Idle,
    Walk,
    Run,
    Attack,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundRequest {
    BallHit,
}

/// Text/UI work delegated to the host renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayRequest {
    /// Seconds left on the round clock.
    RoundClock(u32),
    /// Show who took the round; `None` when the ball sat exactly on the
    /// net at expiry.
    RoundResult(Option<u8>),
    ClearRoundResult,
    /// Pre-round countdown number (3, 2, 1).
    CountdownTick(u8),
    CountdownGo,
    ClearCountdown,
    /// Match is over; the winning player id.
    WinnerBanner(u8),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhysicsRequest {
    Pause,
    Resume,
}

/// Requests raised during this frame for the host to act on.
#[derive(Debug, Clone, Default)]
pub struct Events {
    pub anims: Vec<(u8, AnimKind)>,
    pub sounds: Vec<SoundRequest>,
    pub display: Vec<DisplayRequest>,
    pub physics: Vec<PhysicsRequest>,
    pub left_scored: bool,
    pub right_scored: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.anims.clear();
        self.sounds.clear();
        self.display.clear();
        self.physics.clear();
        self.left_scored = false;
        self.right_scored = false;
    }
}
