//! Game state and core simulation types
//!
//! Everything a session owns lives here: the player, the ballons, the two
//! clouds, the countdown deadline and the seeded RNG.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::within_radius;
use crate::consts::*;
use crate::tuning::Tuning;
use crate::{heading_vector, wrap_coord};

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Countdown running, player in control
    Playing,
    /// Time ran out; only the end screen is shown
    GameOver,
}

/// Shared contract for everything that lives in the world
pub trait Entity {
    /// Session-unique identity
    fn id(&self) -> u32;

    /// Current world position
    fn pos(&self) -> Vec2;

    /// Per-tick self motion (static entities keep the default)
    fn advance(&mut self) {}
}

/// Allocates session-unique entity ids
#[derive(Debug, Clone)]
pub struct EntityIds {
    next: u32,
}

impl Default for EntityIds {
    fn default() -> Self {
        Self { next: 1 }
    }
}

impl EntityIds {
    pub fn next_id(&mut self) -> u32 {
        let id = self.next;
        self.next += 1;
        id
    }
}

/// Velocity decay applied after each move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SpeedFactor {
    #[default]
    Normal,
    /// Inside a cloud
    Slowed,
}

impl SpeedFactor {
    pub fn value(self) -> f32 {
        match self {
            SpeedFactor::Normal => NORMAL_SPEED,
            SpeedFactor::Slowed => SLOWED_SPEED,
        }
    }
}

/// The flying unicorn
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub id: u32,
    pub pos: Vec2,
    pub vel: Vec2,
    /// Heading in degrees, 0 = up, clockwise positive. Unbounded.
    pub angle: f32,
    pub speed: SpeedFactor,
    pub score: u64,
}

impl Player {
    /// Fresh player at the spawn point, at rest
    pub fn new(id: u32) -> Self {
        Self {
            id,
            pos: Vec2::new(PLAYER_SPAWN_X, PLAYER_SPAWN_Y),
            vel: Vec2::ZERO,
            angle: 0.0,
            speed: SpeedFactor::Normal,
            score: 0,
        }
    }

    pub fn turn_left(&mut self) {
        self.angle -= TURN_STEP_DEG;
    }

    pub fn turn_right(&mut self) {
        self.angle += TURN_STEP_DEG;
    }

    /// Add an impulse along the current heading
    pub fn accelerate(&mut self) {
        self.vel += heading_vector(self.angle, ACCELERATION);
    }

    /// Integrate velocity, wrap around the world, then decay velocity
    pub fn move_step(&mut self) {
        self.pos += self.vel;
        self.pos.x = wrap_coord(self.pos.x, WORLD_WIDTH);
        self.pos.y = wrap_coord(self.pos.y, WORLD_HEIGHT);
        self.vel *= self.speed.value();
    }

    pub fn set_speed(&mut self, speed: SpeedFactor) {
        self.speed = speed;
    }

    /// Remove every ballon within reach and credit its points.
    ///
    /// Returns the collected ballons in list order.
    pub fn collect(&mut self, ballons: &mut Vec<Ballon>) -> Vec<Ballon> {
        let mut collected = Vec::new();
        let pos = self.pos;
        ballons.retain(|ballon| {
            if within_radius(pos, ballon.pos(), COLLECT_RADIUS) {
                collected.push(ballon.clone());
                false
            } else {
                true
            }
        });
        for ballon in &collected {
            self.score += ballon.points();
        }
        collected
    }
}

impl Entity for Player {
    fn id(&self) -> u32 {
        self.id
    }

    fn pos(&self) -> Vec2 {
        self.pos
    }

    fn advance(&mut self) {
        self.move_step();
    }
}

/// Ballon categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BallonKind {
    /// Magenta, frequent
    Common,
    /// Green, worth more
    Rare,
}

impl BallonKind {
    pub fn points(self) -> u64 {
        match self {
            BallonKind::Common => COMMON_POINTS,
            BallonKind::Rare => RARE_POINTS,
        }
    }

    /// Weighted draw between the two categories
    pub fn pick<R: Rng>(rng: &mut R, common_weight: u32, rare_weight: u32) -> Self {
        let total = common_weight.saturating_add(rare_weight);
        if total == 0 {
            return BallonKind::Common;
        }
        if rng.random_range(0..total) < common_weight {
            BallonKind::Common
        } else {
            BallonKind::Rare
        }
    }
}

/// A collectible. Position and kind never change after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ballon {
    id: u32,
    pos: Vec2,
    kind: BallonKind,
}

impl Ballon {
    pub fn new(id: u32, pos: Vec2, kind: BallonKind) -> Self {
        Self { id, pos, kind }
    }

    /// Uniformly placed ballon with a weighted category
    pub fn random<R: Rng>(id: u32, rng: &mut R, common_weight: u32, rare_weight: u32) -> Self {
        let x = rng.random::<f32>() * WORLD_WIDTH;
        let y = rng.random::<f32>() * WORLD_HEIGHT;
        let pos = Vec2::new(wrap_coord(x, WORLD_WIDTH), wrap_coord(y, WORLD_HEIGHT));
        let kind = BallonKind::pick(rng, common_weight, rare_weight);
        Self::new(id, pos, kind)
    }

    pub fn kind(&self) -> BallonKind {
        self.kind
    }

    pub fn points(&self) -> u64 {
        self.kind.points()
    }
}

impl Entity for Ballon {
    fn id(&self) -> u32 {
        self.id
    }

    fn pos(&self) -> Vec2 {
        self.pos
    }
}

/// Cloud travel direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CloudDirection {
    Left,
    Right,
}

impl CloudDirection {
    pub fn sign(self) -> f32 {
        match self {
            CloudDirection::Left => -1.0,
            CloudDirection::Right => 1.0,
        }
    }
}

/// A drifting obstacle that slows the player on contact
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cloud {
    pub id: u32,
    pub pos: Vec2,
    pub direction: CloudDirection,
    pub speed: f32,
}

impl Cloud {
    pub fn new(id: u32, direction: CloudDirection, y: f32, speed: f32) -> Self {
        Self {
            id,
            pos: Vec2::new(0.0, y),
            direction,
            speed,
        }
    }

    /// Cloud at the left edge with a random height and drift speed
    pub fn random<R: Rng>(id: u32, direction: CloudDirection, rng: &mut R) -> Self {
        let y = (rng.random_range(0..CLOUD_Y_SPAN) + CLOUD_Y_MIN) as f32;
        let speed = rng.random_range(CLOUD_SPEED_MIN..=CLOUD_SPEED_MAX) as f32;
        Self::new(id, direction, y, speed)
    }

    /// Move horizontally; wrap only once past the edge being travelled toward
    pub fn drift(&mut self) {
        self.pos.x += self.speed * self.direction.sign();
        match self.direction {
            CloudDirection::Right if self.pos.x > WORLD_WIDTH => {
                self.pos.x = wrap_coord(self.pos.x, WORLD_WIDTH);
            }
            CloudDirection::Left if self.pos.x < 0.0 => {
                self.pos.x = wrap_coord(self.pos.x, WORLD_WIDTH);
            }
            _ => {}
        }
    }

    /// Planar proximity test (no toroidal distance)
    pub fn overlaps(&self, player: &Player) -> bool {
        within_radius(self.pos, player.pos, CLOUD_RADIUS)
    }
}

impl Entity for Cloud {
    fn id(&self) -> u32 {
        self.id
    }

    fn pos(&self) -> Vec2 {
        self.pos
    }

    fn advance(&mut self) {
        self.drift();
    }
}

/// Things that happened during a tick, drained by the host
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A new session started
    Restarted { deadline: f64 },
    /// A ballon appeared
    BallonSpawned { id: u32, kind: BallonKind },
    /// The player popped a ballon
    BallonCollected { id: u32, kind: BallonKind, points: u64 },
    /// The countdown ran out
    GameOver { score: u64 },
}

/// Values the HUD displays
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hud {
    pub phase: GamePhase,
    pub score: u64,
    /// Whole seconds left, floored, never negative
    pub seconds_left: u32,
    /// Score frozen at game over; `None` while playing
    pub final_score: Option<u64>,
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Balance values in force for this session
    pub tuning: Tuning,
    /// Current phase
    pub phase: GamePhase,
    /// Absolute time (seconds) at which the session ends
    pub deadline: f64,
    pub player: Player,
    /// Active ballons, unordered
    pub ballons: Vec<Ballon>,
    /// Exactly one leftward and one rightward cloud
    pub clouds: [Cloud; 2],
    pub(crate) rng: Pcg32,
    pub(crate) ids: EntityIds,
    events: Vec<GameEvent>,
}

impl GameState {
    /// Create a session and start it at `now`
    pub fn new(seed: u64, tuning: Tuning, now: f64) -> Self {
        // Placeholders; `restart` allocates the real ids and cloud rolls
        let mut state = Self {
            seed,
            tuning,
            phase: GamePhase::Playing,
            deadline: now,
            player: Player::new(0),
            ballons: Vec::new(),
            clouds: [
                Cloud::new(0, CloudDirection::Left, CLOUD_Y_MIN as f32, 0.0),
                Cloud::new(0, CloudDirection::Right, CLOUD_Y_MIN as f32, 0.0),
            ],
            rng: Pcg32::seed_from_u64(seed),
            ids: EntityIds::default(),
            events: Vec::new(),
        };
        state.restart(now);
        state
    }

    fn fresh_clouds(ids: &mut EntityIds, rng: &mut Pcg32) -> [Cloud; 2] {
        [
            Cloud::random(ids.next_id(), CloudDirection::Left, rng),
            Cloud::random(ids.next_id(), CloudDirection::Right, rng),
        ]
    }

    /// Throw away the current run and start a new one at `now`
    pub fn restart(&mut self, now: f64) {
        self.phase = GamePhase::Playing;
        self.player = Player::new(self.ids.next_id());
        self.ballons.clear();
        self.clouds = Self::fresh_clouds(&mut self.ids, &mut self.rng);
        self.deadline = now + self.tuning.session_secs;
        self.events.push(GameEvent::Restarted {
            deadline: self.deadline,
        });
        log::info!(
            "Session started (seed {}, ends at {:.1}s)",
            self.seed,
            self.deadline
        );
    }

    /// Whole seconds left on the countdown
    pub fn seconds_left(&self, now: f64) -> u32 {
        (self.deadline - now).max(0.0).floor() as u32
    }

    pub fn hud(&self, now: f64) -> Hud {
        Hud {
            phase: self.phase,
            score: self.player.score,
            seconds_left: self.seconds_left(now),
            final_score: self.is_game_over().then_some(self.player.score),
        }
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    pub(crate) fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Events recorded since the last drain
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Take all pending events
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> GameState {
        GameState::new(12345, Tuning::default(), 0.0)
    }

    #[test]
    fn test_new_state_is_playing() {
        let state = state();
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.player.pos, Vec2::new(600.0, 450.0));
        assert_eq!(state.player.vel, Vec2::ZERO);
        assert_eq!(state.player.score, 0);
        assert!(state.ballons.is_empty());
        assert_eq!(state.clouds[0].direction, CloudDirection::Left);
        assert_eq!(state.clouds[1].direction, CloudDirection::Right);
        assert!((state.deadline - 11.0).abs() < 1e-9);
        assert!(matches!(state.events()[0], GameEvent::Restarted { .. }));
    }

    #[test]
    fn test_new_allocates_ids_and_rolls_once() {
        let state = state();
        assert_eq!(state.player.id(), 1);
        assert_eq!([state.clouds[0].id(), state.clouds[1].id()], [2, 3]);

        let mut rng = Pcg32::seed_from_u64(12345);
        let expected = [
            Cloud::random(2, CloudDirection::Left, &mut rng),
            Cloud::random(3, CloudDirection::Right, &mut rng),
        ];
        assert_eq!(state.clouds, expected);
    }

    #[test]
    fn test_clouds_spawn_in_band() {
        for seed in 0..50 {
            let state = GameState::new(seed, Tuning::default(), 0.0);
            for cloud in &state.clouds {
                assert_eq!(cloud.pos.x, 0.0);
                assert!(cloud.pos.y >= 50.0 && cloud.pos.y < 850.0);
                assert!(cloud.speed >= 3.0 && cloud.speed <= 7.0);
            }
        }
    }

    #[test]
    fn test_player_turning_and_acceleration() {
        let mut player = Player::new(1);
        player.turn_left();
        player.turn_left();
        player.turn_right();
        assert!((player.angle + 4.5).abs() < 1e-6);

        let mut player = Player::new(1);
        player.accelerate();
        player.accelerate();
        assert!(player.vel.x.abs() < 1e-6);
        assert!((player.vel.y + 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_player_move_wraps_then_decays() {
        let mut player = Player::new(1);
        player.pos = Vec2::new(1199.0, 1.0);
        player.vel = Vec2::new(3.0, -2.0);
        player.move_step();
        assert!((player.pos.x - 2.0).abs() < 1e-3);
        assert!((player.pos.y - 899.0).abs() < 1e-3);
        assert!((player.vel.x - 2.85).abs() < 1e-5);

        player.set_speed(SpeedFactor::Slowed);
        player.move_step();
        assert!((player.vel.x - 2.85 * 0.45).abs() < 1e-5);
    }

    #[test]
    fn test_velocity_decays_toward_zero() {
        let mut player = Player::new(1);
        player.vel = Vec2::new(10.0, 0.0);
        for _ in 0..200 {
            player.move_step();
        }
        assert!(player.vel.x > 0.0);
        assert!(player.vel.x < 0.01);
    }

    #[test]
    fn test_ballon_points() {
        assert_eq!(BallonKind::Common.points(), 1);
        assert_eq!(BallonKind::Rare.points(), 5);
        let ballon = Ballon::new(7, Vec2::new(10.0, 20.0), BallonKind::Rare);
        assert_eq!(ballon.points(), 5);
        assert_eq!(ballon.id(), 7);
        assert_eq!(ballon.pos(), Vec2::new(10.0, 20.0));
    }

    #[test]
    fn test_ballon_kind_weighting() {
        let mut rng = Pcg32::seed_from_u64(7);
        let draws = 10_000;
        let rare = (0..draws)
            .filter(|_| BallonKind::pick(&mut rng, 4, 1) == BallonKind::Rare)
            .count();
        // Expect ~20% rare
        assert!(rare > 1_600 && rare < 2_400, "rare draws: {}", rare);

        assert_eq!(BallonKind::pick(&mut rng, 0, 1), BallonKind::Rare);
        assert_eq!(BallonKind::pick(&mut rng, 1, 0), BallonKind::Common);
        assert_eq!(BallonKind::pick(&mut rng, 0, 0), BallonKind::Common);
    }

    #[test]
    fn test_random_ballon_in_world() {
        let mut rng = Pcg32::seed_from_u64(3);
        for id in 0..500 {
            let ballon = Ballon::random(id, &mut rng, 4, 1);
            assert!(ballon.pos().x >= 0.0 && ballon.pos().x < WORLD_WIDTH);
            assert!(ballon.pos().y >= 0.0 && ballon.pos().y < WORLD_HEIGHT);
        }
    }

    #[test]
    fn test_cloud_drift_right_wraps_past_edge() {
        let mut cloud = Cloud::new(1, CloudDirection::Right, 300.0, 5.0);
        cloud.pos.x = 1198.0;
        cloud.drift();
        assert!((cloud.pos.x - 3.0).abs() < 1e-4);
        assert_eq!(cloud.pos.y, 300.0);

        // Exactly at the edge is not wrapped yet
        let mut cloud = Cloud::new(1, CloudDirection::Right, 300.0, 5.0);
        cloud.pos.x = 1195.0;
        cloud.drift();
        assert_eq!(cloud.pos.x, 1200.0);
    }

    #[test]
    fn test_cloud_drift_left_wraps_below_zero() {
        let mut cloud = Cloud::new(1, CloudDirection::Left, 300.0, 4.0);
        cloud.drift();
        assert!((cloud.pos.x - 1196.0).abs() < 1e-4);
        cloud.advance();
        assert!((cloud.pos.x - 1192.0).abs() < 1e-4);
    }

    #[test]
    fn test_cloud_overlap_radius() {
        let cloud = Cloud::new(1, CloudDirection::Left, 450.0, 4.0);
        let mut player = Player::new(2);
        player.pos = Vec2::new(89.0, 450.0);
        assert!(cloud.overlaps(&player));
        player.pos = Vec2::new(90.0, 450.0);
        assert!(!cloud.overlaps(&player));
        // Across the world edge does not count
        player.pos = Vec2::new(1190.0, 450.0);
        assert!(!cloud.overlaps(&player));
    }

    #[test]
    fn test_collect_removes_only_nearby() {
        let mut player = Player::new(1);
        let mut ballons = vec![
            Ballon::new(10, Vec2::new(600.0, 460.0), BallonKind::Common),
            Ballon::new(11, Vec2::new(640.0, 450.0), BallonKind::Rare),
            Ballon::new(12, Vec2::new(660.0, 450.0), BallonKind::Rare),
            Ballon::new(13, Vec2::new(10.0, 10.0), BallonKind::Common),
        ];
        let collected = player.collect(&mut ballons);
        assert_eq!(collected.len(), 2);
        assert_eq!(player.score, 6);
        let left: Vec<u32> = ballons.iter().map(|b| b.id()).collect();
        assert_eq!(left, vec![12, 13]);

        // Nothing in range: no change
        let collected = player.collect(&mut ballons);
        assert!(collected.is_empty());
        assert_eq!(player.score, 6);
    }

    #[test]
    fn test_restart_resets_everything() {
        let mut state = state();
        state.player.score = 42;
        state.player.pos = Vec2::new(5.0, 5.0);
        state.player.vel = Vec2::new(1.0, 1.0);
        state
            .ballons
            .push(Ballon::new(99, Vec2::new(1.0, 1.0), BallonKind::Common));
        state.phase = GamePhase::GameOver;
        let old_cloud_ids = [state.clouds[0].id, state.clouds[1].id];

        state.restart(100.0);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.player.score, 0);
        assert_eq!(state.player.pos, Vec2::new(600.0, 450.0));
        assert_eq!(state.player.vel, Vec2::ZERO);
        assert!(state.ballons.is_empty());
        assert!((state.deadline - 111.0).abs() < 1e-9);
        assert_ne!(state.clouds[0].id, old_cloud_ids[0]);
        assert_ne!(state.clouds[1].id, old_cloud_ids[1]);
    }

    #[test]
    fn test_seconds_left_floors_and_clamps() {
        let state = state();
        assert_eq!(state.seconds_left(0.0), 11);
        assert_eq!(state.seconds_left(0.5), 10);
        assert_eq!(state.seconds_left(10.99), 0);
        assert_eq!(state.seconds_left(50.0), 0);
    }

    #[test]
    fn test_hud_final_score() {
        let mut state = state();
        state.player.score = 9;
        let hud = state.hud(2.0);
        assert_eq!(hud.seconds_left, 9);
        assert_eq!(hud.final_score, None);

        state.phase = GamePhase::GameOver;
        let hud = state.hud(20.0);
        assert_eq!(hud.phase, GamePhase::GameOver);
        assert_eq!(hud.final_score, Some(9));
        assert_eq!(hud.seconds_left, 0);
    }

    #[test]
    fn test_drain_events() {
        let mut state = state();
        let events = state.drain_events();
        assert_eq!(events.len(), 1);
        assert!(state.events().is_empty());
    }
}
