//! Game state and core simulation types
//!
//! The entity store: player, live projectiles and enemies, run state, and the
//! seeded RNG. Everything a tick reads or writes lives in [`GameState`].

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::spawner::SpawnPlacement;
use crate::consts::*;
use crate::error::{Result, SimError};

/// Current phase of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for the start action
    Ready,
    /// Active gameplay
    Playing,
    /// Frozen until unpaused
    Paused,
    /// Run ended; only a reset leaves this phase
    GameOver,
}

/// Something that happened during the last tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Player fired a projectile
    Fired { projectile_id: u32 },
    /// Enemy appeared at the arena edge
    EnemySpawned { enemy_id: u32 },
    /// Projectile struck an enemy that survived
    EnemyHit { enemy_id: u32, health_left: u32 },
    /// Enemy destroyed and score awarded
    EnemyKilled { enemy_id: u32, score: u64 },
    /// Contact burst applied to the player
    PlayerHurt { amount: f32, health: f32 },
    /// Wave number went up
    WaveChanged { wave: u32 },
    /// Lifecycle transition
    PhaseChanged { from: GamePhase, to: GamePhase },
}

/// Rectangular play area, origin at the top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Arena {
    size: Vec2,
}

impl Arena {
    pub fn new(width: f32, height: f32) -> Result<Self> {
        let min = PLAYER_RADIUS * 2.0;
        if !(width.is_finite() && height.is_finite()) || width <= min || height <= min {
            return Err(SimError::ArenaTooSmall { width, height, min });
        }
        Ok(Self {
            size: Vec2::new(width, height),
        })
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        self.size
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.size * 0.5
    }

    /// Clamp a circle's center so the circle stays inside the arena
    pub fn clamp_circle(&self, pos: Vec2, radius: f32) -> Vec2 {
        pos.clamp(Vec2::splat(radius), self.size - Vec2::splat(radius))
    }

    /// True when a circle at `pos` lies fully inside the arena
    pub fn contains_circle(&self, pos: Vec2, radius: f32) -> bool {
        self.clamp_circle(pos, radius) == pos
    }

    /// True once `pos` is more than `margin` outside the arena
    pub fn is_outside(&self, pos: Vec2, margin: f32) -> bool {
        pos.x < -margin || pos.y < -margin || pos.x > self.size.x + margin || pos.y > self.size.y + margin
    }
}

impl Default for Arena {
    fn default() -> Self {
        Self {
            size: DEFAULT_ARENA_SIZE,
        }
    }
}

/// Static axis-aligned box the player cannot walk through
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub min: Vec2,
    pub max: Vec2,
}

impl Obstacle {
    pub fn new(min: Vec2, max: Vec2) -> Result<Self> {
        if !(min.is_finite() && max.is_finite()) || min.x > max.x || min.y > max.y {
            return Err(SimError::InvalidObstacle);
        }
        Ok(Self { min, max })
    }

    /// Smallest displacement that moves a circle off this box, if it overlaps.
    /// Pushes that would carry the circle out of `arena` lose to any that don't.
    pub fn push_out(&self, pos: Vec2, radius: f32, arena: &Arena) -> Option<Vec2> {
        let lo = self.min - Vec2::splat(radius);
        let hi = self.max + Vec2::splat(radius);
        if pos.x <= lo.x || pos.x >= hi.x || pos.y <= lo.y || pos.y >= hi.y {
            return None;
        }

        // Penetration on each side; resolve along the shallowest one that
        // stays in bounds
        let candidates = [
            Vec2::new(lo.x - pos.x, 0.0),
            Vec2::new(hi.x - pos.x, 0.0),
            Vec2::new(0.0, lo.y - pos.y),
            Vec2::new(0.0, hi.y - pos.y),
        ];
        let escapes = |push: &Vec2| !arena.contains_circle(pos + *push, radius);
        candidates.into_iter().min_by(|a, b| {
            escapes(a)
                .cmp(&escapes(b))
                .then(a.length_squared().total_cmp(&b.length_squared()))
        })
    }
}

/// The player avatar
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
    /// Unit aim direction (zero until the first aim input)
    pub facing: Vec2,
    pub radius: f32,
    pub speed: f32,
}

impl Player {
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            facing: Vec2::ZERO,
            radius: PLAYER_RADIUS,
            speed: PLAYER_SPEED,
        }
    }
}

/// A projectile in flight
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projectile {
    pub id: u32,
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
}

impl Projectile {
    /// Build a projectile; the id is assigned when it enters the store
    pub fn new(pos: Vec2, vel: Vec2) -> Result<Self> {
        if !pos.is_finite() {
            return Err(SimError::NonFinite {
                entity: "projectile",
                field: "position",
            });
        }
        if !vel.is_finite() {
            return Err(SimError::NonFinite {
                entity: "projectile",
                field: "velocity",
            });
        }
        Ok(Self {
            id: 0,
            pos,
            vel,
            radius: PROJECTILE_RADIUS,
        })
    }
}

/// A chasing enemy
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub id: u32,
    pub pos: Vec2,
    pub radius: f32,
    /// Base chase speed before the gait factor
    pub speed: f32,
    pub health: u32,
    /// Shamble phase (radians)
    pub gait_phase: f32,
}

impl Enemy {
    /// Build an enemy; the id is assigned when it enters the store
    pub fn new(pos: Vec2, radius: f32, speed: f32, health: u32) -> Result<Self> {
        if !pos.is_finite() {
            return Err(SimError::NonFinite {
                entity: "enemy",
                field: "position",
            });
        }
        if !radius.is_finite() || radius <= 0.0 {
            return Err(SimError::InvalidRadius {
                entity: "enemy",
                radius,
            });
        }
        if !speed.is_finite() || speed < 0.0 {
            return Err(SimError::InvalidSpeed {
                entity: "enemy",
                speed,
            });
        }
        if health == 0 {
            return Err(SimError::ZeroHealth);
        }
        Ok(Self {
            id: 0,
            pos,
            radius,
            speed,
            health,
            gait_phase: 0.0,
        })
    }

    pub fn with_gait_phase(mut self, phase: f32) -> Self {
        self.gait_phase = phase;
        self
    }

    /// Current multiplier on base speed from the shamble cycle
    #[inline]
    pub fn gait_factor(&self) -> f32 {
        GAIT_BASE + self.gait_phase.sin() * GAIT_AMPLITUDE
    }
}

/// Complete game state (deterministic for a given seed and input stream)
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub rng: Pcg32,
    pub arena: Arena,
    pub obstacles: Vec<Obstacle>,
    pub spawn_placement: SpawnPlacement,
    pub player: Player,
    /// Live projectiles (insertion order)
    pub projectiles: Vec<Projectile>,
    /// Live enemies (insertion order)
    pub enemies: Vec<Enemy>,
    pub score: u64,
    /// Current wave (1-based)
    pub wave: u32,
    /// Player health in [0, PLAYER_MAX_HEALTH]
    pub health: f32,
    pub phase: GamePhase,
    /// Seconds until the next spawn attempt
    pub spawn_timer: f32,
    /// Seconds until contact damage can land again
    pub contact_cooldown: f32,
    /// Simulation tick counter (since last reset)
    pub time_ticks: u64,
    /// Events produced by the last tick
    pub events: Vec<GameEvent>,
    /// Next entity ID
    next_id: u32,
}

impl GameState {
    /// Create a new game state with the given seed in the default arena
    pub fn new(seed: u64) -> Self {
        Self::with_arena(seed, Arena::default())
    }

    pub fn with_arena(seed: u64, arena: Arena) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            arena,
            obstacles: Vec::new(),
            spawn_placement: SpawnPlacement::default(),
            player: Player::new(arena.center()),
            projectiles: Vec::new(),
            enemies: Vec::new(),
            score: 0,
            wave: 1,
            health: PLAYER_MAX_HEALTH,
            phase: GamePhase::Ready,
            spawn_timer: 0.0,
            contact_cooldown: 0.0,
            time_ticks: 0,
            events: Vec::new(),
            next_id: 1,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Store a projectile, returning its new id
    pub fn add_projectile(&mut self, mut projectile: Projectile) -> u32 {
        projectile.id = self.next_entity_id();
        let id = projectile.id;
        self.projectiles.push(projectile);
        id
    }

    /// Store an enemy, returning its new id
    pub fn add_enemy(&mut self, mut enemy: Enemy) -> u32 {
        enemy.id = self.next_entity_id();
        let id = enemy.id;
        self.enemies.push(enemy);
        id
    }

    /// Remove the projectile at `index`, keeping the order of the rest
    pub fn remove_projectile_at(&mut self, index: usize) -> Option<Projectile> {
        (index < self.projectiles.len()).then(|| self.projectiles.remove(index))
    }

    /// Remove the enemy at `index`, keeping the order of the rest
    pub fn remove_enemy_at(&mut self, index: usize) -> Option<Enemy> {
        (index < self.enemies.len()).then(|| self.enemies.remove(index))
    }

    pub fn retain_projectiles(&mut self, keep: impl FnMut(&Projectile) -> bool) {
        self.projectiles.retain(keep);
    }

    pub fn retain_enemies(&mut self, keep: impl FnMut(&Enemy) -> bool) {
        self.enemies.retain(keep);
    }

    /// Place a static obstacle in the arena
    pub fn add_obstacle(&mut self, obstacle: Obstacle) {
        self.obstacles.push(obstacle);
    }

    /// Swap in new play bounds and pull the player back inside
    pub fn set_arena(&mut self, arena: Arena) {
        self.arena = arena;
        self.player.pos = arena.clamp_circle(self.player.pos, self.player.radius);
    }

    /// Return run state, collections and player to their start values and
    /// resume play.
    ///
    /// Arena, obstacles, seed, RNG stream and the id counter are kept.
    pub fn reset(&mut self) {
        self.phase = GamePhase::Playing;
        self.projectiles.clear();
        self.enemies.clear();
        self.score = 0;
        self.wave = 1;
        self.health = PLAYER_MAX_HEALTH;
        self.spawn_timer = 0.0;
        self.contact_cooldown = 0.0;
        self.time_ticks = 0;
        self.player = Player::new(self.arena.center());
    }
}
