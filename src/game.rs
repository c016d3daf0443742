//! Per-round game state and the fixed-step tick that drives it.
//!
//! [`Game::tick`] runs one step in a fixed order: input and queued life
//! losses, star spawn, enemy fire, projectile lifecycle, formation movement,
//! star drift, then the win check. Drawing happens outside, from the state the
//! tick leaves behind.

use log::{debug, info, trace};
use rand::Rng;

use crate::config::{MAX_FRIENDLY_PROJECTILES, STAR_SPAWN_RANGE, STARTING_LIVES};
use crate::entities::{
    Enemy, GameState, Overlay, Projectile, RoundResult, Ship, Sprite, Star, formation,
};
use crate::input::InputAction;

/// Events raised during one tick and handled at the start of the next
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    LifeLost,
}

/// Sounds the audio layer should play for a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundCue {
    FriendlyFire,
    HostileFire,
    Hit,
}

/// What happened during a tick, for the collaborators outside the core
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TickReport {
    pub cues: Vec<SoundCue>,
}

#[derive(Debug, Clone)]
pub struct Game {
    state: GameState,
    ship: Ship,
    enemies: Vec<Enemy>,
    projectiles: Vec<Projectile>,
    stars: Vec<Star>,
    score: u32,
    lives: u32,
    enemies_destroyed: u32,
    /// Set once a shot leaves on the current fire press; cleared on release
    fire_held: bool,
    pending_events: Vec<GameEvent>,
    result: Option<RoundResult>,
    tick_count: u64,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Fresh round: ship at its start position and the full enemy grid
    pub fn new() -> Self {
        Self::from_parts(Ship::default(), Enemy::spawn_grid())
    }

    pub fn from_parts(ship: Ship, enemies: Vec<Enemy>) -> Self {
        info!("round started with {} enemies", enemies.len());
        Self {
            state: GameState::Playing,
            ship,
            enemies,
            projectiles: Vec::new(),
            stars: Vec::new(),
            score: 0,
            lives: STARTING_LIVES,
            enemies_destroyed: 0,
            fire_held: false,
            pending_events: Vec::new(),
            result: None,
            tick_count: 0,
        }
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn ship(&self) -> &Ship {
        &self.ship
    }

    pub fn enemies(&self) -> &[Enemy] {
        &self.enemies
    }

    pub fn projectiles(&self) -> &[Projectile] {
        &self.projectiles
    }

    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lives(&self) -> u32 {
        self.lives
    }

    pub fn enemies_destroyed(&self) -> u32 {
        self.enemies_destroyed
    }

    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    pub fn result(&self) -> Option<RoundResult> {
        self.result
    }

    pub fn overlay(&self) -> Overlay {
        Overlay {
            score: self.score,
            lives: self.lives,
        }
    }

    pub fn friendly_count(&self) -> usize {
        self.projectiles.iter().filter(|p| p.is_friendly()).count()
    }

    /// Adds a projectile that is already in flight
    pub fn push_projectile(&mut self, projectile: Projectile) {
        self.projectiles.push(projectile);
    }

    /// Advance the round by one tick. Does nothing once the round is over.
    pub fn tick<R: Rng>(&mut self, actions: &[InputAction], rng: &mut R) -> TickReport {
        let mut report = TickReport::default();
        if self.state.is_over() {
            return report;
        }
        self.tick_count += 1;

        for action in actions {
            self.apply_action(*action, &mut report);
        }
        self.drain_events();
        if self.state.is_over() {
            return report;
        }

        if rng.random_range(0..=STAR_SPAWN_RANGE) == 1 {
            self.stars.push(Star::spawn(rng));
        }

        self.enemy_fire(rng, &mut report);
        self.resolve_projectiles(&mut report);

        if formation::advance(&mut self.enemies) {
            debug!("formation reversed at tick {}", self.tick_count);
        }

        self.stars.retain_mut(|star| star.update(rng));

        if self.enemies.is_empty() {
            self.finish(true);
        }

        report
    }

    fn apply_action(&mut self, action: InputAction, report: &mut TickReport) {
        match action {
            InputAction::MoveLeft => self.ship.move_left(),
            InputAction::MoveRight => self.ship.move_right(),
            InputAction::Fire => {
                if !self.fire_held && self.friendly_count() < MAX_FRIENDLY_PROJECTILES {
                    let projectile = self.ship.fire();
                    trace!("player fired from ({}, {})", projectile.x, projectile.y);
                    self.projectiles.push(projectile);
                    self.fire_held = true;
                    report.cues.push(SoundCue::FriendlyFire);
                }
            }
            InputAction::FireReleased => self.fire_held = false,
            // Handled by the app loop
            InputAction::Quit => {}
        }
    }

    fn drain_events(&mut self) {
        for event in std::mem::take(&mut self.pending_events) {
            match event {
                GameEvent::LifeLost => {
                    self.lives = self.lives.saturating_sub(1);
                    debug!("life lost, {} remaining", self.lives);
                    if self.lives == 0 {
                        self.finish(false);
                        return;
                    }
                }
            }
        }
    }

    fn enemy_fire<R: Rng>(&mut self, rng: &mut R, report: &mut TickReport) {
        let live = self.enemies.len();
        for enemy in &self.enemies {
            if let Some(projectile) = enemy.try_fire(live, rng) {
                self.projectiles.push(projectile);
                report.cues.push(SoundCue::HostileFire);
            }
        }
    }

    fn resolve_projectiles(&mut self, report: &mut TickReport) {
        let ship_bounds = self.ship.bounds();
        let in_flight = std::mem::take(&mut self.projectiles);
        let mut survivors = Vec::with_capacity(in_flight.len());

        for mut projectile in in_flight {
            if projectile.is_out_of_bounds() {
                continue;
            }

            let bounds = projectile.bounds();
            if projectile.is_friendly() {
                if let Some(idx) = self.enemies.iter().position(|e| e.bounds().overlaps(&bounds)) {
                    self.enemies.remove(idx);
                    self.score += 1;
                    self.enemies_destroyed += 1;
                    report.cues.push(SoundCue::Hit);
                    continue;
                }
            } else if ship_bounds.overlaps(&bounds) {
                self.pending_events.push(GameEvent::LifeLost);
                report.cues.push(SoundCue::Hit);
                continue;
            }

            projectile.update();
            survivors.push(projectile);
        }

        self.projectiles = survivors;
    }

    fn finish(&mut self, won: bool) {
        self.state = if won { GameState::Won } else { GameState::Lost };
        let result = RoundResult {
            won,
            final_score: self.score,
        };
        info!("{} after {} ticks", result, self.tick_count);
        self.result = Some(result);
    }
}
