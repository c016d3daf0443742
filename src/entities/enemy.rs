use rand::Rng;

use super::geometry::{Rect, Rgb, Sprite};
use super::projectile::Projectile;
use crate::config::{
    ENEMY_COLUMNS, ENEMY_FIRE_FACTOR, ENEMY_ORIGIN, ENEMY_ROWS, ENEMY_SIZE, ENEMY_SPACING,
    HOSTILE_SPREAD_X,
};

#[derive(Debug, Clone)]
pub struct Enemy {
    pub x: i32,
    pub y: i32,
    pub color: Rgb,
    /// Horizontal step per tick, -1 or 1. Every enemy carries the same value.
    pub direction: i32,
}

impl Enemy {
    pub fn new(x: i32, y: i32, color: Rgb) -> Self {
        Self {
            x,
            y,
            color,
            direction: 1,
        }
    }

    /// Enemy for the given grid cell; position and color both follow from it
    pub fn at_grid(column: i32, row: i32) -> Self {
        let x = ENEMY_ORIGIN + ENEMY_SPACING * column;
        let y = ENEMY_ORIGIN + ENEMY_SPACING * row;
        Self::new(x, y, grid_color(column, row))
    }

    /// Full starting grid, column-major
    pub fn spawn_grid() -> Vec<Enemy> {
        (0..ENEMY_COLUMNS)
            .flat_map(|column| (0..ENEMY_ROWS).map(move |row| Enemy::at_grid(column, row)))
            .collect()
    }

    pub fn update(&mut self) {
        self.x += self.direction;
    }

    /// Rolls the per-tick fire chance. Odds are 1 in (20 * live_enemies + 1),
    /// so survivors shoot more often as the formation thins out.
    pub fn try_fire<R: Rng>(&self, live_enemies: usize, rng: &mut R) -> Option<Projectile> {
        let live = u32::try_from(live_enemies).unwrap_or(u32::MAX);
        let upper = ENEMY_FIRE_FACTOR.saturating_mul(live);
        if rng.random_range(0..=upper) != 1 {
            return None;
        }
        let drift = rng.random_range(-HOSTILE_SPREAD_X..=HOSTILE_SPREAD_X);
        Some(Projectile::hostile(self.x + ENEMY_SIZE / 2, self.y, drift))
    }
}

fn grid_color(column: i32, row: i32) -> Rgb {
    let channel = |value: i32| value.clamp(0, 255) as u8;
    Rgb(
        channel(column * 25),
        channel(row * 40),
        channel(120 + column * row / 5),
    )
}

impl Sprite for Enemy {
    fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, ENEMY_SIZE, ENEMY_SIZE)
    }

    fn fill(&self) -> Option<Rgb> {
        Some(self.color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_spawn_grid_layout() {
        let enemies = Enemy::spawn_grid();
        assert_eq!(enemies.len(), 60);

        let first = &enemies[0];
        assert_eq!((first.x, first.y), (40, 40));
        assert_eq!(first.direction, 1);

        let last = &enemies[59];
        assert_eq!((last.x, last.y), (490, 290));
    }

    #[test]
    fn test_grid_colors() {
        assert_eq!(Enemy::at_grid(0, 0).color, Rgb(0, 0, 120));
        assert_eq!(Enemy::at_grid(9, 5).color, Rgb(225, 200, 129));
        assert_eq!(Enemy::at_grid(3, 2).color, Rgb(75, 80, 121));
    }

    #[test]
    fn test_enemy_update_follows_direction() {
        let mut enemy = Enemy::at_grid(0, 0);
        enemy.update();
        assert_eq!(enemy.x, 41);

        enemy.direction = -1;
        enemy.update();
        enemy.update();
        assert_eq!(enemy.x, 39);
    }

    #[test]
    fn test_enemy_fire_spawns_hostile_projectile() {
        let enemy = Enemy::at_grid(2, 1);
        let mut rng = StdRng::seed_from_u64(3);

        // With a single live enemy the odds are 1 in 21, so a shot turns up quickly
        let projectile = (0..10_000)
            .find_map(|_| enemy.try_fire(1, &mut rng))
            .expect("enemy should eventually fire");

        assert!(!projectile.is_friendly());
        assert_eq!((projectile.x, projectile.y), (enemy.x + 10, enemy.y));
        assert_eq!(projectile.velocity_y, 3);
        assert!((-2..=2).contains(&projectile.velocity_x));
    }

    #[test]
    fn test_enemy_fire_rate_rises_as_formation_thins() {
        let enemy = Enemy::at_grid(0, 0);
        let mut rng = StdRng::seed_from_u64(11);
        let trials = 20_000;

        let shots_full = (0..trials)
            .filter(|_| enemy.try_fire(60, &mut rng).is_some())
            .count();
        let shots_last = (0..trials)
            .filter(|_| enemy.try_fire(1, &mut rng).is_some())
            .count();

        assert!(shots_last > shots_full);
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn test_huge_live_count_saturates_instead_of_wrapping() {
        let enemy = Enemy::at_grid(0, 0);
        let mut rng = StdRng::seed_from_u64(9);
        // Would truncate to 1 live enemy (odds 1 in 21) if narrowed with `as`
        let live = u32::MAX as usize + 2;

        let shots = (0..5_000)
            .filter(|_| enemy.try_fire(live, &mut rng).is_some())
            .count();
        assert_eq!(shots, 0);
    }
}
