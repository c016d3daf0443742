use super::geometry::{Rect, Rgb, Sprite};
use super::projectile::Projectile;
use crate::config::{MAX_X, SHIP_SIZE, SHIP_START_X, SHIP_START_Y, SHIP_STEP};

const SHIP_COLOR: Rgb = Rgb(20, 100, 0);

/// The player's ship. Only moves horizontally.
#[derive(Debug, Clone)]
pub struct Ship {
    pub x: i32,
    pub y: i32,
}

impl Default for Ship {
    fn default() -> Self {
        Self::new(SHIP_START_X, SHIP_START_Y)
    }
}

impl Ship {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn move_left(&mut self) {
        self.x = (self.x - SHIP_STEP).max(0);
    }

    pub fn move_right(&mut self) {
        self.x = (self.x + SHIP_STEP).min(MAX_X);
    }

    /// Projectile launched from the middle of the ship, straight up
    pub fn fire(&self) -> Projectile {
        Projectile::friendly(self.x + SHIP_SIZE / 2, self.y)
    }
}

impl Sprite for Ship {
    fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, SHIP_SIZE, SHIP_SIZE)
    }

    fn fill(&self) -> Option<Rgb> {
        Some(SHIP_COLOR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ship_default_position() {
        let ship = Ship::default();
        assert_eq!(ship.x, 300);
        assert_eq!(ship.y, 650);
    }

    #[test]
    fn test_ship_movement_left() {
        let mut ship = Ship::new(10, 650);
        ship.move_left();
        assert_eq!(ship.x, 5);

        // Clamped at the left wall
        ship.x = 3;
        ship.move_left();
        assert_eq!(ship.x, 0);
        ship.move_left();
        assert_eq!(ship.x, 0);
    }

    #[test]
    fn test_ship_movement_right() {
        let mut ship = Ship::new(300, 650);
        ship.move_right();
        assert_eq!(ship.x, 305);

        ship.x = 578;
        ship.move_right();
        assert_eq!(ship.x, 580);
        ship.move_right();
        assert_eq!(ship.x, 580);
    }

    #[test]
    fn test_ship_fire_from_center() {
        let ship = Ship::new(300, 650);
        let projectile = ship.fire();
        assert!(projectile.is_friendly());
        assert_eq!((projectile.x, projectile.y), (310, 650));
        assert_eq!((projectile.velocity_x, projectile.velocity_y), (0, -4));
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn test_ship_stays_in_bounds_x(
                initial_x in 0i32..=580,
                moves in prop::collection::vec(prop::bool::ANY, 0..300)
            ) {
                let mut ship = Ship::new(initial_x, 650);
                for move_right in moves {
                    if move_right {
                        ship.move_right();
                    } else {
                        ship.move_left();
                    }
                    prop_assert!((0..=580).contains(&ship.x));
                }
            }
        }
    }
}
