use super::geometry::{Rect, Rgb, Sprite};
use crate::config::{
    FRIENDLY_VELOCITY, HOSTILE_SPEED_Y, PROJECTILE_HEIGHT, PROJECTILE_MAX_Y, PROJECTILE_WIDTH,
    SCREEN_WIDTH,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectileOwner {
    Player,
    Enemy,
}

#[derive(Debug, Clone)]
pub struct Projectile {
    pub x: i32,
    pub y: i32,
    pub velocity_x: i32,
    pub velocity_y: i32,
    /// Fixed at construction; decides which collisions apply
    owner: ProjectileOwner,
}

impl Projectile {
    /// Player shot travelling straight up
    pub fn friendly(x: i32, y: i32) -> Self {
        Self {
            x,
            y,
            velocity_x: FRIENDLY_VELOCITY.0,
            velocity_y: FRIENDLY_VELOCITY.1,
            owner: ProjectileOwner::Player,
        }
    }

    /// Enemy shot falling at a fixed speed with some sideways drift
    pub fn hostile(x: i32, y: i32, velocity_x: i32) -> Self {
        Self {
            x,
            y,
            velocity_x,
            velocity_y: HOSTILE_SPEED_Y,
            owner: ProjectileOwner::Enemy,
        }
    }

    pub fn owner(&self) -> ProjectileOwner {
        self.owner
    }

    pub fn is_friendly(&self) -> bool {
        self.owner == ProjectileOwner::Player
    }

    pub fn update(&mut self) {
        self.x += self.velocity_x;
        self.y += self.velocity_y;
    }

    pub fn is_out_of_bounds(&self) -> bool {
        self.x < 0 || self.x > SCREEN_WIDTH || self.y < 0 || self.y > PROJECTILE_MAX_Y
    }
}

impl Sprite for Projectile {
    fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, PROJECTILE_WIDTH, PROJECTILE_HEIGHT)
    }

    fn fill(&self) -> Option<Rgb> {
        match self.owner {
            ProjectileOwner::Player => Some(Rgb::WHITE),
            ProjectileOwner::Enemy => Some(Rgb::RED),
        }
    }
}
