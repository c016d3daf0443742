use rand::Rng;

use super::geometry::{Rect, Rgb, Sprite};
use crate::config::{
    STAR_COLOR_JITTER, STAR_MAX_SIZE, STAR_MAX_X, STAR_MAX_Y, STAR_MIN_SIZE, STAR_TWINKLE_RANGE,
};

/// Background star. Bigger stars fall faster, which gives the field some depth.
#[derive(Debug, Clone)]
pub struct Star {
    pub x: i32,
    pub y: i32,
    pub size: i32,
    pub color: Rgb,
    pub visible: bool,
}

impl Star {
    pub fn new(x: i32, size: i32, color: Rgb) -> Self {
        Self {
            x,
            y: 0,
            size,
            color,
            visible: true,
        }
    }

    /// New star at the top edge with random column, size and tint
    pub fn spawn<R: Rng>(rng: &mut R) -> Self {
        let size = rng.random_range(STAR_MIN_SIZE..=STAR_MAX_SIZE);
        let mut channel = || 255 - rng.random_range(0..=STAR_COLOR_JITTER);
        let color = Rgb(channel(), channel(), channel());
        let x = rng.random_range(0..=STAR_MAX_X);
        Self::new(x, size, color)
    }

    pub fn speed(&self) -> i32 {
        self.size / 2
    }

    pub fn twinkle(&mut self) {
        self.visible = !self.visible;
    }

    /// Twinkles with a 1 in 121 chance, then falls by its speed.
    /// Returns false once the star has dropped past the bottom and should go.
    pub fn update<R: Rng>(&mut self, rng: &mut R) -> bool {
        if rng.random_range(0..=STAR_TWINKLE_RANGE) == 1 {
            self.twinkle();
        }
        if self.y > STAR_MAX_Y {
            return false;
        }
        self.y += self.speed();
        true
    }
}

impl Sprite for Star {
    fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, self.size, self.size)
    }

    fn fill(&self) -> Option<Rgb> {
        self.visible.then_some(self.color)
    }
}
