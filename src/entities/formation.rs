//! Shared horizontal movement of the enemy grid.
//!
//! The whole formation bounces as one: as soon as any enemy sits on either
//! playfield edge, every enemy's direction is flipped. The edge scan always
//! runs over pre-movement positions so a reversal can only happen once per
//! tick.

use super::enemy::Enemy;
use crate::config::MAX_X;

/// -1 if any enemy is touching an edge, 1 otherwise
pub fn direction_multiplier(enemies: &[Enemy]) -> i32 {
    if enemies.iter().any(|e| e.x <= 0 || e.x >= MAX_X) {
        -1
    } else {
        1
    }
}

/// Applies the edge rule, then moves every enemy one step.
/// Returns true when the formation reversed this tick.
pub fn advance(enemies: &mut [Enemy]) -> bool {
    let multiplier = direction_multiplier(enemies);
    for enemy in enemies.iter_mut() {
        enemy.direction *= multiplier;
    }
    for enemy in enemies.iter_mut() {
        enemy.update();
    }
    multiplier < 0
}
