mod enemy;
pub mod formation;
mod game_state;
mod geometry;
mod overlay;
mod projectile;
mod ship;
mod star;

// Re-export all public types
pub use enemy::Enemy;
pub use game_state::GameState;
pub use geometry::{Rect, Rgb, Sprite};
pub use overlay::{Overlay, RoundResult};
pub use projectile::{Projectile, ProjectileOwner};
pub use ship::Ship;
pub use star::Star;
