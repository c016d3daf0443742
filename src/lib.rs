// Library exports for the binary and the integration tests
pub use entities::{
    Enemy, GameState, Overlay, Projectile, ProjectileOwner, Rect, Rgb, RoundResult, Ship, Sprite,
    Star,
};
pub use game::{Game, GameEvent, SoundCue, TickReport};
pub use input::InputAction;

pub mod app;
pub mod audio;
pub mod config;
pub mod entities;
pub mod game;
pub mod input;
pub mod pacer;
pub mod renderer;
