use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

/// Playfield width in world pixels
pub const SCREEN_WIDTH: i32 = 600;
/// Playfield height in world pixels
pub const SCREEN_HEIGHT: i32 = 700;
/// Projectiles survive until they leave [0, SCREEN_WIDTH] x [0, PROJECTILE_MAX_Y]
pub const PROJECTILE_MAX_Y: i32 = 800;

pub const SHIP_SIZE: i32 = 20;
pub const SHIP_START_X: i32 = 300;
pub const SHIP_START_Y: i32 = 650;
pub const SHIP_STEP: i32 = 5;
/// Rightmost x an entity of SHIP_SIZE / ENEMY_SIZE can occupy
pub const MAX_X: i32 = SCREEN_WIDTH - SHIP_SIZE;
pub const STARTING_LIVES: u32 = 3;

pub const ENEMY_SIZE: i32 = 20;
pub const ENEMY_COLUMNS: i32 = 10;
pub const ENEMY_ROWS: i32 = 6;
pub const ENEMY_ORIGIN: i32 = 40;
pub const ENEMY_SPACING: i32 = 50;
/// Fire odds are 1 in (ENEMY_FIRE_FACTOR * live enemies + 1)
pub const ENEMY_FIRE_FACTOR: u32 = 20;

pub const PROJECTILE_WIDTH: i32 = 4;
pub const PROJECTILE_HEIGHT: i32 = 10;
pub const FRIENDLY_VELOCITY: (i32, i32) = (0, -4);
pub const HOSTILE_SPEED_Y: i32 = 3;
pub const HOSTILE_SPREAD_X: i32 = 2;
/// Admission cap on concurrently live friendly projectiles
pub const MAX_FRIENDLY_PROJECTILES: usize = 7;

/// Without release events, a fire press this soon after the first one is
/// taken as the terminal's initial auto-repeat of a held key
pub const FIRE_REPEAT_DELAY: Duration = Duration::from_millis(600);
/// Gap allowed between auto-repeats once they have started
pub const FIRE_REPEAT_INTERVAL: Duration = Duration::from_millis(150);

pub const STAR_SPAWN_RANGE: u32 = 20;
pub const STAR_TWINKLE_RANGE: u32 = 120;
pub const STAR_MAX_X: i32 = 596;
pub const STAR_MAX_Y: i32 = 700;
pub const STAR_MIN_SIZE: i32 = 3;
pub const STAR_MAX_SIZE: i32 = 5;
pub const STAR_COLOR_JITTER: u8 = 80;

pub const FRIENDLY_FIRE_VOLUME: f32 = 0.6;
pub const HOSTILE_FIRE_VOLUME: f32 = 0.15;
pub const HIT_VOLUME: f32 = 0.3;
pub const MUSIC_VOLUME: f32 = 1.0;

pub const DEFAULT_TICK_RATE: u32 = 60;
pub const DEFAULT_END_SCREEN_SECS: u64 = 10;
pub const DEFAULT_ASSETS_DIR: &str = "assets";
pub const DEFAULT_LOG_FILE: &str = "galaga-debug.log";

/// Runtime settings taken from the command line
#[derive(Debug, Clone, PartialEq, Eq, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Settings {
    /// Game ticks per second
    #[arg(long, default_value_t = DEFAULT_TICK_RATE, value_parser = clap::value_parser!(u32).range(1..=240))]
    pub tick_rate: u32,

    /// Seconds the win/loss screen stays up before exiting
    #[arg(long = "end-screen-secs", default_value_t = DEFAULT_END_SCREEN_SECS)]
    pub end_screen_secs: u64,

    /// Directory holding the sound files
    #[arg(long, default_value = DEFAULT_ASSETS_DIR)]
    pub assets: PathBuf,

    /// Disable all audio
    #[arg(long)]
    pub mute: bool,

    /// Seed for the game RNG (random when omitted)
    #[arg(long)]
    pub seed: Option<u64>,

    /// File that receives log output
    #[arg(long, default_value = DEFAULT_LOG_FILE)]
    pub log_file: PathBuf,
}

impl Settings {
    pub fn tick_duration(&self) -> Duration {
        Duration::from_secs(1) / self.tick_rate
    }

    pub fn end_screen_hold(&self) -> Duration {
        Duration::from_secs(self.end_screen_secs)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            tick_rate: DEFAULT_TICK_RATE,
            end_screen_secs: DEFAULT_END_SCREEN_SECS,
            assets: PathBuf::from(DEFAULT_ASSETS_DIR),
            mute: false,
            seed: None,
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.tick_rate, 60);
        assert_eq!(settings.end_screen_hold(), Duration::from_secs(10));
        assert!(!settings.mute);
    }

    #[test]
    fn test_default_matches_empty_command_line() {
        assert_eq!(Settings::parse_from(["galaga"]), Settings::default());
    }

    #[test]
    fn test_parse_cli_args() {
        let settings = Settings::parse_from([
            "galaga",
            "--tick-rate",
            "30",
            "--end-screen-secs",
            "2",
            "--mute",
            "--seed",
            "7",
        ]);
        assert_eq!(settings.tick_rate, 30);
        assert_eq!(settings.end_screen_hold(), Duration::from_secs(2));
        assert!(settings.mute);
        assert_eq!(settings.seed, Some(7));
    }

    #[test]
    fn test_tick_duration() {
        let settings = Settings::default();
        assert_eq!(settings.tick_duration(), Duration::from_secs(1) / 60);
    }

    #[test]
    fn test_rejects_zero_tick_rate() {
        let result = Settings::try_parse_from(["galaga", "--tick-rate", "0"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_max_x_leaves_room_for_ship() {
        assert_eq!(MAX_X, 580);
    }
}
