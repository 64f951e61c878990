//! Astro Hopper: Grassland Adventure
//!
//! Core modules are headless and talk to the outside world through the
//! traits in [`platform`]. The macroquad-backed collaborators live in
//! [`assets`] and [`backend`].

pub mod actor;
pub mod asset_gen;
pub mod assets;
pub mod backend;
pub mod background;
pub mod collision;
pub mod game;
pub mod obstacle;
pub mod platform;
pub mod player;
pub mod render;
pub mod rules;
pub mod score;
pub mod spawner;
pub mod sprite;

pub use game::{Game, Phase};
pub use rules::GameRules;

/// Fixed gameplay constants.
pub mod consts {
    pub const SCREEN_WIDTH: f32 = 800.0;
    pub const SCREEN_HEIGHT: f32 = 400.0;

    /// Bottom edge of everything standing on the grass.
    pub const GROUND_LINE: f32 = 300.0;

    pub const PLAYER_START_X: f32 = 80.0;
    pub const JUMP_IMPULSE: i32 = -20;
    pub const GRAVITY: i32 = 1;
    pub const PLAYER_ANIMATION_SPEED: f32 = 0.1;

    /// Leftward scroll applied to every obstacle each frame.
    pub const SCROLL_SPEED: f32 = 6.0;
    pub const DESPAWN_X: f32 = -100.0;
    pub const SPAWN_X_MIN: i32 = 900;
    pub const SPAWN_X_MAX: i32 = 1100;

    pub const SKY_SCROLL: f32 = 1.0;
    pub const GROUND_SCROLL: f32 = 3.0;
}
