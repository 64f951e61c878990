//! Collaborator seams
//!
//! The game core only ever reaches the outside world through these traits.
//! `backend` implements them on top of macroquad; tests use fakes.

use macroquad::color::Color;
use macroquad::math::Vec2;

use crate::sprite::Sprite;

/// Logical controls the core can ask about.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Control {
    Jump,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SoundId {
    /// Menu ambience.
    Intro,
    /// Looping in-round music.
    Background,
    Jump,
    GameOver,
}

impl SoundId {
    pub const ALL: [SoundId; 4] = [
        SoundId::Intro,
        SoundId::Background,
        SoundId::Jump,
        SoundId::GameOver,
    ];

    /// Looping tracks, as opposed to one-shot effects.
    pub fn is_music(self) -> bool {
        matches!(self, SoundId::Intro | SoundId::Background)
    }
}

pub trait Clock {
    /// Milliseconds since the process started.
    fn now_ms(&self) -> u64;
}

pub trait Input {
    fn is_key_down(&self, control: Control) -> bool;
    /// Primary-button clicks since the last frame, in screen coordinates.
    fn pointer_clicks(&self) -> Vec<Vec2>;
}

pub trait Audio {
    fn play(&mut self, sound: SoundId, volume: f32, looped: bool);
    fn stop(&mut self, sound: SoundId);
}

pub trait Renderer {
    fn clear(&mut self, color: Color);
    fn draw_sprite(&mut self, sprite: Sprite, top_left: Vec2);
    fn draw_text_centered(&mut self, text: &str, center: Vec2, color: Color);
}
