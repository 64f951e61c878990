//! macroquad implementations of the collaborator traits.

use macroquad::audio::{self, PlaySoundParams};
use macroquad::prelude::*;

use crate::actor::Actor;
use crate::assets::Assets;
use crate::game::{Game, Phase};
use crate::platform::{Audio, Clock, Control, Input, Renderer, SoundId};
use crate::rules::{GameRules, KeyBindings};
use crate::sprite::Sprite;

pub struct FrameClock;

impl Clock for FrameClock {
    fn now_ms(&self) -> u64 {
        (get_time() * 1000.0) as u64
    }
}

pub struct KeyboardMouse {
    pub keys: KeyBindings,
}

impl KeyboardMouse {
    pub fn quit_requested(&self) -> bool {
        is_key_pressed(self.keys.quit)
    }
}

impl Input for KeyboardMouse {
    fn is_key_down(&self, control: Control) -> bool {
        match control {
            Control::Jump => {
                is_key_down(self.keys.jump_primary)
                    || self.keys.jump_alt.map_or(false, is_key_down)
            }
        }
    }

    fn pointer_clicks(&self) -> Vec<Vec2> {
        if is_mouse_button_pressed(MouseButton::Left) {
            let (x, y) = mouse_position();
            vec![vec2(x, y)]
        } else {
            Vec::new()
        }
    }
}

pub struct Speaker<'a> {
    pub assets: &'a Assets,
    pub sfx_enabled: bool,
    pub music_enabled: bool,
}

impl<'a> Speaker<'a> {
    pub fn new(assets: &'a Assets, rules: &GameRules) -> Self {
        Self {
            assets,
            sfx_enabled: rules.sfx_enabled,
            music_enabled: rules.music_enabled,
        }
    }
}

impl Audio for Speaker<'_> {
    fn play(&mut self, sound: SoundId, volume: f32, looped: bool) {
        let enabled = if sound.is_music() {
            self.music_enabled
        } else {
            self.sfx_enabled
        };
        if !enabled {
            return;
        }
        if let Some(s) = self.assets.sound(sound) {
            audio::play_sound(s, PlaySoundParams { looped, volume });
        }
    }

    fn stop(&mut self, sound: SoundId) {
        if let Some(s) = self.assets.sound(sound) {
            audio::stop_sound(s);
        }
    }
}

pub struct Screen<'a> {
    pub assets: &'a Assets,
    pub font_size: u16,
}

impl Renderer for Screen<'_> {
    fn clear(&mut self, color: Color) {
        clear_background(color);
    }

    fn draw_sprite(&mut self, sprite: Sprite, top_left: Vec2) {
        if let Some(tex) = self.assets.texture(sprite) {
            draw_texture(tex, top_left.x, top_left.y, WHITE);
        }
    }

    fn draw_text_centered(&mut self, text: &str, center: Vec2, color: Color) {
        let font = self.assets.font.as_ref();
        let dims = measure_text(text, font, self.font_size, 1.0);
        draw_text_ex(
            text,
            center.x - dims.width / 2.0,
            center.y - dims.height / 2.0 + dims.offset_y,
            TextParams {
                font,
                font_size: self.font_size,
                color,
                ..Default::default()
            },
        );
    }
}

/// Outlines every actor rect and the menu's click regions.
pub fn debug_draw(game: &Game) {
    if let Some(player) = &game.player {
        let r = player.rect();
        draw_rectangle_lines(r.x, r.y, r.w, r.h, 1.0, BLUE);
    }
    for obstacle in &game.obstacles {
        let r = obstacle.rect();
        draw_rectangle_lines(r.x, r.y, r.w, r.h, 1.0, RED);
    }
    if game.phase == Phase::Menu {
        for (_, r) in game.selection_regions() {
            draw_rectangle_lines(r.x, r.y, r.w, r.h, 1.0, YELLOW);
        }
    }
}
