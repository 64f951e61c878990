use macroquad::math::{vec2, Vec2};

use crate::consts::{GROUND_LINE, GROUND_SCROLL, SKY_SCROLL};
use crate::sprite::Sprite;

/// One horizontally tiled strip.
#[derive(Clone, Debug, PartialEq)]
pub struct ScrollLayer {
    pub sprite: Sprite,
    pub offset: f32,
    pub tile_width: f32,
    pub speed: f32,
    pub y: f32,
    pub tiles: usize,
}

impl ScrollLayer {
    pub fn new(sprite: Sprite, tile_width: f32, speed: f32, y: f32, screen_width: f32) -> Self {
        let tile_width = tile_width.max(1.0);
        Self {
            sprite,
            offset: 0.0,
            tile_width,
            speed,
            y,
            tiles: (screen_width / tile_width).ceil() as usize + 1,
        }
    }

    pub fn advance(&mut self) {
        self.offset -= self.speed;
        if self.offset.abs() > self.tile_width {
            self.offset = 0.0;
        }
    }

    /// Top-left corners of every tile for the current offset.
    pub fn tile_positions(&self) -> impl Iterator<Item = Vec2> + '_ {
        (0..self.tiles).map(move |i| vec2(i as f32 * self.tile_width + self.offset, self.y))
    }
}

/// Sky and ground, scrolled at different speeds for parallax.
#[derive(Clone, Debug, PartialEq)]
pub struct Background {
    pub far: ScrollLayer,
    pub near: ScrollLayer,
}

impl Background {
    pub fn new(sky_width: f32, ground_width: f32, screen_width: f32) -> Self {
        Self {
            far: ScrollLayer::new(Sprite::Sky, sky_width, SKY_SCROLL, 0.0, screen_width),
            near: ScrollLayer::new(
                Sprite::Ground,
                ground_width,
                GROUND_SCROLL,
                GROUND_LINE,
                screen_width,
            ),
        }
    }

    pub fn advance(&mut self) {
        self.far.advance();
        self.near.advance();
    }

    pub fn layers(&self) -> [&ScrollLayer; 2] {
        [&self.far, &self.near]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tile_count_covers_screen_plus_one() {
        let bg = Background::new(800.0, 300.0, 800.0);
        assert_eq!(bg.far.tiles, 2);
        assert_eq!(bg.near.tiles, 4);
    }

    #[test]
    fn layers_scroll_at_their_own_speed() {
        let mut bg = Background::new(800.0, 800.0, 800.0);
        for _ in 0..10 {
            bg.advance();
        }
        assert_eq!(bg.far.offset, -10.0);
        assert_eq!(bg.near.offset, -30.0);
    }

    #[test]
    fn offset_wraps_once_past_tile_width() {
        let mut layer = ScrollLayer::new(Sprite::Ground, 9.0, 3.0, 300.0, 800.0);
        layer.advance();
        layer.advance();
        layer.advance();
        // |-9| is not greater than 9 yet.
        assert_eq!(layer.offset, -9.0);
        layer.advance();
        assert_eq!(layer.offset, 0.0);
        for _ in 0..100 {
            layer.advance();
            assert!(layer.offset <= 0.0 && layer.offset >= -layer.tile_width);
        }
    }

    #[test]
    fn tiles_start_at_offset() {
        let mut layer = ScrollLayer::new(Sprite::Sky, 500.0, 1.0, 0.0, 800.0);
        layer.advance();
        let xs: Vec<f32> = layer.tile_positions().map(|p| p.x).collect();
        assert_eq!(xs, vec![-1.0, 499.0, 999.0]);
    }
}
