use macroquad::math::{Rect, Vec2};

use crate::sprite::Sprite;

/// Anything with a screen rectangle and a displayed image.
pub trait Actor {
    fn rect(&self) -> Rect;
    fn sprite(&self) -> Sprite;

    fn top_left(&self) -> Vec2 {
        self.rect().point()
    }
}

/// Rect of `size` whose bottom edge centre sits on `anchor`.
pub fn rect_from_midbottom(anchor: Vec2, size: Vec2) -> Rect {
    Rect::new(anchor.x - size.x / 2.0, anchor.y - size.y, size.x, size.y)
}

/// Rect of `size` centred on `center`.
pub fn rect_from_center(center: Vec2, size: Vec2) -> Rect {
    Rect::new(center.x - size.x / 2.0, center.y - size.y / 2.0, size.x, size.y)
}
