use macroquad::math::{vec2, Rect, Vec2};

use crate::actor::{rect_from_midbottom, Actor};
use crate::consts::*;
use crate::sprite::{Character, PlayerFrame, Sprite};

const WALK_FRAMES: usize = 2;

/// The alien the player controls.
#[derive(Clone, Debug)]
pub struct Player {
    pub character: Character,
    pub rect: Rect,
    /// Positive is downward. Keeps accumulating while grounded.
    pub velocity: i32,
    /// Fractional index into the walk cycle.
    pub animation_cursor: f32,
    pub frame: PlayerFrame,
}

impl Player {
    pub fn new(character: Character, size: Vec2) -> Self {
        Self {
            character,
            rect: rect_from_midbottom(vec2(PLAYER_START_X, GROUND_LINE), size),
            velocity: 0,
            animation_cursor: 0.0,
            frame: PlayerFrame::Walk(0),
        }
    }

    pub fn is_grounded(&self) -> bool {
        self.rect.bottom() >= GROUND_LINE
    }

    /// Advances one frame. Returns `true` when a jump started this frame.
    pub fn update(&mut self, jump_held: bool) -> bool {
        let jumped = self.sample_input(jump_held);
        self.apply_gravity();
        self.select_animation();
        jumped
    }

    /// Shows the hurt frame until the round is reset.
    pub fn hurt(&mut self) {
        self.frame = PlayerFrame::Hurt;
    }

    fn sample_input(&mut self, jump_held: bool) -> bool {
        if jump_held && self.is_grounded() {
            self.velocity = JUMP_IMPULSE;
            return true;
        }
        false
    }

    fn apply_gravity(&mut self) {
        self.velocity = self.velocity.saturating_add(GRAVITY);
        self.rect.y += self.velocity as f32;
        if self.rect.bottom() >= GROUND_LINE {
            self.rect.y = GROUND_LINE - self.rect.h;
        }
    }

    fn select_animation(&mut self) {
        if !self.is_grounded() {
            self.frame = PlayerFrame::Jump;
            return;
        }
        self.animation_cursor += PLAYER_ANIMATION_SPEED;
        if self.animation_cursor >= WALK_FRAMES as f32 {
            self.animation_cursor = 0.0;
        }
        self.frame = PlayerFrame::Walk(self.animation_cursor as usize);
    }
}

impl Actor for Player {
    fn rect(&self) -> Rect {
        self.rect
    }

    fn sprite(&self) -> Sprite {
        Sprite::Player(self.character, self.frame)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player() -> Player {
        Player::new(Character::Blue, vec2(40.0, 60.0))
    }

    #[test]
    fn spawns_standing_on_ground() {
        let p = player();
        assert_eq!(p.rect.bottom(), GROUND_LINE);
        assert_eq!(p.rect.center().x, PLAYER_START_X);
        assert!(p.is_grounded());
    }

    #[test]
    fn jump_only_from_ground() {
        let mut p = player();
        assert!(p.update(true));
        // -20 + 1
        assert_eq!(p.velocity, -19);
        assert_eq!(p.rect.bottom(), GROUND_LINE - 19.0);
        assert_eq!(p.frame, PlayerFrame::Jump);

        // Holding jump mid-air does nothing.
        assert!(!p.update(true));
        assert_eq!(p.velocity, -18);
    }

    #[test]
    fn jump_arc_lands_and_clamps() {
        let mut p = player();
        p.update(true);
        let mut frames = 1;
        while !p.is_grounded() {
            assert!(p.rect.bottom() <= GROUND_LINE);
            assert_eq!(p.frame, PlayerFrame::Jump);
            p.update(false);
            frames += 1;
            assert!(frames < 100, "never landed");
        }
        assert_eq!(p.rect.bottom(), GROUND_LINE);
        assert!(matches!(p.frame, PlayerFrame::Walk(_)));
    }

    #[test]
    fn bottom_never_below_ground() {
        let mut p = player();
        for i in 0..500 {
            p.update(i % 7 == 0);
            assert!(p.rect.bottom() <= GROUND_LINE);
        }
    }

    #[test]
    fn grounded_frames_cycle_walk_only() {
        let mut p = player();
        let mut seen = [false; 2];
        for _ in 0..40 {
            p.update(false);
            match p.frame {
                PlayerFrame::Walk(i) => seen[i] = true,
                other => panic!("unexpected frame {other:?}"),
            }
        }
        assert!(seen[0] && seen[1]);
    }

    #[test]
    fn gravity_accumulates_while_grounded() {
        let mut p = player();
        for _ in 0..5 {
            p.update(false);
        }
        assert_eq!(p.velocity, 5);
        assert_eq!(p.rect.bottom(), GROUND_LINE);
    }

    #[test]
    fn hurt_overrides_frame() {
        let mut p = player();
        p.update(false);
        p.hurt();
        assert_eq!(p.sprite(), Sprite::Player(Character::Blue, PlayerFrame::Hurt));
    }
}
