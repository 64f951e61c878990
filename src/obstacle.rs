use macroquad::math::{vec2, Rect, Vec2};

use crate::actor::{rect_from_midbottom, Actor};
use crate::consts::*;
use crate::sprite::Sprite;

/// Obstacle species: bee, mouse, ladybug and frog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ObstacleKind {
    Flyer,
    Crawler,
    HopFlyer,
    Hopper,
}

impl ObstacleKind {
    pub const ALL: [ObstacleKind; 4] = [
        ObstacleKind::Flyer,
        ObstacleKind::Crawler,
        ObstacleKind::HopFlyer,
        ObstacleKind::Hopper,
    ];

    /// Spawn pool; the crawler is listed twice so it turns up twice as often.
    pub const SPAWN_POOL: [ObstacleKind; 5] = [
        ObstacleKind::Flyer,
        ObstacleKind::HopFlyer,
        ObstacleKind::Crawler,
        ObstacleKind::Crawler,
        ObstacleKind::Hopper,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ObstacleKind::Flyer => "bee",
            ObstacleKind::Crawler => "mouse",
            ObstacleKind::HopFlyer => "ladybug",
            ObstacleKind::Hopper => "frog",
        }
    }

    pub fn profile(self) -> &'static KindProfile {
        match self {
            ObstacleKind::Flyer => &FLYER,
            ObstacleKind::Crawler => &CRAWLER,
            ObstacleKind::HopFlyer => &HOP_FLYER,
            ObstacleKind::Hopper => &HOPPER,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RaisedPhase {
    /// Cursor value at which the phase starts; it runs to the end of the cycle.
    pub from: f32,
    pub bottom: f32,
    /// Extra leftward movement per frame while raised.
    pub nudge: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct KindProfile {
    pub frames: usize,
    pub animation_speed: f32,
    pub ground_bottom: f32,
    pub raised: Option<RaisedPhase>,
}

const FLYER: KindProfile = KindProfile {
    frames: 2,
    animation_speed: 0.15,
    ground_bottom: 200.0,
    raised: None,
};

const CRAWLER: KindProfile = KindProfile {
    frames: 2,
    animation_speed: 0.04,
    ground_bottom: 300.0,
    raised: None,
};

const HOP_FLYER: KindProfile = KindProfile {
    frames: 3,
    animation_speed: 0.03,
    ground_bottom: 300.0,
    raised: Some(RaisedPhase {
        from: 2.0,
        bottom: 230.0,
        nudge: 1.0,
    }),
};

const HOPPER: KindProfile = KindProfile {
    frames: 2,
    animation_speed: 0.02,
    ground_bottom: 300.0,
    raised: Some(RaisedPhase {
        from: 1.0,
        bottom: 270.0,
        nudge: 0.1,
    }),
};

#[derive(Clone, Debug)]
pub struct Obstacle {
    pub kind: ObstacleKind,
    pub rect: Rect,
    pub animation_cursor: f32,
    pub frame: usize,
    profile: &'static KindProfile,
}

impl Obstacle {
    /// `x` is the horizontal centre of the spawn point.
    pub fn new(kind: ObstacleKind, x: f32, size: Vec2) -> Self {
        let profile = kind.profile();
        Self {
            kind,
            rect: rect_from_midbottom(vec2(x, profile.ground_bottom), size),
            animation_cursor: 0.0,
            frame: 0,
            profile,
        }
    }

    pub fn x(&self) -> f32 {
        self.rect.x
    }

    pub fn is_raised(&self) -> bool {
        self.profile
            .raised
            .map_or(false, |r| self.animation_cursor >= r.from)
    }

    /// Animates, scrolls and reports whether the obstacle is still alive.
    pub fn update(&mut self) -> bool {
        self.animation_cursor += self.profile.animation_speed;
        if self.animation_cursor >= self.profile.frames as f32 {
            self.animation_cursor = 0.0;
        }
        self.resolve_phase();
        self.rect.x -= SCROLL_SPEED;
        !self.is_off_screen()
    }

    pub fn is_off_screen(&self) -> bool {
        self.rect.x <= DESPAWN_X
    }

    pub fn resolve_phase(&mut self) {
        self.frame = (self.animation_cursor as usize).min(self.profile.frames - 1);
        let Some(raised) = self.profile.raised else {
            return;
        };
        if self.animation_cursor >= raised.from {
            self.rect.y = raised.bottom - self.rect.h;
            self.rect.x -= raised.nudge;
        } else {
            self.rect.y = self.profile.ground_bottom - self.rect.h;
        }
    }
}

impl Actor for Obstacle {
    fn rect(&self) -> Rect {
        self.rect
    }

    fn sprite(&self) -> Sprite {
        Sprite::Obstacle(self.kind, self.frame)
    }
}
