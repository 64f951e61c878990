use std::collections::HashMap;

use macroquad::math::Vec2;

use crate::obstacle::ObstacleKind;

/// The three playable aliens.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Character {
    Blue,
    Pink,
    Yellow,
}

impl Character {
    pub const ALL: [Character; 3] = [Character::Blue, Character::Pink, Character::Yellow];

    pub fn name(self) -> &'static str {
        match self {
            Character::Blue => "blue",
            Character::Pink => "pink",
            Character::Yellow => "yellow",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PlayerFrame {
    /// Index into the two-frame walk cycle.
    Walk(usize),
    Jump,
    Hurt,
}

/// Opaque handle for every image the game can show.
///
/// The core never looks at pixels; it hands these to the renderer, which
/// resolves them to whatever texture it loaded for them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Sprite {
    Sky,
    Ground,
    Stand(Character),
    Player(Character, PlayerFrame),
    Obstacle(ObstacleKind, usize),
}

impl Sprite {
    /// Every sprite the asset collaborator has to provide.
    pub fn all() -> Vec<Sprite> {
        let mut sprites = vec![Sprite::Sky, Sprite::Ground];
        for character in Character::ALL {
            sprites.push(Sprite::Stand(character));
            sprites.push(Sprite::Player(character, PlayerFrame::Walk(0)));
            sprites.push(Sprite::Player(character, PlayerFrame::Walk(1)));
            sprites.push(Sprite::Player(character, PlayerFrame::Jump));
            sprites.push(Sprite::Player(character, PlayerFrame::Hurt));
        }
        for kind in ObstacleKind::ALL {
            for frame in 0..kind.profile().frames {
                sprites.push(Sprite::Obstacle(kind, frame));
            }
        }
        sprites
    }
}

/// Pixel size of every sprite, measured once after loading.
///
/// Actor rects are sized from this table, so the core can run without any
/// texture in memory.
#[derive(Clone, Debug, Default)]
pub struct SpriteSizes {
    sizes: HashMap<Sprite, Vec2>,
}

impl SpriteSizes {
    pub fn measure(mut size_of: impl FnMut(Sprite) -> Vec2) -> Self {
        let sizes = Sprite::all()
            .into_iter()
            .map(|sprite| (sprite, size_of(sprite)))
            .collect();
        Self { sizes }
    }

    pub fn uniform(size: Vec2) -> Self {
        Self::measure(|_| size)
    }

    /// Unknown sprites measure as zero.
    pub fn size(&self, sprite: Sprite) -> Vec2 {
        self.sizes.get(&sprite).copied().unwrap_or(Vec2::ZERO)
    }

    pub fn set(&mut self, sprite: Sprite, size: Vec2) {
        self.sizes.insert(sprite, size);
    }
}
