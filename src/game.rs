//! Game state machine
//!
//! `Menu` → `Playing` on a character click, `Playing` → `Frozen` on a hit,
//! `Frozen` → `Menu` once the freeze deadline passes. Game over is not a
//! state of its own; it is how the menu looks after a round.

use macroquad::math::{Rect, Vec2};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::actor::rect_from_center;
use crate::background::Background;
use crate::collision;
use crate::obstacle::Obstacle;
use crate::platform::{Audio, Clock, Control, Input, SoundId};
use crate::player::Player;
use crate::rules::GameRules;
use crate::score::{RoundResult, ScoreTracker};
use crate::spawner::Spawner;
use crate::sprite::{Character, PlayerFrame, Sprite, SpriteSizes};

/// Centres of the blue, pink and yellow stands on the menu.
pub const STAND_CENTERS: [(Character, Vec2); 3] = [
    (Character::Blue, Vec2::new(200.0, 200.0)),
    (Character::Pink, Vec2::new(400.0, 200.0)),
    (Character::Yellow, Vec2::new(600.0, 200.0)),
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Menu,
    Playing,
    /// Post-collision pause; nothing moves until `until_ms`.
    Frozen { until_ms: u64 },
}

#[derive(Clone, Copy, Debug)]
struct Tuning {
    intro_volume: f32,
    music_volume: f32,
    jump_volume: f32,
    game_over_volume: f32,
    freeze_ms: u64,
}

impl Tuning {
    fn from_rules(rules: &GameRules) -> Self {
        Self {
            intro_volume: rules.intro_music_volume,
            music_volume: rules.music_volume,
            jump_volume: rules.jump_sfx_volume,
            game_over_volume: rules.game_over_sfx_volume,
            freeze_ms: rules.freeze_ms,
        }
    }
}

pub struct Game {
    pub phase: Phase,
    pub player: Option<Player>,
    pub obstacles: Vec<Obstacle>,
    pub background: Background,
    pub scores: ScoreTracker,
    spawner: Spawner,
    sizes: SpriteSizes,
    tuning: Tuning,
    screen_width: f32,
    rng: StdRng,
}

impl Game {
    pub fn new(rules: &GameRules, sizes: SpriteSizes, seed: u64) -> Self {
        let background = Background::new(
            sizes.size(Sprite::Sky).x,
            sizes.size(Sprite::Ground).x,
            rules.screen_width,
        );
        Self {
            phase: Phase::Menu,
            player: None,
            obstacles: Vec::new(),
            background,
            scores: ScoreTracker::new(),
            spawner: Spawner::new(rules.spawn_interval_ms),
            sizes,
            tuning: Tuning::from_rules(rules),
            screen_width: rules.screen_width,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Starts the menu ambience. Call once before the first frame.
    pub fn boot(&mut self, audio: &mut impl Audio) {
        audio.play(SoundId::Intro, self.tuning.intro_volume, true);
    }

    pub fn screen_width(&self) -> f32 {
        self.screen_width
    }

    pub fn sizes(&self) -> &SpriteSizes {
        &self.sizes
    }

    pub fn selection_regions(&self) -> [(Character, Rect); 3] {
        STAND_CENTERS.map(|(character, center)| {
            let size = self.sizes.size(Sprite::Stand(character));
            (character, rect_from_center(center, size))
        })
    }

    /// Maps a click to a character. Anything outside the blue and pink stands
    /// picks yellow.
    pub fn character_at(&self, point: Vec2) -> Character {
        let regions = self.selection_regions();
        if let Some((character, _)) = regions.iter().find(|(_, r)| r.contains(point)) {
            return *character;
        }
        log::warn!(
            "Click at ({}, {}) is outside every stand, defaulting to {}",
            point.x,
            point.y,
            Character::Yellow.name()
        );
        Character::Yellow
    }

    pub fn frame(&mut self, clock: &impl Clock, input: &impl Input, audio: &mut impl Audio) {
        let now = clock.now_ms();
        match self.phase {
            Phase::Menu => {
                if let Some(click) = input.pointer_clicks().first() {
                    let character = self.character_at(*click);
                    self.start_round(character, now, audio);
                }
            }
            Phase::Playing => self.play_frame(now, input, audio),
            Phase::Frozen { until_ms } => {
                if now >= until_ms {
                    self.finish_round(audio);
                }
            }
        }
    }

    pub fn start_round(&mut self, character: Character, now_ms: u64, audio: &mut impl Audio) {
        let size = self.sizes.size(Sprite::Player(character, PlayerFrame::Walk(0)));
        self.player = Some(Player::new(character, size));
        self.obstacles.clear();
        self.spawner.arm(now_ms);
        self.scores.start_round(now_ms);
        self.phase = Phase::Playing;

        audio.stop(SoundId::Intro);
        audio.play(SoundId::Background, self.tuning.music_volume, true);
        log::info!("Round started as the {} alien", character.name());
    }

    fn play_frame(&mut self, now: u64, input: &impl Input, audio: &mut impl Audio) {
        for order in self.spawner.poll(now, &mut self.rng) {
            let size = self.sizes.size(Sprite::Obstacle(order.kind, 0));
            log::debug!("Spawning {} at x={}", order.kind.name(), order.x);
            self.obstacles.push(Obstacle::new(order.kind, order.x, size));
        }

        self.background.advance();
        self.scores.tick(now);

        let Some(player) = self.player.as_mut() else {
            return;
        };
        if player.update(input.is_key_down(Control::Jump)) {
            audio.play(SoundId::Jump, self.tuning.jump_volume, false);
        }
        self.obstacles.retain_mut(|o| o.update());

        if let Some(hit) = collision::first_hit(&*player, &self.obstacles) {
            log::debug!("Hit by {}", self.obstacles[hit].kind.name());
            self.freeze(now, audio);
        }
    }

    fn freeze(&mut self, now: u64, audio: &mut impl Audio) {
        audio.stop(SoundId::Background);
        if let Some(player) = self.player.as_mut() {
            player.hurt();
        }
        audio.play(SoundId::GameOver, self.tuning.game_over_volume, false);
        self.spawner.disarm();
        self.phase = Phase::Frozen {
            until_ms: now + self.tuning.freeze_ms,
        };
    }

    fn finish_round(&mut self, audio: &mut impl Audio) -> RoundResult {
        self.obstacles.clear();
        audio.play(SoundId::Intro, self.tuning.intro_volume, true);
        let result = self.scores.finish_round();
        self.phase = Phase::Menu;
        log::info!(
            "Round over: score {} (best {}, {:?})",
            result.score,
            result.best,
            result.standing
        );
        result
    }
}
