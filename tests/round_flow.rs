use std::cell::Cell;

use astro_hopper::game::{Game, Phase, STAND_CENTERS};
use astro_hopper::obstacle::{Obstacle, ObstacleKind};
use astro_hopper::platform::{Audio, Clock, Control, Input, SoundId};
use astro_hopper::rules::GameRules;
use astro_hopper::score::Standing;
use astro_hopper::sprite::{Character, Sprite, SpriteSizes};
use macroquad::math::{vec2, Vec2};

struct TestClock(Cell<u64>);

impl TestClock {
    fn set(&self, ms: u64) {
        self.0.set(ms);
    }
}

impl Clock for TestClock {
    fn now_ms(&self) -> u64 {
        self.0.get()
    }
}

#[derive(Default)]
struct Pad {
    jump: bool,
    clicks: Vec<Vec2>,
}

impl Input for Pad {
    fn is_key_down(&self, control: Control) -> bool {
        matches!(control, Control::Jump) && self.jump
    }

    fn pointer_clicks(&self) -> Vec<Vec2> {
        self.clicks.clone()
    }
}

#[derive(Default)]
struct Log {
    plays: Vec<SoundId>,
    stops: Vec<SoundId>,
}

impl Audio for Log {
    fn play(&mut self, sound: SoundId, _volume: f32, _looped: bool) {
        self.plays.push(sound);
    }

    fn stop(&mut self, sound: SoundId) {
        self.stops.push(sound);
    }
}

fn sizes() -> SpriteSizes {
    let mut sizes = SpriteSizes::uniform(vec2(40.0, 40.0));
    for character in Character::ALL {
        sizes.set(Sprite::Stand(character), vec2(60.0, 90.0));
    }
    sizes.set(Sprite::Sky, vec2(800.0, 300.0));
    sizes.set(Sprite::Ground, vec2(800.0, 100.0));
    sizes
}

struct Harness {
    game: Game,
    clock: TestClock,
    audio: Log,
}

impl Harness {
    fn new() -> Self {
        let mut h = Self {
            game: Game::new(&GameRules::default(), sizes(), 2024),
            clock: TestClock(Cell::new(0)),
            audio: Log::default(),
        };
        h.game.boot(&mut h.audio);
        h
    }

    fn step(&mut self, at: u64, input: &Pad) {
        self.clock.set(at);
        self.game.frame(&self.clock, input, &mut self.audio);
    }

    fn idle(&mut self, at: u64) {
        self.step(at, &Pad::default());
    }

    fn click(&mut self, at: u64, point: Vec2) {
        let pad = Pad {
            jump: false,
            clicks: vec![point],
        };
        self.step(at, &pad);
    }

    /// Drops a crawler right on top of the player.
    fn ambush(&mut self) {
        self.game
            .obstacles
            .push(Obstacle::new(ObstacleKind::Crawler, 86.0, vec2(40.0, 40.0)));
    }

    fn plays(&self, sound: SoundId) -> usize {
        self.audio.plays.iter().filter(|s| **s == sound).count()
    }
}

fn blue_stand() -> Vec2 {
    STAND_CENTERS[0].1
}

#[test]
fn spawns_on_schedule_and_scores_elapsed_seconds() {
    let mut h = Harness::new();
    h.click(0, blue_stand());
    assert_eq!(h.game.phase, Phase::Playing);
    assert!(h.game.obstacles.is_empty());

    h.idle(1499);
    assert!(h.game.obstacles.is_empty());
    h.idle(1500);
    assert_eq!(h.game.obstacles.len(), 1);
    h.idle(3000);
    assert_eq!(h.game.obstacles.len(), 2);

    h.idle(10_000);
    assert_eq!(h.game.phase, Phase::Playing);
    assert_eq!(h.game.scores.current(), 10);
}

#[test]
fn collision_at_4200_records_four() {
    let mut h = Harness::new();
    h.click(0, blue_stand());
    h.idle(1500);
    h.idle(3000);
    assert_eq!(h.game.obstacles.len(), 2);

    h.ambush();
    h.idle(4200);
    assert_eq!(h.game.phase, Phase::Frozen { until_ms: 6200 });
    assert_eq!(h.plays(SoundId::GameOver), 1);
    assert!(h.audio.stops.contains(&SoundId::Background));

    // The freeze swallows input, spawning and repeated hits.
    h.click(5000, blue_stand());
    h.idle(6000);
    assert_eq!(h.plays(SoundId::GameOver), 1);
    assert_eq!(h.game.obstacles.len(), 3);

    h.idle(6200);
    assert_eq!(h.game.phase, Phase::Menu);
    assert!(h.game.obstacles.is_empty());
    assert_eq!(h.game.scores.last().map(|r| r.score), Some(4));
    // Boot plus the return to the menu.
    assert_eq!(h.plays(SoundId::Intro), 2);
}

#[test]
fn best_score_across_rounds() {
    let mut h = Harness::new();
    let mut t = 0;
    let mut bests = Vec::new();
    let mut standings = Vec::new();

    for score in [5u64, 3, 8, 8, 2] {
        h.click(t, blue_stand());
        h.ambush();
        t += score * 1000;
        h.idle(t);
        assert!(matches!(h.game.phase, Phase::Frozen { .. }));
        t += 10_000;
        h.idle(t);
        assert_eq!(h.game.phase, Phase::Menu);

        let last = h.game.scores.last().unwrap();
        assert_eq!(last.score as u64, score);
        bests.push(h.game.scores.best());
        standings.push(last.standing);
        t += 1;
    }

    assert_eq!(bests, vec![5, 5, 8, 8, 8]);
    assert_eq!(standings[2], Standing::NewBest);
    assert_eq!(standings[3], Standing::TiedBest);
    assert_eq!(standings[4], Standing::BelowBest);
    assert_eq!(h.game.scores.history(), &[5, 3, 8, 8, 2]);
}

#[test]
fn click_outside_stands_picks_yellow() {
    let mut h = Harness::new();
    h.click(0, vec2(20.0, 380.0));
    assert_eq!(h.game.phase, Phase::Playing);
    assert_eq!(
        h.game.player.as_ref().map(|p| p.character),
        Some(Character::Yellow)
    );
}

#[test]
fn holding_jump_clears_a_crawler() {
    let mut h = Harness::new();
    h.click(0, blue_stand());
    h.game
        .obstacles
        .push(Obstacle::new(ObstacleKind::Crawler, 200.0, vec2(40.0, 40.0)));

    let jump = Pad {
        jump: true,
        clicks: Vec::new(),
    };
    // 16 ms apart, well inside the first spawn interval.
    for frame in 1..=60u64 {
        h.step(frame * 16, &jump);
        if frame == 1 {
            assert_eq!(h.plays(SoundId::Jump), 1);
        }
    }
    // Jumped over it and it scrolled away.
    assert_eq!(h.game.phase, Phase::Playing);
    assert!(h.game.obstacles.is_empty());
}
