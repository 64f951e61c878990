use rand::seq::SliceRandom;
use rand::Rng;

use crate::consts::{SPAWN_X_MAX, SPAWN_X_MIN};
use crate::obstacle::ObstacleKind;

/// Fixed-interval obstacle timer.
///
/// Disarmed outside of a round; arming it again starts a fresh interval, so
/// time spent in the menu never turns into a burst of spawns.
#[derive(Clone, Debug)]
pub struct Spawner {
    interval_ms: u64,
    next_fire_ms: Option<u64>,
}

/// What a single timer fire produced.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpawnOrder {
    pub kind: ObstacleKind,
    /// Horizontal centre, off the right edge of the screen.
    pub x: f32,
}

impl Spawner {
    pub fn new(interval_ms: u64) -> Self {
        Self {
            interval_ms: interval_ms.max(1),
            next_fire_ms: None,
        }
    }

    pub fn arm(&mut self, now_ms: u64) {
        self.next_fire_ms = Some(now_ms + self.interval_ms);
    }

    pub fn disarm(&mut self) {
        self.next_fire_ms = None;
    }

    pub fn is_armed(&self) -> bool {
        self.next_fire_ms.is_some()
    }

    /// One order per interval elapsed up to `now_ms`.
    pub fn poll(&mut self, now_ms: u64, rng: &mut impl Rng) -> Vec<SpawnOrder> {
        let mut orders = Vec::new();
        let Some(mut next) = self.next_fire_ms else {
            return orders;
        };
        while now_ms >= next {
            orders.push(roll(rng));
            next += self.interval_ms;
        }
        self.next_fire_ms = Some(next);
        orders
    }
}

fn roll(rng: &mut impl Rng) -> SpawnOrder {
    let kind = *ObstacleKind::SPAWN_POOL
        .choose(rng)
        .unwrap_or(&ObstacleKind::Crawler);
    let x = rng.gen_range(SPAWN_X_MIN..=SPAWN_X_MAX) as f32;
    SpawnOrder { kind, x }
}
