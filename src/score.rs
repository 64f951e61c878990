/// How a finished round compares with the best before it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Standing {
    NewBest,
    TiedBest,
    BelowBest,
}

impl Standing {
    pub fn classify(score: u32, previous_best: u32) -> Self {
        if score > previous_best {
            Standing::NewBest
        } else if score == previous_best && score > 0 {
            Standing::TiedBest
        } else {
            Standing::BelowBest
        }
    }

    pub fn is_best(self) -> bool {
        matches!(self, Standing::NewBest | Standing::TiedBest)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoundResult {
    pub score: u32,
    /// Best score after this round was recorded.
    pub best: u32,
    pub standing: Standing,
}

/// Survival-time scoring and best-score bookkeeping for one process run.
#[derive(Clone, Debug, Default)]
pub struct ScoreTracker {
    round_start_ms: u64,
    current: u32,
    history: Vec<u32>,
    best: u32,
    last: Option<RoundResult>,
}

impl ScoreTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start_round(&mut self, now_ms: u64) {
        self.round_start_ms = now_ms;
        self.current = 0;
    }

    /// Whole seconds since the round started.
    pub fn tick(&mut self, now_ms: u64) -> u32 {
        self.current = (now_ms.saturating_sub(self.round_start_ms) / 1000) as u32;
        self.current
    }

    pub fn current(&self) -> u32 {
        self.current
    }

    pub fn finish_round(&mut self) -> RoundResult {
        let score = self.current;
        let standing = Standing::classify(score, self.best);
        self.history.push(score);
        self.best = self.best.max(score);
        let result = RoundResult {
            score,
            best: self.best,
            standing,
        };
        self.last = Some(result);
        result
    }

    pub fn best(&self) -> u32 {
        self.best
    }

    pub fn history(&self) -> &[u32] {
        &self.history
    }

    pub fn last(&self) -> Option<RoundResult> {
        self.last
    }
}
