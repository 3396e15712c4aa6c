/// Weight applied to each self-reported rating when computing the composite score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreWeights {
    pub rank: f64,
    pub iq: f64,
    pub tactical: f64,
    pub speed: f64,
    pub confidence: f64,
}

impl ScoreWeights {
    pub fn total(&self) -> f64 {
        self.rank + self.iq + self.tactical + self.speed + self.confidence
    }

    pub fn apply(&self, rank: f64, iq: f64, tactical: f64, speed: f64, confidence: f64) -> f64 {
        rank * self.rank
            + iq * self.iq
            + tactical * self.tactical
            + speed * self.speed
            + confidence * self.confidence
    }
}

/// Fixed weight table. Sums to 1.0.
pub const WEIGHTS: ScoreWeights = ScoreWeights {
    rank: 0.35,
    iq: 0.20,
    tactical: 0.20,
    speed: 0.15,
    confidence: 0.10,
};

/// Composite score for one participant. Total over every input, including
/// negative or out-of-scale ratings.
pub fn composite_score(rank: f64, iq: f64, tactical: f64, speed: f64, confidence: f64) -> f64 {
    WEIGHTS.apply(rank, iq, tactical, speed, confidence)
}
