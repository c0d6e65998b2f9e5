use serde::{Deserialize, Serialize};

/// Raw three-way sentiment probabilities as returned by the classifier.
///
/// Components come out of a softmax, so each lies in [0, 1] and together they
/// sum to roughly 1. The core consumes that property but does not enforce it.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Default)]
pub struct ScoreVector {
    pub neg: f64,
    pub neu: f64,
    pub pos: f64,
}

impl ScoreVector {
    pub fn new(neg: f64, neu: f64, pos: f64) -> Self {
        Self { neg, neu, pos }
    }
}

/// A score vector plus its derived compound value.
///
/// Created only by the aggregation step; immutable once produced.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct SentimentScore {
    pub neg: f64,
    pub neu: f64,
    pub pos: f64,
    /// Single scalar in [-1, 1] summarizing the vector under the neutral
    /// weighting in force at scoring time.
    pub compound: f64,
}

impl SentimentScore {
    pub fn new(vector: ScoreVector, compound: f64) -> Self {
        Self {
            neg: vector.neg,
            neu: vector.neu,
            pos: vector.pos,
            compound,
        }
    }

    pub fn vector(&self) -> ScoreVector {
        ScoreVector::new(self.neg, self.neu, self.pos)
    }
}

impl std::fmt::Display for SentimentScore {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "Positive: {:.2}\nNeutral: {:.2}\nNegative: {:.2}\nCompound: {:.2}",
            self.pos, self.neu, self.neg, self.compound
        )
    }
}
