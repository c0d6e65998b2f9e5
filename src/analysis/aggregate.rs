use crate::domain::ScoreVector;
use crate::error::SentimentError;

/// Element-wise arithmetic mean across score vectors.
///
/// Chunk scores are averaged unweighted: a short trailing chunk counts the
/// same as a full-size one. (Length-weighting would be a plausible
/// refinement, deliberately not implemented.)
///
/// Identity on a single-element slice. An empty slice is rejected with
/// `EmptyInput` instead of silently producing a zero vector.
pub fn mean_score(vectors: &[ScoreVector]) -> Result<ScoreVector, SentimentError> {
    if vectors.is_empty() {
        return Err(SentimentError::EmptyInput);
    }

    let mut neg_sum = 0.0;
    let mut neu_sum = 0.0;
    let mut pos_sum = 0.0;
    for vector in vectors {
        neg_sum += vector.neg;
        neu_sum += vector.neu;
        pos_sum += vector.pos;
    }

    let n = vectors.len() as f64;
    Ok(ScoreVector::new(neg_sum / n, neu_sum / n, pos_sum / n))
}

/// Maps a neutral weight (1..=5) onto the divisor applied to the neutral
/// component: weight 5 keeps it whole, weight 1 divides it by 5.
///
/// Doubles as the weight validator, so callers can reject a bad weight
/// before spending any classifier calls.
pub(crate) fn neutral_divisor(neutral_weight: u8) -> Result<f64, SentimentError> {
    match neutral_weight {
        5 => Ok(1.0),
        4 => Ok(2.0),
        3 => Ok(3.0),
        2 => Ok(4.0),
        1 => Ok(5.0),
        other => Err(SentimentError::InvalidWeight(other)),
    }
}

/// Collapses a score vector into a single compound value in [-1, 1].
///
/// The positive + adjusted-neutral sum is clamped to 1.0 BEFORE the negative
/// component is subtracted. Reversing that order changes results at the
/// boundaries, so keep it as is.
pub fn compound_score(vector: &ScoreVector, neutral_weight: u8) -> Result<f64, SentimentError> {
    let weighing = neutral_divisor(neutral_weight)?;

    // Explicit short-circuit: an already-zero neutral component stays zero.
    let neu_adjusted = if vector.neu == 0.0 {
        0.0
    } else {
        vector.neu / weighing
    };

    let mut score_sum = vector.pos + neu_adjusted;
    if score_sum > 1.0 {
        score_sum = 1.0;
    }

    let mut compound = score_sum - vector.neg;
    if compound < -1.0 {
        compound = -1.0;
    }

    Ok(compound)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mean_of_singleton_is_identity() {
        let vector = ScoreVector::new(0.25, 0.5, 0.25);
        assert_eq!(mean_score(&[vector]).unwrap(), vector);
    }

    #[test]
    fn test_mean_is_element_wise() {
        let a = ScoreVector::new(0.2, 0.6, 0.2);
        let b = ScoreVector::new(0.4, 0.2, 0.4);
        let mean = mean_score(&[a, b]).unwrap();
        assert!((mean.neg - 0.3).abs() < 1e-12);
        assert!((mean.neu - 0.4).abs() < 1e-12);
        assert!((mean.pos - 0.3).abs() < 1e-12);
    }

    #[test]
    fn test_mean_of_empty_slice_is_rejected() {
        assert!(matches!(mean_score(&[]), Err(SentimentError::EmptyInput)));
    }

    #[test]
    fn test_compound_worked_example() {
        // weight 4 -> divisor 2, neu 0.6 -> 0.3, sum 0.6, minus neg 0.1 = 0.5
        let vector = ScoreVector::new(0.1, 0.6, 0.3);
        let compound = compound_score(&vector, 4).unwrap();
        assert!((compound - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_zero_vector_short_circuits_to_zero() {
        let vector = ScoreVector::new(0.0, 0.0, 0.0);
        for weight in 1..=5 {
            assert_eq!(compound_score(&vector, weight).unwrap(), 0.0);
        }
    }

    #[test]
    fn test_sum_clamps_before_negative_subtraction() {
        // pos + neu = 2.0 clamps to 1.0 first, then minus 0.5 gives 0.5.
        // Subtracting first and clamping last would give 1.0 instead.
        let vector = ScoreVector::new(0.5, 1.0, 1.0);
        let compound = compound_score(&vector, 5).unwrap();
        assert!((compound - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_compound_stays_within_bounds() {
        let extremes = [0.0, 0.25, 0.5, 0.75, 1.0];
        for &neg in &extremes {
            for &neu in &extremes {
                for &pos in &extremes {
                    for weight in 1..=5 {
                        let vector = ScoreVector::new(neg, neu, pos);
                        let compound = compound_score(&vector, weight).unwrap();
                        assert!(
                            (-1.0..=1.0).contains(&compound),
                            "out of range for {:?} weight {}",
                            vector,
                            weight
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_raising_neg_never_raises_compound() {
        let neu = 0.3;
        let pos = 0.4;
        let mut previous = f64::INFINITY;
        for step in 0..=10 {
            let neg = step as f64 / 10.0;
            let compound = compound_score(&ScoreVector::new(neg, neu, pos), 3).unwrap();
            assert!(compound <= previous);
            previous = compound;
        }
    }

    #[test]
    fn test_out_of_range_weights_are_rejected() {
        let vector = ScoreVector::new(0.1, 0.6, 0.3);
        assert!(matches!(
            compound_score(&vector, 0),
            Err(SentimentError::InvalidWeight(0))
        ));
        assert!(matches!(
            compound_score(&vector, 6),
            Err(SentimentError::InvalidWeight(6))
        ));
    }
}
