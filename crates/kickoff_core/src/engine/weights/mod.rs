pub mod softmax;

use rand::{Rng, RngCore};

pub use softmax::{softmax, top_k_indices};

/// Draw an index proportionally to `weights`.
///
/// Non-positive weights never win. Returns `None` when nothing has weight.
pub fn weighted_index(rng: &mut dyn RngCore, weights: &[f32]) -> Option<usize> {
    let total: f32 = weights.iter().filter(|w| **w > 0.0).sum();
    if total <= 0.0 {
        return None;
    }

    let mut r = rng.gen::<f32>() * total;
    let mut last = None;
    for (i, w) in weights.iter().enumerate() {
        if *w <= 0.0 {
            continue;
        }
        last = Some(i);
        r -= *w;
        if r <= 0.0 {
            return Some(i);
        }
    }
    // float rounding: fall back to the last positive entry
    last
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_zero_weights_never_chosen() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..500 {
            let i = weighted_index(&mut rng, &[0.0, 3.0, 0.0, 1.0]).unwrap();
            assert!(i == 1 || i == 3);
        }
    }

    #[test]
    fn test_all_zero_is_none() {
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(weighted_index(&mut rng, &[0.0, -1.0]), None);
        assert_eq!(weighted_index(&mut rng, &[]), None);
    }

    #[test]
    fn test_heavier_entry_wins_more_often() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut counts = [0u32; 2];
        for _ in 0..2000 {
            counts[weighted_index(&mut rng, &[1.0, 4.0]).unwrap()] += 1;
        }
        assert!(counts[1] > counts[0] * 2);
    }
}
