//! Selection policy: which questions a tier asks, and which letters start hidden.
//!
//! Both functions take the RNG explicitly so a seeded `StdRng` replays a game
//! exactly. Neither touches the pool it draws from.

use std::collections::BTreeSet;

use rand::{seq::index, Rng};
use tracing::debug;

/// Draw up to `count` distinct items from `pool`.
///
/// A pool no larger than `count` is returned whole, in its existing order.
/// Otherwise exactly `count` items are sampled uniformly without replacement.
pub fn select_random_questions<T: Clone, R: Rng>(pool: &[T], count: usize, rng: &mut R) -> Vec<T> {
    if pool.len() <= count {
        return pool.to_vec();
    }
    debug!(pool = pool.len(), count, "sampling questions");
    index::sample(rng, pool.len(), count)
        .into_iter()
        .map(|i| pool[i].clone())
        .collect()
}

/// How many letters of a word of `word_len` letters start hidden.
pub fn hidden_count(word_len: usize) -> usize {
    let count = match word_len {
        0..=3 => 1,
        4 | 5 => 2,
        _     => 3,
    };
    count.min(word_len)
}

/// Pick the positions of `word` that start hidden.
pub fn choose_hidden_positions<R: Rng>(word: &str, rng: &mut R) -> BTreeSet<usize> {
    let word_len = word.chars().count();
    index::sample(rng, word_len, hidden_count(word_len))
        .into_iter()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn hidden_count_thresholds() {
        let expected = [(1, 1), (2, 1), (3, 1), (4, 2), (5, 2), (6, 3), (9, 3), (40, 3)];
        for (len, count) in expected {
            assert_eq!(hidden_count(len), count, "len={len}");
        }
    }

    #[test]
    fn hidden_count_never_exceeds_length() {
        assert_eq!(hidden_count(0), 0);
        assert_eq!(hidden_count(1), 1);
    }

    #[test]
    fn hidden_positions_are_distinct_and_in_bounds() {
        let mut rng = StdRng::seed_from_u64(0);
        for word in ["cat", "snake", "developer", "a", "go"] {
            for _ in 0..50 {
                let hidden = choose_hidden_positions(word, &mut rng);
                assert_eq!(hidden.len(), hidden_count(word.len()), "word={word}");
                assert!(hidden.iter().all(|&i| i < word.len()), "word={word}");
            }
        }
    }

    #[test]
    fn hidden_positions_are_deterministic_with_seed() {
        let pick = |seed: u64| {
            let mut rng = StdRng::seed_from_u64(seed);
            choose_hidden_positions("polymorphism", &mut rng)
        };
        assert_eq!(pick(7), pick(7));
    }

    #[test]
    fn small_pool_is_returned_whole_in_order() {
        let mut rng = StdRng::seed_from_u64(3);
        let pool = vec!["a", "b", "c"];
        assert_eq!(select_random_questions(&pool, 10, &mut rng), pool);
        assert_eq!(select_random_questions(&pool, 3, &mut rng), pool);
    }

    #[test]
    fn large_pool_yields_exactly_count_distinct_items() {
        let mut rng = StdRng::seed_from_u64(42);
        let pool: Vec<u32> = (0..25).collect();
        let before = pool.clone();

        let picked = select_random_questions(&pool, 10, &mut rng);

        assert_eq!(picked.len(), 10);
        let unique: BTreeSet<u32> = picked.iter().copied().collect();
        assert_eq!(unique.len(), 10);
        assert!(picked.iter().all(|p| pool.contains(p)));
        assert_eq!(pool, before, "pool must not be modified");
    }
}
