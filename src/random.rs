// random.rs
// Process-local randomness source for sheet generation

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::defs::Number;
use crate::error::SheetError;

/// Owned random generator backing one generation run. Each generator (or
/// thread) gets its own instance, so concurrent callers never share state
/// and seeded runs replay exactly.
pub struct RandomSource {
    rng: StdRng,
}

impl RandomSource {
    pub fn new() -> Self {
        RandomSource {
            rng: StdRng::from_os_rng(),
        }
    }

    pub fn from_seed(seed: u64) -> Self {
        RandomSource {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Uniform random number in [min, max] inclusive.
    pub fn uniform_int(&mut self, min: Number, max: Number) -> Result<Number, SheetError> {
        if min > max {
            return Err(SheetError::InvalidRange { requested: 1, available: 0 });
        }
        Ok(self.rng.random_range(min..=max))
    }

    /// Uniform in-place Fisher-Yates shuffle.
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        items.shuffle(&mut self.rng);
    }

    /// Draw numbers in [min, max] until `size` distinct values are collected,
    /// keeping first occurrences in draw order. The size check must happen
    /// before the loop or an oversized request would never terminate.
    pub fn unique_sample(&mut self, size: usize, min: Number, max: Number) -> Result<Vec<Number>, SheetError> {
        let available = if min > max { 0 } else { max as usize - min as usize + 1 };
        if size > available {
            return Err(SheetError::InvalidRange { requested: size, available });
        }

        let mut numbers: Vec<Number> = Vec::with_capacity(size);
        while numbers.len() < size {
            let candidate = self.uniform_int(min, max)?;
            if !numbers.contains(&candidate) {
                numbers.push(candidate);
            }
        }
        Ok(numbers)
    }
}

impl Default for RandomSource {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_int_stays_in_bounds() {
        let mut random = RandomSource::from_seed(1);
        for _ in 0..200 {
            let n = random.uniform_int(10, 20).unwrap();
            assert!((10..=20).contains(&n));
        }
    }

    #[test]
    fn test_uniform_int_single_value_range() {
        let mut random = RandomSource::from_seed(2);
        assert_eq!(random.uniform_int(42, 42).unwrap(), 42);
    }

    #[test]
    fn test_uniform_int_rejects_inverted_range() {
        let mut random = RandomSource::from_seed(3);
        assert!(random.uniform_int(20, 10).is_err());
    }

    #[test]
    fn test_shuffle_preserves_elements() {
        let mut random = RandomSource::from_seed(4);
        let mut numbers: Vec<Number> = (1..=90).collect();
        random.shuffle(&mut numbers);
        assert_eq!(numbers.len(), 90);
        let mut sorted = numbers.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (1..=90).collect::<Vec<Number>>());
    }

    #[test]
    fn test_unique_sample_full_range() {
        let mut random = RandomSource::from_seed(5);
        let mut sample = random.unique_sample(90, 1, 90).unwrap();
        sample.sort_unstable();
        assert_eq!(sample, (1..=90).collect::<Vec<Number>>());
    }

    #[test]
    fn test_unique_sample_has_no_duplicates() {
        let mut random = RandomSource::from_seed(6);
        let sample = random.unique_sample(45, 1, 90).unwrap();
        assert_eq!(sample.len(), 45);
        for (i, n) in sample.iter().enumerate() {
            assert!(!sample[i + 1..].contains(n));
        }
    }

    #[test]
    fn test_unique_sample_oversized_request_fails() {
        let mut random = RandomSource::from_seed(7);
        let result = random.unique_sample(91, 1, 90);
        assert_eq!(
            result.unwrap_err(),
            SheetError::InvalidRange { requested: 91, available: 90 }
        );
    }

    #[test]
    fn test_seeded_source_is_reproducible() {
        let mut first = RandomSource::from_seed(99);
        let mut second = RandomSource::from_seed(99);
        assert_eq!(
            first.unique_sample(45, 1, 90).unwrap(),
            second.unique_sample(45, 1, 90).unwrap()
        );
    }
}
