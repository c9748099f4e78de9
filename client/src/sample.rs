//! Unique random integer samples.

use rand::Rng;
use std::collections::HashSet;
use std::fmt;

/// A set of distinct integers, kept in the order they were drawn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sample {
    values: Vec<i64>,
}

impl Sample {
    /// Draw `count` distinct integers uniformly from `[min, max]` by
    /// rejection sampling.
    ///
    /// The caller must ensure `min <= max` and `count <= max - min + 1`.
    /// With a range smaller than `count` the loop never finishes; debug
    /// builds assert instead.
    pub fn draw<R: Rng + ?Sized>(
        rng: &mut R,
        count: usize,
        min: i64,
        max: i64,
    ) -> Self {
        debug_assert!(min <= max, "empty range [{min}, {max}]");
        debug_assert!(
            (count as i128) <= (max as i128) - (min as i128) + 1,
            "cannot draw {count} unique values from [{min}, {max}]"
        );

        let mut seen = HashSet::with_capacity(count);
        let mut values = Vec::with_capacity(count);
        while values.len() < count {
            let candidate = rng.gen_range(min..=max);
            if seen.insert(candidate) {
                values.push(candidate);
            }
        }
        Self { values }
    }

    /// Values in draw order.
    pub fn values(&self) -> &[i64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl fmt::Display for Sample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, value) in self.values.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{value}")?;
        }
        Ok(())
    }
}

/// Comma-joined `count` unique integers from `[min, max]`, in draw order.
pub fn unique_random_characters(count: usize, min: i64, max: i64) -> String {
    Sample::draw(&mut rand::thread_rng(), count, min, max).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use rand::rngs::mock::StepRng;

    fn parse(sample: &str) -> Vec<i64> {
        sample
            .split(',')
            .map(|token| token.parse().expect("integer token"))
            .collect()
    }

    #[test]
    fn draws_exact_count_of_distinct_values_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for (count, min, max) in
            [(0, 1, 10), (1, -3, 3), (5, 1, 826), (10, 10, 19), (20, -50, 50)]
        {
            let sample = Sample::draw(&mut rng, count, min, max);
            assert_eq!(sample.len(), count);

            let distinct: HashSet<_> = sample.values().iter().collect();
            assert_eq!(distinct.len(), count);
            assert!(sample.values().iter().all(|v| (min..=max).contains(v)));
        }
    }

    #[test]
    fn rendered_tokens_match_values() {
        let rendered = unique_random_characters(8, 1, 826);
        let tokens = parse(&rendered);
        assert_eq!(tokens.len(), 8);
        assert_eq!(tokens.iter().collect::<HashSet<_>>().len(), 8);
        assert!(tokens.iter().all(|v| (1..=826).contains(v)));
    }

    #[test]
    fn single_value_range() {
        assert_eq!(unique_random_characters(1, 5, 5), "5");
    }

    #[test]
    fn exhausting_the_range_yields_a_permutation() {
        let mut tokens = parse(&unique_random_characters(3, 1, 3));
        tokens.sort();
        assert_eq!(tokens, vec![1, 2, 3]);
    }

    #[test]
    fn keeps_draw_order() {
        // top two bits pick the value in [1, 4]: 4, 3, 2, 1
        let mut rng = StepRng::new(3 << 62, 3 << 62);
        let sample = Sample::draw(&mut rng, 4, 1, 4);
        assert_eq!(sample.values(), &[4, 3, 2, 1]);
        assert_eq!(sample.to_string(), "4,3,2,1");
    }

    #[test]
    fn empty_sample_renders_empty() {
        assert_eq!(unique_random_characters(0, 1, 10), "");
    }
}
