//! # Token Counter

use crate::types::{WSHashMap, hash_map_new};

/// Token frequency counter.
#[derive(Debug, Clone, Default)]
pub struct TokenCounter {
    counts: WSHashMap<String, usize>,
}

impl TokenCounter {
    /// Create an empty counter.
    pub fn new() -> Self {
        Self {
            counts: hash_map_new(),
        }
    }

    /// Count each token once.
    pub fn update<I>(
        &mut self,
        tokens: I,
    ) where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        for token in tokens {
            let token = token.as_ref();
            match self.counts.get_mut(token) {
                Some(count) => *count += 1,
                None => {
                    self.counts.insert(token.to_string(), 1);
                }
            }
        }
    }

    /// Count every token of every sample.
    pub fn update_from_samples<I, S>(
        &mut self,
        samples: I,
    ) where
        I: IntoIterator<Item = S>,
        S: IntoIterator,
        S::Item: AsRef<str>,
    {
        for sample in samples {
            self.update(sample);
        }
    }

    /// Add another counter's counts to this one.
    pub fn merge(
        &mut self,
        other: &TokenCounter,
    ) {
        for (token, &count) in &other.counts {
            *self.counts.entry(token.clone()).or_default() += count;
        }
    }

    /// The count for `token`; zero when unseen.
    pub fn count(
        &self,
        token: &str,
    ) -> usize {
        self.counts.get(token).copied().unwrap_or(0)
    }

    /// The number of distinct tokens.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Is the counter empty?
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// `(token, count)` pairs by descending count; ties by ascending token.
    pub fn most_common(&self) -> Vec<(&str, usize)> {
        let mut pairs: Vec<(&str, usize)> = self
            .counts
            .iter()
            .map(|(token, &count)| (token.as_str(), count))
            .collect();
        pairs.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counter() {
        let mut counter = TokenCounter::new();
        counter.update_from_samples(vec![
            vec!["hello", "world"],
            vec!["foo", "world", "bar", "world"],
        ]);

        assert_eq!(counter.len(), 4);
        assert_eq!(counter.total(), 6);
        assert_eq!(counter.count("world"), 3);
        assert_eq!(counter.count("missing"), 0);
        assert_eq!(
            counter.most_common(),
            vec![("world", 3), ("bar", 1), ("foo", 1), ("hello", 1)]
        );

        let mut other = TokenCounter::new();
        other.update(["bar", "baz"]);
        counter.merge(&other);
        assert_eq!(counter.count("bar"), 2);
        assert_eq!(counter.count("baz"), 1);
        assert!(!counter.is_empty());
    }
}
