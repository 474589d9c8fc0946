//! # Bucketed Batch Iterator
//!
//! Plans the minibatches of an epoch as lists of example indices.
//!
//! * `sort`: order every example by key, then cut consecutive batches.
//! * otherwise: optionally shuffle; cut pools of `pool_factor * batch_size`
//!   examples; cut each pool (key-sorted when `sort_within_batch`) into
//!   batches; optionally shuffle the batches of each pool.
//!
//! With `sort_within_batch`, each batch is finally ordered by descending key.

use rand::{SeedableRng, rngs::StdRng, seq::SliceRandom};

use crate::errors::{WSResult, WordsieveError};

/// The classifier's batch size.
pub const DEFAULT_BATCH_SIZE: usize = 64;

/// Pool size, in batches, for bucketing.
pub const DEFAULT_POOL_FACTOR: usize = 100;

/// Options for [`BatchIterator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchIteratorOptions {
    /// Examples per batch; the final batch may be short.
    pub batch_size: usize,

    /// Shuffle examples and batches each epoch.
    pub shuffle: bool,

    /// Sort all examples by key; disables pooling and shuffling.
    pub sort: bool,

    /// Order examples within each batch by descending key.
    pub sort_within_batch: bool,

    /// Bucketing pool size, in batches.
    pub pool_factor: usize,

    /// Base shuffle seed; epoch `e` uses `seed + e`.
    pub seed: u64,
}

impl Default for BatchIteratorOptions {
    fn default() -> Self {
        Self::train()
    }
}

impl BatchIteratorOptions {
    /// Shuffled, bucketed batches.
    pub fn train() -> Self {
        Self {
            batch_size: DEFAULT_BATCH_SIZE,
            shuffle: true,
            sort: false,
            sort_within_batch: false,
            pool_factor: DEFAULT_POOL_FACTOR,
            seed: 0,
        }
    }

    /// Key-sorted consecutive batches.
    pub fn eval() -> Self {
        Self {
            shuffle: false,
            sort: true,
            ..Self::train()
        }
    }

    /// Consecutive batches in dataset order.
    pub fn sequential() -> Self {
        Self {
            shuffle: false,
            sort: false,
            ..Self::train()
        }
    }

    /// Set the batch size.
    pub fn with_batch_size(
        self,
        batch_size: usize,
    ) -> Self {
        Self { batch_size, ..self }
    }

    /// Set shuffling.
    pub fn with_shuffle(
        self,
        shuffle: bool,
    ) -> Self {
        Self { shuffle, ..self }
    }

    /// Set global sorting.
    pub fn with_sort(
        self,
        sort: bool,
    ) -> Self {
        Self { sort, ..self }
    }

    /// Set within-batch sorting.
    pub fn with_sort_within_batch(
        self,
        sort_within_batch: bool,
    ) -> Self {
        Self {
            sort_within_batch,
            ..self
        }
    }

    /// Set the bucketing pool factor; values below 1 are treated as 1.
    pub fn with_pool_factor(
        self,
        pool_factor: usize,
    ) -> Self {
        Self {
            pool_factor: pool_factor.max(1),
            ..self
        }
    }

    /// Set the seed.
    pub fn with_seed(
        self,
        seed: u64,
    ) -> Self {
        Self { seed, ..self }
    }

    /// Build a [`BatchIterator`] over examples with the given sort keys.
    pub fn init(
        self,
        keys: Vec<usize>,
    ) -> WSResult<BatchIterator> {
        BatchIterator::new(keys, self)
    }
}

/// Plans epochs of minibatches over a dataset of keyed examples.
#[derive(Debug, Clone)]
pub struct BatchIterator {
    options: BatchIteratorOptions,
    keys: Vec<usize>,
    epoch: u64,
}

impl BatchIterator {
    /// Create an iterator; `keys[i]` is the sort key of example `i`.
    pub fn new(
        keys: Vec<usize>,
        options: BatchIteratorOptions,
    ) -> WSResult<Self> {
        if options.batch_size == 0 {
            return Err(WordsieveError::InvalidBatchSize(options.batch_size));
        }
        if options.pool_factor == 0 {
            return Err(WordsieveError::InvalidPoolFactor(options.pool_factor));
        }
        Ok(Self {
            options,
            keys,
            epoch: 0,
        })
    }

    /// Create an iterator keyed by `key(example)`.
    pub fn from_examples<E, F>(
        examples: &[E],
        key: F,
        options: BatchIteratorOptions,
    ) -> WSResult<Self>
    where
        F: Fn(&E) -> usize,
    {
        Self::new(examples.iter().map(key).collect(), options)
    }

    /// The options.
    pub fn options(&self) -> &BatchIteratorOptions {
        &self.options
    }

    /// The number of examples.
    pub fn num_examples(&self) -> usize {
        self.keys.len()
    }

    /// The number of batches per epoch.
    pub fn num_batches(&self) -> usize {
        self.keys.len().div_ceil(self.options.batch_size)
    }

    /// The number of the epoch the next [`Self::epoch`] call returns.
    pub fn current_epoch(&self) -> u64 {
        self.epoch
    }

    /// Plan the batches of the current epoch, and advance.
    pub fn epoch(&mut self) -> Vec<Vec<usize>> {
        let batches = self.plan(self.epoch);
        self.epoch += 1;
        batches
    }

    /// Plan the batches of a given epoch.
    pub fn plan(
        &self,
        epoch: u64,
    ) -> Vec<Vec<usize>> {
        let opts = &self.options;
        let bs = opts.batch_size;
        let mut rng = StdRng::seed_from_u64(opts.seed.wrapping_add(epoch));

        let mut order: Vec<usize> = (0..self.keys.len()).collect();
        if opts.sort {
            order.sort_by_key(|&i| self.keys[i]);
        } else if opts.shuffle {
            order.shuffle(&mut rng);
        }

        let mut batches: Vec<Vec<usize>> = Vec::with_capacity(self.num_batches());
        if opts.sort {
            batches.extend(order.chunks(bs).map(<[usize]>::to_vec));
        } else {
            for pool in order.chunks(bs.saturating_mul(opts.pool_factor)) {
                let mut pool = pool.to_vec();
                if opts.sort_within_batch {
                    pool.sort_by_key(|&i| self.keys[i]);
                }
                let mut pool_batches: Vec<Vec<usize>> =
                    pool.chunks(bs).map(<[usize]>::to_vec).collect();
                if opts.shuffle {
                    pool_batches.shuffle(&mut rng);
                }
                batches.extend(pool_batches);
            }
        }

        if opts.sort_within_batch {
            for batch in &mut batches {
                if opts.sort {
                    batch.reverse();
                } else {
                    batch.sort_by(|&a, &b| self.keys[b].cmp(&self.keys[a]));
                }
            }
        }

        batches
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flatten_sorted(batches: &[Vec<usize>]) -> Vec<usize> {
        let mut all: Vec<usize> = batches.iter().flatten().copied().collect();
        all.sort();
        all
    }

    #[test]
    fn test_zero_batch_size() {
        let options = BatchIteratorOptions::train().with_batch_size(0);
        assert!(matches!(
            options.init(vec![1, 2]),
            Err(WordsieveError::InvalidBatchSize(0))
        ));
    }

    #[test]
    fn test_zero_pool_factor() {
        let options = BatchIteratorOptions {
            pool_factor: 0,
            ..BatchIteratorOptions::train()
        };
        assert!(matches!(
            options.with_batch_size(2).init(vec![1, 2, 3]),
            Err(WordsieveError::InvalidPoolFactor(0))
        ));

        let iter = BatchIteratorOptions::train()
            .with_pool_factor(0)
            .with_batch_size(2)
            .init(vec![1, 2, 3])
            .unwrap();
        assert_eq!(iter.options().pool_factor, 1);
        assert_eq!(flatten_sorted(&iter.plan(0)), vec![0, 1, 2]);
    }

    #[test]
    fn test_huge_pool() {
        let iter = BatchIteratorOptions::train()
            .with_batch_size(usize::MAX / 2)
            .with_pool_factor(usize::MAX)
            .init(vec![3, 1, 2])
            .unwrap();
        let batches = iter.plan(0);
        assert_eq!(batches.len(), 1);
        assert_eq!(flatten_sorted(&batches), vec![0, 1, 2]);
    }

    #[test]
    fn test_sequential() {
        let mut iter = BatchIteratorOptions::sequential()
            .with_batch_size(3)
            .init(vec![5, 1, 4, 2, 3, 9, 7])
            .unwrap();
        assert_eq!(iter.num_batches(), 3);
        assert_eq!(
            iter.epoch(),
            vec![vec![0, 1, 2], vec![3, 4, 5], vec![6]]
        );
        assert_eq!(iter.current_epoch(), 1);
    }

    #[test]
    fn test_eval_sorted() {
        let iter = BatchIteratorOptions::eval()
            .with_batch_size(2)
            .init(vec![5, 1, 4, 2, 3])
            .unwrap();
        assert_eq!(iter.plan(0), vec![vec![1, 3], vec![4, 2], vec![0]]);
        assert_eq!(iter.plan(0), iter.plan(9));

        let iter = BatchIteratorOptions::eval()
            .with_batch_size(2)
            .with_sort_within_batch(true)
            .init(vec![5, 1, 4, 2, 3])
            .unwrap();
        assert_eq!(iter.plan(0), vec![vec![3, 1], vec![2, 4], vec![0]]);
    }

    #[test]
    fn test_train_covers_every_example_once() {
        let keys: Vec<usize> = (0..1000).map(|i| (i * 37) % 101).collect();
        let mut iter = BatchIteratorOptions::train()
            .with_batch_size(64)
            .with_pool_factor(4)
            .with_seed(11)
            .init(keys)
            .unwrap();

        let expected: Vec<usize> = (0..1000).collect();
        let first = iter.epoch();
        let second = iter.epoch();

        assert_eq!(first.len(), 16);
        assert_eq!(flatten_sorted(&first), expected);
        assert_eq!(flatten_sorted(&second), expected);
        assert_ne!(first, second);
        assert!(first.iter().all(|b| !b.is_empty() && b.len() <= 64));

        // Deterministic per (seed, epoch).
        assert_eq!(iter.plan(0), first);
    }

    #[test]
    fn test_sort_within_batch_descending() {
        let keys: Vec<usize> = (0..50).map(|i| (i * 7) % 13).collect();
        let iter = BatchIteratorOptions::train()
            .with_batch_size(8)
            .with_sort_within_batch(true)
            .with_seed(2)
            .init(keys.clone())
            .unwrap();

        for batch in iter.plan(0) {
            let batch_keys: Vec<usize> = batch.iter().map(|&i| keys[i]).collect();
            assert!(batch_keys.windows(2).all(|w| w[0] >= w[1]));
        }
    }

    #[test]
    fn test_empty() {
        let iter = BatchIteratorOptions::train().init(Vec::new()).unwrap();
        assert_eq!(iter.num_batches(), 0);
        assert!(iter.plan(0).is_empty());
    }
}
