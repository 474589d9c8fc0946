//! # Dataset Splits

use rand::{SeedableRng, rngs::StdRng, seq::SliceRandom};

use crate::{
    data::Labeled,
    errors::{WSResult, WordsieveError},
    types::WSHashMap,
};

/// The classifier's train fraction.
pub const DEFAULT_SPLIT_RATIO: f64 = 0.8;

/// How to divide a dataset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SplitRatio {
    /// Train fraction; the remainder is held out as validation.
    Holdout(f64),

    /// `(train, valid, test)` weights; normalized to sum to 1.
    ThreeWay(f64, f64, f64),
}

impl Default for SplitRatio {
    fn default() -> Self {
        Self::Holdout(DEFAULT_SPLIT_RATIO)
    }
}

impl SplitRatio {
    /// Validate and normalize to `(train, valid, test)` fractions.
    pub fn fractions(&self) -> WSResult<(f64, f64, f64)> {
        match *self {
            Self::Holdout(train) => {
                if !(train > 0.0 && train < 1.0) {
                    return Err(WordsieveError::InvalidSplitRatio(format!(
                        "train fraction {train} not in (0, 1)"
                    )));
                }
                Ok((train, 1.0 - train, 0.0))
            }
            Self::ThreeWay(train, valid, test) => {
                let parts = [train, valid, test];
                if parts.iter().any(|p| !p.is_finite() || *p < 0.0) {
                    return Err(WordsieveError::InvalidSplitRatio(format!(
                        "negative or non-finite ratio in {parts:?}"
                    )));
                }
                let total: f64 = parts.iter().sum();
                if total <= 0.0 {
                    return Err(WordsieveError::InvalidSplitRatio(format!(
                        "ratios {parts:?} sum to zero"
                    )));
                }
                Ok((train / total, valid / total, test / total))
            }
        }
    }
}

/// The parts of a split dataset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetSplit<E> {
    /// Training examples.
    pub train: Vec<E>,

    /// Validation examples.
    pub valid: Vec<E>,

    /// Test examples; empty for [`SplitRatio::Holdout`].
    pub test: Vec<E>,
}

/// Options for [`split_dataset`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SplitOptions {
    /// The split ratio.
    pub ratio: SplitRatio,

    /// Split each label separately, preserving label proportions.
    pub stratified: bool,

    /// Shuffle seed; `None` draws one at random.
    pub seed: Option<u64>,
}

impl SplitOptions {
    /// Set the ratio.
    pub fn with_ratio(
        self,
        ratio: SplitRatio,
    ) -> Self {
        Self { ratio, ..self }
    }

    /// Set stratification.
    pub fn with_stratified(
        self,
        stratified: bool,
    ) -> Self {
        Self { stratified, ..self }
    }

    /// Set the seed.
    pub fn with_seed(
        self,
        seed: Option<u64>,
    ) -> Self {
        Self { seed, ..self }
    }

    fn rng(&self) -> StdRng {
        StdRng::seed_from_u64(self.seed.unwrap_or_else(rand::random))
    }
}

/// Part lengths for `n` examples; the validation part takes the remainder.
fn part_lengths(
    n: usize,
    (train, _, test): (f64, f64, f64),
) -> (usize, usize) {
    let train_len = ((train * n as f64).round_ties_even() as usize).min(n);
    let test_len = ((test * n as f64).round_ties_even() as usize).min(n - train_len);
    (train_len, test_len)
}

fn split_shuffled<E>(
    mut examples: Vec<E>,
    fractions: (f64, f64, f64),
    rng: &mut StdRng,
) -> DatasetSplit<E> {
    examples.shuffle(rng);
    let (train_len, test_len) = part_lengths(examples.len(), fractions);

    let mut rest = examples.split_off(train_len);
    let valid = rest.split_off(test_len);
    DatasetSplit {
        train: examples,
        valid,
        test: rest,
    }
}

/// Randomly split examples into train/valid(/test) parts.
///
/// Each part length is `round_half_even(fraction * n)`, the validation
/// part taking whatever remains.
pub fn split_dataset<E: Labeled>(
    examples: Vec<E>,
    options: &SplitOptions,
) -> WSResult<DatasetSplit<E>> {
    let fractions = options.ratio.fractions()?;
    let mut rng = options.rng();

    if !options.stratified {
        return Ok(split_shuffled(examples, fractions, &mut rng));
    }

    let mut order: Vec<String> = Vec::new();
    let mut groups: WSHashMap<String, Vec<E>> = WSHashMap::default();
    for example in examples {
        let label = example.label().to_string();
        if !groups.contains_key(&label) {
            order.push(label.clone());
        }
        groups.entry(label).or_default().push(example);
    }
    order.sort();

    let mut split = DatasetSplit {
        train: Vec::new(),
        valid: Vec::new(),
        test: Vec::new(),
    };
    for label in order {
        let group = groups.remove(&label).unwrap_or_default();
        let part = split_shuffled(group, fractions, &mut rng);
        split.train.extend(part.train);
        split.valid.extend(part.valid);
        split.test.extend(part.test);
    }
    split.train.shuffle(&mut rng);
    split.valid.shuffle(&mut rng);
    split.test.shuffle(&mut rng);
    Ok(split)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::LabeledExample;

    fn examples(
        n: usize,
        label: &str,
    ) -> Vec<LabeledExample> {
        (0..n)
            .map(|i| LabeledExample::new(format!("{label}{i}"), label))
            .collect()
    }

    #[test]
    fn test_fractions() {
        assert_eq!(SplitRatio::default().fractions().unwrap().0, 0.8);
        assert!(SplitRatio::Holdout(1.0).fractions().is_err());
        assert!(SplitRatio::Holdout(0.0).fractions().is_err());
        assert!(SplitRatio::Holdout(f64::NAN).fractions().is_err());
        assert_eq!(
            SplitRatio::ThreeWay(2.0, 1.0, 1.0).fractions().unwrap(),
            (0.5, 0.25, 0.25)
        );
        assert!(SplitRatio::ThreeWay(0.0, 0.0, 0.0).fractions().is_err());
        assert!(SplitRatio::ThreeWay(0.5, -0.1, 0.6).fractions().is_err());
    }

    #[test]
    fn test_part_lengths_round_half_even() {
        assert_eq!(part_lengths(10, (0.8, 0.2, 0.0)), (8, 0));
        // 0.5 * 5 = 2.5 rounds to 2.
        assert_eq!(part_lengths(5, (0.5, 0.5, 0.0)), (2, 0));
        // 0.5 * 7 = 3.5 rounds to 4.
        assert_eq!(part_lengths(7, (0.5, 0.5, 0.0)), (4, 0));
        assert_eq!(part_lengths(10, (0.6, 0.2, 0.2)), (6, 2));
        assert_eq!(part_lengths(0, (0.8, 0.2, 0.0)), (0, 0));
    }

    #[test]
    fn test_holdout_split() {
        let options = SplitOptions::default().with_seed(Some(7));
        let split = split_dataset(examples(100, "a"), &options).unwrap();
        assert_eq!(split.train.len(), 80);
        assert_eq!(split.valid.len(), 20);
        assert!(split.test.is_empty());

        let mut all: Vec<String> = split
            .train
            .iter()
            .chain(split.valid.iter())
            .map(|e| e.text.clone())
            .collect();
        all.sort();
        let mut expected: Vec<String> = examples(100, "a").into_iter().map(|e| e.text).collect();
        expected.sort();
        assert_eq!(all, expected);

        // Deterministic under a seed.
        let again = split_dataset(examples(100, "a"), &options).unwrap();
        assert_eq!(again, split);
    }

    #[test]
    fn test_three_way_split() {
        let options = SplitOptions::default()
            .with_ratio(SplitRatio::ThreeWay(0.7, 0.2, 0.1))
            .with_seed(Some(1));
        let split = split_dataset(examples(50, "x"), &options).unwrap();
        assert_eq!(split.train.len(), 35);
        assert_eq!(split.test.len(), 5);
        assert_eq!(split.valid.len(), 10);
    }

    #[test]
    fn test_stratified_split() {
        let mut data = examples(40, "pos");
        data.extend(examples(10, "neg"));

        let options = SplitOptions::default()
            .with_stratified(true)
            .with_seed(Some(3));
        let split = split_dataset(data, &options).unwrap();

        let count = |part: &[LabeledExample], label: &str| {
            part.iter().filter(|e| e.label == label).count()
        };
        assert_eq!(count(&split.train, "pos"), 32);
        assert_eq!(count(&split.train, "neg"), 8);
        assert_eq!(count(&split.valid, "pos"), 8);
        assert_eq!(count(&split.valid, "neg"), 2);
    }
}
