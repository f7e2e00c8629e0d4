//! Online Bayesian bagging ensemble.
//!
//! [`BayesianBagging`] owns a fixed number of clones of one base-learner
//! template. Every labeled instance is shown to every model, each time with
//! its own weight drawn from a Gamma distribution chosen by the configured
//! [`WeightSampler`]. This stands in for bootstrap resampling on a stream
//! that can only be read once.
//!
//! # Example
//!
//! ```rust
//! use bayesian_bagging::{BayesianBagging, ConfigBuilder, DenseInstance, SamplerKind};
//!
//! # fn main() -> bayesian_bagging::Result<()> {
//! let config = ConfigBuilder::new()
//!     .ensemble_size(5)
//!     .sampler(SamplerKind::Adaptive)
//!     .random_seed(7)
//!     .build()?;
//! let mut bag = BayesianBagging::from_config(config)?;
//!
//! for i in 0..50 {
//!     let x = i as f64 / 10.0;
//!     let class = if x > 2.5 { 1 } else { 0 };
//!     bag.train_on_instance(&DenseInstance::new(vec![x], class, 2)?)?;
//! }
//!
//! let votes = bag.votes_for_instance(&DenseInstance::new(vec![4.5], 1, 2)?)?;
//! assert!(votes[1] > votes[0]);
//! # Ok(())
//! # }
//! ```

use crate::config::BaggingConfig;
use crate::core::constants::*;
use crate::core::error::{BaggingError, Result};
use crate::core::traits::{max_vote_index, Instance, StreamingClassifier};
use crate::core::types::{ClassIndex, Count, Measurement, Vote, Weight};
use crate::instance::weighted_copy;
use crate::learners::BaseLearner;
use crate::sampling::{draw_weight, GammaParams, RunningClassStats, SeedStream, WeightSampler};
use std::collections::HashMap;
use std::fmt;

/// Online Bayesian bagging over base learners of type `C`.
#[derive(Debug, Clone)]
pub struct BayesianBagging<C: StreamingClassifier = BaseLearner> {
    config: BaggingConfig,
    template: C,
    ensemble: Option<Vec<C>>,
    sampler: WeightSampler,
    stats: Option<RunningClassStats>,
    seeds: SeedStream,
}

impl BayesianBagging<BaseLearner> {
    /// Build and reset an ensemble of the configured base learner.
    pub fn from_config(config: BaggingConfig) -> Result<Self> {
        let template = BaseLearner::from_kind(config.base_learner);
        let mut bag = Self::new(config, template)?;
        bag.reset();
        Ok(bag)
    }
}

impl<C: StreamingClassifier> BayesianBagging<C> {
    /// Create an ensemble around `template`.
    ///
    /// The ensemble is empty until [`reset`](Self::reset) is called; training,
    /// prediction and sub-classifier access fail with
    /// [`BaggingError::Uninitialized`] before that.
    pub fn new(config: BaggingConfig, template: C) -> Result<Self> {
        config.validate()?;
        let sampler = WeightSampler::from_kind(config.sampler, config.adaptive_k)?;
        let seeds = SeedStream::new(config.random_seed);

        Ok(BayesianBagging {
            config,
            template,
            ensemble: None,
            sampler,
            stats: None,
            seeds,
        })
    }

    /// Create and immediately reset.
    pub fn prepared(config: BaggingConfig, template: C) -> Result<Self> {
        let mut bag = Self::new(config, template)?;
        bag.reset();
        Ok(bag)
    }

    /// Short description of the method.
    pub fn purpose(&self) -> &'static str {
        "Adaptive Bayesian bagging"
    }

    /// Rebuild the ensemble from the template and forget all statistics.
    pub fn reset(&mut self) {
        self.template.reset_learning();
        self.ensemble = Some(vec![self.template.clone(); self.config.ensemble_size]);
        self.stats = None;
        self.sampler.reset();
        self.seeds.reset();

        log::debug!(
            "Reset ensemble: size={}, sampler={}, seed={}",
            self.config.ensemble_size,
            self.sampler,
            self.seeds.seed()
        );
    }

    /// Replace the configuration, then reset.
    pub fn reset_with_config(&mut self, config: BaggingConfig) -> Result<()> {
        config.validate()?;
        self.sampler = WeightSampler::from_kind(config.sampler, config.adaptive_k)?;
        self.seeds = SeedStream::new(config.random_seed);
        self.config = config;
        self.reset();
        Ok(())
    }

    /// Train every model on its own weighted copy of `instance`.
    ///
    /// The instance's own weight is replaced by each model's draw. All
    /// weights are drawn in slot order, against the statistics as they stood
    /// before this call, before any model is trained; a sampling failure
    /// leaves the ensemble untouched. The statistics are then updated once.
    ///
    /// A model that fails to train does not stop the others. The instance is
    /// still counted and the first model error is returned afterwards, so
    /// every model keeps its seed slot on later instances.
    pub fn train_on_instance(&mut self, instance: &dyn Instance) -> Result<()> {
        self.train_scaled(instance, 1.0)
    }

    fn train_scaled(&mut self, instance: &dyn Instance, scale: Weight) -> Result<()> {
        let Self {
            config,
            ensemble,
            sampler,
            stats,
            seeds,
            ..
        } = self;

        let ensemble = ensemble
            .as_mut()
            .ok_or_else(|| BaggingError::uninitialized("train_on_instance"))?;

        let class = instance.class_value();
        let num_classes = instance.num_classes();
        if class >= num_classes {
            return Err(BaggingError::class_out_of_range(class, num_classes));
        }

        let stats = stats.get_or_insert_with(|| RunningClassStats::new(num_classes));
        check_num_classes(stats, num_classes)?;

        let mut slots = seeds.clone();
        let mut weights = Vec::with_capacity(ensemble.len());
        for index in 0..ensemble.len() {
            let (params, gamma) = sampler.distribution(stats, class)?;
            let weight = draw_weight(&gamma, &mut slots.next_rng());

            if config.verbose {
                log_draw(index, stats, class, params, weight);
            }
            weights.push(weight * scale);
        }
        *seeds = slots;

        let mut first_error = None;
        for (index, (model, weight)) in ensemble.iter_mut().zip(weights).enumerate() {
            let weighted = weighted_copy(instance, weight);
            if let Err(err) = model.train_on_instance(weighted.as_ref()) {
                log::warn!("Model {} failed to train on class {}: {}", index, class, err);
                first_error.get_or_insert(err);
            }
        }

        stats.record(class)?;
        first_error.map_or(Ok(()), Err)
    }

    /// Sum of the normalized votes of every non-abstaining model.
    pub fn votes_for_instance(&self, instance: &dyn Instance) -> Result<Vec<Vote>> {
        let ensemble = self.models_or_err("votes_for_instance")?;
        let votes = ensemble
            .iter()
            .map(|model| model.votes_for_instance(instance))
            .collect::<Result<Vec<_>>>()?;
        Ok(combine_votes(votes))
    }

    /// Class with the largest combined vote, `None` if every model abstains.
    pub fn predict_class(&self, instance: &dyn Instance) -> Result<Option<ClassIndex>> {
        Ok(max_vote_index(&self.votes_for_instance(instance)?))
    }

    /// Whether the predicted class equals the instance's class.
    pub fn correctly_classifies(&self, instance: &dyn Instance) -> Result<bool> {
        Ok(self.predict_class(instance)? == Some(instance.class_value()))
    }

    /// Snapshot of the ensemble members.
    pub fn sub_classifiers(&self) -> Result<Vec<C>> {
        Ok(self.models_or_err("sub_classifiers")?.to_vec())
    }

    /// Borrowed view of the ensemble members.
    pub fn models(&self) -> Result<&[C]> {
        self.models_or_err("models")
    }

    fn models_or_err(&self, operation: &str) -> Result<&[C]> {
        self.ensemble
            .as_deref()
            .ok_or_else(|| BaggingError::uninitialized(operation))
    }

    /// Number of models, 0 before reset.
    pub fn ensemble_size(&self) -> usize {
        self.ensemble.as_ref().map_or(0, Vec::len)
    }

    /// Always true: the weights come from a seeded random stream.
    pub fn is_randomizable(&self) -> bool {
        true
    }

    /// Measurements for reporting collaborators.
    pub fn model_measurements(&self) -> Vec<Measurement> {
        vec![Measurement::new(
            ENSEMBLE_SIZE_MEASUREMENT,
            self.ensemble_size() as f64,
        )]
    }

    /// Measurements keyed by name.
    pub fn measurements_map(&self) -> HashMap<String, f64> {
        self.model_measurements()
            .into_iter()
            .map(|m| (m.name, m.value))
            .collect()
    }

    /// Running statistics, `None` until the first training call.
    pub fn stats(&self) -> Option<&RunningClassStats> {
        self.stats.as_ref()
    }

    /// Smoothed class frequencies, `None` until the first training call.
    pub fn class_frequencies(&self) -> Option<&[Count]> {
        self.stats.as_ref().map(RunningClassStats::frequencies)
    }

    /// Smoothed instance total; the Laplace prior before any training.
    pub fn instance_count(&self) -> Count {
        self.stats.as_ref().map_or(LAPLACE_PRIOR, RunningClassStats::total)
    }

    /// Gamma parameters the next training call would use for `class`.
    pub fn sample_params(&self, class: ClassIndex, num_classes: usize) -> Result<GammaParams> {
        match &self.stats {
            Some(stats) => {
                check_num_classes(stats, num_classes)?;
                self.sampler.params(stats, class)
            }
            None => self.sampler.params(&RunningClassStats::new(num_classes), class),
        }
    }

    /// Toggle per-draw diagnostics.
    pub fn set_verbose(&mut self, verbose: bool) {
        self.config.verbose = verbose;
    }

    /// Whether per-draw diagnostics are on.
    pub fn is_verbose(&self) -> bool {
        self.config.verbose
    }

    /// Current configuration.
    pub fn config(&self) -> &BaggingConfig {
        &self.config
    }

    /// Weight sampler in use.
    pub fn sampler(&self) -> &WeightSampler {
        &self.sampler
    }

    /// Template the ensemble is cloned from.
    pub fn template(&self) -> &C {
        &self.template
    }
}

fn check_num_classes(stats: &RunningClassStats, num_classes: usize) -> Result<()> {
    if stats.num_classes() != num_classes {
        return Err(BaggingError::dimension_mismatch(
            format!("{} classes", stats.num_classes()),
            format!("{} classes", num_classes),
        ));
    }
    Ok(())
}

fn log_draw(index: usize, stats: &RunningClassStats, class: ClassIndex, params: GammaParams, weight: f64) {
    log::info!(
        target: DIAGNOSTICS_TARGET,
        "model {}: freqs = {:?}, freq[{}] = {}, tot = {}, shape = {}, scale = {}, E[W] = {}, Var[W] = {}, weight = {}",
        index,
        stats.frequencies(),
        class,
        stats.frequency(class).unwrap_or(0),
        stats.total(),
        params.shape,
        params.scale,
        params.mean(),
        params.variance(),
        weight
    );
}

/// Combine per-model vote vectors.
///
/// A vector with a positive sum is normalized to sum 1 and added in; a
/// vector summing to zero is an abstention and is skipped. The result is
/// as long as the longest contributing vector and is not normalized.
pub fn combine_votes<I>(votes: I) -> Vec<Vote>
where
    I: IntoIterator<Item = Vec<Vote>>,
{
    let mut combined: Vec<Vote> = Vec::new();
    for vote in votes {
        let sum: Vote = vote.iter().sum();
        if !(sum > 0.0) {
            continue;
        }
        if combined.len() < vote.len() {
            combined.resize(vote.len(), 0.0);
        }
        for (total, v) in combined.iter_mut().zip(&vote) {
            *total += v / sum;
        }
    }
    combined
}

/// Lets an ensemble serve as the base learner of another one.
///
/// The weight handed down by the outer ensemble scales every inner draw, and
/// instances with a non-positive weight are skipped, as the shipped learners
/// do.
impl<C: StreamingClassifier> StreamingClassifier for BayesianBagging<C> {
    fn reset_learning(&mut self) {
        self.reset();
    }

    fn train_on_instance(&mut self, instance: &dyn Instance) -> Result<()> {
        let weight = instance.weight();
        if !(weight > 0.0) {
            return Ok(());
        }
        self.train_scaled(instance, weight)
    }

    fn votes_for_instance(&self, instance: &dyn Instance) -> Result<Vec<Vote>> {
        BayesianBagging::votes_for_instance(self, instance)
    }

    fn is_randomizable(&self) -> bool {
        true
    }
}

impl<C: StreamingClassifier> fmt::Display for BayesianBagging<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} x {:?}, sampler {}, seed {}, {} instances seen",
            self.purpose(),
            self.ensemble_size(),
            self.template,
            self.sampler,
            self.seeds.seed(),
            self.stats.as_ref().map_or(0, RunningClassStats::observed)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigBuilder;
    use crate::core::types::{BaseLearnerKind, SamplerKind};
    use crate::instance::DenseInstance;
    use crate::learners::MajorityClass;
    use approx::assert_relative_eq;
    use rand::SeedableRng;
    use rand_distr::Distribution;
    use rand_xoshiro::Xoshiro256PlusPlus;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    /// Records the weight of every instance it is trained on.
    #[derive(Debug, Clone, Default)]
    struct WeightRecorder {
        weights: Rc<RefCell<Vec<f64>>>,
        seen: Vec<f64>,
    }

    impl StreamingClassifier for WeightRecorder {
        fn reset_learning(&mut self) {
            self.seen.clear();
        }

        fn train_on_instance(&mut self, instance: &dyn Instance) -> Result<()> {
            self.weights.borrow_mut().push(instance.weight());
            self.seen.push(instance.weight());
            Ok(())
        }

        fn votes_for_instance(&self, _instance: &dyn Instance) -> Result<Vec<Vote>> {
            Ok(vec![self.seen.len() as f64, 1.0])
        }
    }

    /// Returns a fixed vote vector.
    #[derive(Debug, Clone)]
    struct FixedVotes(Vec<Vote>);

    impl StreamingClassifier for FixedVotes {
        fn reset_learning(&mut self) {}

        fn train_on_instance(&mut self, _instance: &dyn Instance) -> Result<()> {
            Ok(())
        }

        fn votes_for_instance(&self, _instance: &dyn Instance) -> Result<Vec<Vote>> {
            Ok(self.0.clone())
        }
    }

    /// Records every weight it is offered and fails on one chosen call,
    /// counted across all clones.
    #[derive(Debug, Clone)]
    struct FailingRecorder {
        weights: Rc<RefCell<Vec<f64>>>,
        calls: Rc<Cell<usize>>,
        fail_on: usize,
        trained: usize,
    }

    impl StreamingClassifier for FailingRecorder {
        fn reset_learning(&mut self) {
            self.trained = 0;
        }

        fn train_on_instance(&mut self, instance: &dyn Instance) -> Result<()> {
            self.weights.borrow_mut().push(instance.weight());
            let call = self.calls.get();
            self.calls.set(call + 1);
            if call == self.fail_on {
                return Err(BaggingError::config("learner rejected the instance"));
            }
            self.trained += 1;
            Ok(())
        }

        fn votes_for_instance(&self, _instance: &dyn Instance) -> Result<Vec<Vote>> {
            Ok(vec![self.trained as f64])
        }
    }

    fn config(size: usize, sampler: SamplerKind, seed: u64) -> BaggingConfig {
        ConfigBuilder::new()
            .ensemble_size(size)
            .sampler(sampler)
            .random_seed(seed)
            .build()
            .unwrap()
    }

    fn instance(class: usize, num_classes: usize) -> DenseInstance {
        DenseInstance::new(vec![class as f64], class, num_classes).unwrap()
    }

    #[test]
    fn test_combine_votes_excludes_abstentions() {
        let combined = combine_votes(vec![vec![2.0, 2.0], vec![0.0, 0.0], vec![1.0, 3.0]]);
        assert_eq!(combined.len(), 2);
        assert_relative_eq!(combined[0], 0.75);
        assert_relative_eq!(combined[1], 1.25);
    }

    #[test]
    fn test_combine_votes_grows_to_longest() {
        let combined = combine_votes(vec![vec![1.0], vec![0.0, 0.0, 4.0], vec![]]);
        assert_eq!(combined, vec![1.0, 0.0, 1.0]);
        assert!(combine_votes(Vec::<Vec<f64>>::new()).is_empty());
    }

    #[test]
    fn test_predict_through_ensemble_matches_literal_example() {
        let mut bag = BayesianBagging::new(
            config(1, SamplerKind::Adaptive, 1),
            FixedVotes(vec![]),
        )
        .unwrap();
        bag.ensemble = Some(vec![
            FixedVotes(vec![2.0, 2.0]),
            FixedVotes(vec![0.0, 0.0]),
            FixedVotes(vec![1.0, 3.0]),
        ]);

        let votes = bag.votes_for_instance(&instance(0, 2)).unwrap();
        assert_relative_eq!(votes[0], 0.75);
        assert_relative_eq!(votes[1], 1.25);
        assert_eq!(bag.predict_class(&instance(1, 2)).unwrap(), Some(1));
    }

    #[test]
    fn test_uninitialized_access_is_an_error() {
        let mut bag = BayesianBagging::new(BaggingConfig::default(), MajorityClass::new()).unwrap();
        let probe = instance(0, 2);

        assert!(matches!(
            bag.votes_for_instance(&probe),
            Err(BaggingError::Uninitialized { .. })
        ));
        assert!(matches!(
            bag.sub_classifiers(),
            Err(BaggingError::Uninitialized { .. })
        ));
        assert!(matches!(
            bag.train_on_instance(&probe),
            Err(BaggingError::Uninitialized { .. })
        ));
        assert_eq!(bag.ensemble_size(), 0);
        assert_eq!(bag.measurements_map().get(ENSEMBLE_SIZE_MEASUREMENT), Some(&0.0));
    }

    #[test]
    fn test_reset_builds_ensemble_of_configured_size() {
        let bag = BayesianBagging::prepared(config(7, SamplerKind::Adaptive, 1), MajorityClass::new())
            .unwrap();
        assert_eq!(bag.ensemble_size(), 7);
        assert_eq!(bag.sub_classifiers().unwrap().len(), 7);
        assert_eq!(bag.model_measurements(), vec![Measurement::new("ensemble size", 7.0)]);
        assert!(bag.is_randomizable());
    }

    #[test]
    fn test_laplace_state_after_reset() {
        let mut bag = BayesianBagging::from_config(config(3, SamplerKind::Adaptive, 1)).unwrap();
        bag.train_on_instance(&instance(1, 3)).unwrap();
        bag.reset();

        assert!(bag.class_frequencies().is_none());
        assert_eq!(bag.instance_count(), 1);
        assert_eq!(bag.sample_params(2, 3).unwrap(), GammaParams::UNIT);
    }

    #[test]
    fn test_stats_ordering() {
        let mut bag = BayesianBagging::from_config(config(4, SamplerKind::Adaptive, 1)).unwrap();

        let before = bag.sample_params(0, 2).unwrap();
        assert_eq!(before, GammaParams::new(1.0, 1.0));

        bag.train_on_instance(&instance(0, 2)).unwrap();
        assert_eq!(bag.class_frequencies(), Some(&[2, 1][..]));
        assert_eq!(bag.instance_count(), 2);
        assert_eq!(bag.sample_params(0, 2).unwrap(), GammaParams::new(1.0, 1.0));
        assert_eq!(bag.sample_params(1, 2).unwrap(), GammaParams::new(0.5, 2.0));
    }

    #[test]
    fn test_weights_follow_master_seed_slots() {
        let recorder = WeightRecorder::default();
        let log = Rc::clone(&recorder.weights);
        let mut bag =
            BayesianBagging::prepared(config(3, SamplerKind::Adaptive, 42), recorder).unwrap();

        bag.train_on_instance(&instance(0, 2)).unwrap();
        bag.train_on_instance(&instance(1, 2)).unwrap();

        // First instance: Gamma(1, 1); second: class 1 with freqs [2, 1], total 2
        let mut seeds = SeedStream::new(42);
        let first = GammaParams::new(1.0, 1.0).distribution().unwrap();
        let second = GammaParams::new(0.5, 2.0).distribution().unwrap();
        let mut expected = Vec::new();
        for gamma in [first, second] {
            for _ in 0..3 {
                let mut rng = Xoshiro256PlusPlus::seed_from_u64(seeds.next_seed());
                expected.push(gamma.sample(&mut rng));
            }
        }

        assert_eq!(*log.borrow(), expected);
    }

    #[test]
    fn test_models_are_independent() {
        let mut bag =
            BayesianBagging::prepared(config(2, SamplerKind::ClassCount, 5), MajorityClass::new())
                .unwrap();
        bag.train_on_instance(&instance(1, 2)).unwrap();

        let mut snapshot = bag.sub_classifiers().unwrap();
        let probe = instance(0, 2);
        let untouched = snapshot[1].votes_for_instance(&probe).unwrap();

        for _ in 0..5 {
            snapshot[0].train_on_instance(&instance(0, 2)).unwrap();
        }

        assert_eq!(snapshot[1].votes_for_instance(&probe).unwrap(), untouched);
        assert_eq!(bag.models().unwrap()[0].votes_for_instance(&probe).unwrap()[0], 0.0);
    }

    #[test]
    fn test_class_count_weights_share_one_distribution() {
        let recorder = WeightRecorder::default();
        let log = Rc::clone(&recorder.weights);
        let mut bag =
            BayesianBagging::prepared(config(2, SamplerKind::ClassCount, 9), recorder).unwrap();

        for class in [0, 2, 1, 1] {
            bag.train_on_instance(&instance(class, 3)).unwrap();
            assert_eq!(bag.sample_params(class, 3).unwrap(), GammaParams::new(3.0, 1.0));
        }

        let gamma = GammaParams::new(3.0, 1.0).distribution().unwrap();
        let mut seeds = SeedStream::new(9);
        let expected: Vec<f64> = (0..8)
            .map(|_| gamma.sample(&mut seeds.next_rng()))
            .collect();
        assert_eq!(*log.borrow(), expected);
    }

    #[test]
    fn test_rejects_inconsistent_instances() {
        let mut bag = BayesianBagging::from_config(config(2, SamplerKind::Adaptive, 1)).unwrap();
        bag.train_on_instance(&instance(0, 2)).unwrap();

        let err = bag.train_on_instance(&instance(0, 3)).unwrap_err();
        assert!(matches!(err, BaggingError::DimensionMismatch { .. }));
        assert_eq!(bag.instance_count(), 2);
    }

    #[test]
    fn test_failing_model_keeps_slot_order() {
        let recorder = FailingRecorder {
            weights: Rc::default(),
            calls: Rc::default(),
            fail_on: 1,
            trained: 0,
        };
        let log = Rc::clone(&recorder.weights);
        let mut bag =
            BayesianBagging::prepared(config(3, SamplerKind::Adaptive, 11), recorder).unwrap();

        let err = bag.train_on_instance(&instance(0, 2)).unwrap_err();
        assert_eq!(err.category(), "config");
        assert_eq!(bag.class_frequencies(), Some(&[2, 1][..]));
        assert_eq!(bag.instance_count(), 2);

        let trained: Vec<usize> = bag.models().unwrap().iter().map(|m| m.trained).collect();
        assert_eq!(trained, vec![1, 0, 1]);

        bag.train_on_instance(&instance(0, 2)).unwrap();
        assert_eq!(bag.class_frequencies(), Some(&[3, 1][..]));

        // Both instances draw from Gamma(1, 1): f = n on fresh and on [2, 1] stats
        let gamma = GammaParams::UNIT.distribution().unwrap();
        let mut seeds = SeedStream::new(11);
        let expected: Vec<f64> = (0..6)
            .map(|_| gamma.sample(&mut seeds.next_rng()))
            .collect();
        assert_eq!(*log.borrow(), expected);
    }

    #[test]
    fn test_sample_params_checks_class_count() {
        let mut bag = BayesianBagging::from_config(config(2, SamplerKind::Adaptive, 1)).unwrap();
        bag.train_on_instance(&instance(0, 2)).unwrap();

        let err = bag.sample_params(0, 3).unwrap_err();
        assert!(matches!(err, BaggingError::DimensionMismatch { .. }));
        assert!(bag.sample_params(0, 2).is_ok());
    }

    #[test]
    fn test_nested_training_scales_inner_weights() {
        let recorder = WeightRecorder::default();
        let log = Rc::clone(&recorder.weights);
        let mut inner =
            BayesianBagging::prepared(config(2, SamplerKind::Adaptive, 3), recorder).unwrap();

        StreamingClassifier::train_on_instance(&mut inner, &instance(0, 2).with_weight(2.5))
            .unwrap();

        let gamma = GammaParams::UNIT.distribution().unwrap();
        let mut seeds = SeedStream::new(3);
        let expected: Vec<f64> = (0..2)
            .map(|_| gamma.sample(&mut seeds.next_rng()) * 2.5)
            .collect();
        assert_eq!(*log.borrow(), expected);

        for weight in [0.0, -1.0] {
            StreamingClassifier::train_on_instance(&mut inner, &instance(1, 2).with_weight(weight))
                .unwrap();
        }
        assert_eq!(log.borrow().len(), 2);
        assert_eq!(inner.instance_count(), 2);

        // The inherent method keeps the drawn weight as is
        inner.train_on_instance(&instance(1, 2).with_weight(7.0)).unwrap();
        assert!(log.borrow()[2..].iter().all(|&w| w != 7.0));
        assert_eq!(inner.instance_count(), 3);
    }

    #[test]
    fn test_reset_with_config() {
        let mut bag = BayesianBagging::from_config(config(2, SamplerKind::Adaptive, 1)).unwrap();
        bag.reset_with_config(config(4, SamplerKind::ClassCount, 3)).unwrap();
        assert_eq!(bag.ensemble_size(), 4);
        assert_eq!(bag.sampler().kind(), SamplerKind::ClassCount);

        let mut bad = config(4, SamplerKind::Adaptive, 3);
        bad.ensemble_size = 0;
        assert!(bag.reset_with_config(bad).is_err());
        assert_eq!(bag.ensemble_size(), 4);
    }

    #[test]
    fn test_verbose_toggle_does_not_change_weights() {
        let quiet_recorder = WeightRecorder::default();
        let quiet_log = Rc::clone(&quiet_recorder.weights);
        let loud_recorder = WeightRecorder::default();
        let loud_log = Rc::clone(&loud_recorder.weights);

        let mut quiet =
            BayesianBagging::prepared(config(3, SamplerKind::Adaptive, 8), quiet_recorder).unwrap();
        let mut loud =
            BayesianBagging::prepared(config(3, SamplerKind::Adaptive, 8), loud_recorder).unwrap();
        loud.set_verbose(true);
        assert!(loud.is_verbose());

        for class in [0, 1, 1, 0] {
            quiet.train_on_instance(&instance(class, 2)).unwrap();
            loud.train_on_instance(&instance(class, 2)).unwrap();
        }
        assert_eq!(*quiet_log.borrow(), *loud_log.borrow());
    }

    #[test]
    fn test_description() {
        let bag = BayesianBagging::from_config(
            ConfigBuilder::new()
                .ensemble_size(3)
                .base_learner(BaseLearnerKind::MajorityClass)
                .build()
                .unwrap(),
        )
        .unwrap();
        let description = bag.to_string();
        assert!(description.starts_with("Adaptive Bayesian bagging: 3 x"));
        assert!(description.contains("adaptive(k=1)"));
        assert_eq!(bag.purpose(), "Adaptive Bayesian bagging");
    }
}
