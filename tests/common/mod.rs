//! Common test utilities for Bayesian bagging integration tests.

#![allow(dead_code)]

use bayesian_bagging::*;
use rand::prelude::*;

/// Instances whose single attribute equals their class, in the given class order.
pub fn class_sequence(classes: &[usize], num_classes: usize) -> Vec<DenseInstance> {
    classes
        .iter()
        .map(|&class| DenseInstance::new(vec![class as f64], class, num_classes).unwrap())
        .collect()
}

/// Well separated Gaussian-ish clusters, one per class, classes drawn uniformly.
pub fn cluster_stream(
    num_samples: usize,
    num_classes: usize,
    num_attributes: usize,
    seed: u64,
) -> Vec<DenseInstance> {
    let mut rng = StdRng::seed_from_u64(seed);

    (0..num_samples)
        .map(|_| {
            let class = rng.gen_range(0..num_classes);
            let center = class as f64 * 4.0;
            let values = (0..num_attributes)
                .map(|_| center + rng.gen_range(-1.0..1.0))
                .collect();
            DenseInstance::new(values, class, num_classes).unwrap()
        })
        .collect()
}

/// Two-class stream where class 1 appears with probability `minority_rate`.
pub fn imbalanced_stream(num_samples: usize, minority_rate: f64, seed: u64) -> Vec<DenseInstance> {
    let mut rng = StdRng::seed_from_u64(seed);

    (0..num_samples)
        .map(|_| {
            let class = if rng.gen_bool(minority_rate) { 1 } else { 0 };
            let center = if class == 1 { 3.0 } else { -3.0 };
            let values = vec![center + rng.gen_range(-1.5..1.5), rng.gen_range(-1.0..1.0)];
            DenseInstance::new(values, class, 2).unwrap()
        })
        .collect()
}

/// Train on every instance in order.
pub fn train_all<C: StreamingClassifier>(bag: &mut BayesianBagging<C>, instances: &[DenseInstance]) {
    for instance in instances {
        bag.train_on_instance(instance).unwrap();
    }
}

/// Fraction of `instances` the ensemble classifies correctly.
pub fn accuracy<C: StreamingClassifier>(bag: &BayesianBagging<C>, instances: &[DenseInstance]) -> f64 {
    let correct = instances
        .iter()
        .filter(|instance| bag.correctly_classifies(*instance).unwrap())
        .count();
    correct as f64 / instances.len() as f64
}

/// Small validated configuration.
pub fn small_config(ensemble_size: usize, sampler: SamplerKind, seed: u64) -> BaggingConfig {
    ConfigBuilder::new()
        .ensemble_size(ensemble_size)
        .sampler(sampler)
        .random_seed(seed)
        .build()
        .unwrap()
}
