//! Gamma weight samplers.
//!
//! A sampler turns the current [`RunningClassStats`] and the class of the
//! arriving instance into the parameters of a Gamma distribution from which
//! each ensemble member draws its weight for that instance.
//!
//! Two variants exist:
//!
//! - [`AdaptiveSampler`]: `shape = k·f/n`, `scale = n/(k·f)` where `f` is the
//!   smoothed frequency of the instance's class and `n` the smoothed total.
//!   The mean weight `shape·scale` is always 1 while the variance
//!   `n/(k²·f)` grows as the class gets rarer, so minority classes are
//!   perturbed more strongly across the ensemble.
//! - [`ClassCountSampler`]: one Gamma(`num_classes`, 1) built on first use
//!   and reused for every later draw.

use super::stats::RunningClassStats;
use crate::core::constants::*;
use crate::core::error::{BaggingError, Result};
use crate::core::types::{ClassIndex, SamplerKind};
use rand_distr::Gamma;
use std::fmt;

/// Shape and scale of a Gamma distribution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GammaParams {
    /// Shape parameter
    pub shape: f64,
    /// Scale parameter
    pub scale: f64,
}

impl GammaParams {
    /// Gamma(1, 1): unit mean, unit variance.
    pub const UNIT: GammaParams = GammaParams {
        shape: FALLBACK_GAMMA_SHAPE,
        scale: FALLBACK_GAMMA_SCALE,
    };

    /// Create new parameters
    pub fn new(shape: f64, scale: f64) -> Self {
        GammaParams { shape, scale }
    }

    /// Mean of the distribution.
    pub fn mean(&self) -> f64 {
        self.shape * self.scale
    }

    /// Variance of the distribution.
    pub fn variance(&self) -> f64 {
        self.shape * self.scale * self.scale
    }

    /// Whether both parameters are finite and strictly positive.
    pub fn is_valid(&self) -> bool {
        self.shape.is_finite() && self.scale.is_finite() && self.shape > 0.0 && self.scale > 0.0
    }

    /// Build the distribution.
    pub fn distribution(&self) -> Result<Gamma<f64>> {
        Ok(Gamma::new(self.shape, self.scale)?)
    }
}

impl fmt::Display for GammaParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Gamma(shape={}, scale={})", self.shape, self.scale)
    }
}

/// Frequency-adaptive sampler.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AdaptiveSampler {
    k: f64,
}

impl AdaptiveSampler {
    /// Create a sampler with tuning constant `k`.
    pub fn new(k: f64) -> Result<Self> {
        if !(k.is_finite() && k > 0.0) {
            return Err(BaggingError::invalid_parameter(
                "adaptive_k",
                k.to_string(),
                "must be finite and positive",
            ));
        }
        Ok(AdaptiveSampler { k })
    }

    /// Tuning constant.
    pub fn k(&self) -> f64 {
        self.k
    }

    /// Parameters for an instance of `class` given the current statistics.
    pub fn params(&self, stats: &RunningClassStats, class: ClassIndex) -> Result<GammaParams> {
        let frequency = stats
            .frequency(class)
            .ok_or_else(|| BaggingError::class_out_of_range(class, stats.num_classes()))?;
        let frequency = frequency as f64;
        let total = stats.total() as f64;

        let params = GammaParams::new(self.k * frequency / total, total / (self.k * frequency));
        if !params.is_valid() {
            // Unreachable with the Laplace floor; kept as a guard
            log::warn!(
                "Degenerate adaptive parameters {} for class {}, falling back to {}",
                params,
                class,
                GammaParams::UNIT
            );
            return Ok(GammaParams::UNIT);
        }
        Ok(params)
    }
}

impl Default for AdaptiveSampler {
    fn default() -> Self {
        AdaptiveSampler {
            k: DEFAULT_ADAPTIVE_K,
        }
    }
}

/// Fixed Gamma(num_classes, 1) sampler.
#[derive(Debug, Clone, Default)]
pub struct ClassCountSampler {
    cached: Option<(GammaParams, Gamma<f64>)>,
}

impl ClassCountSampler {
    /// Create a sampler with nothing cached yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached parameters, if the distribution has been built.
    pub fn cached_params(&self) -> Option<GammaParams> {
        self.cached.map(|(params, _)| params)
    }

    /// Parameters the sampler uses, without building the distribution.
    pub fn params(&self, num_classes: usize) -> GammaParams {
        self.cached_params()
            .unwrap_or_else(|| GammaParams::new(num_classes as f64, CLASS_COUNT_GAMMA_SCALE))
    }

    /// The shared distribution, built on first call.
    pub fn distribution(&mut self, num_classes: usize) -> Result<(GammaParams, Gamma<f64>)> {
        if let Some(cached) = self.cached {
            return Ok(cached);
        }

        let params = self.params(num_classes);
        let gamma = params.distribution()?;
        log::debug!("Class-count sampler fixed at {}", params);
        self.cached = Some((params, gamma));
        Ok((params, gamma))
    }

    /// Forget the cached distribution.
    pub fn clear(&mut self) {
        self.cached = None;
    }
}

/// Weight sampling strategy, one of the two variants.
#[derive(Debug, Clone)]
pub enum WeightSampler {
    /// Frequency-adaptive parameters
    Adaptive(AdaptiveSampler),
    /// Fixed Gamma(num_classes, 1)
    ClassCount(ClassCountSampler),
}

impl WeightSampler {
    /// Build the variant named by `kind`; `k` only matters for the adaptive one.
    pub fn from_kind(kind: SamplerKind, k: f64) -> Result<Self> {
        Ok(match kind {
            SamplerKind::Adaptive => WeightSampler::Adaptive(AdaptiveSampler::new(k)?),
            SamplerKind::ClassCount => WeightSampler::ClassCount(ClassCountSampler::new()),
        })
    }

    /// Which variant this is.
    pub fn kind(&self) -> SamplerKind {
        match self {
            WeightSampler::Adaptive(_) => SamplerKind::Adaptive,
            WeightSampler::ClassCount(_) => SamplerKind::ClassCount,
        }
    }

    /// Parameters the next draw for an instance of `class` would use.
    pub fn params(&self, stats: &RunningClassStats, class: ClassIndex) -> Result<GammaParams> {
        match self {
            WeightSampler::Adaptive(sampler) => sampler.params(stats, class),
            WeightSampler::ClassCount(sampler) => Ok(sampler.params(stats.num_classes())),
        }
    }

    /// Parameters and distribution for one draw, re-evaluated against `stats`.
    pub fn distribution(
        &mut self,
        stats: &RunningClassStats,
        class: ClassIndex,
    ) -> Result<(GammaParams, Gamma<f64>)> {
        match self {
            WeightSampler::Adaptive(sampler) => {
                let params = sampler.params(stats, class)?;
                Ok((params, params.distribution()?))
            }
            WeightSampler::ClassCount(sampler) => sampler.distribution(stats.num_classes()),
        }
    }

    /// Drop any cached state.
    pub fn reset(&mut self) {
        if let WeightSampler::ClassCount(sampler) = self {
            sampler.clear();
        }
    }
}

impl Default for WeightSampler {
    fn default() -> Self {
        WeightSampler::Adaptive(AdaptiveSampler::default())
    }
}

impl fmt::Display for WeightSampler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WeightSampler::Adaptive(sampler) => write!(f, "adaptive(k={})", sampler.k()),
            WeightSampler::ClassCount(_) => write!(f, "class_count"),
        }
    }
}
