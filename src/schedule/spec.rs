//! Declarative schedule parameters

use serde::{Deserialize, Serialize};

use super::warmup_cosine_annealing::DEFAULT_INIT_LR;
use super::WarmUpCosineAnnealingLR;
use crate::error::Result;

/// Schedule parameters as they appear in a training configuration
///
/// Mirrors the [`WarmUpCosineAnnealingLR`] constructor surface; `init`,
/// `offset` and `epoch_size` are optional and take the documented defaults
/// when omitted.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScheduleSpec {
    /// Rate reached at the end of warm-up
    pub peak: f32,
    /// Rate reached at the schedule horizon
    #[serde(rename = "final")]
    pub final_lr: f32,
    /// Number of linear warm-up steps
    pub warm_up_steps: usize,
    /// Schedule horizon, including warm-up
    pub max_steps: usize,
    /// Rate at step zero of the warm-up ramp
    #[serde(default = "default_init")]
    pub init: f32,
    /// Bias added to every caller-supplied step
    #[serde(default)]
    pub offset: i64,
    /// Repeat period in steps; `0` disables wrap-around
    #[serde(default)]
    pub epoch_size: usize,
}

fn default_init() -> f32 {
    DEFAULT_INIT_LR
}

impl WarmUpCosineAnnealingLR {
    /// Build a schedule from a declarative spec
    ///
    /// # Errors
    /// Returns [`crate::Error::ConfigError`] when the spec violates a
    /// construction invariant.
    pub fn from_spec(spec: &ScheduleSpec) -> Result<Self> {
        Self::builder(spec.peak, spec.final_lr, spec.warm_up_steps, spec.max_steps)
            .init(spec.init)
            .offset(spec.offset)
            .epoch_size(spec.epoch_size)
            .build()
    }
}
