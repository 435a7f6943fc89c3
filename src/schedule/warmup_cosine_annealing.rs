//! Warm-up + cosine annealing learning rate schedule

use std::cell::Cell;
use std::f32::consts::PI;

use super::LRScheduler;
use crate::error::{Error, Result};
use crate::optim::Optimizer;

/// Initial rate used when the builder does not override it.
pub const DEFAULT_INIT_LR: f32 = 1e-8;

/// Floor written over `final` by the first evaluation at or past the horizon.
pub const POST_HORIZON_LR: f32 = 2e-6;

/// Warm-up + Cosine Annealing Learning Rate Schedule
///
/// Three phases over the effective step count:
/// - Warm-up: linear ramp from `init` towards `peak` over `warm_up_steps`
/// - Cosine annealing: half-cosine decay from `peak` down to `final` at
///   `max_steps`
/// - Post-horizon: a fixed floor
///
/// The effective step is the caller-supplied step plus `offset`, reduced
/// modulo `epoch_size` when an epoch size is set, so the schedule can be
/// phase-aligned with an external counter or repeated every epoch.
///
/// # Floor clamping past the horizon
///
/// The first evaluation at or past `max_steps` returns the configured `final`
/// and permanently overwrites it with [`POST_HORIZON_LR`]. Every later
/// post-horizon evaluation returns the overwritten floor, and cosine-phase
/// evaluations reached afterwards (through `offset` or epoch wrap-around)
/// decay towards it instead of the configured value. This is deliberate
/// behavior, not incidental state: once a run crosses its horizon the
/// schedule keeps the rate pinned near zero.
///
/// The overwrite goes through a [`Cell`], so evaluation takes `&self` and the
/// type is `!Sync`; sharing one schedule across threads requires external
/// serialization, which the compiler now enforces.
#[derive(Debug)]
pub struct WarmUpCosineAnnealingLR {
    init: f32,
    peak: f32,
    final_lr: Cell<f32>,
    warm_up_steps: usize,
    max_steps: usize,
    offset: i64,
    epoch_size: usize,
    current_step: usize,
}

impl WarmUpCosineAnnealingLR {
    /// Create a schedule with default `init`, no offset and no epoch wrap
    ///
    /// # Arguments
    /// * `peak` - Rate reached at the end of warm-up
    /// * `final_lr` - Rate reached at `max_steps`
    /// * `warm_up_steps` - Number of linear warm-up steps
    /// * `max_steps` - Schedule horizon, including warm-up
    ///
    /// # Errors
    /// Returns [`Error::ConfigError`] unless `peak >= final_lr >= init >= 0`
    /// and `max_steps >= warm_up_steps`.
    pub fn new(peak: f32, final_lr: f32, warm_up_steps: usize, max_steps: usize) -> Result<Self> {
        Self::builder(peak, final_lr, warm_up_steps, max_steps).build()
    }

    /// Start building a schedule, to override `init`, `offset` or `epoch_size`
    pub fn builder(
        peak: f32,
        final_lr: f32,
        warm_up_steps: usize,
        max_steps: usize,
    ) -> ScheduleBuilder {
        ScheduleBuilder {
            peak,
            final_lr,
            init: DEFAULT_INIT_LR,
            warm_up_steps,
            max_steps,
            offset: 0,
            epoch_size: 0,
        }
    }

    /// Learning rate for an arbitrary step count
    ///
    /// Pure in `step` except for the documented floor overwrite on the first
    /// evaluation at or past the horizon.
    pub fn lr_at(&self, step: usize) -> f32 {
        let mut steps = step as i64 + self.offset;
        if self.epoch_size > 0 {
            steps = steps.rem_euclid(self.epoch_size as i64);
        }

        if self.warm_up_steps > 0 && steps < self.warm_up_steps as i64 {
            return self.init + (self.peak - self.init) / self.warm_up_steps as f32 * steps as f32;
        }

        if steps < self.max_steps as i64 {
            let cos_span = self.max_steps - self.warm_up_steps;
            // warm-up already covers every step below the horizon when
            // warm_up_steps == max_steps, so the span cannot be zero here
            assert!(
                cos_span > 0,
                "cosine span is zero: warm_up_steps == max_steps == {}",
                self.max_steps
            );
            let cos_steps = (steps - self.warm_up_steps as i64) as f32;
            let final_lr = self.final_lr.get();
            return final_lr
                + 0.5 * (self.peak - final_lr) * (1.0 + (cos_steps / cos_span as f32 * PI).cos());
        }

        // First horizon crossing returns the configured floor and clamps it;
        // later crossings return the clamped value.
        self.final_lr.replace(POST_HORIZON_LR)
    }

    /// Current floor value
    ///
    /// Starts at the configured `final_lr` and becomes [`POST_HORIZON_LR`]
    /// after the first evaluation at or past the horizon.
    pub fn final_lr(&self) -> f32 {
        self.final_lr.get()
    }

    /// Apply the current learning rate to an optimizer
    pub fn apply<O: Optimizer>(&self, optimizer: &mut O) {
        optimizer.set_lr(self.get_lr());
    }
}

impl LRScheduler for WarmUpCosineAnnealingLR {
    fn get_lr(&self) -> f32 {
        self.lr_at(self.current_step)
    }

    fn step(&mut self) {
        self.current_step += 1;
    }
}

/// Builder for [`WarmUpCosineAnnealingLR`]
///
/// Carries the optional parameters with their documented defaults:
/// `init = 1e-8`, `offset = 0`, `epoch_size = 0` (wrap-around disabled).
pub struct ScheduleBuilder {
    peak: f32,
    final_lr: f32,
    init: f32,
    warm_up_steps: usize,
    max_steps: usize,
    offset: i64,
    epoch_size: usize,
}

impl ScheduleBuilder {
    /// Rate at step zero of the warm-up ramp
    pub fn init(mut self, init: f32) -> Self {
        self.init = init;
        self
    }

    /// Bias added to every caller-supplied step before evaluation
    pub fn offset(mut self, offset: i64) -> Self {
        self.offset = offset;
        self
    }

    /// Repeat the schedule every `epoch_size` steps; `0` disables wrap-around
    pub fn epoch_size(mut self, epoch_size: usize) -> Self {
        self.epoch_size = epoch_size;
        self
    }

    /// Validate the parameters and build the schedule
    ///
    /// # Errors
    /// Returns [`Error::ConfigError`] when the rate ordering
    /// `peak >= final >= init >= 0` does not hold (NaN parameters fail the
    /// ordering too) or when `max_steps < warm_up_steps`.
    pub fn build(self) -> Result<WarmUpCosineAnnealingLR> {
        if !(self.peak >= self.final_lr && self.final_lr >= self.init && self.init >= 0.0) {
            return Err(Error::ConfigError(format!(
                "rates must satisfy peak >= final >= init >= 0, got peak={}, final={}, init={}",
                self.peak, self.final_lr, self.init
            )));
        }
        if self.max_steps < self.warm_up_steps {
            return Err(Error::ConfigError(format!(
                "max_steps ({}) must be at least warm_up_steps ({})",
                self.max_steps, self.warm_up_steps
            )));
        }

        Ok(WarmUpCosineAnnealingLR {
            init: self.init,
            peak: self.peak,
            final_lr: Cell::new(self.final_lr),
            warm_up_steps: self.warm_up_steps,
            max_steps: self.max_steps,
            offset: self.offset,
            epoch_size: self.epoch_size,
            current_step: 0,
        })
    }
}
