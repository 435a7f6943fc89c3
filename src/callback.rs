//! Training-loop callbacks
//!
//! The schedule itself is a pure formula; these hooks are the seam an
//! external training loop uses to step it once per optimizer step (or once
//! per epoch) and read the current rate back.

use crate::schedule::LRScheduler;

/// Context passed to callbacks with current training state
#[derive(Clone, Debug, Default)]
pub struct CallbackContext {
    /// Current epoch (0-indexed)
    pub epoch: usize,
    /// Current step within the epoch
    pub step: usize,
    /// Global step count
    pub global_step: usize,
    /// Current loss value
    pub loss: f32,
    /// Current learning rate
    pub lr: f32,
}

/// Action to take after a callback
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CallbackAction {
    /// Continue training normally
    Continue,
    /// Stop training
    Stop,
}

/// Trait for training callbacks
///
/// All methods have default no-op implementations, so implementors only need
/// the events they care about.
pub trait TrainerCallback: Send {
    /// Called before training starts
    fn on_train_begin(&mut self, _ctx: &CallbackContext) -> CallbackAction {
        CallbackAction::Continue
    }

    /// Called after each epoch
    fn on_epoch_end(&mut self, _ctx: &CallbackContext) -> CallbackAction {
        CallbackAction::Continue
    }

    /// Called after each training step
    fn on_step_end(&mut self, _ctx: &CallbackContext) -> CallbackAction {
        CallbackAction::Continue
    }

    /// Get callback name for logging
    fn name(&self) -> &'static str {
        "TrainerCallback"
    }
}

/// Callback that advances a learning rate schedule during training
///
/// Can step the schedule per optimizer step or per epoch; the loop reads the
/// scheduled rate back through `current_lr` and applies it to its optimizer.
pub struct LRSchedulerCallback<S: LRScheduler + Send> {
    scheduler: S,
    per_step: bool,
    initial_lr: Option<f32>,
}

impl<S: LRScheduler + Send> LRSchedulerCallback<S> {
    /// Create callback that steps the schedule per epoch
    pub fn per_epoch(scheduler: S) -> Self {
        Self { scheduler, per_step: false, initial_lr: None }
    }

    /// Create callback that steps the schedule per optimizer step
    pub fn per_step(scheduler: S) -> Self {
        Self { scheduler, per_step: true, initial_lr: None }
    }

    /// Get current learning rate from the schedule
    pub fn current_lr(&self) -> f32 {
        self.scheduler.get_lr()
    }
}

impl<S: LRScheduler + Send> TrainerCallback for LRSchedulerCallback<S> {
    fn on_train_begin(&mut self, ctx: &CallbackContext) -> CallbackAction {
        self.initial_lr = Some(ctx.lr);
        CallbackAction::Continue
    }

    fn on_epoch_end(&mut self, _ctx: &CallbackContext) -> CallbackAction {
        if !self.per_step {
            self.scheduler.step();
        }
        CallbackAction::Continue
    }

    fn on_step_end(&mut self, _ctx: &CallbackContext) -> CallbackAction {
        if self.per_step {
            self.scheduler.step();
        }
        CallbackAction::Continue
    }

    fn name(&self) -> &'static str {
        "LRSchedulerCallback"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::WarmUpCosineAnnealingLR;
    use approx::assert_abs_diff_eq;

    fn schedule() -> WarmUpCosineAnnealingLR {
        WarmUpCosineAnnealingLR::builder(1.0, 0.1, 10, 110)
            .init(0.0)
            .build()
            .unwrap()
    }

    #[test]
    fn test_per_step_callback_advances_schedule() {
        let mut cb = LRSchedulerCallback::per_step(schedule());
        let ctx = CallbackContext::default();

        for _ in 0..10 {
            assert_eq!(cb.on_step_end(&ctx), CallbackAction::Continue);
        }
        // ten steps land on the warm-up/cosine boundary
        assert_abs_diff_eq!(cb.current_lr(), 1.0, epsilon = 1e-6);

        // epoch events do not advance a per-step callback
        cb.on_epoch_end(&ctx);
        assert_abs_diff_eq!(cb.current_lr(), 1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_per_epoch_callback_advances_schedule() {
        let mut cb = LRSchedulerCallback::per_epoch(schedule());
        let ctx = CallbackContext::default();

        cb.on_step_end(&ctx);
        assert_abs_diff_eq!(cb.current_lr(), 0.0, epsilon = 1e-8);

        for _ in 0..5 {
            cb.on_epoch_end(&ctx);
        }
        assert_abs_diff_eq!(cb.current_lr(), 0.5, epsilon = 1e-6);
    }

    #[test]
    fn test_callback_records_initial_lr() {
        let mut cb = LRSchedulerCallback::per_step(schedule());
        let ctx = CallbackContext { lr: 0.123, ..Default::default() };
        cb.on_train_begin(&ctx);
        assert_eq!(cb.initial_lr, Some(0.123));
    }

    #[test]
    fn test_callback_name() {
        let cb = LRSchedulerCallback::per_epoch(schedule());
        assert_eq!(cb.name(), "LRSchedulerCallback");
    }

    #[test]
    fn test_default_trainer_callback_impl() {
        struct MinimalCallback;
        impl TrainerCallback for MinimalCallback {
            fn name(&self) -> &'static str {
                "MinimalCallback"
            }
        }

        let mut cb = MinimalCallback;
        let ctx = CallbackContext::default();
        assert_eq!(cb.on_train_begin(&ctx), CallbackAction::Continue);
        assert_eq!(cb.on_epoch_end(&ctx), CallbackAction::Continue);
        assert_eq!(cb.on_step_end(&ctx), CallbackAction::Continue);
    }
}
