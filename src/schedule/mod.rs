//! Learning rate schedules
//!
//! Provides the warm-up + cosine annealing schedule:
//! - `WarmUpCosineAnnealingLR` - Linear warm-up, half-cosine decay, fixed
//!   floor past the horizon
//!
//! Schedules implement [`LRScheduler`] so a training loop can step them once
//! per optimizer step and read the current rate back.

mod spec;
mod warmup_cosine_annealing;


pub use spec::ScheduleSpec;
pub use warmup_cosine_annealing::{
    ScheduleBuilder, WarmUpCosineAnnealingLR, DEFAULT_INIT_LR, POST_HORIZON_LR,
};

/// Learning rate scheduler trait
pub trait LRScheduler {
    /// Get the learning rate for the current step
    fn get_lr(&self) -> f32;

    /// Step the scheduler (typically called after each optimizer step)
    fn step(&mut self);
}
