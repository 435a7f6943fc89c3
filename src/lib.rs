//! Learning rate schedules for external training loops
//!
//! `recocer` computes a learning-rate multiplier as a function of step count,
//! following linear warm-up, cosine annealing, and a fixed floor past the
//! schedule horizon. The step counter is supplied by the caller; the crate
//! keeps no training state of its own beyond the schedule parameters.
//!
//! # Example
//!
//! ```
//! use recocer::{LRScheduler, WarmUpCosineAnnealingLR};
//!
//! let mut schedule = WarmUpCosineAnnealingLR::new(1.0, 0.1, 10, 110)?;
//!
//! // Direct evaluation at an externally tracked step
//! assert!((schedule.lr_at(10) - 1.0).abs() < 1e-6);
//!
//! // Training-loop style: read, apply, step
//! for _ in 0..5 {
//!     let _lr = schedule.get_lr();
//!     schedule.step();
//! }
//! # Ok::<(), recocer::Error>(())
//! ```

pub mod callback;
pub mod error;
pub mod optim;
pub mod schedule;

pub use callback::{CallbackAction, CallbackContext, LRSchedulerCallback, TrainerCallback};
pub use error::{Error, Result};
pub use optim::{Optimizer, SGD};
pub use schedule::{
    LRScheduler, ScheduleBuilder, ScheduleSpec, WarmUpCosineAnnealingLR, DEFAULT_INIT_LR,
    POST_HORIZON_LR,
};
