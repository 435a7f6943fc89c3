//! Optimizer seam for applying scheduled learning rates
//!
//! The schedule only produces a multiplier; these types are the surface a
//! training loop pushes it into via `set_lr`.

mod optimizer;
mod sgd;

pub use optimizer::Optimizer;
pub use sgd::SGD;
