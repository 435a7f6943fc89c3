//! Optimizer trait

use ndarray::Array1;

/// Trait for optimization algorithms driven by an external training loop
///
/// Gradients are supplied explicitly, one per parameter vector; the loop owns
/// both. A schedule adjusts the single base rate through `set_lr`, so every
/// parameter vector sees the same multiplier.
pub trait Optimizer {
    /// Perform a single optimization step
    ///
    /// `params` and `grads` must have the same length and matching shapes.
    fn step(&mut self, params: &mut [Array1<f32>], grads: &[Array1<f32>]);

    /// Get learning rate
    fn lr(&self) -> f32;

    /// Set learning rate
    fn set_lr(&mut self, lr: f32);
}
