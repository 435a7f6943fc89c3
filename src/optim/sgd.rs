//! Stochastic Gradient Descent optimizer

use super::Optimizer;
use ndarray::Array1;

/// SGD optimizer with optional momentum
pub struct SGD {
    lr: f32,
    momentum: f32,
    velocities: Vec<Option<Array1<f32>>>,
}

impl SGD {
    /// Create a new SGD optimizer
    pub fn new(lr: f32, momentum: f32) -> Self {
        Self {
            lr,
            momentum,
            velocities: Vec::new(),
        }
    }

    /// Initialize velocities if needed
    fn ensure_velocities(&mut self, n: usize) {
        if self.velocities.is_empty() {
            self.velocities = vec![None; n];
        }
    }
}

impl Optimizer for SGD {
    fn step(&mut self, params: &mut [Array1<f32>], grads: &[Array1<f32>]) {
        self.ensure_velocities(params.len());

        for (i, (param, grad)) in params.iter_mut().zip(grads).enumerate() {
            if self.momentum > 0.0 {
                let velocity = self.velocities[i].get_or_insert_with(|| Array1::zeros(grad.len()));

                // v = momentum * v - lr * grad
                *velocity *= self.momentum;
                velocity.scaled_add(-self.lr, grad);

                // param = param + v
                *param += &*velocity;
            } else {
                // param -= lr * grad
                param.scaled_add(-self.lr, grad);
            }
        }
    }

    fn lr(&self) -> f32 {
        self.lr
    }

    fn set_lr(&mut self, lr: f32) {
        self.lr = lr;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use ndarray::arr1;

    #[test]
    fn test_sgd_step() {
        let mut opt = SGD::new(0.1, 0.0);
        let mut params = vec![arr1(&[1.0f32, 2.0, 3.0])];
        let grads = vec![arr1(&[0.5f32, 1.0, 1.5])];

        opt.step(&mut params, &grads);

        assert_abs_diff_eq!(params[0][0], 0.95, epsilon = 1e-6);
        assert_abs_diff_eq!(params[0][1], 1.9, epsilon = 1e-6);
        assert_abs_diff_eq!(params[0][2], 2.85, epsilon = 1e-6);
    }

    #[test]
    fn test_sgd_momentum_accumulates() {
        let mut opt = SGD::new(0.1, 0.9);
        let mut params = vec![arr1(&[1.0f32])];
        let grads = vec![arr1(&[1.0f32])];

        // first step: v = -0.1, param = 0.9
        opt.step(&mut params, &grads);
        assert_abs_diff_eq!(params[0][0], 0.9, epsilon = 1e-6);

        // second step: v = 0.9 * -0.1 - 0.1 = -0.19, param = 0.71
        opt.step(&mut params, &grads);
        assert_abs_diff_eq!(params[0][0], 0.71, epsilon = 1e-6);
    }

    #[test]
    fn test_sgd_multiple_params() {
        let mut opt = SGD::new(0.1, 0.0);
        let mut params = vec![arr1(&[1.0f32, 2.0]), arr1(&[3.0f32, 4.0])];
        let grads = vec![arr1(&[0.5f32, 1.0]), arr1(&[1.5f32, 2.0])];

        opt.step(&mut params, &grads);

        assert_abs_diff_eq!(params[0][0], 0.95, epsilon = 1e-6);
        assert_abs_diff_eq!(params[1][0], 2.85, epsilon = 1e-6);
        assert_abs_diff_eq!(params[1][1], 3.8, epsilon = 1e-6);
    }

    #[test]
    fn test_sgd_set_lr() {
        let mut opt = SGD::new(0.1, 0.0);
        assert_abs_diff_eq!(opt.lr(), 0.1, epsilon = 1e-8);

        opt.set_lr(0.01);
        assert_abs_diff_eq!(opt.lr(), 0.01, epsilon = 1e-8);
    }
}
