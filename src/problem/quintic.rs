//! The built-in quintic problem
use super::Problem;

/// Root-finding problem for the quintic `6x⁵ - 5x⁴ - 4x³ + 3x²`
///
/// The polynomial has a double root at `0` and simple roots near
/// `-0.7953`, `0.6287` and `1.0`.
#[derive(Clone, Copy, Debug, Default)]
pub struct Quintic {}

impl Quintic {
    /// Creates a new [`Quintic`] problem.
    pub fn new() -> Self {
        Quintic {}
    }
}

impl Problem for Quintic {
    fn objective(&self, x: f64) -> f64 {
        6.0 * x.powi(5) - 5.0 * x.powi(4) - 4.0 * x.powi(3) + 3.0 * x.powi(2)
    }

    fn derivative(&self, x: f64) -> f64 {
        30.0 * x.powi(4) - 20.0 * x.powi(3) - 12.0 * x.powi(2) + 6.0 * x
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_objective_values() {
        let p = Quintic::new();
        assert_eq!(p.objective(0.0), 0.0);
        assert_eq!(p.objective(1.0), 0.0);
        assert_eq!(p.objective(-1.0), -4.0);
        assert_eq!(p.objective(2.0), 92.0);
    }

    #[test]
    fn test_derivative_values() {
        let p = Quintic::new();
        assert_eq!(p.derivative(0.0), 0.0);
        assert_eq!(p.derivative(1.0), 4.0);
        assert_eq!(p.derivative(-1.0), 32.0);
    }

    #[test]
    fn test_residual_is_absolute() {
        let p = Quintic::new();
        assert_eq!(p.residual(-1.0), 4.0);
    }
}
