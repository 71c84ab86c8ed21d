//! Dense polynomial problems
use super::Problem;

/// Root-finding problem for a dense polynomial
///
/// Coefficients are stored in ascending degree order, so
/// `Polynomial::new(vec![3.0, 0.0, -1.0])` represents `3 - x²`.
#[derive(Clone, Debug)]
pub struct Polynomial {
    coeffs: Vec<f64>,
}

impl Polynomial {
    /// Creates a new [`Polynomial`] problem from coefficients in ascending degree order.
    pub fn new(coeffs: Vec<f64>) -> Self {
        Polynomial { coeffs }
    }

    /// Returns the degree of the polynomial (`0` for the empty coefficient list).
    pub fn degree(&self) -> usize {
        self.coeffs.len().saturating_sub(1)
    }
}

impl Problem for Polynomial {
    fn objective(&self, x: f64) -> f64 {
        // Horner evaluation from the leading coefficient
        self.coeffs.iter().rev().fold(0.0, |v, &c| v * x + c)
    }

    fn derivative(&self, x: f64) -> f64 {
        self.coeffs
            .iter()
            .enumerate()
            .skip(1)
            .rev()
            .fold(0.0, |v, (k, &c)| v * x + k as f64 * c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_objective_horner() {
        // 2 - 3x + x³
        let p = Polynomial::new(vec![2.0, -3.0, 0.0, 1.0]);
        assert_eq!(p.objective(0.0), 2.0);
        assert_eq!(p.objective(1.0), 0.0);
        assert_eq!(p.objective(2.0), 4.0);
        assert_eq!(p.objective(-2.0), 0.0);
    }

    #[test]
    fn test_derivative_horner() {
        // d/dx (2 - 3x + x³) = -3 + 3x²
        let p = Polynomial::new(vec![2.0, -3.0, 0.0, 1.0]);
        assert_eq!(p.derivative(0.0), -3.0);
        assert_eq!(p.derivative(1.0), 0.0);
        assert_eq!(p.derivative(2.0), 9.0);
    }

    #[test]
    fn test_constant_polynomial() {
        let p = Polynomial::new(vec![5.0]);
        assert_eq!(p.degree(), 0);
        assert_eq!(p.objective(3.0), 5.0);
        assert_eq!(p.derivative(3.0), 0.0);
    }

    #[test]
    fn test_empty_polynomial() {
        let p = Polynomial::new(vec![]);
        assert_eq!(p.objective(1.5), 0.0);
        assert_eq!(p.derivative(1.5), 0.0);
    }

    #[test]
    fn test_matches_quintic() {
        let p = Polynomial::new(vec![0.0, 0.0, 3.0, -4.0, -5.0, 6.0]);
        let q = super::super::Quintic::new();
        for x in [-1.5, -0.5, 0.0, 0.25, 1.0, 2.0] {
            assert!((p.objective(x) - q.objective(x)).abs() < 1e-12);
            assert!((p.derivative(x) - q.derivative(x)).abs() < 1e-12);
        }
    }
}
