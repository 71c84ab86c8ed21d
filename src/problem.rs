//! Definition of scalar root-finding problems.
mod polynomial;
mod quintic;
pub use polynomial::Polynomial;
pub use quintic::Quintic;

use crate::status::Status;

/// Base for the definition of a root-finding problem
pub trait Problem {
    /// Evaluates the objective function at `x`.
    fn objective(&self, x: f64) -> f64;
    /// Evaluates the derivative of the objective at `x`.
    fn derivative(&self, x: f64) -> f64;

    /// Returns the residual at `x` (the convergence measure).
    fn residual(&self, x: f64) -> f64 {
        self.objective(x).abs()
    }

    /// Checks for optimality.
    fn is_optimal(&self, status: &Status, tol: f64) -> bool {
        status.residual <= tol
    }
}
