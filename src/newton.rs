//! Newton's method for scalar root finding.
mod params;
pub use self::params::Params;

mod solve;
pub use solve::{solve, solve_with_status};
