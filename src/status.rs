use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
/// Possible outcomes of a solver run
pub enum StatusCode {
    /// Iteration not started
    Initialized,
    /// Root found (up to defined tolerance)
    Optimal,
    /// Maximum number of steps reached
    MaxSteps,
    /// Time limit reached
    TimeLimit,
    /// Stopped by the callback function
    Callback,
    /// Step not possible (derivative vanished at a non-optimal point)
    NoStepPossible,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
/// A struct containing information about the current point and state of the solver
pub struct Status {
    /// Current estimate of the root
    pub x: f64,
    /// Value of the objective function at the current estimate
    pub fx: f64,
    /// Absolute value of the objective at the current estimate
    pub residual: f64,
    /// Current status
    pub code: StatusCode,
    /// Number of conducted steps
    pub steps: usize,
    /// Elapsed time (in seconds)
    pub time: f64,
}

impl Status {
    /// Create a [`Status`] struct with default initialization for the initial guess `x0`
    pub fn new(x0: f64) -> Status {
        Status {
            x: x0,
            fx: 0.0,
            residual: f64::INFINITY,
            code: StatusCode::Initialized,
            steps: 0,
            time: 0.0,
        }
    }
}
