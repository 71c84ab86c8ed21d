use super::params::Params;
use crate::problem::Problem;
use crate::status::{Status, StatusCode};
use crate::time;

/// Uses Newton's method to solve the given root-finding problem starting from the initial guess `x0`.
pub fn solve(
    problem: &dyn Problem,
    x0: f64,
    params: &Params,
    callback: Option<&dyn Fn(&Status) -> bool>,
) -> Status {
    let status = Status::new(x0);
    solve_with_status(status, problem, params, callback)
}

/// Uses Newton's method to solve the given root-finding problem starting from a particular [`Status`].
pub fn solve_with_status(
    status: Status,
    problem: &dyn Problem,
    params: &Params,
    callback: Option<&dyn Fn(&Status) -> bool>,
) -> Status {
    let mut status = status;
    let start = time::now();
    let mut step: usize = 0;
    let mut stop = false;

    if params.verbose > 0 {
        println!(
            "{:>10} {:>10} {:>12} {:>14} {:>18}",
            "step", "time", "residual", "value", "estimate",
        )
    }

    loop {
        // update steps and time
        status.steps = step;
        let elapsed = time::until_now(start);
        status.time = elapsed;

        // evaluate the current point
        let fx = problem.objective(status.x);
        status.fx = fx;
        status.residual = problem.residual(status.x);

        // handle step limit
        if step >= params.max_steps {
            status.code = StatusCode::MaxSteps;
            stop = true;
        }

        // handle time limit
        if params.time_limit > 0.0 && elapsed >= params.time_limit {
            status.code = StatusCode::TimeLimit;
            stop = true;
        }

        // handle callback
        if let Some(callback_fn) = callback {
            if callback_fn(&status) {
                status.code = StatusCode::Callback;
                stop = true;
            }
        };

        // check for optimality
        let optimal = problem.is_optimal(&status, params.tol);
        if optimal {
            status.code = StatusCode::Optimal;
            stop = true;
        }

        // a vanishing derivative leaves no step to take
        let dfx = problem.derivative(status.x);
        if !stop && dfx == 0.0 {
            status.code = StatusCode::NoStepPossible;
            stop = true;
        }

        // handle progress output
        if params.verbose > 0 && (step % params.verbose == 0 || stop) {
            println!(
                "{:10} {:10.2} {:12.03e} {:14.06e} {:18.12}",
                step, elapsed, status.residual, status.fx, status.x,
            )
        }

        // terminate
        if stop {
            break;
        }

        // apply the Newton update
        status.x -= fx / dfx;
        step += 1;
    }
    status
}
