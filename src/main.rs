use rusroot::newton;
use rusroot::problem::Quintic;

fn main() {
    let problem = Quintic::new();
    let mut params = newton::Params::new();
    params.tol = 1e-10;
    params.verbose = 1;

    for x0 in [-1.0, 0.0, 0.5, 2.0] {
        let status = newton::solve(&problem, x0, &params, None);
        println!("Root is at: {}", status.x);
        println!("f(x) at root is: {}", status.fx);
    }
}
