//! Demonstration entry points for the march_core routines: each subcommand
//! runs one worked example and prints the result next to the closed-form
//! value where one exists.

use anyhow::Result;
use clap::{Parser, Subcommand};
use march_core::derivative::{forward_diff_1st_order, forward_diff_2nd_order};
use march_core::solvers::{euler_method, runge_kutta_3rd, runge_kutta_4th};
use march_core::trajectory::Trajectory;

#[derive(Parser)]
#[command(name = "march", about = "Worked examples of fixed-step numerical methods")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Forward-difference derivatives of sin(x) at x = 1
    Deriv {
        /// Step size
        #[arg(long, default_value_t = 0.1)]
        h: f64,
    },
    /// Euler's method on dy/dx = y - x^2 + 1, y(0) = 0.5
    Euler {
        /// Step size
        #[arg(long, default_value_t = 0.1)]
        h: f64,
        /// Right endpoint of the integration interval
        #[arg(long, default_value_t = 1.0)]
        x_end: f64,
    },
    /// Runge-Kutta (3rd and 4th order) on the same initial-value problem
    Rk {
        /// Step size
        #[arg(long, default_value_t = 0.1)]
        h: f64,
        /// Right endpoint of the integration interval
        #[arg(long, default_value_t = 1.0)]
        x_end: f64,
    },
}

// dy/dx = y - x^2 + 1 with y(0) = 0.5; solved by y = (x + 1)^2 - e^x / 2.
fn example_ode(x: f64, y: f64) -> f64 {
    y - x * x + 1.0
}

fn example_solution(x: f64) -> f64 {
    (x + 1.0) * (x + 1.0) - 0.5 * x.exp()
}

fn print_trajectory(trajectory: &Trajectory<f64>, with_exact: bool) {
    for (x, y) in trajectory.iter() {
        if with_exact {
            println!("x = {x:.2}, y = {y:.4}, exact = {:.4}", example_solution(x));
        } else {
            println!("x = {x:.2}, y = {y:.4}");
        }
    }
}

fn run_deriv(h: f64) {
    let x = 1.0;
    let first = forward_diff_1st_order(f64::sin, x, h);
    let second = forward_diff_2nd_order(f64::sin, x, h);
    println!("Approximated 1st derivative at x={x}: {first}");
    println!("Approximated 2nd derivative at x={x}: {second}");
    println!("Actual 1st derivative at x={x}: {}", x.cos());
    println!("Actual 2nd derivative at x={x}: {}", -x.sin());
}

fn run_euler(h: f64, x_end: f64) -> Result<()> {
    let trajectory = euler_method(&example_ode, 0.0, 0.5, h, x_end)?;
    println!("Euler Method Results:");
    print_trajectory(&trajectory, true);
    Ok(())
}

fn run_rk(h: f64, x_end: f64) -> Result<()> {
    let third = runge_kutta_3rd(&example_ode, 0.0, 0.5, h, x_end)?;
    println!("3rd Order Runge-Kutta Results:");
    print_trajectory(&third, true);

    let fourth = runge_kutta_4th(&example_ode, 0.0, 0.5, h, x_end)?;
    println!("4th Order Runge-Kutta Results:");
    print_trajectory(&fourth, true);
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Command::Deriv { h } => run_deriv(h),
        Command::Euler { h, x_end } => run_euler(h, x_end)?,
        Command::Rk { h, x_end } => run_rk(h, x_end)?,
    }
    Ok(())
}
