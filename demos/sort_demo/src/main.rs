//! Sorts a list of integers and prints the original array, the sorted array and how long the sort
//! took. Without values it sorts a built-in example array both ways.

use std::fmt::Display;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use classic_sort::{Algorithm, Order};
use log::{debug, info};

const EXAMPLE: [i64; 11] = [34, 7, 23, 32, 5, 62, 1, 19, 42, 11, 94];

#[derive(Parser, Debug)]
#[command(version, about = "Sorts integers with a textbook sorting algorithm", long_about = None)]
struct Args {
    /// `quick`, `merge` or `insertion`.
    #[arg(short, long, default_value = "quick")]
    algorithm: String,

    /// `asc` or `desc`. Ignored when no values are given.
    #[arg(short, long, default_value = "asc")]
    order: Order,

    #[arg(short, long)]
    verbose: bool,

    /// Values to sort.
    #[arg(allow_negative_numbers = true)]
    values: Vec<i64>,
}

fn format_array<T: Display>(v: &[T]) -> String {
    let items: Vec<String> = v.iter().map(ToString::to_string).collect();
    format!("[{}]", items.join(", "))
}

fn sort_and_display(input: &[i64], order: Order, algorithm: Algorithm) {
    println!("Original array: {}", format_array(input));

    let start = Instant::now();
    let sorted = classic_sort::sort(input, order, algorithm);
    let elapsed = start.elapsed();

    println!("Sorted array ({order} using {algorithm}): {}", format_array(&sorted));
    println!("Execution time: {:.6} ms", elapsed.as_secs_f64() * 1000.0);
    debug!("{algorithm} sorted {} elements in {elapsed:?}", input.len());
}

fn main() -> Result<()> {
    let args = Args::parse();

    let log_level = if args.verbose { log::LevelFilter::Debug } else { log::LevelFilter::Info };
    env_logger::builder().filter_level(log_level).init();

    let algorithm: Algorithm = args
        .algorithm
        .parse()
        .with_context(|| format!("cannot sort with `{}`", args.algorithm))?;

    if args.values.is_empty() {
        info!("no values given, sorting the example array");

        println!("ASCENDING ORDER:");
        sort_and_display(&EXAMPLE, Order::Ascending, algorithm);

        println!("\nDESCENDING ORDER:");
        sort_and_display(&EXAMPLE, Order::Descending, algorithm);
    } else {
        sort_and_display(&args.values, args.order, algorithm);
    }

    Ok(())
}
