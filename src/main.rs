mod experiment;
mod ioutils;
mod solvers;

use std::time::Instant;

use log::info;
use num_rational::Ratio;
use rand::rngs::StdRng;
use rand::SeedableRng;
use structopt::StructOpt;

use experiment::{Experiment, DEFAULT_ITERATIONS};
use ioutils::{init_logger, ProblemFromFile};

#[allow(non_camel_case_types)]
pub type ratio = Ratio<u32>;

#[derive(StructOpt, Debug)]
#[structopt(name = "knapsack-trials")]
struct Opts {
    /// Problem file: capacity on the first line, one "weight profit" pair per line after it
    input_problem: ProblemFromFile,
}

fn main() {
    let opts = Opts::from_args();
    init_logger();

    let ProblemFromFile(problem) = opts.input_problem;
    info!(
        "loaded problem: capacity {}, {} items",
        problem.capacity,
        problem.items.len()
    );

    let experiment = Experiment {
        iterations: DEFAULT_ITERATIONS,
    };
    let mut rng = StdRng::from_entropy();

    let start = Instant::now();
    let stats = experiment.run(&problem, &mut rng);
    info!(
        "{} random trials finished in {:?}",
        stats.trials,
        start.elapsed()
    );

    println!("The profit of the greedy algorithm: {}", stats.greedy_profit);
    println!(
        "Stats of the profits of the {} random solutions: minimum = {}, average = {:.2}, maximum = {}",
        stats.trials,
        stats.min_profit,
        stats.average(),
        stats.max_profit
    );
    println!(
        "Random solutions better than greedy: {}/{}",
        stats.better_than_greedy, stats.trials
    );
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Item {
    pub weight: u32,
    pub profit: u32,
    unit_profit: ratio,
}

impl Item {
    // weight must be positive, the unit profit is derived here exactly once
    pub fn new(weight: u32, profit: u32) -> Result<Item, String> {
        if weight == 0 {
            return Err("item weight must be positive".to_string());
        }
        Ok(Item {
            weight,
            profit,
            unit_profit: ratio::new(profit, weight),
        })
    }

    pub fn unit_profit(&self) -> ratio {
        self.unit_profit
    }
}

#[derive(Debug, Clone)]
pub struct Problem {
    pub capacity: u32,
    pub items: Vec<Item>,
}

#[derive(Debug, Clone)]
pub struct Solution {
    capacity: u32,
    items: Vec<Item>,
}

impl Solution {
    pub fn new(capacity: u32) -> Solution {
        Solution {
            capacity,
            items: Vec::new(),
        }
    }

    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    // appends unconditionally, the fits-check belongs to the solvers
    pub fn add_item(&mut self, item: Item) {
        self.items.push(item);
    }

    pub fn total_weight(&self) -> u32 {
        self.items.iter().map(|item| item.weight).sum()
    }

    pub fn total_profit(&self) -> u32 {
        self.items.iter().map(|item| item.profit).sum()
    }
}
