use super::solvers::{Greedy, GreedySolver, Random, RandomSolver, SolverTrait};
use super::Problem;

use log::info;
use rand::RngCore;

pub const DEFAULT_ITERATIONS: usize = 1_000_000;

#[derive(Debug, Clone)]
pub struct Experiment {
    pub iterations: usize,
}

// running aggregates over the random trials, folded without storing the stream
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrialStats {
    pub greedy_profit: u32,
    pub min_profit: u32,
    pub max_profit: u32,
    pub profit_sum: u64,
    pub better_than_greedy: usize,
    pub trials: usize,
}

impl TrialStats {
    fn new(greedy_profit: u32) -> TrialStats {
        TrialStats {
            greedy_profit,
            min_profit: u32::MAX,
            max_profit: 0,
            profit_sum: 0,
            better_than_greedy: 0,
            trials: 0,
        }
    }

    fn record(&mut self, profit: u32) {
        self.trials += 1;
        self.profit_sum += u64::from(profit);
        self.min_profit = self.min_profit.min(profit);
        self.max_profit = self.max_profit.max(profit);
        if profit > self.greedy_profit {
            self.better_than_greedy += 1;
        }
    }

    pub fn average(&self) -> f64 {
        self.profit_sum as f64 / self.trials as f64
    }
}

impl Experiment {
    // greedy baseline first, then the randomized trials against one shared source
    pub fn run(&self, problem: &Problem, rng: &mut dyn RngCore) -> TrialStats {
        let greedy = Greedy(GreedySolver()).construction(problem, rng);
        info!(
            "greedy baseline: profit {}, weight {}, {} items packed",
            greedy.total_profit(),
            greedy.total_weight(),
            greedy.items().len()
        );
        self.run_trials(problem, greedy.total_profit(), rng)
    }

    pub fn run_trials(
        &self,
        problem: &Problem,
        greedy_profit: u32,
        rng: &mut dyn RngCore,
    ) -> TrialStats {
        let solver = Random(RandomSolver());
        let mut stats = TrialStats::new(greedy_profit);
        for _ in 0..self.iterations {
            let solution = solver.construction(problem, rng);
            stats.record(solution.total_profit());
        }
        stats
    }
}
