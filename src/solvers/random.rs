use super::utils::fill_in_order;
use super::{Problem, Solution, SolverTrait};

use rand::seq::SliceRandom;
use rand::RngCore;

#[derive(Debug, Clone)]
pub struct RandomSolver();

impl SolverTrait for RandomSolver {
    // uniform permutation, then the same fits-or-skip pass as the greedy construction
    fn construction(&self, problem: &Problem, rng: &mut dyn RngCore) -> Solution {
        let mut shuffled = problem.items.clone();
        shuffled.shuffle(rng);
        fill_in_order(&shuffled, problem.capacity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Item, Problem};
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn item(weight: u32, profit: u32) -> Item {
        Item::new(weight, profit).unwrap()
    }

    fn problem(capacity: u32, raw: &[(u32, u32)]) -> Problem {
        Problem {
            capacity,
            items: raw.iter().map(|&(w, p)| item(w, p)).collect(),
        }
    }

    #[test]
    fn seeded_trials_respect_capacity_and_consume_only_input_items() {
        let problem = problem(10, &[(5, 10), (4, 40), (6, 30), (3, 50), (4, 40)]);
        let mut rng = StdRng::seed_from_u64(1234);
        let solver = RandomSolver();
        for _ in 0..10_000 {
            let solution = solver.construction(&problem, &mut rng);
            assert!(solution.total_weight() <= solution.capacity());
            for taken in solution.items() {
                assert!(problem.items.contains(taken));
            }
            // each input position is consumed at most once
            for &input in &problem.items {
                let in_solution = solution.items().iter().filter(|&&i| i == input).count();
                let in_input = problem.items.iter().filter(|&&i| i == input).count();
                assert!(in_solution <= in_input);
            }
        }
    }

    #[test]
    fn zero_capacity_always_yields_empty_solutions() {
        let problem = problem(0, &[(1, 1), (2, 2)]);
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            let solution = RandomSolver().construction(&problem, &mut rng);
            assert!(solution.items().is_empty());
        }
    }

    #[test]
    fn same_seed_reproduces_the_same_trials() {
        let problem = problem(10, &[(5, 10), (4, 40), (6, 30), (3, 50)]);
        let run = |seed| {
            let mut rng = StdRng::seed_from_u64(seed);
            (0..50)
                .map(|_| RandomSolver().construction(&problem, &mut rng).total_profit())
                .collect::<Vec<_>>()
        };
        assert_eq!(run(99), run(99));
    }

    #[test]
    fn consecutive_trials_consume_the_shared_source() {
        // six distinct items allow 720 orderings, identical draws would mean a stuck source
        let problem = problem(12, &[(1, 1), (2, 3), (3, 7), (4, 9), (5, 11), (6, 13)]);
        let mut rng = StdRng::seed_from_u64(42);
        let selections: HashSet<Vec<(u32, u32)>> = (0..50)
            .map(|_| {
                RandomSolver()
                    .construction(&problem, &mut rng)
                    .items()
                    .iter()
                    .map(|i| (i.weight, i.profit))
                    .collect()
            })
            .collect();
        assert!(selections.len() > 1);
    }
}
