use super::utils::{fill_in_order, sorted_by_unit_profit};
use super::{Problem, Solution, SolverTrait};

use rand::RngCore;

#[derive(Debug, Clone)]
pub struct GreedySolver();

impl SolverTrait for GreedySolver {
    // deterministic: best unit profit first, ties in input order, one pass
    fn construction(&self, problem: &Problem, _rng: &mut dyn RngCore) -> Solution {
        let ordered = sorted_by_unit_profit(&problem.items);
        fill_in_order(&ordered, problem.capacity)
    }
}
