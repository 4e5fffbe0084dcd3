pub mod utils;
pub use utils::*;

mod greedy;
pub use greedy::GreedySolver;

mod random;
pub use random::RandomSolver;

use enum_dispatch::enum_dispatch;

use rand::RngCore;

pub use super::{Item, Problem, Solution};

#[enum_dispatch]
#[derive(Debug, Clone)]
pub enum Solver {
    Greedy(GreedySolver),
    Random(RandomSolver),
}
pub use Solver::*;

#[enum_dispatch(Solver)]
pub trait SolverTrait {
    // one construction = one solution, the random source is threaded through explicitly
    fn construction(&self, problem: &Problem, rng: &mut dyn RngCore) -> Solution;
}
