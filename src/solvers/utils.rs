use super::{Item, Solution};

use itertools::Itertools;

// stable sort, items with equal unit profit keep their input order
pub fn sorted_by_unit_profit(items: &[Item]) -> Vec<Item> {
    items
        .iter()
        .copied()
        .sorted_by(|a, b| b.unit_profit().cmp(&a.unit_profit()))
        .collect()
}

// single fits-or-skip pass, shared by every construction
pub fn fill_in_order<'a, I>(ordered: I, capacity: u32) -> Solution
where
    I: IntoIterator<Item = &'a Item>,
{
    ordered
        .into_iter()
        .fold(Solution::new(capacity), |mut solution, item| {
            // compared in u64, the sum of two u32 weights can overflow u32
            let weight = u64::from(solution.total_weight()) + u64::from(item.weight);
            if weight <= u64::from(solution.capacity()) {
                solution.add_item(*item);
            }
            solution
        })
}
