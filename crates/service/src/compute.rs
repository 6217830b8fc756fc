//! Derivation of stored sums from validated operands.
use models::sum::NewSum;

use crate::validation::SumInput;

/// `result = num1 + num2`, integer arithmetic when both operands are integers.
pub fn compute_sum(input: SumInput) -> NewSum {
    NewSum::from_operands(input.num1, input.num2)
}
