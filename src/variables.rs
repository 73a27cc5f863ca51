use crate::symbols::Variable;
use itertools::Itertools;

/// Collects the distinct variables of `expression` in ascending character order.
///
/// The order fixes both the column order of the table and the bit significance
/// of each variable: the first variable is the most significant bit.
pub fn extract(expression: &str) -> Vec<Variable> {
    expression
        .chars()
        .filter(|&c| Variable::is_variable(c))
        .map(Variable)
        .sorted()
        .dedup()
        .collect()
}
