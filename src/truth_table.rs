use crate::error::{Error, Result};
use crate::eval::evaluate;
use crate::postfix::to_postfix;
use crate::symbols::{bit_char, Variable};
use crate::variables::extract;
use log::{debug, trace};
use rayon::prelude::*;
use std::{
    fmt::{self, Display},
    str::FromStr,
};

/// The bits assigned to every variable for one row of a truth table.
///
/// Bit `k` belongs to the `k`-th variable in ascending order; the first variable
/// is the most significant bit of the row index.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Assignment {
    index: usize,
    bits: Vec<bool>,
}

impl Assignment {
    /// Builds the assignment for row `index` of a table over `width` variables.
    pub fn new(index: usize, width: usize) -> Self {
        let bits = (0..width)
            .map(|k| (index >> (width - 1 - k)) & 1 == 1)
            .collect();

        Self { index, bits }
    }

    pub const fn index(&self) -> usize {
        self.index
    }

    pub fn bits(&self) -> &[bool] {
        &self.bits
    }

    /// Replaces every occurrence of each variable in `expression` by its bit.
    ///
    /// `variables` are the sorted variables of the table this assignment was built for.
    pub(crate) fn substitute(&self, expression: &str, variables: &[Variable]) -> String {
        debug_assert_eq!(variables.len(), self.bits.len());

        expression
            .chars()
            .map(|c| match variables.binary_search(&Variable(c)) {
                Ok(k) => bit_char(self.bits[k]),
                Err(_) => c,
            })
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Row {
    pub assignment: Assignment,
    pub result: bool,
}

/// The complete truth table of an expression.
///
/// Rows are ordered by ascending assignment index, `2^N` rows for `N` variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TruthTable {
    expression: String,
    variables: Vec<Variable>,
    rows: Vec<Row>,
}

impl TruthTable {
    /// Evaluates `expression` under every assignment of its variables.
    ///
    /// The work is `O(2^N)` in the number of distinct variables; callers are
    /// expected to keep `N` small (about 20 at most). No bound is enforced here.
    pub fn build(expression: &str) -> Result<Self> {
        let variables = Self::prepare(expression)?;

        let rows = (0..row_count(&variables))
            .map(|i| evaluate_row(expression, &variables, i))
            .collect::<Result<Vec<Row>>>()?;

        Ok(Self {
            expression: expression.to_string(),
            variables,
            rows,
        })
    }

    /// Same as [`TruthTable::build`], with the rows evaluated on the rayon thread pool.
    ///
    /// The result is identical to the sequential build, including which error is
    /// reported when several rows fail.
    pub fn build_parallel(expression: &str) -> Result<Self> {
        let variables = Self::prepare(expression)?;

        let rows = (0..row_count(&variables))
            .into_par_iter()
            .map(|i| evaluate_row(expression, &variables, i))
            .collect::<Vec<Result<Row>>>()
            .into_iter()
            .collect::<Result<Vec<Row>>>()?;

        Ok(Self {
            expression: expression.to_string(),
            variables,
            rows,
        })
    }

    fn prepare(expression: &str) -> Result<Vec<Variable>> {
        if expression.is_empty() {
            return Err(Error::EmptyExpression);
        }

        let variables = extract(expression);
        debug!(
            "{expression}: {} variables [{}], {} rows",
            variables.len(),
            variables.iter().map(|v| v.name()).collect::<String>(),
            row_count(&variables)
        );

        Ok(variables)
    }

    pub fn expression(&self) -> &str {
        &self.expression
    }

    pub fn variables(&self) -> &[Variable] {
        &self.variables
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Rows whose result is accepted by `filter`, in table order.
    pub fn filtered(&self, filter: ResultFilter) -> impl Iterator<Item = &Row> {
        self.rows.iter().filter(move |row| filter.accepts(row.result))
    }

    pub fn is_tautology(&self) -> bool {
        self.rows.iter().all(|row| row.result)
    }

    pub fn is_contradiction(&self) -> bool {
        !self.is_satisfiable()
    }

    pub fn is_satisfiable(&self) -> bool {
        self.rows.iter().any(|row| row.result)
    }
}

fn row_count(variables: &[Variable]) -> usize {
    1 << variables.len()
}

fn evaluate_row(expression: &str, variables: &[Variable], index: usize) -> Result<Row> {
    let assignment = Assignment::new(index, variables.len());
    let substituted = assignment.substitute(expression, variables);
    trace!("row {index}: {substituted}");

    let result = evaluate(&to_postfix(&substituted)?)?;

    Ok(Row { assignment, result })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Selects which rows of a truth table are shown.
///
/// [`True`] keeps the rows where the expression holds, [`False`] the rows where
/// it does not, and [`Any`] keeps every row.
///
/// [`Any`]: ResultFilter::Any
/// [`True`]: ResultFilter::True
/// [`False`]: ResultFilter::False
pub enum ResultFilter {
    /// Rows evaluating to 1
    True,
    /// Rows evaluating to 0
    False,
    /// All rows
    #[default]
    Any,
}

impl ResultFilter {
    const ALL: [Self; 3] = [Self::True, Self::False, Self::Any];

    /// Accepted spellings, compared case-insensitively. The first one is canonical.
    const fn spellings(self) -> &'static [&'static str] {
        match self {
            Self::True => &["true", "1"],
            Self::False => &["false", "0"],
            Self::Any => &["any", "*"],
        }
    }

    pub const fn accepts(self, result: bool) -> bool {
        match self {
            Self::True => result,
            Self::False => !result,
            Self::Any => true,
        }
    }
}

impl Display for ResultFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.spellings()[0])
    }
}

impl FromStr for ResultFilter {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let spelling = s.to_ascii_lowercase();

        Self::ALL
            .into_iter()
            .find(|filter| filter.spellings().contains(&spelling.as_str()))
            .ok_or_else(|| anyhow::anyhow!("expected true, false or any as result filter, got {s}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_log::test;

    fn bits(s: &str) -> Vec<bool> {
        s.chars().map(|c| c == '1').collect()
    }

    #[test]
    fn first_variable_is_most_significant() {
        assert_eq!(Assignment::new(0b01, 2).bits(), bits("01"));
        assert_eq!(Assignment::new(0b10, 2).bits(), bits("10"));
        assert_eq!(Assignment::new(0b110, 3).bits(), bits("110"));
        assert!(Assignment::new(0, 0).bits().is_empty());
    }

    #[test]
    fn substitutes_every_occurrence() {
        let variables = [Variable('a'), Variable('b')];
        let assignment = Assignment::new(0b10, 2);
        assert_eq!(assignment.substitute("a&b|!a&b", &variables), "1&0|!1&0");
    }

    #[test]
    fn rows_substitute_with_their_own_variables() -> Result<()> {
        let expression = "c&!a|(b^a)&c";
        let table = TruthTable::build(expression)?;

        for row in table.rows() {
            assert_eq!(row.assignment.bits().len(), table.variables().len());

            let substituted = row.assignment.substitute(expression, table.variables());
            assert!(substituted.chars().all(|c| !Variable::is_variable(c)));
            assert_eq!(evaluate(&to_postfix(&substituted)?)?, row.result);
        }

        Ok(())
    }

    #[test]
    fn empty_expression_is_reported() {
        assert_eq!(TruthTable::build(""), Err(Error::EmptyExpression));
        assert_eq!(TruthTable::build_parallel(""), Err(Error::EmptyExpression));
    }

    #[test]
    fn constant_expression_has_one_row() -> Result<()> {
        let table = TruthTable::build("1&!0")?;
        assert!(table.variables().is_empty());
        assert_eq!(table.len(), 1);
        assert!(table.is_tautology());
        Ok(())
    }

    #[test]
    fn filter_rows() -> Result<()> {
        let table = TruthTable::build("a^b")?;
        let indices = |filter: ResultFilter| {
            table
                .filtered(filter)
                .map(|row| row.assignment.index())
                .collect::<Vec<_>>()
        };

        assert_eq!(indices(ResultFilter::True), vec![1, 2]);
        assert_eq!(indices(ResultFilter::False), vec![0, 3]);
        assert_eq!(indices(ResultFilter::Any), vec![0, 1, 2, 3]);
        Ok(())
    }

    #[test]
    fn parse_filter() -> anyhow::Result<()> {
        assert_eq!("1".parse::<ResultFilter>()?, ResultFilter::True);
        assert_eq!("TRUE".parse::<ResultFilter>()?, ResultFilter::True);
        assert_eq!("False".parse::<ResultFilter>()?, ResultFilter::False);
        assert_eq!("0".parse::<ResultFilter>()?, ResultFilter::False);
        assert_eq!("*".parse::<ResultFilter>()?, ResultFilter::Any);
        assert_eq!("Any".parse::<ResultFilter>()?, ResultFilter::Any);
        // single letters look like variables, so they are not filter names
        assert!("a".parse::<ResultFilter>().is_err());
        assert!("t".parse::<ResultFilter>().is_err());
        assert!("maybe".parse::<ResultFilter>().is_err());

        for filter in ResultFilter::ALL {
            assert_eq!(filter.to_string().parse::<ResultFilter>()?, filter);
        }
        Ok(())
    }
}
