use std::{collections::BTreeSet, fmt, str::FromStr};

use log::debug;

use crate::{
    error::{EvalResult, ParseError, ParseResult},
    interpreter::{
        evaluator::evaluate,
        lexer::{render, tokenize},
        postfix::to_postfix,
        validator::validate,
    },
    item::Item,
};

/// A parsed arithmetic expression, ready to be evaluated.
///
/// An `Expression` is built once from text and never changes afterwards. It
/// keeps the canonical rendering of the input, the items in postfix order,
/// and the number of distinct variables the expression refers to. Evaluating
/// it again with other values does not parse it again.
///
/// # Example
/// ```
/// use exprcalc::expression::Expression;
///
/// let expr = Expression::parse("(x0 + x1) * x2").unwrap();
/// assert_eq!(expr.variable_count(), 3);
/// assert_eq!(expr.canonical_text(), "( X0 + X1 ) * X2");
/// assert_eq!(expr.evaluate(&[23.0, 17.0, 5.0]).unwrap(), 200.0);
/// assert_eq!(expr.evaluate(&[1.0, 2.0, 3.0]).unwrap(), 9.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Expression {
    text:           String,
    postfix:        Vec<Item>,
    variable_count: usize,
}

impl Expression {
    /// Parses `source` into an expression.
    ///
    /// Runs the full pipeline: tokenize, render the canonical text, validate,
    /// convert to postfix, and count the distinct variables.
    ///
    /// # Errors
    /// Returns a `ParseError` if the lexer meets an unrecognized token or the
    /// items do not form exactly one well-formed expression.
    pub fn parse(source: &str) -> ParseResult<Self> {
        Self::build(source).inspect_err(|e| debug!("failed to parse {source:?}: {e}"))
    }

    fn build(source: &str) -> ParseResult<Self> {
        let items = tokenize(source)?;
        let text = render(&items);
        debug!("canonical text: {text}");

        validate(&items)?;

        let postfix = to_postfix(&items);
        let variable_count = postfix.iter()
                                    .filter_map(|item| match item {
                                        Item::Var(index) => Some(*index),
                                        _ => None,
                                    })
                                    .collect::<BTreeSet<_>>()
                                    .len();
        debug!("postfix: {}, {variable_count} variable(s)", render(&postfix));

        Ok(Self { text,
                  postfix,
                  variable_count })
    }

    /// Returns the number of distinct variable indices referenced.
    ///
    /// Repeated references count once: `x0 * x0` has one variable.
    #[must_use]
    pub const fn variable_count(&self) -> usize {
        self.variable_count
    }

    /// Returns the canonical, space-separated rendering of the input.
    ///
    /// Keywords get their display names, variables are upper-cased, numerals
    /// are normalized and skipped `+` signs are gone:
    ///
    /// ```
    /// use exprcalc::expression::Expression;
    ///
    /// let expr = Expression::parse("+sqrt(x0)*2.50").unwrap();
    /// assert_eq!(expr.canonical_text(), "Sqrt ( X0 ) * 2.5");
    /// ```
    #[must_use]
    pub fn canonical_text(&self) -> &str {
        &self.text
    }

    /// Returns the items in postfix order.
    #[must_use]
    pub fn postfix(&self) -> &[Item] {
        &self.postfix
    }

    /// Evaluates the expression with `values[i]` bound to variable `Xi`.
    ///
    /// Extra values are ignored.
    ///
    /// # Errors
    /// Returns an `EvaluationError` if a referenced variable has no value or
    /// a function argument is outside its domain (e.g. a negative factorial).
    pub fn evaluate(&self, values: &[f64]) -> EvalResult<f64> {
        evaluate(&self.postfix, values)
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl FromStr for Expression {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for Expression {
    type Error = ParseError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}
