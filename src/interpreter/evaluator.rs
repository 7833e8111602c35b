/// Built-in function table.
///
/// Declares the closed set of functions, their keywords, display names and
/// arities, and implements each of them over `f64`.
pub mod function;

use log::trace;

use crate::{
    error::{EvalResult, EvaluationError},
    item::Item,
};

/// An entry on the evaluator's value stack.
///
/// Variables stay unresolved until an operator or function pops them, so the
/// same postfix sequence can be evaluated against any set of values.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Operand {
    Const(f64),
    Var(usize),
}

/// Reduces a postfix item sequence to a single number.
///
/// `values[i]` supplies the value of variable `Xi`. Division by zero follows
/// IEEE 754 and yields an infinity or `NaN` rather than an error.
///
/// # Errors
/// - `StackUnderflow` if an operator or function finds too few values.
/// - `LeftoverValues` if more than one value remains at the end.
/// - `UnboundVariable` if a variable index is not covered by `values`.
/// - `ArgumentCountMismatch` or `InvalidArgument` from function application.
/// - `UnexpectedItem` if a parenthesis, comma or skip marker is present.
///
/// # Example
/// ```
/// use exprcalc::{
///     interpreter::{evaluator::evaluate, lexer::tokenize, postfix::to_postfix},
///     item::Item,
/// };
///
/// let postfix = to_postfix(&tokenize("x0 - x1").unwrap());
/// assert_eq!(evaluate(&postfix, &[10.0, 4.0]).unwrap(), 6.0);
/// assert!(evaluate(&postfix, &[10.0]).is_err());
///
/// assert!(evaluate(&[Item::Const(1.0), Item::Const(2.0)], &[]).is_err());
/// ```
pub fn evaluate(postfix: &[Item], values: &[f64]) -> EvalResult<f64> {
    let mut evaluator = Evaluator { values,
                                    stack: Vec::with_capacity(postfix.len()) };

    for item in postfix {
        evaluator.step(item)?;
    }

    evaluator.finish()
}

struct Evaluator<'a> {
    values: &'a [f64],
    stack:  Vec<Operand>,
}

impl Evaluator<'_> {
    fn step(&mut self, item: &Item) -> EvalResult<()> {
        match *item {
            Item::Const(value) => self.stack.push(Operand::Const(value)),
            Item::Var(index) => self.stack.push(Operand::Var(index)),
            Item::Func { function, arity } => {
                let mut args = Vec::with_capacity(arity);
                for _ in 0..arity {
                    args.push(self.pop_value()?);
                }
                args.reverse();
                let y = function.apply(&args)?;
                self.stack.push(Operand::Const(y));
            },
            Item::Add | Item::Sub | Item::Mul | Item::Div => {
                let x1 = self.pop_value()?;
                let x2 = self.pop_value()?;
                let y = match item {
                    Item::Add => x2 + x1,
                    Item::Sub => x2 - x1,
                    Item::Mul => x2 * x1,
                    _ => x2 / x1,
                };
                self.stack.push(Operand::Const(y));
            },
            Item::Sign => {
                let x = self.pop_value()?;
                self.stack.push(Operand::Const(-x));
            },
            Item::LeftParen | Item::RightParen | Item::Comma | Item::Skip => {
                return Err(EvaluationError::UnexpectedItem { item: item.to_string() });
            },
        }
        trace!("{item} -> {:?}", self.stack);
        Ok(())
    }

    /// Pops the top operand and resolves it to a number.
    fn pop_value(&mut self) -> EvalResult<f64> {
        match self.stack.pop() {
            Some(Operand::Const(value)) => Ok(value),
            Some(Operand::Var(index)) => {
                self.values
                    .get(index)
                    .copied()
                    .ok_or(EvaluationError::UnboundVariable { index,
                                                              supplied: self.values.len() })
            },
            None => Err(EvaluationError::StackUnderflow),
        }
    }

    fn finish(mut self) -> EvalResult<f64> {
        let result = self.pop_value()?;
        if !self.stack.is_empty() {
            return Err(EvaluationError::LeftoverValues { count: self.stack.len() + 1 });
        }
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::{function::Function, *};

    #[test]
    fn operands_are_applied_in_source_order() {
        let postfix = [Item::Const(7.0), Item::Const(2.0), Item::Div];
        assert_eq!(evaluate(&postfix, &[]).unwrap(), 3.5);
        let postfix = [Item::Const(2.0), Item::Const(3.0), Item::function(Function::Pow)];
        assert_eq!(evaluate(&postfix, &[]).unwrap(), 8.0);
    }

    #[test]
    fn variables_resolve_against_supplied_values() {
        let postfix = [Item::Var(1), Item::Var(0), Item::Sub];
        assert_eq!(evaluate(&postfix, &[1.0, 10.0]).unwrap(), 9.0);
        assert_eq!(evaluate(&postfix, &[1.0]),
                   Err(EvaluationError::UnboundVariable { index:    1,
                                                          supplied: 1, }));
    }

    #[test]
    fn division_by_zero_follows_ieee() {
        let postfix = [Item::Const(1.0), Item::Const(0.0), Item::Div];
        assert_eq!(evaluate(&postfix, &[]).unwrap(), f64::INFINITY);
        let postfix = [Item::Const(0.0), Item::Const(0.0), Item::Div];
        assert!(evaluate(&postfix, &[]).unwrap().is_nan());
    }

    #[test]
    fn stack_shape_errors() {
        assert_eq!(evaluate(&[Item::Add], &[]), Err(EvaluationError::StackUnderflow));
        assert_eq!(evaluate(&[], &[]), Err(EvaluationError::StackUnderflow));
        assert_eq!(evaluate(&[Item::Const(1.0), Item::Const(2.0)], &[]),
                   Err(EvaluationError::LeftoverValues { count: 2 }));
        assert_eq!(evaluate(&[Item::Const(1.0), Item::LeftParen], &[]),
                   Err(EvaluationError::UnexpectedItem { item: "(".to_string() }));
    }

    #[test]
    fn function_items_with_a_forged_arity_fail() {
        let postfix = [Item::Const(1.0),
                       Item::Func { function: Function::Pi,
                                    arity:    1, }];
        assert_eq!(evaluate(&postfix, &[]),
                   Err(EvaluationError::ArgumentCountMismatch { function: "pi",
                                                                expected: 0,
                                                                found:    1, }));
    }
}
