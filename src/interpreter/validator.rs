use log::trace;

use crate::{
    error::{ParseError, ParseResult},
    item::Item,
};

/// Checks that an item sequence is exactly one well-formed expression.
///
/// This is a pure recognizer: it builds nothing, and operator precedence is
/// left to the postfix converter. The grammar is:
///
/// ```text
/// expression := argument (operator argument)*
/// argument   := sign* (const | var | function | "(" expression ")")
/// function   := func-name ("(" arg-list ")")?
/// arg-list   := expression ("," arg-list)?
/// ```
///
/// On top of the grammar, every call must supply exactly as many arguments
/// as the function's arity. Zero-arity functions therefore appear bare
/// (`pi`), and both `pi()` and `pi(3)` are rejected.
///
/// # Errors
/// - `ParseError::Empty` for an empty sequence.
/// - `ParseError::Syntax` at the first item that cannot be consumed, or at
///   the end of input if the sequence stops early.
/// - `ParseError::ArityMismatch` for a call with the wrong argument count.
///
/// # Example
/// ```
/// use exprcalc::interpreter::{lexer::tokenize, validator::validate};
///
/// assert!(validate(&tokenize("(x0 + x1) * -x2").unwrap()).is_ok());
/// assert!(validate(&tokenize("(1 + 2").unwrap()).is_err());
/// assert!(validate(&tokenize("1 + + *").unwrap()).is_err());
/// ```
pub fn validate(items: &[Item]) -> ParseResult<()> {
    if items.is_empty() {
        return Err(ParseError::Empty);
    }

    let recognizer = Recognizer { items };
    let end = recognizer.expression(0)?;
    if end < items.len() {
        return Err(recognizer.unexpected(end));
    }

    trace!("validated {} item(s)", items.len());
    Ok(())
}

/// Recursive-descent recognizer over a borrowed item sequence.
///
/// Every rule takes the position to start from and returns the position just
/// after what it consumed.
struct Recognizer<'a> {
    items: &'a [Item],
}

impl Recognizer<'_> {
    /// `expression := argument (operator argument)*`
    ///
    /// Only parentheses and function calls nest, so a flat operator chain
    /// runs in constant stack depth.
    fn expression(&self, pos: usize) -> ParseResult<usize> {
        let mut pos = self.argument(pos)?;
        while let Some(item) = self.items.get(pos)
              && item.is_operator()
        {
            pos = self.argument(pos + 1)?;
        }
        Ok(pos)
    }

    /// `argument := sign* (const | var | function | "(" expression ")")`
    fn argument(&self, mut pos: usize) -> ParseResult<usize> {
        while let Some(Item::Sign) = self.items.get(pos) {
            pos += 1;
        }

        match self.items.get(pos) {
            Some(Item::Const(_) | Item::Var(_)) => Ok(pos + 1),
            Some(Item::Func { .. }) => self.function(pos),
            Some(Item::LeftParen) => {
                let pos = self.expression(pos + 1)?;
                self.expect_right_paren(pos)
            },
            _ => Err(self.unexpected(pos)),
        }
    }

    /// `function := func-name ("(" arg-list ")")?`
    fn function(&self, pos: usize) -> ParseResult<usize> {
        let Some(Item::Func { function, arity }) = self.items.get(pos) else {
            return Err(self.unexpected(pos));
        };

        let (next, found) = match self.items.get(pos + 1) {
            Some(Item::LeftParen) => {
                let (after_args, count) = self.argument_list(pos + 2)?;
                (self.expect_right_paren(after_args)?, count)
            },
            _ => (pos + 1, 0),
        };

        if found != *arity {
            return Err(ParseError::ArityMismatch { function: function.name(),
                                                   expected: *arity,
                                                   found });
        }
        Ok(next)
    }

    /// `arg-list := expression ("," arg-list)?`
    ///
    /// Returns the position after the list and the number of arguments.
    fn argument_list(&self, mut pos: usize) -> ParseResult<(usize, usize)> {
        let mut count = 0;
        loop {
            pos = self.expression(pos)?;
            count += 1;
            match self.items.get(pos) {
                Some(Item::Comma) => pos += 1,
                _ => return Ok((pos, count)),
            }
        }
    }

    fn expect_right_paren(&self, pos: usize) -> ParseResult<usize> {
        match self.items.get(pos) {
            Some(Item::RightParen) => Ok(pos + 1),
            _ => Err(self.unexpected(pos)),
        }
    }

    fn unexpected(&self, position: usize) -> ParseError {
        let found = self.items
                        .get(position)
                        .map_or_else(|| "end of input".to_string(), |item| format!("'{item}'"));
        ParseError::Syntax { position, found }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::lexer::tokenize;

    fn check(source: &str) -> ParseResult<()> {
        validate(&tokenize(source).unwrap())
    }

    #[test]
    fn accepts_well_formed_expressions() {
        for source in ["1",
                       "-1",
                       "--1",
                       "x0 * (x1 + 2)",
                       "pi",
                       "e * 2",
                       "pow(2, x0 + 1)",
                       "sqrt(abs(-4)) / ln(e)",
                       "-(1 - 2) - -3"]
        {
            assert!(check(source).is_ok(), "{source}");
        }
    }

    #[test]
    fn reports_premature_end() {
        assert_eq!(check("(1 + 2"),
                   Err(ParseError::Syntax { position: 4,
                                            found:    "end of input".to_string(), }));
        assert!(check("1 +").is_err());
    }

    #[test]
    fn reports_trailing_items() {
        assert_eq!(check("1)"),
                   Err(ParseError::Syntax { position: 1,
                                            found:    "')'".to_string(), }));
        assert_eq!(check("(1))"),
                   Err(ParseError::Syntax { position: 3,
                                            found:    "')'".to_string(), }));
    }

    #[test]
    fn rejects_operator_runs() {
        assert_eq!(check("1 * * 2"),
                   Err(ParseError::Syntax { position: 2,
                                            found:    "'*'".to_string(), }));
    }

    #[test]
    fn zero_arity_functions_take_no_argument_list() {
        assert_eq!(check("pi(3)"),
                   Err(ParseError::ArityMismatch { function: "pi",
                                                   expected: 0,
                                                   found:    1, }));
        assert!(matches!(check("pi()"), Err(ParseError::Syntax { position: 2, .. })));
    }

    #[test]
    fn functions_with_arguments_need_parentheses() {
        assert_eq!(check("sqrt + 1"),
                   Err(ParseError::ArityMismatch { function: "Sqrt",
                                                   expected: 1,
                                                   found:    0, }));
        assert_eq!(check("pow(2)"),
                   Err(ParseError::ArityMismatch { function: "Pow",
                                                   expected: 2,
                                                   found:    1, }));
    }

    #[test]
    fn long_operator_chains_are_accepted() {
        let source = format!("{}1", "1+".repeat(100_000));
        assert!(check(&source).is_ok());
        assert!(check(&format!("{source}+")).is_err());
    }

    #[test]
    fn arguments_after_a_comma_cannot_start_with_a_sign() {
        assert_eq!(check("pow(2, -3)"),
                   Err(ParseError::Syntax { position: 4,
                                            found:    "'-'".to_string(), }));
        assert!(check("pow(2, +3)").is_err());
        assert!(check("pow(2, 0 - 3)").is_ok());
        assert!(check("pow(2, (-3))").is_ok());
    }

    #[test]
    fn empty_sequence_is_rejected() {
        assert_eq!(validate(&[]), Err(ParseError::Empty));
    }
}
