use std::fmt;

use crate::interpreter::evaluator::function::Function;

/// A classified token of an arithmetic expression.
///
/// Items are produced by the lexer, checked by the validator, reordered into
/// postfix form by the converter and finally consumed by the evaluator. Each
/// variant carries a fixed priority that only the postfix converter looks at.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Item {
    /// A numeric literal such as `2` or `0.5`.
    Const(f64),
    /// A variable `xN`, identified by its index `N`.
    Var(usize),
    /// Unary negation.
    Sign,
    /// A built-in function together with the number of arguments it consumes.
    Func {
        /// Which function is called.
        function: Function,
        /// How many values the function pops from the value stack.
        arity:    usize,
    },
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `+`
    Add,
    /// `-` (binary)
    Sub,
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
    /// `,` separating function arguments.
    Comma,
    /// A `+` in sign position. It carries no meaning and is dropped by the
    /// lexer.
    Skip,
}

impl Item {
    /// Creates a function item with the arity declared in the function table.
    ///
    /// # Example
    /// ```
    /// use exprcalc::{interpreter::evaluator::function::Function, item::Item};
    ///
    /// assert_eq!(Item::function(Function::Pow),
    ///            Item::Func { function: Function::Pow,
    ///                         arity:    2, });
    /// ```
    #[must_use]
    pub const fn function(function: Function) -> Self {
        Self::Func { function,
                     arity: function.arity() }
    }

    /// Returns the precedence used by the postfix converter.
    ///
    /// Lower numbers bind tighter:
    /// - `0`: constants and variables
    /// - `1`: unary sign
    /// - `2`: functions
    /// - `3`: `*`, `/`
    /// - `4`: `+`, `-`
    /// - `9`: `(`
    /// - `99`: `)`, `,`
    ///
    /// The skip marker never takes part in conversion and reports `-1`.
    #[must_use]
    pub const fn priority(&self) -> i32 {
        match self {
            Self::Skip => -1,
            Self::Const(_) | Self::Var(_) => 0,
            Self::Sign => 1,
            Self::Func { .. } => 2,
            Self::Mul | Self::Div => 3,
            Self::Add | Self::Sub => 4,
            Self::LeftParen => 9,
            Self::RightParen | Self::Comma => 99,
        }
    }

    /// Returns `true` for the four binary arithmetic operators.
    #[must_use]
    pub const fn is_operator(&self) -> bool {
        matches!(self, Self::Add | Self::Sub | Self::Mul | Self::Div)
    }

    /// Decides whether a `+` or `-` following `previous` stands in sign
    /// position.
    ///
    /// That is the case at the start of the input (`None`), after a binary
    /// operator, after `(` and after another sign. In sign position `-` is a
    /// unary negation and `+` is skipped. A `,` is not a sign position, so an
    /// argument after the first cannot start with a sign.
    ///
    /// # Example
    /// ```
    /// use exprcalc::item::Item;
    ///
    /// assert!(Item::is_sign_position(None));
    /// assert!(Item::is_sign_position(Some(&Item::Mul)));
    /// assert!(!Item::is_sign_position(Some(&Item::Const(1.0))));
    /// assert!(!Item::is_sign_position(Some(&Item::RightParen)));
    /// assert!(!Item::is_sign_position(Some(&Item::Comma)));
    /// ```
    #[must_use]
    pub const fn is_sign_position(previous: Option<&Self>) -> bool {
        match previous {
            None => true,
            Some(item) => matches!(item,
                                   Self::Add
                                   | Self::Sub
                                   | Self::Mul
                                   | Self::Div
                                   | Self::LeftParen
                                   | Self::Sign
                                   | Self::Skip),
        }
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Const(value) => write!(f, "{value}"),
            Self::Var(index) => write!(f, "X{index}"),
            Self::Func { function, .. } => write!(f, "{}", function.name()),
            Self::Sign | Self::Sub => write!(f, "-"),
            Self::Add => write!(f, "+"),
            Self::Mul => write!(f, "*"),
            Self::Div => write!(f, "/"),
            Self::LeftParen => write!(f, "("),
            Self::RightParen => write!(f, ")"),
            Self::Comma => write!(f, ","),
            Self::Skip => Ok(()),
        }
    }
}
