use crate::error::{EvalResult, EvaluationError};

/// Signature shared by every built-in function implementation.
///
/// The slice always has exactly the function's arity; [`Function::apply`]
/// checks that before dispatching.
type BuiltinFn = fn(&[f64]) -> EvalResult<f64>;

/// Defines the built-in function catalog from a single table.
///
/// Each row provides:
/// - the enum variant,
/// - the lower-case keyword recognized by the lexer,
/// - the canonical display name,
/// - the fixed arity,
/// - the implementation.
///
/// The macro produces the `Function` enum together with its keyword lookup,
/// name, arity and dispatch methods, so adding a function is one row.
macro_rules! builtin_functions {
    (
        $(
            $(#[$doc:meta])*
            $variant:ident => {
                keyword: $keyword:literal,
                name: $name:literal,
                arity: $arity:literal,
                func: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        /// The closed set of built-in functions.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum Function {
            $(
                $(#[$doc])*
                $variant,
            )*
        }

        impl Function {
            /// Every built-in function, in table order.
            pub const ALL: &'static [Self] = &[$(Self::$variant,)*];

            /// Looks up a function by its lower-case keyword.
            #[must_use]
            pub fn from_keyword(keyword: &str) -> Option<Self> {
                match keyword {
                    $($keyword => Some(Self::$variant),)*
                    _ => None,
                }
            }

            /// The lower-case keyword the lexer recognizes.
            #[must_use]
            pub const fn keyword(self) -> &'static str {
                match self {
                    $(Self::$variant => $keyword,)*
                }
            }

            /// The canonical display name.
            #[must_use]
            pub const fn name(self) -> &'static str {
                match self {
                    $(Self::$variant => $name,)*
                }
            }

            /// The fixed number of arguments.
            #[must_use]
            pub const fn arity(self) -> usize {
                match self {
                    $(Self::$variant => $arity,)*
                }
            }

            const fn implementation(self) -> BuiltinFn {
                match self {
                    $(Self::$variant => $func,)*
                }
            }
        }
    };
}

builtin_functions! {
    /// The constant π.
    Pi        => { keyword: "pi",        name: "pi",        arity: 0, func: pi },
    /// Euler's number.
    E         => { keyword: "e",         name: "e",         arity: 0, func: euler },
    /// Natural logarithm.
    Ln        => { keyword: "ln",        name: "Ln",        arity: 1, func: ln },
    /// Exponential function, the inverse of `Ln`.
    Exp       => { keyword: "exp",       name: "Exp",       arity: 1, func: exp },
    /// Base-10 logarithm.
    Log10     => { keyword: "log",       name: "Log",       arity: 1, func: log10 },
    /// Square.
    Square    => { keyword: "sqr",       name: "Sqr",       arity: 1, func: square },
    /// Square root, the inverse of `Sqr`.
    Sqrt      => { keyword: "sqrt",      name: "Sqrt",      arity: 1, func: sqrt },
    /// Absolute value.
    Abs       => { keyword: "abs",       name: "Abs",       arity: 1, func: abs },
    /// `Pow(x, y)` raises `x` to the power `y`.
    Pow       => { keyword: "pow",       name: "Pow",       arity: 2, func: pow },
    /// Factorial of the integer part of a non-negative argument.
    Factorial => { keyword: "factorial", name: "Factorial", arity: 1, func: factorial },
}

impl Function {
    /// Applies the function to its arguments, given in call order.
    ///
    /// # Errors
    /// - `ArgumentCountMismatch` if `args` does not have exactly the
    ///   function's arity.
    /// - `InvalidArgument` from functions with a restricted domain
    ///   (currently only `Factorial`).
    ///
    /// # Example
    /// ```
    /// use exprcalc::interpreter::evaluator::function::Function;
    ///
    /// assert_eq!(Function::Pow.apply(&[2.0, 10.0]).unwrap(), 1024.0);
    /// assert_eq!(Function::Factorial.apply(&[5.0]).unwrap(), 120.0);
    /// assert!(Function::Sqrt.apply(&[1.0, 2.0]).is_err());
    /// ```
    pub fn apply(self, args: &[f64]) -> EvalResult<f64> {
        check_arity(self, args)?;
        (self.implementation())(args)
    }
}

/// Checks that `args` matches the function's arity.
const fn check_arity(function: Function, args: &[f64]) -> EvalResult<()> {
    if args.len() == function.arity() {
        Ok(())
    } else {
        Err(EvaluationError::ArgumentCountMismatch { function: function.name(),
                                                     expected: function.arity(),
                                                     found:    args.len(), })
    }
}

#[allow(clippy::unnecessary_wraps)]
const fn pi(_: &[f64]) -> EvalResult<f64> {
    Ok(std::f64::consts::PI)
}

#[allow(clippy::unnecessary_wraps)]
const fn euler(_: &[f64]) -> EvalResult<f64> {
    Ok(std::f64::consts::E)
}

#[allow(clippy::unnecessary_wraps)]
fn ln(args: &[f64]) -> EvalResult<f64> {
    Ok(args[0].ln())
}

#[allow(clippy::unnecessary_wraps)]
fn exp(args: &[f64]) -> EvalResult<f64> {
    Ok(args[0].exp())
}

#[allow(clippy::unnecessary_wraps)]
fn log10(args: &[f64]) -> EvalResult<f64> {
    Ok(args[0].log10())
}

#[allow(clippy::unnecessary_wraps)]
fn square(args: &[f64]) -> EvalResult<f64> {
    Ok(args[0] * args[0])
}

#[allow(clippy::unnecessary_wraps)]
fn sqrt(args: &[f64]) -> EvalResult<f64> {
    Ok(args[0].sqrt())
}

#[allow(clippy::unnecessary_wraps)]
fn abs(args: &[f64]) -> EvalResult<f64> {
    Ok(args[0].abs())
}

#[allow(clippy::unnecessary_wraps)]
fn pow(args: &[f64]) -> EvalResult<f64> {
    Ok(args[0].powf(args[1]))
}

/// Computes the factorial of the integer part of the argument.
///
/// Negative inputs are rejected. Fractional inputs are truncated toward zero
/// and the product is accumulated in `f64`, so results past `170!` are
/// infinite. The loop stops once the product is infinite.
fn factorial(args: &[f64]) -> EvalResult<f64> {
    let x = args[0];
    if x < 0.0 {
        return Err(EvaluationError::InvalidArgument { function: Function::Factorial.name(),
                                                      details:  format!("expected x >= 0, found {x}"), });
    }

    let n = x.trunc();
    let mut product: f64 = 1.0;
    let mut i = 2.0;
    while i <= n && product.is_finite() {
        product *= i;
        i += 1.0;
    }
    Ok(product)
}
