/// The lexer module turns source text into items.
///
/// Raw splitting on the separator characters is done by a `logos` lexer;
/// each word is then classified as a keyword, a variable or a numeral, and
/// every `+`/`-` is resolved to a binary operator, a sign or a skip marker
/// depending on the item before it.
///
/// # Responsibilities
/// - Splits the input on `+ - * / ( ) ,` and classifies the words between.
/// - Disambiguates unary and binary minus.
/// - Renders items back to their canonical text.
pub mod lexer;
/// The validator module checks an item sequence against the grammar.
///
/// It is a recursive-descent recognizer that threads an explicit position
/// through its rules and builds no output.
pub mod validator;
/// The postfix module reorders validated items with the shunting-yard
/// algorithm.
pub mod postfix;
/// The evaluator module reduces a postfix sequence over a value stack.
///
/// # Responsibilities
/// - Resolves variables against caller-supplied values.
/// - Applies operators and built-in functions.
/// - Reports stack and domain errors as evaluation errors.
pub mod evaluator;
