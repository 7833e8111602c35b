use log::{debug, trace};
use logos::Logos;

use crate::{
    error::{ParseError, ParseResult},
    interpreter::evaluator::function::Function,
    item::Item,
};

/// Represents a raw lexical token in the source input.
///
/// The raw lexer only splits the text: each of the seven separator
/// characters is a token of its own, and every maximal run of other
/// characters is a [`RawToken::Word`]. Deciding what a word means, and whether
/// a `-` is a sign or a subtraction, is left to [`tokenize`].
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
pub enum RawToken {
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `,`
    #[token(",")]
    Comma,
    /// A run of non-separator characters: a number, a variable, a keyword,
    /// or surrounding whitespace.
    #[regex(r"[^+\-*/(),]+")]
    Word,
}

/// Converts source text into a sequence of items.
///
/// Words are trimmed and lower-cased before classification, whitespace-only
/// words are ignored, and skip markers produced by a redundant `+` are
/// dropped from the result.
///
/// # Errors
/// Returns `ParseError::UnrecognizedToken` for the first word that is neither
/// a keyword, a variable nor a decimal numeral.
///
/// # Example
/// ```
/// use exprcalc::{interpreter::lexer::tokenize, item::Item};
///
/// let items = tokenize("-x0 + 2").unwrap();
/// assert_eq!(items, vec![Item::Sign, Item::Var(0), Item::Add, Item::Const(2.0)]);
///
/// assert!(tokenize("abc123").is_err());
/// ```
pub fn tokenize(source: &str) -> ParseResult<Vec<Item>> {
    let mut items = Vec::new();
    let mut previous: Option<Item> = None;
    let mut lexer = RawToken::lexer(source);

    while let Some(token) = lexer.next() {
        let slice = lexer.slice();
        let word = slice.trim();
        if word.is_empty() {
            continue;
        }
        let position = lexer.span().start + (slice.len() - slice.trim_start().len());
        let word = word.to_lowercase();

        let item = match token {
            Ok(token) => classify_token(token, &word, previous.as_ref(), position)?,
            Err(()) => return Err(unrecognized(&word, position)),
        };
        trace!("{position}: '{word}' -> {item:?}");

        if item != Item::Skip {
            items.push(item);
            previous = Some(item);
        }
    }

    debug!("tokenized {} item(s): {items:?}", items.len());
    Ok(items)
}

/// Classifies a single token given the item that precedes it.
///
/// The text is trimmed and lower-cased first. Separators are resolved with
/// the sign-position rule of [`Item::is_sign_position`]; anything else is
/// looked up as a keyword, then as a variable `xN`, then parsed as a decimal
/// numeral. A `,` inside a numeral is accepted as the decimal separator.
///
/// # Errors
/// Returns `ParseError::UnrecognizedToken` if the text matches nothing.
///
/// # Example
/// ```
/// use exprcalc::{interpreter::lexer::classify, item::Item};
///
/// assert_eq!(classify("+", Some(&Item::Const(23.0))).unwrap(), Item::Add);
/// assert_eq!(classify("+", None).unwrap(), Item::Skip);
/// assert_eq!(classify("-", None).unwrap(), Item::Sign);
/// assert_eq!(classify("X12", None).unwrap(), Item::Var(12));
/// assert_eq!(classify("123,45", None).unwrap(), Item::Const(123.45));
/// assert!(classify("abc", None).is_err());
/// ```
pub fn classify(text: &str, previous: Option<&Item>) -> ParseResult<Item> {
    let word = text.trim().to_lowercase();
    let token = match word.as_str() {
        "+" => RawToken::Plus,
        "-" => RawToken::Minus,
        "*" => RawToken::Star,
        "/" => RawToken::Slash,
        "(" => RawToken::LParen,
        ")" => RawToken::RParen,
        "," => RawToken::Comma,
        _ => RawToken::Word,
    };
    classify_token(token, &word, previous, 0)
}

/// Renders items in their canonical form, separated by single spaces.
///
/// # Example
/// ```
/// use exprcalc::interpreter::lexer::{render, tokenize};
///
/// let items = tokenize("SQRT(x0+1.50)").unwrap();
/// assert_eq!(render(&items), "Sqrt ( X0 + 1.5 )");
/// assert_eq!(render(&[]), "");
/// ```
#[must_use]
pub fn render(items: &[Item]) -> String {
    items.iter()
         .filter(|item| **item != Item::Skip)
         .map(ToString::to_string)
         .collect::<Vec<_>>()
         .join(" ")
}

fn classify_token(token: RawToken,
                  word: &str,
                  previous: Option<&Item>,
                  position: usize)
                  -> ParseResult<Item> {
    let item = match token {
        RawToken::Plus if Item::is_sign_position(previous) => Item::Skip,
        RawToken::Plus => Item::Add,
        RawToken::Minus if Item::is_sign_position(previous) => Item::Sign,
        RawToken::Minus => Item::Sub,
        RawToken::Star => Item::Mul,
        RawToken::Slash => Item::Div,
        RawToken::LParen => Item::LeftParen,
        RawToken::RParen => Item::RightParen,
        RawToken::Comma => Item::Comma,
        RawToken::Word => return classify_word(word, position),
    };
    Ok(item)
}

/// Resolves a lower-cased word to a function, a variable or a constant.
fn classify_word(word: &str, position: usize) -> ParseResult<Item> {
    if let Some(function) = Function::from_keyword(word) {
        return Ok(Item::function(function));
    }

    if let Some(suffix) = word.strip_prefix('x')
       && let Ok(index) = suffix.parse::<usize>()
    {
        return Ok(Item::Var(index));
    }

    parse_decimal(word).map(Item::Const)
                       .ok_or_else(|| unrecognized(word, position))
}

/// Parses a decimal numeral such as `12`, `0.5`, `.5`, `1e3` or `1,5`.
///
/// The numeral must begin with a digit or a decimal separator, which keeps
/// words like `inf` or `nan` out. Numerals too large for an `f64` (`1e400`)
/// are rejected rather than read as infinity.
fn parse_decimal(word: &str) -> Option<f64> {
    let first = word.chars().next()?;
    if !(first.is_ascii_digit() || first == '.' || first == ',') {
        return None;
    }
    word.replace(',', ".")
        .parse()
        .ok()
        .filter(|value: &f64| value.is_finite())
}

fn unrecognized(word: &str, position: usize) -> ParseError {
    ParseError::UnrecognizedToken { token: word.to_string(),
                                    position }
}
