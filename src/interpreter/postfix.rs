use log::trace;

use crate::item::Item;

/// Reorders a validated infix item sequence into postfix order.
///
/// This is the shunting-yard algorithm driven by [`Item::priority`]:
///
/// - Constants and variables go straight to the output.
/// - Signs, functions and `(` are always pushed; they bind to the next
///   completed argument.
/// - A binary operator first pops every stacked item whose priority is less
///   than or equal to its own, so operators of equal priority associate to
///   the left (`5 - 3 - 1` is `(5 - 3) - 1`).
/// - `)` pops down to the matching `(` and discards it.
/// - `,` pops down to, but not including, the enclosing `(`, so every
///   function argument is converted on its own. The comma itself is never
///   emitted.
/// - Whatever remains on the stack at the end is popped to the output.
///
/// The input is expected to have passed [`validate`](super::validator::validate);
/// an unmatched `)` is tolerated silently.
///
/// # Example
/// ```
/// use exprcalc::interpreter::{
///     lexer::{render, tokenize},
///     postfix::to_postfix,
/// };
///
/// let postfix = to_postfix(&tokenize("1 + 2 * 3").unwrap());
/// assert_eq!(render(&postfix), "1 2 3 * +");
///
/// let postfix = to_postfix(&tokenize("pow(1 + 1, 3)").unwrap());
/// assert_eq!(render(&postfix), "1 1 + 3 Pow");
/// ```
#[must_use]
pub fn to_postfix(items: &[Item]) -> Vec<Item> {
    let mut output = Vec::with_capacity(items.len());
    let mut stack: Vec<Item> = Vec::new();

    for &item in items {
        match item {
            Item::Const(_) | Item::Var(_) => output.push(item),
            Item::Sign | Item::Func { .. } | Item::LeftParen => stack.push(item),
            Item::Add | Item::Sub | Item::Mul | Item::Div => {
                while let Some(&top) = stack.last()
                      && top.priority() <= item.priority()
                {
                    output.push(top);
                    stack.pop();
                }
                stack.push(item);
            },
            Item::RightParen => {
                pop_to_left_paren(&mut stack, &mut output);
                stack.pop();
            },
            Item::Comma => pop_to_left_paren(&mut stack, &mut output),
            Item::Skip => {},
        }
    }

    while let Some(top) = stack.pop() {
        output.push(top);
    }

    trace!("postfix: {output:?}");
    output
}

/// Moves stacked items to the output until a `(` is on top or the stack is
/// empty. The `(` itself stays on the stack.
fn pop_to_left_paren(stack: &mut Vec<Item>, output: &mut Vec<Item>) {
    while let Some(&top) = stack.last()
          && top != Item::LeftParen
    {
        output.push(top);
        stack.pop();
    }
}
