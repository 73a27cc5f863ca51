use crate::error::{Error, MalformedReason, Result};
use crate::lexer::{tokenize, Token};
use crate::symbols::{bit_char, Operator};
use log::trace;
use std::fmt;
use std::ops::Deref;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostfixToken {
    Bit(bool),
    Operator(Operator),
}

impl PostfixToken {
    pub const fn symbol(self) -> char {
        match self {
            Self::Bit(b) => bit_char(b),
            Self::Operator(op) => op.symbol(),
        }
    }
}

/// An expression over literal bits in reverse polish notation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Postfix(Vec<PostfixToken>);

impl Postfix {
    pub fn tokens(&self) -> &[PostfixToken] {
        &self.0
    }
}

impl Deref for Postfix {
    type Target = [PostfixToken];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Vec<PostfixToken>> for Postfix {
    fn from(tokens: Vec<PostfixToken>) -> Self {
        Self(tokens)
    }
}

impl fmt::Display for Postfix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.iter().try_for_each(|t| write!(f, "{}", t.symbol()))
    }
}

impl FromStr for Postfix {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        s.chars()
            .map(|c| match c {
                '0' => Ok(PostfixToken::Bit(false)),
                '1' => Ok(PostfixToken::Bit(true)),
                c => Operator::from_symbol(c)
                    .map(PostfixToken::Operator)
                    .ok_or(Error::malformed(MalformedReason::UnknownToken(c))),
            })
            .collect::<Result<Vec<_>>>()
            .map(Self)
    }
}

#[derive(Debug, Clone, Copy)]
enum StackEntry {
    // position of the '(' in the source, reported if it is never closed
    OpenParen(usize),
    Operator(Operator),
}

/// Converts a fully substituted infix expression into postfix order.
///
/// The input may only contain `0`, `1`, operators and parentheses; a variable
/// letter that was not substituted is reported as an invalid character.
/// `!` is pushed without comparing precedence, binary operators are left
/// associative. A trailing `!` is therefore still applied to the operand before
/// it: `1!` converts to the same postfix as `!1`.
pub fn to_postfix(expr: &str) -> Result<Postfix> {
    let mut stack: Vec<StackEntry> = Vec::new();
    let mut output: Vec<PostfixToken> = Vec::with_capacity(expr.len());

    for (position, token) in tokenize(expr)? {
        match token {
            Token::Bit(b) => output.push(PostfixToken::Bit(b)),
            Token::Variable(v) => {
                return Err(Error::InvalidCharacter {
                    character: v.name(),
                    position,
                })
            }
            Token::OpenParen => stack.push(StackEntry::OpenParen(position)),
            Token::CloseParen => loop {
                match stack.pop() {
                    Some(StackEntry::Operator(op)) => output.push(PostfixToken::Operator(op)),
                    Some(StackEntry::OpenParen(_)) => break,
                    None => return Err(Error::UnbalancedParenthesis { position }),
                }
            },
            Token::Operator(op) if op.is_unary() => stack.push(StackEntry::Operator(op)),
            Token::Operator(op) => {
                while let Some(&StackEntry::Operator(top)) = stack.last() {
                    if top.precedence() < op.precedence() {
                        break;
                    }
                    stack.pop();
                    output.push(PostfixToken::Operator(top));
                }
                stack.push(StackEntry::Operator(op));
            }
        }
    }

    while let Some(entry) = stack.pop() {
        match entry {
            StackEntry::Operator(op) => output.push(PostfixToken::Operator(op)),
            StackEntry::OpenParen(position) => {
                return Err(Error::UnbalancedParenthesis { position })
            }
        }
    }

    let postfix = Postfix(output);
    trace!("postfix of {expr}: {postfix}");

    Ok(postfix)
}
