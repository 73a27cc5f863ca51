use crate::error::{Error, Result};
use crate::symbols::{Operator, Variable};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref TOKENIZER: Regex = Regex::new(
        r"(?P<variable>\p{Alphabetic})|(?P<bit>[01])|(?P<open>\()|(?P<close>\))|(?P<other>(?s:.))"
    )
    .expect("tokenizer pattern is valid");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    Variable(Variable),
    Bit(bool),
    Operator(Operator),
    OpenParen,
    CloseParen,
}

/// A token together with its character index in the source string.
pub type Spanned = (usize, Token);

/// Splits `src` into single-character tokens.
///
/// Every character maps to exactly one token, so the returned positions are
/// character indices. Whitespace and any other unknown character fail with
/// [`Error::InvalidCharacter`].
pub fn tokenize(src: &str) -> Result<Vec<Spanned>> {
    let mut result = Vec::with_capacity(src.len());

    for (position, c) in TOKENIZER.captures_iter(src).enumerate() {
        let token = if let Some(variable) = c.name("variable") {
            Token::Variable(Variable(first_char(variable.as_str())))
        } else if let Some(bit) = c.name("bit") {
            Token::Bit(bit.as_str() == "1")
        } else if c.name("open").is_some() {
            Token::OpenParen
        } else if c.name("close").is_some() {
            Token::CloseParen
        } else {
            // operators and anything unknown
            let character = c.get(0).map_or('\0', |m| first_char(m.as_str()));
            match Operator::from_symbol(character) {
                Some(op) => Token::Operator(op),
                None => {
                    return Err(Error::InvalidCharacter {
                        character,
                        position,
                    })
                }
            }
        };

        result.push((position, token));
    }

    Ok(result)
}

fn first_char(s: &str) -> char {
    s.chars().next().unwrap_or('\0')
}
