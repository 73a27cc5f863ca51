use crate::error::{Error, MalformedReason, Result};
use crate::postfix::PostfixToken;
use crate::symbols::Operator;

/// Evaluates a postfix token sequence to a single bit.
///
/// Binary operators pop their second operand first. The evaluation fails when an
/// operator lacks operands or when anything other than exactly one value is
/// left at the end.
pub fn evaluate(postfix: &[PostfixToken]) -> Result<bool> {
    let mut stack: Vec<bool> = Vec::with_capacity(postfix.len());

    for token in postfix {
        match *token {
            PostfixToken::Bit(b) => stack.push(b),
            PostfixToken::Operator(Operator::Not) => {
                let operand = pop(&mut stack, Operator::Not)?;
                stack.push(!operand);
            }
            PostfixToken::Operator(Operator::And) => {
                binary(&mut stack, Operator::And, |a, b| a & b)?
            }
            PostfixToken::Operator(Operator::Xor) => {
                binary(&mut stack, Operator::Xor, |a, b| a ^ b)?
            }
            PostfixToken::Operator(Operator::Or) => {
                binary(&mut stack, Operator::Or, |a, b| a | b)?
            }
        }
    }

    match stack.as_slice() {
        [result] => Ok(*result),
        [] => Err(Error::malformed(MalformedReason::NoResult)),
        rest => Err(Error::malformed(MalformedReason::ResidualValues(
            rest.len(),
        ))),
    }
}

/// Pops `operand2`, then `operand1`, and pushes `f(operand1, operand2)`.
fn binary(stack: &mut Vec<bool>, op: Operator, f: fn(bool, bool) -> bool) -> Result<()> {
    let operand2 = pop(stack, op)?;
    let operand1 = pop(stack, op)?;
    stack.push(f(operand1, operand2));
    Ok(())
}

fn pop(stack: &mut Vec<bool>, op: Operator) -> Result<bool> {
    stack
        .pop()
        .ok_or(Error::malformed(MalformedReason::MissingOperand(op)))
}
