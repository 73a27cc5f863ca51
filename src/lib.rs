#![warn(clippy::disallowed_types)]

pub use error::{Error, MalformedReason, Result};
pub use eval::evaluate;
pub use postfix::{to_postfix, Postfix, PostfixToken};
pub use symbols::*;
pub use truth_table::{Assignment, ResultFilter, Row, TruthTable};
pub use variables::extract;

pub mod lexer;
pub mod table_io;

mod error;
mod eval;
mod postfix;
mod symbols;
mod truth_table;
mod variables;
