//! Filter expressions for `where` clauses.
//!
//! Leaves compare one field against a value or a list of values; the
//! combinators join an existing expression with one more on the right:
//!
//! ```
//! use apicalypse_core::FieldExt;
//!
//! let condition = "genres".contains_any_of([20, 30, 40]) & "likes".is_larger_than(20);
//! assert_eq!(condition.to_string(), "genres = (20, 30, 40) & likes > 20");
//! ```
//!
//! Combination is strictly in call order. No parentheses are ever emitted and
//! no precedence between `&` and `|` is applied, so the rendered text is
//! always the leaves joined by the combinator tokens in the order the
//! combinators were invoked.

mod condition;
mod field;

pub use condition::{Combinator, Condition, Operand, Operator, Predicate};
pub use field::{Field, FieldExt};
