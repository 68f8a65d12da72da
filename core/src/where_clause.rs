//! Fluent construction of `where` clause text.
//!
//! [`WhereClauseBuilder`] starts an expression with one leaf comparison and
//! yields a [`WhereClause`], which then only grows to the right through
//! [`WhereClause::and`] and [`WhereClause::or`]:
//!
//! ```
//! use apicalypse_core::WhereClauseBuilder;
//!
//! let clause = WhereClauseBuilder::new()
//!     .contains_any_of("genres", [20, 30, 40])
//!     .and_with(|w| w.is_larger_than("likes", 20));
//!
//! assert_eq!(clause.build(), "genres = (20, 30, 40) & likes > 20");
//! ```
//!
//! [`WhereClause::and`] also takes a closure, but only one whose argument type
//! is written out; `and_with` and `or_with` infer it.

use core::fmt::{self, Display};

use crate::expr::{Combinator, Condition, Field};

/// Entry point of a where clause. Every leaf method starts the expression.
#[derive(Debug, Clone, Copy, Default)]
pub struct WhereClauseBuilder {
    _private: (),
}

macro_rules! unary_leaves {
    ($($(#[$doc:meta])* $name:ident;)*) => {
        $(
            $(#[$doc])*
            pub fn $name(self, field: impl Into<Field>) -> WhereClause {
                let field: Field = field.into();
                WhereClause::new(field.$name())
            }
        )*
    };
}

macro_rules! value_leaves {
    ($($(#[$doc:meta])* $name:ident;)*) => {
        $(
            $(#[$doc])*
            pub fn $name(self, field: impl Into<Field>, value: impl Display) -> WhereClause {
                let field: Field = field.into();
                WhereClause::new(field.$name(value))
            }
        )*
    };
}

macro_rules! list_leaves {
    ($($(#[$doc:meta])* $name:ident;)*) => {
        $(
            $(#[$doc])*
            pub fn $name<I>(self, field: impl Into<Field>, values: I) -> WhereClause
            where
                I: IntoIterator,
                I::Item: Display,
            {
                let field: Field = field.into();
                WhereClause::new(field.$name(values))
            }
        )*
    };
}

impl WhereClauseBuilder {
    pub const fn new() -> Self {
        Self { _private: () }
    }

    /// Starts the expression with an already built condition.
    pub fn condition(self, condition: Condition) -> WhereClause {
        WhereClause::new(condition)
    }

    unary_leaves! {
        /// `field = true`
        is_true;
        /// `field = false`
        is_false;
        /// `field = null`
        is_null;
        /// `field != null`
        is_not_null;
    }

    value_leaves! {
        /// `field = value`
        is_equal;
        /// `field != value`
        is_not_equal;
        /// `field > value`
        is_larger_than;
        /// `field >= value`
        is_larger_than_or_equal_to;
        /// `field < value`
        is_smaller_than;
        /// `field <= value`
        is_smaller_than_or_equal_to;
    }

    list_leaves! {
        /// `field = [v1, v2, ...]`
        contains_all_of;
        /// `field = ![v1, v2, ...]`
        does_not_contain_all_of;
        /// `field = (v1, v2, ...)`
        contains_any_of;
        /// `field = !(v1, v2, ...)`
        does_not_contain_any_of;
        /// `field = {v1, v2, ...}`
        contains_exclusively_all_of;
    }
}

/// Anything that can be joined onto a [`WhereClause`].
///
/// Implemented for plain conditions, finished where clauses, and closures that
/// build the right-hand side from a fresh [`WhereClauseBuilder`].
pub trait IntoCondition {
    fn into_condition(self) -> Condition;
}

impl IntoCondition for Condition {
    fn into_condition(self) -> Condition {
        self
    }
}

impl IntoCondition for WhereClause {
    fn into_condition(self) -> Condition {
        self.root
    }
}

impl<F> IntoCondition for F
where
    F: FnOnce(WhereClauseBuilder) -> WhereClause,
{
    fn into_condition(self) -> Condition {
        self(WhereClauseBuilder::new()).root
    }
}

/// A non-empty filter expression under construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WhereClause {
    root: Condition,
}

impl WhereClause {
    pub fn new(root: Condition) -> Self {
        Self { root }
    }

    /// Wraps the current expression and `right` with `&`.
    pub fn and(self, right: impl IntoCondition) -> Self {
        self.combine(Combinator::And, right)
    }

    /// Wraps the current expression and `right` with `|`.
    pub fn or(self, right: impl IntoCondition) -> Self {
        self.combine(Combinator::Or, right)
    }

    /// Builds the right-hand side from a fresh builder and joins it with `&`.
    pub fn and_with<F>(self, build: F) -> Self
    where
        F: FnOnce(WhereClauseBuilder) -> WhereClause,
    {
        self.and(build(WhereClauseBuilder::new()))
    }

    /// Builds the right-hand side from a fresh builder and joins it with `|`.
    pub fn or_with<F>(self, build: F) -> Self
    where
        F: FnOnce(WhereClauseBuilder) -> WhereClause,
    {
        self.or(build(WhereClauseBuilder::new()))
    }

    fn combine(self, op: Combinator, right: impl IntoCondition) -> Self {
        Self {
            root: self.root.combine(op, right.into_condition()),
        }
    }

    pub fn condition(&self) -> &Condition {
        &self.root
    }

    pub fn into_condition(self) -> Condition {
        self.root
    }

    /// Clause text without keyword or terminator.
    pub fn build(&self) -> String {
        self.root.render()
    }
}

impl From<Condition> for WhereClause {
    fn from(root: Condition) -> Self {
        Self::new(root)
    }
}

impl Display for WhereClause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.root, f)
    }
}
