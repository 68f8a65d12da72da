use core::fmt::{self, Display};
use core::ops::{BitAnd, BitOr};

use compact_str::CompactString;
use smallvec::SmallVec;

use crate::tokens::*;

// =============================================================================
// Operators
// =============================================================================

/// Comparison operator of a leaf predicate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operator {
    Equal,
    NotEqual,
    LargerThan,
    LargerThanOrEqual,
    SmallerThan,
    SmallerThanOrEqual,
    /// `field = [a, b]`
    ContainsAllOf,
    /// `field = ![a, b]`
    DoesNotContainAllOf,
    /// `field = (a, b)`
    ContainsAnyOf,
    /// `field = !(a, b)`
    DoesNotContainAnyOf,
    /// `field = {a, b}`
    ContainsExclusivelyAllOf,
}

impl Operator {
    /// Whether the operator takes a bracketed [`Operand::List`].
    pub const fn is_list(self) -> bool {
        matches!(
            self,
            Operator::ContainsAllOf
                | Operator::DoesNotContainAllOf
                | Operator::ContainsAnyOf
                | Operator::DoesNotContainAnyOf
                | Operator::ContainsExclusivelyAllOf
        )
    }

    /// The comparison token written between field and operand
    pub const fn token(self) -> &'static str {
        match self {
            Operator::NotEqual => "!=",
            Operator::LargerThan => ">",
            Operator::LargerThanOrEqual => ">=",
            Operator::SmallerThan => "<",
            Operator::SmallerThanOrEqual => "<=",
            Operator::Equal
            | Operator::ContainsAllOf
            | Operator::DoesNotContainAllOf
            | Operator::ContainsAnyOf
            | Operator::DoesNotContainAnyOf
            | Operator::ContainsExclusivelyAllOf => "=",
        }
    }

    /// Opening and closing delimiters of a list operand
    pub const fn delimiters(self) -> (&'static str, &'static str) {
        match self {
            Operator::ContainsAllOf => (ALL_OF_OPEN, ALL_OF_CLOSE),
            Operator::DoesNotContainAllOf => (NOT_ALL_OF_OPEN, ALL_OF_CLOSE),
            Operator::DoesNotContainAnyOf => (NOT_ANY_OF_OPEN, ANY_OF_CLOSE),
            Operator::ContainsExclusivelyAllOf => (EXACTLY_OPEN, EXACTLY_CLOSE),
            Operator::ContainsAnyOf
            | Operator::Equal
            | Operator::NotEqual
            | Operator::LargerThan
            | Operator::LargerThanOrEqual
            | Operator::SmallerThan
            | Operator::SmallerThanOrEqual => (ANY_OF_OPEN, ANY_OF_CLOSE),
        }
    }
}

/// Right-hand side of a leaf predicate. Values are rendered verbatim.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Operand {
    Value(CompactString),
    List(SmallVec<[CompactString; 4]>),
}

// =============================================================================
// Predicate
// =============================================================================

/// A single comparison: `field <operator> operand`.
///
/// List operators ([`Operator::is_list`]) pair with [`Operand::List`] and the
/// rest with [`Operand::Value`]. The leaf constructors on
/// [`Field`](super::Field) always produce that pairing; a hand-built
/// predicate that breaks it renders the operand without matching delimiters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Predicate {
    pub field: CompactString,
    pub operator: Operator,
    pub operand: Operand,
}

impl Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} ", self.field, self.operator.token())?;

        match &self.operand {
            Operand::Value(value) => f.write_str(value),
            Operand::List(values) => {
                let (open, close) = self.operator.delimiters();
                f.write_str(open)?;
                for (i, value) in values.iter().enumerate() {
                    if i > 0 {
                        f.write_str(VALUE_SEPARATOR)?;
                    }
                    f.write_str(value)?;
                }
                f.write_str(close)
            }
        }
    }
}

// =============================================================================
// Condition tree
// =============================================================================

/// Binary combinator joining two conditions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Combinator {
    And,
    Or,
}

impl Combinator {
    pub const fn token(self) -> &'static str {
        match self {
            Combinator::And => "&",
            Combinator::Or => "|",
        }
    }
}

/// A filter expression.
///
/// Every combination wraps the whole existing tree as `left`, so rendering
/// the tree in order reproduces the exact call sequence.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Condition {
    Leaf(Predicate),
    Combine {
        op: Combinator,
        left: Box<Condition>,
        right: Box<Condition>,
    },
}

impl Condition {
    /// Callers pick the operand kind that matches `operator`.
    pub(crate) fn leaf(
        field: impl Into<CompactString>,
        operator: Operator,
        operand: Operand,
    ) -> Self {
        Condition::Leaf(Predicate {
            field: field.into(),
            operator,
            operand,
        })
    }

    /// Joins `right` onto this expression with `&`.
    pub fn and(self, right: Condition) -> Self {
        self.combine(Combinator::And, right)
    }

    /// Joins `right` onto this expression with `|`.
    pub fn or(self, right: Condition) -> Self {
        self.combine(Combinator::Or, right)
    }

    pub fn combine(self, op: Combinator, right: Condition) -> Self {
        Condition::Combine {
            op,
            left: Box::new(self),
            right: Box::new(right),
        }
    }

    /// Leaf predicates in rendering order
    pub fn predicates(&self) -> Vec<&Predicate> {
        let mut out = Vec::new();
        self.collect_predicates(&mut out);
        out
    }

    fn collect_predicates<'a>(&'a self, out: &mut Vec<&'a Predicate>) {
        match self {
            Condition::Leaf(predicate) => out.push(predicate),
            Condition::Combine { left, right, .. } => {
                left.collect_predicates(out);
                right.collect_predicates(out);
            }
        }
    }

    /// Renders the expression into an owned string.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Condition::Leaf(predicate) => Display::fmt(predicate, f),
            Condition::Combine { op, left, right } => {
                write!(f, "{left} {} {right}", op.token())
            }
        }
    }
}

impl From<Predicate> for Condition {
    fn from(predicate: Predicate) -> Self {
        Condition::Leaf(predicate)
    }
}

/// `a & b` is `a.and(b)`.
///
/// Rust binds `&` tighter than `|`, so `a | b & c` builds `a | (b & c)`. The
/// rendered text is still `a | b & c` because no grouping is ever emitted.
impl BitAnd for Condition {
    type Output = Condition;

    fn bitand(self, rhs: Condition) -> Self::Output {
        self.and(rhs)
    }
}

/// `a | b` is `a.or(b)`.
impl BitOr for Condition {
    type Output = Condition;

    fn bitor(self, rhs: Condition) -> Self::Output {
        self.or(rhs)
    }
}
