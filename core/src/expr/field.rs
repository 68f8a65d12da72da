use core::fmt::Display;

use compact_str::{CompactString, ToCompactString};

use super::condition::{Condition, Operand, Operator};
use crate::tokens::{FALSE, NULL, TRUE};

/// A field name that leaf conditions are built from.
///
/// The name is written first and verbatim; it is never path-expanded.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Field(CompactString);

impl Field {
    pub fn new(name: impl Into<CompactString>) -> Self {
        Self(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }

    fn value(self, operator: Operator, value: impl Display) -> Condition {
        Condition::leaf(self.0, operator, Operand::Value(value.to_compact_string()))
    }

    fn list<I>(self, operator: Operator, values: I) -> Condition
    where
        I: IntoIterator,
        I::Item: Display,
    {
        let values = values.into_iter().map(|v| v.to_compact_string()).collect();
        Condition::leaf(self.0, operator, Operand::List(values))
    }

    /// `field = true`
    pub fn is_true(self) -> Condition {
        self.value(Operator::Equal, TRUE)
    }

    /// `field = false`
    pub fn is_false(self) -> Condition {
        self.value(Operator::Equal, FALSE)
    }

    /// `field = null`
    pub fn is_null(self) -> Condition {
        self.value(Operator::Equal, NULL)
    }

    /// `field != null`
    pub fn is_not_null(self) -> Condition {
        self.value(Operator::NotEqual, NULL)
    }

    /// `field = value`
    pub fn is_equal(self, value: impl Display) -> Condition {
        self.value(Operator::Equal, value)
    }

    /// `field != value`
    pub fn is_not_equal(self, value: impl Display) -> Condition {
        self.value(Operator::NotEqual, value)
    }

    /// `field > value`
    pub fn is_larger_than(self, value: impl Display) -> Condition {
        self.value(Operator::LargerThan, value)
    }

    /// `field >= value`
    pub fn is_larger_than_or_equal_to(self, value: impl Display) -> Condition {
        self.value(Operator::LargerThanOrEqual, value)
    }

    /// `field < value`
    pub fn is_smaller_than(self, value: impl Display) -> Condition {
        self.value(Operator::SmallerThan, value)
    }

    /// `field <= value`
    pub fn is_smaller_than_or_equal_to(self, value: impl Display) -> Condition {
        self.value(Operator::SmallerThanOrEqual, value)
    }

    /// `field = [v1, v2, ...]`
    pub fn contains_all_of<I>(self, values: I) -> Condition
    where
        I: IntoIterator,
        I::Item: Display,
    {
        self.list(Operator::ContainsAllOf, values)
    }

    /// `field = ![v1, v2, ...]`
    pub fn does_not_contain_all_of<I>(self, values: I) -> Condition
    where
        I: IntoIterator,
        I::Item: Display,
    {
        self.list(Operator::DoesNotContainAllOf, values)
    }

    /// `field = (v1, v2, ...)`
    pub fn contains_any_of<I>(self, values: I) -> Condition
    where
        I: IntoIterator,
        I::Item: Display,
    {
        self.list(Operator::ContainsAnyOf, values)
    }

    /// `field = !(v1, v2, ...)`
    pub fn does_not_contain_any_of<I>(self, values: I) -> Condition
    where
        I: IntoIterator,
        I::Item: Display,
    {
        self.list(Operator::DoesNotContainAnyOf, values)
    }

    /// `field = {v1, v2, ...}`
    pub fn contains_exclusively_all_of<I>(self, values: I) -> Condition
    where
        I: IntoIterator,
        I::Item: Display,
    {
        self.list(Operator::ContainsExclusivelyAllOf, values)
    }
}

impl From<&str> for Field {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Field {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}

/// Builds leaf conditions straight from a field name.
///
/// ```
/// use apicalypse_core::FieldExt;
///
/// assert_eq!("isLiked".is_true().to_string(), "isLiked = true");
/// assert_eq!("likes".is_larger_than(20).to_string(), "likes > 20");
/// ```
pub trait FieldExt {
    fn field(&self) -> Field;

    fn is_true(&self) -> Condition {
        self.field().is_true()
    }

    fn is_false(&self) -> Condition {
        self.field().is_false()
    }

    fn is_null(&self) -> Condition {
        self.field().is_null()
    }

    fn is_not_null(&self) -> Condition {
        self.field().is_not_null()
    }

    fn is_equal(&self, value: impl Display) -> Condition {
        self.field().is_equal(value)
    }

    fn is_not_equal(&self, value: impl Display) -> Condition {
        self.field().is_not_equal(value)
    }

    fn is_larger_than(&self, value: impl Display) -> Condition {
        self.field().is_larger_than(value)
    }

    fn is_larger_than_or_equal_to(&self, value: impl Display) -> Condition {
        self.field().is_larger_than_or_equal_to(value)
    }

    fn is_smaller_than(&self, value: impl Display) -> Condition {
        self.field().is_smaller_than(value)
    }

    fn is_smaller_than_or_equal_to(&self, value: impl Display) -> Condition {
        self.field().is_smaller_than_or_equal_to(value)
    }

    fn contains_all_of<I>(&self, values: I) -> Condition
    where
        I: IntoIterator,
        I::Item: Display,
    {
        self.field().contains_all_of(values)
    }

    fn does_not_contain_all_of<I>(&self, values: I) -> Condition
    where
        I: IntoIterator,
        I::Item: Display,
    {
        self.field().does_not_contain_all_of(values)
    }

    fn contains_any_of<I>(&self, values: I) -> Condition
    where
        I: IntoIterator,
        I::Item: Display,
    {
        self.field().contains_any_of(values)
    }

    fn does_not_contain_any_of<I>(&self, values: I) -> Condition
    where
        I: IntoIterator,
        I::Item: Display,
    {
        self.field().does_not_contain_any_of(values)
    }

    fn contains_exclusively_all_of<I>(&self, values: I) -> Condition
    where
        I: IntoIterator,
        I::Item: Display,
    {
        self.field().contains_exclusively_all_of(values)
    }
}

impl FieldExt for str {
    fn field(&self) -> Field {
        Field::new(self)
    }
}

impl FieldExt for String {
    fn field(&self) -> Field {
        Field::new(self.as_str())
    }
}
