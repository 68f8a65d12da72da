//! Core building blocks for Apicalypse queries.
//!
//! The pipeline: a [`Shape`] declares its queryable fields, the
//! [`MetadataRegistry`] validates and caches that declaration once per shape,
//! the [`FieldSerializer`] expands it into dotted field paths, and the
//! [`ApicalypseQueryBuilder`] assembles the final request string together with
//! an optional filter built through [`WhereClauseBuilder`].

pub mod builder;
pub mod error;
pub mod expr;
pub mod metadata;
pub mod profiling;
pub mod serializer;
pub mod shape;
pub mod tokens;
pub mod tracing;
pub mod where_clause;

// Re-export key types and traits
pub use builder::{ApicalypseQueryBuilder, FieldSelection, QueryClause, SortDirection};
pub use error::{ApicalypseError, Result};
pub use expr::{Combinator, Condition, Field, FieldExt, Operand, Operator, Predicate};
pub use metadata::{EntityMetadata, FieldKind, FieldSpec, MetadataRegistry};
pub use serializer::{FieldSerializer, serialize};
pub use shape::{FieldDecl, FieldType, Shape, ShapeRef};
pub use where_clause::{IntoCondition, WhereClause, WhereClauseBuilder};
