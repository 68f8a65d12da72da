use compact_str::CompactString;
use thiserror::Error;

/// Errors raised while resolving shape declarations.
///
/// Every variant is a configuration mistake in a shape declaration. They are
/// reported the first time metadata for the offending shape is requested and
/// are never cached, so a broken shape fails on every request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApicalypseError {
    /// The shape declares no queryable fields at all
    #[error("Shape `{shape}` does not declare any queryable fields")]
    MissingDeclarations { shape: &'static str },

    /// A declared field exposes an empty or whitespace-only name
    #[error("Field #{index} of shape `{shape}` has a blank query name")]
    BlankFieldName { shape: &'static str, index: usize },

    /// A field is a collection of nested shapes, which has no unambiguous path
    #[error("Field `{field}` of shape `{shape}` is a collection of nested shapes")]
    NestedCollection {
        shape: &'static str,
        field: &'static str,
    },

    /// A shape nests itself, directly or through other shapes
    #[error("Shape nesting never terminates: {path}")]
    RecursiveShape { path: CompactString },
}

/// Result type for shape resolution and serialization
pub type Result<T> = std::result::Result<T, ApicalypseError>;
