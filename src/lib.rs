//! # Apicalypse for Rust
//!
//! A query builder and field serializer for the Apicalypse query language used
//! by the IGDB game-catalog API.
//!
//! ## Quick Start
//!
//! ```rust
//! use apicalypse::prelude::*;
//!
//! #[derive(Apicalypse)]
//! struct Cover {
//!     #[apicalypse(name = "image_id")]
//!     image_id: String,
//! }
//!
//! #[derive(Apicalypse)]
//! struct Game {
//!     #[apicalypse(name = "id")]
//!     id: u64,
//!     #[apicalypse(name = "name")]
//!     name: String,
//!     #[apicalypse(name = "cover", nested)]
//!     cover: Option<Cover>,
//! }
//!
//! # fn main() -> apicalypse::Result<()> {
//! let query = ApicalypseQueryBuilder::new()
//!     .select_shape::<Game>()?
//!     .r#where(|w| {
//!         w.contains_any_of("genres", [12, 31])
//!             .and("rating".field().is_not_null())
//!     })
//!     .limit(10)
//!     .sort_desc("rating")
//!     .build();
//!
//! assert_eq!(
//!     query,
//!     "fields id, name, cover.image_id;where genres = (12, 31) & rating != null;\
//!      limit 10;sort rating desc;"
//! );
//! # Ok(())
//! # }
//! ```
//!
//! ## Features
//!
//! | Feature     | Default | Description                                          |
//! |-------------|---------|------------------------------------------------------|
//! | `std`       | yes     | Standard library support                             |
//! | `tracing`   | yes     | Debug events for built queries and shape metadata    |
//! | `profiling` | no      | puffin scopes around serialization and query building |
//! | `igdb`      | no      | Game-catalog shapes and canned queries               |

#![cfg_attr(docsrs, feature(doc_cfg))]

// =============================================================================
// Root-level exports
// =============================================================================

/// Result type for query construction
pub use apicalypse_core::error::Result;

/// Derive macro for query shapes
pub use apicalypse_macros::Apicalypse;

/// Query builders
pub use apicalypse_core::{ApicalypseQueryBuilder, WhereClause, WhereClauseBuilder};

/// Error types
pub mod error {
    pub use apicalypse_core::error::ApicalypseError;
}

// =============================================================================
// Core module - shared functionality
// =============================================================================

/// Core types and traits.
///
/// # Module Structure
///
/// - **Shapes**: `Shape`, `ShapeRef`, `FieldDecl`, `FieldType`
/// - **Metadata**: `MetadataRegistry`, `EntityMetadata`, `FieldSpec`, `FieldKind`
/// - **Serialization**: `FieldSerializer`, `serialize`
/// - **Conditions**: `Field`, `FieldExt`, `Condition`, `Predicate`, `Operator`
/// - **Queries**: `ApicalypseQueryBuilder`, `WhereClauseBuilder`, `QueryClause`
pub mod core {
    /// Shape declarations, also used by `#[derive(Apicalypse)]` output
    pub use apicalypse_core::{FieldDecl, FieldType, Shape, ShapeRef};

    /// Validated metadata cache
    pub use apicalypse_core::{EntityMetadata, FieldKind, FieldSpec, MetadataRegistry};

    /// Field path serialization
    pub use apicalypse_core::{FieldSerializer, serialize};

    /// Comparison and logical conditions
    pub use apicalypse_core::expr;
    pub use apicalypse_core::{
        Combinator, Condition, Field, FieldExt, Operand, Operator, Predicate,
    };

    /// Query assembly
    pub use apicalypse_core::{
        ApicalypseQueryBuilder, FieldSelection, IntoCondition, QueryClause, SortDirection,
        WhereClause, WhereClauseBuilder,
    };

    /// Keywords and delimiters of the query language
    pub use apicalypse_core::tokens;
}

// =============================================================================
// Game catalog
// =============================================================================

/// Game-catalog shapes, query windows, and canned queries.
#[cfg(feature = "igdb")]
#[cfg_attr(docsrs, doc(cfg(feature = "igdb")))]
pub use apicalypse_igdb as igdb;

/// Prelude - import this for shape declarations and query building.
pub mod prelude {
    pub use apicalypse_macros::Apicalypse;

    pub use crate::core::{
        ApicalypseQueryBuilder, Condition, Field, FieldExt, IntoCondition, Shape, SortDirection,
        WhereClause, WhereClauseBuilder,
    };
}
