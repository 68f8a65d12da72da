//! Tracing utilities for query construction observability.
//!
//! Enable the `tracing` feature to emit events via the `tracing` crate.
//! These macros no-op when the feature is disabled, avoiding `#[cfg]` boilerplate
//! at every call site.

/// Emit a debug-level tracing event with the built query text and its length.
///
/// ```ignore
/// apicalypse_trace_query!(&query);
/// ```
#[macro_export]
macro_rules! apicalypse_trace_query {
    ($query:expr) => {
        #[cfg(feature = "tracing")]
        tracing::debug!(query = %$query, len = $query.len(), "apicalypse.query");
    };
}

/// Emit a debug-level tracing event for shape metadata resolution.
///
/// ```ignore
/// apicalypse_trace_metadata!(shape.name(), fields.len(), "computed");
/// apicalypse_trace_metadata!(shape.name(), 0, "rejected");
/// ```
#[macro_export]
macro_rules! apicalypse_trace_metadata {
    ($shape:expr, $fields:expr, $event:literal) => {
        #[cfg(feature = "tracing")]
        tracing::debug!(
            shape = $shape,
            fields = $fields,
            event = $event,
            "apicalypse.metadata"
        );
    };
}
