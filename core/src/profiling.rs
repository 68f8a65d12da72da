//! Profiling utilities for field serialization and query building
//!
//! This module provides integration with the puffin profiler when the
//! "profiling" feature is enabled. Without it the macros expand to nothing.

/// Generic profiling scope macro for high-level operation instrumentation.
#[macro_export]
macro_rules! apicalypse_profile_scope {
    ($category:literal, $operation:literal) => {
        #[cfg(feature = "profiling")]
        puffin::profile_scope!($category, $operation);
    };
}

/// Generic profiling function marker.
#[macro_export]
macro_rules! apicalypse_profile_function {
    () => {
        #[cfg(feature = "profiling")]
        puffin::profile_function!();
    };
}
